//! Distanz-Einheiten für die Längenanzeige.

use crate::shared::InfoControlError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unterstützte Distanz-Einheiten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Meilen (Abkürzung `mi`)
    Miles,
    /// Kilometer (Abkürzung `km`)
    #[default]
    Kilometers,
}

impl DistanceUnit {
    /// Meter pro Einheit.
    pub fn meters(self) -> f64 {
        match self {
            DistanceUnit::Miles => 1609.344,
            DistanceUnit::Kilometers => 1000.0,
        }
    }

    /// Abkürzung für die Textanzeige.
    pub fn abbreviation(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "mi",
            DistanceUnit::Kilometers => "km",
        }
    }

    /// Konfigurationsname (`miles` / `kilometers`).
    pub fn name(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "miles",
            DistanceUnit::Kilometers => "kilometers",
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = InfoControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "miles" => Ok(DistanceUnit::Miles),
            "kilometers" => Ok(DistanceUnit::Kilometers),
            other => Err(InfoControlError::UnsupportedUnit(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abkuerzungen() {
        assert_eq!(DistanceUnit::Miles.abbreviation(), "mi");
        assert_eq!(DistanceUnit::Kilometers.abbreviation(), "km");
        assert_eq!(DistanceUnit::default(), DistanceUnit::Kilometers);
    }

    #[test]
    fn test_unbekannte_einheit_wird_abgelehnt() {
        assert_eq!("miles".parse::<DistanceUnit>().ok(), Some(DistanceUnit::Miles));
        let err = "furlongs".parse::<DistanceUnit>().expect_err("muss abgelehnt werden");
        assert!(matches!(err, InfoControlError::UnsupportedUnit(ref unit) if unit == "furlongs"));
    }
}
