//! Zentrale Konfiguration der Info-Controls.
//!
//! `ControlOptions` wird beim Einhängen des Controls festgelegt. Ungültige Werte
//! (z.B. unbekannte Einheiten) werden beim Laden abgelehnt, nicht erst bei der Anzeige.

use super::InfoControlError;
use crate::core::DistanceUnit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Anzeige ─────────────────────────────────────────────────────────

/// Fallback-Name für Features ohne Namen.
pub const UNTITLED_NAME: &str = "Untitled";
/// Präfix der Anzeige für zwei Linien.
pub const MULTIPLE_LINES_PREFIX: &str = "Multiple lines: ";
/// Abstand des Overlays zum Bildschirmrand in Pixeln.
pub const CONTROL_MARGIN_PX: f32 = 10.0;
/// Dateiname der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "feature_info_controls.toml";

/// Bildschirmecke, an der das Overlay verankert ist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlPosition {
    /// Oben links
    TopLeft,
    /// Oben rechts (Standard)
    #[default]
    TopRight,
    /// Unten links
    BottomLeft,
    /// Unten rechts
    BottomRight,
}

impl ControlPosition {
    /// Ausrichtung für egui-Fenster-Anker.
    pub fn align(self) -> egui::Align2 {
        match self {
            ControlPosition::TopLeft => egui::Align2::LEFT_TOP,
            ControlPosition::TopRight => egui::Align2::RIGHT_TOP,
            ControlPosition::BottomLeft => egui::Align2::LEFT_BOTTOM,
            ControlPosition::BottomRight => egui::Align2::RIGHT_BOTTOM,
        }
    }

    /// Anker-Offset (Pixel) vom Bildschirmrand nach innen.
    pub fn offset(self, margin: f32) -> egui::Vec2 {
        match self {
            ControlPosition::TopLeft => egui::vec2(margin, margin),
            ControlPosition::TopRight => egui::vec2(-margin, margin),
            ControlPosition::BottomLeft => egui::vec2(margin, -margin),
            ControlPosition::BottomRight => egui::vec2(-margin, -margin),
        }
    }
}

/// Konstruktions-Optionen der Info-Controls.
/// Wird als `feature_info_controls.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControlOptions {
    /// Einheit der Längenanzeige (`miles` oder `kilometers`)
    #[serde(default)]
    pub distance_units: DistanceUnit,
    /// Bildschirmecke des Overlays
    #[serde(default)]
    pub position: ControlPosition,
}

impl ControlOptions {
    /// Optionen mit der angegebenen Einheit; unbekannte Einheiten werden abgelehnt.
    pub fn with_units(units: &str) -> Result<Self, InfoControlError> {
        Ok(Self {
            distance_units: units.parse()?,
            ..Self::default()
        })
    }

    /// Parst Optionen aus TOML-Text.
    pub fn from_toml_str(content: &str) -> Result<Self, InfoControlError> {
        Ok(toml::from_str(content)?)
    }

    /// Lädt Optionen aus einer TOML-Datei.
    ///
    /// Fehlt die Datei, gelten Standardwerte. Eine fehlerhafte Datei ist ein Fehler,
    /// damit das Control nicht mit ungültiger Konfiguration startet.
    pub fn load_from_file(path: &Path) -> Result<Self, InfoControlError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let options = Self::from_toml_str(&content)?;
                log::info!("Optionen geladen aus: {}", path.display());
                Ok(options)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Ok(Self::default())
            }
            Err(source) => Err(InfoControlError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> Result<(), InfoControlError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| InfoControlError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("feature_info_controls"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardwerte() {
        let options = ControlOptions::default();
        assert_eq!(options.distance_units, DistanceUnit::Kilometers);
        assert_eq!(options.position, ControlPosition::TopRight);
    }

    #[test]
    fn test_toml_mit_meilen() {
        let options = ControlOptions::from_toml_str(
            "distance_units = \"miles\"\nposition = \"bottom-left\"\n",
        )
        .expect("gültige Optionen");
        assert_eq!(options.distance_units, DistanceUnit::Miles);
        assert_eq!(options.position, ControlPosition::BottomLeft);
    }

    #[test]
    fn test_leeres_toml_ergibt_standardwerte() {
        let options = ControlOptions::from_toml_str("").expect("leer ist gültig");
        assert_eq!(options, ControlOptions::default());
    }

    #[test]
    fn test_unbekannte_einheit_wird_bei_konstruktion_abgelehnt() {
        let result = ControlOptions::from_toml_str("distance_units = \"yards\"\n");
        assert!(matches!(result, Err(InfoControlError::MalformedOptions(_))));

        let result = ControlOptions::with_units("nautical");
        assert!(matches!(result, Err(InfoControlError::UnsupportedUnit(_))));
    }

    #[test]
    fn test_fehlende_datei_ergibt_standardwerte() {
        let path = std::env::temp_dir().join("feature_info_controls_gibt_es_nicht.toml");
        let options = ControlOptions::load_from_file(&path).expect("fehlende Datei ist ok");
        assert_eq!(options, ControlOptions::default());
    }

    #[test]
    fn test_speichern_und_laden() {
        let path = std::env::temp_dir().join(format!(
            "feature_info_controls_test_{}.toml",
            std::process::id()
        ));
        let options = ControlOptions {
            distance_units: DistanceUnit::Miles,
            position: ControlPosition::TopLeft,
        };
        options.save_to_file(&path).expect("speicherbar");
        let loaded = ControlOptions::load_from_file(&path).expect("ladbar");
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, options);
    }
}
