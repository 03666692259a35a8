//! Feature-Klassifizierung: welche Feature-Kombinationen die Controls anzeigen.

use crate::core::{Feature, GeometryKind};

/// Unterstützte Feature-Kombination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureShape {
    /// Genau ein Punkt
    Point,
    /// Genau ein Linienzug
    Line,
    /// Genau zwei Linienzüge
    MultiLine,
}

/// Ergebnis der Klassifizierung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Kombination wird angezeigt
    Supported(FeatureShape),
    /// Kombination wird nicht angezeigt (Anzeige leeren)
    Unsupported,
}

impl Classification {
    /// Gibt die Form zurück, falls unterstützt.
    pub fn shape(self) -> Option<FeatureShape> {
        match self {
            Classification::Supported(shape) => Some(shape),
            Classification::Unsupported => None,
        }
    }
}

/// Klassifiziert eine Feature-Liste.
///
/// Unterstützt: ein Punkt, eine Linie, genau zwei Linien. Alles andere
/// (auch die leere Liste) ist `Unsupported`.
pub fn classify(features: &[Feature]) -> Classification {
    let kinds: Vec<GeometryKind> = features.iter().map(Feature::kind).collect();
    match kinds.as_slice() {
        [GeometryKind::Point] => Classification::Supported(FeatureShape::Point),
        [GeometryKind::LineString] => Classification::Supported(FeatureShape::Line),
        [GeometryKind::LineString, GeometryKind::LineString] => {
            Classification::Supported(FeatureShape::MultiLine)
        }
        _ => Classification::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(i: usize) -> Feature {
        Feature::point(format!("p{i}").as_str(), [i as f64, 0.0])
    }

    fn line(i: usize) -> Feature {
        Feature::line_string(format!("l{i}").as_str(), [[i as f64, 0.0], [i as f64, 1.0]])
    }

    /// Referenz-Prädikat: genau die drei unterstützten Formen.
    fn expected(kinds: &[bool]) -> Option<FeatureShape> {
        // true = Linie, false = Punkt
        match kinds {
            [false] => Some(FeatureShape::Point),
            [true] => Some(FeatureShape::Line),
            [true, true] => Some(FeatureShape::MultiLine),
            _ => None,
        }
    }

    #[test]
    fn test_alle_kombinationen_bis_vier_features() {
        for len in 0..=4usize {
            for mask in 0..(1u32 << len) {
                let kinds: Vec<bool> = (0..len).map(|i| mask & (1 << i) != 0).collect();
                let features: Vec<Feature> = kinds
                    .iter()
                    .enumerate()
                    .map(|(i, &is_line)| if is_line { line(i) } else { point(i) })
                    .collect();

                assert_eq!(
                    classify(&features).shape(),
                    expected(&kinds),
                    "Kombination {kinds:?}"
                );
            }
        }
    }

    #[test]
    fn test_leere_liste_ist_unsupported() {
        assert_eq!(classify(&[]), Classification::Unsupported);
    }

    #[test]
    fn test_punkt_und_linie_ist_unsupported() {
        assert_eq!(classify(&[line(0), point(1)]), Classification::Unsupported);
    }
}
