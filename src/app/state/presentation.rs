//! Präsentations-Zustandsautomat: Hidden, Shown, Editing.

use crate::app::capabilities::{capabilities, EditAction, EditActionId};
use crate::app::classifier::{classify, FeatureShape};
use crate::core::{Feature, FeatureId, InProgress};

/// Angezeigte Features samt optionalem Zwischenstand einer laufenden Zeichnung.
///
/// Enthält immer eine unterstützte Kombination (ein Punkt, eine Linie oder
/// zwei Linien); wird nur als Ganzes ersetzt.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySelection {
    shape: FeatureShape,
    features: Vec<Feature>,
    in_progress: Option<InProgress>,
}

impl DisplaySelection {
    /// Klassifiziert die Features; `None` bei nicht unterstützter Kombination.
    pub fn new(features: Vec<Feature>, in_progress: Option<InProgress>) -> Option<Self> {
        let shape = classify(&features).shape()?;
        Some(Self {
            shape,
            features,
            in_progress,
        })
    }

    /// Form der Auswahl.
    pub fn shape(&self) -> FeatureShape {
        self.shape
    }

    /// Angezeigte Features in Eingangsreihenfolge.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Zwischenstand der Zeichnung (nur für die Textberechnung).
    pub fn in_progress(&self) -> Option<&InProgress> {
        self.in_progress.as_ref()
    }

    /// ID des ersten Features (Ziel der Namensbearbeitung).
    pub fn primary_id(&self) -> Option<&FeatureId> {
        self.features.first().and_then(|f| f.id.as_ref())
    }
}

/// Zustand des Overlays
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Presentation {
    /// Nichts angezeigt
    #[default]
    Hidden,
    /// Text und Toolbar sichtbar
    Shown {
        selection: DisplaySelection,
        text: String,
    },
    /// Namensformular geöffnet
    Editing {
        selection: DisplaySelection,
        text: String,
        draft: String,
    },
}

impl Presentation {
    /// Ob das Overlay sichtbar ist.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Presentation::Hidden)
    }

    /// Ob das Namensformular offen ist.
    pub fn is_editing(&self) -> bool {
        matches!(self, Presentation::Editing { .. })
    }

    /// Angezeigte Auswahl (None = verborgen).
    pub fn selection(&self) -> Option<&DisplaySelection> {
        match self {
            Presentation::Hidden => None,
            Presentation::Shown { selection, .. } | Presentation::Editing { selection, .. } => {
                Some(selection)
            }
        }
    }

    /// Angezeigter Text (leer, wenn verborgen).
    pub fn text(&self) -> &str {
        match self {
            Presentation::Hidden => "",
            Presentation::Shown { text, .. } | Presentation::Editing { text, .. } => text,
        }
    }

    /// Aktueller Namensentwurf (nur im Editing-Zustand).
    pub fn draft(&self) -> Option<&str> {
        match self {
            Presentation::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Toolbar-Aktionen; bei offenem Formular oder verborgenem Overlay leer.
    pub fn edit_actions(&self) -> &'static [EditAction] {
        match self {
            Presentation::Shown { selection, .. } => capabilities(selection.shape()).edit_actions,
            _ => &[],
        }
    }

    /// Ob die Toolbar diese Aktion gerade anbietet.
    pub fn offers(&self, action: EditActionId) -> bool {
        self.edit_actions().iter().any(|a| a.id == action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(features: Vec<Feature>) -> Presentation {
        let selection = DisplaySelection::new(features, None).expect("unterstützt");
        Presentation::Shown {
            selection,
            text: "x".into(),
        }
    }

    #[test]
    fn test_nicht_unterstuetzte_auswahl_wird_abgelehnt() {
        assert!(DisplaySelection::new(vec![], None).is_none());
        let mixed = vec![
            Feature::point("p", [0.0, 0.0]),
            Feature::line_string("l", [[0.0, 0.0], [1.0, 1.0]]),
        ];
        assert!(DisplaySelection::new(mixed, None).is_none());
    }

    #[test]
    fn test_aktionen_folgen_der_form() {
        let line = shown(vec![Feature::line_string("l", [[0.0, 0.0], [1.0, 1.0]])]);
        assert!(line.offers(EditActionId::AddLinePoint));
        assert!(!line.offers(EditActionId::JoinLines));

        let point = shown(vec![Feature::point("p", [0.0, 0.0])]);
        assert!(point.offers(EditActionId::EditInfo));
        assert!(!point.offers(EditActionId::DuplicateFeature));
    }

    #[test]
    fn test_formular_blendet_toolbar_aus() {
        let Presentation::Shown { selection, text } =
            shown(vec![Feature::point("p", [0.0, 0.0])])
        else {
            unreachable!("shown() liefert Shown");
        };
        let editing = Presentation::Editing {
            selection,
            text,
            draft: String::new(),
        };
        assert!(editing.edit_actions().is_empty());
        assert_eq!(editing.draft(), Some(""));
        assert!(Presentation::Hidden.edit_actions().is_empty());
    }
}
