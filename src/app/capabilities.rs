//! Fähigkeiten je Feature-Form: Textformatierung und Bearbeitungsaktionen.
//!
//! Eine Tabelle statt einer Control-Hierarchie: die Präsentationslogik ist für
//! alle Formen gleich, nur Text und Toolbar unterscheiden sich.

use super::classifier::FeatureShape;
use super::AppIntent;
use crate::core::{geo, DistanceUnit, Feature};
use crate::shared::format_locale;
use crate::shared::options::{MULTIPLE_LINES_PREFIX, UNTITLED_NAME};

/// Eingaben der Textformatierung (Namen sind bereits aufgelöst).
pub struct TextInput<'a> {
    /// Angezeigte Features
    pub features: &'a [Feature],
    /// Name je Feature (gleiche Reihenfolge wie `features`)
    pub names: &'a [Option<String>],
    /// Einheit der Längenanzeige
    pub unit: DistanceUnit,
}

/// Bearbeitungsaktion der Toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditActionId {
    /// Namen bearbeiten
    EditInfo,
    /// Feature duplizieren
    DuplicateFeature,
    /// Punkt zur Linie hinzufügen (verlängern oder einfügen)
    AddLinePoint,
    /// Zwei Linien verbinden
    JoinLines,
}

impl EditActionId {
    /// Intent, der beim Auslösen der Aktion erzeugt wird.
    pub fn intent(self) -> AppIntent {
        match self {
            EditActionId::EditInfo => AppIntent::EditNameRequested,
            EditActionId::DuplicateFeature => AppIntent::DuplicateFeatureRequested,
            EditActionId::AddLinePoint => AppIntent::AddLinePointRequested,
            EditActionId::JoinLines => AppIntent::JoinLinesRequested,
        }
    }
}

/// Eintrag der Toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditAction {
    /// Aktion
    pub id: EditActionId,
    /// Kurzsymbol auf dem Button
    pub icon: &'static str,
    /// Tooltip
    pub title: &'static str,
}

/// Fähigkeiten einer Feature-Form
pub struct ShapeCapabilities {
    /// Anzeigetext
    pub format_text: fn(&TextInput<'_>) -> String,
    /// Toolbar-Aktionen
    pub edit_actions: &'static [EditAction],
}

const EDIT_INFO: EditAction = EditAction {
    id: EditActionId::EditInfo,
    icon: "✏",
    title: "Edit feature information",
};

static POINT: ShapeCapabilities = ShapeCapabilities {
    format_text: format_point,
    edit_actions: &[EDIT_INFO],
};

static LINE: ShapeCapabilities = ShapeCapabilities {
    format_text: format_line,
    edit_actions: &[
        EDIT_INFO,
        EditAction {
            id: EditActionId::DuplicateFeature,
            icon: "⧉",
            title: "Duplicate feature",
        },
        EditAction {
            id: EditActionId::AddLinePoint,
            icon: "+",
            title: "Add point to line",
        },
    ],
};

static MULTI_LINE: ShapeCapabilities = ShapeCapabilities {
    format_text: format_multi_line,
    edit_actions: &[EditAction {
        id: EditActionId::JoinLines,
        icon: "⛓",
        title: "Join lines",
    }],
};

/// Liefert die Fähigkeiten einer Feature-Form.
pub fn capabilities(shape: FeatureShape) -> &'static ShapeCapabilities {
    match shape {
        FeatureShape::Point => &POINT,
        FeatureShape::Line => &LINE,
        FeatureShape::MultiLine => &MULTI_LINE,
    }
}

/// Name oder Fallback; leere Namen zählen als fehlend.
pub fn display_name(name: Option<&str>) -> &str {
    name.filter(|n| !n.is_empty()).unwrap_or(UNTITLED_NAME)
}

fn feature_length(feature: &Feature, unit: DistanceUnit) -> f64 {
    feature
        .line_coordinates()
        .map_or(0.0, |coordinates| geo::line_length(coordinates, unit))
}

fn first_name<'a>(input: &'a TextInput<'_>) -> Option<&'a str> {
    input.names.first().and_then(|n| n.as_deref())
}

fn format_point(input: &TextInput<'_>) -> String {
    display_name(first_name(input)).to_string()
}

fn format_line(input: &TextInput<'_>) -> String {
    let length = input
        .features
        .first()
        .map_or(0.0, |f| feature_length(f, input.unit));
    format!(
        "{}: {} {}",
        display_name(first_name(input)),
        format_locale(length),
        input.unit.abbreviation()
    )
}

fn format_multi_line(input: &TextInput<'_>) -> String {
    let total: f64 = input
        .features
        .iter()
        .map(|f| feature_length(f, input.unit))
        .sum();
    format!(
        "{}{} {}",
        MULTIPLE_LINES_PREFIX,
        format_locale(total),
        input.unit.abbreviation()
    )
}
