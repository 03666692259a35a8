//! Vertrag mit dem externen Zeichen-Widget.
//!
//! Das Widget besitzt Features, Selektion, Modus und den Feature-State-Store.
//! Die Info-Controls sprechen es ausschließlich über [`DrawWidget`] an.

use super::events::{DrawEventKind, Subscription};
use super::{Feature, FeatureId, Position};

/// Interaktionsmodus des Zeichen-Widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Ganze Features selektieren und verschieben
    #[default]
    SimpleSelect,
    /// Einzelne Stützpunkte eines Features selektieren
    DirectSelect,
    /// Neuen Linienzug zeichnen (oder bestehenden fortsetzen)
    DrawLineString,
    /// Neuen Punkt setzen
    DrawPoint,
}

/// Art eines Update-Events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// Feature wurde als Ganzes verschoben
    Move,
    /// Einzelne Koordinaten wurden geändert
    ChangeCoordinates,
    /// Properties wurden geändert
    ChangeProperties,
}

/// Annotation eines Features im Feature-State-Store (getrennt von der Geometrie).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureState {
    /// Anzeigename
    pub name: Option<String>,
}

impl FeatureState {
    /// State mit gesetztem Namen.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Startpunkt zum Fortsetzen eines bestehenden Linienzugs.
#[derive(Debug, Clone, PartialEq)]
pub struct StartHint {
    /// Letzter Stützpunkt der Linie, an dem weitergezeichnet wird
    pub start_coordinate: Position,
    /// Linie, die fortgesetzt wird
    pub continuing_feature_id: Option<FeatureId>,
    /// Aktueller Name der Linie (wird in den Zeichenmodus übernommen)
    pub seed_name: Option<String>,
}

/// Optionen für einen Moduswechsel
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModeOptions {
    /// Keine Optionen
    #[default]
    None,
    /// Genau diese Features selektieren
    SelectFeatures { feature_ids: Vec<FeatureId> },
    /// Linie ab einem Startpunkt fortsetzen (ohne Namensabfrage)
    ContinueLine {
        hint: StartHint,
        show_name_prompt: bool,
    },
}

/// Schnittstelle des externen Zeichen-Widgets.
pub trait DrawWidget {
    /// Abonniert Benachrichtigungen der angegebenen Arten.
    ///
    /// Das Abo endet, sobald die zurückgegebene [`Subscription`] gedroppt wird.
    fn subscribe(&mut self, kinds: &[DrawEventKind]) -> Subscription;

    /// Aktuell selektierte Features in Selektionsreihenfolge.
    fn selected_features(&self) -> Vec<Feature>;

    /// Aktuell selektierte Stützpunkte (nur im Direct-Select-Modus).
    fn selected_vertices(&self) -> Vec<Position>;

    /// Aktueller Interaktionsmodus.
    fn mode(&self) -> DrawMode;

    /// Fügt ein Feature ein oder ersetzt eines mit gleicher ID. Gibt die IDs zurück.
    fn add_feature(&mut self, feature: Feature) -> Vec<FeatureId>;

    /// Löscht Features (ohne Benachrichtigung).
    fn delete_features(&mut self, ids: &[FeatureId]);

    /// Wechselt den Interaktionsmodus.
    fn change_mode(&mut self, mode: DrawMode, options: ModeOptions);

    /// Liest den Feature-State eines Features.
    fn feature_state(&self, id: &FeatureId) -> Option<FeatureState>;

    /// Schreibt den Feature-State eines Features.
    fn set_feature_state(&mut self, id: &FeatureId, state: FeatureState);

    /// Löst manuell ein Selektionswechsel-Event aus.
    fn emit_selection_changed(&mut self, features: Vec<Feature>);
}
