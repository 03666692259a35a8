use crate::core::{DrawEvent, Feature, InProgress, UpdateAction};

/// Taste im Namens-Eingabefeld
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// Bestätigen
    Enter,
    /// Abbrechen
    Escape,
    /// Jede andere Taste (ohne Wirkung)
    Other,
}

/// App-Intents: Eingaben aus Zeichen-Widget und UI ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // === Benachrichtigungen des Zeichen-Widgets ===
    /// Features wurden erstellt
    FeaturesCreated { features: Vec<Feature> },
    /// Features wurden geändert
    FeaturesUpdated {
        features: Vec<Feature>,
        action: UpdateAction,
    },
    /// Selektion hat sich geändert
    SelectionChanged { features: Vec<Feature> },
    /// Features wurden gelöscht
    FeaturesDeleted,
    /// Live-Vorschau während des Zeichnens
    LiveDragMoved {
        feature: Feature,
        in_progress: InProgress,
    },

    // === Benutzeraktionen im Overlay ===
    /// Namensbearbeitung öffnen
    EditNameRequested,
    /// Text im Namensfeld geändert
    NameDraftChanged { draft: String },
    /// OK-Button
    NameEditConfirmed,
    /// Abbrechen-Button
    NameEditCancelled,
    /// Taste im Namensfeld
    NameInputKey { key: EditKey },
    /// Angezeigte Linie duplizieren
    DuplicateFeatureRequested,
    /// Punkt zur selektierten Linie hinzufügen
    AddLinePointRequested,
    /// Zwei angezeigte Linien verbinden
    JoinLinesRequested,
}

impl From<DrawEvent> for AppIntent {
    fn from(event: DrawEvent) -> Self {
        match event {
            DrawEvent::FeaturesCreated { features } => AppIntent::FeaturesCreated { features },
            DrawEvent::FeaturesUpdated { features, action } => {
                AppIntent::FeaturesUpdated { features, action }
            }
            DrawEvent::SelectionChanged { features } => AppIntent::SelectionChanged { features },
            DrawEvent::FeaturesDeleted { .. } => AppIntent::FeaturesDeleted,
            DrawEvent::LiveDragMove {
                feature,
                in_progress,
            } => AppIntent::LiveDragMoved {
                feature,
                in_progress,
            },
        }
    }
}
