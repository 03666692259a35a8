use crate::core::{Feature, InProgress};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anzeige durch diese Features ersetzen (Klassifizierung bereits erfolgt)
    ShowFeatures {
        features: Vec<Feature>,
        in_progress: Option<InProgress>,
    },
    /// Anzeige leeren
    ClearFeatures,
    /// Namensbearbeitung beginnen
    BeginNameEdit,
    /// Entwurf des Namens setzen
    SetNameDraft { draft: String },
    /// Entwurf in den Feature-State übernehmen
    CommitNameEdit,
    /// Entwurf verwerfen
    CancelNameEdit,
    /// Angezeigte Linie duplizieren
    DuplicateFeature,
    /// Linie verlängern oder Mittelpunkt einfügen (je nach Modus)
    AddLinePoint,
    /// Zwei Linien verbinden
    JoinLines,
}
