use crate::app::CommandLog;
use crate::shared::ControlOptions;

use super::Presentation;

/// Hauptzustand eines eingehängten Info-Controls
pub struct AppState {
    /// Was das Overlay gerade zeigt
    pub presentation: Presentation,
    /// Konstruktions-Optionen (Einheit, Position)
    pub options: ControlOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen leeren Zustand (Overlay verborgen).
    pub fn new(options: ControlOptions) -> Self {
        Self {
            presentation: Presentation::Hidden,
            options,
            command_log: CommandLog::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ControlOptions::default())
    }
}
