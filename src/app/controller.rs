//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::core::DrawWidget;

/// Orchestriert Widget-Benachrichtigungen, UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        widget: &mut dyn DrawWidget,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, widget, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState und dem Widget aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        widget: &mut dyn DrawWidget,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Anzeige ===
            AppCommand::ShowFeatures {
                features,
                in_progress,
            } => handlers::display::show(state, &*widget, features, in_progress),
            AppCommand::ClearFeatures => handlers::display::clear(state),

            // === Namensformular ===
            AppCommand::BeginNameEdit => handlers::name_edit::begin(state, &*widget),
            AppCommand::SetNameDraft { draft } => handlers::name_edit::set_draft(state, draft),
            AppCommand::CommitNameEdit => handlers::name_edit::commit(state, widget),
            AppCommand::CancelNameEdit => handlers::name_edit::cancel(state),

            // === Linien-Bearbeitung ===
            AppCommand::DuplicateFeature => handlers::editing::duplicate(state, widget),
            AppCommand::AddLinePoint => handlers::editing::add_line_point(state, widget),
            AppCommand::JoinLines => handlers::editing::join_lines(state, widget),
        }

        Ok(())
    }
}
