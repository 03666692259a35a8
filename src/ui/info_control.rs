//! Overlay-Fenster der Info-Controls: Text, Toolbar, Namensformular.

use crate::app::{AppIntent, AppState, EditKey, Presentation};
use crate::shared::options::CONTROL_MARGIN_PX;

/// Rendert das Overlay an der konfigurierten Ecke und sammelt Intents.
pub fn render_info_control(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !state.presentation.is_visible() {
        return events;
    }

    let position = state.options.position;
    egui::Window::new("Feature-Info")
        .id(egui::Id::new("feature_info_control"))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(position.align(), position.offset(CONTROL_MARGIN_PX))
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(state.presentation.text()).strong());

            match &state.presentation {
                Presentation::Editing { draft, .. } => {
                    render_name_form(ui, draft, &mut events);
                }
                _ => render_toolbar(ui, state, &mut events),
            }
        });

    events
}

fn render_toolbar(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let actions = state.presentation.edit_actions();
    if actions.is_empty() {
        return;
    }
    ui.horizontal(|ui| {
        for action in actions {
            if ui
                .button(action.icon)
                .on_hover_text(action.title)
                .clicked()
            {
                events.push(action.id.intent());
            }
        }
    });
}

fn render_name_form(ui: &mut egui::Ui, draft: &str, events: &mut Vec<AppIntent>) {
    let mut text = draft.to_string();
    let response = ui
        .horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut text)
        })
        .inner;

    if response.changed() {
        events.push(AppIntent::NameDraftChanged { draft: text });
    }
    if !response.has_focus() && !response.lost_focus() {
        response.request_focus();
    }
    if response.lost_focus() {
        let key = ui.input(|i| {
            if i.key_pressed(egui::Key::Enter) {
                EditKey::Enter
            } else if i.key_pressed(egui::Key::Escape) {
                EditKey::Escape
            } else {
                EditKey::Other
            }
        });
        if key != EditKey::Other {
            events.push(AppIntent::NameInputKey { key });
        }
    }

    ui.horizontal(|ui| {
        if ui.button("OK").clicked() {
            events.push(AppIntent::NameEditConfirmed);
        }
        if ui.button("Cancel").clicked() {
            events.push(AppIntent::NameEditCancelled);
        }
    });
}
