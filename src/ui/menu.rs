//! Top-Menü des Demo-Hosts (File, Draw).

use crate::core::{DrawMode, DrawStore, DrawWidget};

/// Host-Aktionen aus dem Menü
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// GeoJSON-Datei öffnen
    OpenRequested,
    /// Features als GeoJSON speichern
    SaveAsRequested,
    /// Ansicht auf alle Features ausrichten
    FitViewRequested,
    /// Neue Linie zeichnen
    DrawLineRequested,
    /// Anwendung beenden
    ExitRequested,
}

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, store: &DrawStore) -> Vec<MenuAction> {
    let mut actions = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open GeoJSON...").clicked() {
                    actions.push(MenuAction::OpenRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(store.feature_count() > 0, egui::Button::new("Save As..."))
                    .clicked()
                {
                    actions.push(MenuAction::SaveAsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    actions.push(MenuAction::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Draw", |ui| {
                let drawing = store.mode() == DrawMode::DrawLineString;
                if ui
                    .add_enabled(!drawing, egui::Button::new("New line"))
                    .clicked()
                {
                    actions.push(MenuAction::DrawLineRequested);
                    ui.close();
                }
                if ui.button("Fit view").clicked() {
                    actions.push(MenuAction::FitViewRequested);
                    ui.close();
                }
            });
        });
    });

    actions
}
