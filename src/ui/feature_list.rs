//! Seitenleiste mit allen Features des Demo-Stores.

use crate::app::capabilities::display_name;
use crate::core::{geo, DistanceUnit, DrawStore, DrawWidget, GeometryKind};
use crate::shared::format_locale;

/// Rendert die Feature-Liste; Klick selektiert, Shift-Klick erweitert.
pub fn render_feature_list(ctx: &egui::Context, store: &mut DrawStore, unit: DistanceUnit) {
    egui::SidePanel::left("feature_list")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Features");
            ui.label(format!("{} Features", store.feature_count()));
            ui.separator();

            let mut clicked = None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                for feature in store.features() {
                    let Some(id) = feature.id.clone() else {
                        continue;
                    };
                    let state = store.feature_state(&id);
                    let name = display_name(state.as_ref().and_then(|s| s.name.as_deref()));
                    let label = match feature.kind() {
                        GeometryKind::Point => format!("● {}", name),
                        GeometryKind::LineString => {
                            let length = geo::line_length(feature.geometry.positions(), unit);
                            format!(
                                "╱ {} ({} {})",
                                name,
                                format_locale(length),
                                unit.abbreviation()
                            )
                        }
                    };
                    let selected = store.selected_ids().contains(&id);
                    if ui.selectable_label(selected, label).clicked() {
                        clicked = Some(id);
                    }
                }
            });

            if let Some(id) = clicked {
                if ui.input(|i| i.modifiers.shift) {
                    store.toggle_feature(&id);
                } else {
                    store.select_features(&[id]);
                }
            }
        });
}
