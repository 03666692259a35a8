//! Use-Case: Punkt zur selektierten Linie hinzufügen (modusabhängig).

use super::extend::extend_line;
use super::insert_point::insert_point_into_line;
use crate::app::AppState;
use crate::core::{DrawMode, DrawWidget, GeometryKind};

/// Verlängert die Linie (Select-Modus) oder fügt nach dem selektierten
/// Stützpunkt einen Mittelpunkt ein (Direct-Select-Modus).
///
/// Erfordert genau eine selektierte Linie im Widget.
pub fn add_line_point(state: &mut AppState, widget: &mut dyn DrawWidget) {
    let selected = widget.selected_features();
    let [line] = selected.as_slice() else {
        log::debug!("Punkt hinzufügen ignoriert: {} Features selektiert", selected.len());
        return;
    };
    if line.kind() != GeometryKind::LineString {
        log::debug!("Punkt hinzufügen ignoriert: keine Linie selektiert");
        return;
    }

    match widget.mode() {
        DrawMode::SimpleSelect => extend_line(widget, line),
        DrawMode::DirectSelect => {
            let vertices = widget.selected_vertices();
            let [vertex] = vertices.as_slice() else {
                log::debug!(
                    "Punkt hinzufügen ignoriert: {} Stützpunkte selektiert",
                    vertices.len()
                );
                return;
            };
            insert_point_into_line(state, widget, line, vertex);
        }
        mode => log::debug!("Punkt hinzufügen im Modus {:?} ignoriert", mode),
    }
}
