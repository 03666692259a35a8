//! Use-Case: Mittelpunkt zwischen zwei Stützpunkten einfügen.

use super::extend::extend_line;
use super::vertex::find_vertex_index;
use crate::app::use_cases::display::refresh_from_widget;
use crate::app::AppState;
use crate::core::{geo, DrawWidget, Feature, Geometry, Position};

/// Fügt den Mittelpunkt von `after_index` und `after_index + 1` dazwischen ein.
///
/// `None`, wenn das Feature keine Linie ist oder kein Folgepunkt existiert.
/// Das Ergebnis wird nicht gespeichert.
pub fn insert_midpoint(line: &Feature, after_index: usize) -> Option<Feature> {
    let coordinates = line.line_coordinates()?;
    let from = coordinates.get(after_index)?;
    let to = coordinates.get(after_index + 1)?;
    let mid = geo::midpoint(from, to);

    let mut inserted = coordinates.to_vec();
    inserted.insert(after_index + 1, mid);
    Some(Feature {
        geometry: Geometry::LineString(inserted),
        ..line.clone()
    })
}

/// Fügt nach dem selektierten Stützpunkt einen Mittelpunkt ein.
///
/// Ist der Stützpunkt der letzte oder wird er nicht gefunden, wird die Linie
/// stattdessen verlängert.
pub fn insert_point_into_line(
    state: &mut AppState,
    widget: &mut dyn DrawWidget,
    line: &Feature,
    vertex: &Position,
) {
    let last_index = line.geometry.positions().len().saturating_sub(1);
    let index = match find_vertex_index(line, vertex) {
        Some(index) if index < last_index => index,
        Some(_) => {
            log::debug!("Letzter Stützpunkt selektiert, Linie wird verlängert");
            extend_line(widget, line);
            return;
        }
        None => {
            log::debug!("Stützpunkt nicht in Linie gefunden, Linie wird verlängert");
            extend_line(widget, line);
            return;
        }
    };

    let Some(updated) = insert_midpoint(line, index) else {
        return;
    };
    widget.add_feature(updated);
    log::info!("Mittelpunkt nach Stützpunkt {} eingefügt", index);
    refresh_from_widget(state, &*widget);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_genau_ein_punkt_mehr_und_reihenfolge_bleibt() {
        let line = Feature::line_string("l", [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]]);
        let inserted = insert_midpoint(&line, 0).expect("Folgepunkt existiert");
        let before = line.geometry.positions();
        let after = inserted.geometry.positions();

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2..], before[1..]);
        assert_eq!(after[1], geo::midpoint(&before[0], &before[1]));
        assert_relative_eq!(after[1].lon(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(after[1].lat(), 0.0, epsilon = 1e-9);
        assert_eq!(inserted.id, line.id);
    }

    #[test]
    fn test_kein_folgepunkt() {
        let line = Feature::line_string("l", [[0.0, 0.0], [1.0, 0.0]]);
        assert!(insert_midpoint(&line, 1).is_none());
        assert!(insert_midpoint(&Feature::point("p", [0.0, 0.0]), 0).is_none());
    }
}
