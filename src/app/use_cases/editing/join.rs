//! Use-Case: Zwei Linien zu einer verbinden.

use crate::app::AppState;
use crate::core::{geo, DistanceUnit, DrawWidget, Feature, Geometry};

/// Reihenfolge für das Verbinden: `(head, tail)`.
///
/// `(a, b)`, wenn der Abstand vom Ende von `a` zum Anfang von `b` nicht größer
/// ist als umgekehrt; sonst `(b, a)`. Gleichstand behält die Reihenfolge.
pub fn order_for_join<'a>(a: &'a Feature, b: &'a Feature) -> (&'a Feature, &'a Feature) {
    let gap = |from: &Feature, to: &Feature| match (from.last_position(), to.first_position()) {
        (Some(end), Some(start)) => geo::distance(end, start, DistanceUnit::Kilometers),
        _ => f64::INFINITY,
    };
    if gap(a, b) <= gap(b, a) {
        (a, b)
    } else {
        (b, a)
    }
}

/// Hängt die Koordinaten von `tail` an `head` an.
///
/// ID und Properties kommen von `head`; ein gemeinsamer Stoßpunkt bleibt doppelt.
pub fn join_lines(head: &Feature, tail: &Feature) -> Feature {
    let coordinates = head
        .geometry
        .positions()
        .iter()
        .chain(tail.geometry.positions())
        .cloned()
        .collect();
    Feature {
        id: head.id.clone(),
        properties: head.properties.clone(),
        geometry: Geometry::LineString(coordinates),
    }
}

/// Verbindet die beiden angezeigten Linien im Widget.
///
/// Löscht `tail`, schreibt die verbundene Linie und löst selbst einen
/// Selektionswechsel aus, da Löschen und Hinzufügen keinen melden.
pub fn join_displayed_lines(state: &mut AppState, widget: &mut dyn DrawWidget) {
    let Some([a, b]) = state
        .presentation
        .selection()
        .and_then(|selection| <&[Feature; 2]>::try_from(selection.features()).ok())
    else {
        log::debug!("Verbinden ignoriert: nicht genau zwei Linien angezeigt");
        return;
    };
    let (head, tail) = order_for_join(a, b);
    let Some(tail_id) = tail.id.clone() else {
        log::debug!("Verbinden ignoriert: hintere Linie hat keine ID");
        return;
    };
    let merged = join_lines(head, tail);

    widget.delete_features(std::slice::from_ref(&tail_id));
    widget.add_feature(merged.clone());
    log::info!(
        "Linie {} an {} angehängt ({} Stützpunkte)",
        tail_id,
        merged.id.as_ref().map_or("<neu>", |id| id.as_str()),
        merged.geometry.positions().len()
    );
    widget.emit_selection_changed(vec![merged]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeatureId;

    #[test]
    fn test_head_ist_a_wenn_luecke_kleiner_gleich() {
        let a = Feature::line_string("a", [[0.0, 0.0], [1.0, 0.0]]);
        let b = Feature::line_string("b", [[1.1, 0.0], [2.0, 0.0]]);
        let (head, tail) = order_for_join(&a, &b);
        assert_eq!(head.id, Some(FeatureId::new("a")));
        assert_eq!(tail.id, Some(FeatureId::new("b")));

        let (head, _) = order_for_join(&b, &a);
        assert_eq!(head.id, Some(FeatureId::new("a")));
    }

    #[test]
    fn test_gleichstand_behaelt_reihenfolge() {
        let a = Feature::line_string("a", [[0.0, 0.0], [1.0, 0.0]]);
        let b = Feature::line_string("b", [[1.0, 0.0], [0.0, 0.0]]);
        let (head, _) = order_for_join(&a, &b);
        assert_eq!(head.id, Some(FeatureId::new("a")));
        let (head, _) = order_for_join(&b, &a);
        assert_eq!(head.id, Some(FeatureId::new("b")));
    }

    #[test]
    fn test_verbundene_laenge_ist_summe_und_id_vom_head() {
        let mut head = Feature::line_string("h", [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);
        head.properties
            .insert("stroke".into(), serde_json::Value::from("#00f"));
        let tail = Feature::line_string("t", [[2.0, 0.0], [3.0, 0.0]]);

        let merged = join_lines(&head, &tail);
        assert_eq!(merged.geometry.positions().len(), 5);
        assert_eq!(merged.id, Some(FeatureId::new("h")));
        assert_eq!(merged.properties, head.properties);
        assert_eq!(merged.geometry.positions()[2], merged.geometry.positions()[3]);
    }
}
