//! Use-Case: Linie ab dem letzten Stützpunkt weiterzeichnen.

use crate::core::{DrawMode, DrawWidget, Feature, ModeOptions, StartHint};

/// Start-Hinweis zum Fortsetzen der Linie am letzten Stützpunkt.
///
/// `None` für Punkte und leere Linien. Die Linie selbst bleibt unverändert.
pub fn extend_from(line: &Feature, name: Option<String>) -> Option<StartHint> {
    let start_coordinate = line.line_coordinates()?.last()?.clone();
    Some(StartHint {
        start_coordinate,
        continuing_feature_id: line.id.clone(),
        seed_name: name,
    })
}

/// Schaltet das Widget in den Linien-Zeichenmodus ab dem Linienende.
pub fn extend_line(widget: &mut dyn DrawWidget, line: &Feature) {
    let name = line
        .id
        .as_ref()
        .and_then(|id| widget.feature_state(id))
        .and_then(|state| state.name);
    let Some(hint) = extend_from(line, name) else {
        log::debug!("Verlängern ignoriert: keine Linie mit Stützpunkten");
        return;
    };
    log::info!(
        "Linie {} wird ab {:?} fortgesetzt",
        hint.continuing_feature_id
            .as_ref()
            .map_or("<neu>", |id| id.as_str()),
        hint.start_coordinate.0
    );
    widget.change_mode(
        DrawMode::DrawLineString,
        ModeOptions::ContinueLine {
            hint,
            show_name_prompt: false,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeatureId, Position};

    #[test]
    fn test_start_am_linienende() {
        let line = Feature::line_string("l", [[0.0, 0.0], [5.0, 5.0], [10.0, 20.0]]);
        let hint = extend_from(&line, Some("Weg".into())).expect("Linie");

        assert_eq!(hint.start_coordinate, Position::lon_lat(10.0, 20.0));
        assert_eq!(hint.continuing_feature_id, Some(FeatureId::new("l")));
        assert_eq!(hint.seed_name.as_deref(), Some("Weg"));
    }

    #[test]
    fn test_punkt_hat_keinen_hinweis() {
        assert!(extend_from(&Feature::point("p", [1.0, 2.0]), None).is_none());
    }
}
