//! Use-Case: Angezeigte Linie duplizieren.

use crate::app::use_cases::display::refresh_from_widget;
use crate::app::AppState;
use crate::core::{DrawMode, DrawWidget, Feature, ModeOptions};

/// Kopie ohne ID (der Store vergibt eine neue).
pub fn duplicate(line: &Feature) -> Feature {
    Feature {
        id: None,
        ..line.clone()
    }
}

/// Fügt eine Kopie der angezeigten Linie ein und selektiert genau diese.
pub fn duplicate_displayed_line(state: &mut AppState, widget: &mut dyn DrawWidget) {
    let Some(line) = state
        .presentation
        .selection()
        .and_then(|selection| selection.features().first())
    else {
        log::debug!("Duplizieren ignoriert: nichts angezeigt");
        return;
    };
    let copy = duplicate(line);

    let feature_ids = widget.add_feature(copy);
    log::info!("Feature dupliziert: {:?}", feature_ids);
    widget.change_mode(
        DrawMode::SimpleSelect,
        ModeOptions::SelectFeatures { feature_ids },
    );
    refresh_from_widget(state, &*widget);
}
