//! Handler für Anzeige-Wechsel.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{DrawWidget, Feature, InProgress};

/// Ersetzt die angezeigten Features.
pub fn show(
    state: &mut AppState,
    widget: &dyn DrawWidget,
    features: Vec<Feature>,
    in_progress: Option<InProgress>,
) {
    use_cases::display::show_features(state, widget, features, in_progress);
}

/// Verbirgt das Overlay.
pub fn clear(state: &mut AppState) {
    use_cases::display::clear_features(state);
}
