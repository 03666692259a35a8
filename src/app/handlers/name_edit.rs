//! Handler für das Namensformular.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::DrawWidget;

/// Öffnet das Formular.
pub fn begin(state: &mut AppState, widget: &dyn DrawWidget) {
    use_cases::name_edit::begin_name_edit(state, widget);
}

/// Übernimmt den eingegebenen Text als Entwurf.
pub fn set_draft(state: &mut AppState, draft: String) {
    use_cases::name_edit::set_name_draft(state, draft);
}

/// Speichert den Entwurf.
pub fn commit(state: &mut AppState, widget: &mut dyn DrawWidget) {
    use_cases::name_edit::commit_name_edit(state, widget);
}

/// Verwirft den Entwurf.
pub fn cancel(state: &mut AppState) {
    use_cases::name_edit::cancel_name_edit(state);
}
