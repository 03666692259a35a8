//! Handler für Linien-Bearbeitung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::DrawWidget;

/// Dupliziert die angezeigte Linie.
pub fn duplicate(state: &mut AppState, widget: &mut dyn DrawWidget) {
    use_cases::editing::duplicate_displayed_line(state, widget);
}

/// Verlängert die selektierte Linie oder fügt einen Mittelpunkt ein.
pub fn add_line_point(state: &mut AppState, widget: &mut dyn DrawWidget) {
    use_cases::editing::add_line_point(state, widget);
}

/// Verbindet die beiden angezeigten Linien.
pub fn join_lines(state: &mut AppState, widget: &mut dyn DrawWidget) {
    use_cases::editing::join_displayed_lines(state, widget);
}
