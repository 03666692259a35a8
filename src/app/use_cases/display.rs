//! Use-Case: Anzeige ersetzen, leeren und Text berechnen.

use crate::app::capabilities::{capabilities, TextInput};
use crate::app::state::{DisplaySelection, Presentation};
use crate::app::AppState;
use crate::core::{DistanceUnit, DrawWidget, Feature, InProgress};

/// Berechnet den Anzeigetext einer Auswahl.
///
/// Namen kommen aus dem Feature-State-Store des Widgets. Ein Name im
/// Zwischenstand der Zeichnung hat Vorrang, `name_override` (frisch
/// bestätigter Name) hat Vorrang vor beidem und gilt für das erste Feature.
pub fn compose_text(
    selection: &DisplaySelection,
    widget: &dyn DrawWidget,
    unit: DistanceUnit,
    name_override: Option<&str>,
) -> String {
    let names: Vec<Option<String>> = selection
        .features()
        .iter()
        .enumerate()
        .map(|(index, feature)| match name_override {
            Some(name) if index == 0 => Some(name.to_string()),
            _ => resolve_name(feature, selection.in_progress(), widget),
        })
        .collect();

    let input = TextInput {
        features: selection.features(),
        names: &names,
        unit,
    };
    (capabilities(selection.shape()).format_text)(&input)
}

/// Aktueller Name eines angezeigten Features.
pub fn resolve_name(
    feature: &Feature,
    in_progress: Option<&InProgress>,
    widget: &dyn DrawWidget,
) -> Option<String> {
    if let Some(name) = in_progress.and_then(|p| p.name.clone()) {
        return Some(name);
    }
    feature
        .id
        .as_ref()
        .and_then(|id| widget.feature_state(id))
        .and_then(|state| state.name)
}

/// Ersetzt die Anzeige durch diese Features.
///
/// Nicht unterstützte Kombinationen leeren die Anzeige. Ein offenes
/// Namensformular wird immer geschlossen.
pub fn show_features(
    state: &mut AppState,
    widget: &dyn DrawWidget,
    features: Vec<Feature>,
    in_progress: Option<InProgress>,
) {
    let Some(selection) = DisplaySelection::new(features, in_progress) else {
        clear_features(state);
        return;
    };
    let text = compose_text(&selection, widget, state.options.distance_units, None);
    log::debug!("Anzeige: {}", text);
    state.presentation = Presentation::Shown { selection, text };
}

/// Leert die Anzeige und verbirgt das Overlay.
pub fn clear_features(state: &mut AppState) {
    if state.presentation.is_visible() {
        log::debug!("Anzeige geleert");
    }
    state.presentation = Presentation::Hidden;
}

/// Liest die aktuelle Selektion des Widgets und zeigt sie an.
pub fn refresh_from_widget(state: &mut AppState, widget: &dyn DrawWidget) {
    let features = widget.selected_features();
    show_features(state, widget, features, None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DrawStore, FeatureCollection, FeatureState};

    fn store() -> DrawStore {
        DrawStore::from_collection(FeatureCollection {
            features: vec![
                Feature::point("p", [13.4, 52.5]),
                Feature::line_string("l", [[0.0, 0.0], [0.0, 0.01]]),
            ],
        })
    }

    #[test]
    fn test_punkt_name_aus_feature_state() {
        let mut widget = store();
        widget.set_feature_state(&"p".into(), FeatureState::named("Cafe"));
        let mut state = AppState::default();

        let point = widget.feature(&"p".into()).cloned().expect("p vorhanden");
        show_features(&mut state, &widget, vec![point], None);

        assert_eq!(state.presentation.text(), "Cafe");
    }

    #[test]
    fn test_name_im_zwischenstand_hat_vorrang() {
        let mut widget = store();
        widget.set_feature_state(&"l".into(), FeatureState::named("Alt"));
        let mut state = AppState::default();

        let line = widget.feature(&"l".into()).cloned().expect("l vorhanden");
        let in_progress = InProgress {
            name: Some("Neu".into()),
        };
        show_features(&mut state, &widget, vec![line], Some(in_progress));

        assert!(state.presentation.text().starts_with("Neu: "));
    }

    #[test]
    fn test_nicht_unterstuetzt_leert_anzeige() {
        let widget = store();
        let mut state = AppState::default();
        let all: Vec<Feature> = widget.features().cloned().collect();

        show_features(&mut state, &widget, all[1..].to_vec(), None);
        assert!(state.presentation.is_visible());

        show_features(&mut state, &widget, all, None);
        assert_eq!(state.presentation, Presentation::Hidden);
    }
}
