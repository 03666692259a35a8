//! Use-Case: Namensbearbeitung (öffnen, Entwurf, bestätigen, verwerfen).

use super::display::{compose_text, resolve_name};
use crate::app::state::Presentation;
use crate::app::AppState;
use crate::core::{DrawWidget, FeatureState};

/// Öffnet das Namensformular; Entwurf = aktueller Name oder leer.
pub fn begin_name_edit(state: &mut AppState, widget: &dyn DrawWidget) {
    let Presentation::Shown { selection, text } = &state.presentation else {
        log::debug!("Namensbearbeitung ignoriert: Overlay nicht im Anzeigezustand");
        return;
    };
    let draft = selection
        .features()
        .first()
        .and_then(|feature| resolve_name(feature, selection.in_progress(), widget))
        .unwrap_or_default();
    state.presentation = Presentation::Editing {
        selection: selection.clone(),
        text: text.clone(),
        draft,
    };
}

/// Setzt den Entwurf im offenen Formular.
pub fn set_name_draft(state: &mut AppState, new_draft: String) {
    if let Presentation::Editing { draft, .. } = &mut state.presentation {
        *draft = new_draft;
    }
}

/// Schreibt den Entwurf in den Feature-State-Store und schließt das Formular.
///
/// Der Text wird sofort mit dem neuen Namen berechnet, auch wenn ein
/// Zwischenstand der Zeichnung angezeigt wird.
pub fn commit_name_edit(state: &mut AppState, widget: &mut dyn DrawWidget) {
    if !state.presentation.is_editing() {
        log::debug!("Bestätigen ignoriert: kein Formular offen");
        return;
    }
    let Presentation::Editing {
        selection,
        text,
        draft,
    } = std::mem::take(&mut state.presentation)
    else {
        return;
    };

    match selection.primary_id() {
        Some(id) => {
            widget.set_feature_state(id, FeatureState::named(draft.clone()));
            log::info!("Name von {} gesetzt: '{}'", id, draft);
        }
        None => {
            log::debug!("Feature ohne ID, Name wird nur angezeigt");
        }
    }

    let fresh = compose_text(
        &selection,
        &*widget,
        state.options.distance_units,
        Some(draft.as_str()),
    );
    log::debug!("Anzeige statt '{}': {}", text, fresh);
    state.presentation = Presentation::Shown {
        selection,
        text: fresh,
    };
}

/// Verwirft den Entwurf ohne Store-Zugriff.
pub fn cancel_name_edit(state: &mut AppState) {
    if !state.presentation.is_editing() {
        return;
    }
    let Presentation::Editing {
        selection, text, ..
    } = std::mem::take(&mut state.presentation)
    else {
        return;
    };
    state.presentation = Presentation::Shown { selection, text };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::display::show_features;
    use crate::core::{DrawStore, Feature, FeatureCollection};

    fn setup() -> (AppState, DrawStore) {
        let mut widget = DrawStore::from_collection(FeatureCollection {
            features: vec![Feature::point("p", [0.0, 0.0])],
        });
        widget.set_feature_state(&"p".into(), FeatureState::named("Cafe"));
        let mut state = AppState::default();
        let point = widget.feature(&"p".into()).cloned().expect("p vorhanden");
        show_features(&mut state, &widget, vec![point], None);
        (state, widget)
    }

    #[test]
    fn test_entwurf_startet_mit_gespeichertem_namen() {
        let (mut state, widget) = setup();
        begin_name_edit(&mut state, &widget);
        assert_eq!(state.presentation.draft(), Some("Cafe"));
    }

    #[test]
    fn test_bestaetigen_schreibt_store() {
        let (mut state, mut widget) = setup();
        begin_name_edit(&mut state, &widget);
        set_name_draft(&mut state, "Bar".into());
        commit_name_edit(&mut state, &mut widget);

        assert!(!state.presentation.is_editing());
        assert_eq!(state.presentation.text(), "Bar");
        assert_eq!(
            widget.feature_state(&"p".into()),
            Some(FeatureState::named("Bar"))
        );
    }

    #[test]
    fn test_abbrechen_laesst_store_unveraendert() {
        let (mut state, mut widget) = setup();
        begin_name_edit(&mut state, &widget);
        set_name_draft(&mut state, "Bar".into());
        cancel_name_edit(&mut state);
        commit_name_edit(&mut state, &mut widget);

        assert_eq!(state.presentation.text(), "Cafe");
        assert_eq!(
            widget.feature_state(&"p".into()),
            Some(FeatureState::named("Cafe"))
        );
    }
}
