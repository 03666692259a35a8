//! Eingehängtes Info-Control: Abo, Controller und Zustand.
//!
//! Das Abo auf die Widget-Benachrichtigungen wird beim Einhängen erworben und
//! endet, sobald das Control gedroppt wird.

use super::{AppController, AppIntent, AppState};
use crate::core::{DrawEventKind, DrawWidget, Subscription};
use crate::shared::ControlOptions;

/// Info-Control an einem Zeichen-Widget
pub struct InfoControl {
    state: AppState,
    controller: AppController,
    subscription: Subscription,
}

impl InfoControl {
    /// Hängt das Control an das Widget; Anzeige startet verborgen.
    pub fn mount(widget: &mut dyn DrawWidget, options: ControlOptions) -> Self {
        let subscription = widget.subscribe(&DrawEventKind::ALL);
        log::info!(
            "Info-Control eingehängt ({}, {:?})",
            options.distance_units.name(),
            options.position
        );
        Self {
            state: AppState::new(options),
            controller: AppController::new(),
            subscription,
        }
    }

    /// Verarbeitet alle wartenden Benachrichtigungen in Eingangsreihenfolge.
    ///
    /// Gibt die Anzahl verarbeiteter Benachrichtigungen zurück.
    pub fn process_pending(&mut self, widget: &mut dyn DrawWidget) -> anyhow::Result<usize> {
        let mut processed = 0;
        while let Some(event) = self.subscription.next_event() {
            self.controller
                .handle_intent(&mut self.state, widget, AppIntent::from(event))?;
            processed += 1;
        }
        Ok(processed)
    }

    /// Verarbeitet einen UI-Intent und danach alle dadurch ausgelösten
    /// Benachrichtigungen.
    pub fn handle_intent(
        &mut self,
        widget: &mut dyn DrawWidget,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        self.process_pending(widget)?;
        self.controller
            .handle_intent(&mut self.state, widget, intent)?;
        self.process_pending(widget)?;
        Ok(())
    }

    /// Read-only Sicht auf den Zustand.
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl Drop for InfoControl {
    fn drop(&mut self) {
        log::info!("Info-Control entfernt");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DrawStore, Feature, FeatureCollection};

    #[test]
    fn test_abo_endet_mit_drop() {
        let mut store = DrawStore::from_collection(FeatureCollection {
            features: vec![Feature::point("p", [0.0, 0.0])],
        });
        let control = InfoControl::mount(&mut store, ControlOptions::default());
        assert_eq!(store.subscriber_count(), 1);

        drop(control);
        store.select_features(&["p".into()]);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_start_ist_verborgen() {
        let mut store = DrawStore::new();
        let control = InfoControl::mount(&mut store, ControlOptions::default());
        assert!(!control.state().presentation.is_visible());
    }
}
