//! Mapping von Widget- und UI-Intents auf mutierende App-Commands.

use super::capabilities::EditActionId;
use super::classifier::{classify, Classification};
use super::{AppCommand, AppIntent, AppState, EditKey};
use crate::core::{Feature, InProgress, UpdateAction};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::FeaturesCreated { features } | AppIntent::SelectionChanged { features } => {
            display_commands(features, None)
        }
        AppIntent::FeaturesUpdated {
            features,
            action: UpdateAction::ChangeCoordinates,
        } => display_commands(features, None),
        AppIntent::FeaturesUpdated { action, .. } => {
            log::debug!("Update-Event ignoriert: {:?}", action);
            vec![]
        }
        AppIntent::FeaturesDeleted => vec![AppCommand::ClearFeatures],
        AppIntent::LiveDragMoved {
            feature,
            in_progress,
        } => display_commands(vec![feature], Some(in_progress)),

        AppIntent::EditNameRequested if state.presentation.offers(EditActionId::EditInfo) => {
            vec![AppCommand::BeginNameEdit]
        }
        AppIntent::NameDraftChanged { draft } if state.presentation.is_editing() => {
            vec![AppCommand::SetNameDraft { draft }]
        }
        AppIntent::NameEditConfirmed
        | AppIntent::NameInputKey {
            key: EditKey::Enter,
        } if state.presentation.is_editing() => vec![AppCommand::CommitNameEdit],
        AppIntent::NameEditCancelled
        | AppIntent::NameInputKey {
            key: EditKey::Escape,
        } if state.presentation.is_editing() => vec![AppCommand::CancelNameEdit],
        AppIntent::DuplicateFeatureRequested
            if state.presentation.offers(EditActionId::DuplicateFeature) =>
        {
            vec![AppCommand::DuplicateFeature]
        }
        AppIntent::AddLinePointRequested
            if state.presentation.offers(EditActionId::AddLinePoint) =>
        {
            vec![AppCommand::AddLinePoint]
        }
        AppIntent::JoinLinesRequested if state.presentation.offers(EditActionId::JoinLines) => {
            vec![AppCommand::JoinLines]
        }

        other => {
            log::debug!("Intent im aktuellen Zustand ohne Wirkung: {:?}", other);
            vec![]
        }
    }
}

/// Klassifiziert die Features: anzeigen oder Anzeige leeren.
fn display_commands(features: Vec<Feature>, in_progress: Option<InProgress>) -> Vec<AppCommand> {
    match classify(&features) {
        Classification::Supported(_) => vec![AppCommand::ShowFeatures {
            features,
            in_progress,
        }],
        Classification::Unsupported => vec![AppCommand::ClearFeatures],
    }
}
