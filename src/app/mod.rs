//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod capabilities;
pub mod classifier;
pub mod command_log;
pub mod control;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Präsentationszustand des Overlays
///
/// Verborgen, angezeigt oder mit offenem Namensformular.
pub mod state;
pub mod use_cases;

pub use capabilities::{capabilities, EditAction, EditActionId, ShapeCapabilities};
pub use classifier::{classify, Classification, FeatureShape};
pub use command_log::CommandLog;
pub use control::InfoControl;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, EditKey};
pub use state::{AppState, DisplaySelection, Presentation};
