//! Application State: Präsentationszustand der Info-Controls.

mod app_state;
mod presentation;

pub use app_state::AppState;
pub use presentation::{DisplaySelection, Presentation};
