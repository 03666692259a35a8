//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen, Fehlertyp und Formatierung, die von `app` und `ui`
//! gleichermaßen genutzt werden.

mod error;
pub mod number_format;
pub mod options;

pub use error::InfoControlError;
pub use number_format::format_locale;
pub use options::{ControlOptions, ControlPosition};
