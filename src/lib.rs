//! Feature Info Controls.
//!
//! Info-Overlays für ein Karten-Zeichen-Widget: Namen und Längen gezeichneter
//! Punkte und Linien anzeigen, Namen bearbeiten, Linien duplizieren,
//! verlängern, Punkte einfügen und zwei Linien verbinden.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DisplaySelection, EditKey, FeatureShape,
    InfoControl, Presentation,
};
pub use core::{
    DistanceUnit, DrawEvent, DrawEventKind, DrawMode, DrawStore, DrawWidget, Feature,
    FeatureCollection, FeatureId, FeatureState, Geometry, GeometryKind, InProgress, MapCamera,
    ModeOptions, Position, StartHint, UpdateAction,
};
pub use shared::{ControlOptions, ControlPosition, InfoControlError};
