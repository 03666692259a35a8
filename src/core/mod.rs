//! Core-Domänentypen: Features, Geometrie-Messung, Zeichen-Widget-Vertrag.

pub mod camera;
pub mod draw;
pub mod draw_store;
pub mod events;
pub mod feature;
/// Geodätische Messung (Haversine-Abstand, Linienlänge, Mittelpunkt)
pub mod geo;
pub mod units;

pub use camera::MapCamera;
pub use draw::{DrawMode, DrawWidget, FeatureState, ModeOptions, StartHint, UpdateAction};
pub use draw_store::DrawStore;
pub use events::{DrawEvent, DrawEventKind, EventBus, InProgress, Subscription};
pub use feature::{Feature, FeatureCollection, FeatureId, Geometry, GeometryKind, Position};
pub use units::DistanceUnit;
