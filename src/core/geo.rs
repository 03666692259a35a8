//! Geodätische Messfunktionen auf der Kugel (Haversine).
//!
//! Radius und Formeln entsprechen den üblichen Web-Karten-Bibliotheken, damit
//! Längenangaben mit dem Zeichen-Widget übereinstimmen.

use super::{DistanceUnit, Position};

/// Mittlerer Erdradius in Metern.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Großkreis-Winkelabstand zweier Positionen in Radiant.
pub fn angular_distance(from: &Position, to: &Position) -> f64 {
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (to.lon() - from.lon()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Abstand zweier Positionen in der gewünschten Einheit.
pub fn distance(from: &Position, to: &Position, unit: DistanceUnit) -> f64 {
    angular_distance(from, to) * EARTH_RADIUS_M / unit.meters()
}

/// Länge eines Linienzugs (Summe der Segmentlängen).
pub fn line_length(coordinates: &[Position], unit: DistanceUnit) -> f64 {
    coordinates
        .windows(2)
        .map(|pair| distance(&pair[0], &pair[1], unit))
        .sum()
}

/// Großkreis-Mittelpunkt zwischen zwei Positionen.
///
/// Die Höhe wird gemittelt, wenn beide Positionen eine haben; sonst ist das
/// Ergebnis zweidimensional.
pub fn midpoint(from: &Position, to: &Position) -> Position {
    let lat1 = from.lat().to_radians();
    let lon1 = from.lon().to_radians();
    let lat2 = to.lat().to_radians();
    let d_lon = (to.lon() - from.lon()).to_radians();

    let bx = lat2.cos() * d_lon.cos();
    let by = lat2.cos() * d_lon.sin();
    let lat = (lat1.sin() + lat2.sin()).atan2(((lat1.cos() + bx).powi(2) + by.powi(2)).sqrt());
    let lon = lon1 + by.atan2(lat1.cos() + bx);
    // Längengrad auf [-180, 180) normalisieren
    let lon_deg = (lon.to_degrees() + 540.0) % 360.0 - 180.0;

    let mut components = vec![lon_deg, lat.to_degrees()];
    if let (Some(a), Some(b)) = (from.altitude(), to.altitude()) {
        components.push((a + b) / 2.0);
    }
    Position(components)
}
