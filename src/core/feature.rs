//! Feature-Modell im GeoJSON-Format: Punkte und Linien des Zeichen-Widgets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Eindeutige Feature-ID innerhalb des Zeichen-Widgets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(pub String);

impl FeatureId {
    /// Erstellt eine ID aus beliebigem String-Inhalt.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Gibt die ID als `&str` zurück.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeatureId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FeatureId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// GeoJSON-Position `[lon, lat]` oder `[lon, lat, alt]`.
///
/// Gleichheit ist komponentenweise exakt (keine Toleranz).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(pub Vec<f64>);

impl Position {
    /// 2D-Position aus Längen- und Breitengrad (Grad).
    pub fn lon_lat(lon: f64, lat: f64) -> Self {
        Self(vec![lon, lat])
    }

    /// Längengrad (erste Komponente, 0.0 falls leer).
    pub fn lon(&self) -> f64 {
        self.0.first().copied().unwrap_or(0.0)
    }

    /// Breitengrad (zweite Komponente, 0.0 falls nicht vorhanden).
    pub fn lat(&self) -> f64 {
        self.0.get(1).copied().unwrap_or(0.0)
    }

    /// Höhe, falls die Position dreidimensional ist.
    pub fn altitude(&self) -> Option<f64> {
        self.0.get(2).copied()
    }

    /// Anzahl der Komponenten.
    pub fn arity(&self) -> usize {
        self.0.len()
    }
}

impl From<[f64; 2]> for Position {
    fn from(value: [f64; 2]) -> Self {
        Self(value.to_vec())
    }
}

impl From<[f64; 3]> for Position {
    fn from(value: [f64; 3]) -> Self {
        Self(value.to_vec())
    }
}

/// Geometrie-Art eines Features
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    /// Einzelner Punkt
    Point,
    /// Linienzug
    LineString,
}

/// Geometrie eines Features (GeoJSON `geometry`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    /// Punkt mit genau einer Position
    Point(Position),
    /// Linienzug mit geordneter Positionsfolge
    LineString(Vec<Position>),
}

impl Geometry {
    /// Gibt die Geometrie-Art zurück.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
        }
    }

    /// Alle Positionen der Geometrie als Slice.
    pub fn positions(&self) -> &[Position] {
        match self {
            Geometry::Point(position) => std::slice::from_ref(position),
            Geometry::LineString(coordinates) => coordinates,
        }
    }
}

/// Ein gezeichnetes Feature (GeoJSON `Feature`).
///
/// `id` fehlt, solange der Store noch keine ID vergeben hat (z.B. bei Duplikaten).
/// Der Anzeigename liegt NICHT hier, sondern im separaten Feature-State-Store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    /// Store-ID (None = noch nicht eingefügt)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FeatureId>,
    /// Freie GeoJSON-Properties, werden unverändert durchgereicht
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
    /// Geometrie
    pub geometry: Geometry,
}

impl Feature {
    /// Erstellt einen Punkt mit ID.
    pub fn point(id: impl Into<FeatureId>, position: impl Into<Position>) -> Self {
        Self {
            id: Some(id.into()),
            properties: serde_json::Map::new(),
            geometry: Geometry::Point(position.into()),
        }
    }

    /// Erstellt einen Linienzug mit ID.
    pub fn line_string<P: Into<Position>>(
        id: impl Into<FeatureId>,
        coordinates: impl IntoIterator<Item = P>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            properties: serde_json::Map::new(),
            geometry: Geometry::LineString(coordinates.into_iter().map(Into::into).collect()),
        }
    }

    /// Gibt die Geometrie-Art zurück.
    pub fn kind(&self) -> GeometryKind {
        self.geometry.kind()
    }

    /// Koordinaten eines Linienzugs (None für Punkte).
    pub fn line_coordinates(&self) -> Option<&[Position]> {
        match &self.geometry {
            Geometry::LineString(coordinates) => Some(coordinates),
            Geometry::Point(_) => None,
        }
    }

    /// Erste Position der Geometrie.
    pub fn first_position(&self) -> Option<&Position> {
        self.geometry.positions().first()
    }

    /// Letzte Position der Geometrie.
    pub fn last_position(&self) -> Option<&Position> {
        self.geometry.positions().last()
    }
}

/// GeoJSON `FeatureCollection` (Import/Export des Demo-Stores).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    /// Enthaltene Features
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Parst eine FeatureCollection aus GeoJSON-Text.
    pub fn from_json(json: &str) -> Result<Self, crate::shared::InfoControlError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialisiert die Collection als formatiertes GeoJSON.
    pub fn to_json_pretty(&self) -> Result<String, crate::shared::InfoControlError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_deserialisiert_geojson_linestring() {
        let json = r##"{
            "type": "Feature",
            "id": "abc",
            "properties": { "stroke": "#ff0000" },
            "geometry": { "type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0, 5.0]] }
        }"##;
        let feature: Feature = serde_json::from_str(json).expect("gültiges GeoJSON");

        assert_eq!(feature.id, Some(FeatureId::new("abc")));
        assert_eq!(feature.kind(), GeometryKind::LineString);
        let coords = feature.line_coordinates().expect("Linienzug");
        assert_eq!(coords[1].arity(), 3);
        assert_eq!(coords[1].altitude(), Some(5.0));
        assert_eq!(feature.properties["stroke"], "#ff0000");
    }

    #[test]
    fn test_feature_ohne_id_serialisiert_ohne_id_feld() {
        let mut feature = Feature::point("p1", [8.0, 50.0]);
        feature.id = None;
        let value = serde_json::to_value(&feature).expect("serialisierbar");

        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "Point");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_position_gleichheit_ist_exakt_und_arity_sensitiv() {
        assert_eq!(Position::lon_lat(1.0, 2.0), Position::from([1.0, 2.0]));
        assert_ne!(Position::lon_lat(1.0, 2.0), Position::from([1.0, 2.0, 0.0]));
        assert_ne!(Position::lon_lat(0.1 + 0.2, 0.0), Position::lon_lat(0.3, 0.0));
    }

    #[test]
    fn test_feature_collection_from_json() {
        let json = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","id":"a","properties":{},"geometry":{"type":"Point","coordinates":[0,0]}}
        ]}"#;
        let collection = FeatureCollection::from_json(json).expect("gültig");
        assert_eq!(collection.features.len(), 1);
        assert!(FeatureCollection::from_json("{ kaputt").is_err());
    }
}
