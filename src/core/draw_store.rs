//! In-Memory-Zeichen-Widget: Feature-Store, Selektion, Modus und Event-Bus.
//!
//! Referenz-Implementierung von [`DrawWidget`] für Demo-Host und Tests.
//! Host-seitige Methoden (Selektieren, Verschieben, Zeichnen) lösen dieselben
//! Benachrichtigungen aus wie ein echtes Zeichen-Widget; die Trait-Methoden
//! (`add_feature`, `delete_features`, `change_mode`) bleiben dagegen stumm.

use super::events::{DrawEvent, DrawEventKind, EventBus, InProgress, Subscription};
use super::{
    DrawMode, DrawWidget, Feature, FeatureCollection, FeatureId, FeatureState, Geometry,
    ModeOptions, Position, UpdateAction,
};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

/// Laufende Linien-Zeichnung
#[derive(Debug, Clone)]
struct DrawingSession {
    /// Fortgesetzte Linie (None = neue Linie)
    feature_id: Option<FeatureId>,
    /// Bereits gesetzte Stützpunkte
    coordinates: Vec<Position>,
    /// Name aus dem Moduswechsel
    name: Option<String>,
}

/// In-Memory-Zeichen-Widget
#[derive(Default)]
pub struct DrawStore {
    features: IndexMap<FeatureId, Feature>,
    feature_states: HashMap<FeatureId, FeatureState>,
    selected_ids: IndexSet<FeatureId>,
    selected_vertex_indices: Vec<usize>,
    mode: DrawMode,
    drawing: Option<DrawingSession>,
    bus: EventBus,
    next_id: u64,
}

impl DrawStore {
    /// Erstellt einen leeren Store im Select-Modus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Store aus einer FeatureCollection (ohne Benachrichtigung).
    pub fn from_collection(collection: FeatureCollection) -> Self {
        let mut store = Self::new();
        store.replace_all(collection);
        store
    }

    /// Ersetzt alle Features; Selektion und Feature-States werden verworfen.
    pub fn replace_all(&mut self, collection: FeatureCollection) {
        self.features.clear();
        self.feature_states.clear();
        self.selected_ids.clear();
        self.selected_vertex_indices.clear();
        self.drawing = None;
        self.mode = DrawMode::SimpleSelect;
        for feature in collection.features {
            let id = self.assign_id(feature.id.clone());
            self.features.insert(
                id.clone(),
                Feature {
                    id: Some(id),
                    ..feature
                },
            );
        }
        log::info!("{} Features geladen", self.features.len());
        self.bus.publish(DrawEvent::SelectionChanged { features: vec![] });
    }

    /// Exportiert alle Features als FeatureCollection.
    pub fn to_collection(&self) -> FeatureCollection {
        FeatureCollection {
            features: self.features.values().cloned().collect(),
        }
    }

    /// Alle Features in Einfügereihenfolge.
    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.features.values()
    }

    /// Feature nach ID.
    pub fn feature(&self, id: &FeatureId) -> Option<&Feature> {
        self.features.get(id)
    }

    /// Anzahl der Features.
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Selektierte IDs in Selektionsreihenfolge.
    pub fn selected_ids(&self) -> &IndexSet<FeatureId> {
        &self.selected_ids
    }

    /// Indizes der selektierten Stützpunkte (Direct-Select).
    pub fn selected_vertex_indices(&self) -> &[usize] {
        &self.selected_vertex_indices
    }

    /// Gesetzte Stützpunkte der laufenden Zeichnung.
    pub fn drawing_coordinates(&self) -> Option<&[Position]> {
        self.drawing.as_ref().map(|s| s.coordinates.as_slice())
    }

    /// Anzahl aktiver Abonnenten (nach dem letzten Publish bereinigt).
    pub fn subscriber_count(&self) -> usize {
        self.bus.subscriber_count()
    }

    /// Fügt ein vom Benutzer erstelltes Feature hinzu und meldet es.
    pub fn create_feature(&mut self, feature: Feature) -> FeatureId {
        let id = self.assign_id(feature.id.clone());
        let feature = Feature {
            id: Some(id.clone()),
            ..feature
        };
        self.features.insert(id.clone(), feature.clone());
        log::debug!("Feature {} erstellt", id);
        self.bus.publish(DrawEvent::FeaturesCreated {
            features: vec![feature],
        });
        id
    }

    /// Selektiert genau diese Features (Select-Modus) und meldet den Wechsel.
    pub fn select_features(&mut self, ids: &[FeatureId]) {
        self.mode = DrawMode::SimpleSelect;
        self.drawing = None;
        self.selected_vertex_indices.clear();
        self.selected_ids = ids
            .iter()
            .filter(|id| self.features.contains_key(*id))
            .cloned()
            .collect();
        self.publish_selection();
    }

    /// Schaltet ein Feature in der Selektion um (additive Selektion).
    pub fn toggle_feature(&mut self, id: &FeatureId) {
        let mut ids: Vec<FeatureId> = self.selected_ids.iter().cloned().collect();
        if let Some(pos) = ids.iter().position(|selected| selected == id) {
            ids.remove(pos);
        } else {
            ids.push(id.clone());
        }
        self.select_features(&ids);
    }

    /// Selektiert einen Stützpunkt eines Features (Direct-Select-Modus).
    pub fn select_vertex(&mut self, id: &FeatureId, index: usize) {
        let Some(feature) = self.features.get(id) else {
            log::debug!("Stützpunkt-Selektion ignoriert: Feature {} unbekannt", id);
            return;
        };
        if index >= feature.geometry.positions().len() {
            log::debug!("Stützpunkt {} existiert nicht in Feature {}", index, id);
            return;
        }
        self.mode = DrawMode::DirectSelect;
        self.drawing = None;
        self.selected_ids = IndexSet::from([id.clone()]);
        self.selected_vertex_indices = vec![index];
        self.publish_selection();
    }

    /// Hebt die Selektion auf.
    pub fn clear_selection(&mut self) {
        if self.selected_ids.is_empty() && self.mode == DrawMode::SimpleSelect {
            return;
        }
        self.select_features(&[]);
    }

    /// Verschiebt einen Stützpunkt und meldet die Koordinatenänderung.
    pub fn move_vertex(&mut self, id: &FeatureId, index: usize, position: Position) {
        let Some(feature) = self.features.get_mut(id) else {
            return;
        };
        match &mut feature.geometry {
            Geometry::Point(point) if index == 0 => *point = position,
            Geometry::LineString(coordinates) if index < coordinates.len() => {
                coordinates[index] = position;
            }
            _ => return,
        }
        let feature = feature.clone();
        self.bus.publish(DrawEvent::FeaturesUpdated {
            features: vec![feature],
            action: UpdateAction::ChangeCoordinates,
        });
    }

    /// Löscht alle selektierten Features und meldet sie.
    pub fn delete_selected(&mut self) {
        if self.selected_ids.is_empty() {
            return;
        }
        let ids: Vec<FeatureId> = self.selected_ids.iter().cloned().collect();
        let removed: Vec<Feature> = ids
            .iter()
            .filter_map(|id| self.features.shift_remove(id))
            .collect();
        for id in &ids {
            self.feature_states.remove(id);
        }
        self.selected_ids.clear();
        self.selected_vertex_indices.clear();
        self.mode = DrawMode::SimpleSelect;
        log::info!("{} Feature(s) gelöscht", removed.len());
        self.bus.publish(DrawEvent::FeaturesDeleted { features: removed });
    }

    /// Startet eine neue Linie.
    pub fn start_line(&mut self) {
        self.change_mode(DrawMode::DrawLineString, ModeOptions::None);
    }

    /// Zeigerbewegung während des Zeichnens: meldet die Vorschau-Geometrie.
    pub fn draw_pointer_moved(&mut self, cursor: Position) {
        let Some(session) = self.drawing.as_ref() else {
            return;
        };
        if session.coordinates.is_empty() {
            return;
        }
        let mut coordinates = session.coordinates.clone();
        coordinates.push(cursor);
        let feature = Feature {
            id: session.feature_id.clone(),
            properties: serde_json::Map::new(),
            geometry: Geometry::LineString(coordinates),
        };
        let in_progress = InProgress {
            name: session.name.clone(),
        };
        self.bus.publish(DrawEvent::LiveDragMove {
            feature,
            in_progress,
        });
    }

    /// Setzt einen Stützpunkt in der laufenden Zeichnung.
    pub fn draw_click(&mut self, position: Position) {
        if let Some(session) = self.drawing.as_mut() {
            session.coordinates.push(position);
        }
    }

    /// Schließt die Zeichnung ab und meldet Erstellung bzw. Änderung.
    ///
    /// Linien mit weniger als zwei Stützpunkten werden verworfen.
    pub fn finish_drawing(&mut self) -> Option<FeatureId> {
        let session = self.drawing.take()?;
        self.mode = DrawMode::SimpleSelect;
        if session.coordinates.len() < 2 {
            log::debug!("Zeichnung verworfen: zu wenige Stützpunkte");
            return None;
        }

        let id = match session.feature_id.filter(|id| self.features.contains_key(id)) {
            Some(id) => {
                let Some(feature) = self.features.get_mut(&id) else {
                    return None;
                };
                feature.geometry = Geometry::LineString(session.coordinates);
                let feature = feature.clone();
                self.bus.publish(DrawEvent::FeaturesUpdated {
                    features: vec![feature],
                    action: UpdateAction::ChangeCoordinates,
                });
                id
            }
            None => {
                let id = self.create_feature(Feature {
                    id: None,
                    properties: serde_json::Map::new(),
                    geometry: Geometry::LineString(session.coordinates),
                });
                if let Some(name) = session.name {
                    self.feature_states.insert(id.clone(), FeatureState::named(name));
                }
                id
            }
        };

        self.select_features(std::slice::from_ref(&id));
        Some(id)
    }

    /// Bricht die laufende Zeichnung ohne Änderungen ab.
    pub fn cancel_drawing(&mut self) {
        if self.drawing.take().is_some() {
            self.mode = DrawMode::SimpleSelect;
            log::debug!("Zeichnung abgebrochen");
        }
    }

    fn assign_id(&mut self, requested: Option<FeatureId>) -> FeatureId {
        if let Some(id) = requested {
            return id;
        }
        loop {
            self.next_id += 1;
            let id = FeatureId::new(format!("feature-{}", self.next_id));
            if !self.features.contains_key(&id) {
                return id;
            }
        }
    }

    fn publish_selection(&mut self) {
        let features = self.selected_features();
        self.bus.publish(DrawEvent::SelectionChanged { features });
    }
}

impl DrawWidget for DrawStore {
    fn subscribe(&mut self, kinds: &[DrawEventKind]) -> Subscription {
        self.bus.subscribe(kinds)
    }

    fn selected_features(&self) -> Vec<Feature> {
        self.selected_ids
            .iter()
            .filter_map(|id| self.features.get(id).cloned())
            .collect()
    }

    fn selected_vertices(&self) -> Vec<Position> {
        if self.mode != DrawMode::DirectSelect {
            return Vec::new();
        }
        let Some(feature) = self.selected_ids.first().and_then(|id| self.features.get(id)) else {
            return Vec::new();
        };
        let positions = feature.geometry.positions();
        self.selected_vertex_indices
            .iter()
            .filter_map(|&index| positions.get(index).cloned())
            .collect()
    }

    fn mode(&self) -> DrawMode {
        self.mode
    }

    fn add_feature(&mut self, feature: Feature) -> Vec<FeatureId> {
        let id = self.assign_id(feature.id.clone());
        self.features.insert(
            id.clone(),
            Feature {
                id: Some(id.clone()),
                ..feature
            },
        );
        vec![id]
    }

    fn delete_features(&mut self, ids: &[FeatureId]) {
        for id in ids {
            self.features.shift_remove(id);
            self.feature_states.remove(id);
            self.selected_ids.shift_remove(id);
        }
    }

    fn change_mode(&mut self, mode: DrawMode, options: ModeOptions) {
        self.selected_vertex_indices.clear();
        self.drawing = None;

        match options {
            ModeOptions::SelectFeatures { feature_ids } => {
                self.selected_ids = feature_ids
                    .into_iter()
                    .filter(|id| self.features.contains_key(id))
                    .collect();
            }
            ModeOptions::ContinueLine { hint, .. } if mode == DrawMode::DrawLineString => {
                let coordinates = hint
                    .continuing_feature_id
                    .as_ref()
                    .and_then(|id| self.features.get(id))
                    .and_then(|f| f.line_coordinates())
                    .map(<[Position]>::to_vec)
                    .unwrap_or_else(|| vec![hint.start_coordinate.clone()]);
                self.selected_ids.clear();
                self.drawing = Some(DrawingSession {
                    feature_id: hint.continuing_feature_id,
                    coordinates,
                    name: hint.seed_name,
                });
            }
            _ if mode == DrawMode::DrawLineString => {
                self.selected_ids.clear();
                self.drawing = Some(DrawingSession {
                    feature_id: None,
                    coordinates: Vec::new(),
                    name: None,
                });
            }
            _ => {}
        }

        self.mode = mode;
        log::debug!("Zeichenmodus: {:?}", mode);
    }

    fn feature_state(&self, id: &FeatureId) -> Option<FeatureState> {
        self.feature_states.get(id).cloned()
    }

    fn set_feature_state(&mut self, id: &FeatureId, state: FeatureState) {
        self.feature_states.insert(id.clone(), state);
    }

    fn emit_selection_changed(&mut self, features: Vec<Feature>) {
        self.bus.publish(DrawEvent::SelectionChanged { features });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_line() -> DrawStore {
        DrawStore::from_collection(FeatureCollection {
            features: vec![Feature::line_string("l1", [[0.0, 0.0], [1.0, 0.0]])],
        })
    }

    #[test]
    fn test_add_feature_ohne_id_vergibt_neue_id() {
        let mut store = store_with_line();
        let mut copy = store.feature(&"l1".into()).cloned().expect("l1 vorhanden");
        copy.id = None;

        let ids = store.add_feature(copy);
        assert_eq!(ids.len(), 1);
        assert_ne!(ids[0], FeatureId::new("l1"));
        assert_eq!(store.feature_count(), 2);
    }

    #[test]
    fn test_add_feature_mit_bestehender_id_ersetzt() {
        let mut store = store_with_line();
        let replacement = Feature::line_string("l1", [[0.0, 0.0], [2.0, 0.0], [3.0, 0.0]]);

        store.add_feature(replacement.clone());
        assert_eq!(store.feature_count(), 1);
        assert_eq!(store.feature(&"l1".into()), Some(&replacement));
    }

    #[test]
    fn test_select_vertex_liefert_position_im_direct_select() {
        let mut store = store_with_line();
        store.select_vertex(&"l1".into(), 1);

        assert_eq!(store.mode(), DrawMode::DirectSelect);
        assert_eq!(store.selected_vertices(), vec![Position::lon_lat(1.0, 0.0)]);

        store.select_features(&["l1".into()]);
        assert!(store.selected_vertices().is_empty());
    }

    #[test]
    fn test_fortgesetzte_linie_meldet_update() {
        let mut store = store_with_line();
        let sub = store.subscribe(&DrawEventKind::ALL);
        store.change_mode(
            DrawMode::DrawLineString,
            ModeOptions::ContinueLine {
                hint: crate::core::StartHint {
                    start_coordinate: Position::lon_lat(1.0, 0.0),
                    continuing_feature_id: Some("l1".into()),
                    seed_name: Some("Weg".into()),
                },
                show_name_prompt: false,
            },
        );

        store.draw_pointer_moved(Position::lon_lat(1.5, 0.0));
        match sub.next_event() {
            Some(DrawEvent::LiveDragMove {
                feature,
                in_progress,
            }) => {
                assert_eq!(feature.geometry.positions().len(), 3);
                assert_eq!(in_progress.name.as_deref(), Some("Weg"));
            }
            other => panic!("LiveDragMove erwartet, erhalten: {other:?}"),
        }

        store.draw_click(Position::lon_lat(2.0, 0.0));
        assert_eq!(store.finish_drawing(), Some(FeatureId::new("l1")));
        assert!(matches!(
            sub.next_event(),
            Some(DrawEvent::FeaturesUpdated {
                action: UpdateAction::ChangeCoordinates,
                ..
            })
        ));
        assert!(matches!(
            sub.next_event(),
            Some(DrawEvent::SelectionChanged { .. })
        ));
        let line = store.feature(&"l1".into()).expect("l1 vorhanden");
        assert_eq!(line.geometry.positions().len(), 3);
    }

    #[test]
    fn test_trait_methoden_loesen_keine_events_aus() {
        let mut store = store_with_line();
        let sub = store.subscribe(&DrawEventKind::ALL);

        store.delete_features(&["l1".into()]);
        store.add_feature(Feature::point("p", [0.0, 0.0]));
        store.change_mode(DrawMode::SimpleSelect, ModeOptions::None);

        assert!(sub.next_event().is_none());
    }
}
