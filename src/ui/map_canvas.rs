//! Karten-Zeichenfläche des Demo-Hosts: Darstellung und Interaktion mit dem DrawStore.
//!
//! Die Zeichenfläche spielt das externe Zeichen-Widget: Klicks selektieren,
//! Stützpunkte werden gezogen, Linien gezeichnet. Alle Änderungen laufen über
//! die Host-Methoden des [`DrawStore`], der dafür Benachrichtigungen auslöst.

use crate::core::{
    DrawMode, DrawStore, DrawWidget, Feature, FeatureId, Geometry, MapCamera, Position,
};
use glam::DVec2;

/// Pick-Radius in Pixeln.
const PICK_RADIUS_PX: f64 = 8.0;
/// Zoom-Faktor pro Scroll-Einheit.
const SCROLL_ZOOM_STEP: f64 = 1.0015;

const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(60, 120, 220);
const SELECTED_COLOR: egui::Color32 = egui::Color32::from_rgb(240, 140, 20);
const DRAFT_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 170, 90);

/// Zustand der Kartenansicht
#[derive(Default)]
pub struct MapCanvas {
    /// Kamera (lon/lat)
    pub camera: MapCamera,
    vertex_drag: Option<(FeatureId, usize)>,
}

/// Treffer eines Picks in Bildschirm-Koordinaten
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickHit {
    /// Stützpunkt eines Features
    Vertex { id: FeatureId, index: usize },
    /// Feature als Ganzes
    Feature { id: FeatureId },
}

impl MapCanvas {
    /// Erstellt eine Ansicht über dem Nullpunkt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Richtet die Kamera auf alle Features aus.
    pub fn fit_to_store(&mut self, store: &DrawStore) {
        self.camera
            .fit_to(store.features().flat_map(|f| f.geometry.positions()));
    }

    /// Zeichnet die Karte und verarbeitet Maus- und Tastatureingaben.
    pub fn show(&mut self, ui: &mut egui::Ui, store: &mut DrawStore) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        let size = DVec2::new(rect.width() as f64, rect.height() as f64);
        let origin = rect.min;

        let to_screen = |p: &Position| {
            let s = self.camera.world_to_screen(p, size);
            egui::pos2(origin.x + s.x as f32, origin.y + s.y as f32)
        };

        paint_features(ui.painter_at(rect), store, &to_screen);
        let hover = response.hover_pos().map(|pos| local(pos, origin));
        if let (Some(coordinates), Some(cursor)) = (store.drawing_coordinates(), response.hover_pos()) {
            let mut points: Vec<egui::Pos2> = coordinates.iter().map(&to_screen).collect();
            points.push(cursor);
            ui.painter_at(rect)
                .add(egui::Shape::dashed_line(&points, egui::Stroke::new(2.0, DRAFT_COLOR), 6.0, 4.0));
        }

        self.handle_camera(ui, &response, hover, size);

        if store.mode() == DrawMode::DrawLineString {
            self.handle_drawing(ui, &response, store, hover, size);
        } else {
            self.handle_selection(ui, &response, store, size);
        }
    }

    fn handle_camera(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        hover: Option<DVec2>,
        size: DVec2,
    ) {
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            let dpp = self.camera.degrees_per_pixel(size.y);
            self.camera
                .pan(DVec2::new(-delta.x as f64 * dpp, delta.y as f64 * dpp));
        }

        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 && hover.is_some() {
            self.camera.zoom_by(SCROLL_ZOOM_STEP.powf(scroll as f64));
        }
    }

    fn handle_drawing(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        store: &mut DrawStore,
        hover: Option<DVec2>,
        size: DVec2,
    ) {
        let world = |p: DVec2| self.camera.screen_to_world(p, size);

        if response.double_clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            store.finish_drawing();
            return;
        }
        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            store.cancel_drawing();
            return;
        }
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                store.draw_click(world(local(pos, response.rect.min)));
            }
        }
        if let Some(cursor) = hover {
            if ui.input(|i| i.pointer.delta() != egui::Vec2::ZERO) {
                store.draw_pointer_moved(world(cursor));
            }
        }
    }

    fn handle_selection(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        store: &mut DrawStore,
        size: DVec2,
    ) {
        let pointer = response
            .interact_pointer_pos()
            .map(|pos| local(pos, response.rect.min));

        if response.drag_started_by(egui::PointerButton::Primary) {
            self.vertex_drag = pointer
                .and_then(|p| pick(&self.camera, store, p, size))
                .and_then(|hit| match hit {
                    PickHit::Vertex { id, index } => Some((id, index)),
                    PickHit::Feature { .. } => None,
                });
            if let Some((id, index)) = &self.vertex_drag {
                store.select_vertex(id, *index);
            }
        }
        if response.dragged_by(egui::PointerButton::Primary) {
            if let (Some((id, index)), Some(p)) = (&self.vertex_drag, pointer) {
                store.move_vertex(id, *index, self.camera.screen_to_world(p, size));
            }
        }
        if response.drag_stopped() {
            self.vertex_drag = None;
        }

        if response.clicked() {
            let additive = ui.input(|i| i.modifiers.shift);
            match pointer.and_then(|p| pick(&self.camera, store, p, size)) {
                Some(PickHit::Vertex { id, index }) => store.select_vertex(&id, index),
                Some(PickHit::Feature { id }) if additive => store.toggle_feature(&id),
                Some(PickHit::Feature { id }) => store.select_features(&[id]),
                None => store.clear_selection(),
            }
        }

        if ui.input(|i| i.key_pressed(egui::Key::Delete)) {
            store.delete_selected();
        }
    }
}

fn local(pos: egui::Pos2, origin: egui::Pos2) -> DVec2 {
    DVec2::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64)
}

/// Sucht das Feature unter dem Zeiger.
///
/// Stützpunkte selektierter Features haben Vorrang vor ganzen Features;
/// bei mehreren Treffern gewinnt das zuletzt eingefügte Feature.
pub fn pick(camera: &MapCamera, store: &DrawStore, pointer: DVec2, size: DVec2) -> Option<PickHit> {
    let screen = |p: &Position| camera.world_to_screen(p, size);

    for id in store.selected_ids() {
        let Some(feature) = store.feature(id) else {
            continue;
        };
        if feature.line_coordinates().is_none() {
            continue;
        }
        let hit = feature
            .geometry
            .positions()
            .iter()
            .position(|p| screen(p).distance(pointer) <= PICK_RADIUS_PX);
        if let Some(index) = hit {
            return Some(PickHit::Vertex {
                id: id.clone(),
                index,
            });
        }
    }

    let features: Vec<&Feature> = store.features().collect();
    features.into_iter().rev().find_map(|feature| {
        let id = feature.id.clone()?;
        let hit = match &feature.geometry {
            Geometry::Point(p) => screen(p).distance(pointer) <= PICK_RADIUS_PX,
            Geometry::LineString(coordinates) => coordinates.windows(2).any(|w| {
                segment_distance(pointer, screen(&w[0]), screen(&w[1])) <= PICK_RADIUS_PX
            }),
        };
        hit.then_some(PickHit::Feature { id })
    })
}

/// Abstand eines Punkts zu einer Strecke (Pixel).
fn segment_distance(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

fn paint_features(
    painter: egui::Painter,
    store: &DrawStore,
    to_screen: &impl Fn(&Position) -> egui::Pos2,
) {
    for feature in store.features() {
        let selected = feature
            .id
            .as_ref()
            .is_some_and(|id| store.selected_ids().contains(id));
        let color = if selected { SELECTED_COLOR } else { LINE_COLOR };

        match &feature.geometry {
            Geometry::Point(p) => {
                painter.circle_filled(to_screen(p), 6.0, color);
            }
            Geometry::LineString(coordinates) => {
                let points: Vec<egui::Pos2> = coordinates.iter().map(to_screen).collect();
                painter.add(egui::Shape::line(points.clone(), egui::Stroke::new(3.0, color)));
                if selected {
                    for (index, point) in points.iter().enumerate() {
                        let vertex_selected = store.mode() == DrawMode::DirectSelect
                            && store.selected_vertex_indices().contains(&index);
                        let fill = if vertex_selected {
                            egui::Color32::WHITE
                        } else {
                            SELECTED_COLOR
                        };
                        painter.rect_filled(
                            egui::Rect::from_center_size(*point, egui::vec2(8.0, 8.0)),
                            1.0,
                            fill,
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeatureCollection;

    fn store() -> DrawStore {
        DrawStore::from_collection(FeatureCollection {
            features: vec![
                Feature::line_string("l", [[-0.01, 0.0], [0.01, 0.0]]),
                Feature::point("p", [0.0, 0.02]),
            ],
        })
    }

    const SIZE: DVec2 = DVec2::new(800.0, 600.0);

    #[test]
    fn test_pick_linie_und_punkt() {
        let camera = MapCamera::new();
        let store = store();

        let center = SIZE / 2.0;
        assert_eq!(
            pick(&camera, &store, center + DVec2::new(0.0, 3.0), SIZE),
            Some(PickHit::Feature { id: "l".into() })
        );

        let point = camera.world_to_screen(&Position::lon_lat(0.0, 0.02), SIZE);
        assert_eq!(
            pick(&camera, &store, point, SIZE),
            Some(PickHit::Feature { id: "p".into() })
        );
        assert_eq!(pick(&camera, &store, DVec2::new(5.0, 5.0), SIZE), None);
    }

    #[test]
    fn test_stuetzpunkt_nur_bei_selektierter_linie() {
        let camera = MapCamera::new();
        let mut store = store();
        let end = camera.world_to_screen(&Position::lon_lat(0.01, 0.0), SIZE);

        assert!(matches!(
            pick(&camera, &store, end, SIZE),
            Some(PickHit::Feature { .. })
        ));

        store.select_features(&["l".into()]);
        assert_eq!(
            pick(&camera, &store, end, SIZE),
            Some(PickHit::Vertex {
                id: "l".into(),
                index: 1
            })
        );
    }

    #[test]
    fn test_segment_abstand() {
        let d = segment_distance(DVec2::new(5.0, 3.0), DVec2::ZERO, DVec2::new(10.0, 0.0));
        assert!((d - 3.0).abs() < 1e-12);
        let d = segment_distance(DVec2::new(-4.0, 3.0), DVec2::ZERO, DVec2::new(10.0, 0.0));
        assert!((d - 5.0).abs() < 1e-12);
    }
}
