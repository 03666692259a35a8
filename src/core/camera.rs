//! 2D-Kartenkamera für Pan und Zoom in Grad-Koordinaten (lon/lat).

use super::Position;
use glam::DVec2;

/// Kartenkamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct MapCamera {
    /// Kartenmitte in Grad (x = lon, y = lat)
    pub center: DVec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f64,
}

impl MapCamera {
    /// Sichtbare halbe Kartenhöhe in Grad bei Zoom 1.0.
    pub const BASE_HALF_EXTENT_DEG: f64 = 0.05;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.001;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 1000.0;

    /// Erstellt eine Kamera über dem Nullpunkt.
    pub fn new() -> Self {
        Self {
            center: DVec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf eine Position.
    pub fn look_at(&mut self, target: &Position) {
        self.center = DVec2::new(target.lon(), target.lat());
    }

    /// Verschiebt die Kamera um ein Delta in Grad.
    pub fn pan(&mut self, delta: DVec2) {
        self.center += delta;
    }

    /// Ändert den Zoom-Level.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Grad pro Bildschirm-Pixel.
    pub fn degrees_per_pixel(&self, viewport_height: f64) -> f64 {
        2.0 * Self::BASE_HALF_EXTENT_DEG / (self.zoom * viewport_height.max(1.0))
    }

    /// Konvertiert Bildschirm-Koordinaten (Pixel, y nach unten) in lon/lat.
    pub fn screen_to_world(&self, screen_pos: DVec2, screen_size: DVec2) -> Position {
        let dpp = self.degrees_per_pixel(screen_size.y);
        let offset = screen_pos - screen_size / 2.0;
        Position::lon_lat(self.center.x + offset.x * dpp, self.center.y - offset.y * dpp)
    }

    /// Konvertiert lon/lat in Bildschirm-Koordinaten (Pixel, y nach unten).
    pub fn world_to_screen(&self, position: &Position, screen_size: DVec2) -> DVec2 {
        let dpp = self.degrees_per_pixel(screen_size.y);
        let delta = DVec2::new(position.lon() - self.center.x, self.center.y - position.lat());
        screen_size / 2.0 + delta / dpp
    }

    /// Richtet die Kamera so aus, dass alle Positionen sichtbar sind.
    pub fn fit_to<'a>(&mut self, positions: impl IntoIterator<Item = &'a Position>) {
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        for position in positions {
            let p = DVec2::new(position.lon(), position.lat());
            min = min.min(p);
            max = max.max(p);
        }
        if !min.is_finite() || !max.is_finite() {
            return;
        }
        self.center = (min + max) / 2.0;
        let half_extent = ((max - min) / 2.0).max_element().max(1e-6) * 1.2;
        self.zoom = (Self::BASE_HALF_EXTENT_DEG / half_extent).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_pan() {
        let mut camera = MapCamera::new();
        camera.pan(DVec2::new(10.0, 5.0));
        assert_relative_eq!(camera.center.x, 10.0);
        assert_relative_eq!(camera.center.y, 5.0);
    }

    #[test]
    fn test_camera_zoom_wird_begrenzt() {
        let mut camera = MapCamera::new();
        camera.zoom_by(2.0);
        assert_relative_eq!(camera.zoom, 2.0);

        camera.zoom_by(1e9);
        assert_relative_eq!(camera.zoom, MapCamera::ZOOM_MAX);
    }

    #[test]
    fn test_screen_world_hin_und_zurueck() {
        let mut camera = MapCamera::new();
        camera.center = DVec2::new(8.5, 47.3);
        camera.zoom = 4.0;
        let size = DVec2::new(800.0, 600.0);

        let world = camera.screen_to_world(DVec2::new(100.0, 450.0), size);
        let screen = camera.world_to_screen(&world, size);
        assert_relative_eq!(screen.x, 100.0, epsilon = 1e-6);
        assert_relative_eq!(screen.y, 450.0, epsilon = 1e-6);
        // Bildschirm unten = südlicher
        assert!(world.lat() < 47.3);
    }

    #[test]
    fn test_fit_to_zentriert_auf_bounds() {
        let mut camera = MapCamera::new();
        let positions = [Position::lon_lat(0.0, 0.0), Position::lon_lat(2.0, 1.0)];
        camera.fit_to(positions.iter());
        assert_relative_eq!(camera.center.x, 1.0);
        assert_relative_eq!(camera.center.y, 0.5);
    }
}
