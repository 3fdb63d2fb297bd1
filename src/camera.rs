//! Camera - pan/zoom state and the world-to-screen transform

use glam::Vec2;

use crate::world::TILE_SIZE;

/// Tile-coordinate window visible under the current camera. End bounds are
/// exclusive and may extend past the grid; the renderer clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRange {
    pub start_col: i32,
    pub start_row: i32,
    pub end_col: i32,
    pub end_row: i32,
}

/// Pan offset in world units plus a zoom factor. Mutated only by input
/// handling between frames; render reads it immutably.
#[derive(Debug, Clone)]
pub struct Camera {
    pub pan: Vec2,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl Camera {
    pub fn new(min_zoom: f32, max_zoom: f32) -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            min_zoom,
            max_zoom,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// World position to screen pixels: `(p - pan) * zoom`.
    #[inline]
    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        (p - self.pan) * self.zoom
    }

    /// Multiply zoom by `factor` and clamp to the configured bounds.
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        log::debug!("Zoom: factor={:.2} -> {:.2}", factor, self.zoom);
    }

    /// Apply a pointer-drag delta in screen pixels. Scaled by 1/zoom so a
    /// fixed-pixel drag moves the world by the same perceived amount at
    /// every zoom level.
    pub fn pan_by_screen_delta(&mut self, delta: Vec2) {
        self.pan -= delta / self.zoom;
    }

    /// Tile window covering the viewport: floor for the start bound, ceil
    /// for the span, so partially visible edge tiles are included.
    pub fn visible_tile_range(&self, viewport_width: u32, viewport_height: u32) -> TileRange {
        let tile = TILE_SIZE as f32;
        let start_col = (self.pan.x / tile).floor() as i32;
        let start_row = (self.pan.y / tile).floor() as i32;
        let span_cols = (viewport_width as f32 / (tile * self.zoom)).ceil() as i32;
        let span_rows = (viewport_height as f32 / (tile * self.zoom)).ceil() as i32;

        TileRange {
            start_col,
            start_row,
            end_col: start_col + span_cols,
            end_row: start_row + span_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(0.5, 5.0)
    }

    #[test]
    fn test_world_to_screen_identity() {
        let cam = camera();
        assert_eq!(cam.world_to_screen(Vec2::new(10.0, 20.0)), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_world_to_screen_pan_and_zoom() {
        let mut cam = camera();
        cam.pan = Vec2::new(100.0, 50.0);
        cam.zoom_by(2.0);
        assert_eq!(
            cam.world_to_screen(Vec2::new(110.0, 60.0)),
            Vec2::new(20.0, 20.0)
        );
    }

    #[test]
    fn test_zoom_linear_at_origin() {
        // Doubling zoom with pan at the origin doubles screen distance
        let mut cam = camera();
        let before = cam.world_to_screen(Vec2::new(7.0, 3.0));
        cam.zoom_by(2.0);
        let after = cam.world_to_screen(Vec2::new(7.0, 3.0));
        assert_eq!(after, before * 2.0);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut cam = camera();
        for _ in 0..100 {
            cam.zoom_by(1.1);
        }
        assert_eq!(cam.zoom(), 5.0);
        for _ in 0..100 {
            cam.zoom_by(0.9);
        }
        assert_eq!(cam.zoom(), 0.5);
    }

    #[test]
    fn test_zoom_stays_in_bounds_under_mixed_input() {
        let mut cam = camera();
        for i in 0..1000 {
            cam.zoom_by(if i % 3 == 0 { 0.9 } else { 1.1 });
            assert!(cam.zoom() >= 0.5 && cam.zoom() <= 5.0);
        }
    }

    #[test]
    fn test_pan_scaled_by_inverse_zoom() {
        let mut cam = camera();
        cam.zoom_by(2.0);
        cam.pan_by_screen_delta(Vec2::new(64.0, 0.0));
        assert_eq!(cam.pan, Vec2::new(-32.0, 0.0));

        let mut cam = camera();
        cam.pan_by_screen_delta(Vec2::new(64.0, 0.0));
        assert_eq!(cam.pan, Vec2::new(-64.0, 0.0));
    }

    #[test]
    fn test_visible_range_at_origin() {
        let cam = camera();
        let range = cam.visible_tile_range(320, 320);
        assert_eq!(
            range,
            TileRange {
                start_col: 0,
                start_row: 0,
                end_col: 10,
                end_row: 10,
            }
        );
    }

    #[test]
    fn test_visible_range_includes_partial_edge_tiles() {
        let mut cam = camera();
        cam.zoom_by(2.0);
        // 300px viewport at zoom 2 covers 150 world units = 4.6875 tiles
        let range = cam.visible_tile_range(300, 300);
        assert_eq!(range.end_col - range.start_col, 5);
    }

    #[test]
    fn test_visible_range_negative_pan() {
        let mut cam = camera();
        cam.pan = Vec2::new(-33.0, -1.0);
        let range = cam.visible_tile_range(320, 320);
        assert_eq!(range.start_col, -2);
        assert_eq!(range.start_row, -1);
    }
}
