//! CPU frame buffer and drawing primitives
//!
//! All scene drawing happens here, into a plain RGBA byte buffer that the
//! GPU pass uploads as a texture. Every primitive clips against the buffer
//! edges, so callers can draw with unclamped screen coordinates.

/// RGBA8 frame buffer, row-major.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes for texture upload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Fill the whole buffer with an opaque color.
    pub fn clear(&mut self, color: [u8; 4]) {
        for pixel in self.data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Pixel at (x, y), or transparent black outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> [u8; 4] {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return [0, 0, 0, 0];
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Write an opaque pixel. Out-of-bounds writes are dropped.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.data[idx] = color[0];
        self.data[idx + 1] = color[1];
        self.data[idx + 2] = color[2];
        self.data[idx + 3] = 255;
    }

    /// Alpha-blend a pixel over the existing one.
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        let alpha = color[3] as u32;
        let inv = 255 - alpha;
        for c in 0..3 {
            let src = color[c] as u32;
            let dst = self.data[idx + c] as u32;
            self.data[idx + c] = ((src * alpha + dst * inv) / 255) as u8;
        }
        self.data[idx + 3] = 255;
    }

    /// Fill an axis-aligned rectangle with an opaque color.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: [u8; 4]) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i32);
        let y1 = (y + h).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.put_pixel(px, py, color);
            }
        }
    }

    /// Alpha-blend a translucent color over the whole buffer.
    pub fn blend_fill(&mut self, color: [u8; 4]) {
        let alpha = color[3] as u32;
        let inv = 255 - alpha;
        for pixel in self.data.chunks_exact_mut(4) {
            for c in 0..3 {
                let src = color[c] as u32;
                let dst = pixel[c] as u32;
                pixel[c] = ((src * alpha + dst * inv) / 255) as u8;
            }
            pixel[3] = 255;
        }
    }

    /// Fill a circle centered at (cx, cy).
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: [u8; 4]) {
        let r = radius.max(0.0);
        let x0 = (cx - r).floor() as i32;
        let x1 = (cx + r).ceil() as i32;
        let y0 = (cy - r).floor() as i32;
        let y1 = (cy + r).ceil() as i32;
        let r2 = r * r;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.put_pixel(px, py, color);
                }
            }
        }
    }

    /// Alpha-blend a straight line from (x0, y0) to (x1, y1).
    pub fn blend_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: [u8; 4]) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let px = (x0 + dx * t).round() as i32;
            let py = (y0 + dy * t).round() as i32;
            self.blend_pixel(px, py, color);
        }
    }

    /// Nearest-neighbor blit of a `src_w x src_h` sprite into the
    /// destination rectangle. `sample` returns RGBA for a source texel;
    /// texels with alpha below 128 are skipped.
    pub fn blit_scaled(
        &mut self,
        dest_x: i32,
        dest_y: i32,
        dest_w: i32,
        dest_h: i32,
        src_w: u32,
        src_h: u32,
        sample: impl Fn(u32, u32) -> [u8; 4],
    ) {
        if dest_w <= 0 || dest_h <= 0 || src_w == 0 || src_h == 0 {
            return;
        }
        let x0 = dest_x.max(0);
        let y0 = dest_y.max(0);
        let x1 = (dest_x + dest_w).min(self.width as i32);
        let y1 = (dest_y + dest_h).min(self.height as i32);

        let scale_x = src_w as f32 / dest_w as f32;
        let scale_y = src_h as f32 / dest_h as f32;

        for py in y0..y1 {
            let src_y = (((py - dest_y) as f32 * scale_y) as u32).min(src_h - 1);
            for px in x0..x1 {
                let src_x = (((px - dest_x) as f32 * scale_x) as u32).min(src_w - 1);
                let texel = sample(src_x, src_y);
                if texel[3] < 128 {
                    continue;
                }
                self.put_pixel(px, py, texel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear() {
        let mut frame = FrameBuffer::new(4, 4);
        frame.clear([10, 20, 30, 255]);
        assert_eq!(frame.pixel(0, 0), [10, 20, 30, 255]);
        assert_eq!(frame.pixel(3, 3), [10, 20, 30, 255]);
    }

    #[test]
    fn test_put_pixel_out_of_bounds_ignored() {
        let mut frame = FrameBuffer::new(4, 4);
        frame.put_pixel(-1, 0, [255; 4]);
        frame.put_pixel(0, 4, [255; 4]);
        frame.put_pixel(100, 100, [255; 4]);
        assert!(frame.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut frame = FrameBuffer::new(4, 4);
        frame.fill_rect(2, 2, 10, 10, [255, 0, 0, 255]);
        assert_eq!(frame.pixel(1, 1), [0, 0, 0, 0]);
        assert_eq!(frame.pixel(2, 2), [255, 0, 0, 255]);
        assert_eq!(frame.pixel(3, 3), [255, 0, 0, 255]);
    }

    #[test]
    fn test_blend_pixel_half_alpha() {
        let mut frame = FrameBuffer::new(1, 1);
        frame.clear([0, 0, 0, 255]);
        frame.blend_pixel(0, 0, [255, 255, 255, 128]);
        let [r, g, b, a] = frame.pixel(0, 0);
        assert!(r > 120 && r < 135);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(a, 255);
    }

    #[test]
    fn test_blend_fill_darkens() {
        let mut frame = FrameBuffer::new(2, 2);
        frame.clear([200, 200, 200, 255]);
        frame.blend_fill([0, 0, 0, 77]); // 30% black
        let [r, ..] = frame.pixel(0, 0);
        assert!(r > 135 && r < 145, "expected ~140, got {}", r);
    }

    #[test]
    fn test_fill_circle_center_and_bounds() {
        let mut frame = FrameBuffer::new(16, 16);
        frame.fill_circle(8.0, 8.0, 3.0, [0, 255, 0, 255]);
        assert_eq!(frame.pixel(8, 8), [0, 255, 0, 255]);
        // Well outside the radius stays untouched
        assert_eq!(frame.pixel(1, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill_circle_off_screen_does_not_panic() {
        let mut frame = FrameBuffer::new(8, 8);
        frame.fill_circle(-100.0, -100.0, 5.0, [255; 4]);
        frame.fill_circle(1000.0, 1000.0, 50.0, [255; 4]);
        assert!(frame.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_blit_scaled_fills_dest() {
        let mut frame = FrameBuffer::new(8, 8);
        frame.blit_scaled(0, 0, 8, 8, 2, 2, |_, _| [9, 9, 9, 255]);
        assert_eq!(frame.pixel(0, 0), [9, 9, 9, 255]);
        assert_eq!(frame.pixel(7, 7), [9, 9, 9, 255]);
    }

    #[test]
    fn test_blit_scaled_skips_transparent() {
        let mut frame = FrameBuffer::new(4, 4);
        frame.clear([1, 1, 1, 255]);
        frame.blit_scaled(0, 0, 4, 4, 1, 1, |_, _| [50, 50, 50, 0]);
        assert_eq!(frame.pixel(0, 0), [1, 1, 1, 255]);
    }

    #[test]
    fn test_blit_scaled_clips() {
        let mut frame = FrameBuffer::new(4, 4);
        frame.blit_scaled(-2, -2, 8, 8, 2, 2, |_, _| [7, 7, 7, 255]);
        assert_eq!(frame.pixel(0, 0), [7, 7, 7, 255]);
        assert_eq!(frame.pixel(3, 3), [7, 7, 7, 255]);
    }
}
