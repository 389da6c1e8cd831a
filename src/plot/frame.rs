//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use std::collections::HashMap;

use fontdue::{Font, Metrics};

/// Glyph cache key: (character, font_size as bits)
pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color
/// with full opacity.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to
    /// what the buffer actually holds.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 {
            height.min(buffer.len() / width)
        } else {
            0
        };

        Self {
            buffer,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle specified by pixel coordinates
    pub fn fill_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let x0 = x.min(self.width);
        let y0 = y.min(self.height);
        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);

        for py in y0..y1 {
            let row_start = py * self.width;
            self.buffer[row_start + x0..row_start + x1].fill(color);
        }
    }

    /// Draw a 1px rectangle outline
    pub fn stroke_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        self.fill_rect_px(x, y, w, 1, color);
        self.fill_rect_px(x, y + h.saturating_sub(1), w, 1, color);
        self.fill_rect_px(x, y, 1, h, color);
        self.fill_rect_px(x + w.saturating_sub(1), y, 1, h, color);
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend a pixel with alpha in [0, 1]
    #[inline]
    pub fn blend_pixel(&mut self, x: isize, y: isize, color: u32, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        if alpha <= 0.0 {
            return;
        }

        let idx = y as usize * self.width + x as usize;
        self.buffer[idx] = if alpha >= 1.0 {
            color | 0xFF000000
        } else {
            blend_colors(self.buffer[idx], color, alpha)
        };
    }

    /// Fill a circle centered at (cx, cy) with a one-pixel anti-aliased rim
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: u32) {
        if radius <= 0.0 {
            return;
        }
        let color_alpha = ((color >> 24) & 0xFF) as f32 / 255.0;

        let x0 = (cx - radius - 1.0).floor() as isize;
        let x1 = (cx + radius + 1.0).ceil() as isize;
        let y0 = (cy - radius - 1.0).floor() as isize;
        let y1 = (cy + radius + 1.0).ceil() as isize;

        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                let coverage = (radius + 0.5 - dist).clamp(0.0, 1.0);
                self.blend_pixel(px, py, color, coverage * color_alpha);
            }
        }
    }
}

/// Text rendering context wrapping font and glyph cache.
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    line_height: usize,
}

impl<'a> TextPainter<'a> {
    pub fn new(font: &'a Font, glyph_cache: &'a mut GlyphCache, font_size: f32) -> Self {
        let (ascent, line_height) = match font.horizontal_line_metrics(font_size) {
            Some(m) => (m.ascent, m.new_line_size.ceil() as usize),
            None => (font_size, font_size.ceil() as usize),
        };

        Self {
            font,
            glyph_cache,
            font_size,
            ascent,
            line_height,
        }
    }

    /// Get the line height in pixels
    #[inline]
    pub fn line_height(&self) -> usize {
        self.line_height
    }

    /// Draw text with its top-left corner at (x, y)
    pub fn draw(&mut self, frame: &mut Frame, x: f32, y: f32, text: &str, color: u32) {
        let mut current_x = x;
        let baseline = y + self.ascent;

        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let alpha = bitmap[bitmap_y * metrics.width + bitmap_x];
                    if alpha > 0 {
                        let px = current_x as isize + bitmap_x as isize + metrics.xmin as isize;
                        let py = (glyph_top + bitmap_y as f32) as isize;
                        frame.blend_pixel(px, py, color, alpha as f32 / 255.0);
                    }
                }
            }

            current_x += metrics.advance_width;
        }
    }

    /// Draw text horizontally centered on `cx`
    pub fn draw_centered(&mut self, frame: &mut Frame, cx: f32, y: f32, text: &str, color: u32) {
        let width = self.measure_width(text);
        self.draw(frame, cx - width / 2.0, y, text, color);
    }

    /// Draw text so that it ends at `right`
    pub fn draw_right_aligned(
        &mut self,
        frame: &mut Frame,
        right: f32,
        y: f32,
        text: &str,
        color: u32,
    ) {
        let width = self.measure_width(text);
        self.draw(frame, right - width, y, text, color);
    }

    /// Measure text width in pixels
    pub fn measure_width(&mut self, text: &str) -> f32 {
        let mut width = 0.0;
        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, _) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));
            width += metrics.advance_width;
        }
        width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: u32 = 0xFFFFFFFF;
    const BLUE: u32 = 0xFF0000FF;

    #[test]
    fn test_blend_colors_extremes() {
        assert_eq!(blend_colors(WHITE, BLUE, 1.0), BLUE);
        assert_eq!(blend_colors(WHITE, BLUE, 0.0), WHITE);
    }

    #[test]
    fn test_frame_shrinks_to_buffer() {
        let mut buffer = vec![0u32; 10 * 5];
        let frame = Frame::new(&mut buffer, 10, 8);
        assert_eq!(frame.height(), 5);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buffer = vec![0u32; 4 * 4];
        let mut frame = Frame::new(&mut buffer, 4, 4);
        frame.fill_rect_px(2, 2, 10, 10, BLUE);
        assert_eq!(frame.get_pixel(3, 3), BLUE);
        assert_eq!(frame.get_pixel(1, 1), 0);
    }

    #[test]
    fn test_stroke_rect_leaves_inside() {
        let mut buffer = vec![WHITE; 5 * 5];
        let mut frame = Frame::new(&mut buffer, 5, 5);
        frame.stroke_rect_px(0, 0, 5, 5, BLUE);
        assert_eq!(frame.get_pixel(0, 0), BLUE);
        assert_eq!(frame.get_pixel(4, 2), BLUE);
        assert_eq!(frame.get_pixel(2, 2), WHITE);
    }

    #[test]
    fn test_fill_circle_center_and_outside() {
        let mut buffer = vec![WHITE; 20 * 20];
        let mut frame = Frame::new(&mut buffer, 20, 20);
        frame.fill_circle(10.0, 10.0, 3.0, BLUE);
        assert_eq!(frame.get_pixel(10, 10), BLUE);
        assert_eq!(frame.get_pixel(0, 0), WHITE);
        assert_eq!(frame.get_pixel(10, 16), WHITE);
    }

    #[test]
    fn test_fill_circle_off_screen_is_clipped() {
        let mut buffer = vec![WHITE; 8 * 8];
        let mut frame = Frame::new(&mut buffer, 8, 8);
        frame.fill_circle(-50.0, 100.0, 4.0, BLUE);
        frame.fill_circle(0.0, 0.0, 4.0, BLUE);
        assert_eq!(frame.get_pixel(0, 0), BLUE);
    }
}
