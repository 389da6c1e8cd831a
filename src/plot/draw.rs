//! Scatter plot painting
//!
//! Everything here draws into a [`Frame`], so it runs without a window.

use crate::color::Color;
use crate::point::Point;

use super::frame::{Frame, TextPainter};
use super::layout::{format_tick, PlotLayout, Rect};

pub const TITLE: &str = "Scatter Plot of Points";
pub const X_LABEL: &str = "X";
pub const Y_LABEL: &str = "Y";

/// Logical-pixel margins around the plot box, scaled by the DPI factor
const MARGIN_LEFT: f32 = 72.0;
const MARGIN_RIGHT: f32 = 24.0;
const MARGIN_TOP: f32 = 44.0;
const MARGIN_BOTTOM: f32 = 56.0;
const TICK_LEN: f32 = 5.0;

/// Colors and sizes used for one frame
#[derive(Debug, Clone, Copy)]
pub struct PlotStyle {
    pub background: u32,
    pub axes: u32,
    pub grid: u32,
    pub text: u32,
    /// Marker radius in physical pixels
    pub marker_radius: f32,
    pub scale_factor: f32,
}

impl PlotStyle {
    pub fn new(marker_radius: f32, scale_factor: f32) -> Self {
        Self {
            background: 0xFFFFFFFF,
            axes: 0xFF000000,
            grid: 0xFFB0B0B0,
            text: 0xFF000000,
            marker_radius: marker_radius * scale_factor,
            scale_factor,
        }
    }

    /// Area left for the plot box inside a `width` × `height` frame
    pub fn plot_area(&self, width: usize, height: usize) -> Rect {
        let s = self.scale_factor;
        Rect::new(
            MARGIN_LEFT * s,
            MARGIN_TOP * s,
            (width as f32 - (MARGIN_LEFT + MARGIN_RIGHT) * s).max(0.0),
            (height as f32 - (MARGIN_TOP + MARGIN_BOTTOM) * s).max(0.0),
        )
    }
}

/// Paint the whole plot: background, grid, axes box, markers, then text.
///
/// Sets are paired with colors by index; extra entries on either side are
/// ignored. Text is skipped when no painter is given.
pub fn draw_plot(
    frame: &mut Frame,
    painter: Option<&mut TextPainter>,
    sets: &[Vec<Point>],
    colors: &[Color],
    style: &PlotStyle,
) -> Option<PlotLayout> {
    frame.clear(style.background);

    let area = style.plot_area(frame.width(), frame.height());
    let layout = PlotLayout::new(sets, area)?;
    let r = layout.plot_rect;
    let (bx, by) = (r.x.round() as usize, r.y.round() as usize);
    let (bw, bh) = (r.width.round() as usize, r.height.round() as usize);

    for &x in &layout.x_ticks {
        let px = layout.x_to_px(x).round() as usize;
        frame.fill_rect_px(px, by, 1, bh, style.grid);
    }
    for &y in &layout.y_ticks {
        let py = layout.y_to_px(y).round() as usize;
        frame.fill_rect_px(bx, py, bw, 1, style.grid);
    }

    frame.stroke_rect_px(bx, by, bw + 1, bh + 1, style.axes);

    let tick_len = (TICK_LEN * style.scale_factor).round() as usize;
    for &x in &layout.x_ticks {
        let px = layout.x_to_px(x).round() as usize;
        frame.fill_rect_px(px, by + bh, 1, tick_len, style.axes);
    }
    for &y in &layout.y_ticks {
        let py = layout.y_to_px(y).round() as usize;
        frame.fill_rect_px(bx.saturating_sub(tick_len), py, tick_len, 1, style.axes);
    }

    for (points, color) in sets.iter().zip(colors) {
        let argb = color.to_argb_u32();
        for p in points {
            let (px, py) = layout.to_px(p);
            frame.fill_circle(px, py, style.marker_radius, argb);
        }
    }

    if let Some(painter) = painter {
        draw_labels(frame, painter, &layout, style, tick_len as f32);
    }

    Some(layout)
}

fn draw_labels(
    frame: &mut Frame,
    painter: &mut TextPainter,
    layout: &PlotLayout,
    style: &PlotStyle,
    tick_len: f32,
) {
    let r = layout.plot_rect;
    let line_height = painter.line_height() as f32;
    let gap = 4.0 * style.scale_factor;

    for &x in &layout.x_ticks {
        let label = format_tick(x, layout.x_step);
        painter.draw_centered(
            frame,
            layout.x_to_px(x),
            r.bottom() + tick_len + gap,
            &label,
            style.text,
        );
    }

    let mut widest = 0.0f32;
    for &y in &layout.y_ticks {
        let label = format_tick(y, layout.y_step);
        widest = widest.max(painter.measure_width(&label));
        painter.draw_right_aligned(
            frame,
            r.x - tick_len - gap,
            layout.y_to_px(y) - line_height / 2.0,
            &label,
            style.text,
        );
    }

    let center_x = r.x + r.width / 2.0;
    painter.draw_centered(
        frame,
        center_x,
        r.bottom() + tick_len + gap * 2.0 + line_height,
        X_LABEL,
        style.text,
    );
    painter.draw_right_aligned(
        frame,
        r.x - tick_len - gap * 3.0 - widest,
        r.y + r.height / 2.0 - line_height / 2.0,
        Y_LABEL,
        style.text,
    );
    painter.draw_centered(
        frame,
        center_x,
        (r.y - line_height - gap * 2.0).max(0.0),
        TITLE,
        style.text,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_use_set_colors() {
        let (w, h) = (400, 300);
        let mut buffer = vec![0u32; w * h];
        let mut frame = Frame::new(&mut buffer, w, h);
        let sets = vec![vec![Point::new(1.0, 2.0)], vec![Point::new(6.0, 5.0)]];
        let style = PlotStyle::new(4.0, 1.0);

        let layout = draw_plot(&mut frame, None, &sets, &[Color::BLUE, Color::RED], &style)
            .expect("layout");

        let (bx, by) = layout.to_px(&sets[0][0]);
        let (rx, ry) = layout.to_px(&sets[1][0]);
        assert_eq!(frame.get_pixel(bx as usize, by as usize), 0xFF0000FF);
        assert_eq!(frame.get_pixel(rx as usize, ry as usize), 0xFFFF0000);
    }

    #[test]
    fn test_later_sets_draw_on_top() {
        let (w, h) = (200, 200);
        let mut buffer = vec![0u32; w * h];
        let mut frame = Frame::new(&mut buffer, w, h);
        let p = Point::new(0.0, 0.0);
        let sets = vec![vec![p], vec![p]];
        let style = PlotStyle::new(4.0, 1.0);

        let layout = draw_plot(&mut frame, None, &sets, &[Color::BLUE, Color::RED], &style)
            .expect("layout");

        let (px, py) = layout.to_px(&p);
        assert_eq!(frame.get_pixel(px as usize, py as usize), 0xFFFF0000);
    }

    #[test]
    fn test_background_outside_plot_box() {
        let (w, h) = (300, 300);
        let mut buffer = vec![0u32; w * h];
        let mut frame = Frame::new(&mut buffer, w, h);
        let sets = vec![vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]];
        let style = PlotStyle::new(3.0, 1.0);

        draw_plot(&mut frame, None, &sets, &[Color::BLUE], &style).expect("layout");
        assert_eq!(frame.get_pixel(1, 1), style.background);
    }

    #[test]
    fn test_huge_finite_coordinates() {
        let (w, h) = (400, 300);
        let mut buffer = vec![0u32; w * h];
        let mut frame = Frame::new(&mut buffer, w, h);
        let sets = vec![vec![Point::new(-1e308, 0.0)], vec![Point::new(1e308, 0.0)]];
        let style = PlotStyle::new(4.0, 1.0);

        let layout = draw_plot(&mut frame, None, &sets, &[Color::BLUE, Color::RED], &style)
            .expect("layout");

        let (bx, by) = layout.to_px(&sets[0][0]);
        let (rx, ry) = layout.to_px(&sets[1][0]);
        assert!(bx < rx);
        assert_eq!(frame.get_pixel(bx as usize, by as usize), 0xFF0000FF);
        assert_eq!(frame.get_pixel(rx as usize, ry as usize), 0xFFFF0000);
    }

    #[test]
    fn test_nothing_to_plot() {
        let mut buffer = vec![0u32; 100 * 100];
        let mut frame = Frame::new(&mut buffer, 100, 100);
        let style = PlotStyle::new(3.0, 1.0);
        assert!(draw_plot(&mut frame, None, &[vec![]], &[Color::BLUE], &style).is_none());
        assert_eq!(frame.get_pixel(50, 50), style.background);
    }

    #[test]
    fn test_plot_area_scales_with_dpi() {
        let a = PlotStyle::new(4.0, 1.0).plot_area(800, 600);
        let b = PlotStyle::new(4.0, 2.0).plot_area(1600, 1200);
        assert!((b.width - a.width * 2.0).abs() < 1e-3);
        assert!((b.x - a.x * 2.0).abs() < 1e-3);
    }
}
