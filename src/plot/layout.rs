//! Plot layout math
//!
//! Maps data coordinates to pixels with equal aspect: one data unit spans the
//! same number of pixels on both axes. The plot box shrinks inside the
//! available area to honor that, and is centered in it.

use crate::point::Point;

/// Fraction of the data range added on each side
const DATA_MARGIN: f64 = 0.05;

/// Target pixel distance between ticks
const TICK_SPACING_PX: f64 = 80.0;

/// Upper bound on ticks per axis
const MAX_TICKS: f64 = 1000.0;

/// Rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }
}

/// Closed interval on one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Width of the range. Overflows to infinity for ranges wider than
    /// `f64::MAX`; use [`Range::half_span`] for arithmetic.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Half the width, finite for any finite range
    pub fn half_span(&self) -> f64 {
        self.max / 2.0 - self.min / 2.0
    }

    fn center(&self) -> f64 {
        self.min / 2.0 + self.max / 2.0
    }

    /// Widen a zero-width range and add the data margin
    fn padded(self) -> Self {
        let half = if self.half_span() > 0.0 {
            self.half_span()
        } else {
            (self.min.abs() * DATA_MARGIN).max(0.5)
        };
        let half = half * (1.0 + 2.0 * DATA_MARGIN);
        let center = self.center();
        Self {
            min: (center - half).max(f64::MIN),
            max: (center + half).min(f64::MAX),
        }
    }
}

/// Bounding box of every point in every set, or `None` if all sets are empty
pub fn data_bounds(sets: &[Vec<Point>]) -> Option<(Range, Range)> {
    let mut points = sets.iter().flatten();
    let first = points.next()?;
    let init = (
        Range {
            min: first.x,
            max: first.x,
        },
        Range {
            min: first.y,
            max: first.y,
        },
    );
    Some(points.fold(init, |(x, y), p| {
        (
            Range {
                min: x.min.min(p.x),
                max: x.max.max(p.x),
            },
            Range {
                min: y.min.min(p.y),
                max: y.max.max(p.y),
            },
        )
    }))
}

/// Pick a 1/2/5 × 10ⁿ step close to `raw`
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = nice * magnitude;
    if step.is_finite() {
        step
    } else {
        raw
    }
}

/// Multiples of `step` inside `range`. Empty when the step is unusable or
/// would produce more than [`MAX_TICKS`] ticks.
pub fn ticks(range: Range, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) {
        return Vec::new();
    }
    let first = (range.min / step).ceil();
    let last = (range.max / step + 1e-9).floor();
    if !(first.is_finite() && last.is_finite()) || last - first > MAX_TICKS {
        return Vec::new();
    }
    (first as i64..=last as i64).map(|i| i as f64 * step).collect()
}

/// Format a tick value with as many decimals as the step needs. Very large or
/// very small steps switch to exponent notation.
pub fn format_tick(value: f64, step: f64) -> String {
    if !(1e-5..1e7).contains(&step) {
        return if value == 0.0 {
            "0".to_string()
        } else {
            format!("{:e}", value)
        };
    }
    let decimals = (-step.log10().floor()).max(0.0) as usize;
    let text = format!("{:.*}", decimals, value);
    // "-0" and "-0.0" read as noise on an axis
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}

/// Resolved layout for one frame
#[derive(Debug, Clone)]
pub struct PlotLayout {
    /// Pixel box the data range maps onto
    pub plot_rect: Rect,
    pub x_range: Range,
    pub y_range: Range,
    /// Pixels per data unit, shared by both axes
    pub scale: f64,
    pub x_step: f64,
    pub y_step: f64,
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
}

impl PlotLayout {
    /// Lay out `sets` inside `area`. `None` when there is nothing to plot or
    /// the area has no room.
    pub fn new(sets: &[Vec<Point>], area: Rect) -> Option<Self> {
        if area.width < 1.0 || area.height < 1.0 {
            return None;
        }

        let (x_range, y_range) = data_bounds(sets)?;
        let x_range = x_range.padded();
        let y_range = y_range.padded();

        // Half spans keep the arithmetic finite for ranges near f64::MAX wide
        let half_w = x_range.half_span();
        let half_h = y_range.half_span();
        let scale = (area.width as f64 / 2.0 / half_w).min(area.height as f64 / 2.0 / half_h);
        if !(scale.is_finite() && scale > 0.0) {
            tracing::warn!(?x_range, ?y_range, "Data range cannot be laid out");
            return None;
        }
        let box_w = (half_w * scale * 2.0) as f32;
        let box_h = (half_h * scale * 2.0) as f32;
        let plot_rect = Rect::new(
            area.x + (area.width - box_w) / 2.0,
            area.y + (area.height - box_h) / 2.0,
            box_w,
            box_h,
        );

        let x_step = nice_step(half_w / ((box_w as f64 / TICK_SPACING_PX).max(1.0) / 2.0));
        let y_step = nice_step(half_h / ((box_h as f64 / TICK_SPACING_PX).max(1.0) / 2.0));

        Some(Self {
            plot_rect,
            x_range,
            y_range,
            scale,
            x_step,
            y_step,
            x_ticks: ticks(x_range, x_step),
            y_ticks: ticks(y_range, y_step),
        })
    }

    pub fn x_to_px(&self, x: f64) -> f32 {
        self.plot_rect.x + ((x / 2.0 - self.x_range.min / 2.0) * self.scale * 2.0) as f32
    }

    /// Screen y grows downward, data y grows upward
    pub fn y_to_px(&self, y: f64) -> f32 {
        self.plot_rect.bottom() - ((y / 2.0 - self.y_range.min / 2.0) * self.scale * 2.0) as f32
    }

    pub fn to_px(&self, p: &Point) -> (f32, f32) {
        (self.x_to_px(p.x), self.y_to_px(p.y))
    }
}
