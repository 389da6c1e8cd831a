//! 2D point value type

use std::fmt;

/// A coordinate in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift the point in place by `dx` along x and `dy` along y
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Return a shifted copy, leaving `self` untouched
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let mut shifted = *self;
        shifted.translate(dx, dy);
        shifted
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
