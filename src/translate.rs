//! Uniform translation of point sequences

use serde::{Deserialize, Serialize};

use crate::point::Point;

pub const DEFAULT_DX: f64 = 5.0;
pub const DEFAULT_DY: f64 = 3.0;

/// Offset applied to every point of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl Default for Delta {
    fn default() -> Self {
        Self::new(DEFAULT_DX, DEFAULT_DY)
    }
}

/// Build a new sequence where each point is offset by `delta`.
///
/// Output has the same length and order as `points`; the input is not touched.
pub fn translate_points(points: &[Point], delta: Delta) -> Vec<Point> {
    points
        .iter()
        .map(|p| p.translated(delta.dx, delta.dy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delta() {
        assert_eq!(Delta::default(), Delta::new(5.0, 3.0));
    }

    #[test]
    fn test_translate_points_preserves_order() {
        let points = vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        let shifted = translate_points(&points, Delta::default());

        assert_eq!(shifted, vec![Point::new(6.0, 5.0), Point::new(8.0, 7.0)]);
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn test_translate_by_zero_is_value_equal() {
        let points = vec![Point::new(-1.25, 9.0), Point::new(0.0, 0.0)];
        let shifted = translate_points(&points, Delta::new(0.0, 0.0));

        assert_eq!(shifted, points);
        assert_ne!(shifted.as_ptr(), points.as_ptr());
    }

    #[test]
    fn test_translate_empty() {
        assert!(translate_points(&[], Delta::default()).is_empty());
    }
}
