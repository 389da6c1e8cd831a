//! Blocking collaborators the orchestrator drives
//!
//! Both are traits so the load/translate flow can run without any UI.

use std::path::PathBuf;

use anyhow::Result;

use crate::color::Color;
use crate::point::Point;

/// Obtains the CSV path from the user
pub trait FilePicker {
    /// Blocks until the user picks a file. `None` means the user cancelled.
    fn pick_file(&mut self) -> Option<PathBuf>;
}

/// Draws point sets as a scatter plot
pub trait PlotRenderer {
    /// Render `sets[i]` in `colors[i]`, later sets on top.
    ///
    /// Blocks until the plot is dismissed.
    fn render(&mut self, sets: &[Vec<Point>], colors: &[Color]) -> Result<()>;
}

/// Picker that returns a path known up front (e.g. from the command line)
#[derive(Debug, Clone)]
pub struct FixedPath(pub Option<PathBuf>);

impl FilePicker for FixedPath {
    fn pick_file(&mut self) -> Option<PathBuf> {
        self.0.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_path_yields_once() {
        let mut picker = FixedPath(Some(PathBuf::from("points.csv")));
        assert_eq!(picker.pick_file(), Some(PathBuf::from("points.csv")));
        assert_eq!(picker.pick_file(), None);
    }
}
