//! End-to-end flow: pick → load → translate → render
//!
//! ```text
//! AwaitingPath ──None──────────────▶ Cancelled
//!      │
//!      ▼
//!   Loaded ─────no points──────────▶ Empty
//!      │
//!      ▼
//!  Translated
//!      │
//!      ▼
//!  Rendered
//! ```

use anyhow::{Context, Result};

use crate::collab::{FilePicker, PlotRenderer};
use crate::color::Color;
use crate::loader::{self, LoadOptions, RowError};
use crate::translate::{translate_points, Delta};

/// Everything the flow needs besides its collaborators
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub delta: Delta,
    pub load: LoadOptions,
    /// Original set color, then translated set color
    pub colors: [Color; 2],
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            delta: Delta::default(),
            load: LoadOptions::default(),
            colors: [Color::BLUE, Color::RED],
        }
    }
}

/// Terminal state of a run
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The user declined to pick a file
    Cancelled,
    /// No points were loaded (missing file, header only, or every row skipped)
    Empty { skipped: Vec<RowError> },
    /// Both sets were handed to the renderer
    Rendered {
        points: usize,
        skipped: Vec<RowError>,
    },
}

/// Run the flow once.
///
/// A malformed row under [`RowPolicy::Abort`](crate::loader::RowPolicy::Abort)
/// is returned as an error wrapping [`LoadError`](crate::loader::LoadError).
pub fn run(
    picker: &mut dyn FilePicker,
    renderer: &mut dyn PlotRenderer,
    settings: &RunSettings,
) -> Result<Outcome> {
    let Some(path) = picker.pick_file() else {
        tracing::debug!("No file selected");
        return Ok(Outcome::Cancelled);
    };

    let loaded = loader::load_points(&path, &settings.load)
        .with_context(|| format!("Failed to load points from {}", path.display()))?;

    if loaded.is_empty() {
        tracing::debug!(path = %path.display(), "No points loaded, skipping render");
        return Ok(Outcome::Empty {
            skipped: loaded.skipped,
        });
    }

    tracing::debug!(points = loaded.points.len(), "Loaded");

    let translated = translate_points(&loaded.points, settings.delta);
    tracing::debug!(dx = settings.delta.dx, dy = settings.delta.dy, "Translated");

    let points = loaded.points.len();
    let sets = [loaded.points, translated];
    renderer
        .render(&sets, &settings.colors)
        .context("Failed to render scatter plot")?;
    tracing::debug!("Rendered");

    Ok(Outcome::Rendered {
        points,
        skipped: loaded.skipped,
    })
}
