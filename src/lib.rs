//! point-shift - visual diff of a point set before and after a translation
//!
//! Loads `x,y` points from a CSV file, shifts a copy by a fixed delta, and
//! shows both sets on one scatter plot.

pub mod cli;
pub mod collab;
pub mod color;
pub mod config;
pub mod config_paths;
pub mod dialog;
pub mod loader;
pub mod orchestrator;
pub mod plot;
pub mod point;
pub mod tracing;
pub mod translate;

// Re-export commonly used types
pub use collab::{FilePicker, FixedPath, PlotRenderer};
pub use color::Color;
pub use config::AppConfig;
pub use loader::{load_points, LoadError, LoadOptions, Loaded, RowError, RowPolicy};
pub use orchestrator::{run, Outcome, RunSettings};
pub use point::Point;
pub use translate::{translate_points, Delta};
