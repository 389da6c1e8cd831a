//! Command-line argument parsing
//!
//! Every flag is optional. With no arguments the program asks for a file
//! with the native dialog and uses the configured delta.

use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::loader::RowPolicy;

/// Plot a CSV point set next to a shifted copy of itself
#[derive(Parser, Debug, Default)]
#[command(name = "point-shift", version, about = "Compare a point set with its translation")]
pub struct CliArgs {
    /// CSV file to load (skips the file dialog)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Shift along the x axis
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub dx: Option<f64>,

    /// Shift along the y axis
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub dy: Option<f64>,

    /// Drop malformed rows instead of aborting
    #[arg(long)]
    pub skip_malformed: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Overlay command-line values onto a loaded config
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(dx) = self.dx {
            config.dx = dx;
        }
        if let Some(dy) = self.dy {
            config.dy = dy;
        }
        if self.skip_malformed {
            config.on_malformed_row = RowPolicy::Skip;
        }
    }
}
