//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use point_shift::{Color, FilePicker, PlotRenderer, Point};
use tempfile::NamedTempFile;

/// Write `content` to a temporary `.csv` file that lives as long as the handle
pub fn csv_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(content.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}

/// Picker that returns a scripted answer and counts calls
pub struct ScriptedPicker {
    pub answer: Option<PathBuf>,
    pub calls: usize,
}

impl ScriptedPicker {
    pub fn returning(path: impl Into<PathBuf>) -> Self {
        Self {
            answer: Some(path.into()),
            calls: 0,
        }
    }

    pub fn cancelling() -> Self {
        Self {
            answer: None,
            calls: 0,
        }
    }
}

impl FilePicker for ScriptedPicker {
    fn pick_file(&mut self) -> Option<PathBuf> {
        self.calls += 1;
        self.answer.clone()
    }
}

/// Renderer that records every call instead of opening a window
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Vec<(Vec<Vec<Point>>, Vec<Color>)>,
    pub fail_with: Option<String>,
}

impl PlotRenderer for RecordingRenderer {
    fn render(&mut self, sets: &[Vec<Point>], colors: &[Color]) -> Result<()> {
        self.calls.push((sets.to_vec(), colors.to_vec()));
        match &self.fail_with {
            Some(msg) => Err(anyhow::anyhow!("{}", msg)),
            None => Ok(()),
        }
    }
}

pub fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}
