//! Native file dialog (using rfd)

use std::path::PathBuf;

use crate::collab::FilePicker;

/// Opens the platform's file-open dialog restricted to `.csv` files
#[derive(Debug, Clone, Default)]
pub struct NativeFilePicker {
    start_dir: Option<PathBuf>,
}

impl NativeFilePicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory the dialog opens in
    pub fn with_start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }
}

impl FilePicker for NativeFilePicker {
    fn pick_file(&mut self) -> Option<PathBuf> {
        let mut dlg = rfd::FileDialog::new()
            .set_title("Select a CSV file")
            .add_filter("CSV files", &["csv"]);
        if let Some(dir) = &self.start_dir {
            dlg = dlg.set_directory(dir);
        }

        let path = dlg.pick_file();
        match &path {
            Some(p) => tracing::debug!(path = %p.display(), "File selected"),
            None => tracing::debug!("File dialog cancelled"),
        }
        path
    }
}
