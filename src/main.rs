use anyhow::Result;
use clap::Parser;

use point_shift::cli::CliArgs;
use point_shift::collab::{FilePicker, FixedPath};
use point_shift::dialog::NativeFilePicker;
use point_shift::plot::ScatterWindow;
use point_shift::{AppConfig, Outcome, RowError};

fn report_skipped(skipped: &[RowError]) {
    if skipped.is_empty() {
        return;
    }
    eprintln!("Skipped {} malformed row(s):", skipped.len());
    for err in skipped {
        eprintln!("  {}", err);
    }
}

fn main() -> Result<()> {
    point_shift::tracing::init();

    let args = CliArgs::parse();
    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    args.apply_to(&mut config);
    tracing::debug!(?config, "Starting");

    let mut picker: Box<dyn FilePicker> = match &args.path {
        Some(path) => Box::new(FixedPath(Some(path.clone()))),
        None => {
            let mut dialog = NativeFilePicker::new();
            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.with_start_dir(cwd);
            }
            Box::new(dialog)
        }
    };
    let mut renderer = ScatterWindow::from_config(&config);

    let outcome = point_shift::run(picker.as_mut(), &mut renderer, &config.run_settings())?;
    match outcome {
        Outcome::Cancelled => {}
        Outcome::Empty { skipped } => report_skipped(&skipped),
        Outcome::Rendered { points, skipped } => {
            report_skipped(&skipped);
            tracing::info!(points, "Plot closed");
        }
    }

    Ok(())
}
