//! Label font discovery

use std::path::Path;

use fontdue::{Font, FontSettings};

/// Common sans-serif fonts, tried in order when no font is configured
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Load a font from a file
pub fn load_font_file(path: &Path) -> Result<Font, String> {
    let bytes = std::fs::read(path)
        .map_err(|e| format!("Failed to read font {}: {}", path.display(), e))?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| format!("Failed to parse font {}: {}", path.display(), e))
}

/// Find a usable label font: the configured one first, then system fonts.
///
/// Returns `None` when nothing loads; the plot is then drawn without text.
pub fn find_font(configured: Option<&Path>) -> Option<Font> {
    if let Some(path) = configured {
        match load_font_file(path) {
            Ok(font) => return Some(font),
            Err(e) => tracing::warn!("{}", e),
        }
    }

    for candidate in SYSTEM_FONT_CANDIDATES {
        let path = Path::new(candidate);
        if !path.exists() {
            continue;
        }
        match load_font_file(path) {
            Ok(font) => {
                tracing::debug!("Using label font {}", path.display());
                return Some(font);
            }
            Err(e) => tracing::debug!("{}", e),
        }
    }

    tracing::warn!("No usable font found, plot labels will not be drawn");
    None
}
