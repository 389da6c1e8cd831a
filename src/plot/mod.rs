//! Scatter plot rendering
//!
//! # Architecture
//!
//! ```text
//! ScatterWindow (PlotRenderer)
//! └── winit event loop
//!     └── Canvas (softbuffer surface)
//!         └── draw_plot
//!             ├── PlotLayout  (data → pixel, equal aspect, ticks)
//!             ├── Frame       (pixel primitives)
//!             └── TextPainter (fontdue glyphs)
//! ```

pub mod draw;
pub mod font;
pub mod frame;
pub mod layout;
mod window;

pub use draw::{draw_plot, PlotStyle, TITLE, X_LABEL, Y_LABEL};
pub use frame::{Frame, GlyphCache, TextPainter};
pub use layout::{PlotLayout, Rect};
pub use window::ScatterWindow;
