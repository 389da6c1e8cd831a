//! CSV point loader
//!
//! Reads a header row followed by `x,y` rows into a point sequence.
//!
//! ```text
//! x,y          <- line 1, discarded whatever it contains (even blank)
//! 1.0,2.0      -> Point { x: 1.0, y: 2.0 }
//! 3.0,4.0      -> Point { x: 3.0, y: 4.0 }
//! ```
//!
//! A missing file yields an empty sequence. Malformed rows either abort the
//! load or are skipped, depending on [`RowPolicy`].

mod error;
mod parser;

pub use error::{LoadError, RowError, RowErrorKind};
pub use parser::{
    load_points, load_points_to, parse_points, Delimiter, LoadOptions, Loaded, RowPolicy,
    NOT_FOUND_MESSAGE,
};
