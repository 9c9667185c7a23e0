pub mod atomic;
pub mod control_writer;
pub mod series_writer;

pub use atomic::write_atomic;
pub use control_writer::ControlFileWriter;
pub use series_writer::SeriesWriter;

use crate::utils::constants::KEYWORD_WIDTH;
use std::fmt::Display;

/// One `KEY<padding>: value` line of a MOHID keyword file.
pub(crate) fn keyword_line(key: &str, value: impl Display) -> String {
    format!("{:<width$}: {}\n", key, value, width = KEYWORD_WIDTH)
}
