pub mod constants;
pub mod decimal;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use decimal::{format_parameter, parse_decimal};
pub use filename::{series_file_name, station_name_from_file};
pub use progress::ProgressReporter;
