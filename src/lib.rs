pub mod cli;
pub mod config;
pub mod error;
pub mod interpolation;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use config::{ConversionConfig, StationMatching};
pub use error::{ProcessingError, Result};
pub use processors::{ConversionSummary, Converter};
