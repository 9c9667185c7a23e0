pub mod converter;
pub mod validator;

pub use converter::{ConversionSummary, Converter, ValidatedInputs};
pub use validator::TableValidator;
