use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot access '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse delimited table '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("'{}' is not in the required format: {message}", path.display())]
    Schema { path: PathBuf, message: String },

    #[error(
        "Date format is incorrect in '{}' line {line}: '{value}' (expected DD/MM/YYYY HH:MM)",
        path.display()
    )]
    TimestampFormat {
        path: PathBuf,
        line: u64,
        value: String,
    },

    #[error("Empty cell in '{}' line {line}, column '{column}': missing values are not allowed", path.display())]
    MissingValue {
        path: PathBuf,
        line: u64,
        column: String,
    },

    #[error(
        "Non-numeric value '{value}' in '{}' line {line}, column '{column}': only integer or decimal values are allowed",
        path.display()
    )]
    NonNumeric {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    #[error(
        "Negative rainfall value '{value}' in '{}' line {line}, column '{column}'",
        path.display()
    )]
    NegativeValue {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    #[error(
        "Number of stations in the coordinates file ({stations}) does not match the number of columns in the rainfall file ({columns})"
    )]
    ShapeMismatch { stations: usize, columns: usize },

    #[error("Station '{station}' has no row in the coordinates file")]
    StationNotFound { station: String },

    #[error("Summary serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Interpolation tool failed: {message}")]
    Interpolator { message: String },

    #[error("Interpolation output '{}' was not created", path.display())]
    InterpolationOutputMissing { path: PathBuf },
}

impl ProcessingError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProcessingError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Stable class name of the failure, used in reports and exit messages.
    pub fn category(&self) -> &'static str {
        match self {
            ProcessingError::Io(_)
            | ProcessingError::FileAccess { .. }
            | ProcessingError::Csv { .. }
            | ProcessingError::Json(_) => "io",
            ProcessingError::Schema { .. } => "schema",
            ProcessingError::TimestampFormat { .. } => "format",
            ProcessingError::MissingValue { .. } => "missing-value",
            ProcessingError::NonNumeric { .. } => "type",
            ProcessingError::NegativeValue { .. } => "range",
            ProcessingError::ShapeMismatch { .. } => "shape-mismatch",
            ProcessingError::StationNotFound { .. } => "station-not-found",
            ProcessingError::Config(_)
            | ProcessingError::ConfigSource(_)
            | ProcessingError::Validation(_) => "config",
            ProcessingError::Interpolator { .. }
            | ProcessingError::InterpolationOutputMissing { .. } => "interpolator",
        }
    }
}
