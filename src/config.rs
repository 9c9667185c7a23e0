//! Conversion settings.
//!
//! Defaults reproduce the classic Rainfall2MOHID output exactly. Any value can
//! be overridden from a TOML file and then from `RAINFALL2MOHID_*` environment
//! variables (nested keys joined with `__`, e.g.
//! `RAINFALL2MOHID_CONTROL__MAX_DISTANCE=25000`).

use crate::error::Result;
use crate::utils::constants::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;

/// How rainfall columns are paired with coordinate rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StationMatching {
    /// Column `c` of the rainfall table uses coordinate row `c`
    #[default]
    Positional,
    /// Each rainfall header name must equal the first field of a coordinate row
    ByName,
}

/// Global parameters written to the FillMatrix control file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ControlParameters {
    #[validate(length(min = 1))]
    pub property_name: String,

    #[validate(length(min = 1))]
    pub property_units: String,

    #[validate(length(min = 1))]
    pub output_file: String,

    pub variable_in_time: bool,

    #[validate(length(min = 1))]
    pub grid_data_file: String,

    /// Seconds
    #[validate(range(min = 1))]
    pub max_time_span: u64,

    pub output_time_start: u64,

    /// Seconds between interpolated grids
    #[validate(range(min = 1))]
    pub output_time_step: u64,

    pub skip_null_values: bool,

    pub interpolation_method: u8,

    /// Search radius in coordinate units
    #[validate(range(exclusive_min = 0.0))]
    pub max_distance: f64,

    /// Inverse distance weighting exponent
    #[validate(range(exclusive_min = 0.0))]
    pub iwd_n: f64,

    #[validate(length(min = 1))]
    pub value_type: String,

    pub data_column: u32,
}

impl Default for ControlParameters {
    fn default() -> Self {
        Self {
            property_name: DEFAULT_PROPERTY_NAME.to_string(),
            property_units: DEFAULT_PROPERTY_UNITS.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            variable_in_time: true,
            grid_data_file: DEFAULT_GRID_DATA_FILE.to_string(),
            max_time_span: DEFAULT_MAX_TIME_SPAN,
            output_time_start: DEFAULT_OUTPUT_TIME_START,
            output_time_step: DEFAULT_OUTPUT_TIME_STEP,
            skip_null_values: false,
            interpolation_method: DEFAULT_INTERPOLATION_METHOD,
            max_distance: DEFAULT_MAX_DISTANCE,
            iwd_n: DEFAULT_IWD_N,
            value_type: DEFAULT_VALUE_TYPE.to_string(),
            data_column: DEFAULT_DATA_COLUMN,
        }
    }
}

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ConversionConfig {
    /// Directory receiving the series files and the control file
    pub output_dir: PathBuf,

    #[validate(length(min = 1))]
    pub series_extension: String,

    #[validate(length(min = 1))]
    pub control_file: String,

    pub station_matching: StationMatching,

    #[validate(nested)]
    pub control: ControlParameters,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            series_extension: DEFAULT_SERIES_EXTENSION.to_string(),
            control_file: DEFAULT_CONTROL_FILE.to_string(),
            station_matching: StationMatching::default(),
            control: ControlParameters::default(),
        }
    }
}

impl ConversionConfig {
    /// Layer defaults, an optional TOML file and the environment, then validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: ConversionConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_station_matching(mut self, matching: StationMatching) -> Self {
        self.station_matching = matching;
        self
    }

    pub fn control_file_path(&self) -> PathBuf {
        self.output_dir.join(&self.control_file)
    }

    pub fn interpolation_output_path(&self) -> PathBuf {
        self.output_dir.join(&self.control.output_file)
    }
}
