/// Input file names looked up when no path is given
pub const DEFAULT_COORDINATES_FILE: &str = "coordinates.csv";
pub const DEFAULT_RAINFALL_FILE: &str = "hourly_rainfall.csv";

/// Input table layout
pub const FIELD_DELIMITER: u8 = b';';
pub const LATITUDE_HEADER: &str = "COORD_Y";
pub const LONGITUDE_HEADER: &str = "COORD_X";
pub const LATITUDE_COLUMN: usize = 1;
pub const LONGITUDE_COLUMN: usize = 2;

/// Rainfall timestamp layout (DD/MM/YYYY HH:MM)
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";
pub const TIMESTAMP_LEN: usize = 16;

/// Output file names
pub const DEFAULT_SERIES_EXTENSION: &str = "srm";
pub const DEFAULT_CONTROL_FILE: &str = "FillMatrix.dat";
pub const DEFAULT_OUTPUT_FILE: &str = "output.hdf5";
pub const DEFAULT_GRID_DATA_FILE: &str = "topography.dat";
pub const DEFAULT_FILLMATRIX_EXE: &str = "FillMatrix.exe";

/// Width of the key column in MOHID keyword files ("KEY" padded, then ": ")
pub const KEYWORD_WIDTH: usize = 26;

/// Series file settings
pub const SERIES_TIME_UNITS: &str = "HOURS";
pub const SERIES_COMMENT: &str = "!Date rainfall";
pub const SERIES_VALUE_DECIMALS: usize = 4;

/// FillMatrix interpolation defaults
pub const DEFAULT_PROPERTY_NAME: &str = "precipitation";
pub const DEFAULT_PROPERTY_UNITS: &str = "mm";
pub const DEFAULT_MAX_TIME_SPAN: u64 = 86400;
pub const DEFAULT_OUTPUT_TIME_START: u64 = 0;
pub const DEFAULT_OUTPUT_TIME_STEP: u64 = 3600;
pub const DEFAULT_INTERPOLATION_METHOD: u8 = 2;
pub const DEFAULT_MAX_DISTANCE: f64 = 50000.0;
pub const DEFAULT_IWD_N: f64 = 2.0;
pub const DEFAULT_VALUE_TYPE: &str = "TIMESERIE";
pub const DEFAULT_DATA_COLUMN: u32 = 2;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "RAINFALL2MOHID";
