use serde::Serialize;
use std::path::PathBuf;

/// Everything needed to write one station's series file.
#[derive(Debug, Clone, PartialEq)]
pub struct StationSeries {
    pub name: String,
    pub coord_x: String,
    pub coord_y: String,
    pub values: Vec<f64>,
}

impl StationSeries {
    pub fn new(name: String, coord_x: String, coord_y: String, values: Vec<f64>) -> Self {
        Self {
            name,
            coord_x,
            coord_y,
            values,
        }
    }
}

/// A written series file, as referenced from the control file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesFile {
    pub file_name: String,
    pub path: PathBuf,
    pub coord_x: String,
    pub coord_y: String,
}
