use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One row of the coordinates table.
///
/// Coordinates are kept as written in the input so they reach the output
/// files unchanged; they have already been checked to be numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationCoordinate {
    /// First column of the row (station identifier, free text)
    pub id: String,
    /// COORD_Y column
    pub latitude: String,
    /// COORD_X column
    pub longitude: String,
}

impl StationCoordinate {
    pub fn new(id: String, latitude: String, longitude: String) -> Self {
        Self {
            id,
            latitude,
            longitude,
        }
    }

    pub fn coord_x(&self) -> &str {
        &self.longitude
    }

    pub fn coord_y(&self) -> &str {
        &self.latitude
    }
}

/// Validated coordinates table, in file order.
#[derive(Debug, Clone, Default)]
pub struct CoordinateTable {
    pub path: PathBuf,
    pub stations: Vec<StationCoordinate>,
}

impl CoordinateTable {
    pub fn new(path: impl Into<PathBuf>, stations: Vec<StationCoordinate>) -> Self {
        Self {
            path: path.into(),
            stations,
        }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StationCoordinate> {
        self.stations.get(index)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&StationCoordinate> {
        self.stations.iter().find(|s| s.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.stations.iter().map(|s| s.id.as_str())
    }
}
