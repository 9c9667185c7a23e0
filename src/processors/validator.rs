use crate::config::StationMatching;
use crate::error::{ProcessingError, Result};
use crate::models::{
    normalize_timestamp, CoordinateTable, RainfallRow, RainfallTable, StationCoordinate, Table,
    TableRow,
};
use crate::utils::constants::{
    LATITUDE_COLUMN, LATITUDE_HEADER, LONGITUDE_COLUMN, LONGITUDE_HEADER,
};
use crate::utils::filename::is_valid_station_file_stem;
use crate::utils::parse_decimal;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Structural and value checks on the two input tables.
///
/// Each check returns the typed table it has proven valid, so nothing
/// downstream re-parses text. The first violation aborts the check.
pub struct TableValidator;

impl TableValidator {
    pub fn new() -> Self {
        Self
    }

    /// Header labels first, then emptiness and numeric checks row by row.
    pub fn validate_coordinates(&self, table: &Table) -> Result<CoordinateTable> {
        info!("Validating the coordinates file...");
        let header = table.header().ok_or_else(|| ProcessingError::Schema {
            path: table.path.clone(),
            message: "file is empty".to_string(),
        })?;

        let latitude_label = header.field(LATITUDE_COLUMN).unwrap_or("");
        let longitude_label = header.field(LONGITUDE_COLUMN).unwrap_or("");
        if latitude_label != LATITUDE_HEADER || longitude_label != LONGITUDE_HEADER {
            return Err(ProcessingError::Schema {
                path: table.path.clone(),
                message: format!(
                    "header must have '{}' as second column and '{}' as third column, found '{}' and '{}'",
                    LATITUDE_HEADER, LONGITUDE_HEADER, latitude_label, longitude_label
                ),
            });
        }
        debug!("The second column is latitude and the third column is longitude");

        let mut stations = Vec::with_capacity(table.data_rows().len());
        for row in table.data_rows() {
            let latitude = row.field(LATITUDE_COLUMN).unwrap_or("");
            let longitude = row.field(LONGITUDE_COLUMN).unwrap_or("");

            for (value, column) in [(latitude, LATITUDE_HEADER), (longitude, LONGITUDE_HEADER)] {
                if value.is_empty() {
                    return Err(missing_value(table.path(), row, column));
                }
            }
            for (value, column) in [(latitude, LATITUDE_HEADER), (longitude, LONGITUDE_HEADER)] {
                if parse_decimal(value).is_none() {
                    return Err(non_numeric(table.path(), row, column, value));
                }
            }

            stations.push(StationCoordinate::new(
                row.field(0).unwrap_or("").to_string(),
                latitude.to_string(),
                longitude.to_string(),
            ));
        }

        info!("All {} coordinate rows are present and valid", stations.len());
        Ok(CoordinateTable::new(table.path(), stations))
    }

    /// Station header, then every timestamp, then every value cell row by row.
    pub fn validate_rainfall(&self, table: &Table) -> Result<RainfallTable> {
        info!("Validating the hourly rainfall file...");
        let header = table.header().ok_or_else(|| ProcessingError::Schema {
            path: table.path.clone(),
            message: "file is empty".to_string(),
        })?;
        let station_names = self.validate_station_names(table.path(), header)?;

        let data_rows = table.data_rows();
        if data_rows.is_empty() {
            return Err(ProcessingError::Schema {
                path: table.path.clone(),
                message: "no rainfall rows after the header".to_string(),
            });
        }

        let mut timestamps = Vec::with_capacity(data_rows.len());
        for row in data_rows {
            let value = row.field(0).unwrap_or("");
            timestamps.push(normalize_timestamp(value, table.path(), row.line)?);
        }
        debug!("All {} dates are in the correct format", timestamps.len());

        let mut rows = Vec::with_capacity(data_rows.len());
        for (row, timestamp) in data_rows.iter().zip(timestamps) {
            let mut values = Vec::with_capacity(station_names.len());
            for (column, name) in station_names.iter().enumerate() {
                let cell = row.field(column + 1).unwrap_or("");
                values.push(rainfall_value(table.path(), row, name, cell)?);
            }
            // Unlabelled cells past the header are checked but not converted
            for (index, cell) in row.fields.iter().enumerate().skip(station_names.len() + 1) {
                let label = format!("column {}", index + 1);
                rainfall_value(table.path(), row, &label, cell)?;
            }
            rows.push(RainfallRow {
                line: row.line,
                timestamp,
                values,
            });
        }

        info!(
            "All rainfall values are present, valid and non-negative ({} stations x {} hours)",
            station_names.len(),
            rows.len()
        );
        Ok(RainfallTable::new(station_names, rows))
    }

    /// Number of coordinate rows must equal the number of rainfall station columns.
    pub fn validate_cross_shape(&self, stations: usize, columns: usize) -> Result<()> {
        info!("Number of stations in the coordinates file: {}", stations);
        info!("Number of columns in the hourly rainfall file: {}", columns);

        if stations != columns {
            return Err(ProcessingError::ShapeMismatch { stations, columns });
        }
        Ok(())
    }

    /// Coordinates for each rainfall column, in rainfall column order.
    ///
    /// Callers run [`validate_cross_shape`](Self::validate_cross_shape) first.
    pub fn match_stations(
        &self,
        coordinates: &CoordinateTable,
        rainfall: &RainfallTable,
        matching: StationMatching,
    ) -> Result<Vec<StationCoordinate>> {
        match matching {
            StationMatching::Positional => {
                warn_if_permuted(coordinates, rainfall);
                Ok(coordinates.stations.clone())
            }
            StationMatching::ByName => {
                let mut seen = HashSet::new();
                if let Some(duplicate) = coordinates.ids().find(|id| !seen.insert(*id)) {
                    return Err(ProcessingError::Schema {
                        path: coordinates.path.clone(),
                        message: format!(
                            "station '{}' appears more than once in the coordinates file",
                            duplicate
                        ),
                    });
                }

                rainfall
                    .station_names
                    .iter()
                    .map(|name| {
                        coordinates.find_by_id(name).cloned().ok_or_else(|| {
                            ProcessingError::StationNotFound {
                                station: name.clone(),
                            }
                        })
                    })
                    .collect()
            }
        }
    }

    fn validate_station_names(&self, path: &Path, header: &TableRow) -> Result<Vec<String>> {
        let names: Vec<String> = header.fields.iter().skip(1).cloned().collect();
        if names.is_empty() {
            return Err(ProcessingError::Schema {
                path: path.to_path_buf(),
                message: "no station columns after the date column".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for name in &names {
            if !is_valid_station_file_stem(name) {
                return Err(ProcessingError::Schema {
                    path: path.to_path_buf(),
                    message: format!("'{}' cannot be used as a station file name", name),
                });
            }
            if !seen.insert(name.as_str()) {
                return Err(ProcessingError::Schema {
                    path: path.to_path_buf(),
                    message: format!("station '{}' appears more than once", name),
                });
            }
        }

        Ok(names)
    }
}

impl Default for TableValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty, then numeric, then sign check of one rainfall cell.
fn rainfall_value(path: &Path, row: &TableRow, column: &str, cell: &str) -> Result<f64> {
    if cell.is_empty() {
        return Err(missing_value(path, row, column));
    }
    let value = parse_decimal(cell).ok_or_else(|| non_numeric(path, row, column, cell))?;
    if value < 0.0 {
        return Err(ProcessingError::NegativeValue {
            path: path.to_path_buf(),
            line: row.line,
            column: column.to_string(),
            value: cell.to_string(),
        });
    }
    Ok(value)
}

fn missing_value(path: &Path, row: &TableRow, column: &str) -> ProcessingError {
    ProcessingError::MissingValue {
        path: path.to_path_buf(),
        line: row.line,
        column: column.to_string(),
    }
}

fn non_numeric(path: &Path, row: &TableRow, column: &str, value: &str) -> ProcessingError {
    ProcessingError::NonNumeric {
        path: path.to_path_buf(),
        line: row.line,
        column: column.to_string(),
        value: value.to_string(),
    }
}

/// Positional pairing cannot detect reordered inputs; flag the obvious case.
fn warn_if_permuted(coordinates: &CoordinateTable, rainfall: &RainfallTable) {
    let ids: Vec<&str> = coordinates.ids().collect();
    let names: Vec<&str> = rainfall.station_names.iter().map(String::as_str).collect();
    if ids == names {
        return;
    }

    let id_set: HashSet<&str> = ids.iter().copied().collect();
    let name_set: HashSet<&str> = names.iter().copied().collect();
    if ids.len() == names.len() && id_set.len() == ids.len() && id_set == name_set {
        warn!(
            "Coordinate IDs name the same stations as the rainfall header but in a different order; \
             stations are paired by position (use by-name matching to pair them by name)"
        );
    }
}
