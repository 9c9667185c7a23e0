use crate::config::ConversionConfig;
use crate::error::{ProcessingError, Result};
use crate::models::{
    CoordinateTable, NormalizedTimestamp, RainfallTable, SeriesFile, StationCoordinate,
    StationSeries,
};
use crate::processors::TableValidator;
use crate::readers::TableReader;
use crate::utils::ProgressReporter;
use crate::writers::{ControlFileWriter, SeriesWriter};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Both inputs after every check has passed, ready to be written.
#[derive(Debug, Clone)]
pub struct ValidatedInputs {
    pub coordinates: CoordinateTable,
    pub rainfall: RainfallTable,
    pub start: NormalizedTimestamp,
    pub end: NormalizedTimestamp,
    /// Coordinates for each rainfall column, in column order
    pub stations: Vec<StationCoordinate>,
}

/// Outcome of a conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    pub stations: usize,
    pub time_steps: usize,
    pub start: String,
    pub end: String,
    pub series_files: Vec<SeriesFile>,
    pub control_file: PathBuf,
}

impl ConversionSummary {
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("=== Conversion Summary ===\n");
        summary.push_str(&format!("Stations: {}\n", self.stations));
        summary.push_str(&format!("Hourly time steps: {}\n", self.time_steps));
        summary.push_str(&format!("Start: {}\n", self.start));
        summary.push_str(&format!("End: {}\n", self.end));
        summary.push_str(&format!("Control file: {}\n", self.control_file.display()));
        summary
    }
}

/// Read, validate and convert the two input tables.
///
/// Strictly linear: read and validate coordinates, read and validate rainfall,
/// normalize the first and last timestamps, check the shapes agree, write the
/// series files, then the control file. Nothing is written unless every check passes.
pub struct Converter {
    config: ConversionConfig,
    reader: TableReader,
    validator: TableValidator,
    show_progress: bool,
}

impl Converter {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            config,
            reader: TableReader::new(),
            validator: TableValidator::new(),
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Every read and check of the pipeline, without writing anything.
    pub fn validate_inputs(
        &self,
        coordinates_path: &Path,
        rainfall_path: &Path,
    ) -> Result<ValidatedInputs> {
        let coordinates_table = self.reader.read_table(coordinates_path)?;
        let coordinates = self.validator.validate_coordinates(&coordinates_table)?;

        let rainfall_table = self.reader.read_table(rainfall_path)?;
        let rainfall = self.validator.validate_rainfall(&rainfall_table)?;

        let no_rows = || ProcessingError::Schema {
            path: rainfall_path.to_path_buf(),
            message: "no rainfall rows after the header".to_string(),
        };
        let start = rainfall.first_timestamp().ok_or_else(no_rows)?;
        let end = rainfall.last_timestamp().ok_or_else(no_rows)?;
        info!("Series start: {} / end: {}", start, end);

        self.validator
            .validate_cross_shape(coordinates.len(), rainfall.station_count())?;
        let stations =
            self.validator
                .match_stations(&coordinates, &rainfall, self.config.station_matching)?;

        Ok(ValidatedInputs {
            coordinates,
            rainfall,
            start,
            end,
            stations,
        })
    }

    /// Full conversion: validate, then write every series file and the control file.
    pub fn convert(&self, coordinates_path: &Path, rainfall_path: &Path) -> Result<ConversionSummary> {
        let inputs = self.validate_inputs(coordinates_path, rainfall_path)?;
        self.write_outputs(&inputs)
    }

    /// Write the series files and the control file for validated inputs.
    pub fn write_outputs(&self, inputs: &ValidatedInputs) -> Result<ConversionSummary> {
        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir)
            .map_err(|e| ProcessingError::file_access(output_dir, e))?;

        info!("Creating .{} files...", self.config.series_extension);
        let series_writer =
            SeriesWriter::new(output_dir).with_extension(&self.config.series_extension);
        let progress = if self.show_progress {
            ProgressReporter::new(
                inputs.stations.len() as u64,
                "Writing station series...",
                false,
            )
        } else {
            ProgressReporter::hidden()
        };

        let mut series_files = Vec::with_capacity(inputs.stations.len());
        for (column, (name, station)) in inputs
            .rainfall
            .station_names
            .iter()
            .zip(&inputs.stations)
            .enumerate()
        {
            progress.set_message(&format!("Writing {}", name));
            let series = StationSeries::new(
                name.clone(),
                station.coord_x().to_string(),
                station.coord_y().to_string(),
                inputs.rainfall.column(column).collect(),
            );
            let file = series_writer.write_series(&series, &inputs.start)?;
            series_files.push(file);
            progress.increment(1);
        }
        progress.finish_with_message(&format!("Wrote {} series files", series_files.len()));
        info!(
            "Series files created in directory: {}",
            output_dir.display()
        );

        let control_writer = ControlFileWriter::new(self.config.control.clone());
        let control_file = control_writer.write(
            &self.config.control_file_path(),
            &inputs.start,
            &inputs.end,
            &series_files,
        )?;
        info!("{} has been generated", control_file.display());

        Ok(ConversionSummary {
            stations: series_files.len(),
            time_steps: inputs.rainfall.time_steps(),
            start: inputs.start.to_string(),
            end: inputs.end.to_string(),
            series_files,
            control_file,
        })
    }
}
