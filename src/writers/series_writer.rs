use crate::error::Result;
use crate::models::{NormalizedTimestamp, SeriesFile, StationSeries};
use crate::utils::constants::{
    DEFAULT_SERIES_EXTENSION, SERIES_COMMENT, SERIES_TIME_UNITS, SERIES_VALUE_DECIMALS,
};
use crate::utils::series_file_name;
use crate::writers::{keyword_line, write_atomic};
use std::path::PathBuf;
use tracing::debug;

/// Writes one MOHID time series (`.srm`) file per station.
pub struct SeriesWriter {
    output_dir: PathBuf,
    extension: String,
}

impl SeriesWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            extension: DEFAULT_SERIES_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    /// Render the file body: metadata block then `index<TAB>value` lines from index 0.
    pub fn render(&self, series: &StationSeries, initial: &NormalizedTimestamp) -> String {
        let mut out = String::with_capacity(256 + series.values.len() * 12);

        out.push_str(&keyword_line("TIME_UNITS", SERIES_TIME_UNITS));
        out.push_str(&keyword_line("SERIE_INITIAL_DATA", initial));
        out.push_str(&keyword_line("NAME", &series.name));
        out.push_str(&keyword_line("COORD_X", &series.coord_x));
        out.push_str(&keyword_line("COORD_Y", &series.coord_y));
        out.push('\n');
        out.push_str(SERIES_COMMENT);
        out.push('\n');
        out.push_str("<BeginTimeSerie>\n");

        for (index, value) in series.values.iter().enumerate() {
            out.push_str(&format!(
                "{}\t{:.prec$}\n",
                index,
                value,
                prec = SERIES_VALUE_DECIMALS
            ));
        }

        out.push_str("<EndTimeSerie>\n");
        out
    }

    /// Write the station's file, replacing any previous one.
    pub fn write_series(
        &self,
        series: &StationSeries,
        initial: &NormalizedTimestamp,
    ) -> Result<SeriesFile> {
        let file_name = series_file_name(&series.name, &self.extension);
        let path = self.output_dir.join(&file_name);

        write_atomic(&path, &self.render(series, initial))?;
        debug!(
            "Wrote {} values for station {} to {}",
            series.values.len(),
            series.name,
            path.display()
        );

        Ok(SeriesFile {
            file_name,
            path,
            coord_x: series.coord_x.clone(),
            coord_y: series.coord_y.clone(),
        })
    }
}
