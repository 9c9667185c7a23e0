use crate::config::ControlParameters;
use crate::error::Result;
use crate::models::{NormalizedTimestamp, SeriesFile};
use crate::utils::{format_parameter, station_name_from_file};
use crate::writers::{keyword_line, write_atomic};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes the FillMatrix control file listing every station series.
pub struct ControlFileWriter {
    parameters: ControlParameters,
}

impl ControlFileWriter {
    pub fn new(parameters: ControlParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &ControlParameters {
        &self.parameters
    }

    pub fn render(
        &self,
        start: &NormalizedTimestamp,
        end: &NormalizedTimestamp,
        stations: &[SeriesFile],
    ) -> String {
        let p = &self.parameters;
        let mut out = String::with_capacity(512 + stations.len() * 256);

        out.push_str(&keyword_line("PROPERTY_NAME", &p.property_name));
        out.push_str(&keyword_line("PROPERTY_UNITS", &p.property_units));
        out.push_str(&keyword_line("OUTPUT_FILE", &p.output_file));
        out.push_str(&keyword_line("VARIABLE_IN_TIME", flag(p.variable_in_time)));
        out.push_str(&keyword_line("GRID_DATA_FILE", &p.grid_data_file));
        out.push('\n');

        out.push_str(&keyword_line("START", start));
        out.push_str(&keyword_line("END", end));
        out.push_str(&keyword_line("MAX_TIME_SPAN", p.max_time_span));
        out.push_str(&keyword_line(
            "OUTPUT_TIME",
            format!("{} {}", p.output_time_start, p.output_time_step),
        ));
        out.push_str(&keyword_line("SKIP_NULLVALUES", flag(p.skip_null_values)));
        out.push('\n');

        out.push_str(&keyword_line("INTERPOLATION_METHOD", p.interpolation_method));
        out.push_str(&keyword_line("MAX_DISTANCE", p.max_distance));
        out.push_str(&keyword_line("IWD_N", format_parameter(p.iwd_n)));
        out.push('\n');

        for station in stations {
            out.push_str("<begin_station>\n");
            out.push_str(&keyword_line(
                "NAME",
                station_name_from_file(&station.file_name),
            ));
            out.push_str(&keyword_line("X", &station.coord_x));
            out.push_str(&keyword_line("Y", &station.coord_y));
            out.push_str(&keyword_line("VALUE_TYPE", &p.value_type));
            out.push_str(&keyword_line("FILENAME", &station.file_name));
            out.push_str(&keyword_line("DATA_COLUMN", p.data_column));
            out.push_str("<end_station>\n\n");
        }

        out
    }

    /// Write the control file to `path`, replacing any previous one.
    pub fn write(
        &self,
        path: &Path,
        start: &NormalizedTimestamp,
        end: &NormalizedTimestamp,
        stations: &[SeriesFile],
    ) -> Result<PathBuf> {
        write_atomic(path, &self.render(start, end, stations))?;
        debug!(
            "Wrote control file {} with {} stations",
            path.display(),
            stations.len()
        );
        Ok(path.to_path_buf())
    }
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn series_file(name: &str, x: &str, y: &str) -> SeriesFile {
        SeriesFile {
            file_name: format!("{}.srm", name),
            path: PathBuf::from(format!("{}.srm", name)),
            coord_x: x.to_string(),
            coord_y: y.to_string(),
        }
    }

    fn ts(value: &str) -> NormalizedTimestamp {
        NormalizedTimestamp::parse(value).unwrap()
    }

    #[test]
    fn test_render_default_parameters() {
        let writer = ControlFileWriter::new(ControlParameters::default());
        let body = writer.render(
            &ts("01/06/2024 00:00"),
            &ts("01/06/2024 01:00"),
            &[series_file("StationA", "-43.0", "-22.5")],
        );

        let expected = "\
PROPERTY_NAME             : precipitation
PROPERTY_UNITS            : mm
OUTPUT_FILE               : output.hdf5
VARIABLE_IN_TIME          : 1
GRID_DATA_FILE            : topography.dat

START                     : 2024 06 01 0 0 0
END                       : 2024 06 01 1 0 0
MAX_TIME_SPAN             : 86400
OUTPUT_TIME               : 0 3600
SKIP_NULLVALUES           : 0

INTERPOLATION_METHOD      : 2
MAX_DISTANCE              : 50000
IWD_N                     : 2.0

<begin_station>
NAME                      : StationA
X                         : -43.0
Y                         : -22.5
VALUE_TYPE                : TIMESERIE
FILENAME                  : StationA.srm
DATA_COLUMN               : 2
<end_station>

";
        assert_eq!(body, expected);
    }

    #[test]
    fn test_station_blocks_follow_input_order() {
        let writer = ControlFileWriter::new(ControlParameters::default());
        let body = writer.render(
            &ts("01/06/2024 00:00"),
            &ts("02/06/2024 00:00"),
            &[
                series_file("Zeta", "1", "2"),
                series_file("Alpha", "3", "4"),
                series_file("St.Mary", "5", "6"),
            ],
        );

        let zeta = body.find("NAME                      : Zeta").unwrap();
        let alpha = body.find("NAME                      : Alpha").unwrap();
        assert!(zeta < alpha);
        assert!(body.contains("NAME                      : St.Mary\n"));
        assert_eq!(body.matches("<begin_station>").count(), 3);
        assert_eq!(body.matches("<end_station>").count(), 3);
    }

    #[test]
    fn test_custom_parameters() {
        let parameters = ControlParameters {
            max_distance: 12500.5,
            iwd_n: 3.0,
            skip_null_values: true,
            output_time_step: 1800,
            ..ControlParameters::default()
        };
        let body = ControlFileWriter::new(parameters).render(
            &ts("01/06/2024 00:00"),
            &ts("01/06/2024 00:00"),
            &[],
        );

        assert!(body.contains("MAX_DISTANCE              : 12500.5\n"));
        assert!(body.contains("IWD_N                     : 3.0\n"));
        assert!(body.contains("SKIP_NULLVALUES           : 1\n"));
        assert!(body.contains("OUTPUT_TIME               : 0 1800\n"));
        assert!(!body.contains("<begin_station>"));
    }

    #[test]
    fn test_write_control_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("FillMatrix.dat");
        let writer = ControlFileWriter::new(ControlParameters::default());
        let stations = [series_file("StationA", "-43.0", "-22.5")];

        let written = writer.write(
            &path,
            &ts("01/06/2024 00:00"),
            &ts("01/06/2024 01:00"),
            &stations,
        )?;

        assert_eq!(written, path);
        assert_eq!(
            std::fs::read_to_string(&path)?,
            writer.render(&ts("01/06/2024 00:00"), &ts("01/06/2024 01:00"), &stations)
        );

        Ok(())
    }
}
