use pretty_assertions::assert_eq;
use rainfall2mohid::interpolation::{FillMatrixRunner, Interpolator};
use rainfall2mohid::{ConversionConfig, Converter, ProcessingError, StationMatching};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_inputs(dir: &Path, coordinates: &str, rainfall: &str) -> (PathBuf, PathBuf) {
    let coordinates_path = dir.join("coordinates.csv");
    let rainfall_path = dir.join("hourly_rainfall.csv");
    fs::write(&coordinates_path, coordinates).expect("write coordinates");
    fs::write(&rainfall_path, rainfall).expect("write rainfall");
    (coordinates_path, rainfall_path)
}

fn converter(output_dir: &Path) -> Converter {
    Converter::new(ConversionConfig::default().with_output_dir(output_dir))
}

fn output_files(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read output dir")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_single_station_conversion() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let (coordinates, rainfall) = write_inputs(
        temp_dir.path(),
        "ID;COORD_Y;COORD_X\n1;-22.5;-43.0\n",
        "Date;StationA\n01/06/2024 00:00;5.0\n01/06/2024 01:00;0.0\n",
    );
    let out = temp_dir.path().join("out");

    let summary = converter(&out).convert(&coordinates, &rainfall).unwrap();
    assert_eq!(summary.stations, 1);
    assert_eq!(output_files(&out), vec!["FillMatrix.dat", "StationA.srm"]);

    let series = fs::read_to_string(out.join("StationA.srm")).unwrap();
    let expected_series = "\
TIME_UNITS                : HOURS
SERIE_INITIAL_DATA        : 2024 06 01 0 0 0
NAME                      : StationA
COORD_X                   : -43.0
COORD_Y                   : -22.5

!Date rainfall
<BeginTimeSerie>
0\t5.0000
1\t0.0000
<EndTimeSerie>
";
    assert_eq!(series, expected_series);

    let control = fs::read_to_string(out.join("FillMatrix.dat")).unwrap();
    let station_block = "\
<begin_station>
NAME                      : StationA
X                         : -43.0
Y                         : -22.5
VALUE_TYPE                : TIMESERIE
FILENAME                  : StationA.srm
DATA_COLUMN               : 2
<end_station>
";
    assert!(control.contains(station_block));
    assert!(control.contains("START                     : 2024 06 01 0 0 0\n"));
    assert!(control.contains("END                       : 2024 06 01 1 0 0\n"));
}

#[test]
fn test_negative_value_produces_no_files() {
    let temp_dir = TempDir::new().unwrap();
    let (coordinates, rainfall) = write_inputs(
        temp_dir.path(),
        "ID;COORD_Y;COORD_X\n1;-22.5;-43.0\n2;-21.7;-41.3\n",
        "Date;A;B\n01/06/2024 00:00;5.0;0\n01/06/2024 01:00;0.0;-1.0\n",
    );
    let out = temp_dir.path().join("out");

    let err = converter(&out).convert(&coordinates, &rainfall).unwrap_err();

    assert!(matches!(err, ProcessingError::NegativeValue { line: 3, .. }));
    assert_eq!(err.category(), "range");
    assert!(output_files(&out).is_empty());
}

#[test]
fn test_bad_value_past_header_produces_no_files() {
    let temp_dir = TempDir::new().unwrap();
    let (coordinates, rainfall) = write_inputs(
        temp_dir.path(),
        "ID;COORD_Y;COORD_X\n1;-22.5;-43.0\n",
        "Date;StationA\n01/06/2024 00:00;5.0;-1.0\n01/06/2024 01:00;0.0;abc\n",
    );
    let out = temp_dir.path().join("out");

    let err = converter(&out).convert(&coordinates, &rainfall).unwrap_err();

    assert!(matches!(err, ProcessingError::NegativeValue { line: 2, .. }));
    assert!(output_files(&out).is_empty());
}

#[test]
fn test_shape_mismatch_produces_no_files() {
    let temp_dir = TempDir::new().unwrap();
    let (coordinates, rainfall) = write_inputs(
        temp_dir.path(),
        "ID;COORD_Y;COORD_X\n1;-22.5;-43.0\n2;-21.7;-41.3\n",
        "Date;A;B;C\n01/06/2024 00:00;1;2;3\n",
    );
    let out = temp_dir.path().join("out");

    let err = converter(&out).convert(&coordinates, &rainfall).unwrap_err();

    assert!(matches!(
        err,
        ProcessingError::ShapeMismatch {
            stations: 2,
            columns: 3
        }
    ));
    assert!(output_files(&out).is_empty());
}

#[test]
fn test_invalid_calendar_date_is_format_error() {
    let temp_dir = TempDir::new().unwrap();
    let (coordinates, rainfall) = write_inputs(
        temp_dir.path(),
        "ID;COORD_Y;COORD_X\n1;-22.5;-43.0\n",
        "Date;A\n30/02/2024 10:00;1\n",
    );
    let out = temp_dir.path().join("out");

    let err = converter(&out).convert(&coordinates, &rainfall).unwrap_err();

    assert!(matches!(err, ProcessingError::TimestampFormat { line: 2, .. }));
    assert!(output_files(&out).is_empty());
}

#[test]
fn test_conversion_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let (coordinates, rainfall) = write_inputs(
        temp_dir.path(),
        "ID;COORD_Y;COORD_X\n1;-22.5;-43.0\n2;-21.7;-41.3\n",
        "Date;Campos;Macae\n31/12/2024 22:00;0.1;2\n31/12/2024 23:00;0;0.333\n",
    );
    let out = temp_dir.path().join("out");
    let converter = converter(&out);

    converter.convert(&coordinates, &rainfall).unwrap();
    let first: Vec<Vec<u8>> = output_files(&out)
        .iter()
        .map(|name| fs::read(out.join(name)).unwrap())
        .collect();

    converter.convert(&coordinates, &rainfall).unwrap();
    let second: Vec<Vec<u8>> = output_files(&out)
        .iter()
        .map(|name| fs::read(out.join(name)).unwrap())
        .collect();

    assert_eq!(output_files(&out).len(), 3);
    assert_eq!(first, second);
}

#[test]
fn test_by_name_matching_reports_unknown_station() {
    let temp_dir = TempDir::new().unwrap();
    let (coordinates, rainfall) = write_inputs(
        temp_dir.path(),
        "ID;COORD_Y;COORD_X\nCampos;-22.5;-43.0\n",
        "Date;Macae\n01/06/2024 00:00;1\n",
    );
    let out = temp_dir.path().join("out");
    let converter = Converter::new(
        ConversionConfig::default()
            .with_output_dir(&out)
            .with_station_matching(StationMatching::ByName),
    );

    let err = converter.convert(&coordinates, &rainfall).unwrap_err();

    assert_eq!(err.category(), "station-not-found");
    assert!(output_files(&out).is_empty());
}

#[cfg(unix)]
#[test]
fn test_fillmatrix_runs_in_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let (coordinates, rainfall) = write_inputs(
        temp_dir.path(),
        "ID;COORD_Y;COORD_X\n1;-22.5;-43.0\n",
        "Date;StationA\n01/06/2024 00:00;5.0\n",
    );
    let out = temp_dir.path().join("out");
    converter(&out).convert(&coordinates, &rainfall).unwrap();

    // stand-in for FillMatrix: requires the control file, produces the grid output
    let runner = FillMatrixRunner::new("/bin/sh", "output.hdf5").with_args(vec![
        "-c".to_string(),
        "test -f FillMatrix.dat && touch output.hdf5".to_string(),
    ]);

    let output = runner.run(&out).unwrap();
    assert_eq!(output, out.join("output.hdf5"));
    assert!(output.exists());
}
