use std::path::Path;

/// File name of the series artifact for a station (`StationA` -> `StationA.srm`).
pub fn series_file_name(station: &str, extension: &str) -> String {
    format!("{}.{}", station, extension)
}

/// Station name recorded in the control file: the file name without its final extension.
pub fn station_name_from_file(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(pos) if pos > 0 => &file_name[..pos],
        _ => file_name,
    }
}

/// Whether a rainfall header name can be used as a file name in the output directory.
pub fn is_valid_station_file_stem(station: &str) -> bool {
    !station.trim().is_empty()
        && station != "."
        && station != ".."
        && !station.contains(['/', '\\'])
        && Path::new(station).components().count() == 1
}
