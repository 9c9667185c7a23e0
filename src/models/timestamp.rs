use crate::error::{ProcessingError, Result};
use crate::utils::constants::{TIMESTAMP_FORMAT, TIMESTAMP_LEN};
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt;
use std::path::Path;

/// A rainfall date-time rendered the way MOHID expects: `YYYY MM DD H M S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedTimestamp(NaiveDateTime);

impl NormalizedTimestamp {
    pub fn new(datetime: NaiveDateTime) -> Self {
        // Source timestamps have minute resolution
        Self(datetime.with_second(0).unwrap_or(datetime))
    }

    /// Parse a `DD/MM/YYYY HH:MM` string.
    ///
    /// Every position must hold the expected digit or separator and the result
    /// must be a real calendar date-time, so `1/6/2024 0:00` and
    /// `31/02/2024 10:00` are both rejected.
    pub fn parse(value: &str) -> Option<Self> {
        if !has_timestamp_shape(value) {
            return None;
        }
        NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
            .ok()
            .map(Self::new)
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for NormalizedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02} {:02} {} {} {}",
            self.0.year(),
            self.0.month(),
            self.0.day(),
            self.0.hour(),
            self.0.minute(),
            self.0.second()
        )
    }
}

/// Normalize a rainfall timestamp, reporting where it came from on failure.
pub fn normalize_timestamp(value: &str, path: &Path, line: u64) -> Result<NormalizedTimestamp> {
    NormalizedTimestamp::parse(value).ok_or_else(|| ProcessingError::TimestampFormat {
        path: path.to_path_buf(),
        line,
        value: value.to_string(),
    })
}

fn has_timestamp_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == TIMESTAMP_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            10 => *b == b' ',
            13 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}
