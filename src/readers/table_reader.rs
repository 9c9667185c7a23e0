use crate::error::{ProcessingError, Result};
use crate::models::{Table, TableRow};
use crate::utils::constants::FIELD_DELIMITER;
use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, warn};

/// Reads semicolon-delimited tables into rows of text fields.
pub struct TableReader {
    delimiter: u8,
}

impl TableReader {
    pub fn new() -> Self {
        Self {
            delimiter: FIELD_DELIMITER,
        }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read a table file, preserving row and column order.
    pub fn read_table(&self, path: &Path) -> Result<Table> {
        let bytes = std::fs::read(path).map_err(|e| ProcessingError::file_access(path, e))?;
        let text = decode_text(&bytes);
        if matches!(text, Cow::Owned(_)) {
            warn!(
                "'{}' is not valid UTF-8, decoded as Windows-1252",
                path.display()
            );
        }

        let rows = self.parse_rows(&text).map_err(|source| ProcessingError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} rows from '{}'", rows.len(), path.display());

        Ok(Table::new(path, rows))
    }

    /// Parse delimited text already in memory.
    pub fn parse_rows(&self, text: &str) -> std::result::Result<Vec<TableRow>, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            rows.push(TableRow::new(
                line,
                record.iter().map(str::to_string).collect(),
            ));
        }

        Ok(rows)
    }
}

impl Default for TableReader {
    fn default() -> Self {
        Self::new()
    }
}

/// UTF-8 (BOM stripped) when valid, Windows-1252 otherwise.
fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            Cow::Owned(text.into_owned())
        }
    }
}
