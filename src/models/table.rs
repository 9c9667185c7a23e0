use std::path::{Path, PathBuf};

/// One row of a delimited table, with the line it started on in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub line: u64,
    pub fields: Vec<String>,
}

impl TableRow {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Field at `index`, or `None` when the row is shorter.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

/// A delimited text table exactly as read: header row first, no type coercion.
#[derive(Debug, Clone)]
pub struct Table {
    pub path: PathBuf,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new(path: impl Into<PathBuf>, rows: Vec<TableRow>) -> Self {
        Self {
            path: path.into(),
            rows,
        }
    }

    /// Build a table from in-memory rows, numbering lines from 1.
    pub fn from_rows<I, R, S>(path: impl Into<PathBuf>, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                TableRow::new(i as u64 + 1, row.into_iter().map(Into::into).collect())
            })
            .collect();
        Self::new(path, rows)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first()
    }

    pub fn data_rows(&self) -> &[TableRow] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
