use csv::ReaderBuilder;
use std::fmt;
use std::path::{Path, PathBuf};

use super::error::{DatasetError, DatasetResult};

/// A single row: ordered string fields, untyped
pub type Row = Vec<String>;

/// Rows read from a source, with the header split off
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Option<Row>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(header: Option<Row>, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Anything that can produce the full set of rows in one read
pub trait RowSource: Send + Sync {
    fn load(&self) -> DatasetResult<Table>;

    /// Short label used in log output
    fn describe(&self) -> String;
}

/// Delimited text file with an optional header row
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
    has_header: bool,
}

impl CsvSource {
    /// Comma-delimited file whose first record is a header
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: b',',
            has_header: true,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for CsvSource {
    fn load(&self) -> DatasetResult<Table> {
        if !self.path.exists() {
            return Err(DatasetError::FileNotFound(self.path.display().to_string()));
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_header)
            .flexible(true) // rows may differ in field count
            .from_path(&self.path)?;

        let header = if self.has_header {
            let fields = reader.headers()?;
            if fields.is_empty() {
                None
            } else {
                Some(fields.iter().map(str::to_string).collect())
            }
        } else {
            None
        };

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Table { header, rows })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Rows handed over directly, already without a header
#[derive(Clone, Default)]
pub struct MemorySource {
    table: Table,
}

impl MemorySource {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            table: Table::new(None, rows),
        }
    }

    pub fn with_header(mut self, header: Row) -> Self {
        self.table.header = Some(header);
        self
    }
}

impl fmt::Debug for MemorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySource")
            .field("rows", &self.table.len())
            .finish()
    }
}

impl RowSource for MemorySource {
    fn load(&self) -> DatasetResult<Table> {
        Ok(self.table.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} rows)", self.table.len())
    }
}
