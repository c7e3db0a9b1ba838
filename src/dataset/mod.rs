mod error;
mod once;
mod source;

pub use error::{DatasetError, DatasetResult};
pub(crate) use once::InitOnce;
pub use source::{CsvSource, MemorySource, Row, RowSource, Table};

use tracing::{debug, info};

/// Rows read once from a source and cached for the lifetime of the owner.
///
/// Loading happens on first access. A mutex serializes the first load so
/// concurrent callers never read the source twice; a failed load leaves the
/// cache empty and the next call tries again.
pub struct Dataset {
    source: Box<dyn RowSource>,
    table: InitOnce<Table>,
}

impl Dataset {
    pub fn new<S: RowSource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
            table: InitOnce::new(),
        }
    }

    /// Get the cached table, loading it on first call
    pub fn table(&self) -> DatasetResult<&Table> {
        self.table.get_or_try_init(|| {
            debug!(source = %self.source.describe(), "loading dataset");
            let table = self.source.load()?;
            info!(
                source = %self.source.describe(),
                rows = table.len(),
                "dataset loaded"
            );
            Ok(table)
        })
    }

    /// All data rows, header excluded
    pub fn rows(&self) -> DatasetResult<&[Row]> {
        Ok(&self.table()?.rows)
    }

    pub fn header(&self) -> DatasetResult<Option<&Row>> {
        Ok(self.table()?.header.as_ref())
    }

    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }
}
