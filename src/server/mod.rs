use tracing::debug;

use crate::config::{ConfigResult, ServerConfig};
use crate::dataset::{CsvSource, Dataset, DatasetResult, InitOnce, Row, RowSource};
use crate::pagination::{
    self, HyperIndex, HyperPage, IndexedDataset, PageRequest, PaginationResult,
};

/// Paginates one dataset by page number or by stable key.
///
/// The rows and the key index are each built once, on first use, and kept
/// until the server is dropped.
pub struct Server {
    dataset: Dataset,
    indexed: InitOnce<IndexedDataset>,
    default_page_size: usize,
}

impl Server {
    pub fn new<S: RowSource + 'static>(source: S) -> Self {
        Self {
            dataset: Dataset::new(source),
            indexed: InitOnce::new(),
            default_page_size: pagination::DEFAULT_PAGE_SIZE,
        }
    }

    /// Server over the CSV file named in `config`, which must be valid
    pub fn from_config(config: &ServerConfig) -> ConfigResult<Self> {
        config.validate()?;
        let source = CsvSource::new(&config.data_file)
            .with_delimiter(config.delimiter_byte()?)
            .with_header(config.has_header);
        Ok(Self::new(source).with_default_page_size(config.default_page_size))
    }

    pub fn with_default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Cached rows, header excluded
    pub fn dataset(&self) -> DatasetResult<&[Row]> {
        self.dataset.rows()
    }

    pub fn header(&self) -> DatasetResult<Option<&Row>> {
        self.dataset.header()
    }

    /// Rows keyed by load position, built on first call
    pub fn indexed_dataset(&self) -> DatasetResult<&IndexedDataset> {
        self.indexed
            .get_or_try_init(|| Ok(IndexedDataset::build(self.dataset()?)))
    }

    pub fn index_range(&self, page: usize, page_size: usize) -> (usize, usize) {
        pagination::index_range(page, page_size)
    }

    pub fn get_page(&self, page: usize, page_size: usize) -> PaginationResult<&[Row]> {
        let rows = self.dataset()?;
        let data = pagination::page_slice(rows, page, page_size)?;
        debug!(page, page_size, returned = data.len(), "served page");
        Ok(data)
    }

    pub fn get_hyper(&self, page: usize, page_size: usize) -> PaginationResult<HyperPage> {
        HyperPage::from_rows(self.dataset()?, page, page_size)
    }

    pub fn get_hyper_request(&self, request: PageRequest) -> PaginationResult<HyperPage> {
        self.get_hyper(request.page, request.page_size)
    }

    /// First page at the configured default size
    pub fn default_request(&self) -> PageRequest {
        PageRequest::new(1, self.default_page_size)
    }

    pub fn get_hyper_index(&self, index: usize, page_size: usize) -> PaginationResult<HyperIndex> {
        // Bounds are the loaded row count, not the live key count
        self.indexed_dataset()?.hyper_index(index, page_size)
    }

    /// Remove a key from the index. Other keys and the cached rows are untouched.
    pub fn delete(&self, key: usize) -> DatasetResult<Option<Row>> {
        Ok(self.indexed_dataset()?.remove(key))
    }
}
