pub mod config;
pub mod dataset;
pub mod pagination;
pub mod server;

pub use config::{ConfigError, ConfigResult, ServerConfig};
pub use dataset::{
    CsvSource, Dataset, DatasetError, DatasetResult, MemorySource, Row, RowSource, Table,
};
pub use pagination::{
    DEFAULT_PAGE_SIZE, HyperIndex, HyperPage, IndexedDataset, PageRequest, PaginationError,
    PaginationResult, index_range, total_pages,
};
pub use server::Server;
