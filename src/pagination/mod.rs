mod error;
mod indexed;

pub use error::{PaginationError, PaginationResult};
pub use indexed::{HyperIndex, IndexedDataset};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dataset::Row;

/// Page size used when a caller does not ask for one
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Start (inclusive) and end (exclusive) offsets of a 1-based page.
///
/// No validation: callers pass positive values.
pub fn index_range(page: usize, page_size: usize) -> (usize, usize) {
    ((page - 1) * page_size, page * page_size)
}

/// Number of pages needed to hold `len` rows
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

pub(crate) fn ensure_positive(name: &'static str, value: usize) -> PaginationResult<()> {
    if value == 0 {
        warn!(argument = name, value, "rejected non-positive pagination argument");
        return Err(PaginationError::InvalidArgument { name, value });
    }
    Ok(())
}

/// Slice one page out of `rows`, clipped to the end of the data
pub fn page_slice(rows: &[Row], page: usize, page_size: usize) -> PaginationResult<&[Row]> {
    ensure_positive("page", page)?;
    ensure_positive("page_size", page_size)?;

    // A start offset past usize::MAX is past any dataset
    let start = match (page - 1).checked_mul(page_size) {
        Some(start) if start < rows.len() => start,
        _ => return Ok(&[]),
    };
    let end = page.saturating_mul(page_size).min(rows.len());
    Ok(&rows[start..end])
}

/// Page number and size, defaulting to the first page of ten rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A page plus the links needed to walk to its neighbours
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HyperPage {
    pub page_size: usize,
    pub page: usize,
    pub data: Vec<Row>,
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
    pub total_pages: usize,
}

impl HyperPage {
    /// Build the page record for `page` over the full row set
    pub fn from_rows(rows: &[Row], page: usize, page_size: usize) -> PaginationResult<Self> {
        let data = page_slice(rows, page, page_size)?.to_vec();
        let total_pages = total_pages(rows.len(), page_size);

        Ok(Self {
            page_size,
            page,
            data,
            next_page: if page >= total_pages { None } else { Some(page + 1) },
            prev_page: if page <= 1 { None } else { Some(page - 1) },
            total_pages,
        })
    }
}
