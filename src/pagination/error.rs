use crate::dataset::DatasetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("Invalid argument: {name} must be a positive integer, got {value}")]
    InvalidArgument { name: &'static str, value: usize },

    #[error("Index out of range: {index} not in [0, {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

pub type PaginationResult<T> = Result<T, PaginationError>;
