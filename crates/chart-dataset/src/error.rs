// File: crates/chart-dataset/src/error.rs
// Summary: Error type for the few checked data set operations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataSetError {
    /// A checked append would break ascending x order.
    #[error("entry x-index {x_index} is below the last x-index {last_x_index}")]
    OutOfOrder { x_index: i64, last_x_index: i64 },

    #[error("invalid color literal {0:?} (expected #RRGGBB or #RRGGBBAA)")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, DataSetError>;
