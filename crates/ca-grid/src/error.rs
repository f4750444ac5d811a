use ca_core::{CellId, Status};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("illegal transition for {cell}: {from} -> {to}")]
    IllegalTransition {
        cell: CellId,
        from: Status,
        to:   Status,
    },

    #[error("grid state is inconsistent: {0}")]
    Inconsistent(String),
}

pub type GridResult<T> = Result<T, GridError>;
