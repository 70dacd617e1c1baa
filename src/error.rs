//! Errors reported by the checked [`Dictionary`](crate::Dictionary) contract

use thiserror::Error;

/// Rejection of a call whose arguments the dictionary cannot accept
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictError {
    /// A required key or value was absent
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
