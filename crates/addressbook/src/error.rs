//! Addressbook module error types.

use bazaar_runtime::StoreError;
use thiserror::Error;

/// Errors that can occur in the addressbook module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressbookError {
    #[error("address record not found")]
    NotFound,

    #[error("address record already exists")]
    AlreadyExists,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
