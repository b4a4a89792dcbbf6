//! Error types for store operations.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
///
/// Both variants signal a transaction state-machine precondition violation
/// by the caller. The store never takes corrective action: a failed
/// operation leaves both the committed state and any staged overlay exactly
/// as they were.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// `begin` was called while a transaction is already in progress.
    ///
    /// Nested transactions are not supported. The overlay of the
    /// already-open transaction is left untouched.
    #[error("transaction already in progress")]
    TransactionConflict,

    /// `put`, `commit`, or `rollback` was called with no open transaction.
    #[error("no active transaction")]
    NoActiveTransaction,
}
