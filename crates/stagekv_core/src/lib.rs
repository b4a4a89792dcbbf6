//! # stagekv
//!
//! An in-process key-value store with a single staged write-transaction.
//!
//! The store keeps a committed mapping from string keys to opaque values
//! and, while a transaction is open, a staged overlay of uncommitted
//! writes. Writes are staged with [`TransactionalStore::put`] and become
//! visible only when [`TransactionalStore::commit`] merges them into the
//! committed state; [`TransactionalStore::rollback`] discards them.
//!
//! ## Design Principles
//!
//! - Values are **opaque**: the store never inspects or transforms them
//! - Reads always see the last-committed view; staged writes are never
//!   visible, not even to the writer (no dirty reads)
//! - At most one transaction is pending; there are no savepoints and no
//!   nested transactions
//! - Precondition violations are refused with an error and leave the
//!   store unchanged
//!
//! ## Example
//!
//! ```rust
//! use stagekv_core::{StoreError, TransactionalStore};
//!
//! let mut store = TransactionalStore::new();
//!
//! assert_eq!(store.get("a"), None);
//! assert_eq!(store.put("a", 5), Err(StoreError::NoActiveTransaction));
//!
//! store.begin().unwrap();
//! store.put("a", 5).unwrap();
//! assert_eq!(store.get("a"), None); // staged, not committed
//!
//! store.put("a", 6).unwrap();
//! store.commit().unwrap();
//! assert_eq!(store.get("a"), Some(&6)); // last write won
//! ```
//!
//! For use from multiple threads, [`SharedStore`] wraps the store in a
//! single mutex held for the duration of each operation.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod shared;
mod stats;
mod store;
mod transaction;

pub use error::{StoreError, StoreResult};
pub use shared::SharedStore;
pub use stats::{StatsSnapshot, StoreStats};
pub use store::TransactionalStore;
pub use transaction::{StagedWrites, TransactionState};
