//! The transactional store.

use crate::error::{StoreError, StoreResult};
use crate::stats::StoreStats;
use crate::transaction::{StagedWrites, TransactionState};
use std::collections::HashMap;
use tracing::{debug, trace};

/// An in-process key-value store with a single staged write-transaction.
///
/// The store holds a committed key-value mapping and, while a transaction
/// is open, a staged overlay of uncommitted writes. It is a two-state
/// machine: `Idle` (no overlay) and `InTransaction` (overlay present).
///
/// - Writes go through [`begin`](Self::begin) / [`put`](Self::put) and stay
///   in the overlay until [`commit`](Self::commit) merges them into the
///   committed state, or [`rollback`](Self::rollback) discards them.
/// - Reads via [`get`](Self::get) always see the last-committed view; a
///   staged write is never visible, not even to the writer.
///
/// The value type is opaque to the store: values are moved in on `put` and
/// handed back by reference on `get`, never inspected.
///
/// # Single-caller access
///
/// The store is synchronous and assumes exclusive single-caller access;
/// every operation runs to completion with no suspension points. To share
/// a store across threads, wrap it in [`SharedStore`](crate::SharedStore),
/// which guards the whole state machine with one mutex.
///
/// # Example
///
/// ```rust
/// use stagekv_core::TransactionalStore;
///
/// let mut store = TransactionalStore::new();
///
/// store.begin()?;
/// store.put("answer", 42)?;
/// assert_eq!(store.get("answer"), None); // not committed yet
///
/// store.commit()?;
/// assert_eq!(store.get("answer"), Some(&42));
/// # Ok::<(), stagekv_core::StoreError>(())
/// ```
#[derive(Debug)]
pub struct TransactionalStore<V> {
    /// Committed state. Mutated only by `commit`.
    committed: HashMap<String, V>,
    /// Staged overlay of the open transaction, if any.
    staged: Option<StagedWrites<V>>,
    /// Activity counters.
    stats: StoreStats,
}

impl<V> Default for TransactionalStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TransactionalStore<V> {
    /// Creates an empty store with no open transaction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            committed: HashMap::new(),
            staged: None,
            stats: StoreStats::new(),
        }
    }

    /// Creates an empty store with pre-sized committed state.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            committed: HashMap::with_capacity(capacity),
            staged: None,
            stats: StoreStats::new(),
        }
    }

    /// Returns the current state of the transaction machine.
    #[must_use]
    pub fn state(&self) -> TransactionState {
        if self.staged.is_some() {
            TransactionState::InTransaction
        } else {
            TransactionState::Idle
        }
    }

    /// Checks whether a transaction is currently open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        self.staged.is_some()
    }

    /// Returns the number of keys in the committed state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Checks whether the committed state is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Returns the number of staged writes, or 0 when no transaction is open.
    #[must_use]
    pub fn pending_write_count(&self) -> usize {
        self.staged.as_ref().map_or(0, StagedWrites::len)
    }

    /// Returns the store's activity counters.
    #[must_use]
    pub fn stats(&self) -> &StoreStats {
        &self.stats
    }

    /// Begins a new transaction with an empty staged overlay.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TransactionConflict`] if a transaction is
    /// already open. The existing overlay is left untouched.
    pub fn begin(&mut self) -> StoreResult<()> {
        if self.staged.is_some() {
            self.stats.record_rejected_op();
            return Err(StoreError::TransactionConflict);
        }
        self.staged = Some(StagedWrites::new());
        self.stats.record_transaction_start();
        debug!("transaction started");
        Ok(())
    }

    /// Stages a write in the open transaction.
    ///
    /// The write lands in the staged overlay only; the committed state is
    /// untouched and the key stays invisible to [`get`](Self::get) until
    /// commit. Staging the same key twice keeps the last value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoActiveTransaction`] if no transaction is
    /// open.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> StoreResult<()> {
        match self.staged.as_mut() {
            Some(staged) => {
                let key = key.into();
                trace!(key = %key, "write staged");
                staged.insert(key, value);
                self.stats.record_staged_write();
                Ok(())
            }
            None => {
                self.stats.record_rejected_op();
                Err(StoreError::NoActiveTransaction)
            }
        }
    }

    /// Returns the committed value for a key, or `None` if absent.
    ///
    /// Reads always see the last-committed view: the staged overlay is
    /// never consulted, in or out of a transaction. Never fails.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.stats.record_read();
        self.committed.get(key)
    }

    /// Commits the open transaction.
    ///
    /// Merges the staged overlay into the committed state key-by-key: each
    /// staged key overwrites any existing committed entry, keys absent from
    /// the overlay are left untouched. The overlay is discarded afterward
    /// and the store returns to idle. No intermediate state is observable
    /// by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoActiveTransaction`] if no transaction is
    /// open.
    pub fn commit(&mut self) -> StoreResult<()> {
        match self.staged.take() {
            Some(staged) => {
                let staged_count = staged.len();
                self.committed.extend(staged.into_writes());
                self.stats.record_transaction_commit();
                self.stats.set_committed_keys(self.committed.len() as u64);
                debug!(
                    staged = staged_count,
                    committed = self.committed.len(),
                    "transaction committed"
                );
                Ok(())
            }
            None => {
                self.stats.record_rejected_op();
                Err(StoreError::NoActiveTransaction)
            }
        }
    }

    /// Rolls back the open transaction.
    ///
    /// Discards the staged overlay without touching the committed state;
    /// the store returns to idle.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoActiveTransaction`] if no transaction is
    /// open.
    pub fn rollback(&mut self) -> StoreResult<()> {
        match self.staged.take() {
            Some(staged) => {
                debug!(discarded = staged.len(), "transaction rolled back");
                self.stats.record_transaction_rollback();
                Ok(())
            }
            None => {
                self.stats.record_rejected_op();
                Err(StoreError::NoActiveTransaction)
            }
        }
    }
}
