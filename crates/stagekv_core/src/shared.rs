//! Thread-safe wrapper around the store.

use crate::error::StoreResult;
use crate::stats::StatsSnapshot;
use crate::store::TransactionalStore;
use crate::transaction::TransactionState;
use parking_lot::Mutex;
use std::sync::Arc;

/// A cloneable, thread-safe handle to a [`TransactionalStore`].
///
/// The store itself assumes exclusive single-caller access. When multiple
/// concurrent callers need the same store, this wrapper provides the
/// required external mutual exclusion: a single mutex guards the entire
/// state machine and is held for the duration of each operation, so every
/// operation stays atomic with respect to every other.
///
/// All handles cloned from the same `SharedStore` see the same committed
/// state and the same single pending transaction.
///
/// # Example
///
/// ```rust
/// use stagekv_core::SharedStore;
///
/// let store = SharedStore::new();
/// let handle = store.clone();
///
/// store.begin()?;
/// handle.put("a", 1)?;
/// store.commit()?;
///
/// assert_eq!(handle.get("a"), Some(1));
/// # Ok::<(), stagekv_core::StoreError>(())
/// ```
#[derive(Debug)]
pub struct SharedStore<V> {
    inner: Arc<Mutex<TransactionalStore<V>>>,
}

impl<V> Clone for SharedStore<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Default for SharedStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SharedStore<V> {
    /// Creates an empty shared store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(TransactionalStore::new())),
        }
    }

    /// Creates an empty shared store with pre-sized committed state.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(TransactionalStore::with_capacity(capacity))),
        }
    }

    /// Wraps an existing store.
    #[must_use]
    pub fn from_store(store: TransactionalStore<V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Begins a new transaction.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TransactionConflict`](crate::StoreError::TransactionConflict)
    /// if a transaction is already open, including one begun through
    /// another handle.
    pub fn begin(&self) -> StoreResult<()> {
        self.inner.lock().begin()
    }

    /// Stages a write in the open transaction.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoActiveTransaction`](crate::StoreError::NoActiveTransaction)
    /// if no transaction is open.
    pub fn put(&self, key: impl Into<String>, value: V) -> StoreResult<()> {
        self.inner.lock().put(key, value)
    }

    /// Commits the open transaction.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoActiveTransaction`](crate::StoreError::NoActiveTransaction)
    /// if no transaction is open.
    pub fn commit(&self) -> StoreResult<()> {
        self.inner.lock().commit()
    }

    /// Rolls back the open transaction.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoActiveTransaction`](crate::StoreError::NoActiveTransaction)
    /// if no transaction is open.
    pub fn rollback(&self) -> StoreResult<()> {
        self.inner.lock().rollback()
    }

    /// Checks whether a transaction is currently open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        self.inner.lock().in_transaction()
    }

    /// Returns the current state of the transaction machine.
    #[must_use]
    pub fn state(&self) -> TransactionState {
        self.inner.lock().state()
    }

    /// Returns the number of keys in the committed state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Checks whether the committed state is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns a snapshot of the store's activity counters.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.lock().stats().snapshot()
    }
}

impl<V: Clone> SharedStore<V> {
    /// Returns the committed value for a key, or `None` if absent.
    ///
    /// The value is cloned out of the store because a borrow cannot
    /// outlive the lock. Reads see the last-committed view only.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.lock().get(key).cloned()
    }
}
