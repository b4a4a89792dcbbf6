//! Store statistics and telemetry.
//!
//! Provides counters for monitoring store activity.
//!
//! # Usage
//!
//! ```rust
//! use stagekv_core::TransactionalStore;
//!
//! let mut store = TransactionalStore::new();
//! store.begin().unwrap();
//! store.put("a", 5).unwrap();
//! store.commit().unwrap();
//!
//! let stats = store.stats().snapshot();
//! assert_eq!(stats.transactions_committed, 1);
//! assert_eq!(stats.staged_writes, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Store statistics and metrics.
///
/// All counters are atomic and can be read while operations are in
/// progress. Values are monotonically increasing, except for the
/// `committed_keys` gauge.
#[derive(Debug, Default)]
pub struct StoreStats {
    // Operation counters
    /// Total number of committed-view reads.
    reads: AtomicU64,
    /// Total number of writes staged into an overlay.
    staged_writes: AtomicU64,

    // Transaction counters
    /// Total number of transactions started.
    transactions_started: AtomicU64,
    /// Total number of transactions committed.
    transactions_committed: AtomicU64,
    /// Total number of transactions rolled back.
    transactions_rolled_back: AtomicU64,

    // Error counters
    /// Total number of operations refused for a precondition violation.
    rejected_ops: AtomicU64,

    // Gauges
    /// Number of keys in the committed state (updated on commit).
    committed_keys: AtomicU64,
}

impl StoreStats {
    /// Creates a new stats instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Increment methods (internal use) ===

    /// Records a committed-view read.
    pub(crate) fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a staged write.
    pub(crate) fn record_staged_write(&self) {
        self.staged_writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a transaction start.
    pub(crate) fn record_transaction_start(&self) {
        self.transactions_started.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a transaction commit.
    pub(crate) fn record_transaction_commit(&self) {
        self.transactions_committed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a transaction rollback.
    pub(crate) fn record_transaction_rollback(&self) {
        self.transactions_rolled_back.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a refused operation.
    pub(crate) fn record_rejected_op(&self) {
        self.rejected_ops.fetch_add(1, Ordering::Relaxed);
    }

    /// Updates the committed-key gauge.
    pub(crate) fn set_committed_keys(&self, count: u64) {
        self.committed_keys.store(count, Ordering::Relaxed);
    }

    // === Getter methods (public API) ===

    /// Returns the total number of committed-view reads.
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    /// Returns the total number of staged writes.
    pub fn staged_writes(&self) -> u64 {
        self.staged_writes.load(Ordering::Relaxed)
    }

    /// Returns the total number of transactions started.
    pub fn transactions_started(&self) -> u64 {
        self.transactions_started.load(Ordering::Relaxed)
    }

    /// Returns the total number of transactions committed.
    pub fn transactions_committed(&self) -> u64 {
        self.transactions_committed.load(Ordering::Relaxed)
    }

    /// Returns the total number of transactions rolled back.
    pub fn transactions_rolled_back(&self) -> u64 {
        self.transactions_rolled_back.load(Ordering::Relaxed)
    }

    /// Returns the total number of refused operations.
    pub fn rejected_ops(&self) -> u64 {
        self.rejected_ops.load(Ordering::Relaxed)
    }

    /// Returns the number of keys in the committed state.
    pub fn committed_keys(&self) -> u64 {
        self.committed_keys.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of all stats.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            reads: self.reads(),
            staged_writes: self.staged_writes(),
            transactions_started: self.transactions_started(),
            transactions_committed: self.transactions_committed(),
            transactions_rolled_back: self.transactions_rolled_back(),
            rejected_ops: self.rejected_ops(),
            committed_keys: self.committed_keys(),
        }
    }
}

/// A point-in-time snapshot of store statistics.
///
/// Unlike [`StoreStats`], this is a simple struct that can be compared or
/// passed across threads without atomics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    /// Total number of committed-view reads.
    pub reads: u64,
    /// Total number of staged writes.
    pub staged_writes: u64,
    /// Total number of transactions started.
    pub transactions_started: u64,
    /// Total number of transactions committed.
    pub transactions_committed: u64,
    /// Total number of transactions rolled back.
    pub transactions_rolled_back: u64,
    /// Total number of refused operations.
    pub rejected_ops: u64,
    /// Number of keys in the committed state.
    pub committed_keys: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let stats = StoreStats::new();
        assert_eq!(stats.reads(), 0);
        assert_eq!(stats.staged_writes(), 0);
        assert_eq!(stats.transactions_committed(), 0);
    }

    #[test]
    fn record_operations() {
        let stats = StoreStats::new();

        stats.record_read();
        stats.record_read();
        assert_eq!(stats.reads(), 2);

        stats.record_staged_write();
        assert_eq!(stats.staged_writes(), 1);
    }

    #[test]
    fn record_transactions() {
        let stats = StoreStats::new();

        stats.record_transaction_start();
        stats.record_transaction_start();
        stats.record_transaction_commit();
        stats.record_transaction_rollback();

        assert_eq!(stats.transactions_started(), 2);
        assert_eq!(stats.transactions_committed(), 1);
        assert_eq!(stats.transactions_rolled_back(), 1);
    }

    #[test]
    fn committed_keys_gauge() {
        let stats = StoreStats::new();
        stats.set_committed_keys(3);
        assert_eq!(stats.committed_keys(), 3);

        stats.set_committed_keys(2);
        assert_eq!(stats.committed_keys(), 2);
    }

    #[test]
    fn snapshot() {
        let stats = StoreStats::new();
        stats.record_read();
        stats.record_staged_write();
        stats.record_rejected_op();

        let snap = stats.snapshot();
        assert_eq!(snap.reads, 1);
        assert_eq!(snap.staged_writes, 1);
        assert_eq!(snap.rejected_ops, 1);
    }

    #[test]
    fn concurrent_updates() {
        use std::sync::Arc;
        use std::thread;

        let stats = Arc::new(StoreStats::new());
        let mut handles = vec![];

        for _ in 0..10 {
            let s = Arc::clone(&stats);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    s.record_read();
                    s.record_staged_write();
                }
            }));
        }

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(stats.reads(), 1000);
        assert_eq!(stats.staged_writes(), 1000);
    }
}
