//! Record store contract and in-memory implementation
//!
//! Stores are append-only: records are inserted once and read back in
//! recency order. There is no update or delete.

use crate::error::PersistenceError;
use crate::types::{HeroRecord, Limit, NewHeroRecord, RecordId};
use chrono::Utc;
use parking_lot::Mutex;
use std::cmp::Ordering;

/// Durable storage for hero records
///
/// # Ordering
/// `query_recent` returns records by `created_at` descending; equal
/// timestamps are ordered by id descending, so the latest insert wins.
#[async_trait::async_trait]
pub trait HeroStore: Send + Sync {
    /// Persist a new record and return it with its assigned id and timestamp
    ///
    /// # Errors
    /// - `PersistenceError::Unavailable` if the store cannot be reached
    /// - `PersistenceError::Rejected` if the write is refused
    async fn insert(&self, record: NewHeroRecord) -> Result<HeroRecord, PersistenceError>;

    /// Read up to `limit` records, newest first
    ///
    /// # Errors
    /// - `PersistenceError::Unavailable` if the store cannot be reached
    async fn query_recent(&self, limit: Limit) -> Result<Vec<HeroRecord>, PersistenceError>;
}

/// Newest-first comparison shared by store implementations
#[must_use]
pub fn newest_first(a: &HeroRecord, b: &HeroRecord) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

/// In-process record store
///
/// Ids start at 1 and increase by one per insert.
#[derive(Debug, Default)]
pub struct MemoryHeroStore {
    inner: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    records: Vec<HeroRecord>,
    last_id: i64,
}

impl MemoryHeroStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    /// Check if store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().records.is_empty()
    }

    /// Snapshot of all records in insertion order
    #[must_use]
    pub fn records(&self) -> Vec<HeroRecord> {
        self.inner.lock().records.clone()
    }
}

#[async_trait::async_trait]
impl HeroStore for MemoryHeroStore {
    async fn insert(&self, record: NewHeroRecord) -> Result<HeroRecord, PersistenceError> {
        let mut state = self.inner.lock();
        state.last_id += 1;
        let stored = record.into_record(RecordId(state.last_id), Utc::now());
        state.records.push(stored.clone());
        tracing::debug!(id = %stored.id, "stored hero record in memory");
        Ok(stored)
    }

    async fn query_recent(&self, limit: Limit) -> Result<Vec<HeroRecord>, PersistenceError> {
        let mut records = self.records();
        records.sort_by(newest_first);
        records.truncate(limit.get());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration};

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = MemoryHeroStore::new();
        let a = store
            .insert(NewHeroRecord::new("A", "a", "Captain A"))
            .await
            .unwrap();
        let b = store
            .insert(NewHeroRecord::new("B", "b", "Captain B"))
            .await
            .unwrap();

        assert_eq!(a.id, RecordId(1));
        assert_eq!(b.id, RecordId(2));
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn query_recent_empty() {
        let store = MemoryHeroStore::new();
        let records = store.query_recent(Limit::DEFAULT).await.unwrap();
        assert!(records.is_empty());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn query_recent_orders_by_timestamp() {
        let store = MemoryHeroStore::new();
        let base = at("2024-01-01T00:00:00Z");
        for (name, offset) in [("Fireblaze", 1), ("Frostguard", 2), ("Stormstar", 0)] {
            store
                .insert(
                    NewHeroRecord::new("x", "y", name)
                        .with_created_at(base + Duration::seconds(offset)),
                )
                .await
                .unwrap();
        }

        let names: Vec<_> = store
            .query_recent(Limit::DEFAULT)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.superhero_name)
            .collect();
        assert_eq!(names, ["Frostguard", "Fireblaze", "Stormstar"]);
    }

    #[tokio::test]
    async fn equal_timestamps_prefer_latest_insert() {
        let store = MemoryHeroStore::new();
        let ts = at("2024-01-01T00:00:00Z");
        for name in ["first", "second", "third"] {
            store
                .insert(NewHeroRecord::new("x", "y", name).with_created_at(ts))
                .await
                .unwrap();
        }

        let records = store.query_recent(Limit::new(2).unwrap()).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].superhero_name, "third");
        assert_eq!(records[1].superhero_name, "second");
    }
}
