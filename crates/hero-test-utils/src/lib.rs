//! Testing utilities for the hero workspace
//!
//! Shared fixtures: seeded services, fixed timestamps and record seeding.

#![allow(missing_docs)]

use chrono::{DateTime, Duration, Utc};
use hero_core::{HeroRecord, HeroService, HeroStore, MemoryHeroStore, NewHeroRecord};
use std::sync::Arc;

/// Seed used by fixtures that want reproducible names
pub const TEST_SEED: u64 = 42;

pub fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn seconds_after_base(seconds: i64) -> DateTime<Utc> {
    base_time() + Duration::seconds(seconds)
}

pub fn setup_memory_service() -> HeroService<MemoryHeroStore> {
    HeroService::with_seed(Arc::new(MemoryHeroStore::new()), TEST_SEED)
}

pub fn new_record_at(superhero_name: &str, created_at: DateTime<Utc>) -> NewHeroRecord {
    NewHeroRecord::new(
        format!("Real {superhero_name}"),
        "keyword",
        superhero_name,
    )
    .with_created_at(created_at)
}

/// Insert `count` records named `{prefix}{i}`, one second apart, oldest first
pub async fn seed_records<S: HeroStore>(store: &S, prefix: &str, count: usize) -> Vec<HeroRecord> {
    let mut out = Vec::with_capacity(count);
    for i in 0..i64::try_from(count).unwrap() {
        let name = format!("{prefix}{i}");
        let record = store
            .insert(new_record_at(&name, seconds_after_base(i)))
            .await
            .unwrap();
        out.push(record);
    }
    out
}
