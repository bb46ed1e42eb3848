//! SQLite record store behaviour.

use hero_core::{
    GenerateRequest, HeroService, HeroStore, Limit, ListRequest, NewHeroRecord, PersistenceError,
};
use hero_server::SqliteHeroStore;
use hero_test_utils::{new_record_at, seconds_after_base, seed_records, TEST_SEED};
use pretty_assertions::assert_eq;
use std::sync::Arc;

async fn memory_store() -> SqliteHeroStore {
    SqliteHeroStore::in_memory().await.unwrap()
}

#[tokio::test]
async fn empty_table_returns_nothing() {
    let store = memory_store().await;
    let records = store.query_recent(Limit::DEFAULT).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn insert_round_trips_through_query() {
    let store = memory_store().await;
    let inserted = store
        .insert(NewHeroRecord::new("  Peter   Parker  ", "  spider  ", "Spiter Man"))
        .await
        .unwrap();

    let listed = store.query_recent(Limit::DEFAULT).await.unwrap();
    assert_eq!(listed, vec![inserted.clone()]);
    assert_eq!(inserted.real_name, "  Peter   Parker  ");
    assert_eq!(inserted.keyword, "  spider  ");
}

#[tokio::test]
async fn ids_are_unique_and_increasing() {
    let store = memory_store().await;
    let records = seed_records(&store, "Hero ", 4).await;
    let ids: Vec<i64> = records.iter().map(|r| r.id.get()).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "{ids:?}");
}

#[tokio::test]
async fn newest_first_by_created_at() {
    let store = memory_store().await;
    for (name, offset) in [
        ("Captain Fireblaze", 1),
        ("The Mighty Frostguard", 2),
        ("Agent Stormstar", 0),
    ] {
        store
            .insert(new_record_at(name, seconds_after_base(offset)))
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
    assert_eq!(
        names,
        ["The Mighty Frostguard", "Captain Fireblaze", "Agent Stormstar"]
    );
}

#[tokio::test]
async fn subsecond_ordering_survives_storage() {
    let store = memory_store().await;
    let base = seconds_after_base(0);
    store
        .insert(new_record_at("later", base + chrono::Duration::milliseconds(500)))
        .await
        .unwrap();
    store.insert(new_record_at("earlier", base)).await.unwrap();

    let records = store.query_recent(Limit::DEFAULT).await.unwrap();
    assert_eq!(records[0].superhero_name, "later");
    assert_eq!(records[1].superhero_name, "earlier");
}

#[tokio::test]
async fn equal_timestamps_latest_insert_first() {
    let store = memory_store().await;
    for name in ["first", "second"] {
        store
            .insert(new_record_at(name, seconds_after_base(0)))
            .await
            .unwrap();
    }

    let records = store.query_recent(Limit::new(1).unwrap()).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].superhero_name, "second");
}

#[tokio::test]
async fn limit_caps_results() {
    let store = memory_store().await;
    seed_records(&store, "Superhero ", 15).await;

    let records = store.query_recent(Limit::DEFAULT).await.unwrap();
    assert_eq!(records.len(), 10);
    assert_eq!(records[0].superhero_name, "Superhero 14");
    assert_eq!(records[9].superhero_name, "Superhero 5");

    let all = store.query_recent(Limit::new(50).unwrap()).await.unwrap();
    assert_eq!(all.len(), 15);
}

#[tokio::test]
async fn closed_pool_is_unavailable() {
    let store = memory_store().await;
    store.close().await;

    let err = store
        .insert(NewHeroRecord::new("John", "fire", "Fire Man"))
        .await
        .unwrap_err();
    assert!(matches!(err, PersistenceError::Unavailable(_)), "{err:?}");

    let err = store.query_recent(Limit::DEFAULT).await.unwrap_err();
    assert!(matches!(err, PersistenceError::Unavailable(_)));
}

#[tokio::test]
async fn file_database_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("heroes.db").display());

    let created = {
        let store = Arc::new(SqliteHeroStore::connect(&url).await.unwrap());
        let service = HeroService::with_seed(store.clone(), TEST_SEED);
        let record = service
            .create(GenerateRequest::new("John Smith", "fire"))
            .await
            .unwrap();
        store.close().await;
        record
    };

    let reopened = Arc::new(SqliteHeroStore::connect(&url).await.unwrap());
    let service = HeroService::new(reopened);
    let listed = service.list(ListRequest::with_limit(1)).await.unwrap();
    assert_eq!(listed, vec![created]);
}
