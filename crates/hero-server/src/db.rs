//! SQLite-backed record store
//!
//! One table, `superhero_names`, created on connect. Timestamps are stored as
//! fixed-width RFC 3339 text (microsecond precision, `Z` suffix) so that the
//! textual `ORDER BY created_at` matches chronological order.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use hero_core::{HeroRecord, HeroStore, Limit, NewHeroRecord, PersistenceError, RecordId};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::str::FromStr;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS superhero_names (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    real_name TEXT NOT NULL,
    keyword TEXT NOT NULL,
    superhero_name TEXT NOT NULL,
    created_at TEXT NOT NULL
)";

const CREATE_RECENT_INDEX: &str = "CREATE INDEX IF NOT EXISTS superhero_names_recent \
    ON superhero_names (created_at DESC, id DESC)";

const INSERT_RECORD: &str = "INSERT INTO superhero_names \
    (real_name, keyword, superhero_name, created_at) VALUES (?, ?, ?, ?)";

const SELECT_RECENT: &str = "SELECT id, real_name, keyword, superhero_name, created_at \
    FROM superhero_names ORDER BY created_at DESC, id DESC LIMIT ?";

/// Record store over a SQLite connection pool
#[derive(Debug, Clone)]
pub struct SqliteHeroStore {
    pool: SqlitePool,
}

impl SqliteHeroStore {
    /// Connect to `url` and create the schema if missing
    ///
    /// # Errors
    /// - `PersistenceError::Unavailable` if the database cannot be opened
    pub async fn connect(url: &str) -> Result<Self, PersistenceError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| PersistenceError::Unavailable(e.to_string()))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(persistence_error)?;
        tracing::info!(url = %url, "Connected to SQLite record store");
        Self::from_pool(pool).await
    }

    /// Private in-memory database (single connection, never recycled)
    ///
    /// # Errors
    /// - `PersistenceError::Unavailable` if SQLite cannot be initialized
    pub async fn in_memory() -> Result<Self, PersistenceError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| PersistenceError::Unavailable(e.to_string()))?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(persistence_error)?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, creating the schema if missing
    ///
    /// # Errors
    /// - `PersistenceError::Rejected` if the schema statements fail
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, PersistenceError> {
        for statement in [CREATE_TABLE, CREATE_RECENT_INDEX] {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .map_err(persistence_error)?;
        }
        Ok(Self { pool })
    }

    /// Close all pooled connections
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait::async_trait]
impl HeroStore for SqliteHeroStore {
    async fn insert(&self, mut record: NewHeroRecord) -> Result<HeroRecord, PersistenceError> {
        // Stored precision is microseconds; the returned record must match what
        // a later read yields.
        let created_at = record.created_at.unwrap_or_else(Utc::now).trunc_subsecs(6);
        record.created_at = Some(created_at);

        let result = sqlx::query(INSERT_RECORD)
            .bind(&record.real_name)
            .bind(&record.keyword)
            .bind(&record.superhero_name)
            .bind(encode_timestamp(created_at))
            .execute(&self.pool)
            .await
            .map_err(persistence_error)?;

        let id = RecordId(result.last_insert_rowid());
        tracing::debug!(id = %id, "Inserted superhero name row");
        Ok(record.into_record(id, created_at))
    }

    async fn query_recent(&self, limit: Limit) -> Result<Vec<HeroRecord>, PersistenceError> {
        let limit = i64::try_from(limit.get())
            .map_err(|e| PersistenceError::Rejected(e.to_string()))?;
        let rows = sqlx::query(SELECT_RECENT)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(persistence_error)?;
        rows.iter().map(decode_record).collect()
    }
}

fn encode_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_record(row: &SqliteRow) -> Result<HeroRecord, PersistenceError> {
    let created_at: String = row.try_get("created_at").map_err(persistence_error)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| PersistenceError::Corrupt(format!("created_at {created_at:?}: {e}")))?
        .with_timezone(&Utc);

    Ok(HeroRecord {
        id: RecordId(row.try_get("id").map_err(persistence_error)?),
        real_name: row.try_get("real_name").map_err(persistence_error)?,
        keyword: row.try_get("keyword").map_err(persistence_error)?,
        superhero_name: row.try_get("superhero_name").map_err(persistence_error)?,
        created_at,
    })
}

/// Classify a sqlx failure
pub(crate) fn persistence_error(err: sqlx::Error) -> PersistenceError {
    match &err {
        sqlx::Error::Database(_) | sqlx::Error::Protocol(_) => {
            PersistenceError::Rejected(err.to_string())
        }
        sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::TypeNotFound { .. } => PersistenceError::Corrupt(err.to_string()),
        _ => PersistenceError::Unavailable(err.to_string()),
    }
}
