//! Core types for hero-core
//!
//! Defines the persisted entity and the request types around it:
//! - Hero records and their store-assigned identifiers
//! - Insert payloads handed to a record store
//! - Generate / list requests with their validation rules

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum characters in a submitted real name
pub const MAX_REAL_NAME_CHARS: usize = 100;

/// Maximum characters in a submitted keyword
pub const MAX_KEYWORD_CHARS: usize = 50;

/// Maximum characters in a generated superhero name
pub const MAX_HERO_NAME_CHARS: usize = 50;

/// Store-assigned record identifier
///
/// Unique and strictly increasing in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Raw integer value
    #[inline]
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted result of one generation request
///
/// Immutable once stored. Serialized with camelCase keys:
/// `{id, realName, keyword, superheroName, createdAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroRecord {
    /// Store-assigned identifier
    pub id: RecordId,
    /// Real name, exactly as submitted
    pub real_name: String,
    /// Keyword, exactly as submitted
    pub keyword: String,
    /// Generated name, fixed at creation
    pub superhero_name: String,
    /// Insertion timestamp, the primary sort key
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHeroRecord {
    /// Real name, exactly as submitted
    pub real_name: String,
    /// Keyword, exactly as submitted
    pub keyword: String,
    /// Generated name
    pub superhero_name: String,
    /// Explicit timestamp; `None` lets the store stamp the current time
    pub created_at: Option<DateTime<Utc>>,
}

impl NewHeroRecord {
    /// Create insert payload stamped by the store
    #[inline]
    #[must_use]
    pub fn new(
        real_name: impl Into<String>,
        keyword: impl Into<String>,
        superhero_name: impl Into<String>,
    ) -> Self {
        Self {
            real_name: real_name.into(),
            keyword: keyword.into(),
            superhero_name: superhero_name.into(),
            created_at: None,
        }
    }

    /// With explicit creation timestamp
    #[inline]
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Attach the store-assigned id and timestamp
    #[must_use]
    pub fn into_record(self, id: RecordId, now: DateTime<Utc>) -> HeroRecord {
        HeroRecord {
            id,
            real_name: self.real_name,
            keyword: self.keyword,
            superhero_name: self.superhero_name,
            created_at: self.created_at.unwrap_or(now),
        }
    }
}

/// Generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Real name (1–100 characters)
    pub real_name: String,
    /// Keyword (1–50 characters)
    pub keyword: String,
}

impl GenerateRequest {
    /// Create new generation request
    #[inline]
    #[must_use]
    pub fn new(real_name: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            real_name: real_name.into(),
            keyword: keyword.into(),
        }
    }

    /// Check field lengths
    ///
    /// Whitespace counts toward length and is never trimmed here; a value of
    /// only spaces is accepted as non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("realName", &self.real_name, MAX_REAL_NAME_CHARS)?;
        check_length("keyword", &self.keyword, MAX_KEYWORD_CHARS)
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual == 0 {
        return Err(ValidationError::EmptyField { field });
    }
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

/// Validated list size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Limit(usize);

impl Limit {
    /// Smallest accepted limit
    pub const MIN: usize = 1;
    /// Largest accepted limit
    pub const MAX: usize = 100;
    /// Limit used when the caller gives none
    pub const DEFAULT: Self = Self(10);

    /// Validate a caller-supplied limit
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        match usize::try_from(value) {
            Ok(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(ValidationError::InvalidLimit {
                value,
                min: Self::MIN,
                max: Self::MAX,
            }),
        }
    }

    /// Number of records requested
    #[inline]
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// List request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    /// Requested size; absent means [`Limit::DEFAULT`]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ListRequest {
    /// Request with explicit limit
    #[inline]
    #[must_use]
    pub fn with_limit(limit: i64) -> Self {
        Self { limit: Some(limit) }
    }

    /// Resolve to a validated limit
    pub fn limit(&self) -> Result<Limit, ValidationError> {
        self.limit.map_or(Ok(Limit::DEFAULT), Limit::new)
    }
}
