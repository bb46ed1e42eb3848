//! Hero service
//!
//! Ties validation, name generation and the record store together:
//! - `create`: validate → generate → insert
//! - `list`: validate limit → query recent
//!
//! Each call is an independent unit of work; the only shared state is the
//! store handle and the service's random source.

use crate::error::HeroError;
use crate::generator;
use crate::store::HeroStore;
use crate::types::{GenerateRequest, HeroRecord, ListRequest, NewHeroRecord};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Generation and listing over a record store
#[derive(Debug)]
pub struct HeroService<S: ?Sized> {
    /// Record store
    store: Arc<S>,
    /// Random source for name generation
    rng: Mutex<StdRng>,
}

impl<S: HeroStore + ?Sized> HeroService<S> {
    /// Create service with an entropy-seeded random source
    #[inline]
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Create service with a fixed seed (reproducible names)
    #[inline]
    #[must_use]
    pub fn with_seed(store: Arc<S>, seed: u64) -> Self {
        Self::with_rng(store, StdRng::seed_from_u64(seed))
    }

    /// Create service with an explicit random source
    #[inline]
    #[must_use]
    pub fn with_rng(store: Arc<S>, rng: StdRng) -> Self {
        Self {
            store,
            rng: Mutex::new(rng),
        }
    }

    /// Underlying record store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Generate, persist and return a new hero record
    ///
    /// Real name and keyword are stored verbatim; trimming only happens
    /// inside the generator.
    ///
    /// # Errors
    /// - `HeroError::Validation` if either field is empty or too long; the
    ///   store is not touched
    /// - `HeroError::Persistence` if the insert fails (no retry)
    pub async fn create(&self, request: GenerateRequest) -> Result<HeroRecord, HeroError> {
        request.validate()?;

        let superhero_name = {
            let mut rng = self.rng.lock();
            generator::generate(&mut *rng, &request.real_name, &request.keyword)
        };

        let record = self
            .store
            .insert(NewHeroRecord::new(
                request.real_name,
                request.keyword,
                superhero_name,
            ))
            .await?;

        tracing::info!(
            id = %record.id,
            superhero_name = %record.superhero_name,
            "Generated superhero name"
        );
        Ok(record)
    }

    /// Most recent records, newest first
    ///
    /// # Errors
    /// - `HeroError::Validation` if the limit is outside 1..=100
    /// - `HeroError::Persistence` if the read fails
    pub async fn list(&self, request: ListRequest) -> Result<Vec<HeroRecord>, HeroError> {
        let limit = request.limit()?;
        let records = self.store.query_recent(limit).await?;
        tracing::debug!(limit = limit.get(), returned = records.len(), "Listed superhero names");
        Ok(records)
    }
}
