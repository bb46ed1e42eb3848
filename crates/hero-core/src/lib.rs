//! Hero Core - superhero name generation and record keeping
//!
//! Provides:
//! - A randomized name generator with six composition strategies
//! - The hero record entity and its request/validation types
//! - The append-only [`HeroStore`] contract with an in-memory implementation
//! - [`HeroService`], which validates, generates and persists
//!
//! # Example
//!
//! ```rust
//! use hero_core::{GenerateRequest, HeroService, ListRequest, MemoryHeroStore};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), hero_core::HeroError> {
//! let service = HeroService::with_seed(Arc::new(MemoryHeroStore::new()), 42);
//!
//! let record = service.create(GenerateRequest::new("John Smith", "fire")).await?;
//! println!("#{} {}", record.id, record.superhero_name);
//!
//! let recent = service.list(ListRequest::default()).await?;
//! assert_eq!(recent[0], record);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod generator;
pub mod service;
pub mod store;
pub mod types;
pub mod vocabulary;

// Re-exports for convenience
pub use error::{HeroError, PersistenceError, ValidationError};
pub use generator::{blend, generate, NameParts, Strategy};
pub use service::HeroService;
pub use store::{newest_first, HeroStore, MemoryHeroStore};
pub use types::{
    GenerateRequest, HeroRecord, Limit, ListRequest, NewHeroRecord, RecordId,
    MAX_HERO_NAME_CHARS, MAX_KEYWORD_CHARS, MAX_REAL_NAME_CHARS,
};
pub use vocabulary::{PREFIXES, SUFFIXES};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with hero-core
    pub use crate::{
        GenerateRequest, HeroError, HeroRecord, HeroService, HeroStore, Limit, ListRequest,
        MemoryHeroStore,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
