//! Error types for hero-core
//!
//! Two failure families reach callers:
//! - Validation failures, raised before any store access
//! - Persistence failures, surfaced as-is from the record store
//!
//! Neither is retried internally.

/// Main hero-core error type
#[derive(Debug, thiserror::Error)]
pub enum HeroError {
    /// Request rejected by input validation
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Record store failed or rejected the operation
    #[error("persistence failed: {0}")]
    Persistence(#[from] PersistenceError),
}

impl HeroError {
    /// Check if error came from input validation
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if error came from the record store
    #[inline]
    #[must_use]
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

/// Input validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required field was empty
    #[error("{field} is required")]
    EmptyField {
        /// Wire name of the field
        field: &'static str,
    },

    /// Field exceeded its character limit
    #[error("{field} too long: {actual} characters (max {max})")]
    TooLong {
        /// Wire name of the field
        field: &'static str,
        /// Maximum allowed characters
        max: usize,
        /// Submitted length in characters
        actual: usize,
    },

    /// List limit outside the accepted range
    #[error("limit must be between {min} and {max}, got {value}")]
    InvalidLimit {
        /// Submitted limit
        value: i64,
        /// Smallest accepted limit
        min: usize,
        /// Largest accepted limit
        max: usize,
    },
}

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    /// Store could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Store rejected the write or read (constraint violation, bad query)
    #[error("store rejected operation: {0}")]
    Rejected(String),

    /// Stored data could not be decoded into a record
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_error_display() {
        let err = HeroError::from(ValidationError::EmptyField { field: "realName" });
        assert_eq!(err.to_string(), "validation failed: realName is required");
    }

    #[test]
    fn hero_error_classification() {
        let validation = HeroError::from(ValidationError::InvalidLimit {
            value: 0,
            min: 1,
            max: 100,
        });
        assert!(validation.is_validation());
        assert!(!validation.is_persistence());

        let persistence = HeroError::from(PersistenceError::Unavailable("down".to_string()));
        assert!(persistence.is_persistence());
        assert!(!persistence.is_validation());
    }

    #[test]
    fn too_long_message_names_limits() {
        let err = ValidationError::TooLong {
            field: "keyword",
            max: 50,
            actual: 51,
        };
        assert_eq!(err.to_string(), "keyword too long: 51 characters (max 50)");
    }
}
