//! Error types and field validation helpers for the domain layer
//!
//! Validation bounds that the original attribute-driven framework checked on
//! assignment are enforced here, at construction or setter time, and surface
//! as typed `DomainError` values instead of framework exceptions.

use uuid::Uuid;

/// Error types that can occur in the domain and its persistence layer
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// A text field is outside its allowed character length
    #[error("{field} must be {min}-{max} characters, got {actual}")]
    TextLength { field: &'static str, min: usize, max: usize, actual: usize },

    /// A numeric field is outside its allowed range
    #[error("{field} must be between {min} and {max}, got {actual}")]
    OutOfRange { field: &'static str, min: i64, max: i64, actual: i64 },

    /// An aggregate with this identifier is already registered
    #[error("car {id} already exists in the repository")]
    Duplicate { id: Uuid },

    /// No aggregate with this identifier is registered
    #[error("car {id} not found in the repository")]
    NotFound { id: Uuid },

    /// The empty sentinel was used where a real aggregate is required
    #[error("the empty car sentinel cannot be persisted")]
    EmptySentinel,

    /// Store file could not be read, written, or migrated
    #[error("Store error: {message}")]
    Store { message: String },

    /// Fixture file could not be loaded or built
    #[error("Fixture error: {message}")]
    Fixture { message: String },

    /// Underlying filesystem failure
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl DomainError {
    /// Create a store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store { message: message.into() }
    }

    /// Create a fixture error
    pub fn fixture(message: impl Into<String>) -> Self {
        Self::Fixture { message: message.into() }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Validate that a text field is within `min..=max` characters
pub(crate) fn check_text(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> DomainResult<()> {
    let actual = value.chars().count();
    if actual < min || actual > max {
        return Err(DomainError::TextLength { field, min, max, actual });
    }
    Ok(())
}

/// Validate that a numeric field is within `min..=max`
pub(crate) fn check_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> DomainResult<()> {
    if value < min || value > max {
        return Err(DomainError::OutOfRange { field, min, max, actual: value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_text_bounds() {
        assert!(check_text("Name", "a", 1, 100).is_ok());
        assert!(check_text("Name", &"x".repeat(100), 1, 100).is_ok());
        assert!(check_text("Name", "", 1, 100).is_err());
        assert!(check_text("Name", &"x".repeat(101), 1, 100).is_err());
    }

    #[test]
    fn test_check_text_counts_chars_not_bytes() {
        // four characters, twelve bytes
        assert!(check_text("Name", "車輪色名", 1, 4).is_ok());
    }

    #[test]
    fn test_check_range_bounds() {
        assert!(check_range("ColorNum", 1, 1, 100).is_ok());
        assert!(check_range("ColorNum", 100, 1, 100).is_ok());
        assert!(check_range("ColorNum", 0, 1, 100).is_err());
        assert!(check_range("ColorNum", 101, 1, 100).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = check_text("Name", "", 1, 100).unwrap_err();
        assert_eq!(err.to_string(), "Name must be 1-100 characters, got 0");

        let err = check_range("ColorNum", 0, 1, 100).unwrap_err();
        assert_eq!(err.to_string(), "ColorNum must be between 1 and 100, got 0");
    }
}
