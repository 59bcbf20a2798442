//! Error types for port operations.

/// Document store errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Document not found - includes document type and ID for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Storage operation failed - includes operation name for tracing.
    #[error("Storage error in {operation}: {message}")]
    Storage {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a Storage error with operation context.
    pub fn storage(operation: &'static str, message: impl ToString) -> Self {
        Self::Storage {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_document() {
        let err = RepoError::not_found("Spellcasting entry", "abc123");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Spellcasting entry not found: abc123");
    }

    #[test]
    fn storage_error_carries_operation() {
        let err = RepoError::storage("set_loadout", "disk full");
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Storage error in set_loadout: disk full");
    }
}
