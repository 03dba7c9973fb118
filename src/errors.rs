//! Error types for sentic_polarity
//!
//! Scoring calls are total and never surface these; they come out of
//! engine construction, configuration validation and lexicon loading.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SenticError>;

/// Main error type for sentic_polarity
#[derive(Error, Debug, Clone)]
pub enum SenticError {
    /// The lexicon has no concepts; the engine cannot be built on it
    #[error("Empty lexicon: {message}")]
    EmptyLexicon { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A lexicon record has the wrong shape
    #[error("Malformed entry for concept '{concept}': {message}")]
    MalformedEntry { concept: String, message: String },

    /// The NLP collaborator could not produce a parse for a span
    #[error("Parse unavailable: {message}")]
    ParseUnavailable { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Reading a lexicon or trigger file failed
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl SenticError {
    /// Create an empty lexicon error
    pub fn empty_lexicon(message: impl Into<String>) -> Self {
        Self::EmptyLexicon {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a malformed entry error
    pub fn malformed_entry(concept: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedEntry {
            concept: concept.into(),
            message: message.into(),
        }
    }

    /// Create a parse unavailable error
    pub fn parse_unavailable(message: impl Into<String>) -> Self {
        Self::ParseUnavailable {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Whether this error is a configuration fault raised at construction
    pub fn is_configuration_fault(&self) -> bool {
        matches!(
            self,
            Self::EmptyLexicon { .. } | Self::InvalidConfig { .. } | Self::MalformedEntry { .. }
        )
    }
}

impl From<serde_json::Error> for SenticError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SenticError::empty_lexicon("no concepts loaded");
        assert!(err.to_string().contains("Empty lexicon"));
        assert!(err.to_string().contains("no concepts loaded"));

        let err = SenticError::malformed_entry("a_lot", "expected 8 fields");
        assert!(err.to_string().contains("'a_lot'"));
        assert!(err.to_string().contains("expected 8 fields"));
    }

    #[test]
    fn test_is_configuration_fault() {
        assert!(SenticError::empty_lexicon("x").is_configuration_fault());
        assert!(SenticError::invalid_config("x").is_configuration_fault());
        assert!(!SenticError::parse_unavailable("x").is_configuration_fault());
        assert!(!SenticError::io("x").is_configuration_fault());
    }

    #[test]
    fn test_from_serde_json() {
        let err: SenticError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, SenticError::Serialization { .. }));
    }
}
