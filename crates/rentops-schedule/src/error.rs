use thiserror::Error;

/// Errors raised while turning an event into occurrences.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// One or more validation checks failed. Carries every message so the
    /// caller can show them together.
    #[error("Invalid event configuration: {}", .0.join("; "))]
    InvalidEventConfiguration(Vec<String>),

    #[error("Unsupported event type: {0}")]
    UnsupportedEventType(String),
}

impl GenerationError {
    /// Returns the human-readable messages carried by this error.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::InvalidEventConfiguration(errors) => errors.clone(),
            Self::UnsupportedEventType(_) => vec![self.to_string()],
        }
    }
}

pub type GenerationResult<T> = std::result::Result<T, GenerationError>;
