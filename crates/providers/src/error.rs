//! Error types for provider calls.
//!
//! A missing record is not an error; providers report it as `Ok(None)`.
//! These variants cover failures that should abort the current request.
//! Loading the local snapshots fails earlier, with `records::RecordError`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider could not answer (transport, upstream outage, ...)
    #[error("{provider} provider unavailable: {reason}")]
    Unavailable { provider: String, reason: String },
}

impl ProviderError {
    pub fn unavailable(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            provider: provider.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message() {
        let err = ProviderError::unavailable("Omdb", "timeout");
        assert_eq!(err.to_string(), "Omdb provider unavailable: timeout");
    }
}
