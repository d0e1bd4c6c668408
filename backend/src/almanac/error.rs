//! Errors raised while talking to the almanac service.

/// Result alias for almanac operations.
pub type AlmanacResult<T> = Result<T, AlmanacError>;

#[derive(Debug, thiserror::Error)]
pub enum AlmanacError {
    /// Connection, DNS or timeout failure.
    #[error("almanac request failed: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("almanac service returned status {0}")]
    Status(u16),

    /// The body was not valid JSON.
    #[error("almanac response could not be decoded: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("almanac client setup failed: {0}")]
    Setup(String),
}

impl AlmanacError {
    /// Whether a retry could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            AlmanacError::Network(_) => true,
            AlmanacError::Status(code) => *code >= 500 || *code == 429,
            AlmanacError::Decode(_) | AlmanacError::Setup(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(
            AlmanacError::Status(503).to_string(),
            "almanac service returned status 503"
        );
    }

    #[test]
    fn test_transient_classification() {
        assert!(AlmanacError::Network("timeout".into()).is_transient());
        assert!(AlmanacError::Status(503).is_transient());
        assert!(AlmanacError::Status(429).is_transient());
        assert!(!AlmanacError::Status(404).is_transient());
        assert!(!AlmanacError::Decode("eof".into()).is_transient());
    }
}
