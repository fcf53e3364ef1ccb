//! Error Types

use thiserror::Error;

/// Result type alias for NovaBots operations
pub type Result<T> = std::result::Result<T, NovaError>;

/// NovaBots error types
#[derive(Error, Debug)]
pub enum NovaError {
    /// Window, document or body missing from the host
    #[error("Host unavailable: {0}")]
    HostUnavailable(String),

    /// Overlay surface could not be created or drawn to
    #[error("Surface error: {0}")]
    Surface(String),

    /// Resize listener could not be registered
    #[error("Listener error: {0}")]
    Listener(String),

    /// Frame request rejected by the host
    #[error("Scheduler error: {0}")]
    Scheduler(String),

    /// Invalid effect configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bot catalog could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),
}

impl NovaError {
    /// Whether the error comes from the host environment rather than our own inputs
    pub const fn is_host_failure(&self) -> bool {
        matches!(
            self,
            Self::HostUnavailable(_) | Self::Surface(_) | Self::Listener(_) | Self::Scheduler(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_failure_classification() {
        assert!(NovaError::HostUnavailable("no window".into()).is_host_failure());
        assert!(NovaError::Scheduler("raf".into()).is_host_failure());
        assert!(!NovaError::Config("particle_count".into()).is_host_failure());
    }

    #[test]
    fn test_catalog_error_from_json() {
        let err: NovaError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(err.to_string().starts_with("Catalog error"));
    }
}
