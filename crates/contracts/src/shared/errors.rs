use thiserror::Error;

/// Failures of the viewer's asynchronous operations.
///
/// `Clone` so that every caller joined on one in-flight load observes the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error("{0} is not available in this environment")]
    UnavailableCapability(&'static str),

    #[error("clipboard write rejected: {0}")]
    ClipboardDenied(String),

    #[error("failed to load bundling library: {0}")]
    DependencyLoadFailed(String),

    #[error("failed to build archive: {0}")]
    ArchiveConstructionFailed(String),

    #[error("failed to start download: {0}")]
    DownloadFailed(String),
}

impl ViewerError {
    /// Missing optional collaborators are skipped silently, never shown to the user.
    pub fn is_silent(&self) -> bool {
        matches!(self, ViewerError::UnavailableCapability(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_unavailable_capability_is_silent() {
        assert!(ViewerError::UnavailableCapability("fullscreen").is_silent());
        assert!(!ViewerError::ClipboardDenied("NotAllowedError".into()).is_silent());
        assert!(!ViewerError::DependencyLoadFailed("404".into()).is_silent());
    }

    #[test]
    fn test_display_includes_detail() {
        let err = ViewerError::ArchiveConstructionFailed("entry too large".into());
        assert_eq!(err.to_string(), "failed to build archive: entry too large");
    }
}
