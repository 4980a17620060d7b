use std::time::Duration;

/// Failure reported by a [`MovieStore`](crate::store::MovieStore).
///
/// The `Display` text is what callers see verbatim in error responses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A single-document lookup matched nothing.
    #[error("no documents in result")]
    NoDocuments,

    /// The store did not answer within the allotted time.
    #[error("store operation timed out after {after:?}")]
    Timeout { after: Duration },

    /// The backend rejected the operation or could not be reached.
    #[error("{0}")]
    Backend(String),

    /// A stored document could not be mapped onto a movie.
    #[error("failed to decode document: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}
