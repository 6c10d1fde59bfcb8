/// All errors that can be returned by a TrackerStore implementation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A partner with this name already exists. Partner names are unique.
    #[error("partner already exists: {name}")]
    PartnerExists { name: String },

    /// No partner row with the given id.
    #[error("partner not found: {id}")]
    PartnerNotFound { id: i64 },

    /// No activity row with the given id.
    #[error("activity not found: {id}")]
    ActivityNotFound { id: i64 },

    /// The archive's version field is missing or not one we can restore.
    #[error("unsupported archive version: {version}")]
    UnsupportedArchive { version: String },

    /// A backend-specific storage error (I/O, serialization, etc.).
    #[error("storage backend error: {0}")]
    Backend(String),
}
