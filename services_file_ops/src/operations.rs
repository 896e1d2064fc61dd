//! The provider contract and error taxonomy
//!
//! A [`FileProvider`] is the opaque downstream service (HTTP backend, local
//! filesystem, in-memory fixture). The gateway never looks past this trait.

use crate::types::{DeleteAck, FileContent, FileDetails, FileEntry, FileListing};
use thiserror::Error;

/// Failure reported by a downstream provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider supplied a human-readable failure message
    #[error("{0}")]
    Service(String),

    /// The provider failed without a usable message
    #[error("provider unavailable")]
    Unavailable,
}

/// Failure surfaced to gateway callers
///
/// Exactly one human-readable message per failure: the provider's own when it
/// gave one, otherwise a fixed per-operation fallback. No codes, no partial
/// results, no retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// The downstream service failed
    #[error("{0}")]
    Service(String),
}

impl OperationError {
    /// Returns the human-readable failure message
    pub fn message(&self) -> &str {
        match self {
            OperationError::Service(message) => message,
        }
    }
}

/// File provider contract
///
/// Implementations are request/response: each call either returns a typed
/// payload or fails with a [`ProviderError`]. Paths are forwarded verbatim.
pub trait FileProvider {
    /// Lists the entries at a path
    fn list_files(&self, path: &str) -> Result<FileListing, ProviderError>;

    /// Returns metadata for a single entry
    fn file_details(&self, path: &str) -> Result<FileDetails, ProviderError>;

    /// Reads the content of a file
    fn open_file(&self, path: &str) -> Result<FileContent, ProviderError>;

    /// Deletes a file or directory
    fn delete_file(&mut self, path: &str) -> Result<DeleteAck, ProviderError>;
}

/// Builds the details payload for an entry the provider already resolved
///
/// Convenience for providers that assemble [`FileDetails`] from a listing
/// entry, e.g. in-memory fixtures.
pub fn details_for_entry(entry: &FileEntry, full_path: impl Into<String>) -> FileDetails {
    FileDetails {
        name: entry.name.clone(),
        path: entry.path.clone(),
        full_path: full_path.into(),
        is_dir: entry.is_dir,
        size: entry.size,
        mod_time_ms: entry.mod_time_ms,
        mime_type: entry
            .mime_type
            .clone()
            .unwrap_or_else(|| crate::mime::FALLBACK_MIME.to_string()),
        permissions: entry.permissions.clone(),
        extension: entry.extension.clone(),
    }
}
