//! File operations gateway
//!
//! Forwards each operation to the provider exactly once (no retry, no local
//! recovery) and normalizes failures to one human-readable message.

use crate::log::{FileOp, OperationLog, OperationRecord, Outcome};
use crate::operations::{FileProvider, OperationError, ProviderError};
use crate::types::{DeleteAck, FileContent, FileDetails, FileEntry, FileListing};

/// Fallback failure messages, used when the provider gives none
const FALLBACK_LIST: &str = "Failed to list files";
const FALLBACK_DETAILS: &str = "Failed to get file details";
const FALLBACK_OPEN: &str = "Failed to open file";
const FALLBACK_DELETE: &str = "Failed to delete file";

/// MIME type assumed for downloads of entries without one
const DOWNLOAD_FALLBACK_MIME: &str = "text/plain";

/// Everything needed to hand a file to the user agent for saving
///
/// The DOM side (object URLs, anchor clicks) is the host's concern; this
/// payload stops at name, type, and bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPayload {
    /// Suggested file name
    pub file_name: String,
    /// MIME type for the blob
    pub mime_type: String,
    /// File content
    pub bytes: Vec<u8>,
}

/// Gateway over a [`FileProvider`]
///
/// Owns the provider and an operation log; all file traffic of a UI session
/// goes through one gateway instance.
#[derive(Debug)]
pub struct FileGateway<P> {
    provider: P,
    log: OperationLog,
}

impl<P: FileProvider> FileGateway<P> {
    /// Creates a gateway over the given provider
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            log: OperationLog::new(),
        }
    }

    /// Lists the entries at a path
    pub fn list_files(&mut self, path: &str) -> Result<FileListing, OperationError> {
        let result = self.provider.list_files(path);
        self.finish(FileOp::List, path, FALLBACK_LIST, result)
    }

    /// Returns metadata for a single entry
    pub fn file_details(&mut self, path: &str) -> Result<FileDetails, OperationError> {
        let result = self.provider.file_details(path);
        self.finish(FileOp::Details, path, FALLBACK_DETAILS, result)
    }

    /// Reads the content of a file
    pub fn open_file(&mut self, path: &str) -> Result<FileContent, OperationError> {
        let result = self.provider.open_file(path);
        self.finish(FileOp::Open, path, FALLBACK_OPEN, result)
    }

    /// Deletes a file or directory
    pub fn delete_file(&mut self, path: &str) -> Result<DeleteAck, OperationError> {
        let result = self.provider.delete_file(path);
        self.finish(FileOp::Delete, path, FALLBACK_DELETE, result)
    }

    /// Opens an entry and packages it for download
    ///
    /// The MIME type comes from the entry when present, otherwise
    /// `text/plain`.
    pub fn prepare_download(&mut self, entry: &FileEntry) -> Result<DownloadPayload, OperationError> {
        let content = self.open_file(&entry.path)?;

        let mime_type = entry
            .mime_type
            .clone()
            .unwrap_or_else(|| DOWNLOAD_FALLBACK_MIME.to_string());

        Ok(DownloadPayload {
            file_name: entry.name.clone(),
            mime_type,
            bytes: content.content.into_bytes(),
        })
    }

    /// Returns the operation log
    pub fn log(&self) -> &OperationLog {
        &self.log
    }

    /// Returns the wrapped provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Normalizes the provider result and records the call
    fn finish<T>(
        &mut self,
        op: FileOp,
        path: &str,
        fallback: &str,
        result: Result<T, ProviderError>,
    ) -> Result<T, OperationError> {
        let result = result.map_err(|err| match err {
            ProviderError::Service(message) => OperationError::Service(message),
            ProviderError::Unavailable => OperationError::Service(fallback.to_string()),
        });

        let outcome = match &result {
            Ok(_) => Outcome::Ok,
            Err(err) => Outcome::Failed(err.message().to_string()),
        };
        self.log.record(OperationRecord::new(op, path, outcome));

        result
    }
}
