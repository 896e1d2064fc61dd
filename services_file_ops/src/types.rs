//! Response models for file operations
//!
//! These are the typed payloads a provider returns. Field names serialize in
//! camelCase to match the JSON contract consumed by the presentation layer.

use serde::{Deserialize, Serialize};

/// A single entry in a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Entry name without any path
    pub name: String,
    /// Full path of the entry
    pub path: String,
    /// Whether the entry is a directory
    pub is_dir: bool,
    /// Coarse classification, e.g. "file" or "directory"
    pub file_type: String,
    /// Size in bytes
    pub size: u64,
    /// Last modification time in milliseconds since the epoch
    pub mod_time_ms: u64,
    /// Permission string, e.g. "-rw-r--r--"
    pub permissions: String,
    /// File extension without the dot, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// MIME type, if the provider determined one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// A directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListing {
    /// The listed path
    pub path: String,
    /// Entries in the directory
    pub items: Vec<FileEntry>,
    /// Number of entries
    pub total_items: usize,
    /// Sum of entry sizes in bytes
    pub total_size: u64,
}

impl FileListing {
    /// Builds a listing from its entries, computing the totals
    pub fn from_items(path: impl Into<String>, items: Vec<FileEntry>) -> Self {
        let total_items = items.len();
        let total_size = items.iter().map(|e| e.size).sum();
        Self {
            path: path.into(),
            items,
            total_items,
            total_size,
        }
    }
}

/// Metadata about a single file or directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDetails {
    /// Entry name without any path
    pub name: String,
    /// Path as requested
    pub path: String,
    /// Fully resolved path
    pub full_path: String,
    /// Whether the entry is a directory
    pub is_dir: bool,
    /// Size in bytes
    pub size: u64,
    /// Last modification time in milliseconds since the epoch
    pub mod_time_ms: u64,
    /// MIME type
    pub mime_type: String,
    /// Permission string
    pub permissions: String,
    /// File extension without the dot, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// The content of an opened file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContent {
    /// File name without any path
    pub name: String,
    /// Full path of the file
    pub path: String,
    /// File content
    pub content: String,
    /// Content size in bytes
    pub size: u64,
    /// MIME type
    pub mime_type: String,
    /// Content encoding, e.g. "utf-8" or "base64"
    pub encoding: String,
}

/// Acknowledgement of a completed deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    /// The deleted path
    pub path: String,
}
