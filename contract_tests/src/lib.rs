//! # Service Contract Tests
//!
//! "Golden" tests for the file-manager service contracts, so they don't
//! drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: wire shapes and fixed messages are written
//!   out as literals, not derived from the code under test
//! - **Testability first**: contract tests fail when field names, fallback
//!   strings, or lifecycle semantics change
//!
//! ## Structure
//!
//! Each service has a module verifying:
//! - JSON wire shapes (field names, camelCase, optional-field omission)
//! - Fixed user-facing strings (fallback error messages, route prefixes)
//! - The documented lifecycle scenarios

pub mod file_ops;
pub mod navigation;
pub mod notification;

/// Common fixtures for contract validation
pub mod test_helpers {
    use services_file_ops::FileEntry;

    /// A representative file entry with all optional fields populated
    pub fn sample_entry() -> FileEntry {
        FileEntry {
            name: "notes.md".to_string(),
            path: "/docs/notes.md".to_string(),
            is_dir: false,
            file_type: "file".to_string(),
            size: 512,
            mod_time_ms: 1_700_000_000_000,
            permissions: "-rw-r--r--".to_string(),
            extension: Some("md".to_string()),
            mime_type: Some("text/markdown".to_string()),
        }
    }

    /// The same entry with the optional fields absent
    pub fn bare_entry() -> FileEntry {
        FileEntry {
            extension: None,
            mime_type: None,
            ..sample_entry()
        }
    }
}
