//! # File Operations Service
//!
//! A thin gateway over an abstract file provider, for file-manager UIs.
//!
//! ## Philosophy
//!
//! - **The provider is the boundary**: transport, retry, and storage live
//!   behind the [`FileProvider`] trait, never in this crate
//! - **One message per failure**: every error surfaces as a single
//!   human-readable string, either the provider's own or a fixed fallback
//! - **No silent calls**: every operation leaves a structured record in the
//!   gateway's operation log
//! - **Typed responses**: listings, details, and content are serde-typed,
//!   not loose maps
//!
//! ## Example
//!
//! ```ignore
//! use services_file_ops::{FileGateway, FileProvider};
//!
//! let mut gateway = FileGateway::new(provider);
//!
//! let listing = gateway.list_files("/docs")?;
//! let content = gateway.open_file("/docs/readme.md")?;
//! gateway.delete_file("/docs/stale.tmp")?;
//! ```

pub mod gateway;
pub mod log;
pub mod mime;
pub mod operations;
pub mod types;

pub use gateway::{DownloadPayload, FileGateway};
pub use log::{FileOp, OperationLog, OperationRecord, Outcome, RequestId};
pub use operations::{FileProvider, OperationError, ProviderError};
pub use types::{DeleteAck, FileContent, FileDetails, FileEntry, FileListing};
