//! Structured operation log
//!
//! Every gateway call leaves one record here, correlated by a request id.
//! This is bookkeeping for inspection and tests; it never influences
//! operation results.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use uuid::Uuid;

/// Maximum number of records retained
const MAX_LOG_HISTORY: usize = 100;

/// Correlation id for a single gateway call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Creates a new random request ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a RequestId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req:{}", self.0)
    }
}

/// The operation a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOp {
    /// Directory listing
    List,
    /// Metadata lookup
    Details,
    /// Content read
    Open,
    /// Deletion
    Delete,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOp::List => write!(f, "list"),
            FileOp::Details => write!(f, "details"),
            FileOp::Open => write!(f, "open"),
            FileOp::Delete => write!(f, "delete"),
        }
    }
}

/// How a call ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The call succeeded
    Ok,
    /// The call failed with the given surfaced message
    Failed(String),
}

impl Outcome {
    /// Checks whether the outcome is a success
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok)
    }
}

/// One logged gateway call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    /// Correlation id
    pub request_id: RequestId,
    /// The operation performed
    pub operation: FileOp,
    /// The path the operation was called with
    pub path: String,
    /// How the call ended
    pub outcome: Outcome,
}

impl OperationRecord {
    /// Creates a record with a fresh request id
    pub fn new(operation: FileOp, path: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            request_id: RequestId::new(),
            operation,
            path: path.into(),
            outcome,
        }
    }
}

/// Bounded log of gateway calls
#[derive(Debug, Default)]
pub struct OperationLog {
    records: VecDeque<OperationRecord>,
}

impl OperationLog {
    /// Creates an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, dropping the oldest beyond the history cap
    pub fn record(&mut self, record: OperationRecord) {
        self.records.push_back(record);
        while self.records.len() > MAX_LOG_HISTORY {
            self.records.pop_front();
        }
    }

    /// Returns the most recent records, newest first
    pub fn recent(&self, limit: usize) -> Vec<&OperationRecord> {
        self.records.iter().rev().take(limit).collect()
    }

    /// Returns the number of retained records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
