#![no_std]

//! # Notification Center Service
//!
//! An in-process registry for transient "toast" notifications with
//! deterministic auto-expiry.
//!
//! ## Philosophy
//!
//! - **An instance, not a global**: the center is explicitly constructed and
//!   explicitly passed around, so tests can create isolated instances
//! - **Deterministic**: time is a logical clock in milliseconds, advanced
//!   explicitly; no hidden threads, no wall clock
//! - **Counter ids**: ids are strictly increasing integers, assigned at
//!   insertion and never reused
//! - **Idempotent removal**: removing an absent id is a silent no-op, which
//!   makes late expirations harmless by construction
//! - **Testable**: the whole lifecycle runs under `cargo test` without
//!   sleeping
//!
//! ## Example
//!
//! ```
//! use services_notification::{NotificationCenter, NotificationKind, Toast};
//!
//! let mut center = NotificationCenter::new();
//!
//! let id = center.insert(Toast::success("File saved"));
//! assert_eq!(center.active().len(), 1);
//!
//! // Default lifetime is 5 seconds of logical time.
//! center.advance_time(5_000);
//! assert!(center.get(id).is_none());
//!
//! // Zero duration means "persist until manually removed".
//! let sticky = center.insert(Toast::error("Disk full").with_duration_ms(0));
//! center.advance_time(60_000);
//! assert_eq!(center.get(sticky).map(|n| n.kind), Some(NotificationKind::Error));
//! ```

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Default toast lifetime in milliseconds
pub const DEFAULT_DURATION_MS: u64 = 5_000;

/// Unique identifier for a notification
///
/// Ids are assigned by [`NotificationCenter::insert`] from a strictly
/// increasing counter and are never reused, even after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a NotificationId from a raw counter value
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notif:{}", self.0)
    }
}

/// Notification category
///
/// Ordered by severity so hosts can sort or filter mixed lists.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Informational message
    #[default]
    Info,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Info => write!(f, "INFO"),
            NotificationKind::Success => write!(f, "SUCCESS"),
            NotificationKind::Warning => write!(f, "WARNING"),
            NotificationKind::Error => write!(f, "ERROR"),
        }
    }
}

/// An insertion request for a toast notification
///
/// Only the title is required; everything else has a default: kind `Info`,
/// empty message, and a lifetime of [`DEFAULT_DURATION_MS`].
#[derive(Debug, Clone)]
pub struct Toast {
    kind: NotificationKind,
    title: String,
    message: String,
    duration_ms: u64,
}

impl Toast {
    /// Creates a toast with default kind, message, and duration
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::default(),
            title: title.into(),
            message: String::new(),
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    /// Creates a success toast
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title).with_kind(NotificationKind::Success)
    }

    /// Creates an error toast
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title).with_kind(NotificationKind::Error)
    }

    /// Creates a warning toast
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(title).with_kind(NotificationKind::Warning)
    }

    /// Creates an info toast
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title).with_kind(NotificationKind::Info)
    }

    /// Sets the kind
    pub fn with_kind(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the message body
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the lifetime in milliseconds; `0` disables auto-expiry
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// An active notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier
    pub id: NotificationId,
    /// Notification category
    pub kind: NotificationKind,
    /// Display title
    pub title: String,
    /// Optional body text (empty when unset)
    pub message: String,
    /// Lifetime in milliseconds; `0` means no auto-expiry
    pub duration_ms: u64,
}

/// A scheduled auto-removal
///
/// Cancelled eagerly by manual `remove`/`clear`; a survivor that fires after
/// its id is gone falls through to idempotent removal.
#[derive(Debug, Clone, Copy)]
struct PendingExpiry {
    deadline_ms: u64,
    id: NotificationId,
}

/// Notification center
///
/// Owns the ordered list of active notifications, the id counter, and the
/// schedule of pending auto-removals. Insertion order is display order.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    active: Vec<Notification>,
    pending: Vec<PendingExpiry>,
    next_id: u64,
    now_ms: u64,
}

impl NotificationCenter {
    /// Creates an empty notification center at logical time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a notification and returns its id
    ///
    /// The notification is appended to the end of the active list. If the
    /// toast has a non-zero duration, an auto-removal is scheduled for
    /// `now + duration_ms`; it fires no earlier than that deadline.
    pub fn insert(&mut self, toast: Toast) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId::from_raw(self.next_id);

        if toast.duration_ms > 0 {
            self.pending.push(PendingExpiry {
                deadline_ms: self.now_ms.saturating_add(toast.duration_ms),
                id,
            });
        }

        self.active.push(Notification {
            id,
            kind: toast.kind,
            title: toast.title,
            message: toast.message,
            duration_ms: toast.duration_ms,
        });

        id
    }

    /// Inserts a success toast with the default lifetime
    pub fn insert_success(&mut self, title: impl Into<String>) -> NotificationId {
        self.insert(Toast::success(title))
    }

    /// Inserts an error toast with the default lifetime
    pub fn insert_error(&mut self, title: impl Into<String>) -> NotificationId {
        self.insert(Toast::error(title))
    }

    /// Inserts a warning toast with the default lifetime
    pub fn insert_warning(&mut self, title: impl Into<String>) -> NotificationId {
        self.insert(Toast::warning(title))
    }

    /// Inserts an info toast with the default lifetime
    pub fn insert_info(&mut self, title: impl Into<String>) -> NotificationId {
        self.insert(Toast::info(title))
    }

    /// Inserts a success toast with a message body
    pub fn insert_success_with(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.insert(Toast::success(title).with_message(message))
    }

    /// Inserts an error toast with a message body
    pub fn insert_error_with(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.insert(Toast::error(title).with_message(message))
    }

    /// Inserts a warning toast with a message body
    pub fn insert_warning_with(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.insert(Toast::warning(title).with_message(message))
    }

    /// Inserts an info toast with a message body
    pub fn insert_info_with(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.insert(Toast::info(title).with_message(message))
    }

    /// Removes a notification by id
    ///
    /// Idempotent: an absent or already-removed id is a silent no-op. The
    /// relative order of the remaining notifications is undisturbed. Any
    /// pending auto-removal for the id is cancelled.
    pub fn remove(&mut self, id: NotificationId) {
        self.active.retain(|n| n.id != id);
        self.pending.retain(|p| p.id != id);
    }

    /// Removes all notifications unconditionally
    ///
    /// Also drops every pending auto-removal; the id counter is not reset.
    pub fn clear(&mut self) {
        self.active.clear();
        self.pending.clear();
    }

    /// Returns the active notifications in insertion order
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    /// Returns the active notification with the given id, if any
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|n| n.id == id)
    }

    /// Returns the number of active notifications
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Checks whether the active list is empty
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns the number of scheduled auto-removals
    pub fn pending_expirations(&self) -> usize {
        self.pending.len()
    }

    /// Returns the current logical time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Advances the logical clock, firing any auto-removals now due
    pub fn advance_time(&mut self, delta_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(delta_ms);
        self.expire_due();
    }

    /// Sets the logical clock, firing any auto-removals now due
    pub fn set_time(&mut self, time_ms: u64) {
        self.now_ms = time_ms;
        self.expire_due();
    }

    /// Fires every pending auto-removal whose deadline has been reached
    ///
    /// Firing order is deadline order for determinism. Each firing removes
    /// its id from the active list if still present; otherwise it is a no-op.
    fn expire_due(&mut self) {
        let now = self.now_ms;

        let mut due: Vec<PendingExpiry> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].deadline_ms <= now {
                due.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }

        due.sort_by_key(|p| (p.deadline_ms, p.id));
        for expiry in due {
            self.active.retain(|n| n.id != expiry.id);
        }
    }
}
