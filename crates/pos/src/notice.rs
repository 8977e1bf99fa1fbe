//! Flash notices with automatic expiry.
//!
//! Notices are the transient banners a surface flashes after an action.
//! They live for five seconds and are then swept; the sweep takes the clock
//! as an argument, so expiry is testable without waiting.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

/// How long a notice stays visible before it is swept, in seconds.
const DISMISS_AFTER_SECS: i64 = 5;

/// Severity of a flash notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A transient banner message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub posted_at: DateTime<Utc>,
}

impl Notice {
    /// Create a notice posted at the given instant.
    #[must_use]
    pub fn new(level: NoticeLevel, message: impl Into<String>, posted_at: DateTime<Utc>) -> Self {
        Self {
            level,
            message: message.into(),
            posted_at,
        }
    }

    /// Whether the notice has outlived its display window at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.posted_at >= TimeDelta::seconds(DISMISS_AFTER_SECS)
    }
}

/// Ordered queue of live notices.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            notices: Vec::new(),
        }
    }

    /// Append a notice.
    pub fn post(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Drop every notice older than the display window.
    pub fn sweep(&mut self, now: DateTime<Utc>) {
        self.notices.retain(|notice| !notice.is_expired(now));
    }

    /// The live notices, oldest first.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
