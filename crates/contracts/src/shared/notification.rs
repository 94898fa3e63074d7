//! Transient toast messages.
//!
//! A notification walks through `Entering → Shown → Leaving` and is removed
//! afterwards. How long each phase lasts comes from `NotificationTimings`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub Uuid);

impl NotificationId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Info,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastPhase {
    /// Inserted, waiting for the entrance animation to start.
    Entering,
    Shown,
    /// Exit animation running; removed once it ends.
    Leaving,
}

impl ToastPhase {
    /// Next phase, `None` when the toast should be removed.
    pub fn next(self) -> Option<ToastPhase> {
        match self {
            ToastPhase::Entering => Some(ToastPhase::Shown),
            ToastPhase::Shown => Some(ToastPhase::Leaving),
            ToastPhase::Leaving => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, ToastPhase::Shown)
    }
}

/// Timer configuration, all values in milliseconds.
///
/// `hide_after_ms` is measured from creation, like the show delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTimings {
    pub show_delay_ms: u32,
    pub hide_after_ms: u32,
    pub exit_ms: u32,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            show_delay_ms: 10,
            hide_after_ms: 3000,
            exit_ms: 300,
        }
    }
}

impl NotificationTimings {
    /// Time spent in `phase` before advancing.
    pub fn dwell_ms(&self, phase: ToastPhase) -> u32 {
        match phase {
            ToastPhase::Entering => self.show_delay_ms,
            ToastPhase::Shown => self.hide_after_ms.saturating_sub(self.show_delay_ms),
            ToastPhase::Leaving => self.exit_ms,
        }
    }

    /// Upper bound on how long a notification stays in the list.
    pub fn total_lifetime_ms(&self) -> u32 {
        self.hide_after_ms.max(self.show_delay_ms).saturating_add(self.exit_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub phase: ToastPhase,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: NotificationId::new_v4(),
            message: message.into(),
            severity,
            created_at: Utc::now(),
            phase: ToastPhase::Entering,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    /// Moves to the next phase. Returns `false` when the toast is finished.
    pub fn advance(&mut self) -> bool {
        match self.phase.next() {
            Some(next) => {
                self.phase = next;
                true
            }
            None => false,
        }
    }

    /// CSS classes of the presentation element.
    pub fn css_class(&self) -> String {
        if self.phase.is_visible() {
            format!("notification {} show", self.severity.css_class())
        } else {
            format!("notification {}", self.severity.css_class())
        }
    }
}
