//! Daily reminder scheduling.
//!
//! The core computes when the reminder should fire and what it should
//! say; OS-level delivery sits behind [`NotificationScheduler`].
//! Permission denial is non-fatal: reported once, no retry.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ReminderError;
use crate::i18n::{Language, Texts};
use crate::settings::ReminderSettings;

/// A repeating once-a-day reminder at a fixed local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReminder {
    pub hour: u32,
    pub minute: u32,
}

impl Default for DailyReminder {
    fn default() -> Self {
        Self {
            hour: 18,
            minute: 0,
        }
    }
}

impl DailyReminder {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub fn from_settings(settings: &ReminderSettings) -> Self {
        Self {
            hour: settings.hour,
            minute: settings.minute,
        }
    }

    /// The next time the reminder fires strictly after `after`:
    /// today at hour:minute, or tomorrow if that has already passed.
    /// Out-of-range components are clamped to a valid time of day.
    pub fn next_occurrence(&self, after: NaiveDateTime) -> NaiveDateTime {
        let at = after
            .date()
            .and_hms_opt(self.hour.min(23), self.minute.min(59), 0)
            .unwrap_or(after);
        if at > after {
            at
        } else {
            at + Duration::days(1)
        }
    }
}

/// What the notification says, resolved from the localized tables:
/// the welcome title and the reminder line for the chosen language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderContent {
    pub title: &'static str,
    pub body: &'static str,
}

impl ReminderContent {
    pub fn for_language(language: Language) -> Self {
        let texts = Texts::for_language(language);
        Self {
            title: texts.welcome.title,
            body: texts.reminder_body,
        }
    }
}

/// OS notification delivery seam.
///
/// Implementations must use cancel-then-schedule semantics: at most one
/// daily reminder is registered at a time.
pub trait NotificationScheduler {
    /// Ask the OS for notification permission. `false` means denied.
    fn request_permission(&self) -> bool;

    /// Replace any scheduled reminder with this one.
    ///
    /// # Errors
    ///
    /// [`ReminderError::PermissionDenied`] when the OS refuses; callers
    /// report it and move on, the app keeps working without reminders.
    fn schedule_daily(
        &self,
        reminder: &DailyReminder,
        content: &ReminderContent,
    ) -> Result<(), ReminderError>;

    /// Remove every scheduled reminder.
    fn cancel_all(&self);
}
