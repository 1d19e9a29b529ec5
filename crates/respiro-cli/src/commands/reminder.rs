use chrono::Local;
use clap::Subcommand;

use respiro_core::{
    DailyReminder, NotificationScheduler, ReminderContent, ReminderError, Settings,
};

#[derive(Subcommand)]
pub enum ReminderAction {
    /// Enable the daily reminder
    Enable {
        /// Time of day as HH:MM
        #[arg(long, default_value = "18:00")]
        at: String,
    },
    /// Disable the daily reminder
    Disable,
    /// Show the reminder status and next occurrence
    Status,
}

/// Scheduler for terminal hosts: there is no OS notification center to
/// register with, so scheduling just reports what would fire and when.
pub struct ConsoleScheduler;

impl NotificationScheduler for ConsoleScheduler {
    fn request_permission(&self) -> bool {
        true
    }

    fn schedule_daily(
        &self,
        reminder: &DailyReminder,
        content: &ReminderContent,
    ) -> Result<(), ReminderError> {
        if !self.request_permission() {
            return Err(ReminderError::PermissionDenied);
        }
        tracing::info!(
            hour = reminder.hour,
            minute = reminder.minute,
            title = content.title,
            "daily reminder scheduled"
        );
        Ok(())
    }

    fn cancel_all(&self) {
        tracing::info!("cancelled all scheduled reminders");
    }
}

pub fn run(action: ReminderAction) -> Result<(), Box<dyn std::error::Error>> {
    let scheduler = ConsoleScheduler;
    match action {
        ReminderAction::Enable { at } => {
            let (hour, minute) = parse_hhmm(&at)?;
            let mut settings = Settings::load();
            settings.reminder.enabled = true;
            settings.reminder.hour = hour;
            settings.reminder.minute = minute;
            settings.save()?;

            let reminder = DailyReminder::from_settings(&settings.reminder);
            let content = ReminderContent::for_language(settings.language);
            scheduler.cancel_all();
            match scheduler.schedule_daily(&reminder, &content) {
                Ok(()) => {
                    let next = reminder.next_occurrence(Local::now().naive_local());
                    println!("{} — {}", content.title, content.body);
                    println!("next: {}", next.format("%Y-%m-%d %H:%M"));
                }
                // Non-fatal: the preference is saved, delivery just
                // won't happen until permission is granted.
                Err(ReminderError::PermissionDenied) => {
                    eprintln!("warning: notification permission denied");
                }
                Err(e) => return Err(e.into()),
            }
        }
        ReminderAction::Disable => {
            let mut settings = Settings::load();
            settings.reminder.enabled = false;
            settings.save()?;
            scheduler.cancel_all();
            println!("reminder disabled");
        }
        ReminderAction::Status => {
            let settings = Settings::load();
            let reminder = DailyReminder::from_settings(&settings.reminder);
            let content = ReminderContent::for_language(settings.language);
            if settings.reminder.enabled {
                let next = reminder.next_occurrence(Local::now().naive_local());
                println!("enabled at {:02}:{:02}", reminder.hour, reminder.minute);
                println!("next: {}", next.format("%Y-%m-%d %H:%M"));
            } else {
                println!("disabled");
            }
            println!("{} — {}", content.title, content.body);
        }
    }
    Ok(())
}

fn parse_hhmm(s: &str) -> Result<(u32, u32), Box<dyn std::error::Error>> {
    let (h, m) = s.split_once(':').ok_or("time must be HH:MM")?;
    let hour: u32 = h.parse()?;
    let minute: u32 = m.parse()?;
    if hour > 23 || minute > 59 {
        return Err(format!("'{s}' is not a valid time of day").into());
    }
    Ok((hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_times() {
        assert_eq!(parse_hhmm("18:00").unwrap(), (18, 0));
        assert_eq!(parse_hhmm("07:45").unwrap(), (7, 45));
    }

    #[test]
    fn rejects_malformed_times() {
        assert!(parse_hhmm("1800").is_err());
        assert!(parse_hhmm("24:00").is_err());
        assert!(parse_hhmm("12:60").is_err());
        assert!(parse_hhmm("noon").is_err());
    }
}
