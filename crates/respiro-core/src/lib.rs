//! # Respiro Core Library
//!
//! Core logic for Respiro, a 1-minute guided breathing app. It follows
//! a CLI-first philosophy: every operation is available through the
//! standalone `respiro` binary, with any GUI being a thin layer over
//! this same library.
//!
//! ## Architecture
//!
//! - **Session engine**: a countdown clock and a breath-phase oscillator
//!   composed by a controller; the caller's event loop supplies the
//!   periodic ticks
//! - **Audio**: a single loopable ambience handle per session, owned by
//!   the controller and released on every exit path
//! - **Settings**: TOML-based preferences (language, reminder, sound)
//! - **Reminder**: daily-notification time math behind a scheduler seam
//!
//! ## Key Components
//!
//! - [`SessionController`]: session state machine
//! - [`run_session`]: tokio event loop driving one session
//! - [`Settings`]: preference persistence
//! - [`Texts`]: localized string tables

pub mod audio;
pub mod error;
pub mod events;
pub mod i18n;
pub mod reminder;
pub mod session;
pub mod settings;

pub use audio::{AudioBackend, AudioHandle, BackgroundSound, NullBackend, AMBIENCE_VOLUME};
pub use error::{AudioError, CoreError, ReminderError, SettingsError};
pub use events::Event;
pub use i18n::{Language, Texts};
pub use reminder::{DailyReminder, NotificationScheduler, ReminderContent};
pub use session::{
    run_session, AnimationDriver, AnimationSample, DisplayState, FinishReason, Phase,
    SessionCommand, SessionConfig, SessionController, SessionState, PHASE_MS, SESSION_SECS,
};
pub use settings::Settings;
