//! Session event loop.
//!
//! Two independent periodic tasks -- the 1-second countdown tick and the
//! 4-second phase flip -- coordinated only through controller calls, on
//! a single cooperative loop. Neither arm blocks; tick and flip may
//! interleave in any order.

use tokio::sync::mpsc;
use tokio::time::{interval, Duration, MissedTickBehavior};

use super::controller::{DisplayState, FinishReason, SessionController};
use super::oscillator::PHASE_MS;
use super::epoch_ms;
use crate::events::Event;

/// Commands a host can inject between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Pause/resume the background ambience.
    ToggleAudio,
    /// Manual early exit; converges on the same finish path as expiry.
    Finish,
}

/// Drive one session to completion.
///
/// Starts the controller, performs the background-audio load (feeding
/// the result through `attach_audio` so a finish racing the load is
/// honored), then ticks until the controller reports finished. Events
/// are forwarded to `events`; a closed receiver is tolerated. Returns
/// the final display state.
pub async fn run_session(
    mut controller: SessionController,
    mut commands: mpsc::Receiver<SessionCommand>,
    events: mpsc::Sender<Event>,
) -> DisplayState {
    let Some(started) = controller.start(epoch_ms()) else {
        return controller.display_state();
    };
    let _ = events.send(started).await;

    if controller.audio_pending() {
        let result = controller.backend().load(controller.background_sound());
        if let Some(event) = controller.attach_audio(result) {
            let _ = events.send(event).await;
        }
    }

    let mut second = interval(Duration::from_secs(1));
    second.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut flip = interval(Duration::from_millis(PHASE_MS));
    flip.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // Both intervals yield immediately once; consume that so the first
    // real tick lands a full period from now.
    second.tick().await;
    flip.tick().await;

    while !controller.is_finished() {
        let event = tokio::select! {
            _ = second.tick() => controller.tick_second(),
            _ = flip.tick() => controller.flip_phase(epoch_ms()),
            cmd = commands.recv() => match cmd {
                Some(SessionCommand::ToggleAudio) => controller.toggle_audio(),
                // A closed command channel means the host went away;
                // treat it as a cancel so the audio handle is released.
                Some(SessionCommand::Finish) | None => {
                    controller.finish(FinishReason::Cancelled)
                }
            },
        };
        if let Some(event) = event {
            let _ = events.send(event).await;
        }
    }

    controller.display_state()
}
