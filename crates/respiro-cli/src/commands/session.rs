//! Run one breathing session in the terminal.
//!
//! Renders a per-second countdown line with the localized phase cue and
//! a breathing gauge sampled from the animation driver. Ctrl-C takes
//! the manual-finish path. With `--json` the raw event stream is
//! printed as NDJSON instead.

use std::io::Write;

use tokio::sync::mpsc;

use respiro_core::session::epoch_ms;
use respiro_core::{
    run_session, AnimationDriver, BackgroundSound, Event, NullBackend, Phase, SessionCommand,
    SessionConfig, SessionController, Settings, Texts,
};

pub fn run(no_audio: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load();
    let texts = Texts::for_language(settings.language);
    let background = if no_audio {
        BackgroundSound::None
    } else {
        settings.sound.background
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let controller = SessionController::new(
            SessionConfig {
                background_sound: background,
            },
            Box::new(NullBackend::new()),
        );

        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (event_tx, mut event_rx) = mpsc::channel(64);
        let session = tokio::spawn(run_session(controller, cmd_rx, event_tx));

        let interrupt_tx = cmd_tx.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = interrupt_tx.send(SessionCommand::Finish).await;
            }
        });

        if !json && background != BackgroundSound::None {
            println!("🎵 {}", texts.sound_label(background));
        }

        let mut animation = AnimationDriver::new();
        while let Some(event) = event_rx.recv().await {
            if json {
                println!("{}", serde_json::to_string(&event)?);
                continue;
            }
            match event {
                Event::SessionStarted { .. } => {
                    animation.retarget(Phase::In, epoch_ms());
                    render_line(texts, Phase::In, respiro_core::SESSION_SECS, &animation);
                }
                Event::PhaseChanged { phase, .. } => {
                    animation.retarget(phase, epoch_ms());
                }
                Event::SecondElapsed {
                    remaining_secs,
                    phase,
                    ..
                } => {
                    render_line(texts, phase, remaining_secs, &animation);
                }
                Event::AudioUnavailable { sound, reason, .. } => {
                    eprintln!("warning: {sound} ambience unavailable ({reason})");
                }
                Event::SessionFinished { .. } => {
                    println!();
                    println!("{}", texts.breathing.finished);
                }
                _ => {}
            }
        }

        let final_state = session.await?;
        tracing::debug!(remaining = final_state.remaining_secs, "session ended");
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}

fn render_line(texts: &Texts, phase: Phase, remaining_secs: u32, animation: &AnimationDriver) {
    let sample = animation.sample(epoch_ms());
    print!(
        "\r{:<12} {:02}:{:02}  {}",
        texts.phase_label(phase),
        remaining_secs / 60,
        remaining_secs % 60,
        gauge(sample.scale)
    );
    let _ = std::io::stdout().flush();
}

/// Map the sampled circle scale (0.8 ..= 1.3) onto a 20-cell bar.
fn gauge(scale: f64) -> String {
    let filled = (((scale - 0.8) / 0.5) * 20.0).round().clamp(0.0, 20.0) as usize;
    format!("[{}{}]", "●".repeat(filled), "·".repeat(20 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_spans_the_scale_range() {
        assert_eq!(gauge(0.8), format!("[{}]", "·".repeat(20)));
        assert_eq!(gauge(1.3), format!("[{}]", "●".repeat(20)));
        let mid = gauge(1.05);
        assert!(mid.contains('●') && mid.contains('·'));
    }

    #[test]
    fn gauge_clamps_out_of_range_samples() {
        assert_eq!(gauge(0.5), format!("[{}]", "·".repeat(20)));
        assert_eq!(gauge(2.0), format!("[{}]", "●".repeat(20)));
    }
}
