//! End-to-end session loop tests with a paused tokio clock.
//!
//! Time is virtual: tokio auto-advances whenever every task is idle, so
//! a full 60-second session completes instantly and deterministically.

use tokio::sync::mpsc;

use respiro_core::{
    run_session, BackgroundSound, Event, FinishReason, NullBackend, SessionCommand, SessionConfig,
    SessionController,
};

fn controller(sound: BackgroundSound) -> SessionController {
    SessionController::new(
        SessionConfig {
            background_sound: sound,
        },
        Box::new(NullBackend::new()),
    )
}

async fn drain(mut rx: mpsc::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    events
}

#[tokio::test(start_paused = true)]
async fn session_runs_to_completion() {
    let (_cmd_tx, cmd_rx) = mpsc::channel(4);
    let (event_tx, event_rx) = mpsc::channel(256);

    let handle = tokio::spawn(run_session(
        controller(BackgroundSound::Ocean),
        cmd_rx,
        event_tx,
    ));

    let final_state = handle.await.unwrap();
    assert_eq!(final_state.remaining_secs, 0);
    assert!(!final_state.running);

    let events = drain(event_rx).await;
    assert!(matches!(events[0], Event::SessionStarted { .. }));
    assert!(matches!(events[1], Event::AudioStarted { .. }));

    let seconds = events
        .iter()
        .filter(|e| matches!(e, Event::SecondElapsed { .. }))
        .count();
    assert_eq!(seconds, 59);

    // Flips land every 4 s; the one coinciding with expiry may race the
    // final countdown tick, so 14 or 15 are both in order.
    let flips = events
        .iter()
        .filter(|e| matches!(e, Event::PhaseChanged { .. }))
        .count();
    assert!((14..=15).contains(&flips), "got {flips} phase changes");

    match events.last().unwrap() {
        Event::SessionFinished {
            reason,
            remaining_secs,
            ..
        } => {
            assert_eq!(*reason, FinishReason::Elapsed);
            assert_eq!(*remaining_secs, 0);
        }
        other => panic!("expected SessionFinished last, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn first_flip_lands_after_four_seconds() {
    let (_cmd_tx, cmd_rx) = mpsc::channel(4);
    let (event_tx, event_rx) = mpsc::channel(256);

    tokio::spawn(run_session(
        controller(BackgroundSound::None),
        cmd_rx,
        event_tx,
    ))
    .await
    .unwrap();

    let events = drain(event_rx).await;
    // Three countdown ticks precede the first phase change; the tick
    // due at the same 4 s instant may land on either side of it.
    let mut seconds_before_flip = 0;
    for event in &events {
        match event {
            Event::SecondElapsed { .. } => seconds_before_flip += 1,
            Event::PhaseChanged { phase, .. } => {
                assert_eq!(*phase, respiro_core::Phase::Out);
                break;
            }
            _ => {}
        }
    }
    assert!(
        (3..=4).contains(&seconds_before_flip),
        "got {seconds_before_flip} ticks before the first flip"
    );
}

#[tokio::test(start_paused = true)]
async fn manual_finish_cancels_mid_session() {
    let (cmd_tx, cmd_rx) = mpsc::channel(4);
    let (event_tx, event_rx) = mpsc::channel(256);

    let handle = tokio::spawn(run_session(
        controller(BackgroundSound::None),
        cmd_rx,
        event_tx,
    ));

    tokio::time::sleep(tokio::time::Duration::from_millis(10_500)).await;
    cmd_tx.send(SessionCommand::Finish).await.unwrap();

    let final_state = handle.await.unwrap();
    assert!(!final_state.running);
    assert_eq!(final_state.remaining_secs, 50);

    let events = drain(event_rx).await;
    match events.last().unwrap() {
        Event::SessionFinished { reason, .. } => {
            assert_eq!(*reason, FinishReason::Cancelled);
        }
        other => panic!("expected SessionFinished last, got {other:?}"),
    }
    // No countdown tick lands after the finish.
    let seconds = events
        .iter()
        .filter(|e| matches!(e, Event::SecondElapsed { .. }))
        .count();
    assert_eq!(seconds, 10);
}

#[tokio::test(start_paused = true)]
async fn toggle_audio_pauses_and_resumes_ambience() {
    let (cmd_tx, cmd_rx) = mpsc::channel(4);
    let (event_tx, event_rx) = mpsc::channel(256);

    let handle = tokio::spawn(run_session(
        controller(BackgroundSound::Forest),
        cmd_rx,
        event_tx,
    ));

    tokio::time::sleep(tokio::time::Duration::from_millis(1500)).await;
    cmd_tx.send(SessionCommand::ToggleAudio).await.unwrap();
    tokio::time::sleep(tokio::time::Duration::from_millis(1000)).await;
    cmd_tx.send(SessionCommand::ToggleAudio).await.unwrap();
    tokio::time::sleep(tokio::time::Duration::from_millis(500)).await;
    cmd_tx.send(SessionCommand::Finish).await.unwrap();

    handle.await.unwrap();

    let events = drain(event_rx).await;
    let toggles: Vec<bool> = events
        .iter()
        .filter_map(|e| match e {
            Event::AudioToggled { playing, .. } => Some(*playing),
            _ => None,
        })
        .collect();
    assert_eq!(toggles, vec![false, true]);
}

#[tokio::test(start_paused = true)]
async fn dropped_command_channel_ends_the_session() {
    let (cmd_tx, cmd_rx) = mpsc::channel::<SessionCommand>(4);
    let (event_tx, event_rx) = mpsc::channel(256);

    let handle = tokio::spawn(run_session(
        controller(BackgroundSound::None),
        cmd_rx,
        event_tx,
    ));

    tokio::time::sleep(tokio::time::Duration::from_millis(2500)).await;
    drop(cmd_tx);

    let final_state = handle.await.unwrap();
    assert!(!final_state.running);
    assert_eq!(final_state.remaining_secs, 58);

    let events = drain(event_rx).await;
    assert!(matches!(
        events.last().unwrap(),
        Event::SessionFinished {
            reason: FinishReason::Cancelled,
            ..
        }
    ));
}
