//! Duration listener lifecycle.

mod common;

use common::mock_engine::MockEngine;
use common::*;
use minesweeper_client::engine::TimeEvent;
use minesweeper_client::ui::game::{zero_duration, GameIntent};
use minesweeper_client::ui::timer::TimerBridge;
use tokio::sync::mpsc;

fn tick(label: &str) -> TimeEvent {
    TimeEvent {
        duration: label.to_string(),
    }
}

#[tokio::test]
async fn ticks_update_the_running_game() {
    let store = started_store(2, 2);
    activate(&store);
    let mut bridge = TimerBridge::new(store.clone());
    let (tx, rx) = mpsc::channel(8);
    bridge.mount(rx);

    tx.send(tick("3 seconds")).await.unwrap();
    wait_for(&store, |g| g.duration() == "3 seconds").await;
    assert!(bridge.is_mounted());
}

#[tokio::test]
async fn remount_releases_the_previous_listener() {
    let store = started_store(2, 2);
    activate(&store);
    let mut bridge = TimerBridge::new(store.clone());

    let (old_tx, old_rx) = mpsc::channel(8);
    bridge.mount(old_rx);
    let (new_tx, new_rx) = mpsc::channel(8);
    bridge.mount(new_rx);

    // The aborted listener drops its receiver.
    tokio::time::timeout(std::time::Duration::from_secs(1), old_tx.closed())
        .await
        .expect("old listener released");
    assert!(old_tx.send(tick("99 seconds")).await.is_err());

    new_tx.send(tick("5 seconds")).await.unwrap();
    wait_for(&store, |g| g.duration() == "5 seconds").await;
}

#[tokio::test]
async fn unmount_stops_updates() {
    let store = started_store(2, 2);
    activate(&store);
    let mut bridge = TimerBridge::new(store.clone());
    let (tx, rx) = mpsc::channel(8);
    bridge.mount(rx);

    bridge.unmount();
    assert!(!bridge.is_mounted());
    tokio::time::timeout(std::time::Duration::from_secs(1), tx.closed())
        .await
        .expect("listener released");
    assert_eq!(store.game().duration(), zero_duration());
}

#[tokio::test]
async fn queued_ticks_collapse_to_the_latest() {
    let store = started_store(2, 2);
    activate(&store);
    let (tx, rx) = mpsc::channel(8);
    for label in ["1 second", "2 seconds", "3 seconds"] {
        tx.send(tick(label)).await.unwrap();
    }
    drop(tx);

    let mut bridge = TimerBridge::new(store.clone());
    bridge.mount(rx);
    wait_for(&store, |g| g.duration() == "3 seconds").await;
}

#[tokio::test]
async fn ticks_before_the_first_reveal_are_ignored() {
    let store = started_store(2, 2);
    let mut bridge = TimerBridge::new(store.clone());
    let (tx, rx) = mpsc::channel(8);
    bridge.mount(rx);

    tx.send(tick("8 seconds")).await.unwrap();
    drop(tx);
    // Stream end marks the tick as consumed.
    while bridge.is_mounted() {
        tokio::task::yield_now().await;
    }
    assert_eq!(store.game().duration(), zero_duration());
}

#[tokio::test]
async fn restart_zeroes_the_duration_for_the_new_board() {
    let store = started_store(2, 2);
    activate(&store);
    let mut bridge = TimerBridge::new(store.clone());
    let (tx, rx) = mpsc::channel(8);
    bridge.mount(rx);
    tx.send(tick("6 seconds")).await.unwrap();
    wait_for(&store, |g| g.duration() == "6 seconds").await;

    store.dispatch(GameIntent::Restart {
        board: layout(2, 2),
    });
    assert_eq!(store.game().duration(), zero_duration());
}

#[tokio::test]
async fn mount_engine_uses_the_engine_stream() {
    let engine = MockEngine::new(2, 2);
    let (tx, rx) = mpsc::channel(8);
    engine.script_ticks(rx);
    let store = started_store(2, 2);
    activate(&store);
    let mut bridge = TimerBridge::new(store.clone());

    bridge.mount_engine(engine.as_ref()).await.unwrap();
    tx.send(tick("2 seconds")).await.unwrap();
    wait_for(&store, |g| g.duration() == "2 seconds").await;

    // A second stream request fails; the bridge keeps nothing half-mounted.
    bridge.unmount();
    assert!(bridge.mount_engine(engine.as_ref()).await.is_err());
    assert!(!bridge.is_mounted());
}

#[tokio::test]
async fn tick_queued_before_restart_never_reaches_the_new_board() {
    let store = started_store(2, 2);
    activate(&store);
    let mut bridge = TimerBridge::new(store.clone());
    let (tx, rx) = mpsc::channel(8);
    bridge.mount(rx);

    // Buffered for the old board; the listener has not run yet.
    tx.send(tick("42 seconds")).await.unwrap();
    store.dispatch(GameIntent::Restart {
        board: layout(2, 2),
    });
    activate(&store);

    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    assert_eq!(store.game().duration(), zero_duration());

    tx.send(tick("1 second")).await.unwrap();
    wait_for(&store, |g| g.duration() == "1 second").await;
    assert!(bridge.is_mounted());
}

#[tokio::test]
async fn ticks_buffered_across_a_restart_are_discarded() {
    let store = started_store(2, 2);
    activate(&store);
    let mut bridge = TimerBridge::new(store.clone());
    let (tx, rx) = mpsc::channel(8);
    bridge.mount(rx);
    tx.send(tick("5 seconds")).await.unwrap();
    wait_for(&store, |g| g.duration() == "5 seconds").await;

    store.dispatch(GameIntent::Restart {
        board: layout(2, 2),
    });
    activate(&store);
    tx.send(tick("6 seconds")).await.unwrap();
    tx.send(tick("7 seconds")).await.unwrap();
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }

    assert_eq!(store.game().duration(), zero_duration());
}
