//! Cancellation discipline: no side effects after teardown.

use std::time::Duration;

use panelbench::bench::{BenchHarness, BenchState};
use panelbench::config::HarnessConfig;
use panelbench::panel::FakePanel;

#[tokio::test(start_paused = true)]
async fn cancel_before_the_mount_delay_leaves_the_run_untouched() {
    let (panel, layout_rx) = FakePanel::with_layout_channel();
    let probe = panel.clone();
    let mut harness = BenchHarness::spawn(HarnessConfig::default(), panel, layout_rx).unwrap();

    tokio::time::sleep(Duration::from_millis(1500)).await;
    harness.cancel();
    let summary = harness.wait().await.unwrap();

    assert_eq!(summary.final_state, BenchState::NotStarted);
    assert_eq!(summary.moves_issued, 0);
    assert!(summary.sample.is_none());
    assert!(probe.moves().is_empty());
    assert!(!probe.is_mounted());
}

#[tokio::test(start_paused = true)]
async fn the_mount_never_fires_early() {
    let (panel, layout_rx) = FakePanel::with_layout_channel();
    let probe = panel.clone();
    let harness = BenchHarness::spawn(HarnessConfig::default(), panel, layout_rx).unwrap();

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(!probe.is_mounted());
    assert_eq!(harness.snapshot().state, BenchState::NotStarted);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(probe.is_mounted());
    assert_eq!(harness.snapshot().state, BenchState::Mounted);
}

#[tokio::test(start_paused = true)]
async fn cancelling_mid_run_tears_the_panel_down() {
    let (panel, layout_rx) = FakePanel::with_layout_channel();
    let probe = panel.clone();
    let mut harness = BenchHarness::spawn(HarnessConfig::default(), panel, layout_rx).unwrap();

    // mount at 2000, moves at 3000 and 4000, cancel at 4500
    tokio::time::sleep(Duration::from_millis(4500)).await;
    harness.cancel();
    let summary = harness.wait().await.unwrap();

    // the run never reached the terminal state, but the panel is gone
    assert_eq!(summary.final_state, BenchState::Mounted);
    assert_eq!(summary.moves_issued, 2);
    assert_eq!(probe.moves(), vec![0, 1]);
    assert!(!probe.is_mounted());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_cancels_the_run() {
    let (panel, layout_rx) = FakePanel::with_layout_channel();
    let probe = panel.clone();
    let harness = BenchHarness::spawn(HarnessConfig::default(), panel, layout_rx).unwrap();

    tokio::time::sleep(Duration::from_millis(1000)).await;
    drop(harness);
    // give the run task a chance to observe the cancellation
    tokio::time::sleep(Duration::from_millis(5000)).await;

    assert!(probe.moves().is_empty());
    assert!(!probe.is_mounted());
}
