use super::*;
use std::thread;

#[test]
fn test_search_limits_depth_only() {
    let limits = SearchLimits::depth(5);
    assert_eq!(limits.depth, 5);
    assert!(!limits.should_stop());
    assert_eq!(SearchLimits::default().depth, DEFAULT_DEPTH);
}

#[test]
fn test_stop_signal_is_shared_between_clones() {
    let signal = StopSignal::new();
    let limits = SearchLimits::with_stop(8, signal.clone());
    assert!(!limits.should_stop());
    signal.stop();
    assert!(limits.should_stop());
    signal.reset();
    assert!(!limits.should_stop());
}

#[test]
fn test_stop_from_another_thread() {
    let signal = StopSignal::new();
    let remote = signal.clone();
    thread::spawn(move || remote.stop()).join().unwrap();
    assert!(signal.is_stopped());
}
