use super::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn can_start_and_finish_round() {
    let signal = StartSignal::default();
    assert!(!signal.is_active());

    signal.signal_start();
    assert!(signal.is_active());
    assert!(signal.wait_for_start());

    signal.finish_round();
    assert!(!signal.is_active());
    assert!(!signal.is_terminated());
}

#[test]
fn can_wake_up_waiting_thread_on_start() {
    let signal = Arc::new(StartSignal::default());
    let waiter = thread::spawn({
        let signal = signal.clone();
        move || signal.wait_for_start()
    });

    thread::sleep(Duration::from_millis(10));
    signal.signal_start();

    assert!(waiter.join().unwrap());
}

#[test]
fn can_wake_up_waiting_thread_on_terminate() {
    let signal = Arc::new(StartSignal::default());
    let waiter = thread::spawn({
        let signal = signal.clone();
        move || signal.wait_for_start()
    });

    thread::sleep(Duration::from_millis(10));
    signal.terminate();

    assert!(!waiter.join().unwrap());
    assert!(signal.is_terminated());
}

#[test]
fn can_keep_terminated_state_after_round_is_finished() {
    let signal = StartSignal::default();
    signal.signal_start();
    assert!(signal.wait_for_start());

    signal.terminate();
    signal.finish_round();

    assert!(signal.is_active());
    assert!(!signal.wait_for_start());
}

#[test]
fn can_ignore_start_after_terminate() {
    let signal = StartSignal::default();

    signal.terminate();
    signal.signal_start();

    assert!(signal.is_terminated());
    assert!(!signal.wait_for_start());
}

#[test]
fn can_keep_start_signaled_during_round() {
    let signal = StartSignal::default();
    signal.signal_start();
    assert!(signal.wait_for_start());

    signal.signal_start();
    signal.finish_round();

    assert!(signal.is_active());
    assert!(signal.wait_for_start());
    signal.finish_round();
    assert!(!signal.is_active());
}

#[test]
fn can_merge_start_signals_sent_before_round_is_picked_up() {
    let signal = StartSignal::default();

    signal.signal_start();
    signal.signal_start();
    assert!(signal.wait_for_start());
    signal.finish_round();

    assert!(!signal.is_active());
}
