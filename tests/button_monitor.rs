#![allow(missing_docs)]
//! Host-level tests for button debouncing and press classification.

use embassy_time::{Duration, Instant};
use pattern_panel::button::{ButtonMonitor, ButtonState};

const DEBOUNCE_MS: u64 = 20;
const LONG_PRESS_MS: u64 = 500;

fn monitor() -> ButtonMonitor {
    ButtonMonitor::new(
        Duration::from_millis(DEBOUNCE_MS),
        Duration::from_millis(LONG_PRESS_MS),
    )
}

fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

#[test]
fn starts_idle_and_released() {
    let mut monitor = monitor();
    monitor.update(false, at(100));
    assert_eq!(monitor.state(), ButtonState::Idle);
    assert!(!monitor.is_pressed());
    assert!(!monitor.was_released());
}

#[test]
fn glitch_shorter_than_debounce_is_ignored() {
    let mut monitor = monitor();
    monitor.update(false, at(100));
    monitor.update(true, at(105)); // 10 ms spike
    monitor.update(false, at(115));
    monitor.update(false, at(200));
    assert_eq!(monitor.state(), ButtonState::Idle);
    assert!(!monitor.is_pressed());
}

#[test]
fn short_press_reports_exactly_once() {
    let mut monitor = monitor();
    monitor.update(true, at(0));
    monitor.update(true, at(30)); // past debounce: press commits
    assert!(monitor.is_pressed());
    assert_eq!(monitor.state(), ButtonState::Idle);

    monitor.update(false, at(100));
    monitor.update(false, at(130)); // past debounce: release commits
    assert_eq!(monitor.state(), ButtonState::ShortPressDetected);
    assert!(monitor.was_released());

    // Next poll, the event is gone.
    monitor.update(false, at(150));
    assert_eq!(monitor.state(), ButtonState::Idle);
    assert!(!monitor.was_released());
}

#[test]
fn bounce_during_a_press_does_not_split_it() {
    let mut monitor = monitor();
    monitor.update(true, at(0));
    monitor.update(true, at(30));
    // Contact chatter well inside the debounce window.
    monitor.update(false, at(50));
    monitor.update(true, at(55));
    monitor.update(true, at(100));
    assert!(monitor.is_pressed());

    monitor.update(false, at(200));
    monitor.update(false, at(230));
    assert_eq!(monitor.state(), ButtonState::ShortPressDetected);
}

#[test]
fn long_hold_reports_held_then_released() {
    let mut monitor = monitor();
    monitor.update(true, at(0));
    monitor.update(true, at(30));
    assert_eq!(monitor.state(), ButtonState::Idle);

    // Threshold is measured from the press edge at t=0.
    monitor.update(true, at(499));
    assert_eq!(monitor.state(), ButtonState::Idle);
    monitor.update(true, at(500));
    assert_eq!(monitor.state(), ButtonState::LongPressHeld);
    monitor.update(true, at(700));
    assert_eq!(monitor.state(), ButtonState::LongPressHeld);

    monitor.update(false, at(800));
    monitor.update(false, at(830));
    assert_eq!(monitor.state(), ButtonState::LongPressReleased);
    assert!(monitor.was_released());
}

#[test]
fn a_press_is_short_or_long_never_both() {
    // Short: never crosses the threshold, so no LongPressHeld poll occurs.
    let mut short = monitor();
    short.update(true, at(0));
    short.update(true, at(30));
    short.update(true, at(400));
    assert_eq!(short.state(), ButtonState::Idle);
    short.update(false, at(450));
    short.update(false, at(480));
    assert_eq!(short.state(), ButtonState::ShortPressDetected);

    // Long: once latched, the release can only be LongPressReleased.
    let mut long = monitor();
    long.update(true, at(0));
    long.update(true, at(600));
    assert_eq!(long.state(), ButtonState::LongPressHeld);
    long.update(false, at(610));
    long.update(false, at(640));
    assert_eq!(long.state(), ButtonState::LongPressReleased);
}

#[test]
fn held_for_tracks_continuous_press_time() {
    let mut monitor = monitor();
    monitor.update(true, at(0));
    monitor.update(true, at(30));
    assert!(!monitor.held_for(Duration::from_millis(100)));

    monitor.update(true, at(150));
    assert!(monitor.held_for(Duration::from_millis(100)));
    assert!(!monitor.held_for(Duration::from_millis(200)));

    // Release resets; a new press starts the clock over.
    monitor.update(false, at(200));
    monitor.update(false, at(230));
    assert!(!monitor.held_for(Duration::from_millis(100)));

    monitor.update(true, at(300));
    monitor.update(true, at(330));
    assert!(!monitor.held_for(Duration::from_millis(100)));
    monitor.update(true, at(450));
    assert!(monitor.held_for(Duration::from_millis(100)));
}
