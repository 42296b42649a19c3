#![allow(missing_docs)]
//! Host-level tests for pattern lifecycle: lazy construction, teardown on
//! selection, and the completion-restart path.

use pattern_panel::config::{PanelFrame, VISIBLE_PIXEL_COUNT};
use pattern_panel::patterns::PatternId;
use pattern_panel::runner::PatternRunner;
use smart_leds::RGB8;

const BLACK: RGB8 = RGB8::new(0, 0, 0);

#[test]
fn starts_on_the_first_pattern_with_nothing_built() {
    let runner = PatternRunner::new();
    assert_eq!(runner.current(), PatternId::from_index(0));
    assert!(!runner.is_live());
}

#[test]
fn construction_happens_on_first_step_not_on_select() {
    let mut runner = PatternRunner::new();
    runner.select(PatternId::Wipe);
    assert!(!runner.is_live());

    let mut frame = PanelFrame::new();
    runner.step_frame(&mut frame);
    assert!(runner.is_live());
}

#[test]
fn selecting_a_different_pattern_drops_the_instance_immediately() {
    let mut runner = PatternRunner::new();
    let mut frame = PanelFrame::new();
    runner.step_frame(&mut frame);
    assert!(runner.is_live());

    runner.select(PatternId::Fire);
    assert_eq!(runner.current(), PatternId::Fire);
    assert!(!runner.is_live(), "old instance is gone before the next frame");
}

#[test]
fn selecting_the_current_pattern_keeps_its_state() {
    let mut runner = PatternRunner::new();
    let mut frame = PanelFrame::new();
    runner.select(PatternId::Wipe);
    for _ in 0..10 {
        runner.step_frame(&mut frame);
    }
    assert!(runner.is_live());

    runner.select(PatternId::Wipe);
    assert!(runner.is_live(), "re-selecting is a no-op");

    // The wipe continues where it left off rather than restarting.
    runner.step_frame(&mut frame);
    assert_ne!(frame.visible()[10], BLACK);
}

#[test]
fn switching_away_and_back_restarts_from_scratch() {
    let mut runner = PatternRunner::new();
    let mut frame = PanelFrame::new();
    runner.select(PatternId::Wipe);
    for _ in 0..10 {
        runner.step_frame(&mut frame);
    }

    runner.select(PatternId::Rainbow);
    runner.select(PatternId::Wipe);
    runner.step_frame(&mut frame);

    // A fresh wipe lit only its first pixel.
    assert_ne!(frame.visible()[0], BLACK);
    assert_eq!(frame.visible()[1], BLACK);
}

#[test]
fn completion_tears_down_and_restarts_the_same_pattern() {
    let mut runner = PatternRunner::new();
    let mut frame = PanelFrame::new();
    runner.select(PatternId::Wipe);

    // A wipe takes one frame per visible pixel; the last one reports done.
    for _ in 0..VISIBLE_PIXEL_COUNT - 1 {
        assert!(runner.step_frame(&mut frame));
    }
    assert!(!runner.step_frame(&mut frame), "last pixel completes the wipe");
    assert!(!runner.is_live());
    assert_eq!(runner.current(), PatternId::Wipe, "selection is unchanged");

    // Every pixel got painted on the way.
    assert!(frame.visible().iter().all(|&pixel| pixel != BLACK));

    // The next frame starts a brand-new wipe at the same index.
    assert!(runner.step_frame(&mut frame));
    assert!(runner.is_live());
    assert_ne!(frame.visible()[0], BLACK);
    assert_eq!(frame.visible()[1], BLACK);
}

#[test]
fn every_pattern_in_the_cycle_renders_a_frame() {
    let mut runner = PatternRunner::new();
    let mut frame = PanelFrame::new();
    for id in PatternId::ALL {
        runner.select(id);
        runner.step_frame(&mut frame);
        assert_eq!(runner.current(), id);
        assert!(runner.is_live());
    }
}

#[test]
fn finite_patterns_terminate_and_looping_patterns_do_not() {
    // Generous bound: well past the wipe length and the Life generation cap.
    const BOUND: usize = 5000;

    for id in PatternId::ALL {
        let mut runner = PatternRunner::new();
        let mut frame = PanelFrame::new();
        runner.select(id);
        let mut completed = false;
        for _ in 0..BOUND {
            if !runner.step_frame(&mut frame) {
                completed = true;
                break;
            }
        }
        let finite = matches!(id, PatternId::Life | PatternId::Wipe);
        assert_eq!(completed, finite, "{} finiteness", id.name());
    }
}
