//! Mode selection: which pattern is showing, and whether patterns advance
//! automatically.
//!
//! [`ModeController`] is a pure state machine driven by the debounced
//! [`ButtonState`] and the current time, one poll per loop iteration. It
//! owns the pattern index; it never touches the pattern itself.

use embassy_time::{Duration, Instant};

use crate::button::ButtonState;
use crate::patterns::PatternId;

/// Whether a long press is in flight.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    /// Normal operation: short presses advance, the auto timer may run.
    Manual,
    /// A long press has crossed the threshold and is still held. The auto
    /// timer is suspended until the release commits.
    ArmedForAuto,
}

/// Tracks the selected pattern index and the auto-cycle flag.
///
/// Control rules, evaluated once per poll with button events taking
/// priority over the timer:
///
/// - Short press: advance to the next pattern (wrapping) and switch
///   auto-cycle off.
/// - Hold past the long-press threshold: arm. While armed nothing changes
///   and the auto timer is suspended.
/// - Release of a long press: jump to pattern 0 and switch auto-cycle on.
/// - Auto-cycle: when no button event fires and the configured pattern time
///   has elapsed since the last index change, advance.
pub struct ModeController {
    index: usize,
    auto_cycle: bool,
    phase: Phase,
    last_change: Instant,
    pattern_time: Duration,
}

impl ModeController {
    /// Start in manual mode at pattern 0 with auto-cycle off.
    #[must_use]
    pub const fn new(now: Instant, pattern_time: Duration) -> Self {
        Self {
            index: 0,
            auto_cycle: false,
            phase: Phase::Manual,
            last_change: now,
            pattern_time,
        }
    }

    /// Currently selected pattern index, always in `0..PatternId::COUNT`.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether the auto-cycle timer is on.
    #[must_use]
    pub const fn auto_cycle(&self) -> bool {
        self.auto_cycle
    }

    /// Whether a long press is armed and awaiting release.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.phase == Phase::ArmedForAuto
    }

    /// Advance the state machine one poll. Returns `true` when the selection
    /// changed and the running pattern must be replaced.
    pub fn poll(&mut self, button: ButtonState, now: Instant) -> bool {
        match self.phase {
            Phase::ArmedForAuto => {
                if matches!(button, ButtonState::LongPressReleased) {
                    self.enter_auto(now);
                    return true;
                }
                // Still held (or bouncing). Timer stays suspended.
                false
            }
            Phase::Manual => {
                match button {
                    ButtonState::ShortPressDetected => {
                        self.index = (self.index + 1) % PatternId::COUNT;
                        self.auto_cycle = false;
                        self.last_change = now;
                        return true;
                    }
                    ButtonState::LongPressHeld => {
                        self.phase = Phase::ArmedForAuto;
                        return false;
                    }
                    ButtonState::LongPressReleased => {
                        // A release without a preceding held poll can only
                        // happen if polls were skipped; honor it anyway.
                        self.enter_auto(now);
                        return true;
                    }
                    ButtonState::Idle => {}
                }
                if self.auto_cycle && now - self.last_change >= self.pattern_time {
                    self.index = (self.index + 1) % PatternId::COUNT;
                    self.last_change = now;
                    return true;
                }
                false
            }
        }
    }

    fn enter_auto(&mut self, now: Instant) {
        self.phase = Phase::Manual;
        self.index = 0;
        self.auto_cycle = true;
        self.last_change = now;
    }
}
