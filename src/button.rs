//! A device abstraction for a push-button with debouncing and press duration
//! tracking.
//!
//! [`ButtonMonitor`] is the hardware-independent poll core: feed it the raw
//! pin level once per loop iteration and query the resulting
//! [`ButtonState`]. [`Button`] wraps a GPIO input around the monitor.

use embassy_time::{Duration, Instant};

#[cfg(not(feature = "host"))]
use embassy_rp::Peri;
#[cfg(not(feature = "host"))]
use embassy_rp::gpio::{Input, Pull};

// ============================================================================
// PressedTo - How the button is wired
// ============================================================================

/// Describes how the button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PressedTo {
    /// Button connects pin to voltage (3.3V) when pressed.
    /// Uses internal pull-down resistor. Pin reads HIGH when pressed.
    Voltage,

    /// Button connects pin to ground (GND) when pressed.
    /// Uses internal pull-up resistor. Pin reads LOW when pressed.
    Ground,
}

// ============================================================================
// ButtonState - Discrete press events
// ============================================================================

/// Discrete button state derived on each poll from the raw level plus the
/// debounce and hold-duration timers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ButtonState {
    /// Nothing of note this poll (released, or pressed but not yet long).
    Idle,
    /// A debounced release after a press shorter than the long-press
    /// threshold. Reported exactly once per press-release cycle.
    ShortPressDetected,
    /// The button has been continuously held for at least the long-press
    /// threshold and is still down.
    LongPressHeld,
    /// A debounced release after a long press. Reported exactly once.
    LongPressReleased,
}

// ============================================================================
// ButtonMonitor - Debounced poll core
// ============================================================================

/// Turns a noisy digital input into clean discrete events.
///
/// Call [`update`](Self::update) once per outer-loop iteration with the raw
/// pressed level and the current time. Level changes shorter than the
/// debounce window are ignored; continuous press time is tracked across
/// bounce.
///
/// This layer has no failure modes: invalid pin reads are not detectable
/// here, and a glitch only shows up as a delayed or ignored event.
///
/// # Example
///
/// ```rust
/// use embassy_time::{Duration, Instant};
/// use pattern_panel::button::{ButtonMonitor, ButtonState};
///
/// let mut monitor = ButtonMonitor::new(
///     Duration::from_millis(20),
///     Duration::from_millis(500),
/// );
///
/// let t = |ms| Instant::from_millis(ms);
/// monitor.update(true, t(0)); // press edge
/// monitor.update(true, t(30)); // debounced down
/// monitor.update(false, t(100)); // release edge
/// monitor.update(false, t(130)); // debounced up
/// assert_eq!(monitor.state(), ButtonState::ShortPressDetected);
/// assert!(monitor.was_released());
/// ```
#[derive(Debug)]
pub struct ButtonMonitor {
    debounce: Duration,
    long_press: Duration,
    /// Last raw sample and when it last changed level.
    raw: bool,
    raw_since: Instant,
    /// Debounced level.
    pressed: bool,
    press_started: Instant,
    long_latched: bool,
    state: ButtonState,
    last_poll: Instant,
}

impl ButtonMonitor {
    /// Create a monitor with the given debounce window and long-press
    /// threshold. The button is assumed released at startup.
    #[must_use]
    pub const fn new(debounce: Duration, long_press: Duration) -> Self {
        Self {
            debounce,
            long_press,
            raw: false,
            raw_since: Instant::from_ticks(0),
            pressed: false,
            press_started: Instant::from_ticks(0),
            long_latched: false,
            state: ButtonState::Idle,
            last_poll: Instant::from_ticks(0),
        }
    }

    /// Feed one raw sample. Must be called frequently (every outer-loop
    /// iteration); `now` must be monotonic across calls.
    pub fn update(&mut self, raw_pressed: bool, now: Instant) {
        self.last_poll = now;

        if raw_pressed != self.raw {
            self.raw = raw_pressed;
            self.raw_since = now;
        }

        let stable = now - self.raw_since >= self.debounce;
        if stable && self.raw != self.pressed {
            self.pressed = self.raw;
            if self.pressed {
                // Hold time is measured from the press edge, not from when
                // debounce confirmed it.
                self.press_started = self.raw_since;
            } else {
                self.state = if self.long_latched {
                    ButtonState::LongPressReleased
                } else {
                    ButtonState::ShortPressDetected
                };
                self.long_latched = false;
                return;
            }
        }

        if self.pressed {
            if !self.long_latched && now - self.press_started >= self.long_press {
                self.long_latched = true;
            }
            self.state = if self.long_latched {
                ButtonState::LongPressHeld
            } else {
                ButtonState::Idle
            };
        } else {
            self.state = ButtonState::Idle;
        }
    }

    /// The state derived by the most recent [`update`](Self::update).
    #[must_use]
    pub const fn state(&self) -> ButtonState {
        self.state
    }

    /// Whether the debounced level is currently pressed.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// True exactly once per physical press-release cycle, on the poll where
    /// the release is first observed after debounce.
    #[must_use]
    pub fn was_released(&self) -> bool {
        matches!(
            self.state,
            ButtonState::ShortPressDetected | ButtonState::LongPressReleased
        )
    }

    /// True once the button has been continuously pressed for at least
    /// `duration`. Stays true until release; it does not re-trigger per poll.
    #[must_use]
    pub fn held_for(&self, duration: Duration) -> bool {
        self.pressed && self.last_poll - self.press_started >= duration
    }
}

// ============================================================================
// Button - GPIO wrapper
// ============================================================================

/// A push-button on a GPIO pin, polled once per loop iteration.
///
/// The pin is configured from the wiring:
/// - [`PressedTo::Voltage`]: internal pull-down (button to 3.3V)
/// - [`PressedTo::Ground`]: internal pull-up (button to GND)
#[cfg(not(feature = "host"))]
pub struct Button<'a> {
    input: Input<'a>,
    pressed_to: PressedTo,
    monitor: ButtonMonitor,
}

#[cfg(not(feature = "host"))]
impl<'a> Button<'a> {
    /// Creates a new `Button` from a pin, using the crate's configured
    /// debounce window and long-press threshold.
    #[must_use]
    pub fn new<P: embassy_rp::gpio::Pin>(pin: Peri<'a, P>, pressed_to: PressedTo) -> Self {
        let pull = match pressed_to {
            PressedTo::Voltage => Pull::Down,
            PressedTo::Ground => Pull::Up,
        };
        Self {
            input: Input::new(pin, pull),
            pressed_to,
            monitor: ButtonMonitor::new(
                crate::config::DEBOUNCE_WINDOW,
                crate::config::LONG_PRESS_THRESHOLD,
            ),
        }
    }

    /// Read the pin and advance the debounce state. Call once per loop
    /// iteration, before the mode controller is evaluated.
    pub fn poll(&mut self) {
        let raw_pressed = match self.pressed_to {
            PressedTo::Voltage => self.input.is_high(),
            PressedTo::Ground => self.input.is_low(),
        };
        self.monitor.update(raw_pressed, Instant::now());
    }

    /// The state derived by the most recent [`poll`](Self::poll).
    #[must_use]
    pub const fn state(&self) -> ButtonState {
        self.monitor.state()
    }

    /// See [`ButtonMonitor::was_released`].
    #[must_use]
    pub fn was_released(&self) -> bool {
        self.monitor.was_released()
    }

    /// See [`ButtonMonitor::held_for`].
    #[must_use]
    pub fn held_for(&self, duration: Duration) -> bool {
        self.monitor.held_for(duration)
    }
}
