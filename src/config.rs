//! Panel geometry, timing, and power settings.
//!
//! Everything here is a compile-time constant; there is no runtime
//! configuration surface. Change a value and reflash.

use embassy_time::Duration;

use crate::button::PressedTo;
use crate::frame::PixelBuffer;
use crate::mapping::{PixelGrid, Wiring};
use crate::strip::{Current, Gamma};

/// Panel width in pixels.
pub const WIDTH: usize = 8;

/// Panel height in pixels.
pub const HEIGHT: usize = 32;

/// Number of physical LEDs on the panel.
pub const VISIBLE_PIXEL_COUNT: usize = WIDTH * HEIGHT;

/// Frame buffer length: the visible pixels plus one sink slot that absorbs
/// out-of-bounds writes.
pub const PIXEL_COUNT: usize = VISIBLE_PIXEL_COUNT + 1;

/// The coordinate mapper for the configured panel.
pub type PanelGrid = PixelGrid<WIDTH, HEIGHT>;

/// The frame buffer type for the configured panel.
pub type PanelFrame = PixelBuffer<PIXEL_COUNT, WIDTH, HEIGHT>;

/// How the LED strip snakes across the panel.
pub const WIRING: Wiring = Wiring::SerpentineColumnMajor;

/// How the mode button is wired: pin to ground, internal pull-up.
pub const PRESSED_TO: PressedTo = PressedTo::Ground;

/// A raw level must hold steady this long before a press or release is
/// committed.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(20);

/// Continuous hold time at which a press becomes a long press.
pub const LONG_PRESS_THRESHOLD: Duration = Duration::from_millis(500);

/// In auto-cycle, time between automatic pattern advances, measured from the
/// most recent pattern change of any cause.
pub const PATTERN_TIME: Duration = Duration::from_secs(10);

/// Target frame period (about 60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Hard cap on panel current draw. 256 LEDs at full white would pull over
/// 15 A; the combo table scales brightness so the worst case stays under
/// this budget.
pub const MAX_CURRENT: Current = Current::Milliamps(500);

/// User brightness knob, before the current cap is applied.
pub const BRIGHTNESS: u8 = 255;

/// Gamma correction applied on the way out to the strip.
pub const GAMMA: Gamma = Gamma::Gamma2_2;
