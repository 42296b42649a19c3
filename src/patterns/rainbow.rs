use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::config::{HEIGHT, PanelFrame, WIDTH};
use crate::patterns::Pattern;

/// A diagonal rainbow sheet scrolling across the panel. Loops forever.
pub struct Rainbow {
    tick: u8,
}

impl Rainbow {
    #[must_use]
    pub const fn new() -> Self {
        Self { tick: 0 }
    }
}

impl Default for Rainbow {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for Rainbow {
    fn step(&mut self, frame: &mut PanelFrame) -> bool {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let hue = self
                    .tick
                    .wrapping_add((x as u8).wrapping_mul(8))
                    .wrapping_add((y as u8).wrapping_mul(4));
                frame[(x, y)] = hsv2rgb(Hsv {
                    hue,
                    sat: 255,
                    val: 255,
                });
            }
        }
        self.tick = self.tick.wrapping_add(2);
        true
    }
}
