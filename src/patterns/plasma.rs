use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::config::{HEIGHT, PanelFrame, WIDTH};
use crate::patterns::Pattern;
use crate::patterns::fx::{cos8, sin8};

/// Interfering sine fields, the classic demoscene plasma. Loops forever.
pub struct Plasma {
    tick: u8,
}

impl Plasma {
    #[must_use]
    pub const fn new() -> Self {
        Self { tick: 0 }
    }
}

impl Default for Plasma {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for Plasma {
    fn step(&mut self, frame: &mut PanelFrame) -> bool {
        let t = self.tick;
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let xs = (x as u8).wrapping_mul(24);
                let ys = (y as u8).wrapping_mul(10);
                // Three phase-shifted waves summed in u16, then folded back
                // to a hue byte.
                let sum = sin8(xs.wrapping_add(t)) as u16
                    + sin8(ys.wrapping_sub(t.wrapping_mul(2))) as u16
                    + cos8(xs.wrapping_add(ys).wrapping_add(t)) as u16;
                let hue = (sum / 3) as u8;
                frame[(x, y)] = hsv2rgb(Hsv {
                    hue,
                    sat: 255,
                    val: 220,
                });
            }
        }
        self.tick = self.tick.wrapping_add(1);
        true
    }
}
