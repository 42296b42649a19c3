use smart_leds::RGB8;

use crate::config::{HEIGHT, PanelFrame, WIDTH};
use crate::patterns::Pattern;
use crate::patterns::fx::{scale8, sin8};

/// Two overlapping ocean swells in blues and cyans. Loops forever.
pub struct Waves {
    tick: u8,
}

impl Waves {
    #[must_use]
    pub const fn new() -> Self {
        Self { tick: 0 }
    }
}

impl Default for Waves {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for Waves {
    fn step(&mut self, frame: &mut PanelFrame) -> bool {
        let t = self.tick;
        for y in 0..HEIGHT {
            let swell = sin8((y as u8).wrapping_mul(8).wrapping_add(t));
            for x in 0..WIDTH {
                let chop = sin8(
                    (x as u8)
                        .wrapping_mul(32)
                        .wrapping_add((y as u8).wrapping_mul(4))
                        .wrapping_sub(t.wrapping_mul(2)),
                );
                let level = scale8(swell, chop).max(20);
                frame[(x, y)] = RGB8::new(0, scale8(level, 110), level);
            }
        }
        self.tick = self.tick.wrapping_add(1);
        true
    }
}
