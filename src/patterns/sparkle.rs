use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::config::{PanelFrame, VISIBLE_PIXEL_COUNT};
use crate::patterns::Pattern;
use crate::patterns::fx::Xorshift32;

const SPAWNS_PER_FRAME: usize = 3;
const FADE: u8 = 18;

/// Random pixels flare up and fade out. Loops forever.
pub struct Sparkle {
    rng: Xorshift32,
}

impl Sparkle {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rng: Xorshift32::new(0x0dd_ba11),
        }
    }
}

impl Default for Sparkle {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for Sparkle {
    fn step(&mut self, frame: &mut PanelFrame) -> bool {
        frame.fade_to_black(FADE);
        for _ in 0..SPAWNS_PER_FRAME {
            let idx = self.rng.below(VISIBLE_PIXEL_COUNT as u32) as usize;
            let hue = self.rng.next_u8();
            // Mostly white flashes with the occasional colored one.
            let sat = if self.rng.next_u8() < 64 { 220 } else { 40 };
            (**frame)[idx] = hsv2rgb(Hsv {
                hue,
                sat,
                val: 255,
            });
        }
        true
    }
}
