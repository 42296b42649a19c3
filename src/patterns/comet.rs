use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::config::{PanelFrame, VISIBLE_PIXEL_COUNT};
use crate::patterns::Pattern;

/// How much of the trail survives each frame (out of 255 faded away).
const TRAIL_FADE: u8 = 40;

/// A bright head racing through the panel in scan order, dragging a
/// decaying trail. The hue shifts a little every lap. Loops forever.
pub struct Comet {
    pos: usize,
    hue: u8,
}

impl Comet {
    #[must_use]
    pub const fn new() -> Self {
        Self { pos: 0, hue: 0 }
    }
}

impl Default for Comet {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for Comet {
    fn step(&mut self, frame: &mut PanelFrame) -> bool {
        frame.fade_to_black(TRAIL_FADE);
        (**frame)[self.pos] = hsv2rgb(Hsv {
            hue: self.hue,
            sat: 160,
            val: 255,
        });
        self.pos += 1;
        if self.pos == VISIBLE_PIXEL_COUNT {
            self.pos = 0;
            self.hue = self.hue.wrapping_add(24);
        }
        true
    }
}
