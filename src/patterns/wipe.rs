use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::config::{PanelFrame, VISIBLE_PIXEL_COUNT};
use crate::patterns::Pattern;

/// A gradient sweep that fills the panel one pixel per frame in scan
/// order. The second finite pattern: it completes when the last pixel is
/// lit, so the runner restarts it from black.
pub struct Wipe {
    pos: usize,
}

impl Wipe {
    #[must_use]
    pub const fn new() -> Self {
        Self { pos: 0 }
    }
}

impl Default for Wipe {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for Wipe {
    fn step(&mut self, frame: &mut PanelFrame) -> bool {
        if self.pos == 0 {
            frame.clear();
        }
        (**frame)[self.pos] = hsv2rgb(Hsv {
            hue: self.pos as u8,
            sat: 255,
            val: 255,
        });
        self.pos += 1;
        self.pos < VISIBLE_PIXEL_COUNT
    }
}
