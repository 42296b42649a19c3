use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::config::{PanelFrame, VISIBLE_PIXEL_COUNT, WIDTH};
use crate::patterns::Pattern;
use crate::patterns::fx::Xorshift32;

/// Shimmering color noise: every pixel carries a value that drifts by a
/// small random step each frame, so neighbors stay decorrelated but each
/// pixel changes smoothly. Loops forever.
pub struct Noise {
    field: [u8; VISIBLE_PIXEL_COUNT],
    rng: Xorshift32,
}

impl Noise {
    #[must_use]
    pub fn new() -> Self {
        let mut rng = Xorshift32::new(0xd1f_f05e);
        let mut field = [0u8; VISIBLE_PIXEL_COUNT];
        for cell in &mut field {
            *cell = rng.next_u8();
        }
        Self { field, rng }
    }
}

impl Default for Noise {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for Noise {
    fn step(&mut self, frame: &mut PanelFrame) -> bool {
        for (idx, cell) in self.field.iter_mut().enumerate() {
            let step = (self.rng.below(9) as i16) - 4;
            *cell = (*cell as i16).wrapping_add(step) as u8;
            frame[(idx % WIDTH, idx / WIDTH)] = hsv2rgb(Hsv {
                hue: *cell,
                sat: 230,
                val: 180,
            });
        }
        true
    }
}
