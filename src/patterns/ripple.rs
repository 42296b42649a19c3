use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use heapless::Vec;
use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::config::{HEIGHT, PanelFrame, WIDTH};
use crate::frame::rgb8_to_rgb888;
use crate::patterns::Pattern;
use crate::patterns::fx::Xorshift32;

const MAX_RINGS: usize = 4;
/// Rings die once they could no longer touch the panel.
const MAX_RADIUS: i32 = 36;
/// Spawn chance per frame when a slot is free, out of 255.
const SPAWN_CHANCE: u8 = 28;

struct Ring {
    cx: i32,
    cy: i32,
    radius: i32,
    hue: u8,
}

/// Expanding rings from random drop points, like rain on water. Drawn as
/// circle outlines that dim as they grow. Loops forever.
pub struct Ripple {
    rings: Vec<Ring, MAX_RINGS>,
    rng: Xorshift32,
}

impl Ripple {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rings: Vec::new(),
            rng: Xorshift32::new(0x1ab_efae),
        }
    }
}

impl Default for Ripple {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for Ripple {
    fn step(&mut self, frame: &mut PanelFrame) -> bool {
        frame.fade_to_black(60);

        if !self.rings.is_full() && self.rng.next_u8() < SPAWN_CHANCE {
            let ring = Ring {
                cx: self.rng.below(WIDTH as u32) as i32,
                cy: self.rng.below(HEIGHT as u32) as i32,
                radius: 0,
                hue: self.rng.next_u8(),
            };
            // Push cannot fail, fullness was just checked.
            let _ = self.rings.push(ring);
        }

        for ring in &mut self.rings {
            let val = 255u32.saturating_sub(ring.radius as u32 * 6) as u8;
            let color = rgb8_to_rgb888(hsv2rgb(Hsv {
                hue: ring.hue,
                sat: 200,
                val,
            }));
            Circle::new(
                Point::new(ring.cx - ring.radius, ring.cy - ring.radius),
                (ring.radius * 2 + 1) as u32,
            )
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(frame)
            .expect("drawing into frame cannot fail");
            ring.radius += 1;
        }
        self.rings.retain(|ring| ring.radius <= MAX_RADIUS);

        true
    }
}
