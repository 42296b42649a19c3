use crate::config::{HEIGHT, PanelFrame, VISIBLE_PIXEL_COUNT, WIDTH};
use crate::patterns::Pattern;
use crate::patterns::fx::{Xorshift32, heat_color};

/// Per-cell chance of cooling, tuned for a 32-row panel.
const COOLING: u32 = 18;
/// Per-column spark chance out of 255, per frame.
const SPARKING: u8 = 110;

/// Simulated flames: heat diffuses upward per column, sparks feed the
/// bottom row. Loops forever.
pub struct Fire {
    /// Heat field, row-major, base row at the bottom of the panel.
    heat: [u8; VISIBLE_PIXEL_COUNT],
    rng: Xorshift32,
}

impl Fire {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            heat: [0; VISIBLE_PIXEL_COUNT],
            rng: Xorshift32::new(0x5ee_df17e),
        }
    }
}

impl Default for Fire {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for Fire {
    fn step(&mut self, frame: &mut PanelFrame) -> bool {
        // Cool every cell a little.
        for cell in &mut self.heat {
            let loss = self.rng.below(COOLING) as u8;
            *cell = cell.saturating_sub(loss);
        }

        // Heat rises: each cell averages the two cells below it. Scanning
        // top-down reads rows that have not been overwritten yet.
        for y in 0..HEIGHT - 2 {
            for x in 0..WIDTH {
                let below = self.heat[(y + 1) * WIDTH + x] as u16;
                let lower = self.heat[(y + 2) * WIDTH + x] as u16;
                self.heat[y * WIDTH + x] = ((below * 2 + lower) / 3) as u8;
            }
        }

        // New sparks at the base.
        for x in 0..WIDTH {
            if self.rng.next_u8() < SPARKING {
                let idx = (HEIGHT - 1) * WIDTH + x;
                let boost = 160 + self.rng.below(96) as u8;
                self.heat[idx] = self.heat[idx].saturating_add(boost);
            }
        }

        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                frame[(x, y)] = heat_color(self.heat[y * WIDTH + x]);
            }
        }
        true
    }
}
