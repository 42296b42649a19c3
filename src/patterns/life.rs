use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::config::{HEIGHT, PanelFrame, VISIBLE_PIXEL_COUNT, WIDTH};
use crate::patterns::Pattern;
use crate::patterns::fx::Xorshift32;

/// Frames per generation, to slow the simulation to a watchable pace.
const GEN_INTERVAL: u32 = 6;
/// Hard stop so a long-lived soup still finishes eventually.
const MAX_GENERATIONS: u32 = 400;
/// Initial fill density out of 255.
const SEED_DENSITY: u8 = 90;

/// Conway's Game of Life on a torus. One of the two finite patterns: it
/// reports completion when the colony dies out, settles into a still life
/// or a period-2 oscillation, or hits the generation cap.
pub struct Life {
    cells: [bool; VISIBLE_PIXEL_COUNT],
    prev: [bool; VISIBLE_PIXEL_COUNT],
    prev2: [bool; VISIBLE_PIXEL_COUNT],
    frames: u32,
    generation: u32,
}

impl Life {
    #[must_use]
    pub fn new() -> Self {
        let mut rng = Xorshift32::new(0xace0_f11f);
        let mut cells = [false; VISIBLE_PIXEL_COUNT];
        for cell in &mut cells {
            *cell = rng.next_u8() < SEED_DENSITY;
        }
        Self {
            cells,
            prev: [false; VISIBLE_PIXEL_COUNT],
            prev2: [false; VISIBLE_PIXEL_COUNT],
            frames: 0,
            generation: 0,
        }
    }

    fn live_neighbors(cells: &[bool; VISIBLE_PIXEL_COUNT], x: usize, y: usize) -> u8 {
        let mut count = 0;
        for dy in [HEIGHT - 1, 0, 1] {
            for dx in [WIDTH - 1, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = (x + dx) % WIDTH;
                let ny = (y + dy) % HEIGHT;
                if cells[ny * WIDTH + nx] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advance one generation. Returns `false` once the colony is extinct,
    /// repeating with period 1 or 2, or past the generation cap.
    fn advance(&mut self) -> bool {
        let mut next = [false; VISIBLE_PIXEL_COUNT];
        let mut alive = 0usize;
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let neighbors = Self::live_neighbors(&self.cells, x, y);
                let live = if self.cells[y * WIDTH + x] {
                    neighbors == 2 || neighbors == 3
                } else {
                    neighbors == 3
                };
                next[y * WIDTH + x] = live;
                alive += live as usize;
            }
        }
        self.prev2 = self.prev;
        self.prev = self.cells;
        self.cells = next;
        self.generation += 1;

        alive > 0
            && self.cells != self.prev
            && self.cells != self.prev2
            && self.generation < MAX_GENERATIONS
    }
}

impl Default for Life {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for Life {
    fn step(&mut self, frame: &mut PanelFrame) -> bool {
        let mut keep_going = true;
        if self.frames % GEN_INTERVAL == 0 {
            keep_going = self.advance();
        }
        self.frames += 1;

        frame.clear();
        // Hue drifts slowly so successive colonies read differently.
        let hue = (self.generation / 4) as u8;
        let color = hsv2rgb(Hsv {
            hue: hue.wrapping_add(96),
            sat: 200,
            val: 255,
        });
        for (idx, &alive) in self.cells.iter().enumerate() {
            if alive {
                frame[(idx % WIDTH, idx / WIDTH)] = color;
            }
        }
        keep_going
    }
}
