//! Shared integer-math helpers for the pattern library.
//!
//! Everything here is fixed-point over `u8`/`u16`; no floating point on the
//! render path.

use smart_leds::RGB8;

/// First quadrant of a sine wave, amplitude 0..=255, 64 samples.
const SIN_QUARTER: [u8; 64] = [
    0, 6, 13, 19, 25, 31, 37, 44, 50, 56, 62, 68, 74, 80, 86, 92, 98, 103, 109, 115, 120, 126,
    131, 136, 142, 147, 152, 157, 162, 167, 171, 176, 180, 185, 189, 193, 197, 201, 205, 208, 212,
    215, 219, 222, 225, 228, 231, 233, 236, 238, 240, 242, 244, 246, 247, 249, 250, 251, 252, 253,
    254, 254, 255, 255,
];

/// Sine over one byte of phase: 0..=255 maps to one full turn, output is
/// centered on 128.
#[must_use]
pub const fn sin8(theta: u8) -> u8 {
    let idx = (theta & 0x3f) as usize;
    let mag = match theta >> 6 {
        0 => SIN_QUARTER[idx] as i16,
        1 => SIN_QUARTER[63 - idx] as i16,
        2 => -(SIN_QUARTER[idx] as i16),
        _ => -(SIN_QUARTER[63 - idx] as i16),
    };
    (128 + mag / 2) as u8
}

/// Cosine counterpart of [`sin8`].
#[must_use]
pub const fn cos8(theta: u8) -> u8 {
    sin8(theta.wrapping_add(64))
}

/// Scale `value` by `scale / 256`. The multiply is widened to `u16` first;
/// doing it in `u8` would wrap.
#[must_use]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) >> 8) as u8
}

/// Map a 0..=255 heat level onto a black-red-yellow-white palette.
#[must_use]
pub const fn heat_color(heat: u8) -> RGB8 {
    // Compress to 0..=191 so each third of the palette spans 64 steps.
    let t192 = ((heat as u16 * 191) / 255) as u8;
    let ramp = (t192 & 0x3f) << 2;
    if t192 >= 0x80 {
        RGB8::new(255, 255, ramp)
    } else if t192 >= 0x40 {
        RGB8::new(255, ramp, 0)
    } else {
        RGB8::new(ramp, 0, 0)
    }
}

/// Small xorshift PRNG. Not remotely cryptographic; just cheap and
/// well-distributed enough for sparkles and spawn points.
#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// A zero seed would make the generator emit zero forever, so it is
    /// remapped to an arbitrary odd constant.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9e37_79b9 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Top byte of the next word; the high bits mix fastest.
    pub fn next_u8(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }

    /// Uniform-ish value in `0..bound`. `bound` must be nonzero.
    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sin8_key_points() {
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(64), 255);
        assert_eq!(sin8(128), 128);
        assert!(sin8(192) <= 1);
    }

    #[test]
    fn sin8_never_wraps() {
        // Every phase must land in 0..=255 without i16 overflow.
        for theta in 0..=u8::MAX {
            let _ = sin8(theta);
        }
    }

    #[test]
    fn scale8_bounds() {
        assert_eq!(scale8(255, 255), 254);
        assert_eq!(scale8(255, 0), 0);
        assert_eq!(scale8(0, 255), 0);
        assert_eq!(scale8(128, 128), 64);
    }

    #[test]
    fn heat_color_palette_ends() {
        assert_eq!(heat_color(0), RGB8::new(0, 0, 0));
        let hot = heat_color(255);
        assert_eq!((hot.r, hot.g), (255, 255));
    }

    #[test]
    fn xorshift_zero_seed_is_remapped() {
        let mut rng = Xorshift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn xorshift_below_stays_in_range() {
        let mut rng = Xorshift32::new(1);
        for _ in 0..1000 {
            assert!(rng.below(7) < 7);
        }
    }
}
