//! The shared pixel buffer all patterns render into.
//!
//! See [`PixelBuffer`]. Indexing with a `(x, y)` tuple goes through the
//! coordinate mapper in [`crate::mapping`], so out-of-range positions land on
//! the sink slot instead of panicking.

use core::convert::Infallible;
use core::ops::{Deref, DerefMut, Index, IndexMut};

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{OriginDimensions, Pixel, RgbColor, Size};
use smart_leds::RGB8;

use crate::mapping::PixelGrid;

/// Convert RGB8 (smart-leds) to Rgb888 (embedded-graphics).
#[must_use]
pub const fn rgb8_to_rgb888(color: RGB8) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

/// Convert Rgb888 (embedded-graphics) to RGB8 (smart-leds).
#[must_use]
pub fn rgb888_to_rgb8(color: Rgb888) -> RGB8 {
    RGB8::new(color.r(), color.g(), color.b())
}

/// Fixed-size pixel buffer for a W×H matrix plus one sink slot.
///
/// `LEN` must equal `W * H + 1`; the extra slot is the sink pixel that
/// absorbs writes to invalid coordinates. The buffer is allocated once at
/// startup, written by whichever pattern is currently active, and read by the
/// output driver once per frame.
///
/// Pixels are addressed with tuple indexing: `frame[(x, y)]` is the pixel at
/// display coordinates `(x, y)`, and never panics: invalid coordinates
/// resolve to the sink slot.
///
/// For custom graphics the buffer also implements the
/// [`embedded-graphics`](https://docs.rs/embedded-graphics) `DrawTarget`
/// API.
///
/// # Example
///
/// ```rust
/// use pattern_panel::frame::PixelBuffer;
/// use smart_leds::colors;
///
/// type Frame = PixelBuffer<257, 8, 32>;
///
/// let mut frame = Frame::new();
/// frame[(0, 0)] = colors::CYAN;
/// frame[(8, 0)] = colors::RED; // off-grid: lands on the sink, not displayed
///
/// assert_eq!(frame.visible()[0], colors::CYAN);
/// assert_eq!(frame.sink(), colors::RED);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PixelBuffer<const LEN: usize, const W: usize, const H: usize>([RGB8; LEN]);

impl<const LEN: usize, const W: usize, const H: usize> PixelBuffer<LEN, W, H> {
    /// Buffer width in pixels (columns).
    pub const WIDTH: usize = W;
    /// Buffer height in pixels (rows).
    pub const HEIGHT: usize = H;
    /// Total pixel count, including the sink slot.
    pub const LEN: usize = LEN;

    /// Create a new blank (all black) buffer.
    #[must_use]
    pub const fn new() -> Self {
        assert!(LEN == W * H + 1, "LEN must equal W*H plus the sink slot");
        Self([RGB8::new(0, 0, 0); LEN])
    }

    /// Create a buffer with every visible pixel set to a single color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        assert!(LEN == W * H + 1, "LEN must equal W*H plus the sink slot");
        Self([color; LEN])
    }

    /// The visibly-driven pixels, in logical row-major order.
    #[must_use]
    pub fn visible(&self) -> &[RGB8] {
        &self.0[..PixelGrid::<W, H>::VISIBLE]
    }

    /// Current contents of the sink slot. Written but never displayed.
    #[must_use]
    pub fn sink(&self) -> RGB8 {
        self.0[PixelGrid::<W, H>::SINK]
    }

    /// Set every pixel (including the sink) to black.
    pub fn clear(&mut self) {
        self.0 = [RGB8::new(0, 0, 0); LEN];
    }

    /// Scale every pixel toward black by `amount` (0 = no change, 255 = black).
    pub fn fade_to_black(&mut self, amount: u8) {
        let keep = 255 - amount as u16;
        for pixel in &mut self.0 {
            pixel.r = ((pixel.r as u16 * keep) >> 8) as u8;
            pixel.g = ((pixel.g as u16 * keep) >> 8) as u8;
            pixel.b = ((pixel.b as u16 * keep) >> 8) as u8;
        }
    }
}

impl<const LEN: usize, const W: usize, const H: usize> Deref for PixelBuffer<LEN, W, H> {
    type Target = [RGB8; LEN];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const LEN: usize, const W: usize, const H: usize> DerefMut for PixelBuffer<LEN, W, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const LEN: usize, const W: usize, const H: usize> Index<(usize, usize)>
    for PixelBuffer<LEN, W, H>
{
    type Output = RGB8;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.0[PixelGrid::<W, H>::index(x, y)]
    }
}

impl<const LEN: usize, const W: usize, const H: usize> IndexMut<(usize, usize)>
    for PixelBuffer<LEN, W, H>
{
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        &mut self.0[PixelGrid::<W, H>::index(x, y)]
    }
}

impl<const LEN: usize, const W: usize, const H: usize> Default for PixelBuffer<LEN, W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const LEN: usize, const W: usize, const H: usize> OriginDimensions for PixelBuffer<LEN, W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const LEN: usize, const W: usize, const H: usize> DrawTarget for PixelBuffer<LEN, W, H> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x >= 0 && coord.y >= 0 {
                // The mapper redirects anything past (W-1, H-1) to the sink.
                self[(coord.x as usize, coord.y as usize)] = rgb888_to_rgb8(color);
            }
        }
        Ok(())
    }
}
