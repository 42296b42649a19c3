//! Pure coordinate mapping from logical `(x, y)` positions to pixel indices.
//!
//! See [`PixelGrid`] for the mapping contract patterns rely on, and
//! [`Wiring`] for the physical strip order of the panel.

/// Maps logical `(x, y)` coordinates onto a 1D pixel buffer.
///
/// Coordinates use a screen-style convention: `(0, 0)` is the top-left
/// corner, `x` increases to the right, and `y` increases downward.
///
/// Every valid position with `x < W` and `y < H` maps to the unique index
/// `y * W + x`. Every invalid position maps to the same fixed **sink** index,
/// one past the last visible pixel. This makes every read or write through
/// the mapper memory-safe without per-call bounds checks in pattern code, at
/// the cost of silently discarding out-of-range writes: they land on a pixel
/// that is allocated but never displayed.
///
/// The mapping is pure and idempotent; it has no side effects.
///
/// # Example
///
/// ```rust
/// use pattern_panel::mapping::PixelGrid;
///
/// type Grid = PixelGrid<8, 32>;
///
/// const _: () = assert!(Grid::LEN == 257); // 256 visible + 1 sink
/// assert_eq!(Grid::index(7, 31), 255);     // last visible pixel
/// assert_eq!(Grid::index(8, 0), Grid::SINK);
/// assert_eq!(Grid::index(0, 32), Grid::SINK);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PixelGrid<const W: usize, const H: usize>;

impl<const W: usize, const H: usize> PixelGrid<W, H> {
    /// Number of columns in the grid.
    pub const WIDTH: usize = W;
    /// Number of rows in the grid.
    pub const HEIGHT: usize = H;
    /// Number of visibly-driven pixels (W × H).
    pub const VISIBLE: usize = W * H;
    /// The sink index: one past the last visible pixel. All invalid
    /// coordinates map here.
    pub const SINK: usize = W * H;
    /// Total pixel count, including the sink slot.
    pub const LEN: usize = W * H + 1;

    /// Map a logical position to a buffer index.
    ///
    /// Total over all inputs: valid positions map to `y * W + x`, everything
    /// else to [`Self::SINK`].
    #[must_use]
    pub const fn index(x: usize, y: usize) -> usize {
        if x >= W || y >= H {
            Self::SINK
        } else {
            y * W + x
        }
    }

    /// Whether a logical position lies on the visible grid.
    #[must_use]
    pub const fn contains(x: usize, y: usize) -> bool {
        x < W && y < H
    }

    /// Build the physical strip order for the panel's wiring.
    ///
    /// Entry `s` of the result is the logical buffer index whose color is
    /// shipped at strip position `s`. `N` must equal `W * H`; the relation is
    /// checked when the table is built (at compile time in const contexts).
    ///
    /// ```rust
    /// use pattern_panel::mapping::{PixelGrid, Wiring};
    ///
    /// // 3×2 panel, strip snaking down the columns:
    /// //   LED0  LED3  LED4
    /// //   LED1  LED2  LED5
    /// const ORDER: [u16; 6] = PixelGrid::<3, 2>::strip_order(Wiring::SerpentineColumnMajor);
    /// assert_eq!(ORDER, [0, 3, 4, 1, 2, 5]);
    /// ```
    #[must_use]
    pub const fn strip_order<const N: usize>(wiring: Wiring) -> [u16; N] {
        assert!(N == W * H, "N must equal W*H for strip_order");
        assert!(N <= u16::MAX as usize, "pixel count must fit in u16");

        let mut order = [0_u16; N];
        let mut y = 0;
        while y < H {
            let mut x = 0;
            while x < W {
                let strip_index = match wiring {
                    Wiring::RowMajor => y * W + x,
                    Wiring::SerpentineRowMajor => {
                        if y % 2 == 0 {
                            y * W + x
                        } else {
                            y * W + (W - 1 - x)
                        }
                    }
                    Wiring::SerpentineColumnMajor => {
                        if x % 2 == 0 {
                            x * H + y
                        } else {
                            x * H + (H - 1 - y)
                        }
                    }
                };
                order[strip_index] = (y * W + x) as u16;
                x += 1;
            }
            y += 1;
        }
        order
    }
}

/// How the LED strip is threaded through the panel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Wiring {
    /// Strip follows reading order, row by row.
    RowMajor,
    /// Strip alternates left-to-right and right-to-left across rows.
    SerpentineRowMajor,
    /// Strip alternates top-to-bottom and bottom-to-top down columns.
    SerpentineColumnMajor,
}
