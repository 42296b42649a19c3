//! The WS2812 output stage: gamma correction, current limiting, wiring
//! reorder, and the PIO driver.
//!
//! The color math (gamma tables, the combined lookup table, the current
//! budget) is plain `const` code and testable on the host. Only
//! [`PanelStrip`] itself touches hardware.

// ============================================================================
// Gamma Correction
// ============================================================================

/// Gamma correction mode for the panel output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Gamma {
    /// Linear gamma (no correction). Gamma = 1.0
    Linear,
    /// Standard gamma 2.2 correction for perceived brightness.
    Gamma2_2,
}

impl Default for Gamma {
    fn default() -> Self {
        Self::Gamma2_2
    }
}

/// Gamma 2.2 lookup table for 8-bit values.
/// Pre-computed to avoid floating point math: corrected = (value/255)^2.2 * 255
const GAMMA_2_2_TABLE: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 6, 6, 6, 6, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 11, 11,
    11, 12, 12, 13, 13, 13, 14, 14, 15, 15, 16, 16, 17, 17, 18, 18, 19, 19, 20, 20, 21, 22, 22, 23,
    23, 24, 25, 25, 26, 26, 27, 28, 28, 29, 30, 30, 31, 32, 33, 33, 34, 35, 35, 36, 37, 38, 39, 39,
    40, 41, 42, 43, 43, 44, 45, 46, 47, 48, 49, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61,
    62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 73, 74, 75, 76, 77, 78, 79, 81, 82, 83, 84, 85, 87, 88,
    89, 90, 91, 93, 94, 95, 97, 98, 99, 100, 102, 103, 105, 106, 107, 109, 110, 111, 113, 114, 116,
    117, 119, 120, 121, 123, 124, 126, 127, 129, 130, 132, 133, 135, 137, 138, 140, 141, 143, 145,
    146, 148, 149, 151, 153, 154, 156, 158, 159, 161, 163, 165, 166, 168, 170, 172, 173, 175, 177,
    179, 181, 182, 184, 186, 188, 190, 192, 194, 196, 197, 199, 201, 203, 205, 207, 209, 211, 213,
    215, 217, 219, 221, 223, 225, 227, 229, 231, 234, 236, 238, 240, 242, 244, 246, 248, 251, 253,
    255,
];

/// Identity table so `Gamma::Linear` goes through the same lookup path.
const LINEAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut index = 0;
    while index < 256 {
        table[index] = index as u8;
        index += 1;
    }
    table
};

/// Generate a combined gamma correction and brightness scaling lookup table.
///
/// This combines two operations into a single table lookup:
/// 1. Apply gamma correction based on the `gamma` parameter
/// 2. Scale by `max_brightness` for current limiting
///
/// The result is a table where `combo_table[input_value]` gives the final output value.
#[must_use]
pub const fn generate_combo_table(gamma: Gamma, max_brightness: u8) -> [u8; 256] {
    let gamma_table = match gamma {
        Gamma::Linear => &LINEAR_TABLE,
        Gamma::Gamma2_2 => &GAMMA_2_2_TABLE,
    };

    let mut result = [0u8; 256];
    let mut index = 0;
    while index < 256 {
        let gamma_corrected = gamma_table[index];
        // Apply brightness scaling: (value * brightness) / 255
        let scaled = ((gamma_corrected as u16 * max_brightness as u16) / 255) as u8;
        result[index] = scaled;
        index += 1;
    }
    result
}

// ============================================================================
// Current Budget
// ============================================================================

/// Power budget for the panel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Current {
    /// Limit brightness to stay within a specific milliamp budget.
    ///
    /// The maximum brightness is calculated so the worst case (every LED at
    /// full white, ~60 mA each) does not exceed this limit.
    Milliamps(u16),
    /// No limit. Brightness stays at 100%, subject to whatever the supply
    /// can actually deliver.
    Unlimited,
}

impl Default for Current {
    fn default() -> Self {
        Self::Milliamps(250)
    }
}

impl Current {
    /// Calculate maximum brightness based on current budget and worst-case current draw.
    ///
    /// Returns 255 (full brightness) for Unlimited, or a scaled value for Milliamps.
    #[must_use]
    pub const fn max_brightness(self, worst_case_ma: u32) -> u8 {
        assert!(worst_case_ma > 0, "worst_case_ma must be positive");
        match self {
            Self::Milliamps(ma) => {
                let scale = (ma as u32 * 255) / worst_case_ma;
                if scale > 255 { 255 } else { scale as u8 }
            }
            Self::Unlimited => 255,
        }
    }
}

const fn min_u8(a: u8, b: u8) -> u8 {
    if a < b { a } else { b }
}

/// Output brightness after the user knob and the current cap are combined.
#[must_use]
pub const fn effective_brightness(knob: u8, max_current: Current, worst_case_ma: u32) -> u8 {
    min_u8(knob, max_current.max_brightness(worst_case_ma))
}

// ============================================================================
// PanelStrip - PIO driver
// ============================================================================

#[cfg(not(feature = "host"))]
mod driver {
    use embassy_rp::bind_interrupts;
    use embassy_rp::peripherals::PIO0;
    use embassy_rp::pio::{InterruptHandler, Pio, PioPin};
    use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
    use embassy_rp::{Peri, dma};
    use smart_leds::RGB8;

    use super::{effective_brightness, generate_combo_table};
    use crate::config::{
        BRIGHTNESS, GAMMA, MAX_CURRENT, PanelFrame, PanelGrid, VISIBLE_PIXEL_COUNT, WIRING,
    };

    bind_interrupts!(struct Irqs {
        PIO0_IRQ_0 => InterruptHandler<PIO0>;
    });

    // Each WS2812B LED draws ~60 mA at full white.
    const WORST_CASE_MA: u32 = VISIBLE_PIXEL_COUNT as u32 * 60;

    /// The physical panel: a WS2812 chain on PIO0, fed over DMA.
    ///
    /// [`show`](Self::show) takes a logical row-major frame and handles the
    /// rest: gamma and brightness via one table lookup per channel, then the
    /// serpentine reorder into strip position.
    pub struct PanelStrip<'d> {
        driver: PioWs2812<'d, PIO0, 0, VISIBLE_PIXEL_COUNT>,
        out: [RGB8; VISIBLE_PIXEL_COUNT],
    }

    impl<'d> PanelStrip<'d> {
        const COMBO_TABLE: [u8; 256] = generate_combo_table(
            GAMMA,
            effective_brightness(BRIGHTNESS, MAX_CURRENT, WORST_CASE_MA),
        );
        const ORDER: [u16; VISIBLE_PIXEL_COUNT] = PanelGrid::strip_order(WIRING);

        /// Claims PIO0's first state machine and one DMA channel for the
        /// panel on `data_pin`.
        #[must_use]
        pub fn new(
            pio: Peri<'d, PIO0>,
            data_pin: Peri<'d, impl PioPin>,
            dma: Peri<'d, impl dma::Channel>,
        ) -> Self {
            let Pio {
                mut common, sm0, ..
            } = Pio::new(pio, Irqs);
            let program = PioWs2812Program::new(&mut common);
            let driver = PioWs2812::new(&mut common, sm0, dma, data_pin, &program);
            Self {
                driver,
                out: [RGB8::new(0, 0, 0); VISIBLE_PIXEL_COUNT],
            }
        }

        /// Push one frame to the panel. Returns once the DMA transfer and
        /// the WS2812 latch delay have finished.
        pub async fn show(&mut self, frame: &PanelFrame) {
            let visible = frame.visible();
            for (slot, &logical) in self.out.iter_mut().zip(Self::ORDER.iter()) {
                let color = visible[logical as usize];
                *slot = RGB8::new(
                    Self::COMBO_TABLE[color.r as usize],
                    Self::COMBO_TABLE[color.g as usize],
                    Self::COMBO_TABLE[color.b as usize],
                );
            }
            self.driver.write(&self.out).await;
        }
    }
}

#[cfg(not(feature = "host"))]
pub use driver::PanelStrip;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combo_table_is_monotonic() {
        let table = generate_combo_table(Gamma::Gamma2_2, 255);
        for pair in table.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(table[0], 0);
        assert_eq!(table[255], 255);
    }

    #[test]
    fn combo_table_scales_by_brightness() {
        let half = generate_combo_table(Gamma::Linear, 128);
        assert_eq!(half[255], 128);
        assert_eq!(half[0], 0);
    }

    #[test]
    fn current_budget_caps_brightness() {
        // 256 LEDs * 60 mA = 15360 mA worst case; a 500 mA budget caps
        // brightness at 500/15360 of full scale.
        let cap = Current::Milliamps(500).max_brightness(256 * 60);
        assert_eq!(cap, (500u32 * 255 / 15360) as u8);
        assert_eq!(Current::Unlimited.max_brightness(256 * 60), 255);
    }

    #[test]
    fn effective_brightness_takes_the_smaller() {
        assert_eq!(effective_brightness(10, Current::Unlimited, 100), 10);
        assert_eq!(
            effective_brightness(255, Current::Milliamps(500), 256 * 60),
            Current::Milliamps(500).max_brightness(256 * 60)
        );
    }
}
