//! An 8x32 WS2812 panel cycling through the pattern library, with a single
//! push-button for mode selection.
//!
//! Wiring: panel data on GPIO 6, button between GPIO 13 and ground.
//!
//! Controls:
//! - short press: next pattern, auto-cycle off
//! - hold half a second and release: pattern 0, auto-cycle on

#![allow(missing_docs)]
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};

use embassy_executor::Spawner;
use pattern_panel::button::Button;
use pattern_panel::config::PRESSED_TO;
use pattern_panel::strip::PanelStrip;
use pattern_panel::{Result, dispatch};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let button = Button::new(p.PIN_13, PRESSED_TO);
    let strip = PanelStrip::new(p.PIO0, p.PIN_6, p.DMA_CH0);

    dispatch::spawn(spawner, button, strip)?;
    core::future::pending().await // run forever
}
