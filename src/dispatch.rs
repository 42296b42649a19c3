//! The outer loop that ties the pieces together.
//!
//! One cooperative loop, one frame per iteration, in a fixed order: sample
//! the button, evaluate mode selection, render, push to the strip, sleep
//! until the next frame. Button events are always evaluated before the
//! auto-cycle timer within a single iteration, so a press that lands on a
//! timer boundary wins.

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};

use crate::button::Button;
use crate::config::{FRAME_INTERVAL, PATTERN_TIME, PanelFrame};
use crate::mode::ModeController;
use crate::patterns::PatternId;
use crate::runner::PatternRunner;
use crate::strip::PanelStrip;
use crate::{Error, Result};

/// Spawn the panel loop onto the executor.
///
/// # Errors
///
/// Returns [`Error::TaskSpawn`] if the executor's task slot is taken.
pub fn spawn(spawner: Spawner, button: Button<'static>, strip: PanelStrip<'static>) -> Result<()> {
    spawner
        .spawn(panel_task(button, strip))
        .map_err(|_| Error::TaskSpawn)
}

#[embassy_executor::task]
async fn panel_task(button: Button<'static>, strip: PanelStrip<'static>) -> ! {
    run(button, strip).await
}

/// Drive the panel forever.
pub async fn run(mut button: Button<'_>, mut strip: PanelStrip<'_>) -> ! {
    let mut mode = ModeController::new(Instant::now(), PATTERN_TIME);
    let mut runner = PatternRunner::new();
    let mut frame = PanelFrame::new();

    info!(
        "panel loop started: {} patterns, showing {}",
        PatternId::COUNT,
        runner.current().name()
    );

    loop {
        button.poll();
        if mode.poll(button.state(), Instant::now()) {
            let id = PatternId::from_index(mode.index());
            runner.select(id);
            info!("pattern -> {} (auto-cycle {})", id.name(), mode.auto_cycle());
        }
        if !runner.step_frame(&mut frame) {
            info!("{} ran to completion, restarting", runner.current().name());
        }
        strip.show(&frame).await;
        Timer::after(FRAME_INTERVAL).await;
    }
}
