//! Button-selected animated patterns for WS2812 LED matrix panels.
//!
//! The crate maps logical `(x, y)` coordinates onto a physical pixel buffer
//! ([`mapping`], [`frame`]), reads a single push-button to select or
//! auto-cycle among a fixed set of animated patterns ([`button`], [`mode`]),
//! and runs the selected pattern's per-frame step loop until a mode change is
//! requested ([`runner`], [`patterns`], [`dispatch`]).
//!
//! # Glossary
//!
//! - **Matrix**: the logical W×H grid of addressable positions, some of which
//!   may not correspond to a physically visible LED ("holes").
//! - **Sink pixel**: the designated buffer slot all invalid coordinates map
//!   to; written but never displayed.
//! - **Auto-cycle**: mode in which the active pattern advances automatically
//!   on a fixed timer rather than only on button press.
//! - **Pattern**: one self-contained animation conforming to the
//!   step/construct/destroy contract in [`patterns`].
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]

// Compile-time checks: a board and architecture must be selected unless
// testing with the host feature.
#[cfg(all(not(feature = "pico1"), not(feature = "host")))]
compile_error!("Must enable the 'pico1' board feature (or 'host' for host testing)");

#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the 'arm' architecture feature (or 'host' for host testing)");

pub mod button;
pub mod config;
#[cfg(not(feature = "host"))]
pub mod dispatch;
mod error;
pub mod frame;
pub mod mapping;
pub mod mode;
pub mod patterns;
pub mod runner;
pub mod strip;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
