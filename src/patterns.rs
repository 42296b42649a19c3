//! The fixed pattern library.
//!
//! Ten animations, each a struct owning only its own state and implementing
//! [`Pattern`]. [`PatternId`] is the stable ordering the mode controller
//! cycles through, and [`ActivePattern`] is the single-slot storage for
//! whichever pattern is currently live.

mod comet;
mod fire;
mod fx;
mod life;
mod noise;
mod plasma;
mod rainbow;
mod ripple;
mod sparkle;
mod waves;
mod wipe;

pub use comet::Comet;
pub use fire::Fire;
pub use life::Life;
pub use noise::Noise;
pub use plasma::Plasma;
pub use rainbow::Rainbow;
pub use ripple::Ripple;
pub use sparkle::Sparkle;
pub use waves::Waves;
pub use wipe::Wipe;

use crate::config::PanelFrame;

/// One animation. Implementations are constructed fresh each time the
/// pattern is selected and dropped the moment it is deselected.
pub trait Pattern {
    /// Render the next frame into `frame`.
    ///
    /// Returns `false` when the animation has run to completion, at which
    /// point the runner drops this instance. Looping patterns always return
    /// `true`.
    fn step(&mut self, frame: &mut PanelFrame) -> bool;
}

/// Identifies one of the ten patterns, in cycle order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PatternId {
    Rainbow,
    Plasma,
    Fire,
    Waves,
    Comet,
    Sparkle,
    Ripple,
    Noise,
    Life,
    Wipe,
}

impl PatternId {
    /// All patterns in cycle order. A short press walks this list.
    pub const ALL: [Self; 10] = [
        Self::Rainbow,
        Self::Plasma,
        Self::Fire,
        Self::Waves,
        Self::Comet,
        Self::Sparkle,
        Self::Ripple,
        Self::Noise,
        Self::Life,
        Self::Wipe,
    ];

    /// Number of patterns in the cycle.
    pub const COUNT: usize = Self::ALL.len();

    /// Look up by cycle position, wrapping.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Human-readable name, for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rainbow => "rainbow",
            Self::Plasma => "plasma",
            Self::Fire => "fire",
            Self::Waves => "waves",
            Self::Comet => "comet",
            Self::Sparkle => "sparkle",
            Self::Ripple => "ripple",
            Self::Noise => "noise",
            Self::Life => "life",
            Self::Wipe => "wipe",
        }
    }

    /// Build a fresh instance of this pattern with its initial state.
    #[must_use]
    pub fn construct(self) -> ActivePattern {
        match self {
            Self::Rainbow => ActivePattern::Rainbow(Rainbow::new()),
            Self::Plasma => ActivePattern::Plasma(Plasma::new()),
            Self::Fire => ActivePattern::Fire(Fire::new()),
            Self::Waves => ActivePattern::Waves(Waves::new()),
            Self::Comet => ActivePattern::Comet(Comet::new()),
            Self::Sparkle => ActivePattern::Sparkle(Sparkle::new()),
            Self::Ripple => ActivePattern::Ripple(Ripple::new()),
            Self::Noise => ActivePattern::Noise(Noise::new()),
            Self::Life => ActivePattern::Life(Life::new()),
            Self::Wipe => ActivePattern::Wipe(Wipe::new()),
        }
    }
}

/// In-place storage for the one live pattern.
///
/// An enum rather than a trait object so no allocator is needed; the slot
/// is as large as the largest pattern's state and lives inside the runner.
pub enum ActivePattern {
    Rainbow(Rainbow),
    Plasma(Plasma),
    Fire(Fire),
    Waves(Waves),
    Comet(Comet),
    Sparkle(Sparkle),
    Ripple(Ripple),
    Noise(Noise),
    Life(Life),
    Wipe(Wipe),
}

impl Pattern for ActivePattern {
    fn step(&mut self, frame: &mut PanelFrame) -> bool {
        match self {
            Self::Rainbow(p) => p.step(frame),
            Self::Plasma(p) => p.step(frame),
            Self::Fire(p) => p.step(frame),
            Self::Waves(p) => p.step(frame),
            Self::Comet(p) => p.step(frame),
            Self::Sparkle(p) => p.step(frame),
            Self::Ripple(p) => p.step(frame),
            Self::Noise(p) => p.step(frame),
            Self::Life(p) => p.step(frame),
            Self::Wipe(p) => p.step(frame),
        }
    }
}
