//! Pattern lifecycle: exactly one pattern instance exists at a time.
//!
//! [`PatternRunner`] holds the selected [`PatternId`] and a single slot for
//! the live instance. Selection tears the old instance down on the spot;
//! the replacement is not built until the next frame actually needs it, so
//! two pattern states never coexist.

use crate::config::PanelFrame;
use crate::patterns::{ActivePattern, Pattern, PatternId};

/// Owns the one live pattern and drives it a frame at a time.
pub struct PatternRunner {
    id: PatternId,
    active: Option<ActivePattern>,
}

impl PatternRunner {
    /// Starts on the first pattern in the cycle, with nothing constructed
    /// yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            id: PatternId::from_index(0),
            active: None,
        }
    }

    /// The currently selected pattern.
    #[must_use]
    pub const fn current(&self) -> PatternId {
        self.id
    }

    /// Whether an instance is live right now (between construction and the
    /// next teardown).
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.active.is_some()
    }

    /// Switch to `id`. If it differs from the current selection the live
    /// instance is dropped immediately; selecting the already-current
    /// pattern leaves its state untouched.
    pub fn select(&mut self, id: PatternId) {
        if id != self.id {
            self.active = None;
            self.id = id;
        }
    }

    /// Render one frame, constructing the pattern first if the slot is
    /// empty. When the pattern reports completion its instance is dropped,
    /// so the next frame restarts the same pattern from its initial state.
    pub fn step_frame(&mut self, frame: &mut PanelFrame) -> bool {
        let id = self.id;
        let active = self.active.get_or_insert_with(|| id.construct());
        let keep_going = active.step(frame);
        if !keep_going {
            self.active = None;
        }
        keep_going
    }
}

impl Default for PatternRunner {
    fn default() -> Self {
        Self::new()
    }
}
