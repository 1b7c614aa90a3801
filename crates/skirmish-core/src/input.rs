//! Per-tick player input snapshots.
//!
//! An `InputState` is the complete view of one player's controls for a
//! single tick: four held/not-held directional keys, the fire button, and
//! the aim target in world space. The engine applies queued input at the
//! tick boundary, so a snapshot is stable for the duration of one tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Boolean key states plus aim target for one player, one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    /// Translate forward along the body heading.
    pub move_forward: bool,
    /// Translate backward along the body heading.
    pub move_backward: bool,
    /// Turn the body counterclockwise.
    pub rotate_left: bool,
    /// Turn the body clockwise.
    pub rotate_right: bool,
    /// Fire button held this tick.
    pub fire: bool,
    /// Aim target position in world space (mouse cursor).
    pub aim: Vec2,
}

impl InputState {
    /// True if any translate key is held, independent of whether the
    /// resulting offset cancels to zero.
    pub fn has_move_intent(&self) -> bool {
        self.move_forward || self.move_backward
    }
}
