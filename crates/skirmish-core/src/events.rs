//! Events emitted by the simulation for state propagation and UI feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One-way notifications drained into each tick's snapshot.
///
/// Move and rotate notifications mirror the state the unit already
/// committed locally; consumers (replication, display) treat them as
/// fire-and-forget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A unit committed a new position this tick.
    UnitMoved { unit_id: u32, position: Vec2 },
    /// A unit's body heading after this tick's rotation input.
    /// Emitted every tick the unit is driven, even on a zero delta.
    UnitRotated { unit_id: u32, rotation: f32 },
    /// A unit entered the world.
    UnitSpawned {
        unit_id: u32,
        player_id: u32,
        position: Vec2,
    },
    /// A projectile hit a unit.
    UnitDamaged { unit_id: u32, amount: f32 },
    /// A unit's health reached zero and it was removed.
    UnitDestroyed { unit_id: u32 },
}
