//! ECS components for hecs entities.
//!
//! Projectiles live in the hecs world; units are trait objects in the
//! engine's registry. Components are plain data structs with no methods.

use serde::{Deserialize, Serialize};

use crate::enums::BulletKind;

/// Marks an entity as a projectile and carries its combat metadata.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub kind: BulletKind,
    /// Owning player; bullets never damage that player's own units.
    pub player_id: u32,
    /// Heading at spawn time (radians), kept for display.
    pub rotation: f32,
    /// Damage multiplier inherited from the shooter.
    pub damage_scale: f32,
    /// Tick at which the bullet was spawned, for lifetime expiry.
    pub spawn_tick: u64,
}
