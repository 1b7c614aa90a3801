//! Kinematic integration for projectiles.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Unit movement does not go through this system; units commit their own
//! positions against the obstacle oracle.

use hecs::World;

use skirmish_core::constants::DT;
use skirmish_core::types::{Position, Velocity};

/// Integrate all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0 * DT;
    }
}
