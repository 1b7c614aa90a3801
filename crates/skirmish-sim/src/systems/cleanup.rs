//! Cleanup system: removes bullets that left the arena or expired.

use hecs::{Entity, World};

use skirmish_core::components::Bullet;
use skirmish_core::constants::BULLET_LIFETIME_TICKS;
use skirmish_core::types::Position;

use crate::arena::Arena;

/// Despawn bullets that are out of bounds or older than their lifetime.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, arena: &Arena, current_tick: u64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (bullet, pos)) in world.query_mut::<(&Bullet, &Position)>() {
        let out_of_bounds =
            pos.0.x.abs() > arena.half_extent || pos.0.y.abs() > arena.half_extent;
        let expired = current_tick.saturating_sub(bullet.spawn_tick) >= BULLET_LIFETIME_TICKS;
        if out_of_bounds || expired {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
