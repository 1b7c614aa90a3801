//! Projectile spawn factory.
//!
//! Units queue `BulletSpawn` requests during their update; the engine
//! drains the queue into the hecs world after all units have run, so a
//! unit never tracks the entity it spawned.

use glam::Vec2;
use hecs::{Entity, World};

use skirmish_core::components::Bullet;
use skirmish_core::enums::BulletKind;
use skirmish_core::types::{Position, Velocity};

/// A projectile requested by a unit this tick.
#[derive(Debug, Clone, Copy)]
pub struct BulletSpawn {
    pub kind: BulletKind,
    /// Player owning the shooter; used to suppress friendly fire.
    pub player_id: u32,
    pub position: Vec2,
    pub rotation: f32,
    pub damage_scale: f32,
    pub velocity: Vec2,
}

/// Spawn a bullet entity into the world.
pub fn spawn(world: &mut World, request: BulletSpawn, current_tick: u64) -> Entity {
    tracing::trace!(
        player_id = request.player_id,
        position = ?request.position,
        "bullet spawned"
    );
    world.spawn((
        Bullet {
            kind: request.kind,
            player_id: request.player_id,
            rotation: request.rotation,
            damage_scale: request.damage_scale,
            spawn_tick: current_tick,
        },
        Position(request.position),
        Velocity(request.velocity),
    ))
}
