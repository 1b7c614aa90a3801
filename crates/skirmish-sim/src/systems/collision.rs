//! Projectile-vs-unit collision.
//!
//! Each bullet is a point; a hit is decided by the target unit's own
//! `is_hit` test. Bullets never damage units owned by the shooter's
//! player. A bullet is consumed by its first hit.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use skirmish_core::components::Bullet;
use skirmish_core::constants::CANNONBALL_DAMAGE;
use skirmish_core::events::SimEvent;
use skirmish_core::types::Position;

use crate::units::Unit;

/// Run collision for all bullets. Returns the ids of units whose health
/// reached zero this tick.
pub fn run(
    world: &mut World,
    units: &mut BTreeMap<u32, Box<dyn Unit>>,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> Vec<u32> {
    despawn_buffer.clear();
    let mut destroyed = Vec::new();

    for (entity, (bullet, pos)) in world.query_mut::<(&Bullet, &Position)>() {
        for (unit_id, unit) in units.iter_mut() {
            if unit.base().player_id == bullet.player_id {
                continue;
            }
            if !unit.is_hit(pos.0) {
                continue;
            }

            let amount = CANNONBALL_DAMAGE * bullet.damage_scale;
            let base = unit.base_mut();
            base.health -= amount;
            events.push(SimEvent::UnitDamaged {
                unit_id: *unit_id,
                amount,
            });
            if base.health <= 0.0 && !destroyed.contains(unit_id) {
                destroyed.push(*unit_id);
            }

            despawn_buffer.push(entity);
            break;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    destroyed
}
