//! Snapshot builder: collects the visible state into a serializable view.

use std::collections::BTreeMap;

use hecs::World;

use skirmish_core::components::Bullet;
use skirmish_core::events::SimEvent;
use skirmish_core::state::{BulletView, GameStateSnapshot, PlayerView, UnitView};
use skirmish_core::types::{Position, SimTime};

use crate::engine::Player;
use crate::units::Unit;

/// Build the snapshot for the tick that just ran. `events` is the drained
/// event list; ordering follows unit-id order for units and players.
pub fn build(
    world: &World,
    units: &BTreeMap<u32, Box<dyn Unit>>,
    players: &BTreeMap<u32, Player>,
    time: &SimTime,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    let mut unit_views = Vec::with_capacity(units.len());
    let mut sprites = Vec::with_capacity(units.len() * 2);

    for (unit_id, unit) in units {
        let base = unit.base();
        unit_views.push(UnitView {
            unit_id: *unit_id,
            player_id: base.player_id,
            kind: unit.kind(),
            name: unit.name().to_string(),
            position: base.position,
            rotation: base.rotation,
            health: base.health,
        });

        let tint = players
            .get(&base.player_id)
            .map(|p| p.color)
            .unwrap_or([1.0, 1.0, 1.0, 1.0]);
        unit.render(tint, &mut sprites);
    }

    let mut bullet_views = Vec::new();
    for (_entity, (bullet, pos)) in &mut world.query::<(&Bullet, &Position)>() {
        bullet_views.push(BulletView {
            kind: bullet.kind,
            player_id: bullet.player_id,
            position: pos.0,
            rotation: bullet.rotation,
        });
    }

    let player_views = players
        .iter()
        .map(|(player_id, player)| PlayerView {
            player_id: *player_id,
            unit_id: player.unit_id,
            respawn_ticks: player.respawn_timer,
        })
        .collect();

    GameStateSnapshot {
        time: *time,
        units: unit_views,
        bullets: bullet_views,
        players: player_views,
        sprites,
        events,
    }
}
