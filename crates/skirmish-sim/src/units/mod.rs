//! Controllable combat units.
//!
//! Units are trait objects in the engine's registry, dispatched over the
//! capability set {render, update, is_hit, name, author}. Concrete kinds
//! hold a `UnitBase` for the state every unit shares.

use glam::Vec2;

use skirmish_core::constants::UNIT_MAX_HEALTH;
use skirmish_core::enums::UnitKind;
use skirmish_core::events::SimEvent;
use skirmish_core::input::InputState;
use skirmish_core::state::SpriteInstance;
use skirmish_core::types::world_to_local;

use crate::arena::Arena;
use crate::bullets::BulletSpawn;

pub mod soldier;

pub use soldier::Soldier;

/// State common to every unit kind.
#[derive(Debug, Clone)]
pub struct UnitBase {
    pub id: u32,
    pub player_id: u32,
    pub position: Vec2,
    /// Body heading in radians.
    pub rotation: f32,
    pub health: f32,
    /// Movement/turn rate multiplier (buff hook), default 1.0.
    pub speed_scale: f32,
    /// Damage multiplier applied to spawned projectiles, default 1.0.
    pub damage_scale: f32,
}

impl UnitBase {
    pub fn new(id: u32, player_id: u32) -> Self {
        Self {
            id,
            player_id,
            position: Vec2::ZERO,
            rotation: 0.0,
            health: UNIT_MAX_HEALTH,
            speed_scale: 1.0,
            damage_scale: 1.0,
        }
    }

    /// Transform a world point into this unit's local frame.
    pub fn world_to_local(&self, point: Vec2) -> Vec2 {
        world_to_local(point, self.position, self.rotation)
    }
}

/// Everything a unit may touch during its per-tick update.
///
/// `input` is `None` when the owning player is absent (disconnected); the
/// unit stays frozen for that tick. All cross-unit effects go through the
/// event list or the bullet spawn queue; units never mutate shared state
/// directly.
pub struct TickContext<'a> {
    pub input: Option<InputState>,
    /// Obstacle oracle for movement candidates.
    pub arena: &'a Arena,
    /// One-way notifications drained into the tick's snapshot.
    pub events: &'a mut Vec<SimEvent>,
    /// Projectile factory queue, flushed after all units have updated.
    pub bullets: &'a mut Vec<BulletSpawn>,
}

/// A controllable unit. The engine calls `update` exactly once per tick.
pub trait Unit {
    fn base(&self) -> &UnitBase;
    fn base_mut(&mut self) -> &mut UnitBase;
    fn kind(&self) -> UnitKind;

    /// Run one simulation tick.
    fn update(&mut self, ctx: &mut TickContext);

    /// Push this unit's draw list for the current frame.
    fn render(&self, tint: [f32; 4], out: &mut Vec<SpriteInstance>);

    /// True if a world-space point falls inside the unit's body footprint.
    fn is_hit(&self, world_point: Vec2) -> bool;

    fn name(&self) -> &'static str;
    fn author(&self) -> &'static str;
}
