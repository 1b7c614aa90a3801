//! Game state snapshot: the complete visible state produced each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{BulletKind, UnitKind};
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete game state emitted after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub units: Vec<UnitView>,
    pub bullets: Vec<BulletView>,
    pub players: Vec<PlayerView>,
    /// Draw list for the frame, built from each unit's render capability.
    pub sprites: Vec<SpriteInstance>,
    /// Events emitted during this tick, in emission order.
    pub events: Vec<SimEvent>,
}

/// A visible unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub unit_id: u32,
    pub player_id: u32,
    pub kind: UnitKind,
    pub name: String,
    pub position: Vec2,
    /// Body heading (radians).
    pub rotation: f32,
    pub health: f32,
}

/// A visible projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub kind: BulletKind,
    pub player_id: u32,
    pub position: Vec2,
    pub rotation: f32,
}

/// Per-player status for lobby/HUD display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub player_id: u32,
    /// The player's unit, if one is alive.
    pub unit_id: Option<u32>,
    /// Ticks until respawn (zero when alive or not scheduled).
    pub respawn_ticks: u32,
}

/// One model instance to draw: registered model id plus world transform
/// and tint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpriteInstance {
    pub model: u32,
    pub position: Vec2,
    pub rotation: f32,
    pub color: [f32; 4],
}
