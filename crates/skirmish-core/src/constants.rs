//! Simulation constants and tuning parameters.

use std::f32::consts::FRAC_PI_2;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Arena ---

/// Half-extent of the square arena (world units from origin to wall).
pub const ARENA_HALF_EXTENT: f32 = 10.0;

/// Margin kept between a respawn point and the arena wall.
pub const SPAWN_WALL_MARGIN: f32 = 1.0;

// --- Units (common) ---

/// Half-extent of a unit's square body footprint, used by the hit test.
/// The boundary itself counts as outside.
pub const UNIT_HALF_EXTENT: f32 = 0.5;

/// Full health for a freshly spawned unit.
pub const UNIT_MAX_HEALTH: f32 = 100.0;

/// Delay between a unit's destruction and its owner's respawn (ticks).
pub const RESPAWN_DELAY_TICKS: u32 = 5 * TICK_RATE;

// --- Soldier ---

/// Forward/backward translation speed (world units per second).
pub const SOLDIER_MOVE_SPEED: f32 = 2.0;

/// Body turn rate (radians per second, 90 degrees).
pub const SOLDIER_ANGULAR_SPEED: f32 = FRAC_PI_2;

/// Ticks of held move intent required before the trigger arms.
pub const MOVE_GATE_THRESHOLD: u32 = 100;

/// Cooldown applied when a shot fires (one shot per simulated second).
pub const FIRE_INTERVAL_TICKS: u32 = TICK_RATE;

/// Distance from the unit center to the muzzle, along the turret heading.
pub const SOLDIER_MUZZLE_OFFSET: f32 = 1.2;

/// Aim targets closer to the unit than this snap the turret to the body
/// heading instead of producing an undefined direction.
pub const AIM_EPSILON: f32 = 1e-4;

/// Quarter-turn subtracted from atan2 so local turret "up" points at the
/// aim target.
pub const TURRET_AIM_OFFSET: f32 = FRAC_PI_2;

// --- CannonBall ---

/// Muzzle velocity magnitude (world units per second).
pub const CANNONBALL_SPEED: f32 = 20.0;

/// Base damage per hit, scaled by the shooter's damage scale.
pub const CANNONBALL_DAMAGE: f32 = 10.0;

/// Lifetime after which a bullet despawns even in-bounds (ticks).
pub const BULLET_LIFETIME_TICKS: u64 = 10 * TICK_RATE as u64;

// --- Display ---

/// Tint palette cycled through as players join.
pub const PLAYER_PALETTE: [[f32; 4]; 6] = [
    [0.0, 0.8, 0.2, 1.0],
    [0.9, 0.2, 0.2, 1.0],
    [0.2, 0.4, 1.0, 1.0],
    [0.9, 0.8, 0.1, 1.0],
    [0.7, 0.2, 0.9, 1.0],
    [0.1, 0.8, 0.8, 1.0],
];
