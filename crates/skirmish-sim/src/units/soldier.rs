//! The Soldier unit: obstacle-aware movement, independent turret tracking,
//! and a move-gated fire limiter.
//!
//! The fire limiter is a two-guard state machine, not a plain cooldown:
//! a shot needs both 100 accumulated move-intent ticks and a cold
//! trigger. Early presses are dropped, never buffered.

use glam::{vec2, Vec2};

use skirmish_core::constants::{
    AIM_EPSILON, CANNONBALL_SPEED, DT, FIRE_INTERVAL_TICKS, MOVE_GATE_THRESHOLD,
    SOLDIER_ANGULAR_SPEED, SOLDIER_MOVE_SPEED, SOLDIER_MUZZLE_OFFSET, TURRET_AIM_OFFSET,
    UNIT_HALF_EXTENT,
};
use skirmish_core::enums::{BulletKind, UnitKind};
use skirmish_core::events::SimEvent;
use skirmish_core::input::InputState;
use skirmish_core::state::SpriteInstance;
use skirmish_core::types::rotate;

use crate::assets::{Model, ModelRegistry, ModelVertex, UnitModelSet};
use crate::bullets::BulletSpawn;
use crate::units::{TickContext, Unit, UnitBase};

pub struct Soldier {
    base: UnitBase,
    /// Turret heading in radians, independent of the body heading.
    turret_rotation: f32,
    /// Ticks with move intent held since the last shot.
    steps_moved: u32,
    /// Nonzero blocks the trigger; counts down one per tick.
    fire_cooldown: u32,
    models: UnitModelSet,
}

impl Soldier {
    pub fn new(registry: &mut ModelRegistry, id: u32, player_id: u32) -> Self {
        let models = registry.ensure_unit_models(UnitKind::Soldier, register_models);
        Self {
            base: UnitBase::new(id, player_id),
            turret_rotation: 0.0,
            steps_moved: 0,
            fire_cooldown: 0,
            models,
        }
    }

    /// Movement integrator: translate with obstacle-aware commit, rotate
    /// unconditionally.
    fn integrate_movement(&mut self, input: &InputState, ctx: &mut TickContext) {
        let mut offset = Vec2::ZERO;
        if input.move_forward {
            offset.y += 1.0;
        }
        if input.move_backward {
            offset.y -= 1.0;
        }
        // Canceling forward+back still counts as intent.
        if input.has_move_intent() {
            self.steps_moved += 1;
        }

        let speed = SOLDIER_MOVE_SPEED * self.base.speed_scale;
        let candidate = self.base.position + rotate(offset * DT * speed, self.base.rotation);

        // Single point test at the destination; a rejected candidate
        // leaves the position untouched.
        if !ctx.arena.is_blocked(candidate) {
            self.base.position = candidate;
            ctx.events.push(SimEvent::UnitMoved {
                unit_id: self.base.id,
                position: candidate,
            });
        }

        let mut spin = 0.0;
        if input.rotate_left {
            spin += 1.0;
        }
        if input.rotate_right {
            spin -= 1.0;
        }
        self.base.rotation += spin * DT * SOLDIER_ANGULAR_SPEED * self.base.speed_scale;

        // Rotation is never blocked by obstacles; the event fires even on
        // a zero delta.
        ctx.events.push(SimEvent::UnitRotated {
            unit_id: self.base.id,
            rotation: self.base.rotation,
        });
    }

    /// Turret tracker: recompute the heading from the aim target every
    /// tick, no smoothing.
    fn track_turret(&mut self, input: &InputState) {
        let diff = input.aim - self.base.position;
        if diff.length() < AIM_EPSILON {
            self.turret_rotation = self.base.rotation;
        } else {
            self.turret_rotation = diff.y.atan2(diff.x) - TURRET_AIM_OFFSET;
        }
    }

    /// Fire controller: both guards must hold before a held trigger spawns
    /// exactly one CannonBall. Firing resets the move counter and starts
    /// the cooldown within the same tick.
    fn try_fire(&mut self, input: &InputState, ctx: &mut TickContext) {
        if self.steps_moved >= MOVE_GATE_THRESHOLD && self.fire_cooldown == 0 && input.fire {
            ctx.bullets.push(BulletSpawn {
                kind: BulletKind::CannonBall,
                player_id: self.base.player_id,
                position: self.base.position
                    + rotate(vec2(0.0, SOLDIER_MUZZLE_OFFSET), self.turret_rotation),
                rotation: self.turret_rotation,
                damage_scale: self.base.damage_scale,
                velocity: rotate(vec2(0.0, CANNONBALL_SPEED), self.turret_rotation),
            });
            self.fire_cooldown = FIRE_INTERVAL_TICKS;
            self.steps_moved = 0;
        }
    }

    pub fn turret_rotation(&self) -> f32 {
        self.turret_rotation
    }

    #[cfg(test)]
    pub fn steps_moved(&self) -> u32 {
        self.steps_moved
    }

    #[cfg(test)]
    pub fn set_steps_moved(&mut self, steps: u32) {
        self.steps_moved = steps;
    }

    #[cfg(test)]
    pub fn fire_cooldown(&self) -> u32 {
        self.fire_cooldown
    }

    #[cfg(test)]
    pub fn set_fire_cooldown(&mut self, ticks: u32) {
        self.fire_cooldown = ticks;
    }
}

impl Unit for Soldier {
    fn base(&self) -> &UnitBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut UnitBase {
        &mut self.base
    }

    fn kind(&self) -> UnitKind {
        UnitKind::Soldier
    }

    fn update(&mut self, ctx: &mut TickContext) {
        // Absent player: the unit freezes, but the cooldown keeps counting.
        if let Some(input) = ctx.input {
            self.integrate_movement(&input, ctx);
            self.track_turret(&input);
            // Must run after the tracker so a shot uses current-tick aim.
            self.try_fire(&input, ctx);
        }
        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
        }
    }

    fn render(&self, tint: [f32; 4], out: &mut Vec<SpriteInstance>) {
        out.push(SpriteInstance {
            model: self.models.body,
            position: self.base.position,
            rotation: self.base.rotation,
            color: tint,
        });
        out.push(SpriteInstance {
            model: self.models.turret,
            position: self.base.position,
            rotation: self.turret_rotation,
            color: tint,
        });
    }

    fn is_hit(&self, world_point: Vec2) -> bool {
        let local = self.base.world_to_local(world_point);
        local.x > -UNIT_HALF_EXTENT
            && local.x < UNIT_HALF_EXTENT
            && local.y > -UNIT_HALF_EXTENT
            && local.y < UNIT_HALF_EXTENT
    }

    fn name(&self) -> &'static str {
        "Soldier"
    }

    fn author(&self) -> &'static str {
        "built-in"
    }
}

/// Register the Soldier's geometry: a unit-square body and a triangular
/// gun pointing along local +Y.
fn register_models(registry: &mut ModelRegistry) -> UnitModelSet {
    let body_color = [0.0, 1.0, 0.0, 1.0];
    let body = registry.register(Model {
        vertices: vec![
            vertex(-0.5, 0.5, body_color),
            vertex(-0.5, -0.5, body_color),
            vertex(0.5, 0.5, body_color),
            vertex(0.5, -0.5, body_color),
        ],
        indices: vec![0, 1, 2, 1, 2, 3],
    });

    let turret_color = [1.0, 0.0, 0.0, 1.0];
    let turret = registry.register(Model {
        vertices: vec![
            vertex(0.0, 1.2, turret_color),
            vertex(0.2, 0.4, turret_color),
            vertex(-0.2, 0.4, turret_color),
        ],
        indices: vec![0, 1, 2],
    });

    UnitModelSet { body, turret }
}

fn vertex(x: f32, y: f32, color: [f32; 4]) -> ModelVertex {
    ModelVertex {
        position: vec2(x, y),
        uv: Vec2::ZERO,
        color,
    }
}
