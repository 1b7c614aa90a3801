//! Arena layout and the obstacle oracle.
//!
//! The arena is a square world centered on the origin with axis-aligned
//! block obstacles. `is_blocked` is the single point test units consult
//! before committing a movement candidate; it is deterministic for a given
//! layout.

use glam::{vec2, Vec2};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skirmish_core::constants::{ARENA_HALF_EXTENT, SPAWN_WALL_MARGIN};

/// An axis-aligned square obstacle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Block {
    pub center: Vec2,
    pub half_extent: f32,
}

impl Block {
    pub fn new(center: Vec2, half_extent: f32) -> Self {
        Self {
            center,
            half_extent,
        }
    }

    /// True if the point lies inside the block (edges inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        (point.x - self.center.x).abs() <= self.half_extent
            && (point.y - self.center.y).abs() <= self.half_extent
    }
}

/// The playable world: square bounds plus block obstacles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    pub half_extent: f32,
    pub blocks: Vec<Block>,
}

impl Arena {
    /// An arena with no obstacles, for tests and open maps.
    pub fn open(half_extent: f32) -> Self {
        Self {
            half_extent,
            blocks: Vec::new(),
        }
    }

    /// Obstacle oracle: true if a candidate position may not be occupied.
    /// Out-of-bounds counts as blocked.
    pub fn is_blocked(&self, point: Vec2) -> bool {
        if point.x.abs() > self.half_extent || point.y.abs() > self.half_extent {
            return true;
        }
        self.blocks.iter().any(|b| b.contains(point))
    }

    /// Pick a random unblocked position, keeping a margin from the walls.
    /// Falls back to the origin if no free spot is found in a bounded
    /// number of attempts.
    pub fn random_spawn(&self, rng: &mut ChaCha8Rng) -> Vec2 {
        let span = (self.half_extent - SPAWN_WALL_MARGIN).max(0.0);
        for _ in 0..64 {
            let candidate = vec2(rng.gen_range(-span..=span), rng.gen_range(-span..=span));
            if !self.is_blocked(candidate) {
                return candidate;
            }
        }
        Vec2::ZERO
    }
}

impl Default for Arena {
    /// The stock map: full-size bounds with a cross of blocks near the
    /// center and one free lane on each side.
    fn default() -> Self {
        Self {
            half_extent: ARENA_HALF_EXTENT,
            blocks: vec![
                Block::new(vec2(0.0, 3.0), 1.0),
                Block::new(vec2(0.0, -3.0), 1.0),
                Block::new(vec2(4.0, 0.0), 1.0),
                Block::new(vec2(-4.0, 0.0), 1.0),
            ],
        }
    }
}
