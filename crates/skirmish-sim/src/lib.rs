//! Simulation engine for Skirmish.
//!
//! Owns the unit registry and the hecs world for projectiles, runs systems
//! at a fixed tick rate, and produces GameStateSnapshots for the frontend.

pub mod arena;
pub mod assets;
pub mod bullets;
pub mod engine;
pub mod systems;
pub mod units;

pub use engine::{BattleEngine, EngineConfig};
pub use skirmish_core as core;
