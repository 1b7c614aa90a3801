//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions; all state lives in the engine and the
//! world. Unit updates themselves run through the `Unit` trait, not here.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod snapshot;
