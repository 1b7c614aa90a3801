//! Core types and definitions for the Skirmish battle simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, input snapshots, state views, events, and
//! constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
