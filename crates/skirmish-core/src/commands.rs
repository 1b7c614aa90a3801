//! Player commands sent from the host (network layer, local client) to the
//! simulation.
//!
//! Commands are queued and processed at the next tick boundary, which keeps
//! every input snapshot stable for a full tick.

use serde::{Deserialize, Serialize};

use crate::input::InputState;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Replace a player's input snapshot for subsequent ticks.
    SetInput { player_id: u32, input: InputState },
    /// Spawn a unit for a player that has none.
    SpawnUnit { player_id: u32 },
    /// Remove a player (disconnect). Their unit, if any, stays in the
    /// world but freezes until the player id reappears.
    RemovePlayer { player_id: u32 },
}
