//! Simulation engine — the core of the game.
//!
//! `BattleEngine` owns the unit registry, the hecs world for projectiles,
//! the arena, and the model registry. It processes player commands at tick
//! boundaries, runs every unit and system once per tick, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::{BTreeMap, VecDeque};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::constants::{PLAYER_PALETTE, RESPAWN_DELAY_TICKS};
use skirmish_core::events::SimEvent;
use skirmish_core::input::InputState;
use skirmish_core::state::GameStateSnapshot;
use skirmish_core::types::SimTime;

use crate::arena::Arena;
use crate::assets::ModelRegistry;
use crate::bullets::{self, BulletSpawn};
use crate::systems;
use crate::units::{Soldier, TickContext, Unit};

/// Configuration for starting a new simulation.
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed = same respawn placement.
    pub seed: u64,
    /// Arena layout (bounds + obstacles).
    pub arena: Arena,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena: Arena::default(),
        }
    }
}

/// A connected player: current input snapshot, unit link, respawn timer.
pub struct Player {
    pub input: InputState,
    pub unit_id: Option<u32>,
    pub respawn_timer: u32,
    pub color: [f32; 4],
}

/// The simulation engine. Owns all sim state.
pub struct BattleEngine {
    world: World,
    units: BTreeMap<u32, Box<dyn Unit>>,
    players: BTreeMap<u32, Player>,
    models: ModelRegistry,
    arena: Arena,
    time: SimTime,
    rng: ChaCha8Rng,
    next_unit_id: u32,
    next_player_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
    bullet_spawns: Vec<BulletSpawn>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl BattleEngine {
    /// Create a new engine with the given config.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            world: World::new(),
            units: BTreeMap::new(),
            players: BTreeMap::new(),
            models: ModelRegistry::new(),
            arena: config.arena,
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_unit_id: 1,
            next_player_id: 1,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            bullet_spawns: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Register a new player and return their id. Spawning a unit is a
    /// separate step (`PlayerCommand::SpawnUnit`).
    pub fn add_player(&mut self) -> u32 {
        let player_id = self.next_player_id;
        self.next_player_id += 1;
        let color = PLAYER_PALETTE[(player_id as usize - 1) % PLAYER_PALETTE.len()];
        self.players.insert(
            player_id,
            Player {
                input: InputState::default(),
                unit_id: None,
                respawn_timer: 0,
                color,
            },
        );
        tracing::debug!(player_id, "player joined");
        player_id
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();
        self.run_respawns();
        self.run_units();
        self.flush_bullet_spawns();

        systems::movement::run(&mut self.world);
        let destroyed = systems::collision::run(
            &mut self.world,
            &mut self.units,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        self.handle_destroyed(destroyed);
        systems::cleanup::run(
            &mut self.world,
            &self.arena,
            self.time.tick,
            &mut self.despawn_buffer,
        );

        self.time.advance();
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(&self.world, &self.units, &self.players, &self.time, events)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the arena.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetInput { player_id, input } => {
                if let Some(player) = self.players.get_mut(&player_id) {
                    player.input = input;
                }
            }
            PlayerCommand::SpawnUnit { player_id } => {
                self.spawn_unit(player_id);
            }
            PlayerCommand::RemovePlayer { player_id } => {
                // The unit, if any, stays in the world and freezes.
                self.players.remove(&player_id);
                tracing::debug!(player_id, "player removed");
            }
        }
    }

    /// Spawn a Soldier for a player at a random unblocked position.
    /// No-op if the player is unknown or already has a unit.
    pub fn spawn_unit(&mut self, player_id: u32) -> Option<u32> {
        let has_unit = match self.players.get(&player_id) {
            Some(player) => player.unit_id.is_some(),
            None => return None,
        };
        if has_unit {
            return None;
        }

        let position = self.arena.random_spawn(&mut self.rng);
        let unit_id = self.next_unit_id;
        self.next_unit_id += 1;

        let mut soldier = Soldier::new(&mut self.models, unit_id, player_id);
        soldier.base_mut().position = position;
        self.units.insert(unit_id, Box::new(soldier));

        if let Some(player) = self.players.get_mut(&player_id) {
            player.unit_id = Some(unit_id);
            player.respawn_timer = 0;
        }

        tracing::debug!(unit_id, player_id, ?position, "unit spawned");
        self.events.push(SimEvent::UnitSpawned {
            unit_id,
            player_id,
            position,
        });
        Some(unit_id)
    }

    /// Run every unit's per-tick update in ascending id order.
    fn run_units(&mut self) {
        for unit in self.units.values_mut() {
            let input = self
                .players
                .get(&unit.base().player_id)
                .map(|player| player.input);
            let mut ctx = TickContext {
                input,
                arena: &self.arena,
                events: &mut self.events,
                bullets: &mut self.bullet_spawns,
            };
            unit.update(&mut ctx);
        }
    }

    /// Move queued bullet spawns into the hecs world.
    fn flush_bullet_spawns(&mut self) {
        for request in self.bullet_spawns.drain(..) {
            bullets::spawn(&mut self.world, request, self.time.tick);
        }
    }

    /// Remove destroyed units and schedule their owners for respawn.
    fn handle_destroyed(&mut self, destroyed: Vec<u32>) {
        for unit_id in destroyed {
            let Some(unit) = self.units.remove(&unit_id) else {
                continue;
            };
            let player_id = unit.base().player_id;
            tracing::debug!(unit_id, player_id, "unit destroyed");
            self.events.push(SimEvent::UnitDestroyed { unit_id });

            if let Some(player) = self.players.get_mut(&player_id) {
                player.unit_id = None;
                player.respawn_timer = RESPAWN_DELAY_TICKS;
            }
        }
    }

    /// Count down respawn timers and respawn units whose timers expire.
    fn run_respawns(&mut self) {
        let mut due = Vec::new();
        for (player_id, player) in self.players.iter_mut() {
            if player.unit_id.is_none() && player.respawn_timer > 0 {
                player.respawn_timer -= 1;
                if player.respawn_timer == 0 {
                    due.push(*player_id);
                }
            }
        }
        for player_id in due {
            self.spawn_unit(player_id);
        }
    }

    /// Get a read-only reference to a unit.
    #[cfg(test)]
    pub fn unit(&self, unit_id: u32) -> Option<&dyn Unit> {
        self.units.get(&unit_id).map(|u| u.as_ref())
    }

    /// Get mutable access to a unit's base state (for test setup).
    #[cfg(test)]
    pub fn unit_base_mut(&mut self, unit_id: u32) -> Option<&mut crate::units::UnitBase> {
        self.units.get_mut(&unit_id).map(|u| u.base_mut())
    }

    /// Get a read-only reference to a player.
    #[cfg(test)]
    pub fn player(&self, player_id: u32) -> Option<&Player> {
        self.players.get(&player_id)
    }

    /// Get a read-only reference to the model registry.
    #[cfg(test)]
    pub fn models(&self) -> &ModelRegistry {
        &self.models
    }
}
