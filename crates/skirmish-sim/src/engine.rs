//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the spatial index, the
//! reusable scratch buffers, processes player commands, runs all systems,
//! and produces `BattleSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::components::Unit;
use skirmish_core::constants::{SPATIAL_CELL_SIZE, TARGET_SCAN_CAPACITY};
use skirmish_core::enums::BattlePhase;
use skirmish_core::events::CombatEvent;
use skirmish_core::factions::{FactionId, HostilityTable};
use skirmish_core::state::{BattleSnapshot, BattleStats};
use skirmish_core::types::SimTime;

use crate::spatial::SpatialGrid;
use crate::systems;
use crate::systems::attacker::{self, UnitAttacker};
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same battle.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: BattlePhase,
    rng: ChaCha8Rng,
    hostility: HostilityTable,
    spatial: SpatialGrid,
    /// Reusable spatial-query scratch buffer; fixed capacity, never grown.
    scan_buffer: Vec<Entity>,
    despawn_buffer: Vec<Entity>,
    death_buffer: Vec<Entity>,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<CombatEvent>,
    stats: BattleStats,
    next_unit_id: u32,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: BattlePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            hostility: HostilityTable::new(),
            spatial: SpatialGrid::new(SPATIAL_CELL_SIZE),
            scan_buffer: Vec::with_capacity(TARGET_SCAN_CAPACITY),
            despawn_buffer: Vec::new(),
            death_buffer: Vec::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            stats: BattleStats::default(),
            next_unit_id: 0,
        }
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
    pub fn tick(&mut self) -> BattleSnapshot {
        self.process_commands();

        if self.phase == BattlePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(&self.world, &self.time, self.phase, events, &self.stats)
    }

    /// Get the current battle phase.
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the faction hostility table.
    pub fn hostility(&self) -> &HostilityTable {
        &self.hostility
    }

    /// Mutable hostility table, for scenario construction.
    pub fn hostility_mut(&mut self) -> &mut HostilityTable {
        &mut self.hostility
    }

    /// Spawn a plain unit and return its stable id. Scenario surface for
    /// callers building their own battles instead of `StartBattle`.
    pub fn spawn_unit(&mut self, faction: FactionId, position: Vec2) -> u32 {
        let id = self.alloc_unit_id();
        world_setup::spawn_unit(&mut self.world, id, faction, position);
        id
    }

    /// Spawn a unit with an attack controller and return its stable id.
    pub fn spawn_attacker_unit(
        &mut self,
        faction: FactionId,
        position: Vec2,
        attack_radius: f32,
        attack_on_sight: bool,
    ) -> u32 {
        let id = self.alloc_unit_id();
        world_setup::spawn_attacker_unit(
            &mut self.world,
            id,
            faction,
            position,
            attack_radius,
            attack_on_sight,
        );
        id
    }

    /// Begin the battle with whatever has been spawned so far.
    pub fn start(&mut self) {
        if self.phase == BattlePhase::Setup {
            self.phase = BattlePhase::Active;
            self.time = SimTime::default();
        }
    }

    #[cfg(test)]
    pub(crate) fn entity_of(&self, unit_id: u32) -> Option<Entity> {
        self.find_unit(unit_id)
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
            PlayerCommand::StartBattle => {
                if self.phase == BattlePhase::Setup {
                    world_setup::setup_skirmish(
                        &mut self.world,
                        &mut self.hostility,
                        &mut self.rng,
                        &mut self.next_unit_id,
                    );
                    self.phase = BattlePhase::Active;
                    self.time = SimTime::default();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == BattlePhase::Active {
                    self.phase = BattlePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == BattlePhase::Paused {
                    self.phase = BattlePhase::Active;
                }
            }
            PlayerCommand::OrderAttack { unit_id, target_id } => {
                let (attacker, target) = match (self.find_unit(unit_id), self.find_unit(target_id))
                {
                    (Some(a), Some(t)) => (a, t),
                    _ => return,
                };
                attacker::start_attack(&mut self.world, &self.hostility, attacker, target);
                // The assignment may have been refused (disabled controller).
                if attacker::current_target(&self.world, attacker) == Some(target) {
                    self.events
                        .push(CombatEvent::TargetAcquired { unit_id, target_id });
                }
            }
            PlayerCommand::HaltAttack { unit_id } => {
                if let Some(entity) = self.find_unit(unit_id) {
                    attacker::stop_attack(&mut self.world, entity);
                }
            }
            PlayerCommand::SetAttackOnSight { unit_id, enabled } => {
                if let Some(entity) = self.find_unit(unit_id) {
                    if let Ok(mut a) = self.world.get::<&mut UnitAttacker>(entity) {
                        a.attack_on_sight = enabled;
                    }
                }
            }
            PlayerCommand::SetAttackRadius { unit_id, radius } => {
                if radius <= 0.0 {
                    return;
                }
                if let Some(entity) = self.find_unit(unit_id) {
                    if let Ok(mut a) = self.world.get::<&mut UnitAttacker>(entity) {
                        a.attack_radius = radius;
                    }
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Kinematics
        systems::movement::run(&mut self.world);
        // 2. Broad-phase re-index
        self.spatial.rebuild(&self.world);
        // 3. Targeting and attack execution
        systems::attacker::run(
            &mut self.world,
            &self.hostility,
            &self.spatial,
            &mut self.scan_buffer,
            &mut self.events,
        );
        // 4. Fire orders -> projectiles
        systems::weapon::run(
            &mut self.world,
            &mut self.rng,
            &mut self.events,
            &mut self.stats,
        );
        // 5. Projectile arrivals, damage, deaths
        systems::projectile::run(
            &mut self.world,
            self.time.tick,
            &mut self.events,
            &mut self.stats,
            &mut self.death_buffer,
        );
        // 6. Death notifications -> attack controllers
        while let Some(entity) = self.death_buffer.pop() {
            attacker::handle_death(&mut self.world, entity);
        }
        // 7. Corpse and out-of-bounds cleanup
        systems::cleanup::run(&mut self.world, self.time.tick, &mut self.despawn_buffer);
    }

    fn alloc_unit_id(&mut self) -> u32 {
        let id = self.next_unit_id;
        self.next_unit_id += 1;
        id
    }

    /// Resolve a stable unit id to its entity.
    fn find_unit(&self, unit_id: u32) -> Option<Entity> {
        let mut query = self.world.query::<&Unit>();
        query
            .iter()
            .find(|(_, unit)| unit.id == unit_id)
            .map(|(entity, _)| entity)
    }
}
