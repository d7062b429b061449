//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces BattleSnapshots. Completely headless, enabling
//! deterministic testing.

pub mod engine;
pub mod spatial;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skirmish_core as core;
