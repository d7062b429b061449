//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World`; the state they need beyond
//! components (spatial index, buffers, rng) is passed in by the engine.

pub mod attacker;
pub mod cleanup;
pub mod movement;
pub mod projectile;
pub mod snapshot;
pub mod weapon;
