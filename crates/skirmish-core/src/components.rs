//! ECS components for hecs entities.
//!
//! Components are plain data. The only methods here are trivial state
//! commands and predicates; game logic lives in systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::FireOrder;
use crate::factions::FactionId;

/// A combat-capable in-world entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Unit {
    /// Stable external handle, used in commands, events and snapshots.
    pub id: u32,
    pub faction: FactionId,
}

/// Unit health. A unit can be attacked while it is alive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }
}

/// The shooting subsystem attached to a unit.
///
/// Outside callers interact with it only through the two order commands,
/// both safe to repeat in the state they request. Ballistics and cadence are
/// internal to the weapon systems.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    pub damage: f32,
    pub cooldown_secs: f32,
    pub cooldown_remaining: f32,
    pub order: FireOrder,
}

impl Weapon {
    pub fn new(damage: f32, cooldown_secs: f32) -> Self {
        Self {
            damage,
            cooldown_secs,
            cooldown_remaining: 0.0,
            order: FireOrder::Hold,
        }
    }

    /// Aim at a point and keep firing. Idempotent.
    pub fn start_firing_at(&mut self, aim: Vec2) {
        self.order = FireOrder::FireAt(aim);
    }

    /// Cease fire. Idempotent.
    pub fn stop_firing(&mut self) {
        self.order = FireOrder::Hold;
    }
}

/// A projectile in flight toward a fixed aim point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: f32,
    /// World-space point the shot was aimed at; the projectile detonates when
    /// it passes this point.
    pub aim: Vec2,
}

/// Marks a unit that has died. The corpse lingers for a few ticks before
/// cleanup despawns the entity; it cannot be attacked while it lingers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dead {
    /// Tick at which the unit died.
    pub since_tick: u64,
}
