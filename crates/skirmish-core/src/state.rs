//! Battle snapshot — the complete visible state produced after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::BattlePhase;
use crate::events::CombatEvent;
use crate::types::SimTime;

/// Complete simulation state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub time: SimTime,
    pub phase: BattlePhase,
    pub units: Vec<UnitView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events raised since the previous snapshot.
    pub events: Vec<CombatEvent>,
    pub stats: BattleStats,
}

/// A visible unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitView {
    pub unit_id: u32,
    pub faction: u32,
    pub x: f32,
    pub y: f32,
    pub health: f32,
    pub max_health: f32,
    pub alive: bool,
    /// Whether the unit's weapon currently holds a fire order.
    pub firing: bool,
    /// Present only on units that carry an attack controller.
    pub attacker: Option<AttackerView>,
}

/// Attack controller status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttackerView {
    pub attack_radius: f32,
    pub attack_on_sight: bool,
    pub enabled: bool,
    /// Current target's unit id, if one is assigned and still exists.
    pub current_target: Option<u32>,
}

/// A projectile in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub x: f32,
    pub y: f32,
}

/// Running battle score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleStats {
    pub shots_fired: u32,
    pub units_lost: u32,
}
