//! Player commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Units are
//! addressed by their stable `unit_id`, never by ECS entity.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Attack orders ---
    /// Order a unit to attack a specific target. The target is assigned even
    /// when it cannot be engaged immediately.
    OrderAttack { unit_id: u32, target_id: u32 },
    /// Order a unit to cease fire. Its assigned target is kept.
    HaltAttack { unit_id: u32 },

    // --- Attacker configuration ---
    /// Enable or disable automatic target seeking for a unit.
    SetAttackOnSight { unit_id: u32, enabled: bool },
    /// Change a unit's engagement radius. Ignored unless radius > 0.
    SetAttackRadius { unit_id: u32, radius: f32 },

    // --- Simulation control ---
    /// Load the default skirmish scenario and start the battle.
    StartBattle,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
