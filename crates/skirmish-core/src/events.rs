//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

/// Combat events drained into every snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// A unit picked up (or was ordered onto) a new target.
    TargetAcquired { unit_id: u32, target_id: u32 },
    /// A unit lost its target and went idle.
    TargetLost { unit_id: u32 },
    /// A weapon fired a projectile.
    ShotFired { unit_id: u32, aim_x: f32, aim_y: f32 },
    /// A unit took damage.
    UnitDamaged {
        unit_id: u32,
        amount: f32,
        remaining: f32,
    },
    /// A unit's health reached zero.
    UnitDied { unit_id: u32 },
}
