//! Enumeration types used throughout the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Battle lifecycle phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    /// No scenario loaded yet.
    #[default]
    Setup,
    /// Simulation running.
    Active,
    /// Simulation frozen; commands still queue.
    Paused,
}

/// Standing order held by a weapon. The order persists until replaced, so the
/// weapon keeps shooting on its own cadence while an aim point is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum FireOrder {
    /// Hold fire.
    #[default]
    Hold,
    /// Fire at a world-space aim point.
    FireAt(Vec2),
}
