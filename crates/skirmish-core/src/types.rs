//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D position in simulation space (meters). The world is planar; altitude
/// plays no part in range or movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// 2D velocity in simulation space (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Squared distance to another position. Range comparisons use squared
    /// distances exclusively, so no square root ever happens on the hot path.
    pub fn distance_sq_to(&self, other: &Position) -> f32 {
        self.0.distance_squared(other.0)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Speed magnitude (m/s).
    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
