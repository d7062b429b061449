//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- World bounds ---

/// Simulation area radius in meters. Anything beyond is cleaned up.
pub const WORLD_RADIUS: f32 = 512.0;

// --- Targeting ---

/// Default engagement radius for a freshly built attacker (meters).
pub const DEFAULT_ATTACK_RADIUS: f32 = 10.0;

/// Fixed capacity of the reusable target scan buffer. A spatial query that
/// finds more candidates than this drops the excess silently — an accepted
/// approximation, not an error.
pub const TARGET_SCAN_CAPACITY: usize = 128;

/// Cell edge length of the broad-phase spatial grid (meters).
pub const SPATIAL_CELL_SIZE: f32 = 8.0;

// --- Weapons ---

/// Seconds between shots from a standing fire order.
pub const WEAPON_COOLDOWN_SECS: f32 = 0.8;

/// Damage applied by one projectile hit.
pub const WEAPON_DAMAGE: f32 = 10.0;

/// Aim jitter applied to each shot (radians, +/-).
pub const WEAPON_SPREAD_RADIANS: f32 = 0.04;

/// Projectile travel speed (m/s).
pub const PROJECTILE_SPEED: f32 = 60.0;

/// Radius around the impact point within which a unit takes damage (meters).
pub const PROJECTILE_HIT_RADIUS: f32 = 1.5;

// --- Units ---

/// Starting health for a spawned unit.
pub const UNIT_MAX_HEALTH: f32 = 100.0;

/// Ticks a dead unit lingers as a corpse before it is despawned.
pub const CORPSE_LINGER_TICKS: u64 = 90;

// --- Default skirmish scenario ---

/// Units per side in the default scenario.
pub const SKIRMISH_SQUAD_SIZE: usize = 4;

/// Distance of each battle line from the origin (meters).
pub const SKIRMISH_LINE_OFFSET: f32 = 4.0;

/// Spacing between units within a line (meters).
pub const SKIRMISH_RANK_SPACING: f32 = 3.0;

/// Placement jitter along the x axis (meters, +/-). Kept small enough that
/// opposing ranks always start inside the default attack radius.
pub const SKIRMISH_PLACEMENT_JITTER: f32 = 1.0;
