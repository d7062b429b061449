//! Attack controller — per-unit targeting and attack execution.
//!
//! Each tick a unit's controller decides whether it still has a valid hostile
//! target in range, keeps shooting at it, or searches the spatial index for a
//! replacement. The controller only issues the weapon's two fire-order
//! commands; ballistics and cadence belong to the weapon systems.
//!
//! The current target is held as a bare `hecs::Entity` and resolved against
//! the live world on every use, so a despawned target simply reads as
//! invalid; there is no dangling reference to chase.

use hecs::{Entity, World};

use skirmish_core::components::{Health, Unit, Weapon};
use skirmish_core::constants::DEFAULT_ATTACK_RADIUS;
use skirmish_core::events::CombatEvent;
use skirmish_core::factions::HostilityTable;
use skirmish_core::types::Position;

use crate::spatial::SpatialGrid;

/// Attack controller state, attached to a unit entity.
///
/// `enabled` goes false when the owning unit dies and stays false until an
/// external reset; a disabled controller performs no target updates and
/// issues no weapon commands.
#[derive(Debug, Clone)]
pub struct UnitAttacker {
    /// Engagement radius (meters). Always > 0.
    pub attack_radius: f32,
    /// When true, the controller searches for targets on its own each tick.
    pub attack_on_sight: bool,
    pub enabled: bool,
    current_target: Option<Entity>,
}

impl UnitAttacker {
    pub fn new(attack_radius: f32) -> Self {
        assert!(attack_radius > 0.0, "attack radius must be positive");
        Self {
            attack_radius,
            attack_on_sight: false,
            enabled: true,
            current_target: None,
        }
    }
}

impl Default for UnitAttacker {
    fn default() -> Self {
        Self::new(DEFAULT_ATTACK_RADIUS)
    }
}

/// Attach a controller to a unit. Refused unless the unit already carries a
/// `Weapon` for the controller to command.
pub fn install(world: &mut World, entity: Entity, attacker: UnitAttacker) -> Result<(), String> {
    if world.get::<&Weapon>(entity).is_err() {
        return Err(format!("entity {entity:?} has no weapon to command"));
    }
    world
        .insert_one(entity, attacker)
        .map_err(|e| e.to_string())
}

// --- Queries (side-effect free) ---

/// The currently assigned target, if any. The assignment may be stale; use
/// `can_attack_current` to know whether it is still engageable.
pub fn current_target(world: &World, attacker: Entity) -> Option<Entity> {
    world
        .get::<&UnitAttacker>(attacker)
        .ok()
        .and_then(|a| a.current_target)
}

/// Whether `target` is inside the attacker's engagement radius.
/// The boundary is inclusive: a target exactly at the radius is in range.
pub fn is_in_range(world: &World, attacker: Entity, target: Entity) -> bool {
    let radius = match world.get::<&UnitAttacker>(attacker) {
        Ok(a) => a.attack_radius,
        Err(_) => return false,
    };
    let own = match world.get::<&Position>(attacker) {
        Ok(p) => *p,
        Err(_) => return false,
    };
    let other = match world.get::<&Position>(target) {
        Ok(p) => *p,
        Err(_) => return false,
    };
    own.distance_sq_to(&other) <= radius * radius
}

/// Whether `target` is a live unit hostile to the attacker. Re-evaluated on
/// every call; both liveness and hostility can change between ticks.
pub fn is_valid_target(
    world: &World,
    hostility: &HostilityTable,
    attacker: Entity,
    target: Entity,
) -> bool {
    let own_faction = match world.get::<&Unit>(attacker) {
        Ok(u) => u.faction,
        Err(_) => return false,
    };
    let target_faction = match world.get::<&Unit>(target) {
        Ok(u) => u.faction,
        Err(_) => return false,
    };
    let attackable = match world.get::<&Health>(target) {
        Ok(h) => h.is_alive(),
        Err(_) => return false,
    };
    attackable && hostility.are_hostile(own_faction, target_faction)
}

/// Range check and validity policy combined.
pub fn can_attack(
    world: &World,
    hostility: &HostilityTable,
    attacker: Entity,
    target: Entity,
) -> bool {
    is_in_range(world, attacker, target) && is_valid_target(world, hostility, attacker, target)
}

pub fn is_current_in_range(world: &World, attacker: Entity) -> bool {
    match current_target(world, attacker) {
        Some(target) => is_in_range(world, attacker, target),
        None => false,
    }
}

pub fn is_current_valid(world: &World, hostility: &HostilityTable, attacker: Entity) -> bool {
    match current_target(world, attacker) {
        Some(target) => is_valid_target(world, hostility, attacker, target),
        None => false,
    }
}

pub fn can_attack_current(world: &World, hostility: &HostilityTable, attacker: Entity) -> bool {
    is_current_valid(world, hostility, attacker) && is_current_in_range(world, attacker)
}

// --- Commands ---

/// Assign `target` and engage it if possible.
///
/// The assignment happens even when the target is out of range or invalid;
/// only the fire command is withheld. That lets `keep_attacking_current`
/// engage an assigned target on a later tick without repeating the search.
/// Returns true iff a fire command was issued.
pub fn start_attack(
    world: &mut World,
    hostility: &HostilityTable,
    attacker: Entity,
    target: Entity,
) -> bool {
    if !controller_enabled(world, attacker) {
        return false;
    }
    // Disengage a still-attackable previous target before replacing it.
    if can_attack_current(world, hostility, attacker) {
        stop_attack(world, attacker);
    }
    match world.get::<&mut UnitAttacker>(attacker) {
        Ok(mut a) => a.current_target = Some(target),
        Err(_) => return false,
    }
    if !can_attack_current(world, hostility, attacker) {
        return false;
    }
    fire_at_target(world, attacker, target)
}

/// Cease fire. Idempotent; the assigned target is kept.
pub fn stop_attack(world: &mut World, attacker: Entity) {
    if !controller_enabled(world, attacker) {
        return;
    }
    if let Ok(mut weapon) = world.get::<&mut Weapon>(attacker) {
        weapon.stop_firing();
    }
}

/// Keep engaging the current target, re-aiming at its present position.
/// Disengages (stop-fire) when the target has died, turned friendly, left
/// the radius, or despawned. Returns true while the attack is sustained.
pub fn keep_attacking_current(
    world: &mut World,
    hostility: &HostilityTable,
    attacker: Entity,
) -> bool {
    if !controller_enabled(world, attacker) {
        return false;
    }
    if can_attack_current(world, hostility, attacker) {
        let target = match current_target(world, attacker) {
            Some(t) => t,
            None => return false,
        };
        return fire_at_target(world, attacker, target);
    }
    stop_attack(world, attacker);
    false
}

/// Make sure the unit has an engageable target: keep the current one if it
/// still qualifies, otherwise search for a replacement. Returns false when
/// the controller ends up with nothing to attack.
pub fn ensure_target(
    world: &mut World,
    hostility: &HostilityTable,
    spatial: &SpatialGrid,
    scan: &mut Vec<Entity>,
    attacker: Entity,
) -> bool {
    if !controller_enabled(world, attacker) {
        return false;
    }
    if can_attack_current(world, hostility, attacker) {
        return true;
    }
    find_new_target(world, hostility, spatial, scan, attacker)
}

/// Search the spatial index and attack the first valid candidate. When the
/// search comes up empty the controller stops firing and drops its target
/// assignment (goes idle).
pub fn find_new_target(
    world: &mut World,
    hostility: &HostilityTable,
    spatial: &SpatialGrid,
    scan: &mut Vec<Entity>,
    attacker: Entity,
) -> bool {
    if !controller_enabled(world, attacker) {
        return false;
    }
    match find_target(world, hostility, spatial, scan, attacker) {
        Some(unit) => start_attack(world, hostility, attacker, unit),
        None => {
            stop_attack(world, attacker);
            if let Ok(mut a) = world.get::<&mut UnitAttacker>(attacker) {
                a.current_target = None;
            }
            false
        }
    }
}

/// Death notification from the engine: the owning unit died, so the
/// controller shuts down. Deliberately fire-and-forget: no target clearing
/// and no stop-fire command is issued here; a caller that wants the weapon
/// silenced must stop it before the unit dies.
pub fn handle_death(world: &mut World, entity: Entity) {
    if let Ok(mut a) = world.get::<&mut UnitAttacker>(entity) {
        a.enabled = false;
    }
}

// --- Tick system ---

/// Run every attack controller for one tick: auto-seek (when enabled for the
/// unit), then sustain or drop the current attack. Emits target-change
/// events.
pub fn run(
    world: &mut World,
    hostility: &HostilityTable,
    spatial: &SpatialGrid,
    scan: &mut Vec<Entity>,
    events: &mut Vec<CombatEvent>,
) {
    let attackers: Vec<Entity> = {
        let mut query = world.query::<&UnitAttacker>();
        query.iter().map(|(entity, _)| entity).collect()
    };

    for entity in attackers {
        let (enabled, on_sight, prev_target) = match world.get::<&UnitAttacker>(entity) {
            Ok(a) => (a.enabled, a.attack_on_sight, a.current_target),
            Err(_) => continue,
        };
        if !enabled {
            continue;
        }
        if on_sight {
            ensure_target(world, hostility, spatial, scan, entity);
        }
        keep_attacking_current(world, hostility, entity);

        let new_target = current_target(world, entity);
        if new_target != prev_target {
            emit_target_change(world, entity, new_target, events);
        }
    }
}

// --- Internals ---

/// One spatial query, then provider-order scan for the first candidate that
/// passes the validity policy. Objects with no unit association are skipped.
/// Candidates beyond the scan buffer's capacity were dropped by the query.
fn find_target(
    world: &World,
    hostility: &HostilityTable,
    spatial: &SpatialGrid,
    scan: &mut Vec<Entity>,
    attacker: Entity,
) -> Option<Entity> {
    let (center, radius) = {
        let pos = world.get::<&Position>(attacker).ok()?;
        let a = world.get::<&UnitAttacker>(attacker).ok()?;
        (pos.0, a.attack_radius)
    };
    spatial.query_circle(center, radius, scan);
    for &candidate in scan.iter() {
        if candidate == attacker {
            continue;
        }
        if world.get::<&Unit>(candidate).is_err() {
            continue;
        }
        if is_valid_target(world, hostility, attacker, candidate) {
            return Some(candidate);
        }
    }
    None
}

fn controller_enabled(world: &World, attacker: Entity) -> bool {
    world
        .get::<&UnitAttacker>(attacker)
        .map_or(false, |a| a.enabled)
}

fn fire_at_target(world: &mut World, attacker: Entity, target: Entity) -> bool {
    let aim = match world.get::<&Position>(target) {
        Ok(p) => p.0,
        Err(_) => return false,
    };
    match world.get::<&mut Weapon>(attacker) {
        Ok(mut weapon) => {
            weapon.start_firing_at(aim);
            true
        }
        Err(_) => false,
    }
}

fn emit_target_change(
    world: &World,
    attacker: Entity,
    new_target: Option<Entity>,
    events: &mut Vec<CombatEvent>,
) {
    let unit_id = match world.get::<&Unit>(attacker) {
        Ok(u) => u.id,
        Err(_) => return,
    };
    match new_target {
        Some(target) => {
            if let Ok(unit) = world.get::<&Unit>(target) {
                events.push(CombatEvent::TargetAcquired {
                    unit_id,
                    target_id: unit.id,
                });
            }
        }
        None => events.push(CombatEvent::TargetLost { unit_id }),
    }
}
