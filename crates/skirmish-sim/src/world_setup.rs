//! Scenario construction: spawning units and the default skirmish layout.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{Health, Unit, Weapon};
use skirmish_core::constants::{
    DEFAULT_ATTACK_RADIUS, SKIRMISH_LINE_OFFSET, SKIRMISH_PLACEMENT_JITTER, SKIRMISH_RANK_SPACING,
    SKIRMISH_SQUAD_SIZE, UNIT_MAX_HEALTH, WEAPON_COOLDOWN_SECS, WEAPON_DAMAGE,
};
use skirmish_core::factions::{FactionId, HostilityTable};
use skirmish_core::types::{Position, Velocity};

use crate::systems::attacker::{self, UnitAttacker};

/// Faction of the western battle line in the default scenario.
pub const RED: FactionId = FactionId(1);
/// Faction of the eastern battle line in the default scenario.
pub const BLUE: FactionId = FactionId(2);

/// Spawn a plain unit: identity, kinematics, health, and a weapon.
pub fn spawn_unit(world: &mut World, id: u32, faction: FactionId, position: Vec2) -> Entity {
    world.spawn((
        Unit { id, faction },
        Position(position),
        Velocity(Vec2::ZERO),
        Health::new(UNIT_MAX_HEALTH),
        Weapon::new(WEAPON_DAMAGE, WEAPON_COOLDOWN_SECS),
    ))
}

/// Spawn a unit with an attack controller attached.
pub fn spawn_attacker_unit(
    world: &mut World,
    id: u32,
    faction: FactionId,
    position: Vec2,
    attack_radius: f32,
    attack_on_sight: bool,
) -> Entity {
    let entity = spawn_unit(world, id, faction, position);
    let mut controller = UnitAttacker::new(attack_radius);
    controller.attack_on_sight = attack_on_sight;
    // spawn_unit always bundles a Weapon, so install cannot refuse.
    let _ = attacker::install(world, entity, controller);
    entity
}

/// Set up the default skirmish: two mutually hostile lines facing each other
/// across the origin, every unit seeking targets on its own.
pub fn setup_skirmish(
    world: &mut World,
    hostility: &mut HostilityTable,
    rng: &mut ChaCha8Rng,
    next_unit_id: &mut u32,
) {
    hostility.declare_hostile(RED, BLUE);

    for rank in 0..SKIRMISH_SQUAD_SIZE {
        let y = rank as f32 * SKIRMISH_RANK_SPACING;
        let jitter_w = rng.gen_range(-SKIRMISH_PLACEMENT_JITTER..=SKIRMISH_PLACEMENT_JITTER);
        let jitter_e = rng.gen_range(-SKIRMISH_PLACEMENT_JITTER..=SKIRMISH_PLACEMENT_JITTER);

        let id = alloc_id(next_unit_id);
        spawn_attacker_unit(
            world,
            id,
            RED,
            Vec2::new(-SKIRMISH_LINE_OFFSET + jitter_w, y),
            DEFAULT_ATTACK_RADIUS,
            true,
        );

        let id = alloc_id(next_unit_id);
        spawn_attacker_unit(
            world,
            id,
            BLUE,
            Vec2::new(SKIRMISH_LINE_OFFSET + jitter_e, y),
            DEFAULT_ATTACK_RADIUS,
            true,
        );
    }
}

fn alloc_id(next: &mut u32) -> u32 {
    let id = *next;
    *next += 1;
    id
}
