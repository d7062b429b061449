//! Snapshot system: assembles the visible battle state after a tick.

use hecs::{Entity, World};

use skirmish_core::components::{Health, Projectile, Unit, Weapon};
use skirmish_core::enums::{BattlePhase, FireOrder};
use skirmish_core::events::CombatEvent;
use skirmish_core::state::{AttackerView, BattleSnapshot, BattleStats, ProjectileView, UnitView};
use skirmish_core::types::{Position, SimTime};

use crate::systems::attacker::UnitAttacker;

/// Build a snapshot of everything visible this tick. `events` is the drained
/// event buffer; ownership moves into the snapshot.
pub fn build(
    world: &World,
    time: &SimTime,
    phase: BattlePhase,
    events: Vec<CombatEvent>,
    stats: &BattleStats,
) -> BattleSnapshot {
    let mut units = Vec::new();
    {
        let mut query = world.query::<(&Unit, &Position, &Health)>();
        for (entity, (unit, pos, health)) in query.iter() {
            units.push(UnitView {
                unit_id: unit.id,
                faction: unit.faction.0,
                x: pos.0.x,
                y: pos.0.y,
                health: health.current,
                max_health: health.max,
                alive: health.is_alive(),
                firing: is_firing(world, entity),
                attacker: attacker_view(world, entity),
            });
        }
    }

    let mut projectiles = Vec::new();
    {
        let mut query = world.query::<(&Projectile, &Position)>();
        for (_entity, (_proj, pos)) in query.iter() {
            projectiles.push(ProjectileView {
                x: pos.0.x,
                y: pos.0.y,
            });
        }
    }

    BattleSnapshot {
        time: *time,
        phase,
        units,
        projectiles,
        events,
        stats: stats.clone(),
    }
}

fn is_firing(world: &World, entity: Entity) -> bool {
    world
        .get::<&Weapon>(entity)
        .map_or(false, |w| w.order != FireOrder::Hold)
}

fn attacker_view(world: &World, entity: Entity) -> Option<AttackerView> {
    let a = world.get::<&UnitAttacker>(entity).ok()?;
    let current_target = crate::systems::attacker::current_target(world, entity)
        .and_then(|t| world.get::<&Unit>(t).ok().map(|u| u.id));
    Some(AttackerView {
        attack_radius: a.attack_radius,
        attack_on_sight: a.attack_on_sight,
        enabled: a.enabled,
        current_target,
    })
}
