//! Projectile system: arrival detection, damage application, death
//! reporting.
//!
//! A projectile detonates once it has passed its aim point, damaging every
//! live unit near the impact. Lethal hits mark the unit as a corpse and are
//! reported through the death buffer so the engine can notify the unit's
//! attack controller.

use glam::Vec2;
use hecs::{Entity, World};

use skirmish_core::components::{Dead, Health, Projectile, Unit};
use skirmish_core::constants::PROJECTILE_HIT_RADIUS;
use skirmish_core::events::CombatEvent;
use skirmish_core::state::BattleStats;
use skirmish_core::types::{Position, Velocity};

/// Detonate arrived projectiles and apply their damage.
pub fn run(
    world: &mut World,
    current_tick: u64,
    events: &mut Vec<CombatEvent>,
    stats: &mut BattleStats,
    deaths: &mut Vec<Entity>,
) {
    // A projectile has arrived once its aim point is no longer ahead of it.
    // It detonates at the aim point itself; with discrete integration the
    // body may overshoot by up to a full step.
    let mut arrivals: Vec<(Entity, Vec2, f32)> = Vec::new();
    {
        let mut query = world.query::<(&Projectile, &Position, &Velocity)>();
        for (entity, (proj, pos, vel)) in query.iter() {
            if (proj.aim - pos.0).dot(vel.0) <= 0.0 {
                arrivals.push((entity, proj.aim, proj.damage));
            }
        }
    }

    let hit_radius_sq = PROJECTILE_HIT_RADIUS * PROJECTILE_HIT_RADIUS;
    let mut corpses: Vec<Entity> = Vec::new();
    for &(_, impact, damage) in &arrivals {
        for (entity, (unit, pos, health)) in world.query_mut::<(&Unit, &Position, &mut Health)>() {
            if pos.0.distance_squared(impact) > hit_radius_sq {
                continue;
            }
            if !health.is_alive() {
                continue;
            }
            health.current = (health.current - damage).max(0.0);
            events.push(CombatEvent::UnitDamaged {
                unit_id: unit.id,
                amount: damage,
                remaining: health.current,
            });
            if !health.is_alive() {
                events.push(CombatEvent::UnitDied { unit_id: unit.id });
                stats.units_lost += 1;
                corpses.push(entity);
                deaths.push(entity);
            }
        }
    }

    for entity in corpses {
        let _ = world.insert_one(entity, Dead {
            since_tick: current_tick,
        });
    }
    for (entity, _, _) in arrivals {
        let _ = world.despawn(entity);
    }
}
