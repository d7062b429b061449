//! Weapon system: turns standing fire orders into projectiles.
//!
//! The controller only sets orders; cadence, spread, and projectile spawning
//! happen here. A dead unit's weapon goes cold regardless of the order it
//! last received.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{Health, Projectile, Unit, Weapon};
use skirmish_core::constants::{DT, PROJECTILE_SPEED, WEAPON_SPREAD_RADIANS};
use skirmish_core::enums::FireOrder;
use skirmish_core::events::CombatEvent;
use skirmish_core::state::BattleStats;
use skirmish_core::types::{Position, Velocity};

/// Advance cooldowns and fire one projectile per ready weapon with an aim
/// point.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<CombatEvent>,
    stats: &mut BattleStats,
) {
    // Shots are collected first; spawning mid-query is not possible.
    let mut shots: Vec<(u32, Vec2, Vec2, f32)> = Vec::new();
    for (_entity, (unit, pos, health, weapon)) in
        world.query_mut::<(&Unit, &Position, &Health, &mut Weapon)>()
    {
        if weapon.cooldown_remaining > 0.0 {
            weapon.cooldown_remaining = (weapon.cooldown_remaining - DT).max(0.0);
        }
        if !health.is_alive() {
            continue;
        }
        let aim = match weapon.order {
            FireOrder::FireAt(p) => p,
            FireOrder::Hold => continue,
        };
        if weapon.cooldown_remaining > 0.0 {
            continue;
        }
        weapon.cooldown_remaining = weapon.cooldown_secs;
        shots.push((unit.id, pos.0, aim, weapon.damage));
    }

    for (unit_id, origin, aim, damage) in shots {
        let to_aim = aim - origin;
        let base_angle = if to_aim.length_squared() > f32::EPSILON {
            to_aim.y.atan2(to_aim.x)
        } else {
            0.0
        };
        let angle = base_angle + rng.gen_range(-WEAPON_SPREAD_RADIANS..=WEAPON_SPREAD_RADIANS);
        let velocity = Vec2::new(angle.cos(), angle.sin()) * PROJECTILE_SPEED;

        world.spawn((
            Position(origin),
            Velocity(velocity),
            Projectile { damage, aim },
        ));
        stats.shots_fired += 1;
        events.push(CombatEvent::ShotFired {
            unit_id,
            aim_x: aim.x,
            aim_y: aim.y,
        });
    }
}
