//! Cleanup system: removes lingering corpses and stray projectiles.

use hecs::{Entity, World};

use skirmish_core::components::{Dead, Projectile, Unit};
use skirmish_core::constants::{CORPSE_LINGER_TICKS, WORLD_RADIUS};
use skirmish_core::types::Position;

/// Despawn corpses past their linger time and projectiles that left the
/// world. Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, current_tick: u64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (dead, _unit)) in world.query_mut::<(&Dead, &Unit)>() {
        if current_tick.saturating_sub(dead.since_tick) >= CORPSE_LINGER_TICKS {
            despawn_buffer.push(entity);
        }
    }

    let radius_sq = WORLD_RADIUS * WORLD_RADIUS;
    for (entity, (pos, _proj)) in world.query_mut::<(&Position, &Projectile)>() {
        if pos.0.length_squared() > radius_sq {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
