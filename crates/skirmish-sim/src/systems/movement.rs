//! Movement system: fixed-timestep position integration.

use hecs::World;

use skirmish_core::constants::DT;
use skirmish_core::types::{Position, Velocity};

/// Integrate positions for everything that moves.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0 * DT;
    }
}
