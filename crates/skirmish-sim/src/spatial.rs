//! Broad-phase spatial index — a uniform grid over everything that has a
//! position.
//!
//! Rebuilt from the world once per tick, before any system queries it.
//! Queries fill a caller-owned buffer and never allocate; results carry no
//! ordering guarantee.

use std::collections::HashMap;

use glam::Vec2;
use hecs::{Entity, World};

use skirmish_core::types::Position;

/// Uniform grid of square cells. Bucket vectors are reused across rebuilds so
/// steady-state operation allocates nothing.
pub struct SpatialGrid {
    cell_size: f32,
    buckets: HashMap<(i32, i32), Vec<(Entity, Vec2)>>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            buckets: HashMap::new(),
        }
    }

    /// Re-index every entity that has a `Position`.
    pub fn rebuild(&mut self, world: &World) {
        for bucket in self.buckets.values_mut() {
            bucket.clear();
        }
        let mut query = world.query::<&Position>();
        for (entity, pos) in query.iter() {
            let cell = self.cell_of(pos.0);
            self.buckets.entry(cell).or_default().push((entity, pos.0));
        }
    }

    /// Collect entities within `radius` of `center` (boundary inclusive) into
    /// `out`, clearing it first. Results beyond `out`'s capacity are dropped
    /// silently. Returns the number of entities written.
    pub fn query_circle(&self, center: Vec2, radius: f32, out: &mut Vec<Entity>) -> usize {
        out.clear();
        let capacity = out.capacity();
        let radius_sq = radius * radius;
        let min = self.cell_of(center - Vec2::splat(radius));
        let max = self.cell_of(center + Vec2::splat(radius));

        'cells: for cx in min.0..=max.0 {
            for cy in min.1..=max.1 {
                let bucket = match self.buckets.get(&(cx, cy)) {
                    Some(b) => b,
                    None => continue,
                };
                for &(entity, position) in bucket {
                    if position.distance_squared(center) > radius_sq {
                        continue;
                    }
                    if out.len() == capacity {
                        break 'cells;
                    }
                    out.push(entity);
                }
            }
        }

        out.len()
    }

    fn cell_of(&self, p: Vec2) -> (i32, i32) {
        (
            (p.x / self.cell_size).floor() as i32,
            (p.y / self.cell_size).floor() as i32,
        )
    }
}
