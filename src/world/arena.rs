//! The one hand-built arena: a walled 100×100 square with six obstacles.

use glam::Vec3;

use super::geometry::{Aabb, Level, SpawnArea};

/// `(center, size)` of the four boundary walls.
const WALLS: [([f32; 3], [f32; 3]); 4] = [
    ([0.0, 2.5, -50.0], [100.0, 5.0, 1.0]), // back
    ([0.0, 2.5, 50.0], [100.0, 5.0, 1.0]),  // front
    ([-50.0, 2.5, 0.0], [1.0, 5.0, 100.0]), // left
    ([50.0, 2.5, 0.0], [1.0, 5.0, 100.0]),  // right
];

/// `(center, size)` of the crates and pillars inside the walls.
const OBSTACLES: [([f32; 3], [f32; 3]); 6] = [
    ([10.0, 1.5, 10.0], [3.0, 3.0, 3.0]),
    ([-15.0, 1.5, -15.0], [4.0, 3.0, 4.0]),
    ([20.0, 1.0, -20.0], [2.0, 2.0, 2.0]),
    ([-25.0, 2.0, 15.0], [5.0, 4.0, 3.0]),
    ([15.0, 1.5, -10.0], [3.0, 3.0, 3.0]),
    ([-10.0, 2.0, 20.0], [4.0, 4.0, 2.0]),
];

impl Level {
    /// Walls first, then obstacles; collider order is part of the contract.
    pub fn arena() -> Self {
        let colliders = WALLS
            .iter()
            .chain(OBSTACLES.iter())
            .map(|&(c, s)| Aabb::from_center_size(Vec3::from_array(c), Vec3::from_array(s)))
            .collect();

        Level::new("Combat Zone", colliders, SpawnArea::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::ColliderSource;

    #[test]
    fn arena_has_walls_then_obstacles() {
        let level = Level::arena();
        let boxes = level.colliders();
        assert_eq!(boxes.len(), 10);

        // back wall
        assert_eq!(boxes[0].min, Vec3::new(-50.0, 0.0, -50.5));
        assert_eq!(boxes[0].max, Vec3::new(50.0, 5.0, -49.5));
        // first obstacle
        assert_eq!(boxes[4].min, Vec3::new(8.5, 0.0, 8.5));
    }

    #[test]
    fn spawn_square_is_inside_the_walls() {
        let level = Level::arena();
        let bounds = level.bounds().unwrap();
        assert!(level.spawn.half_extent < bounds.max.x);
        assert!(-level.spawn.half_extent > bounds.min.x);
    }
}
