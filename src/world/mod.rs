mod arena;
mod camera;
mod geometry;

pub use geometry::{Aabb, ColliderSource, Level, SpawnArea};

pub use camera::Camera;
