use glam::{Vec2, Vec3};

/// Axis-aligned box in world space; `min <= max` on every axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning two opposite corners, given in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box centred on `center` with full edge lengths `size`.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Footprint on the ground plane as `(min.xz, max.xz)`.
    #[inline]
    pub fn footprint(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(self.min.x, self.min.z),
            Vec2::new(self.max.x, self.max.z),
        )
    }
}

/// Square on the ground where enemies (re)appear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnArea {
    /// Half the side length; the square is centred on the origin.
    pub half_extent: f32,
    /// y coordinate of a spawned enemy's origin.
    pub height: f32,
}

impl Default for SpawnArea {
    fn default() -> Self {
        Self {
            half_extent: 20.0,
            height: 1.0,
        }
    }
}

/// Anything that can hand out the static collision boxes.
pub trait ColliderSource {
    /// Ordered list of colliders, fixed at construction time.
    fn colliders(&self) -> &[Aabb];
}

/// Runtime snapshot of one arena (immutable after construction).
#[derive(Clone, Debug)]
pub struct Level {
    pub name: String,
    colliders: Vec<Aabb>,
    pub spawn: SpawnArea,
}

impl Level {
    pub fn new(name: impl Into<String>, colliders: Vec<Aabb>, spawn: SpawnArea) -> Self {
        Self {
            name: name.into(),
            colliders,
            spawn,
        }
    }

    /// Axis-aligned bounds of all colliders; `None` for an empty level.
    pub fn bounds(&self) -> Option<Aabb> {
        let mut iter = self.colliders.iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, b| Aabb {
            min: acc.min.min(b.min),
            max: acc.max.max(b.max),
        }))
    }
}

impl ColliderSource for Level {
    #[inline]
    fn colliders(&self) -> &[Aabb] {
        &self.colliders
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
