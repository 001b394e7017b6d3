use glam::{Vec2, Vec3};

/// World-space origin of an enemy (feet, not eyes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec3);

/// Heading about the Y axis, radians; 0 faces -Z like the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Facing(pub f32);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }
}

/// What an enemy decided to do this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AiState {
    #[default]
    Idle,
    Chasing,
    Attacking,
}

/// Enemy decision state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Brain {
    pub state: AiState,
    /// Seconds until the next attack may start; counts down while > 0.
    pub attack_timer: f32,
    /// Set when an attack starts; cleared once the enemy stops attacking.
    pub has_attacked: bool,
}

/// Present while an enemy is dead: hidden and inert, waiting to respawn.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dying {
    /// Simulated seconds left before respawn; `None` until one is scheduled.
    pub respawn_in: Option<f32>,
}

/// Cosmetic white flash after a hit, seconds remaining.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitFlash(pub f32);

/// One tick worth of player intent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    pub forward: f32, // –1 … +1
    pub strafe: f32,  // –1 … +1  (left / right)
    pub sprint: bool, // Shift
    pub jump: bool,   // Space, held
    pub fire: bool,   // left mouse, held
    pub reload: bool, // R
    pub look: Vec2,   // raw mouse motion since last tick
}
