use serde::{Deserialize, Serialize};

/// Enemy agent tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub max_health: f32,

    /// Closer than this the enemy starts chasing.
    pub detection_range: f32,

    /// Closer than this the enemy attacks instead of moving.
    pub attack_range: f32,

    /// Chase speed in units per second.
    pub move_speed: f32,

    /// Seconds between two attacks.
    pub attack_cooldown: f32,

    /// Length of the slice at the top of the cooldown during which the
    /// enemy reports itself as attacking.
    pub attack_window: f32,

    /// Duration of the white flash after being hit.
    pub hit_flash: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            detection_range: 30.0,
            attack_range: 3.0,
            move_speed: 4.0,
            attack_cooldown: 1.5,
            attack_window: 0.1,
            hit_flash: 0.1,
        }
    }
}
