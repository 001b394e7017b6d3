use serde::{Deserialize, Serialize};

/// The player's only gun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTuning {
    /// Rounds per clip.
    pub clip_size: u32,

    /// Rounds carried outside the clip at spawn.
    pub reserve: u32,

    /// Seconds from pressing reload to a full clip.
    pub reload_time: f32,

    /// Minimum seconds between two shots.
    pub shot_cooldown: f32,

    /// Seconds after firing during which the shot can still hit something.
    pub hit_window: f32,

    /// Targets further than this from the eye are never hit.
    pub max_range: f32,
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            clip_size: 30,
            reserve: 90,
            reload_time: 2.0,
            shot_cooldown: 0.15,
            hit_window: 0.1,
            max_range: 100.0,
        }
    }
}
