use serde::{Deserialize, Serialize};

/// Rules the simulation loop applies between the player and enemies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    /// Radius around an enemy's origin that a shot ray must pass through.
    pub hit_radius: f32,

    /// Damage one landed shot deals to an enemy.
    pub shot_damage: f32,

    /// Damage one enemy attack deals to the player.
    pub enemy_damage: f32,

    /// Score awarded per kill.
    pub kill_score: u32,

    /// Simulated seconds between a kill and the enemy's respawn.
    pub respawn_delay: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            hit_radius: 1.5,
            shot_damage: 25.0,
            enemy_damage: 10.0,
            kill_score: 100,
            respawn_delay: 3.0,
        }
    }
}
