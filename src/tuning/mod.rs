//! Gameplay tuning.
//!
//! Kept apart from runtime configuration (seed, enemy count):
//! these numbers decide how the game *feels*, and every one of them can be
//! overridden from the JSON config file.

mod combat;
mod enemy;
mod player;
mod weapon;

pub use combat::CombatTuning;
pub use enemy::EnemyTuning;
pub use player::PlayerTuning;
pub use weapon::WeaponTuning;

use serde::{Deserialize, Serialize};

/// Every tuning table, grouped the way the config file nests them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub weapon: WeaponTuning,
    pub enemy: EnemyTuning,
    pub combat: CombatTuning,
}
