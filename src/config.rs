//! Runtime configuration, optionally loaded from a JSON file.
//!
//! ```json
//! { "seed": 7, "enemy_count": 5, "tuning": { "weapon": { "clip_size": 12 } } }
//! ```
//!
//! Every field is optional; anything missing falls back to [`Config::default`].

use std::{fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tuning::Tuning;

/*──────────────────────────── Error type ───────────────────────────*/

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/*──────────────────────────── Config ───────────────────────────────*/

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spawn-position seed; `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Enemies alive in the arena at once.
    pub enemy_count: usize,

    pub tuning: Tuning,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            enemy_count: 5,
            tuning: Tuning::default(),
        }
    }
}

impl Config {
    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::debug!("loaded config from {path:?}: {config:?}");
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.tuning;
        let non_negative = [
            ("player.move_speed", t.player.move_speed),
            ("player.sprint_speed", t.player.sprint_speed),
            ("player.jump_force", t.player.jump_force),
            ("player.radius", t.player.radius),
            ("player.mouse_sensitivity", t.player.mouse_sensitivity),
            ("player.recoil_kick", t.player.recoil_kick),
            ("player.recoil_recovery", t.player.recoil_recovery),
            ("weapon.reload_time", t.weapon.reload_time),
            ("weapon.shot_cooldown", t.weapon.shot_cooldown),
            ("weapon.hit_window", t.weapon.hit_window),
            ("weapon.max_range", t.weapon.max_range),
            ("enemy.move_speed", t.enemy.move_speed),
            ("enemy.attack_cooldown", t.enemy.attack_cooldown),
            ("enemy.attack_window", t.enemy.attack_window),
            ("enemy.hit_flash", t.enemy.hit_flash),
            ("combat.hit_radius", t.combat.hit_radius),
            ("combat.shot_damage", t.combat.shot_damage),
            ("combat.enemy_damage", t.combat.enemy_damage),
            ("combat.respawn_delay", t.combat.respawn_delay),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }

        let positive = [
            ("player.max_health", t.player.max_health),
            ("enemy.max_health", t.enemy.max_health),
            ("enemy.attack_range", t.enemy.attack_range),
            ("enemy.detection_range", t.enemy.detection_range),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a finite, positive number (got {value})"
                )));
            }
        }

        // the player has to come back down to eye height
        if !t.player.gravity.is_finite() || t.player.gravity >= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "player.gravity must be a finite, negative number (got {})",
                t.player.gravity
            )));
        }
        if !t.player.eye_height.is_finite() || t.player.eye_height < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "player.eye_height must be a finite, non-negative number (got {})",
                t.player.eye_height
            )));
        }
        if !t.player.start.is_finite() {
            return Err(ConfigError::Invalid("player.start must be finite".into()));
        }
        if t.enemy.attack_range >= t.enemy.detection_range {
            return Err(ConfigError::Invalid(format!(
                "enemy.attack_range ({}) must be below enemy.detection_range ({})",
                t.enemy.attack_range, t.enemy.detection_range
            )));
        }
        if t.weapon.clip_size == 0 {
            return Err(ConfigError::Invalid("weapon.clip_size must be at least 1".into()));
        }
        Ok(())
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
