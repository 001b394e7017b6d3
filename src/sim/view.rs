//! Read-only snapshots handed to the presentation side once per frame.
//! Nothing in here points back into the simulation.

use std::fmt;

use glam::Vec3;
use hecs::Entity;

use super::{AiState, Phase};
use crate::world::Camera;

/// Everything the HUD shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudSnapshot {
    pub health: f32,
    pub max_health: f32,
    pub ammo: u32,
    pub reserve: u32,
    pub reloading: bool,
    /// 0‥1, 1 when not reloading.
    pub reload_progress: f32,
    pub score: u32,
    pub kills: u32,
    pub phase: Phase,
}

impl fmt::Display for HudSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HP {:.0}/{:.0} | ", self.health.ceil(), self.max_health)?;
        if self.reloading {
            write!(f, "RELOADING {:>3.0}% | ", self.reload_progress * 100.0)?;
        } else {
            write!(f, "AMMO {}/{} | ", self.ammo, self.reserve)?;
        }
        write!(f, "SCORE {} | KILLS {}", self.score, self.kills)?;
        match self.phase {
            Phase::Playing => Ok(()),
            Phase::Paused => write!(f, " | PAUSED"),
            Phase::GameOver => write!(f, " | GAME OVER"),
        }
    }
}

/// One enemy as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyView {
    pub entity: Entity,
    pub position: Vec3,
    /// Yaw, same convention as [`Camera::yaw`].
    pub facing: f32,
    /// False while dead and waiting to respawn.
    pub visible: bool,
    /// Recently hit.
    pub flashing: bool,
    pub state: AiState,
}

/// Per-frame pose of everything that moves.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub camera: Camera,
    pub enemies: Vec<EnemyView>,
}
