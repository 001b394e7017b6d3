use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Movement and look tuning for the player controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Where a fresh player appears (eye position, falls to the ground).
    pub start: Vec3,

    /// Walking speed in units per second.
    pub move_speed: f32,

    /// Speed while a sprint key is held.
    pub sprint_speed: f32,

    /// Upward velocity given by a jump.
    pub jump_force: f32,

    /// Vertical acceleration in units per second², negative is down.
    pub gravity: f32,

    /// Eye height above the floor; also the height of the ground plane the
    /// eye rests on.
    pub eye_height: f32,

    /// Collision cylinder radius.
    pub radius: f32,

    /// Radians of look rotation per unit of mouse motion.
    pub mouse_sensitivity: f32,

    pub max_health: f32,

    /// Visual pitch added per shot, radians.
    pub recoil_kick: f32,

    /// Linear recoil decay, radians per second.
    pub recoil_recovery: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            start: Vec3::new(0.0, 5.0, 0.0),
            move_speed: 10.0,
            sprint_speed: 16.0,
            jump_force: 8.0,
            gravity: -25.0,
            eye_height: 2.0,
            radius: 0.5,
            mouse_sensitivity: 0.002,
            max_health: 100.0,
            recoil_kick: 0.1,
            recoil_recovery: 5.0,
        }
    }
}
