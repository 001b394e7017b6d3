//! First-person player controller.
//!
//! One call to [`Player::update`] per tick, in a fixed order:
//! look → move + collide → shoot → reload → recoil → gravity.
//! Horizontal velocity snaps straight to the wished speed (no inertia);
//! vertical velocity is a single channel integrated under gravity and
//! clamped at the ground plane.

use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};

use super::collision::clip_to_colliders;
use super::weapon::Weapon;
use super::InputCmd;
use crate::tuning::{PlayerTuning, WeaponTuning};
use crate::world::{Aabb, Camera};

#[derive(Debug, Clone)]
pub struct Player {
    tuning: PlayerTuning,

    position: Vec3,
    velocity: Vec3,
    /// (yaw, pitch) in radians; pitch kept in [-π/2, π/2].
    look: Vec2,
    health: f32,

    grounded: bool,
    /// Cleared by a jump, set again once the jump key is released.
    can_jump: bool,

    weapon: Weapon,
    /// Visual-only pitch kick, decays back to 0.
    recoil: f32,

    /// Simulated seconds since spawn; shots are timestamped with it.
    clock: f64,
}

impl Player {
    const MAX_MOVE_PIECES: u32 = 256;

    pub fn new(tuning: PlayerTuning, weapon: WeaponTuning) -> Self {
        Self {
            tuning,
            position: tuning.start,
            velocity: Vec3::ZERO,
            look: Vec2::ZERO,
            health: tuning.max_health,
            grounded: false,
            can_jump: true,
            weapon: Weapon::new(weapon),
            recoil: 0.0,
            clock: 0.0,
        }
    }

    /*──────────────────────── accessors ────────────────────────────*/

    /// Eye position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.look.x
    }

    /// Stored look pitch, recoil excluded.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.look.y
    }

    #[inline]
    pub fn recoil(&self) -> f32 {
        self.recoil
    }

    #[inline]
    pub fn health(&self) -> f32 {
        self.health
    }

    #[inline]
    pub fn max_health(&self) -> f32 {
        self.tuning.max_health
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    #[inline]
    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    /// Pose to render from; pitch includes recoil.
    pub fn camera(&self) -> Camera {
        Camera::new(self.position, self.look.x, self.look.y + self.recoil)
    }

    /// Teleport, e.g. for scripted scenarios.  Velocity is kept.
    pub fn set_position(&mut self, pos: Vec3) {
        self.position = pos;
    }

    /// Set the look angles directly; pitch is clamped.
    pub fn set_look(&mut self, yaw: f32, pitch: f32) {
        self.look = Vec2::new(yaw, pitch.clamp(-FRAC_PI_2, FRAC_PI_2));
    }

    /*──────────────────────── per-tick ─────────────────────────────*/

    pub fn update(&mut self, cmd: &InputCmd, colliders: &[Aabb], dt: f32) {
        self.clock += dt as f64;

        self.rotate(cmd.look);
        self.walk(cmd, colliders, dt);
        self.shoot(cmd, dt);
        self.reload(cmd, dt);
        self.recover_recoil(dt);
        self.fall(dt);
    }

    fn rotate(&mut self, motion: Vec2) {
        let k = self.tuning.mouse_sensitivity;
        self.look.x -= motion.x * k;
        self.look.y = (self.look.y - motion.y * k).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    fn walk(&mut self, cmd: &InputCmd, colliders: &[Aabb], dt: f32) {
        let cam = self.camera();
        let wish = cam.flat_forward() * cmd.forward + cam.right() * cmd.strafe;

        if wish.length_squared() > 0.0 {
            let speed = if cmd.sprint {
                self.tuning.sprint_speed
            } else {
                self.tuning.move_speed
            };
            let dir = wish.normalize();
            self.velocity.x = dir.x * speed;
            self.velocity.z = dir.z * speed;
        } else {
            self.velocity.x = 0.0;
            self.velocity.z = 0.0;
        }

        /* jump: edge-triggered on the key, only from the ground */
        if cmd.jump && self.grounded && self.can_jump {
            self.velocity.y = self.tuning.jump_force;
            self.grounded = false;
            self.can_jump = false;
        }
        if !cmd.jump {
            self.can_jump = true;
        }

        /* collision only sees the shell just outside a face, so a long
         * frame is walked in pieces no longer than half the radius */
        let travel = Vec2::new(self.velocity.x, self.velocity.z) * dt;
        let max_step = self.tuning.radius * 0.5;
        let pieces = if max_step > 0.0 {
            ((travel.length() / max_step).ceil() as u32).clamp(1, Self::MAX_MOVE_PIECES)
        } else {
            1
        };
        let step = travel / pieces as f32;

        for _ in 0..pieces {
            self.position.x += step.x;
            self.position.z += step.y;
            clip_to_colliders(
                &mut self.position,
                self.tuning.radius,
                self.tuning.eye_height,
                colliders,
            );
        }
    }

    fn shoot(&mut self, cmd: &InputCmd, dt: f32) {
        self.weapon.cool_down(dt);
        if cmd.fire {
            let dir = self.camera().forward();
            if self.weapon.try_fire(dir, self.clock) {
                self.recoil += self.tuning.recoil_kick;
                log::trace!("shot fired, {} left in clip", self.weapon.clip());
            }
        }
    }

    fn reload(&mut self, cmd: &InputCmd, dt: f32) {
        self.weapon.advance_reload(dt);
        if cmd.reload && self.weapon.start_reload() {
            log::debug!("reloading ({} in reserve)", self.weapon.reserve());
        }
    }

    fn recover_recoil(&mut self, dt: f32) {
        if self.recoil > 0.0 {
            self.recoil = (self.recoil - self.tuning.recoil_recovery * dt).max(0.0);
        }
    }

    fn fall(&mut self, dt: f32) {
        if !self.grounded {
            self.velocity.y += self.tuning.gravity * dt;
        }
        self.position.y += self.velocity.y * dt;

        let ground = self.tuning.eye_height;
        if self.position.y <= ground {
            self.position.y = ground;
            self.velocity.y = 0.0;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }

    /*──────────────────────── combat ───────────────────────────────*/

    /// Does the live shot hit a sphere of `radius` around `target`?
    /// See [`Weapon::check_hit`]; a hit consumes the shot.
    pub fn check_shoot_hit(&mut self, target: Vec3, radius: f32) -> bool {
        self.weapon.check_hit(self.position, target, radius, self.clock)
    }

    /// Lose `amount` health, never dropping below zero.
    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount.max(0.0)).max(0.0);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
