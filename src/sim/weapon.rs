//! The player's gun: clip and reserve, reload timer, fire-rate cooldown and
//! the most recent shot, which stays "live" for a short hit window.

use glam::Vec3;

use crate::tuning::WeaponTuning;

/// A fired shot waiting to be tested against targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    /// Unit look direction at the moment of firing.
    pub dir: Vec3,
    /// Player clock reading when the shot was fired.
    pub fired_at: f64,
}

#[derive(Debug, Clone)]
pub struct Weapon {
    tuning: WeaponTuning,
    clip: u32,
    reserve: u32,
    /// Seconds until the next shot is allowed; may go negative.
    cooldown: f32,
    /// Seconds left on the current reload.
    reload_remaining: Option<f32>,
    last_shot: Option<Shot>,
}

impl Weapon {
    pub fn new(tuning: WeaponTuning) -> Self {
        Self {
            tuning,
            clip: tuning.clip_size,
            reserve: tuning.reserve,
            cooldown: 0.0,
            reload_remaining: None,
            last_shot: None,
        }
    }

    /*──────────────────────── accessors ────────────────────────────*/

    #[inline]
    pub fn clip(&self) -> u32 {
        self.clip
    }

    #[inline]
    pub fn reserve(&self) -> u32 {
        self.reserve
    }

    #[inline]
    pub fn is_reloading(&self) -> bool {
        self.reload_remaining.is_some()
    }

    /// 0 when a reload just started, 1 when idle or done.
    pub fn reload_progress(&self) -> f32 {
        match self.reload_remaining {
            Some(left) if self.tuning.reload_time > 0.0 => {
                (1.0 - left / self.tuning.reload_time).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    #[inline]
    pub fn last_shot(&self) -> Option<Shot> {
        self.last_shot
    }

    /*──────────────────────── per-tick ─────────────────────────────*/

    /// Count the fire-rate cooldown down.
    #[inline]
    pub fn cool_down(&mut self, dt: f32) {
        self.cooldown -= dt;
    }

    /// Fire along `dir` if the cooldown has run out, the clip is not empty
    /// and no reload is in progress.  Returns `true` if a round was spent.
    pub fn try_fire(&mut self, dir: Vec3, now: f64) -> bool {
        if self.cooldown > 0.0 || self.is_reloading() || self.clip == 0 {
            return false;
        }
        self.clip -= 1;
        self.cooldown = self.tuning.shot_cooldown;
        self.last_shot = Some(Shot {
            dir: dir.normalize_or_zero(),
            fired_at: now,
        });
        true
    }

    /// Advance a running reload.  Returns `true` on the tick it completes.
    pub fn advance_reload(&mut self, dt: f32) -> bool {
        let Some(left) = self.reload_remaining.as_mut() else {
            return false;
        };
        *left -= dt;
        if *left > 0.0 {
            return false;
        }

        let wanted = self.tuning.clip_size.saturating_sub(self.clip);
        let moved = wanted.min(self.reserve);
        self.clip += moved;
        self.reserve -= moved;
        self.reload_remaining = None;
        log::debug!("reload done: clip {} reserve {}", self.clip, self.reserve);
        true
    }

    /// Start reloading unless already reloading, the clip is full or the
    /// reserve is empty.
    pub fn start_reload(&mut self) -> bool {
        if self.is_reloading() || self.clip >= self.tuning.clip_size || self.reserve == 0 {
            return false;
        }
        self.reload_remaining = Some(self.tuning.reload_time);
        true
    }

    /// Test the live shot against a sphere of `radius` around `target`.
    ///
    /// The ray starts at `origin` (the eye) and runs along the recorded
    /// direction.  A hit needs the closest point on the ray to lie within
    /// `radius` of the target *and* the target to be nearer than the
    /// weapon's range.  A hit consumes the shot, so of several targets
    /// tested against one shot only the first that lines up is hit.  Shots
    /// older than the hit window are dropped and never hit.
    pub fn check_hit(&mut self, origin: Vec3, target: Vec3, radius: f32, now: f64) -> bool {
        let Some(shot) = self.last_shot else {
            return false;
        };
        if now - shot.fired_at > self.tuning.hit_window as f64 {
            self.last_shot = None;
            return false;
        }

        let to_target = target - origin;
        let along = to_target.dot(shot.dir).max(0.0);
        let closest = origin + shot.dir * along;
        let miss_by = closest.distance(target);

        if miss_by < radius && to_target.length() < self.tuning.max_range {
            self.last_shot = None;
            return true;
        }
        false
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
