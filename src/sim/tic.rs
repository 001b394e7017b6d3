use glam::Vec3;
use hecs::{Entity, World};
use rand::{SeedableRng, rngs::SmallRng};
use smallvec::SmallVec;

use super::enemy::{self, DamageOutcome};
use super::{Brain, Dying, EnemyView, Facing, FrameView, HitFlash, HudSnapshot, InputCmd, Player, Position};
use crate::config::Config;
use crate::world::{ColliderSource, Level};

/// Where the match is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Ticks are ignored; respawn countdowns freeze with everything else.
    Paused,
    /// The player ran out of health; only [`Simulation::restart`] leaves it.
    GameOver,
}

/// Something the presentation side may want to react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TicEvent {
    /// An enemy attack landed (drives the red hit flash).
    PlayerHit { damage: f32 },
    EnemyKilled(Entity),
    EnemyRespawned(Entity),
    PlayerDied,
}

pub type TicEvents = SmallVec<[TicEvent; 4]>;

/// Owns the arena, the player and the enemy ECS world and advances them
/// together, one variable-length tick per rendered frame.
pub struct Simulation {
    config: Config,
    level: Level,
    world: World,
    /// Spawn order; ticks walk it back to front.
    enemies: Vec<Entity>,
    player: Player,
    rng: SmallRng,
    score: u32,
    kills: u32,
    phase: Phase,
}

impl Simulation {
    pub fn new(level: Level, config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let player = Player::new(config.tuning.player, config.tuning.weapon);

        let mut sim = Self {
            config,
            level,
            world: World::new(),
            enemies: Vec::new(),
            player,
            rng,
            score: 0,
            kills: 0,
            phase: Phase::Playing,
        };
        sim.populate();
        log::info!(
            "{}: {} colliders, {} enemies",
            sim.level.name,
            sim.level.colliders().len(),
            sim.enemies.len()
        );
        sim
    }

    fn populate(&mut self) {
        for _ in 0..self.config.enemy_count {
            let e = enemy::spawn_enemy(
                &mut self.world,
                &mut self.rng,
                &self.config.tuning.enemy,
                self.level.spawn,
            );
            self.enemies.push(e);
        }
    }

    /*──────────────────────── accessors ────────────────────────────*/

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[inline]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[inline]
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Enemy entities in spawn order.
    #[inline]
    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn kills(&self) -> u32 {
        self.kills
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /*──────────────────────── lifecycle ────────────────────────────*/

    /// Add one more enemy at a fixed spot; it joins the tick order last.
    pub fn spawn_enemy_at(&mut self, pos: Vec3) -> Entity {
        let e = enemy::spawn_enemy_at(&mut self.world, pos, &self.config.tuning.enemy);
        self.enemies.push(e);
        e
    }

    fn clear_enemies(&mut self) {
        self.world.clear();
        self.enemies.clear();
    }

    pub fn set_paused(&mut self, paused: bool) {
        let next = match (self.phase, paused) {
            (Phase::Playing, true) => Phase::Paused,
            (Phase::Paused, false) => Phase::Playing,
            (phase, _) => phase,
        };
        if next != self.phase {
            log::info!("{:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(self.phase == Phase::Playing);
    }

    /// Fresh player, fresh enemies, zero score.  Pending respawns are
    /// dropped together with their enemies.
    pub fn restart(&mut self) {
        self.clear_enemies();
        self.player = Player::new(self.config.tuning.player, self.config.tuning.weapon);
        self.score = 0;
        self.kills = 0;
        self.phase = Phase::Playing;
        self.populate();
        log::info!("match restarted");
    }

    /*──────────────────────── the tick ─────────────────────────────*/

    /// Advance everything by `dt` seconds.
    ///
    /// Order: due respawns → player → each enemy, last spawned first
    /// (think, then take the player's shot, then hit the player).  Only the
    /// first enemy a shot lines up with is hit.
    pub fn tick(&mut self, cmd: &InputCmd, dt: f32) -> TicEvents {
        let mut events = TicEvents::new();
        if self.phase != Phase::Playing || !dt.is_finite() {
            return events;
        }
        let dt = dt.max(0.0);
        let tuning = self.config.tuning;

        /* -- 0: dead enemies waiting to come back ----------------------- */
        for e in enemy::count_down_respawns(&mut self.world, dt) {
            enemy::respawn(&mut self.world, e, &mut self.rng, &tuning.enemy, self.level.spawn);
            log::debug!("enemy {e:?} respawned");
            events.push(TicEvent::EnemyRespawned(e));
        }
        enemy::fade_flashes(&mut self.world, dt);

        /* -- 1: player --------------------------------------------------- */
        self.player.update(cmd, self.level.colliders(), dt);
        let player_pos = self.player.position();

        /* -- 2: enemies, back to front ----------------------------------- */
        for &e in self.enemies.iter().rev() {
            enemy::think(&mut self.world, e, player_pos, &tuning.enemy, dt);
            if enemy::is_dying(&self.world, e) {
                continue;
            }
            let Ok(pos) = self.world.get::<&Position>(e).map(|p| p.0) else {
                continue;
            };

            if self.player.check_shoot_hit(pos, tuning.combat.hit_radius)
                && enemy::take_damage(&mut self.world, e, tuning.combat.shot_damage, &tuning.enemy)
                    == DamageOutcome::Killed
            {
                self.kills += 1;
                self.score += tuning.combat.kill_score;
                enemy::schedule_respawn(&mut self.world, e, tuning.combat.respawn_delay);
                log::info!("enemy {e:?} down, score {} kills {}", self.score, self.kills);
                events.push(TicEvent::EnemyKilled(e));
                continue;
            }

            if enemy::is_attacking(&self.world, e, &tuning.enemy) {
                let damage = tuning.combat.enemy_damage;
                self.player.take_damage(damage);
                events.push(TicEvent::PlayerHit { damage });
            }
        }

        /* -- 3: did the player survive? ---------------------------------- */
        if self.player.is_dead() {
            self.phase = Phase::GameOver;
            log::info!("player died, final score {} ({} kills)", self.score, self.kills);
            events.push(TicEvent::PlayerDied);
        }

        events
    }

    /*──────────────────────── snapshots ────────────────────────────*/

    pub fn hud(&self) -> HudSnapshot {
        let weapon = self.player.weapon();
        HudSnapshot {
            health: self.player.health(),
            max_health: self.player.max_health(),
            ammo: weapon.clip(),
            reserve: weapon.reserve(),
            reloading: weapon.is_reloading(),
            reload_progress: weapon.reload_progress(),
            score: self.score,
            kills: self.kills,
            phase: self.phase,
        }
    }

    pub fn frame(&self) -> FrameView {
        let mut enemies = Vec::with_capacity(self.enemies.len());
        for &e in &self.enemies {
            if let Ok(mut q) = self.world.query_one::<(
                &Position,
                &Facing,
                &Brain,
                Option<&Dying>,
                Option<&HitFlash>,
            )>(e)
            {
                if let Some((pos, facing, brain, dying, flash)) = q.get() {
                    enemies.push(EnemyView {
                        entity: e,
                        position: pos.0,
                        facing: facing.0,
                        visible: dying.is_none(),
                        flashing: flash.is_some(),
                        state: brain.state,
                    });
                }
            }
        }
        FrameView {
            camera: self.player.camera(),
            enemies,
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
