//! Enemy agents.
//!
//! Each enemy is a *hecs* entity.  Its behaviour is a three-state machine
//! re-evaluated every tick from nothing but the distance to the player:
//!
//! ```text
//!   distance < attack_range     → Attacking
//!   distance < detection_range  → Chasing
//!   otherwise                   → Idle
//! ```
//!
//! There is no hysteresis: an enemy sitting on a boundary flips state every
//! tick.  A dead enemy keeps its entity, gains a [`Dying`] component and is
//! ignored by everything until it respawns.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use smallvec::SmallVec;

use super::{AiState, Brain, Dying, Facing, Health, HitFlash, Position};
use crate::tuning::EnemyTuning;
use crate::world::SpawnArea;

/// What a call to [`take_damage`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Enemy already dying (or gone); nothing changed.
    Ignored,
    /// Health dropped but the enemy is still up.
    Hurt,
    /// This hit took the enemy to zero.
    Killed,
}

/// Entities whose respawn countdown ran out this tick.
pub type Expired = SmallVec<[Entity; 4]>;

/// Uniform point in the spawn square, at spawn height.
pub fn random_spawn_point<R: Rng + ?Sized>(rng: &mut R, area: SpawnArea) -> Vec3 {
    let h = area.half_extent;
    let (x, z) = if h > 0.0 {
        (rng.gen_range(-h..h), rng.gen_range(-h..h))
    } else {
        (0.0, 0.0)
    };
    Vec3::new(x, area.height, z)
}

/// Spawn a full-health enemy somewhere in `area`.
pub fn spawn_enemy<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    tuning: &EnemyTuning,
    area: SpawnArea,
) -> Entity {
    spawn_enemy_at(world, random_spawn_point(rng, area), tuning)
}

/// Spawn a full-health enemy at a fixed position.
pub fn spawn_enemy_at(world: &mut World, pos: Vec3, tuning: &EnemyTuning) -> Entity {
    world.spawn((
        Position(pos),
        Facing::default(),
        Health::full(tuning.max_health),
        Brain::default(),
    ))
}

/// State the machine picks for a given distance to the player.
#[inline]
pub fn classify(distance: f32, tuning: &EnemyTuning) -> AiState {
    if distance < tuning.attack_range {
        AiState::Attacking
    } else if distance < tuning.detection_range {
        AiState::Chasing
    } else {
        AiState::Idle
    }
}

#[inline]
pub fn is_dying(world: &World, enemy: Entity) -> bool {
    world.get::<&Dying>(enemy).is_ok()
}

/// Advance one enemy by `dt` towards / against the player at `player_pos`.
pub fn think(world: &mut World, enemy: Entity, player_pos: Vec3, tuning: &EnemyTuning, dt: f32) {
    if is_dying(world, enemy) {
        return;
    }
    let Ok((pos, facing, brain)) =
        world.query_one_mut::<(&mut Position, &mut Facing, &mut Brain)>(enemy)
    else {
        return;
    };

    brain.state = classify(pos.0.distance(player_pos), tuning);

    match brain.state {
        AiState::Chasing => {
            chase(pos, facing, player_pos, tuning.move_speed * dt);
            brain.has_attacked = false;
        }
        AiState::Attacking => {
            if brain.attack_timer <= 0.0 && !brain.has_attacked {
                brain.has_attacked = true;
                brain.attack_timer = tuning.attack_cooldown;
            }
        }
        AiState::Idle => brain.has_attacked = false,
    }

    if brain.attack_timer > 0.0 {
        brain.attack_timer -= dt;
    }
}

/// Step along the ground towards the player and turn to face them.
fn chase(pos: &mut Position, facing: &mut Facing, target: Vec3, step: f32) {
    let mut delta = target - pos.0;
    delta.y = 0.0;
    let dir = delta.normalize_or_zero();
    if dir == Vec3::ZERO {
        return;
    }
    pos.0.x += dir.x * step;
    pos.0.z += dir.z * step;
    facing.0 = (-dir.x).atan2(-dir.z);
}

/// True while the enemy's current attack should land on the player.
///
/// The check looks at the *top* of the cooldown: it holds from the tick the
/// attack starts until `attack_window` seconds of cooldown have elapsed, so
/// a single attack is reported on every tick inside that window.
pub fn is_attacking(world: &World, enemy: Entity, tuning: &EnemyTuning) -> bool {
    match world.get::<&Brain>(enemy) {
        Ok(brain) => {
            brain.has_attacked
                && brain.attack_timer > tuning.attack_cooldown - tuning.attack_window
        }
        Err(_) => false,
    }
}

/// Apply `amount` damage.  Reaching zero health marks the enemy as dying;
/// damage to a dying enemy is ignored.
pub fn take_damage(
    world: &mut World,
    enemy: Entity,
    amount: f32,
    tuning: &EnemyTuning,
) -> DamageOutcome {
    if is_dying(world, enemy) {
        return DamageOutcome::Ignored;
    }
    let dead = match world.query_one_mut::<&mut Health>(enemy) {
        Ok(health) => {
            health.current -= amount;
            health.current <= 0.0
        }
        Err(_) => return DamageOutcome::Ignored,
    };

    let _ = world.insert_one(enemy, HitFlash(tuning.hit_flash));
    if dead {
        let _ = world.insert_one(enemy, Dying::default());
        DamageOutcome::Killed
    } else {
        DamageOutcome::Hurt
    }
}

/// Start the respawn countdown of a dying enemy.
pub fn schedule_respawn(world: &mut World, enemy: Entity, delay: f32) {
    if let Ok(dying) = world.query_one_mut::<&mut Dying>(enemy) {
        dying.respawn_in = Some(delay);
    }
}

/// Bring an enemy back: full health, fresh brain, new random position.
pub fn respawn<R: Rng + ?Sized>(
    world: &mut World,
    enemy: Entity,
    rng: &mut R,
    tuning: &EnemyTuning,
    area: SpawnArea,
) {
    let spot = random_spawn_point(rng, area);
    if let Ok((pos, facing, health, brain)) =
        world.query_one_mut::<(&mut Position, &mut Facing, &mut Health, &mut Brain)>(enemy)
    {
        pos.0 = spot;
        *facing = Facing::default();
        *health = Health::full(tuning.max_health);
        *brain = Brain::default();
    }
    let _ = world.remove_one::<Dying>(enemy);
    let _ = world.remove_one::<HitFlash>(enemy);
}

/// Count scheduled respawns down by `dt`; returns the ones that are due.
pub fn count_down_respawns(world: &mut World, dt: f32) -> Expired {
    let mut due = Expired::new();
    for (e, dying) in world.query_mut::<&mut Dying>() {
        if let Some(left) = dying.respawn_in.as_mut() {
            *left -= dt;
            if *left <= 0.0 {
                due.push(e);
            }
        }
    }
    due
}

/// Fade hit flashes out.
pub fn fade_flashes(world: &mut World, dt: f32) {
    let mut done: SmallVec<[Entity; 8]> = SmallVec::new();
    for (e, flash) in world.query_mut::<&mut HitFlash>() {
        flash.0 -= dt;
        if flash.0 <= 0.0 {
            done.push(e);
        }
    }
    for e in done {
        let _ = world.remove_one::<HitFlash>(e);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    fn tuning() -> EnemyTuning {
        EnemyTuning::default()
    }

    fn state(world: &World, e: Entity) -> AiState {
        world.get::<&Brain>(e).unwrap().state
    }

    fn pos(world: &World, e: Entity) -> Vec3 {
        world.get::<&Position>(e).unwrap().0
    }

    #[test]
    fn state_is_a_function_of_distance() {
        let t = tuning();
        assert_eq!(classify(0.0, &t), AiState::Attacking);
        assert_eq!(classify(2.99, &t), AiState::Attacking);
        assert_eq!(classify(3.0, &t), AiState::Chasing);
        assert_eq!(classify(29.99, &t), AiState::Chasing);
        assert_eq!(classify(30.0, &t), AiState::Idle);
        assert_eq!(classify(1.0e6, &t), AiState::Idle);
    }

    #[test]
    fn idle_far_away_does_not_move() {
        let mut world = World::new();
        let t = tuning();
        let e = spawn_enemy_at(&mut world, Vec3::new(35.0, 1.0, 0.0), &t);

        think(&mut world, e, Vec3::new(0.0, 1.0, 0.0), &t, 0.5);
        assert_eq!(state(&world, e), AiState::Idle);
        assert_eq!(pos(&world, e), Vec3::new(35.0, 1.0, 0.0));
    }

    #[test]
    fn chases_on_the_ground_at_move_speed() {
        let mut world = World::new();
        let t = tuning();
        let e = spawn_enemy_at(&mut world, Vec3::new(10.0, 1.0, 0.0), &t);

        // player eye is higher than the enemy; chasing stays horizontal
        think(&mut world, e, Vec3::new(0.0, 2.0, 0.0), &t, 0.5);
        assert_eq!(state(&world, e), AiState::Chasing);
        let p = pos(&world, e);
        assert!((p.x - 8.0).abs() < 1e-5);
        assert_eq!(p.y, 1.0);
        assert!(p.z.abs() < 1e-5);

        // facing -X, i.e. yaw +90°
        let yaw = world.get::<&Facing>(e).unwrap().0;
        assert!((yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn attacks_once_per_engagement() {
        let mut world = World::new();
        let t = tuning();
        let e = spawn_enemy_at(&mut world, Vec3::new(1.0, 1.0, 0.0), &t);
        let player = Vec3::new(0.0, 1.0, 0.0);
        let dt = 0.02;

        think(&mut world, e, player, &t, dt);
        assert_eq!(state(&world, e), AiState::Attacking);
        assert!(is_attacking(&world, e, &t));

        // reported for the first `attack_window` seconds of the cooldown
        let mut reported = 1;
        for _ in 0..200 {
            think(&mut world, e, player, &t, dt);
            if is_attacking(&world, e, &t) {
                reported += 1;
            }
        }
        // 0.1 s window at 0.02 s ticks
        assert!((4..=6).contains(&reported), "reported {reported} ticks");

        // still in range after the cooldown: guard keeps it quiet
        assert!(!is_attacking(&world, e, &t));
        assert!(world.get::<&Brain>(e).unwrap().has_attacked);
    }

    #[test]
    fn leaving_range_rearms_the_attack() {
        let mut world = World::new();
        let t = tuning();
        let e = spawn_enemy_at(&mut world, Vec3::new(1.0, 1.0, 0.0), &t);

        think(&mut world, e, Vec3::ZERO.with_y(1.0), &t, 0.1);
        assert!(world.get::<&Brain>(e).unwrap().has_attacked);

        // player steps away: chase clears the guard
        think(&mut world, e, Vec3::new(20.0, 1.0, 0.0), &t, 0.1);
        assert!(!world.get::<&Brain>(e).unwrap().has_attacked);
    }

    #[test]
    fn damage_kills_and_is_idempotent_while_dying() {
        let mut world = World::new();
        let t = tuning();
        let e = spawn_enemy_at(&mut world, Vec3::ZERO, &t);

        for _ in 0..3 {
            assert_eq!(take_damage(&mut world, e, 25.0, &t), DamageOutcome::Hurt);
        }
        assert_eq!(take_damage(&mut world, e, 25.0, &t), DamageOutcome::Killed);
        assert!(is_dying(&world, e));

        assert_eq!(take_damage(&mut world, e, 25.0, &t), DamageOutcome::Ignored);
        assert_eq!(world.get::<&Health>(e).unwrap().current, 0.0);
    }

    #[test]
    fn dying_enemy_is_inert() {
        let mut world = World::new();
        let t = tuning();
        let e = spawn_enemy_at(&mut world, Vec3::new(10.0, 1.0, 0.0), &t);
        take_damage(&mut world, e, 1000.0, &t);

        think(&mut world, e, Vec3::ZERO, &t, 1.0);
        assert_eq!(pos(&world, e), Vec3::new(10.0, 1.0, 0.0));
    }

    #[test]
    fn respawn_countdown_then_reset() {
        let mut world = World::new();
        let mut rng = SmallRng::seed_from_u64(7);
        let t = tuning();
        let area = SpawnArea::default();
        let e = spawn_enemy_at(&mut world, Vec3::new(40.0, 1.0, 0.0), &t);

        take_damage(&mut world, e, 100.0, &t);
        // nothing scheduled yet: the countdown never fires
        assert!(count_down_respawns(&mut world, 10.0).is_empty());

        schedule_respawn(&mut world, e, 3.0);
        assert!(count_down_respawns(&mut world, 2.0).is_empty());
        let due = count_down_respawns(&mut world, 1.0);
        assert_eq!(due.as_slice(), &[e]);

        respawn(&mut world, e, &mut rng, &t, area);
        assert!(!is_dying(&world, e));
        assert_eq!(world.get::<&Health>(e).unwrap().current, 100.0);
        let p = pos(&world, e);
        assert!(p.x.abs() <= 20.0 && p.z.abs() <= 20.0);
        assert_eq!(p.y, 1.0);
    }

    #[test]
    fn flashes_fade() {
        let mut world = World::new();
        let t = tuning();
        let e = spawn_enemy_at(&mut world, Vec3::ZERO, &t);
        take_damage(&mut world, e, 1.0, &t);
        assert!(world.get::<&HitFlash>(e).is_ok());

        fade_flashes(&mut world, 0.05);
        assert!(world.get::<&HitFlash>(e).is_ok());
        fade_flashes(&mut world, 0.06);
        assert!(world.get::<&HitFlash>(e).is_err());
    }

    #[test]
    fn spawn_points_stay_in_the_square() {
        let mut rng = SmallRng::seed_from_u64(42);
        let area = SpawnArea::default();
        for _ in 0..1000 {
            let p = random_spawn_point(&mut rng, area);
            assert!((-20.0..20.0).contains(&p.x));
            assert!((-20.0..20.0).contains(&p.z));
            assert_eq!(p.y, 1.0);
        }
    }
}
