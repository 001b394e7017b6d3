use std::f32::consts::FRAC_PI_2;

use approx::assert_relative_eq;
use glam::Vec3;
use rstest::{fixture, rstest};

use combat_zone::config::Config;
use combat_zone::sim::{AiState, Health, InputCmd, Phase, Simulation, TicEvent};
use combat_zone::world::Level;

/// Arena with no random enemies and the player standing at the origin.
#[fixture]
fn sim() -> Simulation {
    let config = Config {
        seed: Some(7),
        enemy_count: 0,
        ..Config::default()
    };
    let mut sim = Simulation::new(Level::arena(), config);
    for _ in 0..120 {
        sim.tick(&InputCmd::default(), 1.0 / 60.0);
    }
    assert!(sim.player().is_grounded());
    sim
}

fn fire() -> InputCmd {
    InputCmd {
        fire: true,
        ..InputCmd::default()
    }
}

fn health(sim: &Simulation, e: hecs::Entity) -> f32 {
    sim.world().get::<&Health>(e).unwrap().current
}

/// Four shots at 0.15 s spacing into an enemy 10 units ahead.
fn shoot_enemy_down(sim: &mut Simulation) -> hecs::Entity {
    let e = sim.spawn_enemy_at(Vec3::new(0.0, 1.0, -10.0));
    let mut killed = false;
    for _ in 0..4 {
        killed |= sim.tick(&fire(), 0.15).contains(&TicEvent::EnemyKilled(e));
    }
    assert!(killed);
    e
}

#[rstest]
#[case(40.0, AiState::Idle)]
#[case(20.0, AiState::Chasing)]
#[case(2.0, AiState::Attacking)]
fn enemy_state_follows_distance(mut sim: Simulation, #[case] distance: f32, #[case] expected: AiState) {
    // same height as the eye, so the 3-D distance is exactly `distance`
    sim.spawn_enemy_at(Vec3::new(0.0, 2.0, -distance));
    sim.tick(&InputCmd::default(), 0.001);
    assert_eq!(sim.frame().enemies[0].state, expected);
}

#[rstest]
fn idle_enemy_wakes_up_and_attacks(mut sim: Simulation) {
    let e = sim.spawn_enemy_at(Vec3::new(0.0, 1.0, -40.0));
    sim.tick(&InputCmd::default(), 0.1);
    assert_eq!(sim.frame().enemies[0].state, AiState::Idle);
    assert_eq!(sim.frame().enemies[0].position, Vec3::new(0.0, 1.0, -40.0));

    // walk into detection range: the enemy starts closing in
    sim.player_mut().set_position(Vec3::new(0.0, 2.0, -15.0));
    sim.tick(&InputCmd::default(), 0.5);
    let view = sim.frame().enemies[0];
    assert_eq!(view.state, AiState::Chasing);
    assert_relative_eq!(view.position.z, -38.0, epsilon = 1e-4);

    // step right next to it
    sim.player_mut().set_position(Vec3::new(0.0, 2.0, -37.0));
    let events = sim.tick(&InputCmd::default(), 0.02);
    assert_eq!(sim.frame().enemies[0].state, AiState::Attacking);
    assert!(events.contains(&TicEvent::PlayerHit { damage: 10.0 }));
    assert_eq!(sim.player().health(), 90.0);
    assert_eq!(health(&sim, e), 100.0);
}

#[rstest]
fn empty_clip_then_reload(mut sim: Simulation) {
    for _ in 0..30 {
        sim.tick(&fire(), 0.15);
    }
    assert_eq!(sim.hud().ammo, 0);

    // dry fire does nothing
    sim.tick(&fire(), 0.15);
    assert_eq!(sim.hud().ammo, 0);
    assert_eq!(sim.hud().reserve, 90);

    let reload = InputCmd {
        reload: true,
        ..InputCmd::default()
    };
    sim.tick(&reload, 0.25);
    assert!(sim.hud().reloading);
    for _ in 0..7 {
        sim.tick(&InputCmd::default(), 0.25);
        assert!(sim.hud().reloading);
    }
    sim.tick(&InputCmd::default(), 0.25);

    let hud = sim.hud();
    assert!(!hud.reloading);
    assert_eq!(hud.ammo, 30);
    assert_eq!(hud.reserve, 60);
}

#[rstest]
fn four_hits_kill_and_the_enemy_comes_back(mut sim: Simulation) {
    let e = shoot_enemy_down(&mut sim);

    assert_eq!(sim.kills(), 1);
    assert_eq!(sim.score(), 100);
    assert!(!sim.frame().enemies[0].visible);
    assert!(sim.hud().to_string().ends_with("SCORE 100 | KILLS 1"));

    // 3 s later it is back
    assert!(sim.tick(&InputCmd::default(), 1.0).is_empty());
    assert!(sim.tick(&InputCmd::default(), 1.0).is_empty());
    let events = sim.tick(&InputCmd::default(), 1.0);
    assert!(events.contains(&TicEvent::EnemyRespawned(e)));

    let view = sim.frame().enemies[0];
    assert!(view.visible);
    assert_eq!(health(&sim, e), 100.0);
    assert!(view.position.x.abs() <= 20.0 && view.position.z.abs() <= 20.0);
}

#[rstest]
fn one_shot_hits_one_enemy(mut sim: Simulation) {
    let near = sim.spawn_enemy_at(Vec3::new(0.0, 1.0, -10.0));
    let far = sim.spawn_enemy_at(Vec3::new(0.0, 1.0, -20.0));

    sim.tick(&fire(), 0.016);

    // most recently spawned is tested first
    assert_eq!(health(&sim, far), 75.0);
    assert_eq!(health(&sim, near), 100.0);
}

#[rstest]
fn pause_holds_the_respawn_countdown(mut sim: Simulation) {
    let e = shoot_enemy_down(&mut sim);

    sim.set_paused(true);
    assert!(sim.tick(&InputCmd::default(), 10.0).is_empty());
    assert!(sim.hud().to_string().ends_with("PAUSED"));

    sim.set_paused(false);
    assert!(sim.tick(&InputCmd::default(), 2.0).is_empty());
    let events = sim.tick(&InputCmd::default(), 1.0);
    assert!(events.contains(&TicEvent::EnemyRespawned(e)));
}

#[rstest]
fn walls_stop_the_player(mut sim: Simulation) {
    let forward = InputCmd {
        forward: 1.0,
        ..InputCmd::default()
    };
    for _ in 0..360 {
        sim.tick(&forward, 1.0 / 60.0);
    }
    // back wall face at z = -49.5, radius 0.5
    assert_relative_eq!(sim.player().position().z, -49.0, epsilon = 1e-4);
}

#[rstest]
#[case(1.0 / 60.0)]
#[case(0.1)]
fn sprinting_into_a_wall_stops_at_any_frame_rate(mut sim: Simulation, #[case] dt: f32) {
    let sprint = InputCmd {
        forward: 1.0,
        sprint: true,
        ..InputCmd::default()
    };
    // 16 u/s for 4 s: far more than the 49 units to the wall
    let ticks = (4.0 / dt).round() as usize;
    for _ in 0..ticks {
        sim.tick(&sprint, dt);
    }
    assert_relative_eq!(sim.player().position().z, -49.0, epsilon = 1e-4);
}

#[rstest]
fn shots_follow_the_look_direction(mut sim: Simulation) {
    let e = sim.spawn_enemy_at(Vec3::new(10.0, 1.0, 0.0));

    // still facing -Z: the enemy off to the right is missed
    sim.tick(&fire(), 0.15);
    assert_eq!(health(&sim, e), 100.0);

    // yaw -90 degrees looks down +X
    sim.player_mut().set_look(-FRAC_PI_2, 0.0);
    sim.tick(&fire(), 0.15);
    assert_eq!(health(&sim, e), 75.0);
}

#[rstest]
fn dying_ends_the_match_until_restart(mut sim: Simulation) {
    sim.player_mut().take_damage(95.0);
    sim.spawn_enemy_at(Vec3::new(1.0, 1.0, 0.0));

    let events = sim.tick(&InputCmd::default(), 0.02);
    assert!(events.contains(&TicEvent::PlayerDied));
    assert_eq!(sim.phase(), Phase::GameOver);
    assert_eq!(sim.player().health(), 0.0);
    assert!(sim.hud().to_string().ends_with("GAME OVER"));

    assert!(sim.tick(&fire(), 0.1).is_empty());
    assert_eq!(sim.hud().ammo, 30);

    sim.restart();
    assert_eq!(sim.phase(), Phase::Playing);
    assert_eq!(sim.player().health(), 100.0);
    assert!(sim.enemies().is_empty());
}
