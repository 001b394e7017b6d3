//! Windowed front-end: top-down view of the arena, HUD in the title bar.
//!
//! WASD move, Shift sprint, Space jump, R reload, left mouse fire, mouse
//! turns.  Escape pauses, Enter restarts once the match is over.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use combat_zone::{
    config::Config,
    input::{InputState, KeyCode, MouseButtons, poll_cmd},
    logging,
    renderer::{RendererExt, Software, TopDown},
    sim::{Phase, Simulation, TicEvent},
    world::Level,
};

const W: usize = 960;
const H: usize = 960;
/// Longest step fed to the simulation; time lost to a stalled window
/// (dragging, breakpoints) is dropped.
const MAX_DT: f32 = 0.1;
const HIT_FLASH: f32 = 0.15;

const KEYMAP: [(Key, KeyCode); 8] = [
    (Key::W, KeyCode::W),
    (Key::A, KeyCode::A),
    (Key::S, KeyCode::S),
    (Key::D, KeyCode::D),
    (Key::LeftShift, KeyCode::ShiftLeft),
    (Key::RightShift, KeyCode::ShiftRight),
    (Key::Space, KeyCode::Space),
    (Key::R, KeyCode::R),
];

/// First-person arena shooter, seen from above
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// JSON file overriding gameplay tuning
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for enemy spawn positions
    #[arg(long)]
    seed: Option<u64>,

    /// Number of enemies in the arena
    #[arg(long, value_name = "N")]
    enemies: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    logging::init(opts.verbose);

    let mut config = match &opts.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    if opts.seed.is_some() {
        config.seed = opts.seed;
    }
    if let Some(n) = opts.enemies {
        config.enemy_count = n;
    }

    let level = Level::arena();
    let view = TopDown::fit(&level, W, H);
    let mut sim = Simulation::new(level, config);

    let mut renderer = Software::default();
    let mut input = InputState::new();

    let mut win = Window::new("Combat Zone", W, H, WindowOptions::default())?;
    win.set_target_fps(60);

    let mut last_mouse: Option<(f32, f32)> = None;
    let mut flash_left = 0.0_f32;
    let mut title = String::new();
    let mut last = Instant::now();

    while win.is_open() {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32().min(MAX_DT);
        last = now;

        /* --------------- lifecycle keys ----------------------------------- */
        if win.is_key_pressed(Key::Escape, KeyRepeat::No) {
            sim.toggle_pause();
        }
        if sim.phase() == Phase::GameOver && win.is_key_pressed(Key::Enter, KeyRepeat::No) {
            sim.restart();
        }

        /* --------------- gather input -------------------------------------- */
        if win.is_active() {
            input.set_keys(
                KEYMAP
                    .iter()
                    .filter(|(k, _)| win.is_key_down(*k))
                    .map(|&(_, code)| code),
            );
            if win.get_mouse_down(MouseButton::Left) {
                input.mouse_down(MouseButtons::LEFT);
            } else {
                input.mouse_up(MouseButtons::LEFT);
            }
            let mouse = win.get_mouse_pos(MouseMode::Pass);
            if let (Some((x0, y0)), Some((x1, y1))) = (last_mouse, mouse) {
                input.mouse_moved(x1 - x0, y1 - y0);
            }
            last_mouse = mouse;
        } else {
            input.clear();
            last_mouse = None;
        }

        /* --------------- simulate ------------------------------------------ */
        let cmd = poll_cmd(&mut input);
        for event in sim.tick(&cmd, dt) {
            match event {
                TicEvent::PlayerHit { .. } => flash_left = HIT_FLASH,
                TicEvent::PlayerDied => log::info!("game over, press Enter to restart"),
                TicEvent::EnemyKilled(_) | TicEvent::EnemyRespawned(_) => {}
            }
        }
        if sim.phase() == Phase::Playing {
            flash_left = (flash_left - dt).max(0.0);
        }

        /* --------------- draw ---------------------------------------------- */
        let mut calls = view.draw_calls(sim.level(), &sim.frame());
        if flash_left > 0.0 {
            calls.push(view.hit_tint());
        }

        let mut shown = Ok(());
        renderer.draw_frame(W, H, &calls, |fb, w, h| {
            shown = win.update_with_buffer(fb, w, h);
        });
        shown?;

        let hud = sim.hud().to_string();
        if hud != title {
            win.set_title(&hud);
            title = hud;
        }
    }
    Ok(())
}
