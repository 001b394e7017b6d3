//! Combat Zone – a small first-person arena shooter.
//!
//! The crate is split the same way the game runs:
//!
//! * [`input`]    – held keys / buttons and mouse motion, polled once per tick.
//! * [`world`]    – static arena geometry (colliders) and the camera pose.
//! * [`sim`]      – the tick-driven simulation: player, enemies, combat.
//! * [`renderer`] – back-end-agnostic drawing of a simulation snapshot.
//!
//! [`tuning`] and [`config`] hold every gameplay constant; [`logging`] wires
//! up `env_logger`.

pub mod config;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod world;
