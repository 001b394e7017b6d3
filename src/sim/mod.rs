mod collision;
mod components;
pub mod enemy;
mod player;
mod tic;
mod view;
mod weapon;

pub use collision::clip_to_colliders;
pub use components::{AiState, Brain, Dying, Facing, Health, HitFlash, InputCmd, Position};
pub use enemy::DamageOutcome;
pub use player::Player;
pub use tic::{Phase, Simulation, TicEvent, TicEvents};
pub use view::{EnemyView, FrameView, HudSnapshot};
pub use weapon::{Shot, Weapon};
