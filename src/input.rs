//! Input state shared between the window front-end and the simulation.
//!
//! The front-end feeds raw events in (`key_down`, `mouse_moved`, …); once per
//! tick the simulation side polls it through [`InputSource`] and gets a single
//! [`InputCmd`] back.  Mouse motion accumulates between polls and is reset by
//! the read.

use std::collections::HashSet;

use bitflags::bitflags;
use glam::Vec2;

use crate::sim::InputCmd;

/// Keyboard keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    ShiftLeft,
    ShiftRight,
    Space,
    R,
}

bitflags! {
    /// Mouse buttons currently held.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MouseButtons: u8 {
        const LEFT   = 0b001;
        const RIGHT  = 0b010;
        const MIDDLE = 0b100;
    }
}

/// Polling interface the simulation reads input through.
pub trait InputSource {
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// True if *all* buttons in `button` are held.
    fn is_mouse_button_down(&self, button: MouseButtons) -> bool;

    /// Relative mouse motion since the previous call; resets to zero.
    fn consume_mouse_motion(&mut self) -> Vec2;
}

/// Event-fed input state.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    keys: HashSet<KeyCode>,
    buttons: MouseButtons,
    motion: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: KeyCode) {
        self.keys.insert(key);
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.keys.remove(&key);
    }

    /// Replace the whole held-key set (for back-ends that report a snapshot).
    pub fn set_keys(&mut self, held: impl IntoIterator<Item = KeyCode>) {
        self.keys.clear();
        self.keys.extend(held);
    }

    pub fn mouse_down(&mut self, button: MouseButtons) {
        self.buttons.insert(button);
    }

    pub fn mouse_up(&mut self, button: MouseButtons) {
        self.buttons.remove(button);
    }

    pub fn mouse_moved(&mut self, dx: f32, dy: f32) {
        self.motion += Vec2::new(dx, dy);
    }

    /// Drop everything, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.buttons = MouseButtons::empty();
        self.motion = Vec2::ZERO;
    }
}

impl InputSource for InputState {
    #[inline]
    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    #[inline]
    fn is_mouse_button_down(&self, button: MouseButtons) -> bool {
        !button.is_empty() && self.buttons.contains(button)
    }

    fn consume_mouse_motion(&mut self) -> Vec2 {
        std::mem::take(&mut self.motion)
    }
}

/// Build this tick's command from whatever is held right now.
pub fn poll_cmd<S: InputSource + ?Sized>(src: &mut S) -> InputCmd {
    let axis = |pos: bool, neg: bool| (pos as i8 - neg as i8) as f32;

    InputCmd {
        forward: axis(src.is_key_pressed(KeyCode::W), src.is_key_pressed(KeyCode::S)),
        strafe: axis(src.is_key_pressed(KeyCode::D), src.is_key_pressed(KeyCode::A)),
        sprint: src.is_key_pressed(KeyCode::ShiftLeft) || src.is_key_pressed(KeyCode::ShiftRight),
        jump: src.is_key_pressed(KeyCode::Space),
        fire: src.is_mouse_button_down(MouseButtons::LEFT),
        reload: src.is_key_pressed(KeyCode::R),
        look: src.consume_mouse_motion(),
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
