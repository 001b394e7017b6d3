//! Rendering abstraction layer.
//!
//! *The simulation never touches a pixel buffer directly.*
//! A [`TopDown`] projection turns the static [`Level`] and a per-frame
//! [`FrameView`] into a list of [`DrawCall`]s (back-to-front) and hands them
//! to a type that implements [`Renderer`].
//!
//! * Back-ends are swappable without touching game logic.
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.

use glam::{Vec2, Vec3};

use crate::sim::{AiState, FrameView};
use crate::world::{ColliderSource, Level};

/// Pixel format of the software frame-buffer (0xAARRGGBB).
///
/// Alpha is only read while blending a draw call; the frame itself is
/// always opaque.
pub type Rgba = u32;

pub const BACKGROUND: Rgba = 0xFF_202020;
pub const OBSTACLE: Rgba = 0xFF_8B4513;
pub const WALL: Rgba = 0xFF_808080;
pub const PLAYER: Rgba = 0xFF_40C040;
pub const ENEMY_IDLE: Rgba = 0xFF_A02020;
pub const ENEMY_CHASING: Rgba = 0xFF_E06020;
pub const ENEMY_ATTACKING: Rgba = 0xFF_FF2020;
pub const ENEMY_FLASH: Rgba = 0xFF_FFFFFF;
/// Translucent red laid over the whole frame when the player is hit.
pub const HIT_TINT: Rgba = 0x60_FF0000;

/// One primitive, already in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCall {
    /// Axis-aligned rectangle, `min` inclusive, `max` exclusive.
    Block { min: Vec2, max: Vec2, color: Rgba },
    /// Filled circle.
    Disc { center: Vec2, radius: f32, color: Rgba },
    /// One-pixel line segment.
    Ray { from: Vec2, to: Vec2, color: Rgba },
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
/// Software callers typically forward it to their window-manager;
/// GPU back-ends can ignore the slice because they never allocate it.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Rasterise one primitive into the internal buffer.
    fn draw(&mut self, call: &DrawCall);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Software caller passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(&mut self, width: usize, height: usize, calls: &[DrawCall], submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        for c in calls {
            self.draw(c);
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

/*──────────────────────────── projection ───────────────────────────*/

/// Orthographic map view looking straight down.
///
/// World X runs right, world Z runs down the screen, so a yaw of 0
/// (looking down −Z) points up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TopDown {
    /// World XZ shown at the screen centre.
    center: Vec2,
    /// Pixels per world unit.
    scale: f32,
    width: usize,
    height: usize,
}

impl TopDown {
    const MARGIN_PX: f32 = 16.0;
    const BODY_RADIUS: f32 = 0.5;
    const VIEW_RAY: f32 = 4.0;
    /// Colliders at least this tall are drawn as boundary walls.
    const WALL_HEIGHT: f32 = 5.0;

    pub fn new(center: Vec2, scale: f32, width: usize, height: usize) -> Self {
        Self {
            center,
            scale,
            width,
            height,
        }
    }

    /// Fit the whole level into a `width` × `height` screen, keeping a small
    /// margin.  An empty level gets a 100-unit square around the origin.
    pub fn fit(level: &Level, width: usize, height: usize) -> Self {
        let (min, max) = match level.bounds() {
            Some(b) => (Vec2::new(b.min.x, b.min.z), Vec2::new(b.max.x, b.max.z)),
            None => (Vec2::splat(-50.0), Vec2::splat(50.0)),
        };
        let extent = (max - min).max(Vec2::splat(1.0));
        let room = (Vec2::new(width as f32, height as f32) - 2.0 * Self::MARGIN_PX).max(Vec2::ONE);
        let scale = (room / extent).min_element();
        Self::new((min + max) * 0.5, scale, width, height)
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// World position to screen pixel; height is dropped.
    pub fn to_screen(&self, p: Vec3) -> Vec2 {
        let half = Vec2::new(self.width as f32, self.height as f32) * 0.5;
        (Vec2::new(p.x, p.z) - self.center) * self.scale + half
    }

    /// Everything visible this frame: arena blocks, enemies, the player and
    /// where they are looking.
    pub fn draw_calls(&self, level: &Level, frame: &FrameView) -> Vec<DrawCall> {
        let mut calls = Vec::with_capacity(level.colliders().len() + frame.enemies.len() * 2 + 2);

        for b in level.colliders() {
            let (lo, hi) = b.footprint();
            let min = self.to_screen(Vec3::new(lo.x, 0.0, lo.y));
            let max = self.to_screen(Vec3::new(hi.x, 0.0, hi.y));
            let color = if b.size().y >= Self::WALL_HEIGHT { WALL } else { OBSTACLE };
            calls.push(DrawCall::Block { min, max, color });
        }

        for e in frame.enemies.iter().filter(|e| e.visible) {
            let center = self.to_screen(e.position);
            let color = match (e.flashing, e.state) {
                (true, _) => ENEMY_FLASH,
                (false, AiState::Idle) => ENEMY_IDLE,
                (false, AiState::Chasing) => ENEMY_CHASING,
                (false, AiState::Attacking) => ENEMY_ATTACKING,
            };
            calls.push(DrawCall::Disc {
                center,
                radius: Self::BODY_RADIUS * self.scale,
                color,
            });
            let facing = Vec3::new(-e.facing.sin(), 0.0, -e.facing.cos());
            calls.push(DrawCall::Ray {
                from: center,
                to: self.to_screen(e.position + facing * Self::BODY_RADIUS * 2.0),
                color,
            });
        }

        let cam = frame.camera;
        let eye = self.to_screen(cam.pos());
        calls.push(DrawCall::Disc {
            center: eye,
            radius: Self::BODY_RADIUS * self.scale,
            color: PLAYER,
        });
        calls.push(DrawCall::Ray {
            from: eye,
            to: self.to_screen(cam.pos() + cam.flat_forward() * Self::VIEW_RAY),
            color: PLAYER,
        });
        calls
    }

    /// Full-screen translucent block for the hit flash.
    pub fn hit_tint(&self) -> DrawCall {
        DrawCall::Block {
            min: Vec2::ZERO,
            max: Vec2::new(self.width as f32, self.height as f32),
            color: HIT_TINT,
        }
    }
}

pub mod software;
pub use software::Software;

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
