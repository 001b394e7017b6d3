//! ---------------------------------------------------------------------------
//! CPU rasteriser
//!
//! * Fills an internal `Vec<u32>` frame-buffer in **0xAARRGGBB** format.
//! * Draw calls arrive back-to-front and are painted in order; no depth
//!   buffer.  A call whose alpha byte is below 0xFF is blended over what is
//!   already there.
//! * Everything is clipped to the frame, so off-screen geometry is harmless.
//! ---------------------------------------------------------------------------

use glam::Vec2;

use crate::renderer::{BACKGROUND, DrawCall, Renderer, Rgba};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(BACKGROUND);
    }

    fn draw(&mut self, call: &DrawCall) {
        match *call {
            DrawCall::Block { min, max, color } => self.fill_rect(min, max, color),
            DrawCall::Disc {
                center,
                radius,
                color,
            } => self.fill_disc(center, radius, color),
            DrawCall::Ray { from, to, color } => self.line(from, to, color),
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*──────────────────────── rasterisation ──────────────────────────────*/

impl Software {
    /// Screen-space span `[lo, hi)` clipped to `0..limit`, in whole pixels.
    fn clip_span(lo: f32, hi: f32, limit: usize) -> std::ops::Range<usize> {
        let a = lo.min(hi).floor().max(0.0) as usize;
        let b = (lo.max(hi).ceil().max(0.0) as usize).min(limit);
        a..b.max(a)
    }

    #[inline]
    fn plot(&mut self, x: usize, y: usize, color: Rgba) {
        let px = &mut self.scratch[y * self.width + x];
        *px = blend(*px, color);
    }

    fn fill_rect(&mut self, min: Vec2, max: Vec2, color: Rgba) {
        let xs = Self::clip_span(min.x, max.x, self.width);
        for y in Self::clip_span(min.y, max.y, self.height) {
            for x in xs.clone() {
                self.plot(x, y, color);
            }
        }
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius.is_nan() || radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let xs = Self::clip_span(center.x - radius, center.x + radius, self.width);
        for y in Self::clip_span(center.y - radius, center.y + radius, self.height) {
            let dy = y as f32 + 0.5 - center.y;
            for x in xs.clone() {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.plot(x, y, color);
                }
            }
        }
    }

    /// DDA line, both endpoints included.
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        let delta = to - from;
        let steps = delta.abs().max_element().ceil();
        if !steps.is_finite() {
            return;
        }
        let steps = steps as usize;
        let inc = if steps == 0 { Vec2::ZERO } else { delta / steps as f32 };

        let mut p = from;
        for _ in 0..=steps {
            if p.x >= 0.0 && p.y >= 0.0 {
                let (x, y) = (p.x as usize, p.y as usize);
                if x < self.width && y < self.height {
                    self.plot(x, y, color);
                }
            }
            p += inc;
        }
    }
}

/// `src` over `dst` using the alpha byte of `src`; result is opaque.
fn blend(dst: Rgba, src: Rgba) -> Rgba {
    let a = src >> 24;
    if a == 0xFF {
        return src;
    }
    let mix = |shift: u32| {
        let d = (dst >> shift) & 0xFF;
        let s = (src >> shift) & 0xFF;
        ((s * a + d * (0xFF - a)) / 0xFF) << shift
    };
    0xFF00_0000 | mix(16) | mix(8) | mix(0)
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RendererExt;

    const RED: Rgba = 0xFF_FF0000;
    const BLUE: Rgba = 0xFF_0000FF;

    fn render(w: usize, h: usize, calls: &[DrawCall]) -> Vec<Rgba> {
        let mut sw = Software::default();
        let mut out = Vec::new();
        sw.draw_frame(w, h, calls, |fb, fw, fh| {
            assert_eq!((fw, fh), (w, h));
            out.extend_from_slice(fb);
        });
        out
    }

    #[test]
    fn empty_frame_is_background() {
        let fb = render(4, 3, &[]);
        assert_eq!(fb.len(), 12);
        assert!(fb.iter().all(|&px| px == BACKGROUND));
    }

    #[test]
    fn block_fills_half_open_rect() {
        let fb = render(
            8,
            8,
            &[DrawCall::Block {
                min: Vec2::new(1.0, 2.0),
                max: Vec2::new(3.0, 4.0),
                color: BLUE,
            }],
        );
        assert_eq!(fb.iter().filter(|&&px| px == BLUE).count(), 4);
        assert_eq!(fb[2 * 8 + 1], BLUE);
        assert_eq!(fb[3 * 8 + 2], BLUE);
        assert_eq!(fb[4 * 8 + 3], BACKGROUND);
    }

    #[test]
    fn off_screen_geometry_is_clipped() {
        let fb = render(
            4,
            4,
            &[
                DrawCall::Block {
                    min: Vec2::new(-10.0, -10.0),
                    max: Vec2::new(100.0, 1.0),
                    color: BLUE,
                },
                DrawCall::Disc {
                    center: Vec2::new(-50.0, -50.0),
                    radius: 3.0,
                    color: RED,
                },
                DrawCall::Ray {
                    from: Vec2::new(-5.0, 3.5),
                    to: Vec2::new(9.0, 3.5),
                    color: RED,
                },
            ],
        );
        assert!(fb[..4].iter().all(|&px| px == BLUE));
        assert!(fb[12..].iter().all(|&px| px == RED));
        assert!(fb[4..12].iter().all(|&px| px == BACKGROUND));
    }

    #[test]
    fn disc_is_round() {
        let fb = render(
            9,
            9,
            &[DrawCall::Disc {
                center: Vec2::new(4.5, 4.5),
                radius: 3.0,
                color: RED,
            }],
        );
        assert_eq!(fb[4 * 9 + 4], RED);
        assert_eq!(fb[4 * 9 + 1], RED);
        // corners of the bounding box stay clear
        assert_eq!(fb[9 + 1], BACKGROUND);
        assert_eq!(fb[7 * 9 + 7], BACKGROUND);
    }

    #[test]
    fn ray_includes_both_ends() {
        let fb = render(
            5,
            5,
            &[DrawCall::Ray {
                from: Vec2::new(0.5, 0.5),
                to: Vec2::new(4.5, 4.5),
                color: RED,
            }],
        );
        for i in 0..5 {
            assert_eq!(fb[i * 5 + i], RED);
        }
        assert_eq!(fb.iter().filter(|&&px| px == RED).count(), 5);
    }

    #[test]
    fn translucent_block_blends() {
        assert_eq!(blend(0xFF_000000, 0x80_FF0000), 0xFF_800000);
        assert_eq!(blend(0xFF_123456, BLUE), BLUE);
        assert_eq!(blend(0xFF_123456, 0x00_FFFFFF), 0xFF_123456);
    }
}
