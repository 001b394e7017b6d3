//! Player-vs-arena collision.
//!
//! The player is a vertical cylinder of radius `radius`.  Each box is
//! handled on its own (no broad phase) and each axis on its own: X is
//! clipped first, gated on the Z/Y overlap, then Z gated on the X/Y
//! overlap.  This is not a swept solver – a diagonal move into a corner can
//! come out differently depending on which axis is clipped second.

use glam::Vec3;

use crate::world::Aabb;

/// Push `pos` out of every collider it grazes.
///
/// A box only blocks while the eye is inside `(min.y, max.y + clearance)`,
/// so the player can stand on top of anything lower than `clearance`.
/// Only positions inside the `radius`-wide shell around a face are pushed;
/// a point already deep inside a box is left alone.
///
/// Returns `true` if any face pushed the player.
pub fn clip_to_colliders(pos: &mut Vec3, radius: f32, clearance: f32, colliders: &[Aabb]) -> bool {
    let mut touched = false;
    for b in colliders {
        touched |= clip_to_box(pos, radius, clearance, b);
    }
    touched
}

fn clip_to_box(pos: &mut Vec3, radius: f32, clearance: f32, b: &Aabb) -> bool {
    let (min, max) = (b.min, b.max);
    let in_height = pos.y > min.y && pos.y < max.y + clearance;
    if !in_height {
        return false;
    }
    let mut touched = false;

    /* ----- X faces, gated on Z overlap ---------------------------------- */
    if pos.z > min.z - radius && pos.z < max.z + radius {
        if pos.x > min.x - radius && pos.x < min.x {
            pos.x = min.x - radius;
            touched = true;
        } else if pos.x < max.x + radius && pos.x > max.x {
            pos.x = max.x + radius;
            touched = true;
        }
    }

    /* ----- Z faces, gated on (possibly clipped) X overlap --------------- */
    if pos.x > min.x - radius && pos.x < max.x + radius {
        if pos.z > min.z - radius && pos.z < min.z {
            pos.z = min.z - radius;
            touched = true;
        } else if pos.z < max.z + radius && pos.z > max.z {
            pos.z = max.z + radius;
            touched = true;
        }
    }

    touched
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
