use glam::Vec3;

/// Player view-point in world space.
///
/// * y is up; at `yaw == 0` the camera looks down **-Z**.
/// * `pitch` is the *rendered* pitch, i.e. it already includes recoil.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pos: Vec3,  // eye position
    yaw: f32,   // radians, positive = turn left
    pitch: f32, // radians, positive = look up
}

impl Camera {
    /// Create a new camera at `pos`, facing `yaw`, tilted by `pitch`.
    pub fn new(pos: Vec3, yaw: f32, pitch: f32) -> Self {
        Self { pos, yaw, pitch }
    }

    /// World-space eye position.
    #[inline]
    pub fn pos(&self) -> Vec3 {
        self.pos
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector the camera looks along, pitch included.
    #[inline]
    pub fn forward(self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp)
    }

    /// Forward flattened onto the ground plane (unit length).
    #[inline(always)]
    pub fn flat_forward(self) -> Vec3 {
        let (s, c) = self.yaw.sin_cos();
        Vec3::new(-s, 0.0, -c)
    }

    /// Unit vector pointing to the camera's right on the ground plane.
    #[inline(always)]
    pub fn right(self) -> Vec3 {
        // forward × up
        self.flat_forward().cross(Vec3::Y)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
