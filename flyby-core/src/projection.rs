/// Perspective projection
use log::warn;

use crate::error::{FlybyError, FlybyResult};
use crate::matrix::Matrix4;

/// Frustum parameters for a perspective projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    /// Vertical field of view in degrees, exclusive range (0, 180)
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Perspective {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_degrees,
            aspect,
            near,
            far,
        }
    }

    /// Reject parameters that would give a degenerate or NaN matrix.
    /// NaN inputs fail every check.
    pub fn validate(&self) -> FlybyResult<()> {
        let reason = if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            format!("field of view must be in (0, 180) degrees, got {}", self.fov_degrees)
        } else if !(self.aspect > 0.0) || !self.aspect.is_finite() {
            format!("aspect must be positive, got {}", self.aspect)
        } else if !(self.near > 0.0) {
            format!("near plane must be positive, got {}", self.near)
        } else if !(self.far > self.near) || !self.far.is_finite() {
            format!("far plane ({}) must be beyond near plane ({})", self.far, self.near)
        } else {
            return Ok(());
        };

        warn!("rejecting projection {self:?}: {reason}");
        Err(FlybyError::InvalidProjection(reason))
    }

    /// Build the projection matrix.
    ///
    /// View space looks down +Z; `z = near` maps to NDC -1, `z = far` to +1,
    /// and `w_clip = z_view`.
    pub fn matrix(&self) -> FlybyResult<Matrix4> {
        self.validate()?;

        let f = 1.0 / (self.fov_degrees.to_radians() * 0.5).tan();
        let depth = self.far - self.near;

        let mut m = Matrix4::ZERO;
        m.m[0][0] = f / self.aspect;
        m.m[1][1] = f;
        m.m[2][2] = (self.far + self.near) / depth;
        m.m[2][3] = 1.0;
        m.m[3][2] = -2.0 * self.far * self.near / depth;
        Ok(m)
    }
}

impl Default for Perspective {
    fn default() -> Self {
        Self::new(70.0, 1.0, 0.001, 1000.0)
    }
}

impl Matrix4 {
    /// Perspective projection, see [`Perspective::matrix`]
    pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> FlybyResult<Self> {
        Perspective::new(fov_degrees, aspect, near, far).matrix()
    }
}
