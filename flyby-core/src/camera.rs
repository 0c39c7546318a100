/// Free-flying camera driven by per-frame input
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::FlybyResult;
use crate::input::CameraInput;
use crate::matrix::Matrix4;
use crate::options::CameraOptions;
use crate::projection::Perspective;
use crate::quaternion::Quaternion;
use crate::vector::Vector3;

/// Where the camera's forward/up/right basis comes from each update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasisRefresh {
    /// Move and rotate with last frame's basis, then read the new basis out
    /// of the freshly built view matrix. Movement lags rotation by one frame.
    #[default]
    Lagged,
    /// Derive the basis from the orientation, rotate, derive it again, then
    /// move. Movement follows this frame's rotation.
    Synchronous,
}

/// How `move_speed` and `rotate_speed` relate to elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeStep {
    /// Speeds are applied once per update; elapsed time is ignored
    #[default]
    PerFrame,
    /// Speeds are per second and scaled by elapsed time
    PerSecond,
}

impl TimeStep {
    fn scale(self, speed: f32, delta_time: f32) -> f32 {
        match self {
            Self::PerFrame => speed,
            Self::PerSecond => speed * delta_time.max(0.0),
        }
    }
}

pub const DEFAULT_MOVE_SPEED: f32 = 0.01;
pub const DEFAULT_ROTATE_SPEED: f32 = 0.001;

/// Camera state owned by the frame loop.
///
/// `position` is the view translation, i.e. the eye point negated; see
/// [`Camera::eye`]. The view matrix is `orientation · translation(position)`.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vector3,
    pub forward: Vector3,
    pub up: Vector3,
    pub right: Vector3,
    pub orientation: Quaternion,
    pub move_speed: f32,
    pub rotate_speed: f32,
    pub time_step: TimeStep,
    pub basis_refresh: BasisRefresh,
    perspective: Perspective,
    projection: Matrix4,
    view: Matrix4,
}

impl Camera {
    /// Camera at the origin with identity orientation. Fails if the
    /// projection parameters are unusable.
    pub fn new(perspective: Perspective) -> FlybyResult<Self> {
        let projection = perspective.matrix()?;
        let mut camera = Self {
            position: Vector3::ZERO,
            forward: Vector3::Z,
            up: Vector3::Y,
            right: Vector3::X,
            orientation: Quaternion::IDENTITY,
            move_speed: DEFAULT_MOVE_SPEED,
            rotate_speed: DEFAULT_ROTATE_SPEED,
            time_step: TimeStep::default(),
            basis_refresh: BasisRefresh::default(),
            perspective,
            projection,
            view: Matrix4::IDENTITY,
        };
        camera.rebuild_view();
        debug!("camera created with {perspective:?}");
        Ok(camera)
    }

    pub fn from_options(options: &CameraOptions, aspect: f32) -> FlybyResult<Self> {
        let perspective = Perspective::new(options.fov_degrees, aspect, options.near, options.far);
        let mut camera = Self::new(perspective)?;
        camera.move_speed = options.move_speed;
        camera.rotate_speed = options.rotate_speed;
        camera.time_step = options.time_step;
        camera.basis_refresh = options.basis_refresh;
        Ok(camera.with_position(options.start_position))
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = position;
        self.rebuild_view();
        self
    }

    pub fn with_orientation(mut self, orientation: Quaternion) -> Self {
        self.orientation = orientation;
        self.rebuild_view();
        self
    }

    /// Initial basis used by the first update. In [`BasisRefresh::Lagged`]
    /// mode it is only replaced once the first view matrix is built.
    pub fn with_basis(mut self, forward: Vector3, up: Vector3, right: Vector3) -> Self {
        self.forward = forward;
        self.up = up;
        self.right = right;
        self
    }

    /// Replace the projection. On error the previous projection is kept.
    pub fn set_perspective_projection(
        &mut self,
        fov_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> FlybyResult<()> {
        let perspective = Perspective::new(fov_degrees, aspect, near, far);
        self.projection = perspective.matrix()?;
        self.perspective = perspective;
        debug!("projection rebuilt with {perspective:?}");
        Ok(())
    }

    /// Rebuild the projection for a new viewport shape.
    pub fn set_aspect(&mut self, aspect: f32) -> FlybyResult<()> {
        let Perspective {
            fov_degrees,
            near,
            far,
            ..
        } = self.perspective;
        self.set_perspective_projection(fov_degrees, aspect, near, far)
    }

    /// Advance one frame.
    ///
    /// Rotations are applied in the order pitch, yaw, roll, each about the
    /// basis held at the start of the rotation step. Simultaneous movement
    /// flags add up, so diagonal movement is faster than `move_speed`.
    /// With no flag set neither `position` nor `orientation` is touched.
    pub fn update(&mut self, input: &CameraInput, delta_time: f32) {
        let move_step = self.time_step.scale(self.move_speed, delta_time);
        let rotate_step = self.time_step.scale(self.rotate_speed, delta_time);

        match self.basis_refresh {
            BasisRefresh::Lagged => {
                self.apply_movement(input, move_step);
                self.apply_rotation(input, rotate_step);
                self.rebuild_view();
                self.refresh_basis_from_view();
            }
            BasisRefresh::Synchronous => {
                self.refresh_basis_from_orientation();
                self.apply_rotation(input, rotate_step);
                self.refresh_basis_from_orientation();
                self.apply_movement(input, move_step);
                self.rebuild_view();
            }
        }

        trace!(
            "camera update dt={delta_time:.4} position={:?} orientation={:?}",
            self.position,
            self.orientation
        );
    }

    fn apply_movement(&mut self, input: &CameraInput, step: f32) {
        // Each flag moves the eye (the negated position) in its named direction
        if input.move_forward {
            self.position -= self.forward.scale(step);
        }
        if input.move_back {
            self.position += self.forward.scale(step);
        }
        if input.move_right {
            self.position -= self.right.scale(step);
        }
        if input.move_left {
            self.position += self.right.scale(step);
        }
        if input.move_up {
            self.position -= self.up.scale(step);
        }
        if input.move_down {
            self.position += self.up.scale(step);
        }
    }

    fn apply_rotation(&mut self, input: &CameraInput, step: f32) {
        let (right, up, forward) = (self.right, self.up, self.forward);
        if input.pitch_up {
            self.orientation.rotate(right, step);
        }
        if input.pitch_down {
            self.orientation.rotate(right, -step);
        }
        if input.yaw_left {
            self.orientation.rotate(up, step);
        }
        if input.yaw_right {
            self.orientation.rotate(up, -step);
        }
        if input.roll_left {
            self.orientation.rotate(forward, -step);
        }
        if input.roll_right {
            self.orientation.rotate(forward, step);
        }
    }

    fn rebuild_view(&mut self) {
        let translation = Matrix4::identity().translated(self.position);
        self.view = self.orientation.to_matrix().multiply(&translation);
    }

    fn refresh_basis_from_view(&mut self) {
        self.forward = self.view.forward_vector();
        self.up = self.view.up_vector();
        self.right = self.view.right_vector();
    }

    fn refresh_basis_from_orientation(&mut self) {
        let rotation = self.orientation.to_matrix();
        self.forward = rotation.forward_vector();
        self.up = rotation.up_vector();
        self.right = rotation.right_vector();
    }

    /// World-space eye point
    pub fn eye(&self) -> Vector3 {
        -self.position
    }

    pub fn view_matrix(&self) -> &Matrix4 {
        &self.view
    }

    pub fn projection_matrix(&self) -> &Matrix4 {
        &self.projection
    }

    /// `projection · view`
    pub fn view_projection_matrix(&self) -> Matrix4 {
        self.projection * self.view
    }

    pub fn perspective(&self) -> &Perspective {
        &self.perspective
    }
}
