/// Flyby Core Library - camera math for a free-flying viewer
///
/// Vector, quaternion and matrix primitives plus a camera that turns
/// per-frame input snapshots into the view and projection matrices a
/// renderer uploads. Window setup, shaders and event polling live in the
/// front-end crates.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod input;
pub mod matrix;
pub mod options;
pub mod projection;
pub mod quaternion;
pub mod vector;

// Re-export commonly used types
pub use camera::{BasisRefresh, Camera, TimeStep};
pub use error::{FlybyError, FlybyResult};
pub use geometry::{Mesh, Triangle, Vertex};
pub use input::{CameraAction, CameraInput};
pub use matrix::Matrix4;
pub use options::{CameraOptions, FlybyOptions};
pub use projection::Perspective;
pub use quaternion::Quaternion;
pub use vector::Vector3;
