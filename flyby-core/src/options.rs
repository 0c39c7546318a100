/// Camera options with TOML file support
///
/// Every struct uses `#[serde(default)]`, so a file that only sets
/// `[camera] move_speed = 0.05` is valid.
use log::info;
use serde::{Deserialize, Serialize};

use crate::camera::{BasisRefresh, TimeStep, DEFAULT_MOVE_SPEED, DEFAULT_ROTATE_SPEED};
use crate::error::{FlybyError, FlybyResult};
use crate::vector::Vector3;
use std::path::Path;

/// Top-level options container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlybyOptions {
    pub camera: CameraOptions,
}

/// Projection and control parameters for a [`Camera`](crate::Camera)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub move_speed: f32,
    /// Radians per update, or per second with `time_step = "per_second"`
    pub rotate_speed: f32,
    pub time_step: TimeStep,
    pub basis_refresh: BasisRefresh,
    /// Initial view translation; the eye starts at its negation
    pub start_position: Vector3,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fov_degrees: 70.0,
            near: 0.001,
            far: 1000.0,
            move_speed: DEFAULT_MOVE_SPEED,
            rotate_speed: DEFAULT_ROTATE_SPEED,
            time_step: TimeStep::PerFrame,
            basis_refresh: BasisRefresh::Lagged,
            start_position: Vector3::new(0.0, 0.0, 10.0),
        }
    }
}

impl FlybyOptions {
    pub fn from_toml(content: &str) -> FlybyResult<Self> {
        toml::from_str(content).map_err(|e| FlybyError::OptionsParse(e.to_string()))
    }

    pub fn to_toml(&self) -> FlybyResult<String> {
        toml::to_string_pretty(self).map_err(|e| FlybyError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> FlybyResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml(&content)?;
        info!("loaded options from {}", path.display());
        Ok(options)
    }

    pub fn save(&self, path: &Path) -> FlybyResult<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let options = FlybyOptions::from_toml(
            r#"
            [camera]
            move_speed = 0.05
            basis_refresh = "synchronous"
            "#,
        )
        .unwrap();

        assert_eq!(options.camera.move_speed, 0.05);
        assert_eq!(options.camera.basis_refresh, BasisRefresh::Synchronous);
        assert_eq!(options.camera.fov_degrees, 70.0);
        assert_eq!(options.camera.time_step, TimeStep::PerFrame);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(FlybyOptions::from_toml("").unwrap(), FlybyOptions::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut options = FlybyOptions::default();
        options.camera.time_step = TimeStep::PerSecond;
        options.camera.start_position = Vector3::new(1.0, -2.0, 3.5);

        let text = options.to_toml().unwrap();
        assert!(text.contains("per_second"));
        assert_eq!(FlybyOptions::from_toml(&text).unwrap(), options);
    }

    #[test]
    fn test_bad_values_report_parse_error() {
        let result = FlybyOptions::from_toml("[camera]\ntime_step = \"sometimes\"\n");
        assert!(matches!(result, Err(FlybyError::OptionsParse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = FlybyOptions::load(Path::new("/nonexistent/flyby/options.toml"));
        assert!(matches!(result, Err(FlybyError::Io(_))));
    }
}
