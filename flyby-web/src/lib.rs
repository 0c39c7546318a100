/// Flyby Web - camera handle for WebGL2 pages
///
/// The page owns the canvas, shaders and event listeners. It forwards
/// key state through `set_action`, calls `update` once per animation frame
/// and uploads the matrices with `upload_uniforms`.
use flyby_core::{Camera, CameraAction, CameraInput, CameraOptions, FlybyError, FlybyOptions};
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{WebGl2RenderingContext, WebGlUniformLocation};

fn to_js(err: FlybyError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WebCamera {
    camera: Camera,
    input: CameraInput,
}

impl WebCamera {
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Result<WebCamera, FlybyError> {
        Ok(WebCamera {
            camera: Camera::from_options(options, aspect)?,
            input: CameraInput::default(),
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn input(&self) -> &CameraInput {
        &self.input
    }
}

#[wasm_bindgen]
impl WebCamera {
    /// Camera with default options for a canvas of the given aspect ratio
    #[wasm_bindgen(constructor)]
    pub fn new(aspect: f32) -> Result<WebCamera, JsValue> {
        Self::from_options(&CameraOptions::default(), aspect).map_err(to_js)
    }

    /// Camera configured from a TOML options document
    pub fn with_toml(options: &str, aspect: f32) -> Result<WebCamera, JsValue> {
        let options = FlybyOptions::from_toml(options).map_err(to_js)?;
        Self::from_options(&options.camera, aspect).map_err(to_js)
    }

    /// Hold or release a control, e.g. `set_action("yawLeft", true)` on keydown
    pub fn set_action(&mut self, name: &str, active: bool) -> Result<(), JsValue> {
        let action: CameraAction = name.parse().map_err(to_js)?;
        self.input.set(action, active);
        Ok(())
    }

    pub fn release_all(&mut self) {
        self.input = CameraInput::default();
    }

    /// Advance one frame with `delta_time` seconds elapsed
    pub fn update(&mut self, delta_time: f32) {
        self.camera.update(&self.input, delta_time);
    }

    /// Rebuild the projection after the canvas changes shape
    pub fn resize(&mut self, aspect: f32) -> Result<(), JsValue> {
        debug!("canvas aspect changed to {aspect}");
        self.camera.set_aspect(aspect).map_err(to_js)
    }

    /// Column-major view matrix
    pub fn view_matrix(&self) -> Vec<f32> {
        self.camera.view_matrix().to_cols_array().to_vec()
    }

    /// Column-major projection matrix
    pub fn projection_matrix(&self) -> Vec<f32> {
        self.camera.projection_matrix().to_cols_array().to_vec()
    }

    pub fn eye(&self) -> Vec<f32> {
        self.camera.eye().to_array().to_vec()
    }

    /// Upload both matrices with `uniformMatrix4fv` (no transpose)
    pub fn upload_uniforms(
        &self,
        gl: &WebGl2RenderingContext,
        view_location: Option<WebGlUniformLocation>,
        projection_location: Option<WebGlUniformLocation>,
    ) {
        gl.uniform_matrix4fv_with_f32_array(
            view_location.as_ref(),
            false,
            &self.camera.view_matrix().to_cols_array(),
        );
        gl.uniform_matrix4fv_with_f32_array(
            projection_location.as_ref(),
            false,
            &self.camera.projection_matrix().to_cols_array(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flyby_core::Vector3;

    #[test]
    fn test_actions_drive_the_camera() {
        let mut web = WebCamera::from_options(&CameraOptions::default(), 1.0).unwrap();
        let start = web.camera().position;

        web.set_action("moveForward", true).unwrap();
        web.update(0.016);
        web.update(0.016);
        assert!((web.camera().position - (start - Vector3::Z * 0.02)).length() < 1e-5);

        web.set_action("move_forward", false).unwrap();
        assert_eq!(*web.input(), CameraInput::default());
    }

    #[test]
    fn test_matrix_export_layout() {
        let web = WebCamera::from_options(&CameraOptions::default(), 1.5).unwrap();
        let view = web.view_matrix();
        assert_eq!(view.len(), 16);
        // Translation sits in the last column
        assert_eq!(&view[12..15], &[0.0, 0.0, 10.0]);
        assert_eq!(web.eye(), vec![-0.0, -0.0, -10.0]);

        let projection = web.projection_matrix();
        assert_eq!(projection[11], 1.0);
        assert_eq!(projection[15], 0.0);
    }

    #[test]
    fn test_bad_aspect_is_rejected() {
        assert!(WebCamera::from_options(&CameraOptions::default(), -1.0).is_err());
        let mut web = WebCamera::from_options(&CameraOptions::default(), 1.0).unwrap();
        assert!(web.camera.set_aspect(0.0).is_err());
        assert!(web.camera.set_aspect(2.0).is_ok());
    }
}
