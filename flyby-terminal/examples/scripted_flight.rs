/// Example: fly a scripted path without a live terminal and print the
/// final frame
///
/// Usage: cargo run --example scripted_flight -- [frames]

use flyby_core::{Camera, CameraAction, CameraInput, CameraOptions, Matrix4, Mesh, Vector3};
use flyby_terminal::AsciiRenderer;
use std::env;
use std::io::{self, stdout};

fn main() -> io::Result<()> {
    let frames: usize = match env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("bad frame count: {}", e)))?,
        None => 240,
    };

    let options = CameraOptions {
        move_speed: 0.02,
        rotate_speed: 0.004,
        ..CameraOptions::default()
    };
    let mut camera = Camera::from_options(&options, 80.0 * 0.5 / 40.0).map_err(io::Error::other)?;
    let model = Matrix4::translation(Vector3::new(0.0, 2.0, 0.0));

    // Approach, then bank around the model
    for frame in 0..frames {
        let actions: &[CameraAction] = if frame < frames / 2 {
            &[CameraAction::MoveForward, CameraAction::PitchDown]
        } else {
            &[CameraAction::MoveLeft, CameraAction::YawRight, CameraAction::RollRight]
        };
        camera.update(&CameraInput::from_actions(actions), 1.0 / 60.0);

        if frame % 30 == 0 {
            let eye = camera.eye();
            println!("frame {:4}: eye ({:6.2}, {:6.2}, {:6.2})", frame, eye.x, eye.y, eye.z);
        }
    }

    let mut renderer = AsciiRenderer::new(80, 40);
    renderer.render_mesh(&Mesh::glider(), &model, &camera.view_projection_matrix());
    renderer.draw(&mut stdout())?;
    println!();
    Ok(())
}
