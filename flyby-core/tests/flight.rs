use flyby_core::{
    BasisRefresh, Camera, CameraAction, CameraInput, CameraOptions, FlybyError, Matrix4,
    Perspective, Quaternion, Vector3,
};

fn input(actions: &[CameraAction]) -> CameraInput {
    CameraInput::from_actions(actions)
}

#[test]
fn single_forward_step_from_origin() {
    let mut camera = Camera::new(Perspective::new(70.0, 1.0, 0.001, 1000.0))
        .unwrap()
        .with_position(Vector3::ZERO)
        .with_orientation(Quaternion::identity())
        .with_basis(Vector3::new(0.0, 0.0, 1.0), Vector3::Y, Vector3::X);
    camera.move_speed = 0.01;

    camera.update(&input(&[CameraAction::MoveForward]), 1.0 / 60.0);

    let expected = Vector3::new(0.0, 0.0, -0.01);
    assert!((camera.position - expected).length() < 1e-6, "{:?}", camera.position);
}

#[test]
fn default_camera_sees_the_origin() {
    let camera = Camera::from_options(&CameraOptions::default(), 4.0 / 3.0).unwrap();
    let clip = camera.view_projection_matrix().transform_point(Vector3::ZERO);

    assert!(clip[3] > 0.0);
    for axis in &clip[..3] {
        let ndc = axis / clip[3];
        assert!((-1.0..=1.0).contains(&ndc), "{clip:?}");
    }
}

#[test]
fn flying_forward_approaches_what_is_ahead() {
    let mut camera = Camera::from_options(&CameraOptions::default(), 1.0).unwrap();
    let depth = |camera: &Camera| camera.view_matrix().transform_point(Vector3::ZERO)[2];

    let start = depth(&camera);
    for _ in 0..100 {
        camera.update(&input(&[CameraAction::MoveForward]), 0.016);
    }
    assert!((start - depth(&camera) - 1.0).abs() < 1e-3);
}

#[test]
fn full_yaw_turn_returns_to_start() {
    for mode in [BasisRefresh::Lagged, BasisRefresh::Synchronous] {
        let mut camera = Camera::new(Perspective::default()).unwrap();
        camera.basis_refresh = mode;
        camera.rotate_speed = std::f32::consts::TAU / 360.0;

        for _ in 0..360 {
            camera.update(&input(&[CameraAction::YawLeft]), 0.016);
        }

        assert!(
            camera.orientation.same_rotation(Quaternion::IDENTITY, 1e-4),
            "{mode:?}: {:?}",
            camera.orientation
        );
        assert!(camera.view_matrix().max_abs_diff(&Matrix4::IDENTITY) < 1e-3);
    }
}

#[test]
fn pitch_then_yaw_differs_from_yaw_then_pitch() {
    let run = |first: CameraAction, second: CameraAction| {
        let mut camera = Camera::new(Perspective::default()).unwrap();
        camera.rotate_speed = 0.4;
        camera.update(&input(&[first]), 0.0);
        camera.update(&input(&[second]), 0.0);
        camera.orientation
    };

    let a = run(CameraAction::PitchUp, CameraAction::YawLeft);
    let b = run(CameraAction::YawLeft, CameraAction::PitchUp);
    assert!(!a.same_rotation(b, 1e-4));
}

#[test]
fn rotations_in_one_frame_apply_pitch_yaw_roll() {
    let angle = 0.3;
    for mode in [BasisRefresh::Lagged, BasisRefresh::Synchronous] {
        let mut camera = Camera::new(Perspective::default()).unwrap();
        camera.basis_refresh = mode;
        camera.rotate_speed = angle;
        camera.update(
            &input(&[CameraAction::RollRight, CameraAction::YawLeft, CameraAction::PitchUp]),
            0.0,
        );

        let pitch_yaw_roll = Quaternion::IDENTITY
            .rotated(Vector3::X, angle)
            .rotated(Vector3::Y, angle)
            .rotated(Vector3::Z, angle);
        let roll_yaw_pitch = Quaternion::IDENTITY
            .rotated(Vector3::Z, angle)
            .rotated(Vector3::Y, angle)
            .rotated(Vector3::X, angle);

        assert!(camera.orientation.same_rotation(pitch_yaw_roll, 1e-5), "{mode:?}");
        assert!(!camera.orientation.same_rotation(roll_yaw_pitch, 1e-4), "{mode:?}");
    }
}

#[test]
fn bad_options_fail_at_setup() {
    let options = CameraOptions {
        near: 10.0,
        far: 1.0,
        ..CameraOptions::default()
    };
    assert!(matches!(
        Camera::from_options(&options, 1.0),
        Err(FlybyError::InvalidProjection(_))
    ));
    assert!(Camera::from_options(&CameraOptions::default(), 0.0).is_err());
}
