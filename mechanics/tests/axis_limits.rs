use mechanics::{AxisPositions, CraneSpec, MotionController, Vec3f};

#[test]
fn positions_never_leave_limits_under_long_drives() {
    let spec = CraneSpec::default();
    let mut crane = MotionController::new(&spec, AxisPositions { beam: 0.0, carriage: 0.0, hook: -2.0 })
        .expect("default spec is valid");

    // Alternate hard pushes in every direction with uneven frame times.
    let pushes = [
        Vec3f::new(1.0, 1.0, 1.0),
        Vec3f::new(-2.0, -3.0, -1.0),
        Vec3f::new(5.0, 0.0, -5.0),
        Vec3f::new(-5.0, 4.0, 5.0),
    ];
    let dts = [1.0 / 90.0, 1.0 / 30.0, 0.25, 2.0];
    for (i, push) in pushes.iter().cycle().take(400).enumerate() {
        crane.clear_input();
        crane.add_movement(*push);
        let p = crane.tick(dts[i % dts.len()]).positions;
        assert!(spec.z_limits.contains(p.beam), "beam {} escaped", p.beam);
        assert!(spec.x_limits.contains(p.carriage), "carriage {} escaped", p.carriage);
        assert!(spec.y_limits.contains(p.hook), "hook {} escaped", p.hook);
    }
}

#[test]
fn clamped_axis_resumes_immediately_on_reverse() {
    let spec = CraneSpec::default();
    let mut crane = MotionController::new(&spec, AxisPositions { beam: 8.0, carriage: 0.0, hook: -2.0 })
        .expect("default spec is valid");
    crane.add_movement(Vec3f::Z);
    for _ in 0..10 {
        crane.tick(1.0);
    }
    assert_eq!(crane.positions().beam, spec.z_limits.max);

    crane.clear_input();
    crane.add_movement(Vec3f::NEG_Z);
    let p = crane.tick(0.5).positions;
    assert!((p.beam - (spec.z_limits.max - 1.0)).abs() < 1e-5);
}
