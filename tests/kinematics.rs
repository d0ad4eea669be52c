use spatialarm::{Arm, ArmModel, JointAngles, Pose};

fn assert_close(actual: Pose, expected: Pose) {
    assert!(
        (actual - expected).norm() < 1e-9,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn test_zero_angles_extend_arm_along_x() {
    let arm = Arm::new([3.0, 2.0, 1.0]).unwrap();
    let positions = arm.forward(&[(0.0, 0.0); 3]);

    assert_close(positions.end_effector, Pose::new(6.0, 0.0, 0.0));
    assert_eq!(positions.joints.len(), 4);
    assert_eq!(positions.joints[0], Pose::origin());
}

#[test]
fn test_forward_is_deterministic() {
    let arm = Arm::new([3.0, 2.5, 2.0]).unwrap();
    let angles = [(0.3, 1.1), (-2.7, 0.4), (1.9, 2.8)];

    let first = arm.forward(&angles);
    for _ in 0..10 {
        let again = arm.forward(&angles);
        for (a, b) in first.joints.iter().zip(again.joints.iter()) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
            assert_eq!(a.z.to_bits(), b.z.to_bits());
        }
    }
}

#[test]
fn test_link_lengths_are_preserved() {
    let arm = Arm::new([3.0, 2.5, 2.0]).unwrap();
    let positions = arm.forward(&[(0.5, 0.2), (1.5, 2.0), (-0.7, 0.9)]);

    let lengths: Vec<f64> = positions
        .joints
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).norm())
        .collect();
    for (measured, expected) in lengths.iter().zip([3.0, 2.5, 2.0]) {
        assert!((measured - expected).abs() < 1e-9);
    }
}

#[test]
fn test_degrees_match_radians() {
    let arm = Arm::new([1.0, 1.0, 1.0]).unwrap();
    let degrees = [
        JointAngles::new(90.0, 0.0),
        JointAngles::new(0.0, 45.0),
        JointAngles::new(-30.0, 10.0),
    ];
    let radians = degrees.map(JointAngles::to_radians);

    assert_eq!(arm.forward_degrees(&degrees), arm.forward(&radians));
}

#[test]
fn test_reachability_boundary() {
    let arm = Arm::new([3.0, 2.0, 1.0]).unwrap();

    assert!(arm.is_reachable(&Pose::new(6.0, 0.0, 0.0)));
    assert!(arm.is_reachable(&Pose::new(0.0, 0.0, 6.0)));
    assert!(arm.is_reachable(&Pose::origin()));
    assert!(!arm.is_reachable(&Pose::new(6.0 + 1e-9, 0.0, 0.0)));
    assert!(!arm.is_reachable(&Pose::new(5.0, 5.0, 0.0)));
    assert!(!arm.is_reachable(&Pose::new(f64::NAN, 0.0, 0.0)));
}

#[test]
fn test_model_tracks_pushed_angles() {
    let arm = Arm::new([3.0, 2.0, 1.0]).unwrap();
    let mut model = ArmModel::new(arm);
    assert_close(model.end_effector(), Pose::new(6.0, 0.0, 0.0));

    model.set_angles([
        JointAngles::new(90.0, 0.0),
        JointAngles::new(0.0, 0.0),
        JointAngles::new(0.0, 0.0),
    ]);
    assert_close(model.end_effector(), Pose::new(0.0, 6.0, 0.0));
    assert_close(model.joint_positions()[1], Pose::new(0.0, 3.0, 0.0));
    assert!((model.distance_to(&Pose::new(0.0, 6.0, 1.0)) - 1.0).abs() < 1e-9);
}
