//! Unit tests for deriving launch velocity from a drag gesture

use slingshot_core::launch::{launch_body, launch_velocity, LaunchParams};
use slingshot_core::tests::test_helpers::{approx_eq, approx_eq_vec};
use glam::DVec2;

const PARAMS: LaunchParams = LaunchParams {
    sling_force: 0.05,
    body_mass: 5.0,
};

#[test]
fn test_launch_velocity_matches_formula() {
    let start = DVec2::new(500.0, 500.0);
    let end = DVec2::new(450.0, 450.0);

    // shift = (50, 50), d^2 = 5000, speed = sqrt(2 * 0.05 * 5000 / 5) = 10
    let vel = launch_velocity(start, end, &PARAMS);
    let component = 10.0 * std::f64::consts::FRAC_PI_4.cos();
    assert!(approx_eq_vec(vel, DVec2::new(component, component), 1e-9));
    assert!(approx_eq(vel.length(), 10.0, 1e-9));
}

#[test]
fn test_launch_direction_is_away_from_release() {
    let start = DVec2::new(100.0, 100.0);
    let end = DVec2::new(80.0, 130.0);
    let vel = launch_velocity(start, end, &PARAMS);

    // Parallel to start - end
    let shift = start - end;
    assert!(vel.dot(shift) > 0.0);
    assert!(approx_eq(vel.perp_dot(shift), 0.0, 1e-9));
}

#[test]
fn test_launch_body_spawns_at_release_point() {
    let start = DVec2::new(200.0, 150.0);
    let end = DVec2::new(180.0, 160.0);
    let body = launch_body(start, end, &PARAMS);
    assert_eq!(body.pos, end);
    assert_eq!(body.mass, 5.0);
    assert_eq!(body.vel, launch_velocity(start, end, &PARAMS));
}

#[test]
fn test_zero_length_drag_is_stationary() {
    let point = DVec2::new(321.0, 123.0);
    let body = launch_body(point, point, &PARAMS);
    assert_eq!(body.vel, DVec2::ZERO);
    assert_eq!(body.pos, point);
}

#[test]
fn test_launch_speed_increases_with_drag_length() {
    let end = DVec2::new(400.0, 400.0);
    let mut previous = 0.0;
    for d in 1..=200 {
        let start = end + DVec2::new(d as f64 * 0.75, d as f64 * -0.5);
        let speed = launch_velocity(start, end, &PARAMS).length();
        assert!(speed > previous, "drag {} speed {} <= {}", d, speed, previous);
        previous = speed;
    }
}

#[test]
fn test_heavier_body_launches_slower() {
    let start = DVec2::new(0.0, 0.0);
    let end = DVec2::new(30.0, 40.0);
    let heavy = LaunchParams {
        body_mass: 20.0,
        ..PARAMS
    };
    let light_speed = launch_velocity(start, end, &PARAMS).length();
    let heavy_speed = launch_velocity(start, end, &heavy).length();

    // speed scales with 1 / sqrt(mass)
    assert!(approx_eq(light_speed / heavy_speed, 2.0, 1e-9));
}
