//! End-to-end scenarios on the default 800x600 playfield

use slingshot_core::runtime::{run_launch, BodyFate, RemovalCause};
use slingshot_core::tests::test_helpers::{
    all_finite, approx_eq, approx_eq_vec, body_at, default_state, drag_frame, run_until_empty,
};
use slingshot_core::{InputFrame, SimulationConfig};
use glam::DVec2;

#[test]
fn test_reference_launch_velocity() {
    let mut state = default_state();
    let start = DVec2::new(500.0, 500.0);
    let end = DVec2::new(450.0, 450.0);
    let body = state.launch(start, end).clone();

    // speed = sqrt(2 * 0.05 * 5000 / 5) = 10 along (1, 1)
    let expected = DVec2::new(10.0 * (std::f64::consts::FRAC_PI_4).cos(), 10.0 * (std::f64::consts::FRAC_PI_4).sin());
    assert!(approx_eq_vec(body.vel, expected, 1e-9));
    assert_eq!(body.pos, end);

    // Heads from the release point towards and past the press point
    let towards_start = (start - end).normalize();
    assert!(approx_eq(body.vel.normalize().dot(towards_start), 1.0, 1e-12));
}

#[test]
fn test_reference_launch_flies_off_the_bottom() {
    let mut state = default_state();
    state.launch(DVec2::new(500.0, 500.0), DVec2::new(450.0, 450.0));
    let attractor = state.attractor().clone();

    // Outbound leg: the launch points away from the attractor, so the body
    // recedes while gravity bends the velocity back
    let mut previous_distance = state.bodies()[0].distance_to(&attractor);
    let mut previous_vel = state.bodies()[0].vel;
    for _ in 0..15 {
        state.tick(&InputFrame::default());
        let body = &state.bodies()[0];
        let distance = body.distance_to(&attractor);
        assert!(distance > previous_distance);
        assert!(body.vel.x < previous_vel.x);
        assert!(body.vel.y < previous_vel.y);
        previous_distance = distance;
        previous_vel = body.vel;
    }

    let ticks = run_until_empty(&mut state, 30);
    assert!(ticks < 30, "body should have left the playfield");
    assert_eq!(state.stats().removed_off_bounds, 1);
    assert_eq!(state.stats().removed_collided, 0);
}

#[test]
fn test_resting_body_falls_into_attractor() {
    let mut state = default_state();
    let attractor = state.attractor().clone();
    state.spawn(body_at(DVec2::new(400.0, 100.0), DVec2::ZERO));

    let mut previous_distance = state.bodies()[0].distance_to(&attractor);
    let idle = InputFrame::default();
    for _ in 0..300 {
        state.tick(&idle);
        let Some(body) = state.bodies().first() else {
            break;
        };
        let distance = body.distance_to(&attractor);
        assert!(distance < previous_distance, "pure attraction must close in");
        previous_distance = distance;
    }

    assert!(state.bodies().is_empty());
    assert_eq!(state.stats().removed_collided, 1);
}

#[test]
fn test_zero_length_drag_body_survives_creation() {
    let mut state = default_state();
    let point = DVec2::new(100.0, 500.0);
    state.handle_event(slingshot_core::InputEvent::PointerDown(point));
    state.handle_event(slingshot_core::InputEvent::PointerUp(point));

    let body = &state.bodies()[0];
    assert_eq!(body.vel, DVec2::ZERO);
    assert!(!slingshot_core::is_off_bounds(body, state.playfield()));

    // The only motion afterwards comes from gravity
    state.advance();
    assert_eq!(state.bodies().len(), 1);
    assert!(state.bodies()[0].vel.length() > 0.0);
}

#[test]
fn test_body_on_attractor_centre_stays_finite() {
    let mut state = default_state();
    let centre = state.attractor().position();
    state.spawn(body_at(centre, DVec2::ZERO));

    let mut removed = Vec::new();
    state.advance_with(|body, cause| removed.push((body.clone(), cause)));

    assert!(all_finite(&state));
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].1, RemovalCause::Collided);
    assert!(removed[0].0.pos.is_finite());
    assert!(removed[0].0.vel.is_finite());
}

#[test]
fn test_many_launches_stay_finite() {
    let mut state = default_state();
    let centre = state.attractor().position();
    for i in 0..24 {
        let angle = i as f64 * std::f64::consts::TAU / 24.0;
        let end = centre + DVec2::new(angle.cos(), angle.sin()) * 120.0;
        let start = end + DVec2::new(-angle.sin(), angle.cos()) * (10.0 + i as f64);
        state.tick(&drag_frame(start, end));
        assert!(all_finite(&state));
    }
    run_until_empty(&mut state, 5_000);
    assert!(all_finite(&state));
    assert_eq!(state.stats().launched, 24);
}

#[test]
fn test_run_launch_reports_fate() {
    let report = run_launch(
        SimulationConfig::default(),
        DVec2::new(500.0, 500.0),
        DVec2::new(450.0, 450.0),
        1_000,
    )
    .expect("default config is valid");

    assert_eq!(report.fate, BodyFate::Removed(RemovalCause::OffBounds));
    assert!(report.ticks > 15 && report.ticks < 30);
    assert_eq!(report.trajectory.len() as u64, report.ticks + 1);
    assert_eq!(report.trajectory[0], DVec2::new(450.0, 450.0));
    assert_eq!(*report.trajectory.last().unwrap(), report.final_pos);
    assert!(report.final_pos.y > 600.0);
}

#[test]
fn test_run_launch_tick_limit() {
    let report = run_launch(
        SimulationConfig::default(),
        DVec2::new(500.0, 500.0),
        DVec2::new(450.0, 450.0),
        3,
    )
    .unwrap();
    assert_eq!(report.fate, BodyFate::InFlight);
    assert_eq!(report.ticks, 3);
    assert_eq!(report.trajectory.len(), 4);
}

#[test]
fn test_run_launch_rejects_invalid_config() {
    let config = SimulationConfig {
        body_mass: 0.0,
        ..SimulationConfig::default()
    };
    let result = run_launch(config, DVec2::ZERO, DVec2::ZERO, 10);
    assert!(result.is_err());
}

#[test]
fn test_simulation_is_deterministic() {
    let run = || {
        let mut state = default_state();
        state.tick(&drag_frame(DVec2::new(100.0, 200.0), DVec2::new(150.0, 240.0)));
        state.tick(&drag_frame(DVec2::new(600.0, 90.0), DVec2::new(640.0, 60.0)));
        for _ in 0..200 {
            state.tick(&InputFrame::default());
        }
        (state.bodies().to_vec(), state.stats())
    };

    let (bodies_a, stats_a) = run();
    let (bodies_b, stats_b) = run();
    assert_eq!(bodies_a, bodies_b);
    assert_eq!(stats_a, stats_b);
}

#[test]
fn test_run_launch_with_nan_drag_terminates() {
    let report = run_launch(
        SimulationConfig::default(),
        DVec2::new(f64::NAN, 0.0),
        DVec2::new(100.0, 100.0),
        10_000,
    )
    .unwrap();
    assert_eq!(report.fate, BodyFate::Removed(RemovalCause::OffBounds));
    assert_eq!(report.ticks, 1);
}
