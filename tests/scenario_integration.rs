//! End-to-end scenario tests against the planetarium core.
//!
//! These tests drive a planetarium the way the shell does: frames, clicks
//! and discrete actions, and check the observable state after each step.

mod common;

use approx::assert_relative_eq;
use bevy::prelude::*;
use planetarium::focus::{FocusPhase, FocusTarget, TransitionDirection};
use planetarium::planetarium::PickOutcome;

use common::{EARTH, MARS, planetarium, run_for, screen_point_of};

#[test]
fn test_full_scenario() {
    let mut p = planetarium();

    // Scene contents.
    let scene = p.scene();
    assert_eq!(scene.bodies().len(), 9);
    assert_eq!(scene.belt().len(), 400);
    let belt = scene.belt();
    for rock in &belt.asteroids {
        let d = rock.planar_distance();
        assert!(
            d >= belt.inner_radius - 1e-4 && d <= belt.outer_radius + 1e-4,
            "asteroid at {d} outside [{}, {}]",
            belt.inner_radius,
            belt.outer_radius
        );
    }

    // Click Earth at t = 0.
    let screen = screen_point_of(&p, EARTH);
    let outcome = p.click(screen);
    assert_eq!(
        outcome,
        PickOutcome::Selected {
            identity: "Earth".into(),
            target: FocusTarget::Body(EARTH),
        }
    );

    let overlay = p.overlay().expect("overlay shown").clone();
    let earth_info = p.catalog().info("Earth").expect("Earth metadata");
    assert_eq!(overlay.name, "Earth");
    assert_eq!(overlay.description, earth_info.description);
    assert_eq!(overlay.diameter, earth_info.diameter);
    assert_eq!(overlay.day_length, earth_info.day_length);
    assert_eq!(
        p.phase(),
        FocusPhase::Transitioning(TransitionDirection::Forward)
    );

    // Fixed duration elapses.
    let duration = p.settings().focus_duration;
    run_for(&mut p, duration + 0.05);
    assert_eq!(p.phase(), FocusPhase::Detail);
    let earth = p.scene().body(EARTH).unwrap();
    assert!(earth.position.length() < 1e-5);
    assert_relative_eq!(
        p.rig().distance_to_target(),
        earth.radius * p.settings().focus_distance_factor,
        epsilon = 1e-3
    );
    assert!(p.central_body_occluded());

    // Return.
    assert!(p.return_to_overview());
    assert!(p.overlay().is_none());
    run_for(&mut p, duration + 0.05);
    assert_eq!(p.phase(), FocusPhase::Overview);
    assert!(p.overlay().is_none());
    assert!(!p.central_body_occluded());

    let changes = p.take_overlay_changes();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].as_ref().map(|o| o.name.as_str()), Some("Earth"));
    assert!(changes[1].is_none());
}

#[test]
fn test_body_resumes_at_current_phase_after_return() {
    let mut p = planetarium();
    p.select_by_name("Earth");
    run_for(&mut p, 1.5);
    p.return_to_overview();
    run_for(&mut p, 1.5);

    // Next unpaused frame puts Earth back on its orbit at t * rate.
    p.frame(1.0 / 60.0);
    let earth = p.scene().body(EARTH).unwrap();
    assert!(!earth.parked);
    let planar = Vec2::new(earth.position.x, earth.position.z).length();
    assert_relative_eq!(planar, 11.0, epsilon = 1e-3);

    let t = p.clock().orbital_time();
    let expected = planetarium::integrator::orbit_position(11.0, earth.angular_rate, t);
    assert_eq!(earth.position, expected);
}

#[test]
fn test_paused_return_keeps_body_until_unpaused() {
    let mut p = planetarium();
    p.select_by_name("Mars");
    run_for(&mut p, 1.5);
    p.set_paused(true);
    p.return_to_overview();
    run_for(&mut p, 1.5);
    assert_eq!(p.phase(), FocusPhase::Overview);
    assert_eq!(p.scene().body(MARS).unwrap().position, Vec3::ZERO);

    p.set_paused(false);
    p.frame(1.0 / 60.0);
    assert!(p.scene().body(MARS).unwrap().position.length() > 13.0);
}

#[test]
fn test_picking_in_detail_is_noop() {
    let mut p = planetarium();
    p.select_by_name("Jupiter");
    run_for(&mut p, 1.5);
    assert_eq!(p.phase(), FocusPhase::Detail);
    p.take_overlay_changes();

    let state = p.focus().state().clone();
    let overlay = p.overlay().cloned();
    for y in (0..600).step_by(50) {
        assert_eq!(p.click(Vec2::new(400.0, y as f32)), PickOutcome::Ignored);
    }
    assert_eq!(p.focus().state(), &state);
    assert_eq!(p.overlay().cloned(), overlay);
    assert!(p.take_overlay_changes().is_empty());
}

#[test]
fn test_return_ignored_outside_detail() {
    let mut p = planetarium();
    assert!(!p.return_to_overview());
    p.select_by_name("Venus");
    assert!(!p.return_to_overview());
    assert_eq!(
        p.phase(),
        FocusPhase::Transitioning(TransitionDirection::Forward)
    );
}

#[test]
fn test_repeated_cycles() {
    let mut p = planetarium();
    for name in ["Mercury", "Saturn", "Asteroid Belt", "Neptune"] {
        assert!(matches!(p.select_by_name(name), PickOutcome::Selected { .. }));
        run_for(&mut p, 1.2);
        assert_eq!(p.phase(), FocusPhase::Detail);
        assert!(p.return_to_overview());
        run_for(&mut p, 1.2);
        assert_eq!(p.phase(), FocusPhase::Overview);
    }
    assert!(p.scene().bodies().iter().all(|b| !b.parked));
    let home = p.settings().overview_camera;
    assert_eq!(p.rig().position, home);
}
