//! Property-based tests for scene geometry and orbital motion using proptest.
//!
//! These tests verify the geometric invariants of orbit paths and the
//! determinism of time-parameterized integration across arbitrary inputs.

use bevy::prelude::*;
use proptest::prelude::*;

use super::factory::OrbitPath;
use super::Scene;
use crate::catalog::builtin_catalog;
use crate::integrator::integrate;
use crate::planetarium::PlanetariumSettings;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every sampled orbit point lies at the orbital radius from the origin.
    #[test]
    fn prop_orbit_points_on_circle(
        radius in 0.1f32..500.0,
        segments in 3u32..256,
    ) {
        let path = OrbitPath::circle(radius, segments);
        prop_assert_eq!(path.points.len(), segments as usize + 1);

        for point in &path.points {
            let error = (point.length() - radius).abs();
            prop_assert!(
                error <= radius * 1e-5,
                "Point {:?} is {} from origin, expected {}",
                point, point.length(), radius
            );
            prop_assert_eq!(point.y, 0.0);
        }
    }

    /// Integrating from identical clock values yields identical positions.
    #[test]
    fn prop_integration_deterministic(t in 0.0f64..100_000.0) {
        let scene = Scene::assemble(&builtin_catalog(), &PlanetariumSettings::default());
        let mut a = scene.bodies().to_vec();
        let mut b = scene.bodies().to_vec();

        // Different histories, same final time.
        integrate(&mut a, t * 0.5, false);
        integrate(&mut a, t, false);
        integrate(&mut b, t, false);

        for (x, y) in a.iter().zip(b.iter()) {
            prop_assert_eq!(x.position, y.position);
        }
    }

    /// Orbiting bodies stay coplanar at their orbital radius for any time.
    #[test]
    fn prop_integrated_radius_preserved(t in 0.0f64..100_000.0) {
        let scene = Scene::assemble(&builtin_catalog(), &PlanetariumSettings::default());
        let mut bodies = scene.bodies().to_vec();
        integrate(&mut bodies, t, false);

        for body in bodies.iter().filter(|b| !b.is_central()) {
            let planar = Vec2::new(body.position.x, body.position.z).length();
            prop_assert!((planar - body.orbital_radius).abs() < 1e-3);
            prop_assert_eq!(body.position.y, 0.0);
        }
    }

    /// Paused frames never move anything, whatever the clock says.
    #[test]
    fn prop_paused_frames_bit_identical(
        t in 0.0f64..10_000.0,
        frames in 1usize..50,
    ) {
        let scene = Scene::assemble(&builtin_catalog(), &PlanetariumSettings::default());
        let mut bodies = scene.bodies().to_vec();
        integrate(&mut bodies, t, false);
        let before: Vec<(Vec3, f32)> = bodies.iter().map(|b| (b.position, b.rotation)).collect();

        for i in 0..frames {
            integrate(&mut bodies, t + i as f64, true);
        }

        let after: Vec<(Vec3, f32)> = bodies.iter().map(|b| (b.position, b.rotation)).collect();
        prop_assert_eq!(before, after);
    }
}
