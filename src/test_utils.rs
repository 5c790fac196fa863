//! Test utilities for planetarium tests.
//!
//! Provides fixtures for a mounted planetarium on a fixed viewport and
//! assertions for the orbital invariants the integrator must keep.

use bevy::prelude::*;

use crate::catalog::builtin_catalog;
use crate::planetarium::{Planetarium, PlanetariumSettings};
use crate::types::BodyKey;

/// Viewport used by every fixture.
pub const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

/// Key of Earth in the built-in catalog.
pub const EARTH: BodyKey = BodyKey(3);

/// Key of Mars in the built-in catalog.
pub const MARS: BodyKey = BodyKey(4);

/// Fixtures for creating planetarium states.
pub mod fixtures {
    use super::*;

    /// Built-in catalog, default settings, [`VIEWPORT`]-sized.
    pub fn planetarium() -> Planetarium {
        let mut planetarium = Planetarium::new(builtin_catalog(), PlanetariumSettings::default());
        planetarium.resize(VIEWPORT.x, VIEWPORT.y);
        planetarium
    }

    /// Screen point over the centre of a body.
    pub fn screen_point_of(planetarium: &Planetarium, key: BodyKey) -> Vec2 {
        let position = planetarium
            .scene()
            .body(key)
            .map(|b| b.position)
            .unwrap_or_default();
        planetarium
            .rig()
            .world_to_screen(position)
            .unwrap_or(VIEWPORT * 0.5)
    }

    /// Run frames of `dt` until `seconds` have elapsed.
    pub fn run_for(planetarium: &mut Planetarium, seconds: f64, dt: f64) {
        let frames = (seconds / dt).round() as usize;
        for _ in 0..frames {
            planetarium.frame(dt);
        }
    }
}

/// Custom assertions for orbital invariants.
pub mod assertions {
    use super::*;

    /// Assert every unparked orbiting body lies on its circle in the XZ plane.
    pub fn assert_on_orbits(planetarium: &Planetarium, tolerance: f32) {
        for body in planetarium.scene().orbiting().filter(|b| !b.parked) {
            let planar = Vec2::new(body.position.x, body.position.z).length();
            assert!(
                (planar - body.orbital_radius).abs() <= tolerance,
                "{} at planar distance {}, expected {}",
                body.name,
                planar,
                body.orbital_radius
            );
            assert_eq!(body.position.y, 0.0, "{} left the orbital plane", body.name);
        }
    }

    /// Snapshot of every body's position and rotation.
    pub fn snapshot(planetarium: &Planetarium) -> Vec<(Vec3, f32)> {
        planetarium
            .scene()
            .bodies()
            .iter()
            .map(|b| (b.position, b.rotation))
            .collect()
    }
}

pub use assertions::*;
pub use fixtures::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_on_orbits() {
        let mut p = fixtures::planetarium();
        assert_eq!(p.rig().viewport(), VIEWPORT);
        fixtures::run_for(&mut p, 2.0, 1.0 / 60.0);
        assertions::assert_on_orbits(&p, 1e-3);
    }

    #[test]
    fn test_screen_point_of_earth_in_view() {
        let p = fixtures::planetarium();
        let screen = fixtures::screen_point_of(&p, EARTH);
        assert!(screen.x > VIEWPORT.x * 0.5 && screen.x < VIEWPORT.x);
        assert!(screen.y > 0.0 && screen.y < VIEWPORT.y);
    }
}
