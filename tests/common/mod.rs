//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::prelude::*;
use planetarium::catalog::builtin_catalog;
use planetarium::planetarium::{Planetarium, PlanetariumSettings};
use planetarium::types::BodyKey;

pub const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

pub const EARTH: BodyKey = BodyKey(3);
pub const MARS: BodyKey = BodyKey(4);

/// Built-in catalog on an 800x600 viewport.
pub fn planetarium() -> Planetarium {
    let mut planetarium = Planetarium::new(builtin_catalog(), PlanetariumSettings::default());
    planetarium.resize(VIEWPORT.x, VIEWPORT.y);
    planetarium
}

/// Screen point over a world position.
pub fn screen_point(planetarium: &Planetarium, world: Vec3) -> Vec2 {
    planetarium
        .rig()
        .world_to_screen(world)
        .expect("point should be in front of the camera")
}

/// Screen point over the centre of a body.
pub fn screen_point_of(planetarium: &Planetarium, key: BodyKey) -> Vec2 {
    let position = planetarium.scene().body(key).expect("body exists").position;
    screen_point(planetarium, position)
}

/// Run 60 Hz frames until `seconds` have elapsed.
pub fn run_for(planetarium: &mut Planetarium, seconds: f64) {
    let dt = 1.0 / 60.0;
    let frames = (seconds / dt).round() as usize;
    for _ in 0..frames {
        planetarium.frame(dt);
    }
}
