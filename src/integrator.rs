//! Per-frame orbital motion.
//!
//! Positions are a pure function of orbital time: body `i` sits at angle
//! `t × angular_rate_i` on a circle of its orbital radius in the XZ plane.
//! Self-rotation is visual only and accumulates a fixed step per call.
//! The central body, parked bodies and the asteroid belt are never moved.

use bevy::prelude::*;

use crate::scene::Body;

/// Position on a circular orbit of `radius` at orbital time `t`.
pub fn orbit_position(radius: f32, angular_rate: f32, t: f64) -> Vec3 {
    // Angle in f64 so long sessions keep their phase resolution.
    let theta = t * angular_rate as f64;
    let r = radius as f64;
    Vec3::new((theta.cos() * r) as f32, 0.0, (theta.sin() * r) as f32)
}

/// Advance every orbiting body to orbital time `t`.
///
/// Returns the number of bodies updated. While `paused` nothing is touched.
pub fn integrate(bodies: &mut [Body], t: f64, paused: bool) -> usize {
    if paused {
        return 0;
    }

    let mut updated = 0;
    for body in bodies.iter_mut().filter(|b| !b.is_central() && !b.parked) {
        body.position = orbit_position(body.orbital_radius, body.angular_rate, t);
        body.rotation += body.spin_rate;
        updated += 1;
    }
    updated
}
