//! Procedural asteroid belt.
//!
//! Scatters small static bodies uniformly in angle and radius across the
//! annulus between two orbital radii. Members are set dressing: they are not
//! integrated and all resolve to the belt's collective identity when picked.

use bevy::prelude::*;
use rand::Rng;

use crate::catalog::BeltSpec;

/// One static member of the belt.
#[derive(Clone, Debug, PartialEq)]
pub struct Asteroid {
    pub position: Vec3,
    /// Sphere radius.
    pub size: f32,
    /// Euler angles (XYZ), radians.
    pub rotation: Vec3,
}

impl Asteroid {
    /// Distance from the central axis, ignoring the out-of-plane jitter.
    pub fn planar_distance(&self) -> f32 {
        Vec2::new(self.position.x, self.position.z).length()
    }
}

/// The generated belt.
#[derive(Clone, Debug, Default)]
pub struct AsteroidField {
    /// Collective identity.
    pub name: String,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub asteroids: Vec<Asteroid>,
}

impl AsteroidField {
    /// Scatter `spec.count` asteroids between `inner` and `outer`.
    pub fn scatter(spec: &BeltSpec, inner: f32, outer: f32, rng: &mut impl Rng) -> Self {
        let (min_size, max_size) = ordered(spec.min_size, spec.max_size);
        let jitter = spec.vertical_jitter.abs();

        let asteroids = (0..spec.count)
            .map(|_| {
                let radius = rng.gen_range(inner..=outer);
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                let height = rng.gen_range(-jitter..=jitter);
                Asteroid {
                    position: Vec3::new(angle.cos() * radius, height, angle.sin() * radius),
                    size: rng.gen_range(min_size..=max_size),
                    rotation: Vec3::new(
                        rng.gen_range(0.0..std::f32::consts::TAU),
                        rng.gen_range(0.0..std::f32::consts::TAU),
                        rng.gen_range(0.0..std::f32::consts::TAU),
                    ),
                }
            })
            .collect();

        Self {
            name: spec.name.clone(),
            inner_radius: inner,
            outer_radius: outer,
            asteroids,
        }
    }

    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}
