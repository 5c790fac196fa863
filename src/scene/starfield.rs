//! Starfield backdrop: points scattered on a distant shell around the origin.

use bevy::prelude::*;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    /// Scale applied to the shared star mesh.
    pub scale: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatter `count` stars uniformly over a sphere of `radius`.
    pub fn scatter(count: usize, radius: f32, rng: &mut impl Rng) -> Self {
        let stars = (0..count)
            .map(|_| {
                // Uniform on the sphere: uniform height, uniform azimuth.
                let y: f32 = rng.gen_range(-1.0..=1.0);
                let azimuth = rng.gen_range(0.0..std::f32::consts::TAU);
                let ring = (1.0 - y * y).max(0.0).sqrt();
                Star {
                    position: Vec3::new(ring * azimuth.cos(), y, ring * azimuth.sin()) * radius,
                    scale: rng.gen_range(0.5..1.5),
                }
            })
            .collect();
        Self { stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
