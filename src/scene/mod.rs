//! Scene assembly for the planetarium.
//!
//! The [`Scene`] owns every body in an arena addressed by [`BodyKey`], the
//! named scene graph used for picking, the asteroid belt, the starfield and
//! the light setup. It is built once when the view mounts and released when
//! it unmounts.

pub mod belt;
pub mod factory;
pub mod starfield;

#[cfg(test)]
mod proptest_scene;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::Catalog;
use crate::planetarium::PlanetariumSettings;
use crate::types::BodyKey;

pub use self::belt::{Asteroid, AsteroidField};
pub use self::factory::{AssetError, Body, OrbitPath, SurfaceMaterial, build_body};
pub use self::starfield::{Star, Starfield};

/// What a named graph node renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Sphere mesh of a body.
    BodyMesh(BodyKey),
    /// Orbit polyline of a body.
    OrbitPath(BodyKey),
    /// Member of the asteroid belt, by index.
    Asteroid(usize),
}

/// A named renderable in the scene graph.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub kind: NodeKind,
}

/// Flat list of named, pickable renderables.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn add(&mut self, name: impl Into<String>, kind: NodeKind) -> usize {
        self.nodes.push(SceneNode {
            name: name.into(),
            kind,
        });
        self.nodes.len() - 1
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&SceneNode> {
        self.nodes.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}

/// Point light attached to the central body, pulsing over time.
#[derive(Clone, Debug, PartialEq)]
pub struct SunLight {
    /// Body the light follows.
    pub body: BodyKey,
    /// Mean intensity in lumens.
    pub base_lumens: f32,
    /// Pulse amplitude in lumens.
    pub pulse_lumens: f32,
    /// Pulse angular frequency, radians per second.
    pub pulse_rate: f32,
    pub range: f32,
}

impl SunLight {
    /// Intensity at wall-clock time `t`.
    pub fn intensity_at(&self, t: f64) -> f32 {
        self.base_lumens + (t * self.pulse_rate as f64).sin() as f32 * self.pulse_lumens
    }
}

/// Low-intensity fill light so unlit hemispheres stay visible.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientFill {
    pub brightness: f32,
}

/// The assembled scene.
#[derive(Debug)]
pub struct Scene {
    bodies: Vec<Body>,
    graph: SceneGraph,
    belt: AsteroidField,
    starfield: Starfield,
    sun_light: SunLight,
    ambient: AmbientFill,
    released: bool,
}

impl Scene {
    /// Build the whole scene from a validated catalog.
    ///
    /// Bodies are created in catalog order (central body first, then by
    /// increasing orbital radius), so `BodyKey(i)` is catalog entry `i`.
    pub fn assemble(catalog: &Catalog, settings: &PlanetariumSettings) -> Self {
        let mut graph = SceneGraph::default();
        let bodies: Vec<Body> = catalog
            .bodies
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                build_body(
                    BodyKey(i),
                    spec,
                    &mut graph,
                    settings.sphere_segments,
                    settings.orbit_segments,
                )
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(settings.seed);
        let (inner, outer) = catalog.belt_bounds();
        let belt = AsteroidField::scatter(&catalog.belt, inner, outer, &mut rng);
        for i in 0..belt.len() {
            graph.add(format!("{}#{i}", belt.name), NodeKind::Asteroid(i));
        }

        let starfield =
            Starfield::scatter(settings.star_count, settings.star_shell_radius, &mut rng);

        let degraded = bodies.iter().filter(|b| b.material.is_degraded()).count();
        info!(
            "Assembled scene: {} bodies, {} asteroids, {} stars ({} untextured)",
            bodies.len(),
            belt.len(),
            starfield.len(),
            degraded
        );

        Self {
            bodies,
            graph,
            belt,
            starfield,
            sun_light: SunLight {
                body: BodyKey::CENTRAL,
                base_lumens: settings.sun_light_lumens,
                pulse_lumens: settings.sun_pulse_lumens,
                pulse_rate: settings.sun_pulse_rate,
                range: settings.sun_light_range,
            },
            ambient: AmbientFill {
                brightness: settings.ambient_brightness,
            },
            released: false,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn body(&self, key: BodyKey) -> Option<&Body> {
        self.bodies.get(key.index())
    }

    pub fn body_mut(&mut self, key: BodyKey) -> Option<&mut Body> {
        self.bodies.get_mut(key.index())
    }

    /// Key of the body with catalog identifier `name`.
    pub fn key_of(&self, name: &str) -> Option<BodyKey> {
        self.bodies.iter().find(|b| b.name == name).map(|b| b.key)
    }

    /// Bodies that orbit the central body.
    pub fn orbiting(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| !b.is_central())
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn belt(&self) -> &AsteroidField {
        &self.belt
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn sun_light(&self) -> &SunLight {
        &self.sun_light
    }

    pub fn ambient(&self) -> &AmbientFill {
        &self.ambient
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Drop every renderable and return how many mesh resources were freed.
    ///
    /// Subsequent calls free nothing and return 0.
    pub fn release(&mut self) -> usize {
        if self.released {
            return 0;
        }
        let orbit_paths = self.bodies.iter().filter(|b| b.orbit.is_some()).count();
        let freed = self.bodies.len() + orbit_paths + self.belt.len() + self.starfield.len();

        self.bodies.clear();
        self.graph.clear();
        self.belt.asteroids.clear();
        self.starfield.stars.clear();
        self.released = true;

        info!("Released scene ({freed} renderables)");
        freed
    }
}
