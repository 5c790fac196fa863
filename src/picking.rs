//! Picking resolver.
//!
//! Casts a ray against every named renderable in the scene graph (body
//! spheres, orbit polylines and belt members), keeps the nearest hit and
//! maps its graph name to a logical identity.

use bevy::prelude::*;

use crate::catalog::ORBIT_SUFFIX;
use crate::scene::{NodeKind, Scene, SceneNode};

/// Hits closer than this along the ray are ignored (the camera itself).
const MIN_HIT_DISTANCE: f32 = 1e-3;

/// Nearest intersection of a pick ray with the scene graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    /// Index into the scene graph.
    pub node: usize,
    /// Distance from the ray origin.
    pub distance: f32,
    pub point: Vec3,
}

/// Distance along `ray` to the first intersection with a sphere.
pub fn ray_sphere(ray: &Ray3d, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(*ray.direction);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let near = -b - root;
    let far = -b + root;
    if near > MIN_HIT_DISTANCE {
        Some(near)
    } else if far > MIN_HIT_DISTANCE {
        Some(far)
    } else {
        None
    }
}

/// Closest approach of `ray` to the segment `a..b`, if within `threshold`.
///
/// Returns the distance along the ray and the closest point on the segment.
pub fn ray_segment(ray: &Ray3d, a: Vec3, b: Vec3, threshold: f32) -> Option<(f32, Vec3)> {
    let d = *ray.direction;
    let edge = b - a;
    let r = ray.origin - a;
    let e = edge.length_squared();
    let f = edge.dot(r);
    let c = d.dot(r);

    let (s, t) = if e <= f32::EPSILON {
        ((-c).max(0.0), 0.0)
    } else {
        let bb = d.dot(edge);
        let denom = e - bb * bb;
        let s = if denom > f32::EPSILON {
            ((bb * f - c * e) / denom).max(0.0)
        } else {
            0.0
        };
        let t = ((bb * s + f) / e).clamp(0.0, 1.0);
        ((bb * t - c).max(0.0), t)
    };

    let on_ray = ray.origin + d * s;
    let on_segment = a + edge * t;
    (s > MIN_HIT_DISTANCE && on_ray.distance(on_segment) <= threshold).then_some((s, on_segment))
}

/// Nearest renderable hit by `ray`, testing lines within `line_threshold`.
pub fn cast(scene: &Scene, ray: &Ray3d, line_threshold: f32) -> Option<Hit> {
    let mut nearest: Option<Hit> = None;

    for (index, node) in scene.graph().nodes().iter().enumerate() {
        let hit = match node.kind {
            NodeKind::BodyMesh(key) => scene.body(key).and_then(|body| {
                ray_sphere(ray, body.position, body.radius).map(|d| (d, ray.get_point(d)))
            }),
            NodeKind::OrbitPath(key) => scene
                .body(key)
                .and_then(|body| body.orbit.as_ref())
                .and_then(|path| {
                    path.segments()
                        .filter_map(|(a, b)| ray_segment(ray, a, b, line_threshold))
                        .min_by(|x, y| x.0.total_cmp(&y.0))
                }),
            NodeKind::Asteroid(i) => scene.belt().asteroids.get(i).and_then(|rock| {
                ray_sphere(ray, rock.position, rock.size).map(|d| (d, ray.get_point(d)))
            }),
        };

        if let Some((distance, point)) = hit
            && nearest.as_ref().is_none_or(|n| distance < n.distance)
        {
            nearest = Some(Hit {
                node: index,
                distance,
                point,
            });
        }
    }
    nearest
}

/// Logical identity of a graph node.
///
/// Orbit paths resolve to their body and belt members to the belt.
pub fn resolve_identity<'a>(scene: &'a Scene, node: &'a SceneNode) -> &'a str {
    match node.kind {
        NodeKind::Asteroid(_) => &scene.belt().name,
        _ => node
            .name
            .strip_suffix(ORBIT_SUFFIX)
            .unwrap_or(&node.name),
    }
}
