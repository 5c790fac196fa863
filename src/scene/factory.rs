//! Celestial body factory.
//!
//! Turns one [`BodySpec`] into a runtime [`Body`]: sphere geometry, a shaded
//! surface material and the orbit polyline, and registers the mesh and path
//! in the scene graph under names derived from the body's identifier.

use bevy::prelude::*;

use crate::catalog::BodySpec;
use crate::types::BodyKey;

use super::{NodeKind, SceneGraph};

/// Phong-style shininess of every body surface.
pub const SURFACE_SHININESS: f32 = 60.0;

/// Emissive level of orbiting bodies, enough to keep the night side faintly visible.
pub const SURFACE_EMISSIVE: f32 = 0.1;

/// Emissive level of the central body, which is lit from inside.
pub const CENTRAL_EMISSIVE: f32 = 1.0;

/// Texture formats the renderer can decode.
pub const SUPPORTED_TEXTURE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "ktx2", "hdr"];

/// Errors resolving a body's appearance reference.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("body `{body}` has an empty appearance reference")]
    EmptyReference { body: String },

    #[error("body `{body}` appearance `{path}` is not a supported texture format")]
    UnsupportedFormat { body: String, path: String },
}

/// Surface parameters for a body mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceMaterial {
    /// Texture path, or `None` for the untextured fallback.
    pub texture: Option<String>,
    pub shininess: f32,
    pub emissive: f32,
}

impl SurfaceMaterial {
    /// Material used when the appearance cannot be resolved.
    pub fn untextured(emissive: f32) -> Self {
        Self {
            texture: None,
            shininess: SURFACE_SHININESS,
            emissive,
        }
    }

    /// Whether this material fell back to no texture.
    pub fn is_degraded(&self) -> bool {
        self.texture.is_none()
    }

    /// Roughness equivalent of the Phong shininess for a PBR renderer.
    pub fn perceptual_roughness(&self) -> f32 {
        (2.0 / (self.shininess + 2.0)).sqrt().clamp(0.089, 1.0)
    }
}

/// Closed polyline drawn along a body's orbit.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitPath {
    /// Sample points; the last repeats the first.
    pub points: Vec<Vec3>,
}

impl OrbitPath {
    /// Sample a circle of `radius` in the XZ plane at `segments` angular steps.
    pub fn circle(radius: f32, segments: u32) -> Self {
        let segments = segments.max(3);
        let points = (0..=segments)
            .map(|i| {
                let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
                Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
            })
            .collect();
        Self { points }
    }

    /// Consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Runtime instance of one catalog body.
#[derive(Clone, Debug)]
pub struct Body {
    pub key: BodyKey,
    /// Catalog identifier.
    pub name: String,
    pub radius: f32,
    pub orbital_radius: f32,
    /// Radians per second of orbital time.
    pub angular_rate: f32,
    /// Radians added to `rotation` every integrated frame.
    pub spin_rate: f32,
    /// Sphere tessellation (sectors and stacks).
    pub segments: u32,
    pub material: SurfaceMaterial,
    /// `None` for the central body.
    pub orbit: Option<OrbitPath>,
    pub position: Vec3,
    /// Accumulated spin about the Y axis.
    pub rotation: f32,
    /// Set while the focus animator holds this body out of orbital motion.
    pub parked: bool,
}

impl Body {
    pub fn is_central(&self) -> bool {
        self.orbit.is_none()
    }
}

/// Check that an appearance reference names a texture the renderer can load.
pub fn resolve_appearance(spec: &BodySpec) -> Result<String, AssetError> {
    let path = spec.appearance.trim();
    if path.is_empty() {
        return Err(AssetError::EmptyReference {
            body: spec.name.clone(),
        });
    }

    let supported = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_TEXTURE_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false);

    if !supported {
        return Err(AssetError::UnsupportedFormat {
            body: spec.name.clone(),
            path: path.to_string(),
        });
    }
    Ok(path.to_string())
}

/// Build a body from its spec and register its nodes in `graph`.
///
/// The body starts at angle 0 of its orbit. Appearance errors degrade the
/// material to untextured and are logged, never returned.
pub fn build_body(
    key: BodyKey,
    spec: &BodySpec,
    graph: &mut SceneGraph,
    sphere_segments: u32,
    orbit_segments: u32,
) -> Body {
    let emissive = if spec.is_central() {
        CENTRAL_EMISSIVE
    } else {
        SURFACE_EMISSIVE
    };

    let material = match resolve_appearance(spec) {
        Ok(texture) => SurfaceMaterial {
            texture: Some(texture),
            shininess: SURFACE_SHININESS,
            emissive,
        },
        Err(err) => {
            warn!("{err}; using untextured material");
            SurfaceMaterial::untextured(emissive)
        }
    };

    graph.add(spec.name.clone(), NodeKind::BodyMesh(key));

    let orbit = if spec.is_central() {
        None
    } else {
        graph.add(spec.orbit_name(), NodeKind::OrbitPath(key));
        Some(OrbitPath::circle(spec.orbital_radius, orbit_segments))
    };

    Body {
        key,
        name: spec.name.clone(),
        radius: spec.radius,
        orbital_radius: spec.orbital_radius,
        angular_rate: spec.angular_rate(),
        spin_rate: spec.spin_rate(),
        segments: sphere_segments.max(3),
        material,
        orbit,
        position: Vec3::new(spec.orbital_radius, 0.0, 0.0),
        rotation: 0.0,
        parked: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spec(name: &str, appearance: &str, orbit: f32) -> BodySpec {
        BodySpec {
            name: name.to_string(),
            radius: 0.5,
            appearance: appearance.to_string(),
            orbital_radius: orbit,
            angular_rate: None,
            spin_rate: None,
            info: None,
        }
    }

    #[test]
    fn test_textured_body() {
        let mut graph = SceneGraph::default();
        let mars = spec("Mars", "textures/2k_mars.jpg", 14.0);
        let body = build_body(BodyKey(3), &mars, &mut graph, 32, 64);

        assert_eq!(body.material.texture.as_deref(), Some("textures/2k_mars.jpg"));
        assert_eq!(body.material.shininess, SURFACE_SHININESS);
        assert_eq!(body.material.emissive, SURFACE_EMISSIVE);
        assert_eq!(body.position, Vec3::new(14.0, 0.0, 0.0));
        assert_eq!(body.segments, 32);
        assert_eq!(body.orbit.as_ref().map(|o| o.points.len()), Some(65));
    }

    #[test]
    fn test_registers_mesh_and_orbit_names() {
        let mut graph = SceneGraph::default();
        build_body(BodyKey(4), &spec("Mars", "mars.png", 14.0), &mut graph, 32, 64);

        let names: Vec<&str> = graph.nodes().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Mars", "MarsOrbit"]);
        assert_eq!(graph.nodes()[0].kind, NodeKind::BodyMesh(BodyKey(4)));
        assert_eq!(graph.nodes()[1].kind, NodeKind::OrbitPath(BodyKey(4)));
    }

    #[test]
    fn test_central_body_has_no_orbit() {
        let mut graph = SceneGraph::default();
        let body = build_body(BodyKey::CENTRAL, &spec("Sun", "sun.jpg", 0.0), &mut graph, 32, 64);

        assert!(body.is_central());
        assert_eq!(body.material.emissive, CENTRAL_EMISSIVE);
        assert_eq!(graph.nodes().len(), 1);
    }

    #[test]
    fn test_missing_appearance_degrades() {
        let mut graph = SceneGraph::default();
        let body = build_body(BodyKey(1), &spec("Ghost", "   ", 5.0), &mut graph, 32, 64);
        assert!(body.material.is_degraded());
        assert_eq!(body.material.shininess, SURFACE_SHININESS);
    }

    #[test]
    fn test_unsupported_appearance_degrades() {
        let err = resolve_appearance(&spec("Odd", "odd.bmpx", 5.0)).unwrap_err();
        assert!(matches!(err, AssetError::UnsupportedFormat { .. }));

        let mut graph = SceneGraph::default();
        let body = build_body(BodyKey(1), &spec("Odd", "odd.bmpx", 5.0), &mut graph, 32, 64);
        assert!(body.material.is_degraded());
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(resolve_appearance(&spec("Loud", "LOUD.JPG", 5.0)).is_ok());
    }

    #[test]
    fn test_orbit_path_is_closed() {
        let path = OrbitPath::circle(11.0, 64);
        let first = path.points[0];
        let last = *path.points.last().unwrap();
        assert_relative_eq!(first.x, last.x, epsilon = 1e-4);
        assert_relative_eq!(first.z, last.z, epsilon = 1e-4);
        assert_eq!(path.segments().count(), 64);
    }

    #[test]
    fn test_roughness_from_shininess() {
        let material = SurfaceMaterial::untextured(0.0);
        let roughness = material.perceptual_roughness();
        assert!(roughness > 0.1 && roughness < 0.5, "got {roughness}");
    }
}
