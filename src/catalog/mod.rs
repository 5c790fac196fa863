//! Static body catalog for the planetarium.
//!
//! The catalog is authored data: one central body, the bodies orbiting it in
//! increasing orbital-radius order, the asteroid belt definition, and the
//! descriptive metadata shown by the info overlay. It is validated once at
//! construction and treated as read-only afterwards.

pub mod data;

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

pub use self::data::builtin_catalog;

/// Suffix appended to a body's name to name its orbit path node.
pub const ORBIT_SUFFIX: &str = "Orbit";

/// Angular rate numerator used when a body does not specify its own rate.
///
/// Chosen so that a body at orbital radius 6 moves at 0.5 rad/s.
pub const DEFAULT_ANGULAR_RATE_SCALE: f32 = 3.0;

/// Spin added per frame when a body does not specify its own spin rate.
pub const DEFAULT_SPIN_RATE: f32 = 0.005;

/// Errors raised while loading or validating a catalog.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// File could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid RON for the catalog schema.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// The first body must sit at the origin.
    #[error("catalog has no central body (first entry must have orbital radius 0)")]
    MissingCentralBody,

    #[error("duplicate body identifier `{0}`")]
    DuplicateName(String),

    #[error("body `{0}` uses the reserved suffix `{ORBIT_SUFFIX}`")]
    ReservedSuffix(String),

    #[error("body `{name}` has non-positive radius {radius}")]
    InvalidRadius { name: String, radius: f32 },

    /// Orbiting bodies must be listed by strictly increasing orbital radius.
    #[error("body `{name}` orbit {orbital_radius} does not exceed the previous orbit")]
    OrbitOrder { name: String, orbital_radius: f32 },

    /// A numeric field is NaN or infinite, or a belt size is negative.
    #[error("`{name}` has invalid {field} {value}")]
    InvalidValue {
        name: String,
        field: &'static str,
        value: f32,
    },

    #[error("asteroid belt bound `{0}` is not a catalog body")]
    UnknownBeltBound(String),

    #[error("asteroid belt inner bound {inner} is not inside outer bound {outer}")]
    InvertedBelt { inner: f32, outer: f32 },
}

/// Descriptive metadata for one identity, shown by the info overlay.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BodyInfo {
    pub description: String,
    pub diameter: String,
    pub distance_from_sun: String,
    pub orbital_period: String,
    pub day_length: String,
}

/// Authored parameters for one body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BodySpec {
    /// Unique identifier, also used as the scene graph name.
    pub name: String,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Texture path for the surface; may fail to resolve.
    pub appearance: String,
    /// Distance from the central body (0 for the central body itself).
    pub orbital_radius: f32,
    /// Radians per second of orbital time.
    #[serde(default)]
    pub angular_rate: Option<f32>,
    /// Radians of self-rotation added every frame.
    #[serde(default)]
    pub spin_rate: Option<f32>,
    #[serde(default)]
    pub info: Option<BodyInfo>,
}

impl BodySpec {
    /// Whether this is the body everything else orbits.
    pub fn is_central(&self) -> bool {
        self.orbital_radius == 0.0
    }

    /// Orbital angular rate; farther bodies default to slower rates.
    pub fn angular_rate(&self) -> f32 {
        match self.angular_rate {
            Some(rate) => rate,
            None if self.is_central() => 0.0,
            None => DEFAULT_ANGULAR_RATE_SCALE / self.orbital_radius,
        }
    }

    pub fn spin_rate(&self) -> f32 {
        self.spin_rate.unwrap_or(DEFAULT_SPIN_RATE)
    }

    /// Name of the orbit path node drawn for this body.
    pub fn orbit_name(&self) -> String {
        format!("{}{}", self.name, ORBIT_SUFFIX)
    }
}

/// Authored parameters for the asteroid belt.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BeltSpec {
    /// Collective identity every belt member resolves to.
    pub name: String,
    /// Body whose orbit forms the inner edge of the annulus.
    pub inner_body: String,
    /// Body whose orbit forms the outer edge of the annulus.
    pub outer_body: String,
    pub count: usize,
    /// Inclusive range of asteroid radii.
    pub min_size: f32,
    pub max_size: f32,
    /// Maximum out-of-plane offset in either direction.
    pub vertical_jitter: f32,
    #[serde(default)]
    pub info: Option<BodyInfo>,
}

/// The full static input of the planetarium.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Catalog {
    pub bodies: Vec<BodySpec>,
    pub belt: BeltSpec,
}

impl Default for Catalog {
    fn default() -> Self {
        builtin_catalog()
    }
}

fn check_finite(name: &str, field: &'static str, value: f32) -> Result<(), CatalogError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CatalogError::InvalidValue {
            name: name.to_string(),
            field,
            value,
        })
    }
}

impl Catalog {
    /// Build and validate a catalog.
    pub fn new(bodies: Vec<BodySpec>, belt: BeltSpec) -> Result<Self, CatalogError> {
        let catalog = Self { bodies, belt };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog written in RON.
    pub fn from_ron_str(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = ron::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse and validate a RON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let Some(central) = self.bodies.first().filter(|b| b.is_central()) else {
            return Err(CatalogError::MissingCentralBody);
        };

        let mut seen = HashSet::new();
        let mut previous_orbit = central.orbital_radius;
        for (index, body) in self.bodies.iter().enumerate() {
            if !seen.insert(body.name.as_str()) || body.name == self.belt.name {
                return Err(CatalogError::DuplicateName(body.name.clone()));
            }
            if body.name.ends_with(ORBIT_SUFFIX) {
                return Err(CatalogError::ReservedSuffix(body.name.clone()));
            }
            check_finite(&body.name, "orbital_radius", body.orbital_radius)?;
            if let Some(rate) = body.angular_rate {
                check_finite(&body.name, "angular_rate", rate)?;
            }
            if let Some(rate) = body.spin_rate {
                check_finite(&body.name, "spin_rate", rate)?;
            }
            if !(body.radius > 0.0 && body.radius.is_finite()) {
                return Err(CatalogError::InvalidRadius {
                    name: body.name.clone(),
                    radius: body.radius,
                });
            }
            if index > 0 && !(body.orbital_radius > previous_orbit) {
                return Err(CatalogError::OrbitOrder {
                    name: body.name.clone(),
                    orbital_radius: body.orbital_radius,
                });
            }
            previous_orbit = body.orbital_radius;
        }

        let belt = &self.belt;
        for (field, value) in [
            ("min_size", belt.min_size),
            ("max_size", belt.max_size),
            ("vertical_jitter", belt.vertical_jitter),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CatalogError::InvalidValue {
                    name: belt.name.clone(),
                    field,
                    value,
                });
            }
        }

        let (inner, outer) = self.belt_bounds_checked()?;
        if inner >= outer {
            return Err(CatalogError::InvertedBelt { inner, outer });
        }
        Ok(())
    }

    fn belt_bounds_checked(&self) -> Result<(f32, f32), CatalogError> {
        let radius_of = |name: &str| {
            self.find(name)
                .map(|b| b.orbital_radius)
                .ok_or_else(|| CatalogError::UnknownBeltBound(name.to_string()))
        };
        Ok((
            radius_of(&self.belt.inner_body)?,
            radius_of(&self.belt.outer_body)?,
        ))
    }

    /// The body at the origin.
    pub fn central(&self) -> Option<&BodySpec> {
        self.bodies.first().filter(|b| b.is_central())
    }

    /// Bodies that orbit the central body, innermost first.
    pub fn orbiting(&self) -> &[BodySpec] {
        self.bodies.get(1..).unwrap_or_default()
    }

    pub fn find(&self, name: &str) -> Option<&BodySpec> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Orbital radii bounding the asteroid belt annulus, `(inner, outer)`.
    pub fn belt_bounds(&self) -> (f32, f32) {
        // Validated at construction.
        self.belt_bounds_checked().unwrap_or((0.0, 0.0))
    }

    /// Descriptive metadata for a logical identity (body name or belt name).
    pub fn info(&self, identity: &str) -> Option<&BodyInfo> {
        if identity == self.belt.name {
            return self.belt.info.as_ref();
        }
        self.find(identity).and_then(|b| b.info.as_ref())
    }
}
