//! Built-in catalog: the Sun, the eight planets and the main asteroid belt.
//!
//! Radii and orbital radii are scene units chosen for legibility, not to
//! scale. Angular rates shrink with distance; spin rates are per frame.

use super::{BeltSpec, BodyInfo, BodySpec, Catalog};

/// One row of the built-in table.
struct Row {
    name: &'static str,
    radius: f32,
    texture: &'static str,
    orbital_radius: f32,
    angular_rate: f32,
    spin_rate: f32,
    info: Info,
}

struct Info {
    description: &'static str,
    diameter: &'static str,
    distance_from_sun: &'static str,
    orbital_period: &'static str,
    day_length: &'static str,
}

impl From<&Info> for BodyInfo {
    fn from(info: &Info) -> Self {
        BodyInfo {
            description: info.description.to_string(),
            diameter: info.diameter.to_string(),
            distance_from_sun: info.distance_from_sun.to_string(),
            orbital_period: info.orbital_period.to_string(),
            day_length: info.day_length.to_string(),
        }
    }
}

const ROWS: &[Row] = &[
    Row {
        name: "Sun",
        radius: 3.0,
        texture: "textures/2k_sun.jpg",
        orbital_radius: 0.0,
        angular_rate: 0.0,
        spin_rate: 0.001,
        info: Info {
            description: "A G-type main-sequence star holding 99.86% of the system's mass.",
            diameter: "1,392,700 km",
            distance_from_sun: "0 km",
            orbital_period: "230 million years (galactic)",
            day_length: "25 days (equator)",
        },
    },
    Row {
        name: "Mercury",
        radius: 0.2,
        texture: "textures/2k_mercury.jpg",
        orbital_radius: 6.0,
        angular_rate: 0.5,
        spin_rate: 0.005,
        info: Info {
            description: "The smallest planet, with temperatures swinging from -180°C to 430°C.",
            diameter: "4,879 km",
            distance_from_sun: "57.9 million km",
            orbital_period: "88 days",
            day_length: "58.6 days",
        },
    },
    Row {
        name: "Venus",
        radius: 0.3,
        texture: "textures/2k_venus_surface.jpg",
        orbital_radius: 8.0,
        angular_rate: 0.3,
        spin_rate: 0.003,
        info: Info {
            description: "Shrouded in sulfuric clouds; the hottest planet, rotating retrograde.",
            diameter: "12,104 km",
            distance_from_sun: "108.2 million km",
            orbital_period: "225 days",
            day_length: "243 days",
        },
    },
    Row {
        name: "Earth",
        radius: 0.4,
        texture: "textures/2k_earth_daymap.jpg",
        orbital_radius: 11.0,
        angular_rate: 0.2,
        spin_rate: 0.01,
        info: Info {
            description: "The only known world with liquid surface water and life.",
            diameter: "12,742 km",
            distance_from_sun: "149.6 million km",
            orbital_period: "365.25 days",
            day_length: "24 hours",
        },
    },
    Row {
        name: "Mars",
        radius: 0.25,
        texture: "textures/2k_mars.jpg",
        orbital_radius: 14.0,
        angular_rate: 0.15,
        spin_rate: 0.008,
        info: Info {
            description: "A cold desert world home to Olympus Mons, the tallest volcano known.",
            diameter: "6,779 km",
            distance_from_sun: "227.9 million km",
            orbital_period: "687 days",
            day_length: "24.6 hours",
        },
    },
    Row {
        name: "Jupiter",
        radius: 1.2,
        texture: "textures/2k_jupiter.jpg",
        orbital_radius: 25.0,
        angular_rate: 0.1,
        spin_rate: 0.004,
        info: Info {
            description: "The largest planet; its Great Red Spot is a storm wider than Earth.",
            diameter: "139,820 km",
            distance_from_sun: "778.5 million km",
            orbital_period: "11.9 years",
            day_length: "9.9 hours",
        },
    },
    Row {
        name: "Saturn",
        radius: 1.0,
        texture: "textures/2k_saturn.jpg",
        orbital_radius: 32.0,
        angular_rate: 0.08,
        spin_rate: 0.0038,
        info: Info {
            description: "Famous for its ring system; less dense than water.",
            diameter: "116,460 km",
            distance_from_sun: "1.43 billion km",
            orbital_period: "29.5 years",
            day_length: "10.7 hours",
        },
    },
    Row {
        name: "Uranus",
        radius: 0.8,
        texture: "textures/2k_uranus.jpg",
        orbital_radius: 38.0,
        angular_rate: 0.06,
        spin_rate: 0.003,
        info: Info {
            description: "An ice giant tilted 98°, rolling around the Sun on its side.",
            diameter: "50,724 km",
            distance_from_sun: "2.87 billion km",
            orbital_period: "84 years",
            day_length: "17.2 hours",
        },
    },
    Row {
        name: "Neptune",
        radius: 0.7,
        texture: "textures/2k_neptune.jpg",
        orbital_radius: 44.0,
        angular_rate: 0.05,
        spin_rate: 0.0028,
        info: Info {
            description: "The outermost planet, with the fastest winds in the solar system.",
            diameter: "49,244 km",
            distance_from_sun: "4.5 billion km",
            orbital_period: "164.8 years",
            day_length: "16.1 hours",
        },
    },
];

const BELT_INFO: Info = Info {
    description: "Millions of rocky fragments left over from planet formation.",
    diameter: "~1 AU wide",
    distance_from_sun: "329 - 478 million km",
    orbital_period: "3 - 6 years",
    day_length: "varies",
};

/// The catalog used when no external catalog is supplied.
pub fn builtin_catalog() -> Catalog {
    let bodies = ROWS
        .iter()
        .map(|row| BodySpec {
            name: row.name.to_string(),
            radius: row.radius,
            appearance: row.texture.to_string(),
            orbital_radius: row.orbital_radius,
            angular_rate: Some(row.angular_rate),
            spin_rate: Some(row.spin_rate),
            info: Some(BodyInfo::from(&row.info)),
        })
        .collect();

    Catalog {
        bodies,
        belt: BeltSpec {
            name: "Asteroid Belt".to_string(),
            inner_body: "Mars".to_string(),
            outer_body: "Jupiter".to_string(),
            count: 400,
            min_size: 0.05,
            max_size: 0.15,
            vertical_jitter: 0.5,
            info: Some(BodyInfo::from(&BELT_INFO)),
        },
    }
}
