//! Orbit path rendering using Bevy Gizmos.
//!
//! Each orbiting body's precomputed polyline is redrawn every frame as an
//! immediate-mode line strip.

use bevy::prelude::*;

use crate::planetarium::Planetarium;
use crate::types::FrameSet;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>().add_systems(
            Update,
            draw_orbit_paths
                .in_set(FrameSet::Sync)
                .run_if(resource_exists::<Planetarium>),
        );
    }
}

/// Settings for orbit path rendering.
#[derive(Resource, Clone, Debug)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    pub color: Color,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            color: Color::srgba(1.0, 1.0, 1.0, 0.5),
        }
    }
}

fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    planetarium: Res<Planetarium>,
) {
    if !settings.visible {
        return;
    }
    for path in planetarium.scene().orbiting().filter_map(|b| b.orbit.as_ref()) {
        gizmos.linestrip(path.points.iter().copied(), settings.color);
    }
}
