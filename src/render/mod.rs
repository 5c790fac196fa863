//! Rendering systems for the planetarium.
//!
//! This module spawns the visual representation of the assembled scene on
//! mount and mirrors the core's state onto it every frame.

mod background;
pub mod bodies;
mod orbits;
mod sync;

use bevy::prelude::*;

use crate::planetarium::Planetarium;
use crate::types::FrameSet;

use self::background::BackgroundPlugin;
use self::bodies::CelestialBodyPlugin;
use self::orbits::OrbitPathPlugin;
use self::sync::{sync_body_transforms, sync_central_visibility, sync_glows, sync_sun_light};

// Re-export for use in other modules
pub use self::bodies::{BeltMember, CelestialBody, SunLight};
pub use self::orbits::OrbitPathSettings;
pub use self::sync::GlowLight;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CelestialBodyPlugin, BackgroundPlugin, OrbitPathPlugin))
            .add_systems(
                Update,
                (
                    sync_body_transforms,
                    sync_central_visibility,
                    sync_sun_light,
                    sync_glows,
                )
                    .in_set(FrameSet::Sync)
                    .run_if(resource_exists::<Planetarium>),
            );
    }
}
