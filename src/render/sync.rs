//! Synchronization between the planetarium core and rendered entities.
//!
//! Copies body positions and spins, the sun's pulsing intensity, central
//! body visibility and selection glows onto entities after each frame.

use bevy::prelude::*;

use crate::planetarium::Planetarium;
use crate::render::bodies::{CelestialBody, SunLight};
use crate::types::{BodyKey, ViewEntity};

/// Point light spawned for one selection glow.
#[derive(Component)]
pub struct GlowLight {
    pub id: u64,
}

/// Update body transforms from the scene arena.
pub fn sync_body_transforms(
    planetarium: Res<Planetarium>,
    mut bodies: Query<(&CelestialBody, &mut Transform)>,
) {
    let scene = planetarium.scene();
    for (marker, mut transform) in &mut bodies {
        let Some(body) = scene.body(marker.key) else {
            continue;
        };
        transform.translation = body.position;
        transform.rotation = Quat::from_rotation_y(body.rotation);
    }
}

/// Hide the central body while another body is parked inside it.
pub fn sync_central_visibility(
    planetarium: Res<Planetarium>,
    mut bodies: Query<(&CelestialBody, &mut Visibility)>,
) {
    let occluded = planetarium.central_body_occluded();
    for (marker, mut visibility) in &mut bodies {
        if marker.key != BodyKey::CENTRAL {
            continue;
        }
        let wanted = if occluded {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        visibility.set_if_neq(wanted);
    }
}

/// Apply the sun's pulse to its point light.
pub fn sync_sun_light(
    planetarium: Res<Planetarium>,
    mut lights: Query<&mut PointLight, With<SunLight>>,
) {
    let intensity = planetarium.sun_light_intensity();
    for mut light in &mut lights {
        light.intensity = intensity;
    }
}

/// Spawn and despawn glow lights to match the active glows.
pub fn sync_glows(
    mut commands: Commands,
    planetarium: Res<Planetarium>,
    lights: Query<(Entity, &GlowLight)>,
) {
    let glows = planetarium.glows();
    let settings = planetarium.settings();

    for (entity, light) in &lights {
        if !glows.iter().any(|g| g.id == light.id) {
            commands.entity(entity).despawn();
        }
    }

    for glow in glows {
        if lights.iter().any(|(_, light)| light.id == glow.id) {
            continue;
        }
        commands.spawn((
            PointLight {
                intensity: settings.glow_lumens,
                range: settings.glow_range,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(glow.position),
            GlowLight { id: glow.id },
            ViewEntity,
        ));
    }
}
