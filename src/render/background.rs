//! Background rendering for the planetarium.
//!
//! Spawns the starfield backdrop and applies the ambient fill when the view
//! mounts.

use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::planetarium::Planetarium;
use crate::types::ViewEntity;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (spawn_starfield, apply_ambient_fill).run_if(resource_added::<Planetarium>),
        );
    }
}

/// Spawn one small unlit sphere per star of the assembled starfield.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    planetarium: Res<Planetarium>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(0.3).mesh().uv(6, 4));

    let stars = &planetarium.scene().starfield().stars;
    for star in stars {
        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(star.position).with_scale(Vec3::splat(star.scale)),
            ViewEntity,
        ));
    }

    info!("Spawned {} background stars", stars.len());
}

/// Give the main camera the scene's ambient fill.
fn apply_ambient_fill(
    mut commands: Commands,
    planetarium: Res<Planetarium>,
    cameras: Query<Entity, With<MainCamera>>,
) {
    let brightness = planetarium.scene().ambient().brightness;
    for camera in &cameras {
        commands.entity(camera).insert(AmbientLight {
            color: Color::WHITE,
            brightness,
            ..default()
        });
    }
}
