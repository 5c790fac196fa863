//! Celestial body rendering and spawning.
//!
//! Spawns one textured sphere per body, the asteroid belt and the sun's
//! point light when the view mounts. Textures load in the background; a
//! texture that fails to load is swapped for the untextured look.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::planetarium::Planetarium;
use crate::scene::Body;
use crate::types::{BodyKey, ViewEntity};

/// Component marking an entity as a rendered body.
#[derive(Component)]
pub struct CelestialBody {
    pub key: BodyKey,
    pub name: String,
}

/// Component marking a member of the asteroid belt.
#[derive(Component)]
pub struct BeltMember {
    pub index: usize,
}

/// Marker for the point light parented to the central body.
#[derive(Component)]
pub struct SunLight;

/// Texture still loading for a body material.
#[derive(Component)]
pub struct PendingTexture(pub Handle<Image>);

/// Base colour used when a body has no texture.
const UNTEXTURED_COLOR: Color = Color::srgb(0.6, 0.6, 0.65);

const ASTEROID_COLOR: Color = Color::srgb(0.55, 0.5, 0.45);

/// Plugin providing body spawning and texture fallback.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                spawn_bodies.run_if(resource_added::<Planetarium>),
                fall_back_on_failed_textures,
            ),
        );
    }
}

fn body_material(body: &Body, texture: Option<Handle<Image>>) -> StandardMaterial {
    let surface = &body.material;
    StandardMaterial {
        base_color: if texture.is_some() {
            Color::WHITE
        } else {
            UNTEXTURED_COLOR
        },
        base_color_texture: texture,
        perceptual_roughness: surface.perceptual_roughness(),
        emissive: LinearRgba::gray(surface.emissive),
        // The central body is its own light source.
        unlit: body.is_central(),
        ..default()
    }
}

/// Spawn bodies, belt and sun light for a freshly mounted planetarium.
fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    planetarium: Res<Planetarium>,
) {
    let scene = planetarium.scene();

    for body in scene.bodies() {
        let mesh = meshes.add(Sphere::new(body.radius).mesh().uv(body.segments, body.segments));
        let texture: Option<Handle<Image>> = body
            .material
            .texture
            .as_ref()
            .map(|path| asset_server.load(path.clone()));
        let material = materials.add(body_material(body, texture.clone()));

        let mut entity = commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(body.position)
                .with_rotation(Quat::from_rotation_y(body.rotation)),
            CelestialBody {
                key: body.key,
                name: body.name.clone(),
            },
            ViewEntity,
        ));
        if let Some(texture) = texture {
            entity.insert(PendingTexture(texture));
        }
        let entity = entity.id();

        if body.key == scene.sun_light().body {
            let light = scene.sun_light();
            commands.spawn((
                PointLight {
                    intensity: light.base_lumens,
                    range: light.range,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::default(),
                SunLight,
                ChildOf(entity),
            ));
        }
    }

    let rock_mesh = meshes.add(Sphere::new(1.0).mesh().uv(8, 6));
    let rock_material = materials.add(StandardMaterial {
        base_color: ASTEROID_COLOR,
        perceptual_roughness: 1.0,
        ..default()
    });
    for (index, rock) in scene.belt().asteroids.iter().enumerate() {
        commands.spawn((
            Mesh3d(rock_mesh.clone()),
            MeshMaterial3d(rock_material.clone()),
            Transform::from_translation(rock.position)
                .with_rotation(Quat::from_euler(
                    EulerRot::XYZ,
                    rock.rotation.x,
                    rock.rotation.y,
                    rock.rotation.z,
                ))
                .with_scale(Vec3::splat(rock.size)),
            BeltMember { index },
            ViewEntity,
        ));
    }

    info!(
        "Spawned {} bodies and {} asteroids",
        scene.bodies().len(),
        scene.belt().len()
    );
}

/// Drop textures that failed to load so the body renders untextured.
fn fall_back_on_failed_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    pending: Query<(Entity, &PendingTexture, &MeshMaterial3d<StandardMaterial>, &CelestialBody)>,
) {
    for (entity, texture, material, body) in &pending {
        match asset_server.load_state(texture.0.id()) {
            LoadState::Loaded => {
                commands.entity(entity).remove::<PendingTexture>();
            }
            LoadState::Failed(err) => {
                warn!("Texture for {} failed to load ({err}); rendering untextured", body.name);
                let mut untextured = materials.get(&material.0).cloned().unwrap_or_default();
                untextured.base_color_texture = None;
                untextured.base_color = UNTEXTURED_COLOR;
                commands
                    .entity(entity)
                    .insert(MeshMaterial3d(materials.add(untextured)))
                    .remove::<PendingTexture>();
            }
            _ => {}
        }
    }
}
