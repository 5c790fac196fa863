//! Camera for the planetarium.
//!
//! [`CameraRig`] is the perspective camera model the core works with: it
//! builds pick rays and projects points to the screen. [`OrbitControls`]
//! orbits and dollies the rig around its target with damping. The plugin
//! spawns the render camera and mirrors the rig onto it every frame.

use bevy::prelude::*;

use crate::planetarium::{Planetarium, PlanetariumSettings};
use crate::types::{EPSILON, FrameSet};

/// Window size assumed until the first resize arrives.
pub const DEFAULT_VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

/// Keeps the polar angle off the poles so the view never flips.
const POLE_MARGIN: f32 = 1e-3;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Perspective camera looking at a target point.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    /// Look-at point, also the orbit-controls pivot.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    viewport: Vec2,
}

impl CameraRig {
    pub fn new(position: Vec3, target: Vec3, fov_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target,
            fov_y: fov_degrees.to_radians(),
            near,
            far,
            viewport: DEFAULT_VIEWPORT,
        }
    }

    pub fn from_settings(settings: &PlanetariumSettings) -> Self {
        Self::new(
            settings.overview_camera,
            Vec3::ZERO,
            settings.fov_degrees,
            settings.near,
            settings.far,
        )
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn aspect(&self) -> f32 {
        self.viewport.x / self.viewport.y
    }

    /// Re-project for a new viewport size.
    ///
    /// Returns `false` and keeps the previous projection when the size is
    /// zero or not finite.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let valid = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        if valid {
            self.viewport = Vec2::new(width, height);
        }
        valid
    }

    /// Unit vector from the target towards the camera.
    pub fn view_axis(&self) -> Vec3 {
        (self.position - self.target)
            .try_normalize()
            .unwrap_or(Vec3::Z)
    }

    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Camera basis: forward, right, up.
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = -self.view_axis();
        let right = forward.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X);
        let up = right.cross(forward);
        (forward, right, up)
    }

    /// Ray from the camera through a screen point (logical pixels, origin top-left).
    pub fn ray_through(&self, screen: Vec2) -> Option<Ray3d> {
        if !screen.is_finite() {
            return None;
        }
        let ndc = Vec2::new(
            screen.x / self.viewport.x * 2.0 - 1.0,
            1.0 - screen.y / self.viewport.y * 2.0,
        );
        let half_height = (self.fov_y * 0.5).tan();
        let (forward, right, up) = self.basis();
        let direction =
            forward + right * (ndc.x * half_height * self.aspect()) + up * (ndc.y * half_height);

        Dir3::new(direction).ok().map(|direction| Ray3d {
            origin: self.position,
            direction,
        })
    }

    /// Screen point of a world position, or `None` if it is behind the near plane.
    pub fn world_to_screen(&self, point: Vec3) -> Option<Vec2> {
        let (forward, right, up) = self.basis();
        let relative = point - self.position;
        let depth = relative.dot(forward);
        if depth <= self.near {
            return None;
        }
        let half_height = (self.fov_y * 0.5).tan();
        let ndc = Vec2::new(
            relative.dot(right) / (depth * half_height * self.aspect()),
            relative.dot(up) / (depth * half_height),
        );
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        ))
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.target, Vec3::Y)
    }
}

/// Damped orbit/dolly controls around the rig target.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitControls {
    /// Fraction of the pending motion applied per update.
    pub damping: f32,
    pub rotate_speed: f32,
    /// Distance multiplier per scroll notch.
    pub zoom_step: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub zoom_enabled: bool,
    theta_delta: f32,
    phi_delta: f32,
    scale: f32,
}

impl OrbitControls {
    pub fn from_settings(settings: &PlanetariumSettings) -> Self {
        Self {
            damping: settings.damping,
            rotate_speed: 1.0,
            zoom_step: 0.95,
            min_distance: settings.min_camera_distance,
            max_distance: settings.max_camera_distance,
            zoom_enabled: true,
            theta_delta: 0.0,
            phi_delta: 0.0,
            scale: 1.0,
        }
    }

    /// Queue an orbit from a pointer drag in pixels.
    pub fn rotate(&mut self, drag: Vec2, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let per_pixel = std::f32::consts::TAU / viewport_height * self.rotate_speed;
        self.theta_delta -= drag.x * per_pixel;
        self.phi_delta -= drag.y * per_pixel;
    }

    /// Queue a dolly; positive scroll moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        if !self.zoom_enabled || scroll == 0.0 {
            return;
        }
        if scroll > 0.0 {
            self.scale *= self.zoom_step;
        } else {
            self.scale /= self.zoom_step;
        }
    }

    /// Drop any queued motion.
    pub fn clear(&mut self) {
        self.theta_delta = 0.0;
        self.phi_delta = 0.0;
        self.scale = 1.0;
    }

    pub fn is_settled(&self) -> bool {
        self.theta_delta.abs() < EPSILON
            && self.phi_delta.abs() < EPSILON
            && (self.scale - 1.0).abs() < EPSILON
    }

    /// Apply one damped step to the rig. Returns whether the camera moved.
    pub fn update(&mut self, rig: &mut CameraRig) -> bool {
        if self.is_settled() {
            self.clear();
            return false;
        }

        let offset = rig.position - rig.target;
        let radius = offset.length();
        if radius < EPSILON {
            self.clear();
            return false;
        }

        let theta = offset.x.atan2(offset.z) + self.theta_delta * self.damping;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() + self.phi_delta * self.damping)
            .clamp(POLE_MARGIN, std::f32::consts::PI - POLE_MARGIN);
        let scale_step = self.scale.powf(self.damping);
        let radius = (radius * scale_step).clamp(self.min_distance, self.max_distance);

        rig.position = rig.target
            + Vec3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            );

        self.theta_delta *= 1.0 - self.damping;
        self.phi_delta *= 1.0 - self.damping;
        self.scale /= scale_step;
        true
    }
}

/// Plugin providing the render camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera).add_systems(
            Update,
            sync_camera
                .in_set(FrameSet::Sync)
                .run_if(resource_exists::<Planetarium>),
        );
    }
}

/// Spawn the main camera at the overview position.
fn setup_camera(mut commands: Commands, settings: Res<PlanetariumSettings>) {
    let rig = CameraRig::from_settings(&settings);
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: rig.fov_y,
            near: rig.near,
            far: rig.far,
            ..default()
        }),
        rig.transform(),
        MainCamera,
    ));
}

/// Mirror the core rig onto the render camera.
fn sync_camera(
    planetarium: Res<Planetarium>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = planetarium.rig().transform();
}
