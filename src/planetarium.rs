//! The planetarium core.
//!
//! [`Planetarium`] owns the assembled scene and everything that mutates it:
//! the simulation clock, the focus animator, the camera rig and its orbit
//! controls. The Bevy shell feeds it input actions and one [`Planetarium::frame`]
//! per rendered frame, then mirrors its state onto entities.

use bevy::prelude::*;

use crate::camera::{CameraRig, OrbitControls};
use crate::catalog::{BodyInfo, Catalog};
use crate::focus::{Easing, FocusAnimator, FocusPhase, FocusTarget};
use crate::integrator::integrate;
use crate::picking::{cast, resolve_identity};
use crate::scene::{NodeKind, Scene};
use crate::time::SimulationClock;
use crate::types::BodyKey;

/// Tunables for the planetarium view.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct PlanetariumSettings {
    /// Length of a focus transition in seconds.
    pub focus_duration: f64,
    /// Curve shared by the three tweens of a focus transition.
    pub focus_easing: Easing,
    /// Detail camera distance as a multiple of the focused body's radius.
    pub focus_distance_factor: f32,
    /// Detail camera distance when framing the asteroid belt.
    pub belt_focus_distance: f32,
    pub orbit_segments: u32,
    pub sphere_segments: u32,
    /// Pick distance for orbit lines, in world units.
    pub pick_line_threshold: f32,
    pub star_count: usize,
    pub star_shell_radius: f32,
    /// Seed for the asteroid belt and the starfield.
    pub seed: u64,
    pub overview_camera: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Orbit-controls damping factor.
    pub damping: f32,
    pub min_camera_distance: f32,
    pub max_camera_distance: f32,
    pub sun_light_lumens: f32,
    pub sun_pulse_lumens: f32,
    pub sun_pulse_rate: f32,
    pub sun_light_range: f32,
    pub ambient_brightness: f32,
    /// Seconds a selection glow stays lit.
    pub glow_duration: f64,
    pub glow_lumens: f32,
    pub glow_range: f32,
}

impl Default for PlanetariumSettings {
    fn default() -> Self {
        Self {
            focus_duration: 1.0,
            focus_easing: Easing::QuadraticOut,
            focus_distance_factor: 5.0,
            belt_focus_distance: 6.0,
            orbit_segments: 64,
            sphere_segments: 32,
            pick_line_threshold: 1.0,
            star_count: 500,
            star_shell_radius: 400.0,
            seed: 0x5EED_0F_5A7E,
            overview_camera: Vec3::new(0.0, 20.0, 30.0),
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            damping: 0.25,
            min_camera_distance: 0.5,
            max_camera_distance: 300.0,
            sun_light_lumens: 4_000_000.0,
            sun_pulse_lumens: 1_000_000.0,
            sun_pulse_rate: 0.5,
            sun_light_range: 100.0,
            ambient_brightness: 150.0,
            glow_duration: 2.0,
            glow_lumens: 2_000_000.0,
            glow_range: 10.0,
        }
    }
}

/// Descriptive text for the selected identity.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayPayload {
    pub name: String,
    pub description: String,
    pub diameter: String,
    pub distance_from_sun: String,
    pub orbital_period: String,
    pub day_length: String,
}

impl OverlayPayload {
    fn new(name: &str, info: &BodyInfo) -> Self {
        Self {
            name: name.to_string(),
            description: info.description.clone(),
            diameter: info.diameter.clone(),
            distance_from_sun: info.distance_from_sun.clone(),
            orbital_period: info.orbital_period.clone(),
            day_length: info.day_length.clone(),
        }
    }
}

/// Result of a pick or a select-by-name action.
#[derive(Clone, Debug, PartialEq)]
pub enum PickOutcome {
    /// A known identity was selected and a focus transition started.
    Selected { identity: String, target: FocusTarget },
    /// Nothing under the pointer; the overlay was cleared.
    Miss,
    /// The identity has no catalog metadata; handled like a miss.
    Unknown(String),
    /// Picking is disabled right now (transition, detail or torn down).
    Ignored,
}

/// Temporary light marking a fresh selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Glow {
    pub id: u64,
    /// Body that was selected; `None` for a region.
    pub body: Option<BodyKey>,
    /// Where the selection was when picked. The glow stays there.
    pub position: Vec3,
    /// Wall-clock second at which the glow goes out.
    pub expires_at: f64,
}

#[derive(Resource)]
pub struct Planetarium {
    catalog: Catalog,
    scene: Scene,
    clock: SimulationClock,
    focus: FocusAnimator,
    rig: CameraRig,
    controls: OrbitControls,
    overlay: Option<OverlayPayload>,
    overlay_changes: Vec<Option<OverlayPayload>>,
    glows: Vec<Glow>,
    next_glow: u64,
    settings: PlanetariumSettings,
    torn_down: bool,
}

impl Planetarium {
    /// Assemble the scene and place the camera at the overview framing.
    pub fn new(catalog: Catalog, settings: PlanetariumSettings) -> Self {
        let scene = Scene::assemble(&catalog, &settings);
        Self {
            scene,
            clock: SimulationClock::default(),
            focus: FocusAnimator::new(&settings),
            rig: CameraRig::from_settings(&settings),
            controls: OrbitControls::from_settings(&settings),
            overlay: None,
            overlay_changes: Vec::new(),
            glows: Vec::new(),
            next_glow: 0,
            catalog,
            settings,
            torn_down: false,
        }
    }

    /// Advance one frame by `dt` seconds.
    ///
    /// Integrates orbits (unless paused), samples in-flight focus tweens,
    /// applies orbit-control damping and expires glows. Returns the number
    /// of bodies the integrator moved.
    pub fn frame(&mut self, dt: f64) -> usize {
        if self.torn_down {
            return 0;
        }

        self.clock.advance(dt);
        let moved = integrate(
            self.scene.bodies_mut(),
            self.clock.orbital_time(),
            self.clock.is_paused(),
        );

        let now = self.clock.elapsed();
        if let Some(phase) = self.focus.advance(&mut self.rig, &mut self.scene, now) {
            info!("Focus phase: {phase:?}");
        }

        if matches!(self.focus.phase(), FocusPhase::Transitioning(_)) {
            self.controls.clear();
        } else {
            self.controls.update(&mut self.rig);
        }

        self.glows.retain(|glow| glow.expires_at > now);

        moved
    }

    /// Pick whatever lies under a screen point and focus on it.
    pub fn click(&mut self, screen: Vec2) -> PickOutcome {
        if self.torn_down {
            return PickOutcome::Ignored;
        }
        if self.focus.phase() != FocusPhase::Overview {
            debug!("Ignoring pick while {:?}", self.focus.phase());
            return PickOutcome::Ignored;
        }
        let Some(ray) = self.rig.ray_through(screen) else {
            debug!("No pick ray through {screen}");
            return PickOutcome::Ignored;
        };

        let Some(hit) = cast(&self.scene, &ray, self.settings.pick_line_threshold) else {
            debug!("Pick missed at {screen}");
            self.set_overlay(None);
            return PickOutcome::Miss;
        };
        let Some(node) = self.scene.graph().get(hit.node) else {
            return PickOutcome::Miss;
        };

        let identity = resolve_identity(&self.scene, node).to_string();
        let target = match node.kind {
            NodeKind::BodyMesh(key) | NodeKind::OrbitPath(key) => FocusTarget::Body(key),
            NodeKind::Asteroid(_) => FocusTarget::Region { anchor: hit.point },
        };
        self.select(identity, target)
    }

    /// Select an identity by name, as if it had been picked.
    pub fn select_by_name(&mut self, name: &str) -> PickOutcome {
        if self.torn_down || self.focus.phase() != FocusPhase::Overview {
            return PickOutcome::Ignored;
        }

        let target = if name == self.scene.belt().name {
            let belt = self.scene.belt();
            let anchor = belt
                .asteroids
                .first()
                .map(|rock| rock.position)
                .unwrap_or(Vec3::X * (belt.inner_radius + belt.outer_radius) * 0.5);
            FocusTarget::Region { anchor }
        } else if let Some(key) = self.scene.key_of(name) {
            FocusTarget::Body(key)
        } else {
            warn!("Cannot select unknown body `{name}`");
            return PickOutcome::Unknown(name.to_string());
        };
        self.select(name.to_string(), target)
    }

    /// Select the body at a catalog index (0 is the central body).
    pub fn select_by_index(&mut self, index: usize) -> PickOutcome {
        match self.scene.body(BodyKey(index)).map(|b| b.name.clone()) {
            Some(name) => self.select_by_name(&name),
            None => {
                warn!("No body at catalog index {index}");
                PickOutcome::Unknown(index.to_string())
            }
        }
    }

    fn select(&mut self, identity: String, target: FocusTarget) -> PickOutcome {
        let Some(info) = self.catalog.info(&identity) else {
            warn!("No metadata for `{identity}`; treating as a miss");
            self.set_overlay(None);
            return PickOutcome::Unknown(identity);
        };
        let payload = OverlayPayload::new(&identity, info);

        let now = self.clock.elapsed();
        if !self.focus.begin_focus(target, &self.rig, &mut self.scene, now) {
            return PickOutcome::Ignored;
        }
        self.controls.clear();
        self.set_overlay(Some(payload));

        let (body, position) = match target {
            FocusTarget::Body(key) => (
                Some(key),
                self.scene.body(key).map(|b| b.position).unwrap_or_default(),
            ),
            FocusTarget::Region { anchor } => (None, anchor),
        };
        self.glows.push(Glow {
            id: self.next_glow,
            body,
            position,
            expires_at: now + self.settings.glow_duration,
        });
        self.next_glow += 1;

        info!("Selected {identity}");
        PickOutcome::Selected { identity, target }
    }

    /// Start the reverse transition. Only accepted in Detail.
    pub fn return_to_overview(&mut self) -> bool {
        if self.torn_down || !self.focus.begin_return(&self.rig, self.clock.elapsed()) {
            return false;
        }
        self.controls.clear();
        self.set_overlay(None);
        info!("Returning to overview");
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        let paused = self.clock.toggle_pause();
        info!("Simulation {}", if paused { "paused" } else { "resumed" });
        paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.clock.is_paused() != paused {
            self.toggle_pause();
        }
    }

    /// Re-project for a new viewport. Zero-sized viewports are skipped.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let applied = self.rig.resize(width, height);
        if !applied {
            warn!("Skipping re-projection for {width}x{height} viewport");
        }
        applied
    }

    /// Queue a camera orbit from a pointer drag in pixels.
    pub fn orbit_input(&mut self, drag: Vec2) {
        if !self.accepts_camera_input() {
            return;
        }
        self.controls.rotate(drag, self.rig.viewport().y);
    }

    /// Queue a camera dolly; positive scroll moves closer.
    pub fn zoom_input(&mut self, scroll: f32) {
        if !self.accepts_camera_input() {
            return;
        }
        self.controls.zoom(scroll);
    }

    fn accepts_camera_input(&self) -> bool {
        !self.torn_down && !matches!(self.focus.phase(), FocusPhase::Transitioning(_))
    }

    fn set_overlay(&mut self, next: Option<OverlayPayload>) {
        if self.overlay != next {
            self.overlay = next.clone();
            self.overlay_changes.push(next);
        }
    }

    /// Overlay payloads emitted since the last call, oldest first.
    pub fn take_overlay_changes(&mut self) -> Vec<Option<OverlayPayload>> {
        std::mem::take(&mut self.overlay_changes)
    }

    /// Whether the central body must be hidden because a body is parked inside it.
    pub fn central_body_occluded(&self) -> bool {
        self.focus
            .focused_body()
            .is_some_and(|key| key != BodyKey::CENTRAL)
    }

    pub fn sun_light_intensity(&self) -> f32 {
        self.scene.sun_light().intensity_at(self.clock.elapsed())
    }

    /// Release the scene and drop in-flight animations.
    ///
    /// Returns the number of renderables freed; later calls free nothing.
    pub fn teardown(&mut self) -> usize {
        if self.torn_down {
            return 0;
        }
        self.focus.discard();
        self.controls.clear();
        self.glows.clear();
        self.overlay = None;
        self.overlay_changes.clear();
        self.torn_down = true;
        self.scene.release()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn focus(&self) -> &FocusAnimator {
        &self.focus
    }

    pub fn phase(&self) -> FocusPhase {
        self.focus.phase()
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn overlay(&self) -> Option<&OverlayPayload> {
        self.overlay.as_ref()
    }

    pub fn glows(&self) -> &[Glow] {
        &self.glows
    }

    pub fn settings(&self) -> &PlanetariumSettings {
        &self.settings
    }
}
