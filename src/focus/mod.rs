//! Camera/focus animator.
//!
//! Moves the view between the overview framing and a detail framing of one
//! selection. A forward transition runs three tweens in lock-step: the
//! camera position, the orbit-control target and (for bodies) the body
//! itself, which is parked at the origin until the view returns to overview.
//!
//! ```text
//! Overview --begin_focus--> Transitioning(Forward) --elapsed--> Detail
//! Detail --begin_return--> Transitioning(Reverse) --elapsed--> Overview
//! ```

pub mod tween;

#[cfg(test)]
mod proptest_focus;

use bevy::prelude::*;

use crate::camera::CameraRig;
use crate::planetarium::PlanetariumSettings;
use crate::scene::Scene;
use crate::types::BodyKey;

pub use self::tween::{Easing, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionDirection {
    /// Overview to Detail.
    Forward,
    /// Detail back to Overview.
    Reverse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusPhase {
    #[default]
    Overview,
    Transitioning(TransitionDirection),
    Detail,
}

/// What the view is focused on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FocusTarget {
    /// A body, parked at the origin while focused.
    Body(BodyKey),
    /// A point of a collective identity such as the asteroid belt; nothing moves.
    Region { anchor: Vec3 },
}

/// Tweens driving one transition.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusTweens {
    pub camera: Tween,
    pub target: Tween,
    /// Present only for a forward transition onto a body.
    pub body: Option<(BodyKey, Tween)>,
}

impl FocusTweens {
    fn is_finished(&self, now: f64) -> bool {
        self.camera.is_finished(now)
            && self.target.is_finished(now)
            && self
                .body
                .as_ref()
                .is_none_or(|(_, tween)| tween.is_finished(now))
    }
}

/// Where the camera was before focusing, restored on return.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverviewFraming {
    pub position: Vec3,
    pub target: Vec3,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FocusState {
    pub phase: FocusPhase,
    pub target: Option<FocusTarget>,
    pub tweens: Option<FocusTweens>,
    pub home: Option<OverviewFraming>,
}

/// Drives [`FocusState`] against the camera rig and the scene.
#[derive(Clone, Debug)]
pub struct FocusAnimator {
    duration: f64,
    easing: Easing,
    distance_factor: f32,
    region_distance: f32,
    state: FocusState,
}

impl FocusAnimator {
    pub fn new(settings: &PlanetariumSettings) -> Self {
        Self {
            duration: settings.focus_duration,
            easing: settings.focus_easing,
            distance_factor: settings.focus_distance_factor,
            region_distance: settings.belt_focus_distance,
            state: FocusState::default(),
        }
    }

    pub fn state(&self) -> &FocusState {
        &self.state
    }

    pub fn phase(&self) -> FocusPhase {
        self.state.phase
    }

    pub fn target(&self) -> Option<FocusTarget> {
        self.state.target
    }

    /// Body currently parked by the animator, if any.
    pub fn focused_body(&self) -> Option<BodyKey> {
        match self.state.target {
            Some(FocusTarget::Body(key)) => Some(key),
            _ => None,
        }
    }

    /// Camera distance from the origin once a body of `radius` is in detail.
    pub fn detail_distance(&self, radius: f32) -> f32 {
        radius * self.distance_factor
    }

    /// Start a forward transition. Only accepted in Overview.
    pub fn begin_focus(
        &mut self,
        target: FocusTarget,
        rig: &CameraRig,
        scene: &mut Scene,
        now: f64,
    ) -> bool {
        if self.state.phase != FocusPhase::Overview {
            return false;
        }

        let (anchor, distance, body) = match target {
            FocusTarget::Body(key) => {
                let Some(body) = scene.body_mut(key) else {
                    return false;
                };
                body.parked = true;
                let tween = Tween::new(body.position, Vec3::ZERO, now, self.duration, self.easing);
                (Vec3::ZERO, body.radius * self.distance_factor, Some((key, tween)))
            }
            FocusTarget::Region { anchor } => (anchor, self.region_distance, None),
        };

        // Approach along the current line of sight.
        let destination = anchor + rig.view_axis() * distance;

        self.state = FocusState {
            phase: FocusPhase::Transitioning(TransitionDirection::Forward),
            target: Some(target),
            tweens: Some(FocusTweens {
                camera: Tween::new(rig.position, destination, now, self.duration, self.easing),
                target: Tween::new(rig.target, anchor, now, self.duration, self.easing),
                body,
            }),
            home: Some(OverviewFraming {
                position: rig.position,
                target: rig.target,
            }),
        };
        true
    }

    /// Start the reverse transition. Only accepted in Detail.
    pub fn begin_return(&mut self, rig: &CameraRig, now: f64) -> bool {
        if self.state.phase != FocusPhase::Detail {
            return false;
        }
        let home = self.state.home.unwrap_or(OverviewFraming {
            position: rig.position,
            target: Vec3::ZERO,
        });

        self.state.phase = FocusPhase::Transitioning(TransitionDirection::Reverse);
        self.state.tweens = Some(FocusTweens {
            camera: Tween::new(rig.position, home.position, now, self.duration, self.easing),
            target: Tween::new(rig.target, home.target, now, self.duration, self.easing),
            body: None,
        });
        true
    }

    /// Sample in-flight tweens at `now` and settle the phase when they finish.
    ///
    /// Returns the new phase when it changed.
    pub fn advance(
        &mut self,
        rig: &mut CameraRig,
        scene: &mut Scene,
        now: f64,
    ) -> Option<FocusPhase> {
        let tweens = self.state.tweens.as_ref()?;

        rig.position = tweens.camera.sample(now);
        rig.target = tweens.target.sample(now);
        if let Some((key, tween)) = &tweens.body
            && let Some(body) = scene.body_mut(*key)
        {
            body.position = tween.sample(now);
        }

        if !tweens.is_finished(now) {
            return None;
        }

        self.state.tweens = None;
        self.state.phase = match self.state.phase {
            FocusPhase::Transitioning(TransitionDirection::Forward) => FocusPhase::Detail,
            _ => {
                if let Some(key) = self.focused_body()
                    && let Some(body) = scene.body_mut(key)
                {
                    body.parked = false;
                }
                self.state.target = None;
                self.state.home = None;
                FocusPhase::Overview
            }
        };
        Some(self.state.phase)
    }

    /// Drop every in-flight animation without touching the scene.
    pub fn discard(&mut self) {
        self.state = FocusState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use approx::assert_relative_eq;

    const EARTH: BodyKey = BodyKey(3);

    fn setup() -> (FocusAnimator, CameraRig, Scene) {
        let settings = PlanetariumSettings::default();
        (
            FocusAnimator::new(&settings),
            CameraRig::from_settings(&settings),
            Scene::assemble(&builtin_catalog(), &settings),
        )
    }

    #[test]
    fn test_forward_transition_reaches_detail() {
        let (mut animator, mut rig, mut scene) = setup();
        let axis = rig.view_axis();

        assert!(animator.begin_focus(FocusTarget::Body(EARTH), &rig, &mut scene, 0.0));
        assert_eq!(
            animator.phase(),
            FocusPhase::Transitioning(TransitionDirection::Forward)
        );
        assert!(scene.body(EARTH).unwrap().parked);

        assert_eq!(animator.advance(&mut rig, &mut scene, 0.5), None);
        let halfway = scene.body(EARTH).unwrap().position;
        assert!(halfway.length() > 0.0 && halfway.length() < 11.0);

        assert_eq!(animator.advance(&mut rig, &mut scene, 1.0), Some(FocusPhase::Detail));
        assert_eq!(scene.body(EARTH).unwrap().position, Vec3::ZERO);
        assert_eq!(rig.target, Vec3::ZERO);
        assert_relative_eq!(rig.distance_to_target(), 0.4 * 5.0, epsilon = 1e-4);
        assert_relative_eq!(rig.view_axis().dot(axis), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_return_restores_overview_and_unparks() {
        let (mut animator, mut rig, mut scene) = setup();
        let home = rig.position;

        animator.begin_focus(FocusTarget::Body(EARTH), &rig, &mut scene, 0.0);
        animator.advance(&mut rig, &mut scene, 1.0);
        assert!(animator.begin_return(&rig, 2.0));
        assert_eq!(
            animator.phase(),
            FocusPhase::Transitioning(TransitionDirection::Reverse)
        );

        // Still parked while travelling back.
        animator.advance(&mut rig, &mut scene, 2.5);
        assert!(scene.body(EARTH).unwrap().parked);
        assert_eq!(scene.body(EARTH).unwrap().position, Vec3::ZERO);

        assert_eq!(animator.advance(&mut rig, &mut scene, 3.0), Some(FocusPhase::Overview));
        assert!(!scene.body(EARTH).unwrap().parked);
        assert_eq!(rig.position, home);
        assert_eq!(animator.target(), None);
    }

    #[test]
    fn test_focus_rejected_outside_overview() {
        let (mut animator, rig, mut scene) = setup();
        animator.begin_focus(FocusTarget::Body(EARTH), &rig, &mut scene, 0.0);
        let before = animator.state().clone();

        assert!(!animator.begin_focus(FocusTarget::Body(BodyKey(4)), &rig, &mut scene, 0.1));
        assert_eq!(animator.state(), &before);
        assert!(!scene.body(BodyKey(4)).unwrap().parked);
    }

    #[test]
    fn test_return_only_from_detail() {
        let (mut animator, rig, mut scene) = setup();
        assert!(!animator.begin_return(&rig, 0.0));

        animator.begin_focus(FocusTarget::Body(EARTH), &rig, &mut scene, 0.0);
        assert!(!animator.begin_return(&rig, 0.5));
    }

    #[test]
    fn test_region_focus_parks_nothing() {
        let (mut animator, mut rig, mut scene) = setup();
        let anchor = Vec3::new(18.0, 0.2, 3.0);

        animator.begin_focus(FocusTarget::Region { anchor }, &rig, &mut scene, 0.0);
        assert!(scene.bodies().iter().all(|b| !b.parked));
        assert_eq!(animator.focused_body(), None);

        animator.advance(&mut rig, &mut scene, 1.0);
        assert_eq!(animator.phase(), FocusPhase::Detail);
        assert_eq!(rig.target, anchor);
        assert_relative_eq!(rig.distance_to_target(), 6.0, epsilon = 1e-4);
    }

    #[test]
    fn test_unknown_body_rejected() {
        let (mut animator, rig, mut scene) = setup();
        assert!(!animator.begin_focus(FocusTarget::Body(BodyKey(99)), &rig, &mut scene, 0.0));
        assert_eq!(animator.phase(), FocusPhase::Overview);
    }

    #[test]
    fn test_discard_drops_tweens() {
        let (mut animator, mut rig, mut scene) = setup();
        animator.begin_focus(FocusTarget::Body(EARTH), &rig, &mut scene, 0.0);
        animator.discard();

        let camera = rig.position;
        assert_eq!(animator.advance(&mut rig, &mut scene, 0.5), None);
        assert_eq!(rig.position, camera);
        assert_eq!(animator.phase(), FocusPhase::Overview);
    }

    #[test]
    fn test_easing_comes_from_settings() {
        let settings = PlanetariumSettings {
            focus_easing: Easing::Linear,
            ..default()
        };
        let mut animator = FocusAnimator::new(&settings);
        let mut rig = CameraRig::from_settings(&settings);
        let mut scene = Scene::assemble(&builtin_catalog(), &settings);
        let start = scene.body(EARTH).unwrap().position;

        animator.begin_focus(FocusTarget::Body(EARTH), &rig, &mut scene, 0.0);
        animator.advance(&mut rig, &mut scene, 0.5);
        let halfway = scene.body(EARTH).unwrap().position;
        assert_relative_eq!(halfway.distance(start * 0.5), 0.0, epsilon = 1e-4);

        let tweens = animator.state().tweens.as_ref().unwrap();
        assert_eq!(tweens.camera.easing, Easing::Linear);
        assert_eq!(tweens.target.easing, Easing::Linear);
    }
}
