//! Property-based tests for tweens and focus transitions using proptest.

use bevy::prelude::*;
use proptest::prelude::*;

use super::{Easing, FocusAnimator, FocusPhase, FocusTarget, Tween};
use crate::camera::CameraRig;
use crate::catalog::builtin_catalog;
use crate::planetarium::PlanetariumSettings;
use crate::scene::Scene;
use crate::types::BodyKey;

fn vec3() -> impl Strategy<Value = Vec3> {
    (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A tween starts at `start`, ends exactly at `end` and never overshoots.
    #[test]
    fn prop_tween_endpoints_and_monotone(
        start in vec3(),
        end in vec3(),
        duration in 0.01f64..10.0,
        samples in 2usize..40,
    ) {
        let tween = Tween::new(start, end, 0.0, duration, Easing::QuadraticOut);
        prop_assert_eq!(tween.sample(0.0), start);
        prop_assert_eq!(tween.sample(duration), end);

        let mut last = start.distance(end);
        for i in 0..=samples {
            let now = duration * i as f64 / samples as f64;
            let remaining = tween.sample(now).distance(end);
            prop_assert!(remaining <= last + 1e-3, "moved away from end at {}", now);
            last = remaining;
        }
    }

    /// After the fixed duration the focused body sits at the origin and the
    /// camera at the detail distance, whatever the camera was doing before.
    #[test]
    fn prop_focus_lands_in_detail(
        index in 1usize..9,
        start_time in 0.0f64..1_000.0,
        camera in (-60.0f32..60.0, 5.0f32..60.0, -60.0f32..60.0),
    ) {
        let settings = PlanetariumSettings::default();
        let mut scene = Scene::assemble(&builtin_catalog(), &settings);
        let mut rig = CameraRig::from_settings(&settings);
        rig.position = Vec3::new(camera.0, camera.1, camera.2);
        let mut animator = FocusAnimator::new(&settings);

        let key = BodyKey(index);
        prop_assert!(animator.begin_focus(FocusTarget::Body(key), &rig, &mut scene, start_time));
        animator.advance(&mut rig, &mut scene, start_time + settings.focus_duration);

        prop_assert_eq!(animator.phase(), FocusPhase::Detail);
        let body = scene.body(key).unwrap();
        prop_assert!(body.position.length() < 1e-5);
        let expected = animator.detail_distance(body.radius);
        prop_assert!((rig.distance_to_target() - expected).abs() < 1e-3);
    }
}
