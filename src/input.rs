//! Input handling for keyboard shortcuts, picking and camera orbiting.
//!
//! Translates Bevy input into planetarium actions: a left click picks, a
//! left drag orbits the camera, the wheel zooms. Pointer input over egui
//! panels is left to egui.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::planetarium::Planetarium;
use crate::types::FrameSet;
use crate::view::MountRequest;

/// Pointer travel, in logical pixels, below which a press-release is a click.
pub const CLICK_SLOP: f32 = 4.0;

/// Pixels of scroll treated as one wheel notch.
const PIXELS_PER_NOTCH: f32 = 100.0;

/// Resource tracking the left-button gesture.
#[derive(Resource, Default)]
pub struct PointerGesture {
    /// Cursor position at press, if the press started over the scene.
    pub pressed_at: Option<Vec2>,
    /// Whether the pointer moved far enough to become a drag.
    pub dragging: bool,
}

/// Plugin providing keyboard and pointer handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerGesture>()
            .add_systems(Update, toggle_mount.in_set(FrameSet::Input))
            .add_systems(
                Update,
                (keyboard_shortcuts, pointer_input)
                    .in_set(FrameSet::Input)
                    .run_if(resource_exists::<Planetarium>),
            );
    }
}

/// Digit keys selecting bodies by catalog index.
const SELECT_KEYS: [KeyCode; 9] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
];

/// F2: mount or unmount the view.
fn toggle_mount(keys: Res<ButtonInput<KeyCode>>, mut request: ResMut<MountRequest>) {
    if keys.just_pressed(KeyCode::F2) {
        request.0 = !request.0;
        info!("View {} requested", if request.0 { "mount" } else { "unmount" });
    }
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut planetarium: ResMut<Planetarium>) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        planetarium.toggle_pause();
    }

    if keys.any_just_pressed([KeyCode::Escape, KeyCode::Backspace]) {
        planetarium.return_to_overview();
    }

    for (index, key) in SELECT_KEYS.iter().enumerate() {
        if keys.just_pressed(*key) {
            planetarium.select_by_index(index);
        }
    }
}

/// Click to pick, drag to orbit, scroll to zoom.
fn pointer_input(
    mouse: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gesture: ResMut<PointerGesture>,
    mut planetarium: ResMut<Planetarium>,
    mut contexts: EguiContexts,
) {
    // Only consult egui when no gesture is in progress, so releases over a
    // panel still finish the drag.
    if gesture.pressed_at.is_none()
        && let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let cursor = window.cursor_position();

    if mouse.just_pressed(MouseButton::Left) {
        gesture.pressed_at = cursor;
        gesture.dragging = false;
    }

    if mouse.pressed(MouseButton::Left)
        && let Some(start) = gesture.pressed_at
    {
        if !gesture.dragging && cursor.is_some_and(|c| c.distance(start) > CLICK_SLOP) {
            gesture.dragging = true;
        }
        if gesture.dragging && motion.delta != Vec2::ZERO {
            planetarium.orbit_input(motion.delta);
        }
    }

    if mouse.just_released(MouseButton::Left) {
        if let Some(position) = cursor
            && gesture.pressed_at.is_some()
            && !gesture.dragging
        {
            planetarium.click(position);
        }
        gesture.pressed_at = None;
        gesture.dragging = false;
    }

    let notches = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y,
        MouseScrollUnit::Pixel => scroll.delta.y / PIXELS_PER_NOTCH,
    };
    if notches != 0.0 {
        planetarium.zoom_input(notches);
    }
}
