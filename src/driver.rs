//! Render loop driver.
//!
//! Orders each frame as input, advance, sync and runs one
//! [`Planetarium::frame`] per Bevy update while the view is mounted. Once the
//! core resource is removed every system here stops running.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::planetarium::Planetarium;
use crate::types::FrameSet;

/// Plugin driving the planetarium frame.
pub struct DriverPlugin;

impl Plugin for DriverPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (FrameSet::Input, FrameSet::Advance, FrameSet::Sync).chain(),
        )
        .add_systems(
            Update,
            (
                track_viewport.in_set(FrameSet::Input),
                drive_frame.in_set(FrameSet::Advance),
            )
                .run_if(resource_exists::<Planetarium>),
        );
    }
}

/// Re-project when the primary window changes size.
fn track_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut planetarium: ResMut<Planetarium>,
    mut last_size: Local<Option<Vec2>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    // A fresh mount starts from the default viewport.
    if *last_size == Some(size) && !planetarium.is_added() {
        return;
    }
    *last_size = Some(size);
    planetarium.resize(size.x, size.y);
}

/// Advance the core by the frame delta.
fn drive_frame(time: Res<Time>, mut planetarium: ResMut<Planetarium>) {
    planetarium.frame(time.delta_secs_f64());
}
