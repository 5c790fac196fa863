//! UI module providing the egui overlay.
//!
//! The info panel shows the payload of the current selection, the bottom
//! bar holds the pause control, and a notice replaces both while the view
//! is locked.

mod info_panel;
mod time_controls;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::planetarium::{OverlayPayload, Planetarium};
use crate::types::FrameSet;
use crate::view::{ViewState, ViewerAccess};

pub use info_panel::info_panel;
pub use time_controls::time_controls_panel;

/// Payload currently shown by the info panel.
#[derive(Resource, Default, Debug)]
pub struct InfoOverlay {
    pub payload: Option<OverlayPayload>,
}

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InfoOverlay>()
            .add_systems(
                Update,
                collect_overlay_changes
                    .in_set(FrameSet::Sync)
                    .run_if(resource_exists::<Planetarium>),
            )
            .add_systems(OnExit(ViewState::Planetarium), clear_overlay)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    (time_controls_panel, info_panel).run_if(resource_exists::<Planetarium>),
                    locked_notice.run_if(not(resource_exists::<Planetarium>)),
                ),
            );
    }
}

/// Apply overlay payloads emitted by the core since the last frame.
pub fn collect_overlay_changes(
    mut planetarium: ResMut<Planetarium>,
    mut overlay: ResMut<InfoOverlay>,
) {
    for change in planetarium.take_overlay_changes() {
        debug!(
            "Overlay now {}",
            change.as_ref().map_or("empty", |p| p.name.as_str())
        );
        overlay.payload = change;
    }
}

fn clear_overlay(mut overlay: ResMut<InfoOverlay>) {
    overlay.payload = None;
}

fn locked_notice(mut contexts: EguiContexts, access: Res<ViewerAccess>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.4);
            if access.authorized {
                ui.heading("Planetarium closed");
                ui.label("Press F2 to open it.");
            } else {
                ui.heading("Sign in to view the planetarium");
            }
        });
    });
}
