//! Planetarium - Interactive Orbital Visualization
//!
//! A library crate providing the planetarium core (catalog, scene,
//! integrator, picking, focus animation) and the Bevy plugins that render
//! and drive it.

pub mod camera;
pub mod catalog;
pub mod driver;
pub mod focus;
pub mod input;
pub mod integrator;
pub mod picking;
pub mod planetarium;
pub mod render;
pub mod scene;
pub mod time;
pub mod types;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod test_utils;

use bevy::prelude::*;

/// Plugin aggregating the whole planetarium view.
///
/// Expects `DefaultPlugins` and `bevy_egui::EguiPlugin` to be present.
pub struct PlanetariumPlugin;

impl Plugin for PlanetariumPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            view::ViewPlugin,
            driver::DriverPlugin,
            camera::CameraPlugin,
            render::RenderPlugin,
            input::InputPlugin,
            ui::UiPlugin,
        ));
    }
}
