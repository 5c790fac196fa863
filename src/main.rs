//! Planetarium - Interactive Orbital Visualization
//!
//! A desktop application showing the Sun, its eight planets and the
//! asteroid belt in motion. Click a body to fly to it.
//!
//! Usage: `planetarium [catalog.ron]`

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use planetarium::PlanetariumPlugin;
use planetarium::view::CatalogSource;

fn main() {
    // Optional RON catalog replacing the built-in bodies
    let source = std::env::args()
        .nth(1)
        .map(CatalogSource::from_path)
        .unwrap_or_default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planetarium".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(source)
        .add_plugins(PlanetariumPlugin)
        .run();
}
