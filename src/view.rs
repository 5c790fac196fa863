//! View gating and lifecycle.
//!
//! The planetarium is mounted when [`ViewState::Planetarium`] is entered and
//! torn down when it is left. Entering requires [`ViewerAccess`], which the
//! embedding application controls.

use std::path::Path;

use bevy::prelude::*;

use crate::catalog::{Catalog, builtin_catalog};
use crate::planetarium::{Planetarium, PlanetariumSettings};
use crate::types::{FrameSet, ViewEntity};

#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// Nothing mounted.
    #[default]
    Locked,
    /// Scene assembled and running.
    Planetarium,
}

/// Whether the current viewer may open the planetarium.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct ViewerAccess {
    pub authorized: bool,
}

impl Default for ViewerAccess {
    fn default() -> Self {
        Self { authorized: true }
    }
}

/// Whether the user wants the view open. Toggled with F2.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct MountRequest(pub bool);

impl Default for MountRequest {
    fn default() -> Self {
        Self(true)
    }
}

/// Catalog the view is mounted with, and where it came from.
#[derive(Resource, Clone, Debug)]
pub struct CatalogSource {
    pub catalog: Catalog,
    /// File the catalog was read from; `None` for the built-in table.
    pub path: Option<String>,
    /// Load error that forced the built-in fallback.
    pub error: Option<String>,
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self {
            catalog: builtin_catalog(),
            path: None,
            error: None,
        }
    }
}

impl CatalogSource {
    /// Load a RON catalog, falling back to the built-in one on failure.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let display = path.as_ref().display().to_string();
        match Catalog::load(&path) {
            Ok(catalog) => Self {
                catalog,
                path: Some(display),
                error: None,
            },
            Err(err) => Self {
                error: Some(format!("{display}: {err}")),
                ..default()
            },
        }
    }
}

/// Plugin managing mount and unmount of the planetarium view.
pub struct ViewPlugin;

impl Plugin for ViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ViewState>()
            .init_resource::<ViewerAccess>()
            .init_resource::<MountRequest>()
            .init_resource::<CatalogSource>()
            .init_resource::<PlanetariumSettings>()
            .add_systems(Startup, report_catalog_source)
            .add_systems(Update, apply_view_gate.in_set(FrameSet::Input))
            .add_systems(OnEnter(ViewState::Planetarium), mount)
            .add_systems(OnExit(ViewState::Planetarium), unmount);
    }
}

fn report_catalog_source(source: Res<CatalogSource>) {
    match (&source.path, &source.error) {
        (_, Some(err)) => warn!("Catalog failed to load ({err}); using built-in catalog"),
        (Some(path), None) => info!("Loaded catalog from {path}"),
        (None, None) => info!("Using built-in catalog"),
    }
}

/// Move between Locked and Planetarium as access and the user request allow.
fn apply_view_gate(
    access: Res<ViewerAccess>,
    request: Res<MountRequest>,
    state: Res<State<ViewState>>,
    mut next: ResMut<NextState<ViewState>>,
) {
    let wanted = access.authorized && request.0;
    match (state.get(), wanted) {
        (ViewState::Locked, true) => next.set(ViewState::Planetarium),
        (ViewState::Planetarium, false) => next.set(ViewState::Locked),
        _ => {}
    }
    if request.0 && !access.authorized && access.is_changed() {
        warn!("Viewer is not authorized; planetarium stays locked");
    }
}

fn mount(
    mut commands: Commands,
    source: Res<CatalogSource>,
    settings: Res<PlanetariumSettings>,
) {
    commands.insert_resource(Planetarium::new(source.catalog.clone(), settings.clone()));
    info!("Mounted planetarium view");
}

fn unmount(
    mut commands: Commands,
    planetarium: Option<ResMut<Planetarium>>,
    views: Query<Entity, With<ViewEntity>>,
) {
    if let Some(mut planetarium) = planetarium {
        let freed = planetarium.teardown();
        info!("Unmounted planetarium view ({freed} renderables released)");
    }
    commands.remove_resource::<Planetarium>();
    for entity in &views {
        commands.entity(entity).despawn();
    }
}
