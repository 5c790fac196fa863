//! Shared identifiers, system sets and constants.

use bevy::prelude::*;

/// System sets ordering one frame of the planetarium.
///
/// Pointer and keyboard actions are applied against the previous frame's
/// settled positions, then the frame advances, then entities mirror the
/// result before rendering.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Input handling (pick, pause, return, orbit controls).
    Input,
    /// Clock, integration, focus animations and control damping.
    Advance,
    /// Copy core state onto entities.
    Sync,
}

/// Stable index of a body in the scene arena.
///
/// Keys are assigned in catalog order, so key 0 is always the central body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyKey(pub usize);

impl BodyKey {
    /// Key of the central body.
    pub const CENTRAL: BodyKey = BodyKey(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// Marker component for every entity owned by the mounted view.
///
/// Unmounting despawns all of them.
#[derive(Component, Default)]
pub struct ViewEntity;

/// Distances below this are treated as coincident.
pub const EPSILON: f32 = 1e-5;
