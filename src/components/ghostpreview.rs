//! Drop-location previews.
//!
//! The [`GhostPreview`] entity shows a translucent copy of the held object
//! where it would land. Its parts are [`MeshPart`](super::meshpart::MeshPart)
//! children rebuilt on every pickup. The [`ShadowDot`] marks the same spot and
//! shrinks as the held object rises away from it.
use bevy_ecs::prelude::*;
use smallvec::SmallVec;

#[derive(Component, Clone, Debug, Default)]
pub struct GhostPreview {
    /// Duplicated mesh parts currently attached to the preview.
    pub parts: SmallVec<[Entity; 8]>,
}

/// Marker for mesh parts owned by a [`GhostPreview`].
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct GhostPart;

/// Marker for the shadow indicator under a held object.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ShadowDot;
