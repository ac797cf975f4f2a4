//! Visible sub-parts of an entity.
//!
//! A movable item is drawn by one or more [`MeshPart`] children (linked with
//! [`ChildOf`](bevy_ecs::hierarchy::ChildOf)). Parts that have an outline
//! overlay are what the highlight toggles: the overlay stays attached and only
//! its alpha changes.
use bevy_ecs::hierarchy::Children;
use bevy_ecs::prelude::*;
use glam::Vec3;

/// Outline material layered on top of a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayMaterial {
    /// 0.0 hides the outline, 1.0 shows it fully.
    pub alpha: f32,
}

#[derive(Component, Clone, Debug, PartialEq)]
pub struct MeshPart {
    /// Mesh asset key resolved by the host.
    pub mesh: String,
    /// Offset from the owning entity.
    pub offset: Vec3,
    /// Hidden parts are neither drawn nor copied into the ghost preview.
    pub visible: bool,
    pub overlay: Option<OverlayMaterial>,
    /// Material replacing every surface of the mesh, if any.
    pub material_override: Option<String>,
}

impl MeshPart {
    pub fn new(mesh: impl Into<String>) -> Self {
        Self {
            mesh: mesh.into(),
            offset: Vec3::ZERO,
            visible: true,
            overlay: None,
            material_override: None,
        }
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Attach a hidden outline overlay.
    pub fn with_outline(mut self) -> Self {
        self.overlay = Some(OverlayMaterial { alpha: 0.0 });
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Copy of this part suitable for the ghost preview: no outline, every
    /// surface replaced with `material`.
    pub fn ghost_copy(&self, material: &str) -> Self {
        Self {
            mesh: self.mesh.clone(),
            offset: self.offset,
            visible: true,
            overlay: None,
            material_override: Some(material.to_string()),
        }
    }
}

/// Collect every [`MeshPart`] entity below `root`, depth first.
pub fn collect_mesh_parts(
    root: Entity,
    children: &Query<&Children>,
    parts: &Query<&mut MeshPart>,
    out: &mut Vec<Entity>,
) {
    let Ok(kids) = children.get(root) else {
        return;
    };
    for child in kids.iter() {
        if parts.contains(child) {
            out.push(child);
        }
        collect_mesh_parts(child, children, parts, out);
    }
}

/// Show or hide the outline overlay on every part below `root`.
///
/// Parts without an overlay are left untouched.
pub fn set_highlight(
    root: Entity,
    enabled: bool,
    children: &Query<&Children>,
    parts: &mut Query<&mut MeshPart>,
) {
    let mut found = Vec::new();
    collect_mesh_parts(root, children, parts, &mut found);
    let alpha = if enabled { 1.0 } else { 0.0 };
    for entity in found {
        if let Ok(mut part) = parts.get_mut(entity) {
            if let Some(overlay) = part.overlay.as_mut() {
                overlay.alpha = alpha;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_copy_drops_overlay_and_overrides_material() {
        let part = MeshPart::new("mug").with_outline().with_offset(Vec3::Y);
        let ghost = part.ghost_copy("ghost");
        assert!(ghost.overlay.is_none());
        assert_eq!(ghost.material_override.as_deref(), Some("ghost"));
        assert_eq!(ghost.offset, Vec3::Y);
        assert!(ghost.visible);
    }

    #[test]
    fn outline_starts_transparent() {
        let part = MeshPart::new("pan").with_outline();
        assert_eq!(part.overlay, Some(OverlayMaterial { alpha: 0.0 }));
    }
}
