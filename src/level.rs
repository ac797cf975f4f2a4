//! Level description loaded from JSON.
//!
//! A [`LevelLayout`] lists everything placed in the kitchen at start: the
//! player spawn, loose items, unpacking boxes, placement zones and the static
//! surfaces items can rest on. [`ItemTemplate`] is also the unit a box spawns
//! when opened.
//!
//! # Example
//!
//! ```json
//! {
//!   "name": "Tiny kitchen",
//!   "player_spawn": [0.0, 0.0, 4.0],
//!   "items": [
//!     { "name": "Mug", "position": [0.0, 0.15, 0.0] }
//!   ],
//!   "boxes": [
//!     { "position": [1.0, 0.3, 1.0], "contents": [{ "name": "Plate" }, null] }
//!   ],
//!   "zones": [
//!     { "name": "Cabinet Area", "required_items": 1,
//!       "position": [3.0, 1.2, -3.0], "half_extents": [1.5, 0.4, 0.6] }
//!   ],
//!   "surfaces": [
//!     { "position": [0.0, -0.5, 0.0], "half_extents": [10.0, 0.5, 10.0] }
//!   ]
//! }
//! ```

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::components::boxcollider::BoxCollider;
use crate::components::container::DEFAULT_UNPACK_FORCE;
use crate::components::interactable::{DisplayName, Interactable};
use crate::components::meshpart::MeshPart;
use crate::components::position::Position;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::visibility::Visibility;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse level file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid level: {0}")]
    Invalid(String),
}

/// How the host simulates an item.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    /// Simulated and movable by the player.
    #[default]
    Rigid,
    /// Fixed in place; never picked up and never given an impulse.
    Static,
}

fn default_mass() -> f32 {
    1.0
}

fn default_item_extents() -> Vec3 {
    Vec3::splat(0.15)
}

fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MeshPartSpec {
    pub mesh: String,
    #[serde(default)]
    pub offset: Vec3,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Whether the part carries a highlight outline.
    #[serde(default = "default_true")]
    pub outline: bool,
}

impl MeshPartSpec {
    fn build(&self) -> MeshPart {
        let mut part = MeshPart::new(self.mesh.clone()).with_offset(self.offset);
        if self.outline {
            part = part.with_outline();
        }
        if !self.visible {
            part = part.hidden();
        }
        part
    }
}

/// Everything needed to spawn one item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemTemplate {
    pub name: String,
    #[serde(default)]
    pub body: BodyKind,
    #[serde(default = "default_mass")]
    pub mass: f32,
    #[serde(default = "default_item_extents")]
    pub half_extents: Vec3,
    /// Visible parts. An empty list gets a single outlined part named after the item.
    #[serde(default)]
    pub mesh_parts: Vec<MeshPartSpec>,
}

impl ItemTemplate {
    /// A one-part rigid item with default size and mass.
    pub fn movable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: BodyKind::Rigid,
            mass: default_mass(),
            half_extents: default_item_extents(),
            mesh_parts: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: BodyKind) -> Self {
        self.body = body;
        self
    }

    pub fn with_mesh_part(mut self, spec: MeshPartSpec) -> Self {
        self.mesh_parts.push(spec);
        self
    }

    pub fn is_movable(&self) -> bool {
        self.body == BodyKind::Rigid
    }

    fn mesh_key(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }

    /// Spawn the item at rest.
    pub fn spawn(&self, commands: &mut Commands, position: Vec3, yaw: f32) -> Entity {
        self.spawn_with_impulse(commands, position, yaw, Vec3::ZERO)
    }

    /// Spawn the item with a central impulse queued on its body.
    ///
    /// Static items ignore the impulse.
    pub fn spawn_with_impulse(
        &self,
        commands: &mut Commands,
        position: Vec3,
        yaw: f32,
        impulse: Vec3,
    ) -> Entity {
        let mut entity = commands.spawn((
            Position::from_vec(position),
            Rotation::from_yaw(yaw),
            Visibility::visible(),
            DisplayName::new(self.name.clone()),
            BoxCollider::new(self.half_extents),
        ));
        if self.is_movable() {
            let mut body = RigidBody::new(self.mass);
            body.apply_central_impulse(impulse);
            entity.insert((Interactable::Movable, body));
        } else {
            entity.insert(Interactable::Static);
        }
        let id = entity.id();

        if self.mesh_parts.is_empty() {
            commands.spawn((MeshPart::new(self.mesh_key()).with_outline(), ChildOf(id)));
        } else {
            for spec in &self.mesh_parts {
                commands.spawn((spec.build(), ChildOf(id)));
            }
        }
        id
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlacedItem {
    #[serde(flatten)]
    pub template: ItemTemplate,
    pub position: Vec3,
    #[serde(default)]
    pub yaw: f32,
}

fn default_box_extents() -> Vec3 {
    Vec3::new(0.4, 0.3, 0.4)
}

fn default_spawn_offset() -> Vec3 {
    Vec3::new(0.0, 0.8, 0.0)
}

fn default_unpack_force() -> f32 {
    DEFAULT_UNPACK_FORCE
}

fn default_box_name() -> String {
    "Box".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoxSpec {
    #[serde(default = "default_box_name")]
    pub name: String,
    pub position: Vec3,
    #[serde(default)]
    pub yaw: f32,
    #[serde(default = "default_box_extents")]
    pub half_extents: Vec3,
    #[serde(default = "default_spawn_offset")]
    pub spawn_offset: Vec3,
    #[serde(default = "default_unpack_force")]
    pub unpack_force: f32,
    /// Ordered content slots; `null` slots are skipped when unpacking.
    #[serde(default)]
    pub contents: Vec<Option<ItemTemplate>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ZoneSpec {
    pub name: String,
    pub required_items: usize,
    pub position: Vec3,
    pub half_extents: Vec3,
    #[serde(default)]
    pub victory_sound: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SurfaceSpec {
    #[serde(default)]
    pub name: Option<String>,
    pub position: Vec3,
    pub half_extents: Vec3,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelLayout {
    #[serde(default)]
    pub name: String,
    pub player_spawn: Vec3,
    #[serde(default)]
    pub player_yaw: f32,
    #[serde(default)]
    pub items: Vec<PlacedItem>,
    #[serde(default)]
    pub boxes: Vec<BoxSpec>,
    #[serde(default)]
    pub zones: Vec<ZoneSpec>,
    #[serde(default)]
    pub surfaces: Vec<SurfaceSpec>,
}

impl LevelLayout {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let layout: LevelLayout =
            serde_json::from_str(&text).map_err(|source| LevelError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        for zone in &self.zones {
            if zone.half_extents.min_element() <= 0.0 {
                return Err(LevelError::Invalid(format!(
                    "zone '{}' has a non-positive half extent",
                    zone.name
                )));
            }
        }
        for b in &self.boxes {
            if !b.unpack_force.is_finite() || b.unpack_force < 0.0 {
                return Err(LevelError::Invalid(format!(
                    "box '{}' has an invalid unpack force {}",
                    b.name, b.unpack_force
                )));
            }
        }
        Ok(())
    }

    /// Sum of zones' required items, i.e. how many movables the level needs placed.
    pub fn required_item_count(&self) -> usize {
        self.zones.iter().map(|z| z.required_items).sum()
    }

    /// The built-in kitchen: a counter and a cabinet shelf, three cookware
    /// items on the floor and a box holding three dishes.
    pub fn default_kitchen() -> Self {
        let item = |name: &str, x: f32, z: f32| PlacedItem {
            template: ItemTemplate::movable(name),
            position: Vec3::new(x, 0.15, z),
            yaw: 0.0,
        };
        Self {
            name: "Kitchen".to_string(),
            player_spawn: Vec3::new(0.0, 0.0, 3.0),
            player_yaw: 0.0,
            items: vec![
                item("Frying Pan", -1.0, 0.5),
                item("Saucepan", -1.5, 0.0),
                item("Kettle", -0.5, -0.5),
            ],
            boxes: vec![BoxSpec {
                name: "Moving Box".to_string(),
                position: Vec3::new(1.5, 0.3, 0.5),
                yaw: 0.0,
                half_extents: default_box_extents(),
                spawn_offset: default_spawn_offset(),
                unpack_force: DEFAULT_UNPACK_FORCE,
                contents: vec![
                    Some(ItemTemplate::movable("Mug")),
                    Some(ItemTemplate::movable("Plate")),
                    Some(ItemTemplate::movable("Bowl")),
                ],
            }],
            zones: vec![
                ZoneSpec {
                    name: "Stove and Counter Area".to_string(),
                    required_items: 3,
                    position: Vec3::new(-3.0, 1.2, -3.0),
                    half_extents: Vec3::new(1.5, 0.4, 0.6),
                    victory_sound: Some("victory".to_string()),
                },
                ZoneSpec {
                    name: "Cabinet Area".to_string(),
                    required_items: 3,
                    position: Vec3::new(3.0, 1.2, -3.0),
                    half_extents: Vec3::new(1.5, 0.4, 0.6),
                    victory_sound: Some("victory".to_string()),
                },
            ],
            surfaces: vec![
                SurfaceSpec {
                    name: Some("Floor".to_string()),
                    position: Vec3::new(0.0, -0.5, 0.0),
                    half_extents: Vec3::new(10.0, 0.5, 10.0),
                },
                SurfaceSpec {
                    name: Some("Counter".to_string()),
                    position: Vec3::new(-3.0, 0.45, -3.0),
                    half_extents: Vec3::new(1.5, 0.45, 0.6),
                },
                SurfaceSpec {
                    name: Some("Cabinet Shelf".to_string()),
                    position: Vec3::new(3.0, 0.45, -3.0),
                    half_extents: Vec3::new(1.5, 0.45, 0.6),
                },
            ],
        }
    }
}
