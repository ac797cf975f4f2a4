//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the kitchen. Host-facing components carry the values the engine reads or
//! writes each step (bodies, ray results); gameplay components carry the
//! state of the player, zones, boxes and HUD elements.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned box used by the headless host
//! - [`characterbody`] – kinematic player body
//! - [`container`] – unpacking boxes and their contents
//! - [`ghostpreview`] – drop-location ghost and shadow markers
//! - [`interactable`] – interaction capability tag and display name
//! - [`label`] – HUD text lines and the info display marker
//! - [`meshpart`] – visible sub-parts with outline overlays
//! - [`particles`] – one-shot particle burst requests
//! - [`player`] – player controller state machine data
//! - [`position`] – world-space position
//! - [`raycast`] – aim and drop ray results
//! - [`rigidbody`] – simulated body surface (velocity, gravity, masks)
//! - [`rotation`] – Euler rotation
//! - [`scale`] – 3D scale factor
//! - [`timer`] – one-shot countdown
//! - [`tint`] – color modulation and the crosshair marker
//! - [`triggervolume`] – overlap volume for headless zone detection
//! - [`tween`] – animated scale interpolation
//! - [`visibility`] – host-rendered visibility flag
//! - [`zone`] – placement goal regions

pub mod boxcollider;
pub mod characterbody;
pub mod container;
pub mod ghostpreview;
pub mod interactable;
pub mod label;
pub mod meshpart;
pub mod particles;
pub mod player;
pub mod position;
pub mod raycast;
pub mod rigidbody;
pub mod rotation;
pub mod scale;
pub mod timer;
pub mod tint;
pub mod triggervolume;
pub mod tween;
pub mod visibility;
pub mod zone;
