//! Gameplay and host systems.
//!
//! This module groups all ECS systems and observers that advance the kitchen
//! simulation.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread (poll/update message queues)
//! - [`container`] – unpack boxes into scattered items
//! - [`gameconfig`] – push changed tunables into dependent resources
//! - [`hud`] – checklist lines, level victory burst, hint fades
//! - [`input`] – turn [`crate::resources::input::InputState`] edges into events
//! - [`interaction`] – highlight, pick up, carry, rotate, tilt and drop
//! - [`movement`] – headless integration of rigid and character bodies
//! - [`playermovement`] – walking, jumping and gravity for the player body
//! - [`raycast`] – headless aim and drop probes
//! - [`time`] – update simulation time and delta
//! - [`timer`] – one-shot timers and the info display auto-hide
//! - [`tween`] – animate scale over time
//! - [`zone`] – zone membership, status reports and victory effects
//! - [`zonevolume`] – headless trigger-volume enter/exit detection

pub mod audio;
pub mod container;
pub mod gameconfig;
pub mod hud;
pub mod input;
pub mod interaction;
pub mod movement;
pub mod playermovement;
pub mod raycast;
pub mod time;
pub mod timer;
pub mod tween;
pub mod zone;
pub mod zonevolume;
