//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `gameconfig` – gameplay tunables loaded from INI
//! - `hints` – contextual HUD tips and their fades
//! - `hud` – HUD collaborators not owned by a zone
//! - `input` – per-frame action state, movement axis and look delta
//! - `levelprogress` – count of complete zones and the level-victory latch
//! - `worldtime` – simulation time and delta
pub mod audio;
pub mod gameconfig;
pub mod hints;
pub mod hud;
pub mod input;
pub mod levelprogress;
pub mod worldtime;
