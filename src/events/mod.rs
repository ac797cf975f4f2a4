//! Event types exchanged across systems and observers.
//!
//! Events provide a decoupled way for the host boundary, the interaction
//! controller, zones and the HUD to communicate without holding references
//! to one another.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`container`] – unpack requests for boxes
//! - [`hint`] – contextual tip requests for the HUD
//! - [`input`] – logical input actions and mouse motion
//! - [`timer`] – one-shot timer expiry
//! - [`zone`] – trigger crossings, zone status and victory notifications
pub mod audio;
pub mod container;
pub mod hint;
pub mod input;
pub mod timer;
pub mod zone;
