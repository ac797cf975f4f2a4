//! Game configuration resource.
//!
//! Manages gameplay tunables loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [player]
//! speed = 5.0
//! jump_velocity = 4.5
//! gravity = 9.8
//! mouse_sensitivity = 0.002
//! eye_height = 1.6
//! hold_distance = 1.5
//! reach = 3.0
//! look_pitch_limit_degrees = 80
//!
//! [hold]
//! pull_power = 20.0
//! max_pull_speed = 25.0
//! rotation_speed = 0.05
//! spin_multiplier = 10.0
//! tilt_degrees = 90
//! ghost_material = ghost
//!
//! [drop]
//! surface_offset = 0.05
//! pitch_min = 0.9
//! pitch_max = 1.1
//! sound = drop
//! probe_length = 10.0
//!
//! [shadow]
//! falloff = 0.3
//! min_scale = 0.2
//! lift = 0.01
//!
//! [hud]
//! total_zones_required = 2
//! info_display_seconds = 5.0
//! fade_seconds = 0.2
//! pickup_tip = Click Left Mouse Button to Pick Up {item}
//! place_tip = Click Left Mouse Button to Place
//! rotate_tip = Hold R and move the mouse to rotate, T to tilt
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;
use thiserror::Error;

use crate::resources::hints::{
    DEFAULT_FADE_SECONDS, DEFAULT_PICKUP_TIP, DEFAULT_PLACE_TIP, DEFAULT_ROTATE_TIP,
};

const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config file {path:?}: {message}")]
    Load { path: PathBuf, message: String },
    #[error("failed to save config file {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Gameplay configuration resource.
///
/// Changes made at runtime are picked up by
/// [`apply_gameconfig_changes`](crate::systems::gameconfig::apply_gameconfig_changes).
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    // [player]
    pub speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    /// Radians per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    pub eye_height: f32,
    /// Distance of the hold point in front of the camera.
    pub hold_distance: f32,
    /// Length of the aim ray.
    pub reach: f32,
    pub look_pitch_limit_degrees: f32,
    // [hold]
    pub pull_power: f32,
    pub max_pull_speed: f32,
    pub rotation_speed: f32,
    pub spin_multiplier: f32,
    pub tilt_degrees: f32,
    pub ghost_material: String,
    // [drop]
    pub drop_surface_offset: f32,
    pub drop_pitch_min: f32,
    pub drop_pitch_max: f32,
    pub drop_sound: String,
    pub drop_probe_length: f32,
    // [shadow]
    pub shadow_falloff: f32,
    pub shadow_min_scale: f32,
    pub shadow_lift: f32,
    // [hud]
    pub total_zones_required: usize,
    pub info_display_seconds: f32,
    pub fade_seconds: f32,
    pub pickup_tip: String,
    pub place_tip: String,
    pub rotate_tip: String,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_f32(ini: &Ini, section: &str, key: &str, into: &mut f32) {
    if let Some(v) = ini.getfloat(section, key).ok().flatten() {
        *into = v as f32;
    }
}

fn read_string(ini: &Ini, section: &str, key: &str, into: &mut String) {
    if let Some(v) = ini.get(section, key) {
        *into = v;
    }
}

impl GameConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            speed: 5.0,
            jump_velocity: 4.5,
            gravity: 9.8,
            mouse_sensitivity: 0.002,
            eye_height: 1.6,
            hold_distance: 1.5,
            reach: 3.0,
            look_pitch_limit_degrees: 80.0,
            pull_power: 20.0,
            max_pull_speed: 25.0,
            rotation_speed: 0.05,
            spin_multiplier: 10.0,
            tilt_degrees: 90.0,
            ghost_material: "ghost".to_string(),
            drop_surface_offset: 0.05,
            drop_pitch_min: 0.9,
            drop_pitch_max: 1.1,
            drop_sound: "drop".to_string(),
            drop_probe_length: 10.0,
            shadow_falloff: 0.3,
            shadow_min_scale: 0.2,
            shadow_lift: 0.01,
            total_zones_required: 2,
            info_display_seconds: 5.0,
            fade_seconds: DEFAULT_FADE_SECONDS,
            pickup_tip: DEFAULT_PICKUP_TIP.to_string(),
            place_tip: DEFAULT_PLACE_TIP.to_string(),
            rotate_tip: DEFAULT_ROTATE_TIP.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|message| ConfigError::Load {
                path: self.config_path.clone(),
                message,
            })?;
        self.apply_ini(&ini);

        info!(
            "Loaded config from {:?}: pull_power={}, max_pull_speed={}, zones_required={}",
            self.config_path, self.pull_power, self.max_pull_speed, self.total_zones_required
        );
        Ok(())
    }

    /// Parse configuration from INI text, e.g. an embedded default file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|message| ConfigError::Load {
                path: self.config_path.clone(),
                message,
            })?;
        self.apply_ini(&ini);
        Ok(())
    }

    fn apply_ini(&mut self, ini: &Ini) {
        read_f32(ini, "player", "speed", &mut self.speed);
        read_f32(ini, "player", "jump_velocity", &mut self.jump_velocity);
        read_f32(ini, "player", "gravity", &mut self.gravity);
        read_f32(ini, "player", "mouse_sensitivity", &mut self.mouse_sensitivity);
        read_f32(ini, "player", "eye_height", &mut self.eye_height);
        read_f32(ini, "player", "hold_distance", &mut self.hold_distance);
        read_f32(ini, "player", "reach", &mut self.reach);
        read_f32(
            ini,
            "player",
            "look_pitch_limit_degrees",
            &mut self.look_pitch_limit_degrees,
        );

        read_f32(ini, "hold", "pull_power", &mut self.pull_power);
        read_f32(ini, "hold", "max_pull_speed", &mut self.max_pull_speed);
        read_f32(ini, "hold", "rotation_speed", &mut self.rotation_speed);
        read_f32(ini, "hold", "spin_multiplier", &mut self.spin_multiplier);
        read_f32(ini, "hold", "tilt_degrees", &mut self.tilt_degrees);
        read_string(ini, "hold", "ghost_material", &mut self.ghost_material);

        read_f32(ini, "drop", "surface_offset", &mut self.drop_surface_offset);
        read_f32(ini, "drop", "pitch_min", &mut self.drop_pitch_min);
        read_f32(ini, "drop", "pitch_max", &mut self.drop_pitch_max);
        read_string(ini, "drop", "sound", &mut self.drop_sound);
        read_f32(ini, "drop", "probe_length", &mut self.drop_probe_length);

        read_f32(ini, "shadow", "falloff", &mut self.shadow_falloff);
        read_f32(ini, "shadow", "min_scale", &mut self.shadow_min_scale);
        read_f32(ini, "shadow", "lift", &mut self.shadow_lift);

        if let Some(n) = ini.getuint("hud", "total_zones_required").ok().flatten() {
            self.total_zones_required = n as usize;
        }
        read_f32(ini, "hud", "info_display_seconds", &mut self.info_display_seconds);
        read_f32(ini, "hud", "fade_seconds", &mut self.fade_seconds);
        read_string(ini, "hud", "pickup_tip", &mut self.pickup_tip);
        read_string(ini, "hud", "place_tip", &mut self.place_tip);
        read_string(ini, "hud", "rotate_tip", &mut self.rotate_tip);

        self.sanitize();
    }

    /// Bring loaded values back into the ranges the gameplay systems expect.
    fn sanitize(&mut self) {
        if self.drop_pitch_min > self.drop_pitch_max {
            std::mem::swap(&mut self.drop_pitch_min, &mut self.drop_pitch_max);
        }
        if !(0.0..=1.0).contains(&self.shadow_min_scale) {
            let clamped = self.shadow_min_scale.max(0.0).min(1.0);
            warn!(
                "shadow min_scale {} out of range, using {}",
                self.shadow_min_scale, clamped
            );
            self.shadow_min_scale = clamped;
        }
        if self.look_pitch_limit_degrees.is_nan() {
            self.look_pitch_limit_degrees = 80.0;
        }
        self.look_pitch_limit_degrees = self.look_pitch_limit_degrees.abs();
        if self.max_pull_speed.is_nan() || self.max_pull_speed < 0.0 {
            warn!(
                "max_pull_speed {} is invalid, held items will not move",
                self.max_pull_speed
            );
            self.max_pull_speed = 0.0;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        let mut set = |section: &str, key: &str, value: String| {
            ini.set(section, key, Some(value));
        };

        set("player", "speed", self.speed.to_string());
        set("player", "jump_velocity", self.jump_velocity.to_string());
        set("player", "gravity", self.gravity.to_string());
        set("player", "mouse_sensitivity", self.mouse_sensitivity.to_string());
        set("player", "eye_height", self.eye_height.to_string());
        set("player", "hold_distance", self.hold_distance.to_string());
        set("player", "reach", self.reach.to_string());
        set(
            "player",
            "look_pitch_limit_degrees",
            self.look_pitch_limit_degrees.to_string(),
        );

        set("hold", "pull_power", self.pull_power.to_string());
        set("hold", "max_pull_speed", self.max_pull_speed.to_string());
        set("hold", "rotation_speed", self.rotation_speed.to_string());
        set("hold", "spin_multiplier", self.spin_multiplier.to_string());
        set("hold", "tilt_degrees", self.tilt_degrees.to_string());
        set("hold", "ghost_material", self.ghost_material.clone());

        set("drop", "surface_offset", self.drop_surface_offset.to_string());
        set("drop", "pitch_min", self.drop_pitch_min.to_string());
        set("drop", "pitch_max", self.drop_pitch_max.to_string());
        set("drop", "sound", self.drop_sound.clone());
        set("drop", "probe_length", self.drop_probe_length.to_string());

        set("shadow", "falloff", self.shadow_falloff.to_string());
        set("shadow", "min_scale", self.shadow_min_scale.to_string());
        set("shadow", "lift", self.shadow_lift.to_string());

        set(
            "hud",
            "total_zones_required",
            self.total_zones_required.to_string(),
        );
        set(
            "hud",
            "info_display_seconds",
            self.info_display_seconds.to_string(),
        );
        set("hud", "fade_seconds", self.fade_seconds.to_string());
        set("hud", "pickup_tip", self.pickup_tip.clone());
        set("hud", "place_tip", self.place_tip.clone());
        set("hud", "rotate_tip", self.rotate_tip.clone());

        ini.write(&self.config_path)
            .map_err(|source| ConfigError::Save {
                path: self.config_path.clone(),
                source,
            })?;

        info!("Saved config to {:?}", self.config_path);
        Ok(())
    }

    /// Non-negative pitch limit, also for values set at runtime.
    pub fn pitch_limit_radians(&self) -> f32 {
        self.look_pitch_limit_degrees.abs().min(90.0).to_radians()
    }

    pub fn tilt_radians(&self) -> f32 {
        self.tilt_degrees.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_tuning() {
        let cfg = GameConfig::new();
        assert_eq!(cfg.pull_power, 20.0);
        assert_eq!(cfg.max_pull_speed, 25.0);
        assert_eq!(cfg.total_zones_required, 2);
        assert_eq!(cfg.drop_sound, "drop");
        assert!((cfg.pitch_limit_radians() - 80f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn partial_ini_overrides_only_present_keys() {
        let mut cfg = GameConfig::new();
        cfg.load_from_str("[hold]\npull_power = 12.5\n[hud]\ntotal_zones_required = 3\n")
            .expect("valid ini");
        assert_eq!(cfg.pull_power, 12.5);
        assert_eq!(cfg.total_zones_required, 3);
        assert_eq!(cfg.max_pull_speed, 25.0);
        assert_eq!(cfg.place_tip, DEFAULT_PLACE_TIP);
    }

    #[test]
    fn tip_text_keeps_placeholder() {
        let mut cfg = GameConfig::new();
        cfg.load_from_str("[hud]\npickup_tip = Grab the {item}!\n")
            .expect("valid ini");
        assert_eq!(cfg.pickup_tip, "Grab the {item}!");
    }

    #[test]
    fn inverted_pitch_range_is_normalized() {
        let mut cfg = GameConfig::new();
        cfg.load_from_str("[drop]\npitch_min = 1.2\npitch_max = 0.8\n")
            .expect("valid ini");
        assert_eq!(cfg.drop_pitch_min, 0.8);
        assert_eq!(cfg.drop_pitch_max, 1.2);
    }

    #[test]
    fn shadow_floor_is_kept_within_unit_range() {
        let mut cfg = GameConfig::new();
        cfg.load_from_str("[shadow]\nmin_scale = 1.5\n").expect("valid ini");
        assert_eq!(cfg.shadow_min_scale, 1.0);
        cfg.load_from_str("[shadow]\nmin_scale = -0.3\n").expect("valid ini");
        assert_eq!(cfg.shadow_min_scale, 0.0);
    }

    #[test]
    fn negative_pitch_limit_is_made_positive() {
        let mut cfg = GameConfig::new();
        cfg.load_from_str("[player]\nlook_pitch_limit_degrees = -10\n")
            .expect("valid ini");
        assert_eq!(cfg.look_pitch_limit_degrees, 10.0);
        assert!(cfg.pitch_limit_radians() > 0.0);

        cfg.look_pitch_limit_degrees = -30.0;
        assert!((cfg.pitch_limit_radians() - 30f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn negative_pull_speed_becomes_zero() {
        let mut cfg = GameConfig::new();
        cfg.load_from_str("[hold]\nmax_pull_speed = -4\n")
            .expect("valid ini");
        assert_eq!(cfg.max_pull_speed, 0.0);
    }

    #[test]
    fn saved_file_loads_back() {
        let path = std::env::temp_dir().join(format!(
            "tidykitchen-config-{}.ini",
            std::process::id()
        ));
        let mut cfg = GameConfig::with_path(&path);
        cfg.hold_distance = 2.25;
        cfg.pickup_tip = "Take {item}".to_string();
        cfg.save_to_file().expect("saved");

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().expect("loaded");
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.hold_distance, 2.25);
        assert_eq!(loaded.pickup_tip, "Take {item}");
        assert_eq!(loaded.rotate_tip, DEFAULT_ROTATE_TIP);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut cfg = GameConfig::with_path("/nonexistent/tidykitchen/config.ini");
        let err = cfg.load_from_file().unwrap_err();
        assert!(matches!(err, ConfigError::Load { .. }));
        assert_eq!(cfg.pull_power, 20.0);
    }
}
