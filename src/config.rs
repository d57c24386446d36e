use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{
    DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_YAW, DEFAULT_ZOOM,
};

/// Construction-time camera configuration.
///
/// Separated from the live camera state: these are the "set once" values
/// a preset file or CLI override provides, while the camera itself owns
/// everything that changes per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial world-space position.
    pub position: Vec3,
    /// World up axis, fixed for the camera's lifetime.
    pub world_up: Vec3,
    /// Initial yaw in degrees.
    pub yaw: f32,
    /// Initial pitch in degrees.
    pub pitch: f32,
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Scale applied to raw pointer deltas.
    pub look_sensitivity: f32,
    /// Initial vertical field of view in degrees.
    pub zoom: f32,
    /// Whether look input is processed at all.
    pub look_enabled: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            world_up: Vec3::Y,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            movement_speed: DEFAULT_SPEED,
            look_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            look_enabled: true,
        }
    }
}

impl CameraConfig {
    /// Load a JSON preset from disk. Missing fields fall back to defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read camera preset {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse camera preset {}", path.display()))
    }

    /// Write this configuration to disk as a JSON preset.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents =
            serde_json::to_string_pretty(self).context("failed to serialize camera preset")?;
        fs::write(path, contents)
            .with_context(|| format!("failed to write camera preset {}", path.display()))
    }
}
