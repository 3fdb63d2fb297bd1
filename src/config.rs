//! Game configuration
//!
//! Compiled defaults, optionally overridden by a RON file passed on the
//! command line. Every section falls back to its default when omitted.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main game configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub world: WorldConfig,

    #[serde(default)]
    pub camera: CameraConfig,

    #[serde(default)]
    pub cycle: CycleConfig,

    /// Path to a horizontally-tiled 32px sprite sheet. When absent, a
    /// flat-color atlas is synthesized from the biome palette.
    #[serde(default)]
    pub tileset: Option<PathBuf>,
}

/// Window settings. The frame buffer is sized from these once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// World grid dimensions, in tiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
        }
    }
}

/// Camera/zoom settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Multiplicative zoom factor per wheel notch towards the world
    pub zoom_in_step: f32,
    /// Multiplicative zoom factor per wheel notch away from the world
    pub zoom_out_step: f32,
    /// Minimum zoom level (max zoom out)
    pub min_zoom: f32,
    /// Maximum zoom level (max zoom in)
    pub max_zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom_in_step: 1.1,
            zoom_out_step: 0.9,
            min_zoom: 0.5,
            max_zoom: 5.0,
        }
    }
}

/// Day/night cycle settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleConfig {
    /// Milliseconds between day/night transitions
    pub interval_ms: u64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self { interval_ms: 10_000 }
    }
}

impl GameConfig {
    /// Load from a RON file, or fall back to compiled defaults when no
    /// path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = ron::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
