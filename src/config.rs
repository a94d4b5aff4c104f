use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use cubic_physics::PhysicsConfig;
use cubic_world::DEFAULT_CELL_SIZE;
use serde::Deserialize;

/// Top-level `cubic.toml`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Block catalog file; the built-in catalog is used when absent.
    #[serde(default)]
    pub blocks: Option<PathBuf>,
    #[serde(default)]
    pub world: WorldSection,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub demo: DemoSection,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WorldSection {
    #[serde(default = "default_cell_size")]
    pub cell_size: usize,
}
fn default_cell_size() -> usize {
    DEFAULT_CELL_SIZE
}
impl Default for WorldSection {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct DemoSection {
    #[serde(default = "default_ticks")]
    pub ticks: u32,
    #[serde(default = "default_drop_height")]
    pub drop_height: f32,
    /// Reach of the selection ray.
    #[serde(default = "default_reach")]
    pub reach: f32,
}
fn default_ticks() -> u32 {
    240
}
fn default_drop_height() -> f32 {
    24.0
}
fn default_reach() -> f32 {
    8.0
}
impl Default for DemoSection {
    fn default() -> Self {
        Self {
            ticks: default_ticks(),
            drop_height: default_drop_height(),
            reach: default_reach(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    /// Loads `path`; a relative `blocks` entry is resolved against the config's directory.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)
            .map_err(|e| format!("reading config {}: {e}", path.display()))?;
        let mut cfg = Self::from_toml_str(&s)?;
        if let (Some(blocks), Some(dir)) = (cfg.blocks.as_mut(), path.parent()) {
            if blocks.is_relative() {
                *blocks = dir.join(&*blocks);
            }
        }
        Ok(cfg)
    }
}
