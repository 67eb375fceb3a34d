use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{ScreenHueError, ScreenHueResult};
use crate::sampling::SamplingMode;

pub const CONFIG_FILE_NAME: &str = "screenhue.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub lights: Vec<LightEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    #[serde(default)]
    pub mode: SampleKind,
    /// Box size for `mode = "area"`, as a percentage of each image axis (1..=100).
    #[serde(default = "default_area_percent")]
    pub area_percent: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            mode: SampleKind::default(),
            area_percent: default_area_percent(),
        }
    }
}

impl SamplingConfig {
    pub fn mode(&self) -> SamplingMode {
        match self.mode {
            SampleKind::Exact => SamplingMode::Exact,
            SampleKind::Area => SamplingMode::Area {
                percent: self.area_percent,
            },
        }
    }
}

fn default_area_percent() -> u32 {
    2
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleKind {
    Exact,
    #[default]
    Area,
}

/// One `[[lights]]` table. Coordinates are normalized, `-1..=1` on both axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightEntry {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// Locate the config file: an explicit path wins, then `screenhue.toml` next to the
/// executable, then in the working directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> ScreenHueResult<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(ScreenHueError::Config(format!(
            "{} does not exist",
            path.display()
        )));
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            let candidate = parent.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "config found next to executable");
                return Ok(candidate);
            }
        }
    }

    let cwd = std::env::current_dir()?;
    let candidate = cwd.join(CONFIG_FILE_NAME);
    if candidate.exists() {
        tracing::debug!(path = %candidate.display(), "config found in working directory");
        return Ok(candidate);
    }

    Err(ScreenHueError::Config(format!(
        "{CONFIG_FILE_NAME} not found next to executable or in working directory"
    )))
}

pub fn parse_config(content: &str) -> ScreenHueResult<AppConfig> {
    let config: AppConfig = toml::from_str(content)?;
    let percent = config.sampling.area_percent;
    if config.sampling.mode == SampleKind::Area && !(1..=100).contains(&percent) {
        return Err(ScreenHueError::Config(format!(
            "sampling.area_percent must be within 1..=100, got {percent}"
        )));
    }
    Ok(config)
}

pub fn load_config(explicit: Option<&Path>) -> ScreenHueResult<AppConfig> {
    let path = resolve_config_path(explicit)?;
    let content = std::fs::read_to_string(&path)?;
    let config = parse_config(&content)?;
    tracing::info!(
        path = %path.display(),
        mode = ?config.sampling.mode,
        lights = config.lights.len(),
        "config loaded"
    );
    Ok(config)
}
