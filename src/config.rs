use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::{AppError, AudioFormat, ConversionSettings, Quality};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    #[serde(default = "default_progress_step")]
    pub progress_step: u8,

    #[serde(default = "default_toast_duration_secs")]
    pub toast_duration_secs: u64,

    #[serde(default)]
    pub default_format: AudioFormat,

    #[serde(default)]
    pub default_quality: Quality,

    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    #[serde(default)]
    pub dark_mode: bool,
}

fn default_tick_interval_ms() -> u64 {
    500
}

fn default_progress_step() -> u8 {
    10
}

fn default_toast_duration_secs() -> u64 {
    5
}

fn default_output_prefix() -> String {
    "converted-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            progress_step: default_progress_step(),
            toast_duration_secs: default_toast_duration_secs(),
            default_format: AudioFormat::default(),
            default_quality: Quality::default(),
            output_prefix: default_output_prefix(),
            dark_mode: false,
        }
    }
}

impl Config {
    /// Load configuration from `<config dir>/audio-converter/config.json`.
    /// A missing file means defaults; nothing is written.
    pub fn load() -> Result<Self, AppError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;
        config.validate()?;

        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    fn config_path() -> Result<PathBuf, AppError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AppError::Config("Could not find config directory".into()))?;

        Ok(config_dir.join("audio-converter").join("config.json"))
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.tick_interval_ms == 0 {
            return Err(AppError::Config("tick_interval_ms must be positive".into()));
        }

        if !(1..=100).contains(&self.progress_step) {
            return Err(AppError::Config(
                "progress_step must be between 1 and 100".into(),
            ));
        }

        if self.toast_duration_secs == 0 {
            return Err(AppError::Config(
                "toast_duration_secs must be positive".into(),
            ));
        }

        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs)
    }

    pub fn conversion_settings(&self) -> ConversionSettings {
        ConversionSettings {
            format: self.default_format,
            quality: self.default_quality,
        }
    }
}
