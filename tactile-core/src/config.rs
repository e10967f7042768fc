//! Runtime configuration.
//!
//! Loaded from JSON; every field is optional and falls back to its default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::anim::Easing;
use crate::error::{Result, UiError};
use crate::style::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Default duration of animated value changes.
    pub anim_time_ms: u64,
    /// Pointer travel (px) after which a press becomes a drag.
    pub drag_threshold: f32,
    pub easing: Easing,
    pub theme: Theme,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            anim_time_ms: 200,
            drag_threshold: 4.0,
            easing: Easing::Linear,
            theme: Theme::default(),
        }
    }
}

impl UiConfig {
    pub fn anim_time(&self) -> Duration {
        Duration::from_millis(self.anim_time_ms)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a config file. A missing file is not an error, it yields defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let config = Self::from_json_str(&text)?;
                tracing::debug!(path = %path.display(), "config loaded");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(UiError::ConfigIo {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
