use std::f32::consts::PI;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Per-session feature toggles. Owned by the host, read by the engine on
/// every event; the host must only flip them between events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case", default)]
pub struct EngineConfig {
    /// Consume the platform's coalesced sub-samples instead of only the
    /// primary sample of each move event.
    pub coalescing_enabled: bool,
    /// Consume the platform's forward-predicted samples.
    pub prediction_enabled: bool,
    /// Overlay predicted segments on the published frame.
    pub preview_predicted_enabled: bool,
}

/// Immutable stroke-shape parameters, fixed for the life of an engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", default)]
pub struct StrokeTuning {
    /// Drawing-mode width when the contact reports no force.
    pub default_line_width: f32,
    /// Drawing-mode width per unit of reported force.
    pub force_sensitivity: f32,
    /// Altitude below this switches the stylus into shading mode.
    pub tilt_threshold: f32,
    /// Floor for every evaluated width.
    pub min_line_width: f32,
    /// Widest shading mark, reached when the stroke runs perpendicular to
    /// the pencil azimuth at the flattest tilt.
    pub max_shading_width: f32,
    /// Altitude readings below this are clamped up to it.
    pub min_altitude_angle: f32,
    /// Force normalization range for shading opacity.
    pub min_force: f32,
    pub max_force: f32,
    /// Samples averaged for width smoothing; 0 disables smoothing.
    pub smoothing_window: usize,
}

impl Default for StrokeTuning {
    fn default() -> Self {
        Self {
            default_line_width: 6.0,
            force_sensitivity: 4.0,
            tilt_threshold: PI / 6.0,
            min_line_width: 5.0,
            max_shading_width: 60.0,
            min_altitude_angle: 0.25,
            min_force: 0.0,
            max_force: 5.0,
            smoothing_window: 0,
        }
    }
}

impl StrokeTuning {
    /// Rejects tuning the geometry evaluator would divide by zero on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tilt_threshold <= self.min_altitude_angle {
            return Err(ConfigError::EmptyAltitudeRange {
                threshold: self.tilt_threshold,
                min_altitude: self.min_altitude_angle,
            });
        }
        if self.max_force <= self.min_force {
            return Err(ConfigError::EmptyForceRange {
                min: self.min_force,
                max: self.max_force,
            });
        }
        for (name, value) in [
            ("default_line_width", self.default_line_width),
            ("force_sensitivity", self.force_sensitivity),
            ("min_line_width", self.min_line_width),
            ("max_shading_width", self.max_shading_width),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Everything a host persists between sessions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "snake_case", default)]
pub struct EngineSettings {
    pub config: EngineConfig,
    pub tuning: StrokeTuning,
}

pub fn load_settings(path: &Path) -> Result<EngineSettings> {
    if !path.exists() {
        return Ok(EngineSettings::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read engine settings file {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(EngineSettings::default());
    }

    serde_json::from_str(&content)
        .with_context(|| format!("deserialize engine settings file {}", path.display()))
}

pub fn save_settings(path: &Path, settings: &EngineSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create settings parent folder {}", parent.display()))?;
    }

    let json =
        serde_json::to_string_pretty(settings).context("serialize engine settings")?;
    std::fs::write(path, json)
        .with_context(|| format!("write engine settings file {}", path.display()))
}
