//! Editor configuration, stored as JSON.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sketchboard_core::{
    Color, LineCap, StrokeStyle, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH,
};
use sketchboard_history::{HistoryConfig, HistoryError};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

/// Freehand brush used while drawing mode is on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub width: f64,
    pub color: Color,
    pub line_cap: LineCap,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            width: 3.0,
            color: Color::BLACK,
            line_cap: LineCap::Round,
        }
    }
}

impl BrushConfig {
    pub fn to_style(&self) -> StrokeStyle {
        StrokeStyle {
            width: self.width,
            color: self.color,
            line_cap: self.line_cap,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub canvas: CanvasConfig,
    pub brush: BrushConfig,
    pub history: HistoryConfig,
    /// Start with the "Hello World" textbox and red line on the canvas.
    pub seed_demo_scene: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            brush: BrushConfig::default(),
            history: HistoryConfig::unbounded(),
            seed_demo_scene: true,
        }
    }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            tracing::error!(
                width = self.canvas.width,
                height = self.canvas.height,
                "canvas size must be positive"
            );
            return Err(ConfigError::InvalidCanvasSize {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }

        if !self.brush.width.is_finite() || self.brush.width <= 0.0 {
            tracing::error!(width = self.brush.width, "brush width must be positive");
            return Err(ConfigError::InvalidBrushWidth(self.brush.width));
        }

        self.history.validate()?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("canvas size must be positive, got {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("brush width must be a positive number, got {0}")]
    InvalidBrushWidth(f64),

    #[error("history: {0}")]
    History(#[from] HistoryError),
}

/// Save a config to disk as pretty JSON.
pub fn save_config(path: impl AsRef<Path>, config: &EditorConfig) -> anyhow::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create parent dir: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(config).context("serialize config to json")?;
    fs::write(path, json).with_context(|| format!("write config file: {}", path.display()))?;
    Ok(())
}

/// Load and validate a config from disk. Missing fields take their defaults.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<EditorConfig> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let config: EditorConfig = serde_json::from_str(&data).context("parse config json")?;
    config
        .validate()
        .with_context(|| format!("validate config file: {}", path.display()))?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}
