use std::fs;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::geometry::HitTestConfig;
use crate::operation::DEFAULT_STROKE_WIDTH;
use crate::tools::MIN_SHAPE_EXTENT;
use crate::viewport::ViewportConfig;

/// Colors offered by the toolbar
pub const DEFAULT_PALETTE: [Color32; 9] = [
    Color32::WHITE,
    Color32::RED,
    Color32::from_rgb(0xFF, 0xA5, 0x00), // orange
    Color32::YELLOW,
    Color32::GREEN,
    Color32::from_rgb(0x00, 0xBF, 0xFF), // sky blue
    Color32::from_rgb(0x8A, 0x2B, 0xE2), // purple
    Color32::BLACK,
    Color32::from_rgb(0x80, 0x80, 0x80), // grey
];

/// Tunables for the editor. Every field has a default, so partial JSON files
/// are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub hit_test: HitTestConfig,
    /// Drafts smaller than this are discarded on commit; 0 keeps every shape
    pub min_shape_extent: f32,
    pub default_stroke_width: f32,
    pub min_stroke_width: f32,
    pub max_stroke_width: f32,
    pub default_color: Color32,
    pub palette: Vec<Color32>,
    pub viewport: ViewportConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_test: HitTestConfig::default(),
            min_shape_extent: MIN_SHAPE_EXTENT,
            default_stroke_width: DEFAULT_STROKE_WIDTH,
            min_stroke_width: 1.0,
            max_stroke_width: 40.0,
            default_color: Color32::RED,
            palette: DEFAULT_PALETTE.to_vec(),
            viewport: ViewportConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), text)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let hit = &self.hit_test;
        if hit.hit_tolerance < 0.0 || hit.handle_hit_radius <= 0.0 || hit.rotate_hit_radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "hit radii must be positive: {hit:?}"
            )));
        }
        if self.min_shape_extent < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_shape_extent must not be negative, got {}",
                self.min_shape_extent
            )));
        }
        if self.min_stroke_width <= 0.0 || self.min_stroke_width > self.max_stroke_width {
            return Err(ConfigError::Invalid(format!(
                "stroke width range {}..={} is empty",
                self.min_stroke_width, self.max_stroke_width
            )));
        }
        if !(self.min_stroke_width..=self.max_stroke_width).contains(&self.default_stroke_width) {
            return Err(ConfigError::Invalid(format!(
                "default stroke width {} is outside {}..={}",
                self.default_stroke_width, self.min_stroke_width, self.max_stroke_width
            )));
        }
        self.viewport.validate()
    }

    /// Clamp a requested stroke width into the configured range
    pub fn clamp_stroke_width(&self, width: f32) -> f32 {
        width.clamp(self.min_stroke_width, self.max_stroke_width)
    }
}
