//! Presentation-only zoom and pan of the canvas.
//!
//! Zoom and pan never touch the operations; they only change how canvas
//! coordinates map onto the screen.

use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Zoom a double tap jumps to
    pub double_tap_zoom: f32,
    /// Above this zoom a double tap resets the view instead
    pub double_tap_reset_above: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom: 1.0,
            max_zoom: 5.0,
            double_tap_zoom: 2.5,
            double_tap_reset_above: 1.1,
        }
    }
}

impl ViewportConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_zoom <= 0.0 || self.min_zoom > self.max_zoom {
            return Err(ConfigError::Invalid(format!(
                "zoom range {}..={} is empty",
                self.min_zoom, self.max_zoom
            )));
        }
        Ok(())
    }
}

/// Maps canvas coordinates to the screen rect the canvas occupies.
///
/// The canvas has the same size as `screen_rect`; zoom pivots about its center
/// and `offset` pans in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    screen_rect: Rect,
    zoom: f32,
    offset: Vec2,
    config: ViewportConfig,
}

impl Viewport {
    pub fn new(screen_rect: Rect, config: ViewportConfig) -> Self {
        Self {
            screen_rect,
            zoom: 1.0_f32.clamp(config.min_zoom, config.max_zoom),
            offset: Vec2::ZERO,
            config,
        }
    }

    pub fn screen_rect(&self) -> Rect {
        self.screen_rect
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Canvas-space rect covering the whole canvas
    pub fn canvas_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.screen_rect.size())
    }

    /// Follow a resized canvas area, keeping the pan within bounds
    pub fn set_screen_rect(&mut self, screen_rect: Rect) {
        self.screen_rect = screen_rect;
        self.offset = self.clamp_offset(self.offset, self.zoom);
    }

    fn half_size(&self) -> Vec2 {
        self.screen_rect.size() / 2.0
    }

    /// Keep the zoomed canvas covering its screen rect
    pub fn clamp_offset(&self, offset: Vec2, zoom: f32) -> Vec2 {
        if zoom <= 1.0 {
            return Vec2::ZERO;
        }
        let max = self.screen_rect.size() * (zoom - 1.0) / 2.0;
        Vec2::new(offset.x.clamp(-max.x, max.x), offset.y.clamp(-max.y, max.y))
    }

    pub fn screen_to_canvas(&self, screen: Pos2) -> Pos2 {
        let center = self.half_size();
        let local = screen - self.screen_rect.min;
        Pos2::ZERO + (local - center - self.offset) / self.zoom + center
    }

    pub fn canvas_to_screen(&self, canvas: Pos2) -> Pos2 {
        let center = self.half_size();
        self.screen_rect.min + (canvas.to_vec2() - center) * self.zoom + center + self.offset
    }

    /// Screen-space length of a canvas-space length
    pub fn scale_length(&self, length: f32) -> f32 {
        length * self.zoom
    }

    /// Apply one step of a two-finger gesture
    pub fn apply_pinch(&mut self, zoom_factor: f32, pan: Vec2) {
        let zoom = (self.zoom * zoom_factor).clamp(self.config.min_zoom, self.config.max_zoom);
        self.offset = if zoom > 1.0 {
            self.clamp_offset(self.offset + pan, zoom)
        } else {
            Vec2::ZERO
        };
        self.zoom = zoom;
    }

    /// Double tap: reset when zoomed in, otherwise zoom towards the tap
    pub fn toggle_zoom(&mut self, screen: Pos2) {
        if self.zoom > self.config.double_tap_reset_above {
            self.reset();
            return;
        }
        let target = self.config.double_tap_zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        let local = screen - self.screen_rect.min;
        let focus = (self.half_size() - local) * (target - 1.0);
        self.offset = self.clamp_offset(focus, target);
        self.zoom = target;
    }

    pub fn reset(&mut self) {
        self.zoom = 1.0_f32.clamp(self.config.min_zoom, self.config.max_zoom);
        self.offset = Vec2::ZERO;
    }
}
