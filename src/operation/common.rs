// Common constants for all operation types
pub const MIN_SCALE: f32 = 0.3;
pub const MAX_SCALE: f32 = 5.0;

/// Default stroke width for new drafts, in canvas pixels
pub const DEFAULT_STROKE_WIDTH: f32 = 6.0;

/// Below this pointer-to-center distance a scale drag is ignored
pub const MIN_SCALE_PIVOT_DISTANCE: f32 = 1.0;

/// Ellipses whose (tolerance-expanded) radius drops below this never hit
pub const MIN_ELLIPSE_RADIUS: f32 = 1.0;

/// Clamp a scale factor into the supported range
pub fn clamp_scale(scale: f32) -> f32 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}
