//! Pure geometry used by hit testing, drag application and rendering.
//!
//! Angles are degrees at the API boundary and radians internally. Rotation is
//! the standard rotation matrix applied in canvas coordinates (y grows down).

use egui::{Pos2, Vec2};

use crate::operation::ShapeTransform;
use crate::operation::common::MIN_ELLIPSE_RADIUS;

pub mod hit_testing;

pub use hit_testing::{HitTestConfig, hit_test_handle, hit_test_operation};

/// Calculate distance from a point to a line segment (used for arrow hit testing)
pub fn point_to_segment_distance(point: Pos2, seg_start: Pos2, seg_end: Pos2) -> f32 {
    let seg = seg_end - seg_start;
    let len_sq = seg.length_sq();
    if len_sq <= f32::EPSILON {
        return point.distance(seg_start);
    }

    let t = ((point - seg_start).dot(seg) / len_sq).clamp(0.0, 1.0);
    let projection = seg_start + seg * t;
    point.distance(projection)
}

/// Midpoint of the untransformed box plus the accumulated translation.
///
/// Scale and rotation both pivot about this point.
pub fn shape_center(start: Pos2, end: Pos2, translate: Vec2) -> Pos2 {
    start.lerp(end, 0.5) + translate
}

fn rotate_vec(v: Vec2, angle_rad: f32) -> Vec2 {
    let (sin, cos) = angle_rad.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Map a point of a shape's local geometry through its transform.
///
/// `pivot` is the untransformed box center. Rendering and hit testing both go
/// through here, so the two can never disagree.
pub fn transform_point(local: Pos2, pivot: Pos2, transform: &ShapeTransform) -> Pos2 {
    let scaled = (local - pivot) * transform.scale;
    let rotated = rotate_vec(scaled, transform.rotation_rad());
    pivot + rotated + transform.translate
}

/// Corners of the transformed box: top-left, top-right, bottom-right, bottom-left
pub fn transformed_corners(start: Pos2, end: Pos2, transform: &ShapeTransform) -> [Pos2; 4] {
    let min = start.min(end);
    let max = start.max(end);
    let pivot = start.lerp(end, 0.5);

    [
        Pos2::new(min.x, min.y),
        Pos2::new(max.x, min.y),
        Pos2::new(max.x, max.y),
        Pos2::new(min.x, max.y),
    ]
    .map(|corner| transform_point(corner, pivot, transform))
}

fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Sign-of-cross-product test around the quad's edges.
///
/// A zero cross product is inclusive. When every cross product is zero the quad
/// has collapsed; only points on its diagonal count as inside.
pub fn is_point_in_convex_quad(point: Pos2, corners: &[Pos2; 4]) -> bool {
    let mut sign = 0.0_f32;
    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        let c = cross(b - a, point - a);
        if c == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = c.signum();
        } else if c.signum() != sign {
            return false;
        }
    }

    if sign == 0.0 {
        return point_to_segment_distance(point, corners[0], corners[2]) <= 1e-3;
    }
    true
}

/// Whether `point` lies within the transformed ellipse grown by `tolerance`
pub fn is_point_near_ellipse(
    point: Pos2,
    start: Pos2,
    end: Pos2,
    transform: &ShapeTransform,
    tolerance: f32,
) -> bool {
    let center = shape_center(start, end, transform.translate);
    let local = rotate_vec(point - center, -transform.rotation_rad());

    let rx = (end.x - start.x).abs() / 2.0 * transform.scale + tolerance;
    let ry = (end.y - start.y).abs() / 2.0 * transform.scale + tolerance;
    if rx < MIN_ELLIPSE_RADIUS || ry < MIN_ELLIPSE_RADIUS {
        return false;
    }

    let nx = local.x / rx;
    let ny = local.y / ry;
    nx * nx + ny * ny <= 1.0
}

/// Angle of `point` around `center`, in degrees
pub fn angle_deg(center: Pos2, point: Pos2) -> f32 {
    let v = point - center;
    v.y.atan2(v.x).to_degrees()
}
