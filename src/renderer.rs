// src/renderer.rs
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, TextureId, Vec2};

use crate::geometry::{transform_point, transformed_corners};
use crate::operation::{Operation, ShapeTransform};
use crate::state::RenderSnapshot;
use crate::viewport::Viewport;

const HANDLE_RADIUS: f32 = 8.0;
const ROTATE_HANDLE_RADIUS: f32 = 12.0;
const HANDLE_COLOR: Color32 = Color32::from_rgb(30, 144, 255);
const HANDLE_BORDER: Stroke = Stroke {
    width: 1.5,
    color: Color32::WHITE,
};
const SELECTION_OUTLINE_WIDTH: f32 = 1.5;
const ELLIPSE_SEGMENTS: usize = 64;

const ARROW_HEAD_RATIO: f32 = 0.3;
const ARROW_HEAD_MAX: f32 = 40.0;
const ARROW_HEAD_ANGLE_DEG: f32 = 25.0;

/// The photo under the markup, placed in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseImage {
    pub texture: TextureId,
    pub canvas_rect: Rect,
}

/// Turns a render snapshot into egui shapes.
///
/// Output order is base image, committed operations in history order, the
/// draft, then selection handles, so later entries paint on top.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Paint a snapshot with the given painter
    pub fn paint(
        &self,
        painter: &Painter,
        snapshot: &RenderSnapshot<'_>,
        viewport: &Viewport,
        base_image: Option<&BaseImage>,
    ) {
        painter.extend(self.shapes(snapshot, viewport, base_image));
    }

    pub fn shapes(
        &self,
        snapshot: &RenderSnapshot<'_>,
        viewport: &Viewport,
        base_image: Option<&BaseImage>,
    ) -> Vec<Shape> {
        let mut shapes = Vec::new();

        if let Some(image) = base_image {
            let screen_rect = Rect::from_min_max(
                viewport.canvas_to_screen(image.canvas_rect.min),
                viewport.canvas_to_screen(image.canvas_rect.max),
            );
            shapes.push(Shape::image(
                image.texture,
                screen_rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            ));
        }

        for op in snapshot.history {
            operation_shapes(op, viewport, &mut shapes);
        }

        if let Some(draft) = snapshot.draft {
            operation_shapes(draft, viewport, &mut shapes);
        }

        if let Some(selected) = snapshot.selected_operation() {
            selection_shapes(selected, viewport, &mut shapes);
        }

        shapes
    }
}

/// Arrow head wing tips for a shaft from `start` to `end`, if it is long enough
pub fn arrow_head(start: Pos2, end: Pos2) -> Option<[Pos2; 2]> {
    let shaft = end - start;
    let length = shaft.length();
    if length < 1.0 {
        return None;
    }

    let head = (length * ARROW_HEAD_RATIO).min(ARROW_HEAD_MAX);
    let angle = shaft.y.atan2(shaft.x);
    let spread = ARROW_HEAD_ANGLE_DEG.to_radians();
    let wing = |a: f32| end - head * Vec2::angled(a);
    Some([wing(angle - spread), wing(angle + spread)])
}

/// Outline of a transformed ellipse in canvas coordinates
pub fn ellipse_outline(start: Pos2, end: Pos2, transform: &ShapeTransform) -> Vec<Pos2> {
    let pivot = start.lerp(end, 0.5);
    let radii = (end - start).abs() / 2.0;
    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let t = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
            let local = pivot + Vec2::new(radii.x * t.cos(), radii.y * t.sin());
            transform_point(local, pivot, transform)
        })
        .collect()
}

fn operation_shapes(op: &Operation, viewport: &Viewport, out: &mut Vec<Shape>) {
    let stroke = Stroke::new(viewport.scale_length(op.stroke_width()), op.color());
    let to_screen = |p: Pos2| viewport.canvas_to_screen(p);

    match op {
        Operation::PenStroke { points, .. } => {
            if points.len() >= 2 {
                out.push(Shape::line(points.iter().copied().map(to_screen).collect(), stroke));
            }
        }
        Operation::RectStroke {
            start,
            end,
            transform,
            ..
        } => {
            let corners = transformed_corners(*start, *end, transform).map(to_screen);
            out.push(Shape::closed_line(corners.to_vec(), stroke));
        }
        Operation::CircleStroke {
            start,
            end,
            transform,
            ..
        } => {
            let outline = ellipse_outline(*start, *end, transform)
                .into_iter()
                .map(to_screen)
                .collect();
            out.push(Shape::closed_line(outline, stroke));
        }
        Operation::ArrowStroke {
            start,
            end,
            translate,
            ..
        } => {
            let start = *start + *translate;
            let end = *end + *translate;
            out.push(Shape::line_segment([to_screen(start), to_screen(end)], stroke));
            if let Some([left, right]) = arrow_head(start, end) {
                let tip = to_screen(end);
                out.push(Shape::line(vec![to_screen(left), tip, to_screen(right)], stroke));
            }
        }
    }
}

fn handle_dot(center: Pos2, radius: f32, out: &mut Vec<Shape>) {
    out.push(Shape::circle_filled(center, radius, HANDLE_COLOR));
    out.push(Shape::circle_stroke(center, radius, HANDLE_BORDER));
}

fn selection_shapes(op: &Operation, viewport: &Viewport, out: &mut Vec<Shape>) {
    let outline = Stroke::new(SELECTION_OUTLINE_WIDTH, HANDLE_COLOR);

    match op {
        Operation::RectStroke {
            start,
            end,
            transform,
            ..
        }
        | Operation::CircleStroke {
            start,
            end,
            transform,
            ..
        } => {
            let corners = transformed_corners(*start, *end, transform).map(|p| viewport.canvas_to_screen(p));
            out.push(Shape::closed_line(corners.to_vec(), outline));
            for corner in corners {
                handle_dot(corner, HANDLE_RADIUS, out);
            }
            // Rotate handle: a ring around the top-left corner
            out.push(Shape::circle_stroke(
                corners[0],
                ROTATE_HANDLE_RADIUS,
                Stroke::new(2.0, HANDLE_COLOR),
            ));
        }
        Operation::ArrowStroke {
            start,
            end,
            translate,
            ..
        } => {
            let start = viewport.canvas_to_screen(*start + *translate);
            let end = viewport.canvas_to_screen(*end + *translate);
            out.push(Shape::line_segment([start, end], outline));
            handle_dot(start, HANDLE_RADIUS, out);
            handle_dot(end, HANDLE_RADIUS, out);
        }
        Operation::PenStroke { .. } => {}
    }
}
