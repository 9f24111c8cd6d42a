use egui::{Color32, Pos2, Vec2};
use photo_markup::geometry::{HitTestConfig, hit_test_operation};
use photo_markup::operation::{MAX_SCALE, MIN_SCALE};
use photo_markup::tools::apply_drag_action;
use photo_markup::{
    BrushShape, Command, DragAction, EditorConfig, EditorSession, EditorState, InputEvent,
    Operation, ShapeTransform, route_event,
};

fn drag(session: &mut EditorSession, points: &[(f32, f32)]) {
    let (first, rest) = points.split_first().expect("at least one point");
    route_event(
        &InputEvent::PointerDown {
            pos: Pos2::new(first.0, first.1),
        },
        session,
    );
    for p in rest {
        route_event(
            &InputEvent::PointerMove {
                pos: Pos2::new(p.0, p.1),
            },
            session,
        );
    }
    let last = points.last().expect("at least one point");
    route_event(
        &InputEvent::PointerUp {
            pos: Pos2::new(last.0, last.1),
        },
        session,
    );
}

fn session_with(tool: BrushShape) -> EditorSession {
    let mut session = EditorSession::default();
    Command::SetShapeTool(tool).execute(&mut session);
    session
}

#[test]
fn test_pen_stroke_commits_and_is_never_selectable() {
    let mut session = session_with(BrushShape::Pen);
    drag(&mut session, &[(10.0, 10.0), (30.0, 30.0), (50.0, 50.0)]);

    assert_eq!(session.history().len(), 1);
    assert!(matches!(
        session.history().get(0),
        Some(Operation::PenStroke { points, .. }) if points.len() == 3
    ));

    for tool in [BrushShape::Rect, BrushShape::Circle, BrushShape::Arrow] {
        let hit = hit_test_operation(
            Pos2::new(30.0, 30.0),
            session.history().as_slice(),
            tool,
            &HitTestConfig::default(),
        );
        assert_eq!(hit, None);
    }

    // Pressing on the stroke with a shape tool starts a new draft instead.
    Command::SetShapeTool(BrushShape::Rect).execute(&mut session);
    route_event(&InputEvent::PointerDown { pos: Pos2::new(30.0, 30.0) }, &mut session);
    assert_eq!(session.state(), EditorState::Drafting(BrushShape::Rect));
    assert_eq!(session.selected_index(), None);
}

#[test]
fn test_scale_drag_follows_pointer_distance_ratio() {
    let mut session = session_with(BrushShape::Rect);
    drag(&mut session, &[(0.0, 0.0), (100.0, 100.0)]);

    let rect = session.history().get(0).expect("committed rect").clone();
    match &rect {
        Operation::RectStroke {
            start,
            end,
            transform,
            ..
        } => {
            assert_eq!(*start, Pos2::new(0.0, 0.0));
            assert_eq!(*end, Pos2::new(100.0, 100.0));
            assert_eq!(*transform, ShapeTransform::identity());
        }
        other => panic!("expected a rect, got {other:?}"),
    }

    // (100, 100) -> (150, 150) about center (50, 50): distance 70.7 -> 141.4.
    let scaled = apply_drag_action(
        &rect,
        DragAction::Scale,
        Vec2::new(50.0, 50.0),
        Pos2::new(150.0, 150.0),
    );
    let scale = scaled.shape_transform().expect("rect has a transform").scale;
    assert!((scale - 2.0).abs() < 1e-4, "expected 2.0, got {scale}");

    // (50, 150) -> (150, 50): both 100 from the center.
    let same = apply_drag_action(
        &rect,
        DragAction::Scale,
        Vec2::new(100.0, -100.0),
        Pos2::new(150.0, 50.0),
    );
    let scale = same.shape_transform().expect("rect has a transform").scale;
    assert!((scale - 1.0).abs() < 1e-4, "scale drifted to {scale}");
}

fn transform_at(session: &EditorSession, index: usize) -> ShapeTransform {
    session
        .history()
        .get(index)
        .and_then(Operation::shape_transform)
        .copied()
        .expect("box shape")
}

fn select_rect_200(session: &mut EditorSession) {
    drag(session, &[(0.0, 0.0), (200.0, 200.0)]);
    drag(session, &[(100.0, 100.0)]);
    assert_eq!(session.selected_index(), Some(0));
}

#[test]
fn test_press_near_corner_of_unselected_shape_moves_it() {
    let mut session = session_with(BrushShape::Rect);
    drag(&mut session, &[(0.0, 0.0), (300.0, 300.0)]);
    assert_eq!(session.selected_index(), None);

    route_event(&InputEvent::PointerDown { pos: Pos2::new(280.0, 280.0) }, &mut session);
    assert_eq!(session.selected_index(), Some(0));
    assert_eq!(session.drag_action(), DragAction::Move);
    route_event(&InputEvent::PointerUp { pos: Pos2::new(280.0, 280.0) }, &mut session);

    route_event(&InputEvent::PointerDown { pos: Pos2::new(20.0, 20.0) }, &mut session);
    assert_eq!(session.drag_action(), DragAction::Rotate);
}

#[test]
fn test_scale_handle_drag_grows_and_clamps() {
    let mut session = session_with(BrushShape::Rect);
    select_rect_200(&mut session);

    route_event(&InputEvent::PointerDown { pos: Pos2::new(195.0, 195.0) }, &mut session);
    assert_eq!(session.state(), EditorState::Dragging(DragAction::Scale));
    route_event(&InputEvent::PointerMove { pos: Pos2::new(295.0, 295.0) }, &mut session);
    let grown = transform_at(&session, 0).scale;
    assert!(grown > 1.5 && grown < MAX_SCALE, "unexpected scale {grown}");

    route_event(&InputEvent::PointerMove { pos: Pos2::new(3000.0, 3000.0) }, &mut session);
    route_event(&InputEvent::PointerUp { pos: Pos2::new(3000.0, 3000.0) }, &mut session);
    assert_eq!(transform_at(&session, 0).scale, MAX_SCALE);
    assert_eq!(session.state(), EditorState::Idle);

    // The bottom-right corner now sits at center + 100 * 5.
    route_event(&InputEvent::PointerDown { pos: Pos2::new(600.0, 600.0) }, &mut session);
    assert_eq!(session.drag_action(), DragAction::Scale);
    route_event(&InputEvent::PointerMove { pos: Pos2::new(101.0, 101.0) }, &mut session);
    route_event(&InputEvent::PointerUp { pos: Pos2::new(101.0, 101.0) }, &mut session);
    assert_eq!(transform_at(&session, 0).scale, MIN_SCALE);
    assert_eq!(session.selected_index(), Some(0));
}

#[test]
fn test_rotate_handle_accumulates_past_full_turns() {
    let mut session = session_with(BrushShape::Rect);
    select_rect_200(&mut session);

    let center = Pos2::new(100.0, 100.0);
    let radius = 100.0 * std::f32::consts::SQRT_2;
    let on_circle = |deg: f32| center + Vec2::angled(deg.to_radians()) * radius;

    for turn in 1..=2 {
        // The top-left corner returns to (0, 0) after every full turn.
        let grab = on_circle(-135.0);
        route_event(&InputEvent::PointerDown { pos: grab }, &mut session);
        assert_eq!(session.drag_action(), DragAction::Rotate);
        for step in 1..=8 {
            let pos = on_circle(-135.0 + 45.0 * step as f32);
            route_event(&InputEvent::PointerMove { pos }, &mut session);
        }
        route_event(&InputEvent::PointerUp { pos: grab }, &mut session);

        let rotation = transform_at(&session, 0).rotation_deg;
        let expected = 360.0 * turn as f32;
        assert!((rotation - expected).abs() < 1e-2, "turn {turn}: rotation {rotation}");
    }
}

#[test]
fn test_cancel_mid_drag_keeps_edits_and_selection() {
    let mut session = session_with(BrushShape::Rect);
    select_rect_200(&mut session);

    route_event(&InputEvent::PointerDown { pos: Pos2::new(100.0, 100.0) }, &mut session);
    route_event(&InputEvent::PointerMove { pos: Pos2::new(130.0, 100.0) }, &mut session);
    assert!(route_event(&InputEvent::Cancel, &mut session));

    assert_eq!(transform_at(&session, 0).translate, Vec2::new(30.0, 0.0));
    assert_eq!(session.selected_index(), Some(0));
    assert_eq!(session.state(), EditorState::Idle);
    assert!(!route_event(&InputEvent::PointerMove { pos: Pos2::new(160.0, 100.0) }, &mut session));
    assert_eq!(transform_at(&session, 0).translate, Vec2::new(30.0, 0.0));
}

#[test]
fn test_arrow_start_handle_drag() {
    let mut session = session_with(BrushShape::Arrow);
    drag(&mut session, &[(0.0, 0.0), (200.0, 0.0)]);
    assert_eq!(session.history().len(), 1);

    // Select by tapping the shaft, then drag the start handle.
    drag(&mut session, &[(100.0, 0.0)]);
    assert_eq!(session.selected_index(), Some(0));

    route_event(&InputEvent::PointerDown { pos: Pos2::new(0.0, 0.0) }, &mut session);
    assert_eq!(session.drag_action(), DragAction::ArrowStart);
    route_event(&InputEvent::PointerMove { pos: Pos2::new(20.0, 0.0) }, &mut session);
    route_event(&InputEvent::PointerUp { pos: Pos2::new(20.0, 0.0) }, &mut session);

    match session.history().get(0) {
        Some(Operation::ArrowStroke {
            start,
            end,
            translate,
            ..
        }) => {
            assert_eq!(*start, Pos2::new(20.0, 0.0));
            assert_eq!(*end, Pos2::new(200.0, 0.0));
            assert_eq!(*translate, Vec2::ZERO);
        }
        other => panic!("expected an arrow, got {other:?}"),
    }
    assert_eq!(session.state(), EditorState::Idle);
}

#[test]
fn test_undo_on_empty_history_twice() {
    let mut session = EditorSession::default();
    assert!(!Command::Undo.execute(&mut session));
    assert!(session.history().is_empty());
    assert!(!Command::Undo.execute(&mut session));
    assert!(session.history().is_empty());
}

#[test]
fn test_undo_clears_selection_of_removed_operation() {
    let mut session = session_with(BrushShape::Rect);
    drag(&mut session, &[(0.0, 0.0), (100.0, 100.0)]);
    drag(&mut session, &[(50.0, 50.0)]);
    assert_eq!(session.selected_index(), Some(0));

    assert!(Command::Undo.execute(&mut session));
    assert_eq!(session.selected_index(), None);
    assert!(session.history().is_empty());
}

#[test]
fn test_move_drag_translates_selected_shape() {
    let mut session = session_with(BrushShape::Circle);
    drag(&mut session, &[(0.0, 0.0), (100.0, 60.0)]);
    drag(&mut session, &[(50.0, 30.0), (60.0, 35.0), (70.0, 40.0)]);

    let transform = session
        .history()
        .get(0)
        .and_then(Operation::shape_transform)
        .copied()
        .expect("circle has a transform");
    assert_eq!(transform.translate, Vec2::new(20.0, 10.0));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_tap_on_empty_canvas_only_clears_selection() {
    let mut session = session_with(BrushShape::Rect);
    drag(&mut session, &[(0.0, 0.0), (100.0, 100.0)]);
    drag(&mut session, &[(50.0, 50.0)]);
    assert_eq!(session.selected_index(), Some(0));

    drag(&mut session, &[(400.0, 400.0), (480.0, 480.0)]);
    assert_eq!(session.selected_index(), None);
    assert_eq!(session.history().len(), 1);

    // With nothing selected, the same gesture draws.
    drag(&mut session, &[(400.0, 400.0), (480.0, 480.0)]);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_tiny_shapes_are_discarded() {
    let mut session = session_with(BrushShape::Rect);
    drag(&mut session, &[(10.0, 10.0), (11.0, 12.0)]);
    assert!(session.history().is_empty());

    let mut permissive = EditorSession::new(EditorConfig {
        min_shape_extent: 0.0,
        ..EditorConfig::default()
    });
    Command::SetShapeTool(BrushShape::Rect).execute(&mut permissive);
    drag(&mut permissive, &[(10.0, 10.0)]);
    assert_eq!(permissive.history().len(), 1);
}

#[test]
fn test_cancel_discards_draft() {
    let mut session = session_with(BrushShape::Pen);
    route_event(&InputEvent::PointerDown { pos: Pos2::new(0.0, 0.0) }, &mut session);
    route_event(&InputEvent::PointerMove { pos: Pos2::new(40.0, 40.0) }, &mut session);
    assert!(session.draft().is_some());

    assert!(route_event(&InputEvent::Cancel, &mut session));
    assert!(session.draft().is_none());
    route_event(&InputEvent::PointerUp { pos: Pos2::new(40.0, 40.0) }, &mut session);
    assert!(session.history().is_empty());
}

#[test]
fn test_brush_settings_apply_to_new_drafts() {
    let mut session = session_with(BrushShape::Arrow);
    Command::SetColor(Color32::YELLOW).execute(&mut session);
    Command::SetStrokeWidth(10.0).execute(&mut session);
    drag(&mut session, &[(0.0, 0.0), (80.0, 0.0)]);

    let op = session.history().get(0).expect("committed arrow");
    assert_eq!(op.color(), Color32::YELLOW);
    assert_eq!(op.stroke_width(), 10.0);
}
