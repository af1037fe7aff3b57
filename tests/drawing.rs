use eframe_sketch::{Canvas, HexColor, InputEvent, Tool, ToolState};
use egui::pos2;

const RED: HexColor = HexColor::rgb(0xFF, 0x00, 0x00);

// Helper to create a white canvas with the default pen (black, 5px)
fn create_test_canvas() -> Canvas {
    Canvas::new(100, 60, HexColor::WHITE, ToolState::default())
}

fn draw(canvas: &mut Canvas, points: &[(f32, f32)]) {
    let (first, rest) = points.split_first().expect("at least one point");
    canvas.handle(InputEvent::PointerDown { pos: pos2(first.0, first.1) });
    for &(x, y) in rest {
        canvas.handle(InputEvent::PointerMove { pos: pos2(x, y) });
    }
    canvas.handle(InputEvent::PointerUp);
}

fn painted_pixels(canvas: &Canvas) -> Vec<(u32, u32)> {
    let surface = canvas.surface();
    let mut painted = Vec::new();
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            if surface.pixel(x, y) != Some(HexColor::WHITE) {
                painted.push((x, y));
            }
        }
    }
    painted
}

#[test]
fn test_horizontal_pen_line() {
    let mut canvas = create_test_canvas();
    draw(&mut canvas, &[(10.0, 10.0), (50.0, 10.0)]);

    let surface = canvas.surface();
    for x in [10, 20, 30, 40, 49] {
        assert_eq!(surface.pixel(x, 10), Some(HexColor::BLACK), "x = {x}");
    }

    // Roughly 5px tall: 4 solid rows plus anti-aliased edges
    let column: Vec<u32> = (0..surface.height())
        .filter(|&y| surface.pixel(30, y) != Some(HexColor::WHITE))
        .collect();
    assert!((4..=6).contains(&column.len()), "column = {column:?}");

    // Everything painted hugs the segment from (10,10) to (50,10)
    for (x, y) in painted_pixels(&canvas) {
        assert!((6..=54).contains(&x), "stray pixel at ({x}, {y})");
        assert!((6..=13).contains(&y), "stray pixel at ({x}, {y})");
    }
    assert_eq!(surface.pixel(30, 30), Some(HexColor::WHITE));
    assert_eq!(surface.pixel(70, 10), Some(HexColor::WHITE));
}

#[test]
fn test_clear_restores_initial_state() {
    let mut canvas = create_test_canvas();
    draw(&mut canvas, &[(5.0, 5.0), (90.0, 50.0), (20.0, 40.0)]);
    canvas.select_color(RED);
    canvas.select_brush_size(20);
    draw(&mut canvas, &[(50.0, 0.0), (50.0, 60.0)]);
    assert!(!canvas.surface().is_blank());

    canvas.clear();

    let fresh = create_test_canvas();
    assert!(canvas.surface().is_blank());
    assert_eq!(canvas.surface().size(), fresh.surface().size());
    assert_eq!(canvas.surface().image().as_raw(), fresh.surface().image().as_raw());
}

#[test]
fn test_eraser_paints_background_exactly() {
    let mut canvas = create_test_canvas();
    draw(&mut canvas, &[(10.0, 10.0), (50.0, 10.0)]);
    assert!(!canvas.surface().is_blank());

    // Same path, same size: the anti-aliased fringe must go too
    canvas.select_tool(Tool::Eraser);
    draw(&mut canvas, &[(10.0, 10.0), (50.0, 10.0)]);

    assert!(canvas.surface().is_blank(), "left behind: {:?}", painted_pixels(&canvas));
}

#[test]
fn test_wider_eraser_over_polyline() {
    let mut canvas = create_test_canvas();
    draw(&mut canvas, &[(10.0, 10.0), (50.0, 30.0), (80.0, 15.0)]);

    canvas.select_tool(Tool::Eraser);
    canvas.select_brush_size(20);
    draw(&mut canvas, &[(10.0, 10.0), (50.0, 30.0), (80.0, 15.0)]);

    assert!(canvas.surface().is_blank());
}

#[test]
fn test_eraser_ignores_active_color() {
    let mut canvas = create_test_canvas();
    canvas.select_color(RED);
    canvas.select_tool(Tool::Eraser);
    draw(&mut canvas, &[(10.0, 30.0), (90.0, 30.0)]);

    assert!(canvas.surface().is_blank());
}

#[test]
fn test_resize_discards_strokes() {
    let mut canvas = create_test_canvas();
    draw(&mut canvas, &[(10.0, 10.0), (50.0, 10.0)]);

    assert!(canvas.fit_to(200, 120));
    assert_eq!(canvas.surface().size(), [200, 120]);
    assert!(canvas.surface().is_blank());

    // Shrinking back does not bring anything back either
    assert!(canvas.fit_to(100, 60));
    assert!(canvas.surface().is_blank());
}

#[test]
fn test_leaving_surface_ends_gesture() {
    let mut canvas = create_test_canvas();
    canvas.handle(InputEvent::PointerDown { pos: pos2(10.0, 30.0) });
    canvas.handle(InputEvent::PointerMove { pos: pos2(20.0, 30.0) });
    canvas.handle(InputEvent::PointerLeave);
    assert!(!canvas.is_drawing());

    // Re-entering and moving does not resume the stroke
    canvas.handle(InputEvent::PointerMove { pos: pos2(60.0, 30.0) });
    canvas.handle(InputEvent::PointerMove { pos: pos2(90.0, 30.0) });

    assert_eq!(canvas.surface().pixel(15, 30), Some(HexColor::BLACK));
    assert_eq!(canvas.surface().pixel(40, 30), Some(HexColor::WHITE));
    assert_eq!(canvas.surface().pixel(75, 30), Some(HexColor::WHITE));
}

#[test]
fn test_leave_matches_release() {
    let mut released = create_test_canvas();
    released.handle(InputEvent::PointerDown { pos: pos2(10.0, 30.0) });
    released.handle(InputEvent::PointerMove { pos: pos2(40.0, 30.0) });
    released.handle(InputEvent::PointerUp);
    released.handle(InputEvent::PointerMove { pos: pos2(80.0, 50.0) });

    let mut left = create_test_canvas();
    left.handle(InputEvent::PointerDown { pos: pos2(10.0, 30.0) });
    left.handle(InputEvent::PointerMove { pos: pos2(40.0, 30.0) });
    left.handle(InputEvent::PointerLeave);
    left.handle(InputEvent::PointerMove { pos: pos2(80.0, 50.0) });

    assert_eq!(released.gesture(), left.gesture());
    assert_eq!(released.surface().image().as_raw(), left.surface().image().as_raw());
}

#[test]
fn test_mid_gesture_changes_apply_to_later_segments() {
    let mut canvas = create_test_canvas();
    canvas.handle(InputEvent::PointerDown { pos: pos2(10.0, 10.0) });
    canvas.handle(InputEvent::PointerMove { pos: pos2(50.0, 10.0) });

    canvas.select_color(RED);
    canvas.select_brush_size(2);
    canvas.handle(InputEvent::PointerMove { pos: pos2(50.0, 50.0) });
    canvas.handle(InputEvent::PointerUp);

    let surface = canvas.surface();
    // First segment keeps its black 5px look
    assert_eq!(surface.pixel(30, 10), Some(HexColor::BLACK));
    assert_eq!(surface.pixel(30, 8), Some(HexColor::BLACK));
    // Second segment is thin and red
    assert_eq!(surface.pixel(50, 30), Some(RED));
    assert_eq!(surface.pixel(47, 30), Some(HexColor::WHITE));
}

#[test]
fn test_touch_gesture_draws_like_pointer() {
    let mut touched = create_test_canvas();
    touched.handle(InputEvent::TouchStart { pos: pos2(10.0, 20.0) });
    touched.handle(InputEvent::TouchMove { pos: pos2(60.0, 20.0) });
    touched.handle(InputEvent::TouchEnd);

    let mut clicked = create_test_canvas();
    draw(&mut clicked, &[(10.0, 20.0), (60.0, 20.0)]);

    assert!(!touched.is_drawing());
    assert_eq!(touched.surface().image().as_raw(), clicked.surface().image().as_raw());
}
