use approx::{assert_abs_diff_eq, assert_relative_eq};

use peek_view::coords::Vec2;
use peek_view::interaction::{EventResponse, InteractionController, PointerButton, ViewEvent};
use peek_view::view::{ViewGeometry, ViewState};

const VIEWPORTS: [(u32, u32); 4] = [(800, 600), (600, 800), (1920, 1080), (333, 333)];
const IMAGE_ASPECTS: [f32; 5] = [0.25, 0.75, 1.0, 1.5, 4.0];

fn pixel_of(g: &ViewGeometry, p: Vec2) -> ViewEvent {
    let w = g.viewport_width as f32;
    let h = g.viewport_height as f32;
    ViewEvent::PointerMoved { x: (p.x + 1.0) * w / 2.0, y: h - (p.y + 1.0) * h / 2.0 }
}

// ── ViewState::compute_scale ──────────────────────────────────────────────

#[test]
fn each_zoom_step_multiplies_scale_by_1_25() {
    for (w, h) in VIEWPORTS {
        for aspect in IMAGE_ASPECTS {
            let g = ViewGeometry::new(w, h, aspect);
            for n in -6..6 {
                let lo = ViewState { zoom_level: n, ..ViewState::new() }.compute_scale(&g);
                let hi = ViewState { zoom_level: n + 1, ..ViewState::new() }.compute_scale(&g);
                assert_relative_eq!(hi.x, lo.x * 1.25, max_relative = 1e-6);
                assert_relative_eq!(hi.y, lo.y * 1.25, max_relative = 1e-6);
            }
        }
    }
}

#[test]
fn unzoomed_scale_fits_one_axis_exactly() {
    for (w, h) in VIEWPORTS {
        for aspect in IMAGE_ASPECTS {
            let g = ViewGeometry::new(w, h, aspect);
            let s = ViewState::new().compute_scale(&g);

            let viewport = w as f32 / h as f32;
            let ratio = aspect.min(viewport) / aspect.max(viewport);

            let (one, other) = if s.x == 1.0 { (s.x, s.y) } else { (s.y, s.x) };
            assert_eq!(one, 1.0, "viewport {w}x{h}, aspect {aspect}");
            assert_relative_eq!(other, ratio, max_relative = 1e-5);
        }
    }
}

#[test]
fn square_image_in_800x600() {
    let g = ViewGeometry::new(800, 600, 1.0);
    let s = ViewState::new().compute_scale(&g);
    assert_relative_eq!(s.x, 0.75, epsilon = 1e-6);
    assert_relative_eq!(s.y, 1.0, epsilon = 1e-6);
}

// ── InteractionController ─────────────────────────────────────────────────

#[test]
fn wheel_keeps_point_under_cursor_fixed() {
    let pointers = [Vec2::new(0.3, -0.7), Vec2::new(-0.9, 0.9), Vec2::new(0.0, 0.5)];
    for (w, h) in VIEWPORTS {
        for aspect in IMAGE_ASPECTS {
            let g = ViewGeometry::new(w, h, aspect);
            for p in pointers {
                for delta in [1.0, -1.0] {
                    let mut c = InteractionController::with_view(ViewState {
                        center: Vec2::new(0.2, -0.1),
                        zoom_level: 2,
                    });
                    c.handle(pixel_of(&g, p), &g);
                    let pointer = c.state().pointer;

                    let before = c.view().world_at(pointer, &g);
                    assert!(c.handle(ViewEvent::Wheel { delta }, &g).is_handled());
                    let after = c.view().world_at(pointer, &g);

                    assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-5);
                    assert_abs_diff_eq!(before.y, after.y, epsilon = 1e-5);
                }
            }
        }
    }
}

#[test]
fn drag_there_and_back_restores_center() {
    let g = ViewGeometry::new(1024, 640, 1.3);
    let start = ViewState { center: Vec2::new(-0.25, 0.4), zoom_level: -3 };
    let mut c = InteractionController::with_view(start);

    let p0 = Vec2::new(0.1, 0.2);
    let p1 = Vec2::new(-0.6, 0.75);
    c.handle(pixel_of(&g, p0), &g);
    c.handle(ViewEvent::ButtonDown(PointerButton::Left), &g);
    c.handle(pixel_of(&g, p1), &g);
    assert_ne!(c.view().center, start.center);
    c.handle(pixel_of(&g, p0), &g);

    assert_abs_diff_eq!(c.view().center.x, start.center.x, epsilon = 1e-6);
    assert_abs_diff_eq!(c.view().center.y, start.center.y, epsilon = 1e-6);
    assert!(c.is_dragging());
}

#[test]
fn idle_motion_never_changes_the_view() {
    let g = ViewGeometry::new(800, 600, 0.5);
    let start = ViewState { center: Vec2::new(0.5, 0.5), zoom_level: 5 };
    let mut c = InteractionController::with_view(start);

    for (x, y) in [(0.0, 0.0), (799.0, 1.0), (400.0, 300.0), (12.5, 590.25)] {
        assert_eq!(c.handle(ViewEvent::PointerMoved { x, y }, &g), EventResponse::Handled);
        assert_eq!(*c.view(), start);
    }
}

#[test]
fn drag_half_viewport_right_with_unit_scale() {
    let g = ViewGeometry::new(600, 600, 1.0);
    let mut c = InteractionController::new();

    c.handle(pixel_of(&g, Vec2::zero()), &g);
    c.handle(ViewEvent::ButtonDown(PointerButton::Left), &g);
    c.handle(pixel_of(&g, Vec2::new(0.5, 0.0)), &g);

    assert_abs_diff_eq!(c.view().center.x, -0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(c.view().center.y, 0.0, epsilon = 1e-6);
}

#[test]
fn middle_button_does_not_start_a_drag() {
    let g = ViewGeometry::new(600, 600, 1.0);
    let mut c = InteractionController::new();

    assert_eq!(c.handle(ViewEvent::ButtonDown(PointerButton::Middle), &g), EventResponse::Unhandled);
    c.handle(pixel_of(&g, Vec2::new(0.5, 0.5)), &g);

    assert!(!c.is_dragging());
    assert_eq!(c.view().center, Vec2::zero());
}

#[test]
fn long_zoom_out_and_back_keeps_the_view_usable() {
    let g = ViewGeometry::new(800, 600, 1.0);
    let mut c = InteractionController::new();
    c.handle(ViewEvent::PointerMoved { x: 500.0, y: 200.0 }, &g);

    for _ in 0..470 {
        c.handle(ViewEvent::Wheel { delta: -1.0 }, &g);
    }
    for _ in 0..470 {
        c.handle(ViewEvent::Wheel { delta: 1.0 }, &g);
    }

    assert!(c.view().center.is_finite());
    assert!(c.view().compute_scale(&g).is_finite());
    assert!(c.view().zoom_level > 0);
}
