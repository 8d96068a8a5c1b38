// Pointer normalisation, scroll progress and the shared input cells.

use surfaces_core::{normalize_pointer, scroll_progress, ElementRect, InputSource, InputState};

fn rect() -> ElementRect {
    ElementRect {
        left: 100.0,
        top: 50.0,
        width: 400.0,
        height: 200.0,
    }
}

#[test]
fn pointer_corners_and_centre() {
    let r = rect();
    assert_eq!(normalize_pointer(100.0, 50.0, &r), [-0.5, -0.5]);
    assert_eq!(normalize_pointer(300.0, 150.0, &r), [0.0, 0.0]);
    assert_eq!(normalize_pointer(500.0, 250.0, &r), [0.5, 0.5]);
    assert_eq!(normalize_pointer(200.0, 200.0, &r), [-0.25, 0.25]);
}

#[test]
fn pointer_is_clamped_outside_the_element() {
    let r = rect();
    for (x, y) in [(-1000.0, -1000.0), (5000.0, 30.0), (120.0, 9000.0)] {
        let [px, py] = normalize_pointer(x, y, &r);
        assert!((-0.5..=0.5).contains(&px), "x={px}");
        assert!((-0.5..=0.5).contains(&py), "y={py}");
    }
}

#[test]
fn pointer_on_empty_element_reports_centre() {
    let r = ElementRect {
        width: 0.0,
        height: 0.0,
        ..rect()
    };
    assert_eq!(normalize_pointer(123.0, 456.0, &r), [0.0, 0.0]);
}

#[test]
fn scroll_progress_is_half_when_centred_in_viewport() {
    let r = ElementRect {
        left: 0.0,
        top: 300.0,
        width: 800.0,
        height: 200.0,
    };
    assert!((scroll_progress(&r, 800.0) - 0.5).abs() < 1e-6);
}

#[test]
fn scroll_progress_clamps_above_and_below_viewport() {
    let above = ElementRect {
        top: -5000.0,
        height: 400.0,
        ..Default::default()
    };
    let below = ElementRect {
        top: 5000.0,
        height: 400.0,
        ..Default::default()
    };
    assert_eq!(scroll_progress(&above, 900.0), 1.0);
    assert_eq!(scroll_progress(&below, 900.0), 0.0);
}

#[test]
fn scroll_progress_stays_in_range_for_any_position() {
    for top in (-3000..3000).step_by(37) {
        let r = ElementRect {
            top: top as f32,
            height: 600.0,
            ..Default::default()
        };
        let p = scroll_progress(&r, 900.0);
        assert!((0.0..=1.0).contains(&p), "top={top} progress={p}");
    }
}

#[test]
fn scroll_progress_with_zero_viewport_is_zero() {
    assert_eq!(scroll_progress(&rect(), 0.0), 0.0);
}

#[test]
fn input_state_snapshot_reflects_latest_writes() {
    let input = InputState::default();
    assert_eq!(input.snapshot().pointer, [0.0, 0.0]);
    input.set_pointer([0.25, -0.1]);
    input.set_scroll(0.7);
    input.set_viewport(640.0, 360.0);
    input.set_pointer([0.3, -0.2]);
    let snap = input.snapshot();
    assert_eq!(snap.pointer, [0.3, -0.2]);
    assert_eq!(snap.scroll, 0.7);
    assert_eq!(snap.viewport, [640.0, 360.0]);
}
