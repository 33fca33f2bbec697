use approx::assert_relative_eq;
use csp_core::SplineError;
use csp_editor::{Command, EditorConfig, EditorSession};
use csp_geometry::spline::curve_point;
use csp_math::dvec3;

fn small_session(points: usize) -> EditorSession {
    let config = EditorConfig {
        initial_points: points,
        sample_step: 0.25,
        ..EditorConfig::default()
    };
    EditorSession::new(config).unwrap()
}

#[test]
fn test_order_is_clamped_below_point_count() {
    let mut s = small_session(4);
    for _ in 0..10 {
        s.apply(Command::RaiseOrder).unwrap();
    }
    assert_eq!(s.order(), 3);

    for _ in 0..10 {
        s.apply(Command::LowerOrder).unwrap();
    }
    assert_eq!(s.order(), 0);
}

#[test]
fn test_fragment_selection_is_clamped() {
    let mut s = small_session(5);
    assert_eq!(s.selected_fragment(), 1);

    s.apply(Command::PreviousFragment).unwrap();
    s.apply(Command::PreviousFragment).unwrap();
    assert_eq!(s.selected_fragment(), 0);

    for _ in 0..8 {
        s.apply(Command::NextFragment).unwrap();
    }
    assert_eq!(s.selected_fragment(), 4);
}

#[test]
fn test_removing_points_reclamps_state() {
    let mut s = small_session(6);
    s.set_order(5);
    s.grab_nearest(s.control_points()[5]);
    for _ in 0..4 {
        s.apply(Command::NextFragment).unwrap();
    }

    s.apply(Command::RemovePoint).unwrap();
    s.apply(Command::RemovePoint).unwrap();

    assert_eq!(s.control_points().len(), 4);
    assert_eq!(s.order(), 3);
    assert_eq!(s.grabbed(), 3);
    assert_eq!(s.selected_fragment(), 3);
}

#[test]
fn test_last_point_cannot_be_removed() {
    let mut s = small_session(2);
    s.apply(Command::RemovePoint).unwrap();
    assert!(matches!(
        s.apply(Command::RemovePoint),
        Err(SplineError::InvalidOperation(_))
    ));
    assert_eq!(s.control_points().len(), 1);
    assert_eq!(s.order(), 0);

    // A single point still evaluates
    let samples = s.sample_curve().unwrap();
    assert_eq!(samples.len(), 4);
    assert!(samples.iter().all(|&p| p == s.control_points()[0]));
}

#[test]
fn test_add_point_continues_ring() {
    let mut s = small_session(3);
    let reference = small_session(4);
    s.apply(Command::AddPoint).unwrap();
    assert_eq!(s.control_points(), reference.control_points());
}

#[test]
fn test_reset_restores_generated_ring() {
    let mut s = small_session(5);
    s.set_control_point(2, dvec3(9.0, 9.0, 9.0)).unwrap();
    s.apply(Command::AddPoint).unwrap();
    s.reset();
    assert_eq!(s.control_points(), small_session(5).control_points());
}

#[test]
fn test_grab_drag_release() {
    let mut s = small_session(6);
    let target = s.control_points()[2];
    let grabbed = s.grab_nearest(target + dvec3(0.01, -0.01, 0.0));
    assert_eq!(grabbed, 2);
    assert!(s.is_dragging());

    s.drag_to(dvec3(0.5, 0.5, 0.0));
    assert_eq!(s.control_points()[2], dvec3(0.5, 0.5, 0.0));

    s.release();
    s.drag_to(dvec3(-3.0, -3.0, 0.0));
    assert_eq!(s.control_points()[2], dvec3(0.5, 0.5, 0.0));
}

#[test]
fn test_screen_drag_uses_viewport() {
    let mut s = small_session(6);
    s.grab_at_screen(320, 240);
    s.drag_to_screen(470, 390);
    let p = s.control_points()[s.grabbed()];
    assert_relative_eq!(p.x, 1.0);
    assert_relative_eq!(p.y, 1.0);
    assert_eq!(p.z, 0.0);
}

#[test]
fn test_samples_follow_evaluator() {
    let mut s = small_session(6);
    s.set_order(3);
    let samples = s.sample_curve().unwrap();
    assert_eq!(samples.len(), 24);
    for (k, p) in samples.iter().enumerate() {
        let expected = curve_point(s.control_points(), 3, k as f64 * 0.25).unwrap();
        assert_eq!(*p, expected);
    }
}

#[test]
fn test_selected_fragment_samples() {
    let mut s = small_session(6);
    s.set_order(2);
    s.apply(Command::NextFragment).unwrap();
    let samples = s.sample_selected_fragment().unwrap();
    assert_eq!(samples.len(), 4);
    for (k, p) in samples.iter().enumerate() {
        let expected = curve_point(s.control_points(), 2, 2.0 + k as f64 * 0.25).unwrap();
        assert_eq!(*p, expected);
    }
}

#[test]
fn test_non_finite_point_blocks_sampling() {
    let mut s = small_session(4);
    s.set_control_point(1, dvec3(f64::NAN, 0.0, 0.0)).unwrap();
    assert!(s.sample_curve().is_err());
}

#[test]
fn test_tiny_sample_step_is_rejected_not_allocated() {
    let json = r#"{ "initial_points": 4, "sample_step": 1e-300 }"#;
    let config = EditorConfig::from_json(json).unwrap();
    let s = EditorSession::new(config).unwrap();
    assert!(matches!(
        s.sample_curve(),
        Err(SplineError::InvalidOperation(_))
    ));
    assert!(matches!(
        s.sample_selected_fragment(),
        Err(SplineError::InvalidOperation(_))
    ));
}
