//! Camera gestures and frame matrices for both view modes

use glam::{Mat4, Vec3};
use tatlin_core::{ViewError, ZoomLimits};
use tatlin_visualizer::{
    OrthographicView, PerspectiveView, Projection, RenderMode, RenderState, ViewMode, ViewPreset,
    ViewSet,
};

#[test]
fn test_zoom_clamps_to_limits() {
    let mut view = PerspectiveView::default();
    for _ in 0..200 {
        view.zoom(1.0);
    }
    assert_eq!(view.camera().state().zoom_factor, 1000.0);

    for _ in 0..400 {
        view.zoom(-1.0);
    }
    assert_eq!(view.camera().state().zoom_factor, 0.1);
}

#[test]
fn test_zoom_steps() {
    let mut view = OrthographicView::default();
    view.zoom(1.0);
    assert!((view.camera().state().zoom_factor - 6.0).abs() < 1e-5);
    view.zoom(-1.0);
    assert!((view.camera().state().zoom_factor - 6.0 * 0.83).abs() < 1e-5);
    view.zoom(0.0);
    assert!((view.camera().state().zoom_factor - 6.0 * 0.83).abs() < 1e-5);
}

#[test]
fn test_custom_limits_are_honoured() {
    let limits = ZoomLimits {
        min: 0.5,
        max: 2.0,
        ..ZoomLimits::default()
    };
    let mut view = PerspectiveView::new(limits);
    for _ in 0..10 {
        view.zoom(1.0);
    }
    assert_eq!(view.camera().state().zoom_factor, 2.0);
}

#[test]
fn test_reset_state_after_gestures() {
    let mut view = PerspectiveView::default();
    let initial = *view.camera().state();

    view.rotate(30.0, -12.0);
    view.pan(40.0, 25.0);
    view.zoom(1.0);
    view.set_preset(ViewPreset::Left);
    assert_ne!(*view.camera().state(), initial);

    view.reset_state().unwrap();
    assert_eq!(*view.camera().state(), initial);

    // the restore point survives the reset
    view.zoom(-1.0);
    view.reset_state().unwrap();
    assert_eq!(*view.camera().state(), initial);
}

#[test]
fn test_push_and_pop_state() {
    let mut view = OrthographicView::default();
    view.rotate(45.0, 0.0);
    view.push_state();
    view.rotate(45.0, 0.0);

    view.pop_state().unwrap();
    assert_eq!(view.camera().state().azimuth, 45.0);

    view.pop_state().unwrap();
    assert_eq!(view.camera().state().azimuth, 0.0);
    assert_eq!(view.pop_state(), Err(ViewError::StateStackEmpty));
}

#[test]
fn test_frame_leaves_state_untouched() {
    let mut views = ViewSet::default();
    let mut state = RenderState::new();

    for projection in [Projection::Orthographic, Projection::Perspective] {
        views.set_projection(projection);
        let view = views.active_mut();
        let mut scope = view.begin(&mut state, 1024.0, 768.0);
        view.display_transform(&mut scope);
        assert_ne!(scope.mvp(), Mat4::IDENTITY);
        view.end(scope);

        assert_eq!(state.mvp(), Mat4::IDENTITY);
        assert_eq!(state.projection.depth(), 0);
        assert_eq!(state.modelview.depth(), 0);
    }
}

#[test]
fn test_degenerate_viewport_is_usable() {
    let mut view = PerspectiveView::default();
    let mut state = RenderState::new();
    let mut scope = view.begin(&mut state, 0.0, -5.0);
    view.display_transform(&mut scope);
    let m = scope.mvp();
    assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
}

#[test]
fn test_ortho_substitute_only_in_perspective() {
    let mut views = ViewSet::default();
    assert!(views.active_mut().set_ortho(true));
    assert!(views.active().is_ortho());
    assert_eq!(views.active().render_mode(), RenderMode::Volumetric);

    views.set_projection(Projection::Orthographic);
    assert!(!views.active_mut().set_ortho(true));
    assert_eq!(views.active().render_mode(), RenderMode::Flat);
}

#[test]
fn test_ui_transform_follows_rotation_only() {
    let mut view = OrthographicView::default();
    view.rotate(90.0, 0.0);
    view.pan(100.0, 100.0);
    view.zoom(1.0);

    let mut state = RenderState::new();
    view.ui_transform(&mut state, 30.0);
    let m = state.modelview.current();

    assert_eq!(m.transform_point3(Vec3::ZERO), Vec3::new(50.0, 50.0, 0.0));
    let x = m.transform_vector3(Vec3::X);
    assert!(x.abs_diff_eq(Vec3::Y, 1e-5), "{:?}", x);
}

#[test]
fn test_orthographic_pan_moves_scene_on_screen() {
    let mut view = OrthographicView::default();
    let mut state = RenderState::new();

    let before = {
        let mut scope = view.begin(&mut state, 800.0, 600.0);
        view.display_transform(&mut scope);
        let p = scope.mvp().project_point3(Vec3::ZERO);
        view.end(scope);
        p
    };

    view.pan(10.0, 0.0);
    let mut scope = view.begin(&mut state, 800.0, 600.0);
    view.display_transform(&mut scope);
    let after = scope.mvp().project_point3(Vec3::ZERO);

    // 10 px drag moves 40 units over a 400-unit half-width
    assert!((after.x - before.x - 0.1).abs() < 1e-5);
}
