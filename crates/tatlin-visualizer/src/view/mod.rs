//! View modes
//!
//! This module provides:
//! - The [`ViewMode`] contract shared by both projections
//! - Orthographic (2D) and perspective (3D) implementations
//! - Matrix state for a frame and the scope guard that restores it
//! - [`ViewSet`] for switching between the two modes
//!
//! A frame is drawn as
//! `begin` → `display_transform` → draw geometry → `ui_transform` → draw overlay → `end`.

pub mod orthographic;
pub mod perspective;
pub mod state;

pub use orthographic::OrthographicView;
pub use perspective::{PerspectiveView, ViewPreset};
pub use state::{CameraState, ViewState};

use crate::math::MatrixStack;
use crate::visualizer::RenderMode;
use glam::Mat4;
use std::ops::{Deref, DerefMut};
use tatlin_core::ViewError;
use tracing::trace;

/// Projection and modelview matrices of the frame being drawn
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub projection: MatrixStack,
    pub modelview: MatrixStack,
    /// Viewport size of the open frame, `None` outside a [`FrameScope`]
    viewport: Option<(f32, f32)>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self) -> Option<(f32, f32)> {
        self.viewport
    }

    /// Combined model-view-projection matrix, ready for upload
    pub fn mvp(&self) -> Mat4 {
        self.projection.current() * self.modelview.current()
    }
}

/// Active projection for the duration of one frame.
///
/// Created by [`ViewMode::begin`]. Both matrix stacks and the viewport are
/// restored to their state before `begin` when the scope is dropped, whether through
/// [`ViewMode::end`], an early return, or unwinding.
#[derive(Debug)]
pub struct FrameScope<'a> {
    state: &'a mut RenderState,
    outer_viewport: Option<(f32, f32)>,
}

impl<'a> FrameScope<'a> {
    /// Save both stacks, load `projection` and an identity modelview, and
    /// record `viewport` as the size of the frame
    pub fn enter(state: &'a mut RenderState, projection: Mat4, viewport: (f32, f32)) -> Self {
        state.projection.push();
        state.projection.load(projection);
        state.modelview.push();
        state.modelview.load_identity();
        let outer_viewport = state.viewport.replace(viewport);
        Self {
            state,
            outer_viewport,
        }
    }
}

impl Deref for FrameScope<'_> {
    type Target = RenderState;

    fn deref(&self) -> &RenderState {
        self.state
    }
}

impl DerefMut for FrameScope<'_> {
    fn deref_mut(&mut self) -> &mut RenderState {
        self.state
    }
}

impl Drop for FrameScope<'_> {
    fn drop(&mut self) {
        self.state.projection.pop();
        self.state.modelview.pop();
        self.state.viewport = self.outer_viewport;
        trace!("Frame scope closed");
    }
}

/// Camera behaviour shared by the orthographic and perspective views
pub trait ViewMode {
    fn camera(&self) -> &CameraState;

    fn camera_mut(&mut self) -> &mut CameraState;

    /// Save the current camera parameters as a restore point
    fn push_state(&mut self) {
        self.camera_mut().push();
    }

    fn pop_state(&mut self) -> Result<(), ViewError> {
        self.camera_mut().pop()
    }

    /// Return to the last restore point, keeping it for later resets
    fn reset_state(&mut self) -> Result<(), ViewError> {
        self.camera_mut().reset()
    }

    /// Zoom in for positive `delta`, out for negative
    fn zoom(&mut self, delta: f32) {
        self.camera_mut().zoom(delta);
    }

    /// Whether the view can swap its projection for an orthographic one
    fn supports_ortho(&self) -> bool {
        false
    }

    fn is_ortho(&self) -> bool;

    /// Request the orthographic substitute projection; returns whether the request was honoured
    fn set_ortho(&mut self, _enabled: bool) -> bool {
        false
    }

    fn render_mode(&self) -> RenderMode;

    /// Set up the projection for a `width` x `height` viewport
    fn begin<'s>(&mut self, state: &'s mut RenderState, width: f32, height: f32) -> FrameScope<'s>;

    /// Tear down the projection set up by [`ViewMode::begin`]
    fn end(&mut self, scope: FrameScope<'_>) {
        drop(scope);
    }

    /// Apply pan, zoom and rotation before drawing scene geometry
    fn display_transform(&self, state: &mut RenderState);

    /// Transform for overlay geometry that follows rotation only, offset by `length`
    fn ui_transform(&self, state: &mut RenderState, length: f32);

    fn rotate(&mut self, delta_x: f32, delta_y: f32);

    fn pan(&mut self, delta_x: f32, delta_y: f32);
}

/// Replace an unusable viewport dimension with 1
pub(crate) fn viewport_extent(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        trace!("Viewport dimension {} replaced with 1", value);
        1.0
    }
}

/// Which projection a [`ViewSet`] presents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Projection {
    Orthographic,
    #[default]
    Perspective,
}

/// One view of each kind and the active selection
#[derive(Debug, Clone, Default)]
pub struct ViewSet {
    orthographic: OrthographicView,
    perspective: PerspectiveView,
    active: Projection,
}

impl ViewSet {
    pub fn new(orthographic: OrthographicView, perspective: PerspectiveView) -> Self {
        Self {
            orthographic,
            perspective,
            active: Projection::default(),
        }
    }

    pub fn projection(&self) -> Projection {
        self.active
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.active = projection;
    }

    pub fn active(&self) -> &dyn ViewMode {
        match self.active {
            Projection::Orthographic => &self.orthographic,
            Projection::Perspective => &self.perspective,
        }
    }

    pub fn active_mut(&mut self) -> &mut dyn ViewMode {
        match self.active {
            Projection::Orthographic => &mut self.orthographic,
            Projection::Perspective => &mut self.perspective,
        }
    }

    pub fn orthographic(&self) -> &OrthographicView {
        &self.orthographic
    }

    pub fn orthographic_mut(&mut self) -> &mut OrthographicView {
        &mut self.orthographic
    }

    pub fn perspective(&self) -> &PerspectiveView {
        &self.perspective
    }

    pub fn perspective_mut(&mut self) -> &mut PerspectiveView {
        &mut self.perspective
    }
}
