//! Orthographic projection (2D mode).

use super::state::{CameraState, ViewState};
use super::{viewport_extent, FrameScope, RenderState, ViewMode};
use crate::visualizer::RenderMode;
use glam::Mat4;
use tatlin_core::constants::UI_OVERLAY_MARGIN;
use tatlin_core::ZoomLimits;
use tracing::warn;

const NEAR: f32 = -100.0;
const FAR: f32 = 100.0;
const PAN_FACTOR: f32 = 4.0;

/// Top-down parallel projection.
///
/// Zoom scales the scene directly and pan moves it by a fixed factor of the
/// drag distance, regardless of zoom. Only azimuth rotation is supported.
#[derive(Debug, Clone)]
pub struct OrthographicView {
    camera: CameraState,
}

impl Default for OrthographicView {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl OrthographicView {
    pub fn new(limits: ZoomLimits) -> Self {
        let initial = ViewState {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            zoom_factor: 5.0,
            azimuth: 0.0,
            elevation: 0.0,
        };
        Self {
            camera: CameraState::new(initial, limits),
        }
    }

    /// Center the projection box on the origin
    fn center_on_origin(&self, state: &mut RenderState) {
        let Some((w, h)) = state.viewport() else {
            warn!("display_transform called outside begin/end, projection left as is");
            return;
        };
        let (x, y) = (w / 2.0, h / 2.0);
        state.projection.load_identity();
        state
            .projection
            .multiply(Mat4::orthographic_rh_gl(-x, x, -y, y, NEAR, FAR));
    }
}

impl ViewMode for OrthographicView {
    fn camera(&self) -> &CameraState {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut CameraState {
        &mut self.camera
    }

    fn is_ortho(&self) -> bool {
        true
    }

    fn render_mode(&self) -> RenderMode {
        RenderMode::Flat
    }

    fn begin<'s>(&mut self, state: &'s mut RenderState, width: f32, height: f32) -> FrameScope<'s> {
        let (w, h) = (viewport_extent(width), viewport_extent(height));
        let projection = Mat4::orthographic_rh_gl(0.0, w, 0.0, h, NEAR, FAR);
        FrameScope::enter(state, projection, (w, h))
    }

    fn display_transform(&self, state: &mut RenderState) {
        self.center_on_origin(state);
        let s = self.camera.state();
        state.modelview.translate(s.x, s.y, s.z);
        state.modelview.rotate(s.azimuth, 0.0, 0.0, 1.0);
        state
            .modelview
            .scale(s.zoom_factor, s.zoom_factor, s.zoom_factor);
    }

    fn ui_transform(&self, state: &mut RenderState, length: f32) {
        let offset = length + UI_OVERLAY_MARGIN;
        state.modelview.translate(offset, offset, 0.0);
        state
            .modelview
            .rotate(self.camera.state().azimuth, 0.0, 0.0, 1.0);
    }

    fn rotate(&mut self, delta_x: f32, _delta_y: f32) {
        self.camera.state_mut().azimuth += delta_x;
    }

    fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let s = self.camera.state_mut();
        s.x += delta_x * PAN_FACTOR;
        s.y -= delta_y * PAN_FACTOR;
    }
}
