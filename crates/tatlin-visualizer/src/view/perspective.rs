//! Perspective projection (3D mode).

use super::state::{CameraState, ViewState};
use super::{viewport_extent, FrameScope, RenderState, ViewMode};
use crate::visualizer::RenderMode;
use glam::Mat4;
use tatlin_core::constants::UI_OVERLAY_MARGIN;
use tatlin_core::ZoomLimits;
use tracing::debug;

const FOVY: f32 = 80.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 9000.0;
/// Depth range of the orthographic substitute projection
const ORTHO_DEPTH: f32 = 9000.0;
/// Distance has no effect on apparent size in the orthographic substitute,
/// so its zoom is scaled up to roughly match the perspective framing.
const ZOOM_ORTHO_ADJ: f32 = 4.5;

/// Standard camera orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewPreset {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl ViewPreset {
    pub const ALL: [ViewPreset; 6] = [
        ViewPreset::Front,
        ViewPreset::Back,
        ViewPreset::Left,
        ViewPreset::Right,
        ViewPreset::Top,
        ViewPreset::Bottom,
    ];

    /// `(azimuth, elevation)` in degrees
    pub fn angles(self) -> (f32, f32) {
        match self {
            ViewPreset::Front => (0.0, 0.0),
            ViewPreset::Back => (180.0, 0.0),
            ViewPreset::Left => (90.0, 0.0),
            ViewPreset::Right => (-90.0, 0.0),
            ViewPreset::Top => (0.0, -90.0),
            ViewPreset::Bottom => (0.0, 90.0),
        }
    }
}

/// Orbiting perspective camera with Z up.
///
/// Can substitute an orthographic projection while keeping its own camera
/// parameters; see [`ViewMode::set_ortho`].
#[derive(Debug, Clone)]
pub struct PerspectiveView {
    camera: CameraState,
    ortho: bool,
}

impl Default for PerspectiveView {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl PerspectiveView {
    pub fn new(limits: ZoomLimits) -> Self {
        let initial = ViewState {
            x: 0.0,
            y: 180.0,
            z: -20.0,
            zoom_factor: 1.0,
            azimuth: 0.0,
            elevation: -20.0,
        };
        Self {
            camera: CameraState::new(initial, limits),
            ortho: false,
        }
    }

    /// Turn the camera to a standard orientation, keeping pan and zoom
    pub fn set_preset(&mut self, preset: ViewPreset) {
        let (azimuth, elevation) = preset.angles();
        debug!("View preset {:?}", preset);
        let s = self.camera.state_mut();
        s.azimuth = azimuth;
        s.elevation = elevation;
    }

    fn projection_matrix(&self, w: f32, h: f32) -> Mat4 {
        if self.ortho {
            let (x, y) = (w / 2.0, h / 2.0);
            Mat4::orthographic_rh_gl(-x, x, -y, y, -ORTHO_DEPTH, ORTHO_DEPTH)
        } else {
            Mat4::perspective_rh_gl(FOVY.to_radians(), w / h, NEAR, FAR)
        }
    }
}

impl ViewMode for PerspectiveView {
    fn camera(&self) -> &CameraState {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut CameraState {
        &mut self.camera
    }

    fn supports_ortho(&self) -> bool {
        true
    }

    fn is_ortho(&self) -> bool {
        self.ortho
    }

    fn set_ortho(&mut self, enabled: bool) -> bool {
        self.ortho = enabled;
        true
    }

    fn render_mode(&self) -> RenderMode {
        RenderMode::Volumetric
    }

    fn begin<'s>(&mut self, state: &'s mut RenderState, width: f32, height: f32) -> FrameScope<'s> {
        let (w, h) = (viewport_extent(width), viewport_extent(height));
        FrameScope::enter(state, self.projection_matrix(w, h), (w, h))
    }

    fn display_transform(&self, state: &mut RenderState) {
        let s = self.camera.state();
        let mv = &mut state.modelview;

        mv.rotate(-90.0, 1.0, 0.0, 0.0); // make z point up
        mv.translate(0.0, s.y, 0.0); // move away from the displayed object

        let mut f = s.zoom_factor;
        if self.ortho {
            f *= ZOOM_ORTHO_ADJ;
        }
        mv.scale(f, f, f);

        mv.translate(s.x, 0.0, s.z);
        mv.rotate(-s.elevation, 1.0, 0.0, 0.0);
        mv.rotate(s.azimuth, 0.0, 0.0, 1.0);
    }

    fn ui_transform(&self, state: &mut RenderState, length: f32) {
        let s = self.camera.state();
        let offset = length + UI_OVERLAY_MARGIN;
        let mv = &mut state.modelview;

        mv.rotate(-90.0, 1.0, 0.0, 0.0);
        mv.translate(offset, 0.0, offset);
        mv.rotate(-s.elevation, 1.0, 0.0, 0.0);
        mv.rotate(s.azimuth, 0.0, 0.0, 1.0);
    }

    fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        let s = self.camera.state_mut();
        s.azimuth += delta_x;
        s.elevation -= delta_y;
    }

    /// Pan distance is divided by zoom so a drag moves the scene the same
    /// on-screen distance at any zoom level.
    fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let s = self.camera.state_mut();
        s.x += delta_x / s.zoom_factor;
        s.z -= delta_y / s.zoom_factor;
    }
}
