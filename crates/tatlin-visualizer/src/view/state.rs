use tatlin_core::{ViewError, ZoomLimits};
use tracing::trace;

/// Snapshot of every camera parameter a view tracks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Pan offset
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub zoom_factor: f32,
    /// Rotation about the vertical axis, degrees
    pub azimuth: f32,
    /// Rotation about the horizontal axis, degrees. Unused by the orthographic view.
    pub elevation: f32,
}

/// Camera parameters plus a stack of restore points.
///
/// The initial parameters are pushed on construction, so [`CameraState::reset`]
/// returns to them until another restore point is pushed.
#[derive(Debug, Clone)]
pub struct CameraState {
    current: ViewState,
    saved: Vec<ViewState>,
    limits: ZoomLimits,
}

impl CameraState {
    pub fn new(initial: ViewState, limits: ZoomLimits) -> Self {
        let mut camera = Self {
            current: initial,
            saved: Vec::new(),
            limits: limits.sanitized(),
        };
        camera.push();
        camera
    }

    pub fn state(&self) -> &ViewState {
        &self.current
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.current
    }

    pub fn limits(&self) -> &ZoomLimits {
        &self.limits
    }

    /// Number of restore points
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
        trace!("Pushed view state, depth {}", self.saved.len());
    }

    pub fn pop(&mut self) -> Result<(), ViewError> {
        self.current = self.saved.pop().ok_or(ViewError::StateStackEmpty)?;
        trace!("Popped view state, depth {}", self.saved.len());
        Ok(())
    }

    /// Restore the last restore point and keep it for the next reset
    pub fn reset(&mut self) -> Result<(), ViewError> {
        self.pop()?;
        self.push();
        Ok(())
    }

    /// One zoom step: in for positive `delta`, out for negative
    pub fn zoom(&mut self, delta: f32) {
        self.current.zoom_factor = self.limits.step(self.current.zoom_factor, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> ViewState {
        ViewState {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            zoom_factor: 1.0,
            azimuth: 0.0,
            elevation: -20.0,
        }
    }

    #[test]
    fn test_reset_keeps_depth() {
        let mut camera = CameraState::new(initial(), ZoomLimits::default());
        assert_eq!(camera.depth(), 1);

        camera.state_mut().azimuth = 45.0;
        camera.zoom(1.0);
        camera.reset().unwrap();

        assert_eq!(*camera.state(), initial());
        assert_eq!(camera.depth(), 1);

        camera.state_mut().x = 9.0;
        camera.reset().unwrap();
        assert_eq!(camera.state().x, 1.0);
    }

    #[test]
    fn test_pop_past_bottom_fails() {
        let mut camera = CameraState::new(initial(), ZoomLimits::default());
        camera.pop().unwrap();
        assert_eq!(camera.pop(), Err(ViewError::StateStackEmpty));
        assert_eq!(camera.reset(), Err(ViewError::StateStackEmpty));
    }

    #[test]
    fn test_inverted_limits_are_sanitized() {
        let limits = ZoomLimits {
            min: 50.0,
            max: 2.0,
            ..ZoomLimits::default()
        };
        let mut camera = CameraState::new(initial(), limits);
        assert_eq!(camera.limits().min, 2.0);
        assert_eq!(camera.limits().max, 50.0);

        for _ in 0..10 {
            camera.zoom(-1.0);
        }
        assert_eq!(camera.state().zoom_factor, 2.0);
    }

    #[test]
    fn test_nested_restore_points() {
        let mut camera = CameraState::new(initial(), ZoomLimits::default());
        camera.state_mut().azimuth = 90.0;
        camera.push();
        camera.state_mut().azimuth = 180.0;

        camera.reset().unwrap();
        assert_eq!(camera.state().azimuth, 90.0);

        camera.pop().unwrap();
        camera.pop().unwrap();
        assert_eq!(camera.state().azimuth, 0.0);
    }
}
