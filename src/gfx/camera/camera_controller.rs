use super::orbit_camera::{OrbitCamera, OrbitCameraState};

/// Orbit controls attached to a camera
///
/// Translates pointer deltas into orbit, zoom and pan moves, and remembers a
/// saved camera state that [`CameraController::reset`] returns to. Decoding
/// raw device events is left to the host window loop.
pub struct CameraController {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    saved_state: Option<OrbitCameraState>,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            pan_speed: 0.01,
            saved_state: None,
        }
    }

    /// NORMAL DRAG = ROTATE (orbit around focus)
    pub fn rotate(&self, delta: (f32, f32), camera: &mut OrbitCamera) {
        camera.add_yaw(-delta.0 * self.rotate_speed);
        camera.add_pitch(delta.1 * self.rotate_speed);
    }

    /// SHIFT + DRAG = PAN (move focus point)
    pub fn pan(&self, delta: (f32, f32), camera: &mut OrbitCamera) {
        camera.pan((-delta.0 * self.pan_speed, delta.1 * self.pan_speed));
    }

    /// Mouse wheel zoom; positive scroll moves the camera closer
    pub fn zoom(&self, scroll: f32, camera: &mut OrbitCamera) {
        camera.add_distance(-scroll * self.zoom_speed);
    }

    /// Remembers the current camera orbit as the reset target
    pub fn save_state(&mut self, camera: &OrbitCamera) {
        self.saved_state = Some(camera.state());
    }

    pub fn saved_state(&self) -> Option<&OrbitCameraState> {
        self.saved_state.as_ref()
    }

    /// Returns the camera to the saved state, or to the camera default
    /// when nothing was saved
    pub fn reset(&self, camera: &mut OrbitCamera) {
        match &self.saved_state {
            Some(state) => camera.apply_state(state),
            None => camera.reset_to_default(),
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(0.005, 0.1)
    }
}
