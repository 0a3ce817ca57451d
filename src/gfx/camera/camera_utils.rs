use cgmath::{Vector3, Zero};
use log::info;

use crate::gfx::picking::AABB;

use super::{
    camera_controller::CameraController,
    orbit_camera::{OrbitCamera, OrbitCameraState},
};

/// Initial camera placement computed from the model bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFraming {
    pub target: Vector3<f32>,
    pub distance: f32,
}

impl CameraFraming {
    /// Camera distance as a multiple of the largest model dimension
    pub const DISTANCE_FACTOR: f32 = 1.5;

    /// Frames a box: look at its center from `max extent * 1.5` away
    ///
    /// Returns `None` for degenerate (zero-sized) boxes.
    pub fn from_bounds(bounds: &AABB) -> Option<Self> {
        let distance = bounds.max_extent() * Self::DISTANCE_FACTOR;
        (distance > 0.0).then(|| Self {
            target: bounds.center(),
            distance,
        })
    }

    /// Straight-on orbit (looking down -Z) for this framing
    pub fn orbit_state(&self) -> OrbitCameraState {
        OrbitCameraState {
            distance: self.distance,
            pitch: 0.0,
            yaw: 0.0,
            target: self.target,
        }
    }
}

/// Camera plus its optional controls and the cached initial framing
pub struct CameraManager {
    pub camera: OrbitCamera,
    pub controller: Option<CameraController>,
    framing: Option<CameraFraming>,
    initial: OrbitCameraState,
}

impl CameraManager {
    /// Wraps `camera`; its current orbit is where an unframed reset returns
    pub fn new(camera: OrbitCamera, mut controller: Option<CameraController>) -> Self {
        if let Some(controller) = controller.as_mut() {
            controller.save_state(&camera);
        }
        Self {
            initial: camera.state(),
            camera,
            controller,
            framing: None,
        }
    }

    /// Frames the camera on `framing` and caches it as the reset target
    ///
    /// The controls, if any, save the framed state as well.
    pub fn frame(&mut self, framing: CameraFraming) {
        info!(
            "Framing camera on ({:.2}, {:.2}, {:.2}) at distance {:.2}",
            framing.target.x, framing.target.y, framing.target.z, framing.distance
        );
        self.framing = Some(framing);
        self.camera.apply_state(&framing.orbit_state());
        if let Some(controller) = self.controller.as_mut() {
            controller.save_state(&self.camera);
        }
    }

    pub fn framing(&self) -> Option<&CameraFraming> {
        self.framing.as_ref()
    }

    /// Orbit the camera had when the manager was created
    pub fn initial_state(&self) -> &OrbitCameraState {
        &self.initial
    }

    /// Repositions the camera to the cached framing (or its initial orbit
    /// when nothing was framed), then lets the controls reset themselves
    pub fn reset_view(&mut self) {
        match &self.framing {
            Some(framing) => self.camera.apply_state(&framing.orbit_state()),
            None => self.camera.apply_state(&self.initial),
        }
        if let Some(controller) = self.controller.as_ref() {
            controller.reset(&mut self.camera);
        }
    }

}

impl Default for CameraManager {
    fn default() -> Self {
        Self::new(
            OrbitCamera::new(5.0, 0.4, 0.2, Vector3::zero(), 1.0),
            Some(CameraController::default()),
        )
    }
}
