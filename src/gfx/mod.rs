//! # Graphics Module
//!
//! This module contains the scene-side collaborators of the inspector: the
//! scene graph, material slots, the orbit camera and mouse picking.
//!
//! ## Architecture Overview
//!
//! - **Camera System** ([`camera`]) - Orbit camera, orbit controls and initial framing
//! - **Picking** ([`picking`]) - Mouse ray casting against node bounds
//! - **Scene Management** ([`scene`]) - Node hierarchy, transforms and OBJ loading
//! - **Resources** ([`resources`]) - Appearance descriptors (material slots)
//!
//! Rasterization is not part of this crate; any renderer that can draw a
//! [`Scene`] with per-slot base colors can sit on top of it.
//!
//! [`Scene`]: scene::Scene

pub mod camera;
pub mod picking;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use scene::Scene;
