// src/lib.rs
//! Model Inspector
//!
//! Selection, highlighting and annotation for the parts of a 3D model.
//! Click a part to highlight it and show its metadata, edit and save the
//! metadata, or reset the camera, the selection and every color at once.

pub mod app;
pub mod gfx;
pub mod inspector;
pub mod prelude;
pub mod ui;

// Re-export main types for convenience
pub use app::ModelViewer;
