// src/gfx/resources/mod.rs
//! Material resources
//!
//! Appearance descriptors attached to scene nodes.

pub mod material;

// Re-export main types
pub use material::{Appearance, Color, Rgb, HIGHLIGHT_RGB};
