//! # User Interface Module
//!
//! Dear ImGui panels for the model inspector. The host application owns the
//! ImGui context and platform/renderer backends; this module only builds the
//! widgets for one frame.
//!
//! ## Key Components
//!
//! - [`inspector_panel`] - Selected part, its annotation, Edit/Save controls
//! - [`reset_view_button`] - Restores camera and colors
//! - [`default_inspector_ui`] - Both of the above
//!
//! ## Usage
//!
//! Panels return [`InspectorIntent`]s rather than mutating state. Feed them
//! back into the viewer:
//!
//! ```no_run
//! # fn frame(ui: &imgui::Ui, viewer: &mut model_inspector::ModelViewer) {
//! viewer.draw_ui(ui);
//! # }
//! ```
//!
//! [`InspectorIntent`]: crate::inspector::InspectorIntent

pub mod panel;

// Re-export main types
pub use panel::{default_inspector_ui, inspector_panel, reset_view_button};
