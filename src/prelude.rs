//! # Model Inspector Prelude
//!
//! Commonly used types in one import.
//!
//! ```no_run
//! use model_inspector::prelude::*;
//!
//! let mut viewer = ModelViewer::load("house.obj", InspectorConfig::default())?;
//! viewer.resize(1280, 720);
//! viewer.click((640.0, 360.0));
//! viewer.handle_intent(InspectorIntent::EditRequested);
//! # Ok::<(), SceneError>(())
//! ```

// Re-export core application types
pub use crate::app::ModelViewer;

// Re-export graphics and scene types
pub use crate::gfx::camera::{CameraController, CameraFraming, CameraManager, OrbitCamera};
pub use crate::gfx::picking::{ObjectPicker, PickHit, Ray, AABB};
pub use crate::gfx::resources::material::{Appearance, Color};
pub use crate::gfx::scene::{NodeId, Scene, SceneError, SceneNode};

// Re-export inspector types
pub use crate::inspector::{
    InspectorConfig, InspectorController, InspectorIntent, InspectorViewModel, MetadataField,
    MetadataRecord, PickEvent, SelectionIdentity,
};

// Re-export UI panels
pub use crate::ui::{default_inspector_ui, inspector_panel, reset_view_button};

// Re-export common external types
pub use cgmath::Vector3;
pub use imgui::Ui;
