//! # Inspector Module
//!
//! The selection and annotation logic of the viewer. It sits between the
//! scene graph and the UI panel:
//!
//! 1. A pick event arrives from the rendering surface
//! 2. The previous selection's colors are restored
//! 3. The picked node is selected (or deselected when picked again) and its
//!    highlight is toggled
//! 4. The node's annotation record is loaded into the edit buffer
//! 5. A new [`InspectorViewModel`] is published for the panel
//!
//! ## Key Components
//!
//! - [`InspectorController`] - Owns the state and runs every operation
//! - [`HighlightEngine`] - Reversible recoloring backed by an original-color side table
//! - [`SelectionState`] - Pure `IDLE` / `SELECTED` transitions
//! - [`MetadataStore`] / [`EditBuffer`] - Saved annotations and the record being edited
//! - [`InspectorConfig`] - Highlight color, unnamed label and selection identity
//!
//! ## Usage
//!
//! ```no_run
//! use model_inspector::gfx::scene::Scene;
//! use model_inspector::inspector::{InspectorController, MetadataField, PickEvent};
//!
//! let mut scene = Scene::load_obj("house.obj")?;
//! let roof = scene.find_by_name("Roof")[0];
//!
//! let mut inspector = InspectorController::default();
//! inspector.on_pick(&mut scene, &mut PickEvent::new(roof));
//! inspector.on_edit_start();
//! inspector.on_field_change(MetadataField::Material, "Shingle");
//! inspector.on_save();
//! # Ok::<(), model_inspector::gfx::scene::SceneError>(())
//! ```

pub mod config;
pub mod controller;
pub mod events;
pub mod highlight;
pub mod metadata;
pub mod selection;

// Re-export main types
pub use config::{InspectorConfig, SelectionIdentity, UNNAMED_OBJECT};
pub use controller::{InspectorController, InspectorViewModel};
pub use events::{InspectorIntent, PickEvent};
pub use highlight::{AppearanceKey, HighlightEngine};
pub use metadata::{EditBuffer, MetadataField, MetadataRecord, MetadataStore, UnknownFieldError};
pub use selection::{SelectionChange, SelectionState, Transition};
