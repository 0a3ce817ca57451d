//! # Scene Management Module
//!
//! This module provides the scene graph the inspector works on: a tree of
//! named nodes, each optionally carrying material slots ([`Appearance`]s)
//! and mesh bounds.
//!
//! ## Key Components
//!
//! - [`Scene`] - Arena-backed scene graph with traversal, transforms and OBJ loading
//! - [`SceneNode`] - A named node with appearances, local transform and bounds
//! - [`NodeId`] - Stable identifier of a node; never reused after removal
//!
//! ## Usage
//!
//! ```no_run
//! use model_inspector::gfx::scene::{Scene, SceneNode};
//!
//! let mut scene = Scene::load_obj("house.obj")?;
//! let root = scene.root();
//! scene.add_node(root, SceneNode::new("Annotation Anchor"))?;
//! # Ok::<(), model_inspector::gfx::scene::SceneError>(())
//! ```
//!
//! [`Appearance`]: crate::gfx::resources::Appearance

pub mod node;
pub mod scene;

// Re-export main types
pub use node::{NodeId, SceneNode};
pub use scene::{Scene, SceneError, SceneStatistics};
