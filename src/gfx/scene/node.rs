//! Scene nodes and their stable identifiers

use std::fmt;

use cgmath::{Matrix4, SquareMatrix, Vector3};

use crate::gfx::{picking::AABB, resources::material::Appearance};

/// Stable opaque identifier of a node inside one [`Scene`]
///
/// Identifiers are never reused: once a node is removed, its id stays dead
/// for the lifetime of the scene, so a stale id can always be detected.
///
/// [`Scene`]: super::Scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named node of the scene graph
///
/// The display name is not guaranteed to be unique and may be empty.
pub struct SceneNode {
    pub name: String,
    pub appearances: Vec<Appearance>,
    pub transform: Matrix4<f32>, // local transform relative to the parent
    pub(crate) bounds: Option<AABB>,
    pub(crate) triangle_count: u32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl SceneNode {
    /// Create a new node with identity transformation and no appearance
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            appearances: Vec::new(),
            transform: Matrix4::identity(),
            bounds: None,
            triangle_count: 0,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Builder pattern: Add a material slot
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearances.push(appearance);
        self
    }

    /// Builder pattern: Set local-space mesh bounds
    pub fn with_bounds(mut self, bounds: AABB) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Builder pattern: Set translation
    pub fn with_translation(mut self, translation: Vector3<f32>) -> Self {
        self.set_translation(translation);
        self
    }

    /// Set translation
    pub fn set_translation(&mut self, translation: Vector3<f32>) {
        self.transform = Matrix4::from_translation(translation);
    }

    /// Apply translation (multiplies with existing transform)
    pub fn translate(&mut self, translation: Vector3<f32>) {
        self.transform = self.transform * Matrix4::from_translation(translation);
    }

    /// Local-space mesh bounds, if the node carries geometry
    pub fn bounds(&self) -> Option<&AABB> {
        self.bounds.as_ref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }
}
