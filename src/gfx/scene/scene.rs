use std::io::BufReader;
use std::path::Path;

use cgmath::Matrix4;
use log::{debug, info, warn};
use thiserror::Error;

use crate::gfx::{picking::AABB, resources::material::Appearance};

use super::node::{NodeId, SceneNode};

/// Errors raised while building or loading a scene
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to load OBJ '{path}': {source}")]
    Load {
        path: String,
        #[source]
        source: tobj::LoadError,
    },
    #[error("node {0} is not part of the scene")]
    MissingNode(NodeId),
}

/// Hierarchical scene graph of named nodes
///
/// Nodes live in an arena indexed by [`NodeId`]. Removed nodes leave a hole
/// behind so that ids held elsewhere become detectably stale instead of
/// pointing at a different node.
pub struct Scene {
    nodes: Vec<Option<SceneNode>>,
    root: NodeId,
}

impl Scene {
    /// Creates a scene that only contains a root node
    pub fn new(root_name: &str) -> Self {
        Self {
            nodes: vec![Some(SceneNode::new(root_name))],
            root: NodeId(0),
        }
    }

    /// Loads a scene from an OBJ file with automatic material extraction
    ///
    /// The root node is named after the file stem and gets one child per
    /// model in the file. A missing or broken MTL file is not fatal: the
    /// models are loaded without appearances.
    pub fn load_obj(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let (models, materials) =
            tobj::load_obj(path, &Self::load_options()).map_err(|source| SceneError::Load {
                path: path.display().to_string(),
                source,
            })?;

        let root_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "scene".to_string());

        let materials = materials.unwrap_or_else(|err| {
            warn!("No usable MTL for '{}' ({}), loading without materials", path.display(), err);
            Vec::new()
        });

        let scene = Self::from_models(&root_name, &models, &materials);
        info!(
            "Loaded '{}': {} models, {} materials",
            path.display(),
            models.len(),
            materials.len()
        );
        Ok(scene)
    }

    /// Builds a scene from in-memory OBJ and optional MTL sources
    ///
    /// # Arguments
    /// * `label` - Name for the root node, also used in error messages
    /// * `obj` - Contents of the OBJ file
    /// * `mtl` - Contents of the MTL library referenced by `mtllib`, if any
    pub fn from_obj_source(label: &str, obj: &str, mtl: Option<&str>) -> Result<Self, SceneError> {
        let mut reader = BufReader::new(obj.as_bytes());
        let (models, materials) =
            tobj::load_obj_buf(&mut reader, &Self::load_options(), |_| match mtl {
                Some(source) => tobj::load_mtl_buf(&mut BufReader::new(source.as_bytes())),
                None => Err(tobj::LoadError::OpenFileFailed),
            })
            .map_err(|source| SceneError::Load {
                path: label.to_string(),
                source,
            })?;

        let materials = materials.unwrap_or_else(|err| {
            warn!("No usable MTL for '{}' ({}), loading without materials", label, err);
            Vec::new()
        });

        Ok(Self::from_models(label, &models, &materials))
    }

    fn load_options() -> tobj::LoadOptions {
        tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        }
    }

    fn from_models(root_name: &str, models: &[tobj::Model], materials: &[tobj::Material]) -> Self {
        let mut scene = Self::new(root_name);
        let root = scene.root;

        for model in models {
            let mesh = &model.mesh;
            let mut node = SceneNode::new(model.name.clone());
            node.bounds = AABB::from_positions(&mesh.positions);
            node.triangle_count = (mesh.indices.len() / 3) as u32;

            if let Some(material) = mesh.material_id.and_then(|id| materials.get(id)) {
                node.appearances.push(Appearance::from(material));
            }

            debug!(
                "model '{}': {} triangles, {} appearances",
                node.name,
                node.triangle_count,
                node.appearances.len()
            );

            scene.attach(root, node);
        }

        scene
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Adds `node` as the last child of `parent`
    pub fn add_node(&mut self, parent: NodeId, node: SceneNode) -> Result<NodeId, SceneError> {
        if !self.contains(parent) {
            return Err(SceneError::MissingNode(parent));
        }
        Ok(self.attach(parent, node))
    }

    fn attach(&mut self, parent: NodeId, mut node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.push(Some(node));
        if let Some(parent_node) = self.node_mut(parent) {
            parent_node.children.push(id);
        }
        id
    }

    /// Removes a node together with its whole subtree
    ///
    /// The root cannot be removed. Returns the removed node itself (its
    /// descendants are dropped).
    pub fn remove_node(&mut self, id: NodeId) -> Option<SceneNode> {
        if id == self.root {
            return None;
        }

        let subtree = self.descendants(id);
        let parent = self.node(id)?.parent;
        if let Some(parent_node) = parent.and_then(|p| self.node_mut(p)) {
            parent_node.children.retain(|child| *child != id);
        }

        let mut removed = None;
        for node_id in subtree {
            let node = self.nodes.get_mut(node_id.0).and_then(Option::take);
            if node_id == id {
                removed = node;
            }
        }
        removed
    }

    /// Returns true while `id` refers to a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Iterates over all live nodes in creation order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, node)| node.as_ref().map(|node| (NodeId(index), node)))
    }

    /// `id` and every node below it, in depth-first pre-order
    ///
    /// Empty when `id` is stale.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        if !self.contains(id) {
            return result;
        }

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            result.push(current);
            if let Some(node) = self.node(current) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        result
    }

    /// All live nodes carrying `name` as display name
    pub fn find_by_name(&self, name: &str) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.name == name)
            .map(|(id, _)| id)
            .collect()
    }

    /// Accumulated transform from the root down to `id`
    pub fn world_transform(&self, id: NodeId) -> Option<Matrix4<f32>> {
        let mut node = self.node(id)?;
        let mut transform = node.transform;
        while let Some(parent) = node.parent {
            node = self.node(parent)?;
            transform = node.transform * transform;
        }
        Some(transform)
    }

    /// World-space bounds of the node's own geometry
    pub fn world_bounds(&self, id: NodeId) -> Option<AABB> {
        let bounds = self.node(id)?.bounds?;
        Some(bounds.transform(&self.world_transform(id)?))
    }

    /// World-space bounds of every node's geometry
    pub fn bounds(&self) -> Option<AABB> {
        self.iter()
            .filter_map(|(id, _)| self.world_bounds(id))
            .reduce(|acc, aabb| acc.union(&aabb))
    }

    /// Live node count, root included
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Gets all node names for UI display
    pub fn get_node_names(&self) -> Vec<String> {
        self.iter().map(|(_, node)| node.name.clone()).collect()
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        SceneStatistics {
            node_count: self.node_count(),
            appearance_count: self.iter().map(|(_, node)| node.appearances.len()).sum(),
            total_triangles: self.iter().map(|(_, node)| node.triangle_count).sum(),
        }
    }
}

/// Scene statistics for debugging and UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub node_count: usize,
    pub appearance_count: usize,
    pub total_triangles: u32,
}
