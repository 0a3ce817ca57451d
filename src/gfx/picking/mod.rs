//! # Object Picking System
//!
//! This module turns a mouse click into the list of scene nodes under the
//! cursor. The inspector consumes the nearest hit as a pick event.
//!
//! ## How it works
//!
//! 1. **Mouse to Ray**: Convert mouse coordinates to a 3D ray in world space
//! 2. **Ray-Node Intersection**: Test the ray against each node's world-space bounding box
//! 3. **Ordering**: Return every hit, nearest first
//!
//! ## Usage
//!
//! ```no_run
//! use model_inspector::gfx::{camera::OrbitCamera, picking::ObjectPicker, scene::Scene};
//! use cgmath::Vector3;
//!
//! let scene = Scene::new("empty");
//! let camera = OrbitCamera::new(5.0, 0.0, 0.0, Vector3::new(0.0, 0.0, 0.0), 1.0);
//! let mut picker = ObjectPicker::new();
//! if let Some(hit) = picker.pick_node((400.0, 300.0), (800.0, 600.0), &camera, &scene) {
//!     println!("Picked node: {}", hit.node);
//! }
//! ```

use std::collections::HashMap;

use cgmath::{ElementWise, InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4, Zero};

use crate::gfx::{
    camera::orbit_camera::OrbitCamera,
    scene::{NodeId, Scene},
};

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box for intersection testing and camera framing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl AABB {
    /// Create a new AABB
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create AABB from a set of vertices
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        if vertices.is_empty() {
            return Self::new(Vector3::zero(), Vector3::zero());
        }

        let mut min = Vector3::new(vertices[0][0], vertices[0][1], vertices[0][2]);
        let mut max = min;

        for vertex in vertices.iter().skip(1) {
            let v = Vector3::new(vertex[0], vertex[1], vertex[2]);
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }

        Self::new(min, max)
    }

    /// Create AABB from a flat `[x, y, z, x, y, z, ...]` position buffer
    pub fn from_positions(positions: &[f32]) -> Option<Self> {
        let vertices: Vec<[f32; 3]> = positions
            .chunks_exact(3)
            .map(|p| [p[0], p[1], p[2]])
            .collect();

        (!vertices.is_empty()).then(|| Self::from_vertices(&vertices))
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &AABB) -> Self {
        Self::new(
            Vector3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            Vector3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        )
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    /// Largest of the three box dimensions
    pub fn max_extent(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }

    /// Test ray-AABB intersection
    /// Returns the distance to intersection point, or None if no intersection
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vector3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let t_min = (self.min - ray.origin).mul_element_wise(inv_dir);
        let t_max = (self.max - ray.origin).mul_element_wise(inv_dir);

        let t1 = Vector3::new(
            t_min.x.min(t_max.x),
            t_min.y.min(t_max.y),
            t_min.z.min(t_max.z),
        );
        let t2 = Vector3::new(
            t_min.x.max(t_max.x),
            t_min.y.max(t_max.y),
            t_min.z.max(t_max.z),
        );

        let t_near = t1.x.max(t1.y.max(t1.z));
        let t_far = t2.x.min(t2.y.min(t2.z));

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }

    /// Apply a transformation matrix to the AABB
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        // Transform all 8 corners of the AABB and compute new bounds
        let corners = [
            Vector3::new(self.min.x, self.min.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.min.z),
            Vector3::new(self.min.x, self.max.y, self.min.z),
            Vector3::new(self.min.x, self.min.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.max.z),
            Vector3::new(self.min.x, self.max.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.max.z),
        ];

        let transformed_corners: Vec<[f32; 3]> = corners
            .iter()
            .map(|corner| {
                let transformed = matrix * Vector4::new(corner.x, corner.y, corner.z, 1.0);
                [
                    transformed.x / transformed.w,
                    transformed.y / transformed.w,
                    transformed.z / transformed.w,
                ]
            })
            .collect();

        Self::from_vertices(&transformed_corners)
    }
}

/// A node under the cursor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Node whose bounds the ray entered
    pub node: NodeId,
    /// Distance from the ray origin to intersection point
    pub distance: f32,
    /// World space intersection point
    pub intersection_point: Vector3<f32>,
}

/// Object picker for 3D mouse selection
pub struct ObjectPicker {
    /// Cached world-space bounds, keyed by node
    cached_aabbs: HashMap<NodeId, Option<AABB>>,
}

impl ObjectPicker {
    /// Create a new object picker
    pub fn new() -> Self {
        Self {
            cached_aabbs: HashMap::new(),
        }
    }

    /// Convert screen coordinates to a world-space ray
    pub fn screen_to_ray(
        &self,
        screen_pos: (f32, f32),
        screen_size: (f32, f32),
        camera: &OrbitCamera,
    ) -> Ray {
        let (mouse_x, mouse_y) = screen_pos;
        let (screen_width, screen_height) = screen_size;

        // Convert screen coordinates to normalized device coordinates (-1 to 1)
        let ndc_x = (2.0 * mouse_x) / screen_width - 1.0;
        let ndc_y = 1.0 - (2.0 * mouse_y) / screen_height; // Flip Y axis

        let view_proj_matrix = camera.build_view_projection_matrix();
        let inv_view_proj = view_proj_matrix
            .invert()
            .unwrap_or(Matrix4::from_scale(1.0));

        // Transform near and far points from NDC to world space
        let world_near = inv_view_proj * Vector4::new(ndc_x, ndc_y, -1.0, 1.0);
        let world_far = inv_view_proj * Vector4::new(ndc_x, ndc_y, 1.0, 1.0);

        // Convert from homogeneous coordinates
        let near_3d = Vector3::new(
            world_near.x / world_near.w,
            world_near.y / world_near.w,
            world_near.z / world_near.w,
        );
        let far_3d = Vector3::new(
            world_far.x / world_far.w,
            world_far.y / world_far.w,
            world_far.z / world_far.w,
        );

        Ray::new(near_3d, far_3d - near_3d)
    }

    /// Every node hit by the ray, nearest first
    pub fn pick_all(&mut self, ray: &Ray, scene: &Scene) -> Vec<PickHit> {
        let mut hits = Vec::new();

        for (id, _) in scene.iter() {
            let world_aabb = *self
                .cached_aabbs
                .entry(id)
                .or_insert_with(|| scene.world_bounds(id));

            let Some(aabb) = world_aabb else {
                continue;
            };

            if let Some(distance) = aabb.intersect_ray(ray) {
                hits.push(PickHit {
                    node: id,
                    distance,
                    intersection_point: ray.point_at(distance),
                });
            }
        }

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Pick the nearest node under the mouse
    pub fn pick_node(
        &mut self,
        screen_pos: (f32, f32),
        screen_size: (f32, f32),
        camera: &OrbitCamera,
        scene: &Scene,
    ) -> Option<PickHit> {
        let ray = self.screen_to_ray(screen_pos, screen_size, camera);
        self.pick_all(&ray, scene).into_iter().next()
    }

    /// Invalidate cached bounds (call when transforms change)
    pub fn invalidate_cache(&mut self) {
        self.cached_aabbs.clear();
    }

    /// Invalidate bounds for a specific node
    pub fn invalidate_node(&mut self, node: NodeId) {
        self.cached_aabbs.remove(&node);
    }
}

impl Default for ObjectPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::gfx::scene::SceneNode;

    fn unit_box() -> AABB {
        AABB::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_aabb_creation() {
        let vertices = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [-1.0, -1.0, -1.0]];
        let aabb = AABB::from_vertices(&vertices);

        assert_eq!(aabb.min, Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(aabb.max, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(AABB::from_positions(&[]), None);
    }

    #[test]
    fn test_aabb_extent_and_union() {
        let a = AABB::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 1.0, 1.0));
        let b = AABB::new(Vector3::new(-1.0, 0.0, 0.0), Vector3::new(0.0, 4.0, 1.0));
        let merged = a.union(&b);

        assert_eq!(merged.min, Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(merged.max, Vector3::new(2.0, 4.0, 1.0));
        assert_eq!(merged.center(), Vector3::new(0.5, 2.0, 0.5));
        assert_eq!(merged.max_extent(), 4.0);
    }

    #[test]
    fn test_ray_aabb_intersection() {
        let aabb = unit_box();

        // Ray hitting the box
        let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(aabb.intersect_ray(&ray), Some(4.0));

        // Ray missing the box
        let ray_miss = Ray::new(Vector3::new(5.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(aabb.intersect_ray(&ray_miss).is_none());
    }

    #[test]
    fn test_pick_all_orders_hits_nearest_first() {
        let mut scene = Scene::new("root");
        let root = scene.root();
        let far = scene
            .add_node(
                root,
                SceneNode::new("far")
                    .with_bounds(unit_box())
                    .with_translation(Vector3::new(0.0, 0.0, -4.0)),
            )
            .unwrap();
        let near = scene
            .add_node(root, SceneNode::new("near").with_bounds(unit_box()))
            .unwrap();
        scene
            .add_node(
                root,
                SceneNode::new("aside")
                    .with_bounds(unit_box())
                    .with_translation(Vector3::new(10.0, 0.0, 0.0)),
            )
            .unwrap();

        let ray = Ray::new(Vector3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, -1.0));
        let hits = ObjectPicker::new().pick_all(&ray, &scene);

        let order: Vec<NodeId> = hits.iter().map(|hit| hit.node).collect();
        assert_eq!(order, vec![near, far]);
        assert_eq!(hits[0].intersection_point, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_screen_center_ray_hits_target() {
        let mut scene = Scene::new("root");
        let root = scene.root();
        let cube = scene
            .add_node(root, SceneNode::new("cube").with_bounds(unit_box()))
            .unwrap();

        let camera = OrbitCamera::new(6.0, 0.0, 0.0, Vector3::zero(), 1.0);
        let mut picker = ObjectPicker::new();

        let hit = picker.pick_node((400.0, 400.0), (800.0, 800.0), &camera, &scene);
        assert_eq!(hit.map(|h| h.node), Some(cube));

        let miss = picker.pick_node((2.0, 2.0), (800.0, 800.0), &camera, &scene);
        assert!(miss.is_none());
    }
}
