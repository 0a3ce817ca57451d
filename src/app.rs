use std::path::Path;

use cgmath::Vector3;
use log::{debug, info};

use crate::gfx::{
    camera::{CameraFraming, CameraManager},
    picking::{ObjectPicker, PickHit},
    scene::{NodeId, Scene, SceneError},
};
use crate::inspector::{
    InspectorConfig, InspectorController, InspectorIntent, InspectorViewModel, PickEvent,
};
use crate::ui;

/// Viewer holding a model, its camera and the inspector
///
/// Window creation, rendering and raw input decoding belong to the host;
/// it forwards clicks, resizes and the ImGui frame here.
pub struct ModelViewer {
    scene: Scene,
    camera: CameraManager,
    picker: ObjectPicker,
    inspector: InspectorController,
    viewport: (f32, f32),
}

impl ModelViewer {
    /// Loads an OBJ file and frames the camera on it
    pub fn load(path: impl AsRef<Path>, config: InspectorConfig) -> Result<Self, SceneError> {
        let scene = Scene::load_obj(path)?;
        Ok(Self::from_scene(scene, config))
    }

    /// Centers `scene` on the origin and frames the camera on it
    ///
    /// The framing becomes the target of every later reset. A scene without
    /// geometry keeps the camera default.
    pub fn from_scene(mut scene: Scene, config: InspectorConfig) -> Self {
        let mut camera = CameraManager::default();
        camera.camera.bounds.min_distance = Some(1.1);

        if let Some(bounds) = scene.bounds() {
            let center = bounds.center();
            let root = scene.root();
            if let Some(root) = scene.node_mut(root) {
                root.translate(-center);
            }
        }

        match scene.bounds().as_ref().and_then(CameraFraming::from_bounds) {
            Some(framing) => camera.frame(framing),
            None => info!(
                "Scene '{}' has no geometry, keeping default camera",
                scene_name(&scene)
            ),
        }

        let stats = scene.get_statistics();
        info!(
            "Viewer ready: {} nodes, {} appearances, {} triangles",
            stats.node_count, stats.appearance_count, stats.total_triangles
        );

        Self {
            scene,
            camera,
            picker: ObjectPicker::new(),
            inspector: InspectorController::new(config),
            viewport: (1.0, 1.0),
        }
    }

    /// Handles a click at `screen_pos` (pixels, origin top-left)
    ///
    /// Returns the node that handled the pick, if any.
    pub fn click(&mut self, screen_pos: (f32, f32)) -> Option<NodeId> {
        let ray = self
            .picker
            .screen_to_ray(screen_pos, self.viewport, &self.camera.camera);
        let hits = self.picker.pick_all(&ray, &self.scene);
        debug!("click at {:?}: {} hits", screen_pos, hits.len());
        self.dispatch_pick(&hits)
    }

    /// Offers one pick event to the hits in order until it is handled
    pub fn dispatch_pick(&mut self, hits: &[PickHit]) -> Option<NodeId> {
        let mut hits = hits.iter();
        let mut event = PickEvent::from(hits.next()?);

        loop {
            if self.inspector.on_pick(&mut self.scene, &mut event) {
                return Some(event.node);
            }
            if event.is_propagation_stopped() {
                return None;
            }
            event.retarget(hits.next()?);
        }
    }

    /// Restores camera, selection and colors
    pub fn reset_view(&mut self) {
        self.inspector.on_reset(&mut self.scene, &mut self.camera);
    }

    /// Applies a request coming from the inspector panel
    pub fn handle_intent(&mut self, intent: InspectorIntent) -> bool {
        debug!("intent: {:?}", intent);
        match intent {
            InspectorIntent::ResetViewRequested => {
                self.reset_view();
                true
            }
            InspectorIntent::EditRequested => self.inspector.on_edit_start(),
            InspectorIntent::FieldChanged { field, value } => {
                self.inspector.on_field_change(field, value)
            }
            InspectorIntent::SaveRequested => self.inspector.on_save(),
        }
    }

    /// Builds the inspector UI for this frame and applies what the user did
    pub fn draw_ui(&mut self, ui: &imgui::Ui) {
        let intents = ui::default_inspector_ui(ui, self.inspector.view_model());
        for intent in intents {
            self.handle_intent(intent);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = (width as f32, height as f32);
        self.camera.camera.resize_projection(width, height);
    }

    /// Moves a node and drops the cached pick bounds of its subtree
    pub fn translate_node(&mut self, node: NodeId, translation: Vector3<f32>) -> bool {
        let Some(scene_node) = self.scene.node_mut(node) else {
            return false;
        };
        scene_node.translate(translation);
        for moved in self.scene.descendants(node) {
            self.picker.invalidate_node(moved);
        }
        true
    }

    pub fn view_model(&self) -> &InspectorViewModel {
        self.inspector.view_model()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &CameraManager {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraManager {
        &mut self.camera
    }

    pub fn inspector(&self) -> &InspectorController {
        &self.inspector
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }
}

fn scene_name(scene: &Scene) -> &str {
    scene
        .node(scene.root())
        .map(|root| root.name.as_str())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::gfx::{
        picking::AABB,
        resources::material::{Appearance, Color},
        scene::SceneNode,
    };
    use crate::inspector::MetadataField;

    use cgmath::InnerSpace;

    const RED: Color = [0.8, 0.1, 0.1, 1.0];
    const GREY: Color = [0.5, 0.5, 0.5, 1.0];
    const GOLD: Color = [1.0, 0.84, 0.0, 1.0];

    /// Two slabs stacked along Z, the whole model offset by +10 on X
    fn slabs() -> (Scene, NodeId, NodeId) {
        let mut scene = Scene::new("Slabs");
        let root = scene.root();
        let front = scene
            .add_node(
                root,
                SceneNode::new("Front")
                    .with_appearance(Appearance::new("paint", RED))
                    .with_bounds(AABB::new(
                        Vector3::new(9.5, -1.0, 0.5),
                        Vector3::new(10.5, 1.0, 1.0),
                    )),
            )
            .unwrap();
        let back = scene
            .add_node(
                root,
                SceneNode::new("Back")
                    .with_appearance(Appearance::new("concrete", GREY))
                    .with_bounds(AABB::new(
                        Vector3::new(9.5, -1.0, -1.0),
                        Vector3::new(10.5, 1.0, -0.5),
                    )),
            )
            .unwrap();
        (scene, front, back)
    }

    fn viewer() -> (ModelViewer, NodeId, NodeId) {
        let (scene, front, back) = slabs();
        let mut viewer = ModelViewer::from_scene(scene, InspectorConfig::default());
        viewer.resize(800, 600);
        (viewer, front, back)
    }

    fn color(viewer: &ModelViewer, node: NodeId) -> Color {
        let node = viewer.scene().node(node).unwrap();
        node.appearances[0].base_color.unwrap()
    }

    #[test]
    fn test_load_centers_and_frames() {
        let (viewer, _, _) = viewer();

        let bounds = viewer.scene().bounds().unwrap();
        assert!(bounds.center().magnitude() < 1e-5);

        let framing = viewer.camera().framing().unwrap();
        assert!((framing.distance - 3.0).abs() < 1e-5);
        assert!(framing.target.magnitude() < 1e-5);

        let eye = viewer.camera().camera.eye;
        assert!((eye - Vector3::new(0.0, 0.0, 3.0)).magnitude() < 1e-5);
    }

    #[test]
    fn test_empty_scene_keeps_default_camera() {
        let viewer = ModelViewer::from_scene(Scene::new("Empty"), InspectorConfig::default());
        assert!(viewer.camera().framing().is_none());
        assert_eq!(viewer.camera().camera.distance, 5.0);
    }

    #[test]
    fn test_empty_scene_reset_returns_to_starting_camera() {
        let mut viewer = ModelViewer::from_scene(Scene::new("Empty"), InspectorConfig::default());
        let initial = viewer.camera().camera.state();

        let manager = viewer.camera_mut();
        manager.camera.add_yaw(0.9);
        manager.camera.add_distance(2.0);

        viewer.reset_view();
        assert_eq!(viewer.camera().camera.state(), initial);
        assert_eq!(viewer.view_model(), &InspectorViewModel::default());
    }

    #[test]
    fn test_click_handles_nearest_hit_only() {
        let (mut viewer, front, back) = viewer();

        assert_eq!(viewer.click((400.0, 300.0)), Some(front));
        assert_eq!(viewer.view_model().selected_name.as_deref(), Some("Front"));
        assert_eq!(color(&viewer, front), GOLD);
        assert_eq!(color(&viewer, back), GREY);
    }

    #[test]
    fn test_click_on_empty_space_does_nothing() {
        let (mut viewer, front, _) = viewer();

        assert_eq!(viewer.click((2.0, 2.0)), None);
        assert_eq!(viewer.view_model(), &InspectorViewModel::default());
        assert_eq!(color(&viewer, front), RED);
    }

    #[test]
    fn test_stale_hit_propagates_to_next_node() {
        let (mut viewer, _, back) = viewer();
        let stale = NodeId(99);
        let hits = [
            PickHit {
                node: stale,
                distance: 1.0,
                intersection_point: Vector3::new(0.0, 0.0, 1.0),
            },
            PickHit {
                node: back,
                distance: 2.5,
                intersection_point: Vector3::new(0.0, 0.0, -0.5),
            },
        ];

        assert_eq!(viewer.dispatch_pick(&hits), Some(back));
        assert_eq!(viewer.view_model().selected_name.as_deref(), Some("Back"));
    }

    #[test]
    fn test_intents_drive_edit_and_save() {
        let (mut viewer, _, _) = viewer();
        viewer.click((400.0, 300.0));

        assert!(viewer.handle_intent(InspectorIntent::EditRequested));
        assert!(viewer.handle_intent(InspectorIntent::FieldChanged {
            field: MetadataField::Cost,
            value: "120".to_string(),
        }));
        assert!(viewer.handle_intent(InspectorIntent::SaveRequested));

        assert!(!viewer.view_model().is_editing);
        assert_eq!(
            viewer.inspector().store().get("Front").unwrap().get(MetadataField::Cost),
            "120"
        );
    }

    #[test]
    fn test_reset_intent_restores_camera_and_colors() {
        let (mut viewer, front, _) = viewer();
        let framed = viewer.camera().camera.state();

        viewer.click((400.0, 300.0));
        if let Some(controller) = viewer.camera.controller.as_ref() {
            controller.rotate((120.0, -40.0), &mut viewer.camera.camera);
        }
        assert_ne!(viewer.camera().camera.state(), framed);

        assert!(viewer.handle_intent(InspectorIntent::ResetViewRequested));
        assert_eq!(viewer.camera().camera.state(), framed);
        assert_eq!(color(&viewer, front), RED);
        assert_eq!(viewer.view_model(), &InspectorViewModel::default());
    }

    #[test]
    fn test_translate_node_refreshes_pick_bounds() {
        let (mut viewer, front, back) = viewer();
        assert_eq!(viewer.click((400.0, 300.0)), Some(front));
        viewer.reset_view();

        // Move the front slab out of the line of sight
        assert!(viewer.translate_node(front, Vector3::new(0.0, 50.0, 0.0)));
        assert_eq!(viewer.click((400.0, 300.0)), Some(back));
        viewer.reset_view();

        // Moving the root moves every part below it
        let root = viewer.scene().root();
        assert!(viewer.translate_node(root, Vector3::new(50.0, 0.0, 0.0)));
        assert_eq!(viewer.click((400.0, 300.0)), None);
    }
}
