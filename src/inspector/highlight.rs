//! # Highlight Engine
//!
//! Recolors nodes to mark them as selected while guaranteeing that their
//! original colors can always be put back.
//!
//! Original colors are kept in a side table owned by the engine, keyed by
//! node and material slot. A slot's entry is written the first time the slot
//! is highlighted and is never overwritten afterwards; every restore reads
//! from it.

use std::collections::HashMap;

use log::debug;

use crate::gfx::{
    resources::material::{Color, Rgb},
    scene::{NodeId, Scene},
};

/// One material slot of one node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppearanceKey {
    pub node: NodeId,
    pub slot: usize,
}

pub struct HighlightEngine {
    highlight: Rgb,
    originals: HashMap<AppearanceKey, Color>,
}

impl HighlightEngine {
    pub fn new(highlight: Rgb) -> Self {
        Self {
            highlight,
            originals: HashMap::new(),
        }
    }

    pub fn highlight_color(&self) -> Rgb {
        self.highlight
    }

    /// Toggles the highlight on every colored slot of `node`
    ///
    /// A slot showing the highlight color goes back to its cached original;
    /// any other slot is cached (first time only) and painted with the
    /// highlight color. Nodes without colored slots and stale ids are left
    /// alone.
    pub fn apply_highlight(&mut self, scene: &mut Scene, node: NodeId) {
        let highlight = self.highlight;
        let Some(scene_node) = scene.node_mut(node) else {
            debug!("highlight skipped: {} is not in the scene", node);
            return;
        };

        for (slot, appearance) in scene_node.appearances.iter_mut().enumerate() {
            let Some(color) = appearance.base_color else {
                continue;
            };

            let original = *self
                .originals
                .entry(AppearanceKey { node, slot })
                .or_insert(color);

            if appearance.has_rgb(highlight) {
                appearance.base_color = Some(original);
            } else {
                appearance.set_rgb(highlight);
            }
        }
    }

    /// Puts the cached original color back on every slot of `node`
    ///
    /// Slots that were never highlighted have no cache entry and keep their
    /// current color.
    pub fn restore_original(&self, scene: &mut Scene, node: NodeId) {
        let Some(scene_node) = scene.node_mut(node) else {
            return;
        };

        for (slot, appearance) in scene_node.appearances.iter_mut().enumerate() {
            if appearance.base_color.is_none() {
                continue;
            }
            if let Some(original) = self.originals.get(&AppearanceKey { node, slot }) {
                appearance.base_color = Some(*original);
            }
        }
    }

    /// Restores `root` and every node below it
    pub fn restore_all(&self, scene: &mut Scene, root: NodeId) {
        let nodes = scene.descendants(root);
        debug!("restoring original colors on {} nodes", nodes.len());
        for node in nodes {
            self.restore_original(scene, node);
        }
    }

    /// True when any slot of `node` currently shows the highlight color
    pub fn is_highlighted(&self, scene: &Scene, node: NodeId) -> bool {
        scene.node(node).is_some_and(|scene_node| {
            scene_node
                .appearances
                .iter()
                .any(|appearance| appearance.has_rgb(self.highlight))
        })
    }

    /// Cached original color of a slot, if it was ever highlighted
    pub fn original_color(&self, key: AppearanceKey) -> Option<Color> {
        self.originals.get(&key).copied()
    }

    pub fn cached_slot_count(&self) -> usize {
        self.originals.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::gfx::resources::material::{Appearance, HIGHLIGHT_RGB};
    use crate::gfx::scene::SceneNode;

    const BRICK: Color = [0.7, 0.3, 0.2, 1.0];
    const GLASS: Color = [0.2, 0.5, 0.9, 0.4];

    fn scene_with_window() -> (Scene, NodeId) {
        let mut scene = Scene::new("root");
        let root = scene.root();
        let window = scene
            .add_node(
                root,
                SceneNode::new("Window")
                    .with_appearance(Appearance::new("frame", BRICK))
                    .with_appearance(Appearance::new("glass", GLASS)),
            )
            .unwrap();
        (scene, window)
    }

    fn colors(scene: &Scene, node: NodeId) -> Vec<Option<Color>> {
        scene
            .node(node)
            .unwrap()
            .appearances
            .iter()
            .map(|a| a.base_color)
            .collect()
    }

    #[test]
    fn test_highlight_twice_is_reversible() {
        let (mut scene, window) = scene_with_window();
        let mut engine = HighlightEngine::new(HIGHLIGHT_RGB);

        engine.apply_highlight(&mut scene, window);
        assert_eq!(
            colors(&scene, window),
            vec![Some([1.0, 0.84, 0.0, 1.0]), Some([1.0, 0.84, 0.0, 0.4])]
        );
        assert!(engine.is_highlighted(&scene, window));

        engine.apply_highlight(&mut scene, window);
        assert_eq!(colors(&scene, window), vec![Some(BRICK), Some(GLASS)]);
        assert!(!engine.is_highlighted(&scene, window));
    }

    #[test]
    fn test_cache_is_written_once() {
        let (mut scene, window) = scene_with_window();
        let mut engine = HighlightEngine::new(HIGHLIGHT_RGB);
        let frame = AppearanceKey { node: window, slot: 0 };

        engine.apply_highlight(&mut scene, window);
        engine.apply_highlight(&mut scene, window);

        // Repaint the slot behind the engine's back, then cycle again
        scene.node_mut(window).unwrap().appearances[0].base_color = Some(GLASS);
        for _ in 0..3 {
            engine.apply_highlight(&mut scene, window);
            assert_eq!(engine.original_color(frame), Some(BRICK));
        }
        assert_eq!(engine.cached_slot_count(), 2);

        engine.restore_original(&mut scene, window);
        assert_eq!(colors(&scene, window), vec![Some(BRICK), Some(GLASS)]);
    }

    #[test]
    fn test_nodes_without_color_are_untouched() {
        let mut scene = Scene::new("root");
        let root = scene.root();
        let empty = scene.add_node(root, SceneNode::new("Empty")).unwrap();
        let shadow = scene
            .add_node(
                root,
                SceneNode::new("Shadow").with_appearance(Appearance::uncolored("depth")),
            )
            .unwrap();
        let mut engine = HighlightEngine::new(HIGHLIGHT_RGB);

        engine.apply_highlight(&mut scene, empty);
        engine.apply_highlight(&mut scene, shadow);
        engine.restore_all(&mut scene, root);

        assert_eq!(colors(&scene, shadow), vec![None]);
        assert_eq!(engine.cached_slot_count(), 0);
    }

    #[test]
    fn test_restore_original_without_cache_keeps_color() {
        let (mut scene, window) = scene_with_window();
        let engine = HighlightEngine::new(HIGHLIGHT_RGB);

        engine.restore_original(&mut scene, window);
        assert_eq!(colors(&scene, window), vec![Some(BRICK), Some(GLASS)]);
    }

    #[test]
    fn test_material_already_in_highlight_color() {
        let mut scene = Scene::new("root");
        let root = scene.root();
        let gold = scene
            .add_node(
                root,
                SceneNode::new("Gold")
                    .with_appearance(Appearance::new("gold", [1.0, 0.84, 0.0, 1.0])),
            )
            .unwrap();
        let mut engine = HighlightEngine::new(HIGHLIGHT_RGB);

        engine.apply_highlight(&mut scene, gold);
        assert_eq!(colors(&scene, gold), vec![Some([1.0, 0.84, 0.0, 1.0])]);
    }

    #[test]
    fn test_restore_all_covers_subtree() {
        let (mut scene, window) = scene_with_window();
        let pane = scene
            .add_node(
                window,
                SceneNode::new("Pane").with_appearance(Appearance::new("glass", GLASS)),
            )
            .unwrap();
        let mut engine = HighlightEngine::new(HIGHLIGHT_RGB);

        engine.apply_highlight(&mut scene, window);
        engine.apply_highlight(&mut scene, pane);
        let root = scene.root();
        engine.restore_all(&mut scene, root);

        assert_eq!(colors(&scene, window), vec![Some(BRICK), Some(GLASS)]);
        assert_eq!(colors(&scene, pane), vec![Some(GLASS)]);
    }

    #[test]
    fn test_stale_node_is_ignored() {
        let (mut scene, window) = scene_with_window();
        let mut engine = HighlightEngine::new(HIGHLIGHT_RGB);
        scene.remove_node(window);

        engine.apply_highlight(&mut scene, window);
        engine.restore_original(&mut scene, window);
        assert_eq!(engine.cached_slot_count(), 0);
    }
}
