//! # Model Inspector Demo
//!
//! Runs a scripted inspection session without a window: click parts of a
//! model, annotate one, save it, then reset the view.
//!
//! ## Usage:
//! ```bash
//! cargo run --example inspect                  # procedural house
//! cargo run --example inspect -- model.obj     # your own OBJ file
//! RUST_LOG=debug cargo run --example inspect   # every transition
//! ```

use anyhow::{Context, Result};
use log::info;
use model_inspector::gfx::resources::material::Color;
use model_inspector::prelude::*;

const VIEWPORT: (u32, u32) = (1280, 720);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut viewer = match std::env::args().nth(1) {
        Some(path) => ModelViewer::load(&path, InspectorConfig::default())
            .with_context(|| format!("failed to load model '{}'", path))?,
        None => ModelViewer::from_scene(
            build_house().context("failed to build the demo house")?,
            InspectorConfig::default(),
        ),
    };
    viewer.resize(VIEWPORT.0, VIEWPORT.1);

    let stats = viewer.scene().get_statistics();
    info!(
        "Parts: {:?} ({} triangles)",
        viewer.scene().get_node_names(),
        stats.total_triangles
    );

    // Sweep the screen until two different parts were picked
    let mut picked = Vec::new();
    for (x, y) in scan_points() {
        if let Some(node) = viewer.click((x, y)) {
            info!("Click at ({:.0}, {:.0}) -> {:?}", x, y, viewer.view_model());
            if !picked.contains(&node) {
                picked.push(node);
            }
            if picked.len() == 2 {
                break;
            }
        }
    }

    if viewer.view_model().selected_name.is_some() {
        viewer.handle_intent(InspectorIntent::EditRequested);
        for (field, value) in [
            (MetadataField::Material, "Oak"),
            (MetadataField::Cost, "1250"),
            (MetadataField::Dimensions, "2.0 x 1.0 x 0.1"),
        ] {
            viewer.handle_intent(InspectorIntent::FieldChanged {
                field,
                value: value.to_string(),
            });
        }
        info!("Editing -> {:?}", viewer.view_model());
        viewer.handle_intent(InspectorIntent::SaveRequested);
        info!("Saved -> {:?}", viewer.view_model());
    } else {
        info!("Nothing selected, skipping annotation");
    }

    viewer.handle_intent(InspectorIntent::ResetViewRequested);
    info!("After reset -> {:?}", viewer.view_model());
    info!("Saved annotations: {}", viewer.inspector().store().len());

    Ok(())
}

/// Screen points on a coarse grid, center first
fn scan_points() -> Vec<(f32, f32)> {
    let (width, height) = (VIEWPORT.0 as f32, VIEWPORT.1 as f32);
    let mut points = vec![(width / 2.0, height / 2.0)];
    for row in 1..8 {
        for col in 1..8 {
            points.push((width * col as f32 / 8.0, height * row as f32 / 8.0));
        }
    }
    points
}

/// A small house: walls, a door, a roof and an unnamed part
fn build_house() -> Result<Scene> {
    const BRICK: Color = [0.6, 0.2, 0.1, 1.0];
    const WOOD: Color = [0.45, 0.3, 0.15, 1.0];
    const SHINGLE: Color = [0.3, 0.3, 0.35, 1.0];
    const GLASS: Color = [0.7, 0.85, 0.95, 0.4];

    let mut scene = Scene::new("House");
    let root = scene.root();

    let part = |name: &str, color: Color, min: [f32; 3], max: [f32; 3]| {
        SceneNode::new(name)
            .with_appearance(Appearance::new(name, color))
            .with_bounds(AABB::new(Vector3::from(min), Vector3::from(max)))
    };

    let walls = scene.add_node(root, part("Walls", BRICK, [-2.0, 0.0, -1.5], [2.0, 2.0, 1.5]))?;
    scene.add_node(walls, part("Door", WOOD, [-0.4, 0.0, 1.5], [0.4, 1.6, 1.6]))?;
    scene.add_node(root, part("Roof", SHINGLE, [-2.2, 2.0, -1.7], [2.2, 3.2, 1.7]))?;
    scene.add_node(root, part("", GLASS, [1.0, 0.8, 1.5], [1.6, 1.4, 1.6]))?;

    Ok(scene)
}
