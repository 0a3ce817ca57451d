//! Events consumed by the inspector

use crate::gfx::{picking::PickHit, scene::NodeId};

use super::metadata::MetadataField;

/// A "node picked" event coming from the rendering surface
///
/// The same event is offered to every node under the cursor, nearest first,
/// until a handler stops its propagation.
#[derive(Debug, Clone, PartialEq)]
pub struct PickEvent {
    pub node: NodeId,
    pub distance: Option<f32>,
    propagation_stopped: bool,
}

impl PickEvent {
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            distance: None,
            propagation_stopped: false,
        }
    }

    /// Points the event at the next node along the pick ray
    pub fn retarget(&mut self, hit: &PickHit) {
        self.node = hit.node;
        self.distance = Some(hit.distance);
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

impl From<&PickHit> for PickEvent {
    fn from(hit: &PickHit) -> Self {
        let mut event = Self::new(hit.node);
        event.distance = Some(hit.distance);
        event
    }
}

/// What the inspector panel asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectorIntent {
    ResetViewRequested,
    EditRequested,
    FieldChanged { field: MetadataField, value: String },
    SaveRequested,
}
