//! Selection & annotation controller
//!
//! Owns the selection state, the highlight side table, the metadata store
//! and the edit buffer. Every public operation runs to completion, then
//! publishes a fresh [`InspectorViewModel`] for the UI to render.

use log::{debug, info};

use crate::gfx::{camera::CameraManager, scene::Scene};

use super::{
    config::InspectorConfig,
    events::PickEvent,
    highlight::HighlightEngine,
    metadata::{EditBuffer, MetadataField, MetadataRecord, MetadataStore, UnknownFieldError},
    selection::{SelectionChange, SelectionState},
};

/// Read-only snapshot the inspector panel renders from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectorViewModel {
    pub selected_name: Option<String>,
    pub record: MetadataRecord,
    pub is_editing: bool,
}

pub struct InspectorController {
    config: InspectorConfig,
    highlighter: HighlightEngine,
    selection: SelectionState,
    store: MetadataStore,
    buffer: EditBuffer,
    editing: bool,
    published: InspectorViewModel,
}

impl InspectorController {
    pub fn new(config: InspectorConfig) -> Self {
        Self {
            highlighter: HighlightEngine::new(config.highlight_color),
            config,
            selection: SelectionState::idle(),
            store: MetadataStore::new(),
            buffer: EditBuffer::default(),
            editing: false,
            published: InspectorViewModel::default(),
        }
    }

    /// Handles a node-picked event
    ///
    /// Returns `false` when the event was ignored: its propagation was
    /// already stopped, or it names a node that is no longer in the scene.
    pub fn on_pick(&mut self, scene: &mut Scene, event: &mut PickEvent) -> bool {
        if event.is_propagation_stopped() {
            return false;
        }
        let Some(node) = scene.node(event.node) else {
            debug!("ignoring pick on stale node {}", event.node);
            return false;
        };

        let name = self.config.display_name(&node.name).to_string();
        let transition = self
            .selection
            .on_pick(event.node, &name, self.config.identity);

        if let Some(previous) = transition.restore {
            self.highlighter.restore_original(scene, previous);
        }

        match &transition.change {
            SelectionChange::Deselected { name } => {
                debug!("deselected '{}'", name);
                self.buffer.clear();
            }
            SelectionChange::Selected { name, node } => {
                debug!("selected '{}' ({})", name, node);
                let record = self.store.load_or_create(name).clone();
                self.buffer.load(record);
            }
        }
        self.editing = false;
        self.selection = transition.state;

        self.highlighter.apply_highlight(scene, event.node);
        event.stop_propagation();

        self.publish();
        true
    }

    /// Returns camera, selection and every node color to their initial state
    pub fn on_reset(&mut self, scene: &mut Scene, camera: &mut CameraManager) {
        info!("Resetting view");
        camera.reset_view();

        self.selection = SelectionState::idle();
        self.editing = false;
        self.buffer.clear();
        let root = scene.root();
        self.highlighter.restore_all(scene, root);

        self.publish();
    }

    /// Enters edit mode; only possible while something is selected
    pub fn on_edit_start(&mut self) -> bool {
        if self.selection.is_idle() {
            debug!("edit requested without a selection");
            return false;
        }
        self.editing = true;
        self.publish();
        true
    }

    /// Changes one field of the edit buffer; ignored outside edit mode
    pub fn on_field_change(&mut self, field: MetadataField, value: impl Into<String>) -> bool {
        if !self.editing {
            debug!("field '{}' changed outside edit mode", field);
            return false;
        }
        self.buffer.set_field(field, value);
        self.publish();
        true
    }

    /// Changes a field given by its form key (`"name"`, `"material"`, ...)
    ///
    /// Unknown keys are an error; known keys behave like
    /// [`on_field_change`](Self::on_field_change).
    pub fn on_field_change_named(
        &mut self,
        field: &str,
        value: impl Into<String>,
    ) -> Result<bool, UnknownFieldError> {
        let field = field.parse::<MetadataField>()?;
        Ok(self.on_field_change(field, value))
    }

    /// Commits the edit buffer under the selected name and leaves edit mode
    pub fn on_save(&mut self) -> bool {
        let Some(name) = self.selection.selected_name() else {
            debug!("save requested without a selection");
            return false;
        };

        self.store.commit(name, self.buffer.record().clone());
        self.buffer.mark_saved();
        self.editing = false;
        debug!("saved metadata for '{}'", name);

        self.publish();
        true
    }

    fn publish(&mut self) {
        self.published = InspectorViewModel {
            selected_name: self.selection.current_name.clone(),
            record: self.buffer.record().clone(),
            is_editing: self.editing,
        };
    }

    /// The view model published after the last operation
    pub fn view_model(&self) -> &InspectorViewModel {
        &self.published
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn store(&self) -> &MetadataStore {
        &self.store
    }

    pub fn edit_buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn highlighter(&self) -> &HighlightEngine {
        &self.highlighter
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }
}

impl Default for InspectorController {
    fn default() -> Self {
        Self::new(InspectorConfig::default())
    }
}
