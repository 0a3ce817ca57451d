//! Inspector configuration

use crate::gfx::resources::material::{Rgb, HIGHLIGHT_RGB};

/// Label shown for nodes whose name is empty
pub const UNNAMED_OBJECT: &str = "Unnamed Object";

/// What makes two picks "the same selection"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionIdentity {
    /// Two nodes with the same display name are the same selection.
    /// Re-picking any node carrying the selected name deselects.
    #[default]
    DisplayName,
    /// Only the very same node deselects; display names are presentational.
    Node,
}

/// Settings for [`InspectorController`](super::InspectorController)
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorConfig {
    pub highlight_color: Rgb,
    pub unnamed_label: String,
    pub identity: SelectionIdentity,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            highlight_color: HIGHLIGHT_RGB,
            unnamed_label: UNNAMED_OBJECT.to_string(),
            identity: SelectionIdentity::DisplayName,
        }
    }
}

impl InspectorConfig {
    /// Builder pattern: Set the highlight color
    pub fn with_highlight_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.highlight_color = [r, g, b];
        self
    }

    /// Builder pattern: Set the label used for unnamed nodes
    pub fn with_unnamed_label(mut self, label: impl Into<String>) -> Self {
        self.unnamed_label = label.into();
        self
    }

    /// Builder pattern: Set how reselection is detected
    pub fn with_identity(mut self, identity: SelectionIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Name under which a node is selected and annotated
    pub fn display_name<'a>(&'a self, raw: &'a str) -> &'a str {
        if raw.is_empty() {
            &self.unnamed_label
        } else {
            raw
        }
    }
}
