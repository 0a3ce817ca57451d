// src/ui/panel.rs
//! Default UI panels for the model inspector
//!
//! Panels only read the published [`InspectorViewModel`] and report what the
//! user did as [`InspectorIntent`]s; the viewer applies them afterwards.

use imgui::{Condition, Ui};

use crate::inspector::{InspectorIntent, InspectorViewModel, MetadataField, MetadataRecord};

/// Inspector panel showing the selected part and its annotation
///
/// While editing, the four annotation fields become text inputs and a Save
/// button is offered. Without a selection neither Edit nor Save is shown.
///
/// # Arguments
/// * `ui` - ImGui UI context
/// * `view` - View model published by the inspector
pub fn inspector_panel(ui: &Ui, view: &InspectorViewModel) -> Vec<InspectorIntent> {
    let mut intents = Vec::new();

    let display_size = ui.io().display_size;
    // Guard against invalid display size that could cause crashes
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return intents;
    }
    let panel_width = (display_size[0] * 0.25).clamp(280.0, 420.0);

    ui.window("Inspector")
        .size([panel_width, 320.0], Condition::FirstUseEver)
        .position(
            [display_size[0] - panel_width - 20.0, 20.0],
            Condition::FirstUseEver,
        )
        .resizable(true)
        .collapsible(true)
        .build(|| match &view.selected_name {
            Some(name) => {
                ui.text(format!("Selected: {}", name));
                ui.separator();
                if view.is_editing {
                    render_edit_form(ui, &view.record, &mut intents);
                } else {
                    render_record(ui, &view.record, &mut intents);
                }
            }
            None => render_empty_state(ui),
        });

    intents
}

/// "Reset View" button pinned to the top-left corner
pub fn reset_view_button(ui: &Ui) -> Option<InspectorIntent> {
    ui.window("##reset_view")
        .position([20.0, 20.0], Condition::Always)
        .title_bar(false)
        .resizable(false)
        .movable(false)
        .scroll_bar(false)
        .always_auto_resize(true)
        .build(|| ui.button("Reset View"))
        .filter(|clicked| *clicked)
        .map(|_| InspectorIntent::ResetViewRequested)
}

/// Inspector panel plus reset button, as one frame's worth of UI
pub fn default_inspector_ui(ui: &Ui, view: &InspectorViewModel) -> Vec<InspectorIntent> {
    let mut intents: Vec<InspectorIntent> = reset_view_button(ui).into_iter().collect();
    intents.extend(inspector_panel(ui, view));
    intents
}

/// Read-only record with an Edit button
fn render_record(ui: &Ui, record: &MetadataRecord, intents: &mut Vec<InspectorIntent>) {
    for field in MetadataField::ALL {
        let value = record.get(field);
        let shown = if value.is_empty() { "-" } else { value };
        ui.text(format!("{}: {}", field.label(), shown));
    }

    ui.spacing();
    if ui.button("Edit") {
        intents.push(InspectorIntent::EditRequested);
    }
}

/// Text inputs for every field with a Save button
fn render_edit_form(ui: &Ui, record: &MetadataRecord, intents: &mut Vec<InspectorIntent>) {
    for field in MetadataField::ALL {
        let mut value = record.get(field).to_string();
        if ui.input_text(field.label(), &mut value).build() {
            intents.push(InspectorIntent::FieldChanged { field, value });
        }
    }

    ui.spacing();
    if ui.button("Save") {
        intents.push(InspectorIntent::SaveRequested);
    }
}

fn render_empty_state(ui: &Ui) {
    ui.text("Nothing selected");
    ui.text("Click a part of the model to inspect it");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panels_render_without_input() {
        let mut context = imgui::Context::create();
        context.set_ini_filename(None);
        context.io_mut().display_size = [1280.0, 720.0];
        context.fonts().build_rgba32_texture();

        let views = [
            InspectorViewModel::default(),
            InspectorViewModel {
                selected_name: Some("Roof".to_string()),
                record: MetadataRecord::default().with(MetadataField::Material, "Shingle"),
                is_editing: false,
            },
            InspectorViewModel {
                selected_name: Some("Roof".to_string()),
                record: MetadataRecord::default(),
                is_editing: true,
            },
        ];

        for view in &views {
            let ui = context.new_frame();
            let intents = default_inspector_ui(ui, view);
            assert!(intents.is_empty());
            context.render();
        }
    }
}
