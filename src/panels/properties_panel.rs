use crate::DesignerApp;
use crate::command::Command;
use crate::element::property::ANGLE_RANGE;
use crate::element::{PropertyKey, PropertyValue};

/// Editor widget for one property; returns the new value when the user changed it
fn property_row(
    ui: &mut egui::Ui,
    app: &DesignerApp,
    key: PropertyKey,
    value: PropertyValue,
) -> Option<PropertyValue> {
    ui.label(key.label());
    let canvas = app.editor().config().canvas_size as i32;

    let edited = match value {
        PropertyValue::Int(mut v) => {
            let range = match key {
                PropertyKey::StrokeWidth => 1..=20,
                PropertyKey::Radius => 1..=canvas / 2,
                PropertyKey::Width | PropertyKey::Height => 1..=canvas,
                _ => 0..=canvas,
            };
            if key == PropertyKey::Size {
                let mut size = v;
                egui::ComboBox::from_id_salt("size_property")
                    .selected_text(size.to_string())
                    .show_ui(ui, |ui| {
                        for allowed in &app.editor().config().font_sizes {
                            ui.selectable_value(&mut size, i32::from(*allowed), allowed.to_string());
                        }
                    });
                (size != v).then_some(PropertyValue::Int(size))
            } else {
                ui.add(egui::DragValue::new(&mut v).range(range))
                    .changed()
                    .then_some(PropertyValue::Int(v))
            }
        }
        PropertyValue::Float(mut v) => ui
            .add(
                egui::DragValue::new(&mut v)
                    .range(ANGLE_RANGE)
                    .speed(0.01)
                    .max_decimals(4),
            )
            .changed()
            .then_some(PropertyValue::Float(v)),
        PropertyValue::Bool(mut v) => ui
            .checkbox(&mut v, "")
            .changed()
            .then_some(PropertyValue::Bool(v)),
        PropertyValue::Text(mut v) => ui
            .text_edit_singleline(&mut v)
            .changed()
            .then(|| PropertyValue::Text(v)),
        PropertyValue::Color(current) => {
            let mut picked = current;
            let name = app
                .editor()
                .config()
                .color_name(current)
                .map(str::to_owned)
                .unwrap_or_else(|| current.to_string());
            egui::ComboBox::from_id_salt("color_property")
                .selected_text(name)
                .show_ui(ui, |ui| {
                    for entry in &app.editor().config().palette {
                        ui.selectable_value(&mut picked, entry.color, entry.name.as_str());
                    }
                });
            (picked != current).then_some(PropertyValue::Color(picked))
        }
    };
    ui.end_row();
    edited
}

pub fn properties_panel(app: &mut DesignerApp, ctx: &egui::Context) {
    egui::SidePanel::right("properties_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Properties");

            let Some(index) = app.editor().scene().selected_index() else {
                ui.label("Select a shape to edit it.");
                return;
            };
            let Some(shape) = app.editor().scene().get(index).cloned() else {
                return;
            };

            ui.label(format!("{} {}", shape.kind().label(), index + 1));
            ui.separator();

            let mut edits = Vec::new();
            egui::Grid::new("properties_grid")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    for &key in shape.property_keys() {
                        let Some(value) = shape.property(key) else {
                            continue;
                        };
                        if let Some(value) = property_row(ui, app, key, value) {
                            edits.push(Command::SetProperty { index, key, value });
                        }
                    }
                });

            for edit in edits {
                app.execute_command(edit);
            }

            if let Some(error) = app.last_error() {
                ui.separator();
                ui.colored_label(ui.visuals().error_fg_color, error);
            }
        });
}
