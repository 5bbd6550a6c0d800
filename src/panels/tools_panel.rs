use egui::{Button, RichText};

use crate::DesignerApp;
use crate::color::Rgb565;
use crate::command::Command;
use crate::scene::ReorderDirection;
use crate::tools::Tool;

fn swatch_text(name: &str, color: Rgb565) -> RichText {
    let text = if color.prefers_dark_text() {
        egui::Color32::BLACK
    } else {
        egui::Color32::WHITE
    };
    RichText::new(name).color(text)
}

pub fn tools_panel(app: &mut DesignerApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.editor().tool();
            for tool in Tool::ALL {
                if ui.selectable_label(active == Some(tool), tool.label()).clicked() {
                    log::info!("Tool selected from UI: {}", tool);
                    let next = if active == Some(tool) { None } else { Some(tool) };
                    app.editor_mut().set_tool(next);
                }
            }
            ui.separator();

            ui.label("Color");
            let palette = app.editor().config().palette.clone();
            let current = app.editor().style().color;
            ui.horizontal_wrapped(|ui| {
                for entry in &palette {
                    let button = Button::new(swatch_text(&entry.name, entry.color))
                        .fill(entry.color.to_color32())
                        .selected(entry.color == current);
                    let hover = format!("{} ({})", entry.color, entry.color.to_hex_rgb());
                    if ui.add(button).on_hover_text(hover).clicked() {
                        let result = app.editor_mut().set_color(entry.color);
                        app.record(result);
                    }
                }
            });

            let background = app.editor().background();
            let background_name = app
                .editor()
                .config()
                .color_name(background)
                .map(str::to_owned)
                .unwrap_or_else(|| background.to_string());
            egui::ComboBox::from_label("Background")
                .selected_text(background_name)
                .show_ui(ui, |ui| {
                    for entry in &palette {
                        if ui.selectable_label(entry.color == background, entry.name.as_str()).clicked() {
                            app.editor_mut().set_background(entry.color);
                        }
                    }
                });

            let font_sizes = app.editor().config().font_sizes.clone();
            let font_size = app.editor().style().font_size;
            egui::ComboBox::from_label("Text size")
                .selected_text(font_size.to_string())
                .show_ui(ui, |ui| {
                    for size in font_sizes {
                        if ui.selectable_label(size == font_size, size.to_string()).clicked() {
                            let result = app.editor_mut().set_font_size(size);
                            app.record(result);
                        }
                    }
                });

            let mut stroke_width = app.editor().style().stroke_width;
            ui.horizontal(|ui| {
                ui.label("Stroke width");
                if ui
                    .add(egui::DragValue::new(&mut stroke_width).range(1..=20))
                    .changed()
                {
                    app.editor_mut().set_stroke_width(stroke_width);
                }
            });

            let mut filled = app.editor().style().filled;
            let fillable = app
                .editor()
                .tool()
                .and_then(|tool| tool.shape_kind())
                .is_none_or(|kind| kind.can_fill());
            if ui
                .add_enabled(fillable, egui::Checkbox::new(&mut filled, "Filled"))
                .changed()
            {
                app.editor_mut().set_filled(filled);
            }
            ui.separator();

            ui.heading("Shapes");
            let selected = app.editor().scene().selected_index();
            let rows: Vec<String> = app
                .editor()
                .scene()
                .shapes()
                .iter()
                .enumerate()
                .map(|(i, shape)| format!("{} {}", shape.kind().label(), i + 1))
                .collect();

            let mut commands = Vec::new();
            egui::ScrollArea::vertical()
                .id_salt("shape_list")
                .max_height(240.0)
                .show(ui, |ui| {
                    for (index, row) in rows.iter().enumerate() {
                        ui.horizontal(|ui| {
                            if ui.selectable_label(selected == Some(index), row.as_str()).clicked() {
                                commands.push(Command::Select(Some(index)));
                            }
                            if ui.small_button("⬆").on_hover_text("Draw later").clicked() {
                                commands.push(Command::Reorder {
                                    index,
                                    direction: ReorderDirection::Up,
                                });
                            }
                            if ui.small_button("⬇").on_hover_text("Draw earlier").clicked() {
                                commands.push(Command::Reorder {
                                    index,
                                    direction: ReorderDirection::Down,
                                });
                            }
                            if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                                commands.push(Command::RemoveShape { index });
                            }
                        });
                    }
                });

            if !rows.is_empty() && ui.button("Clear all").clicked() {
                commands.push(Command::Clear);
            }

            for command in commands {
                app.execute_command(command);
            }
        });
}
