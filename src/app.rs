use log::{info, warn};

use crate::command::{Command, CommandError};
use crate::config::{CONFIG_STORAGE_KEY, EditorConfig};
use crate::geometry::Point;
use crate::input::InputHandler;
use crate::painter_surface::EguiTextMeasure;
use crate::panels::{central_panel, code_panel, properties_panel, tools_panel};
use crate::state::EditorContext;

/// Text entry for the text tool, anchored where the canvas was clicked
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrompt {
    pub at: Point,
    pub text: String,
}

pub struct DesignerApp {
    editor: EditorContext,
    input: InputHandler,
    generated_code: String,
    text_prompt: Option<TextPrompt>,
    /// Canvas pixel under the pointer, for the coordinate readout
    cursor: Option<Point>,
    last_error: Option<String>,
}

impl Default for DesignerApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl DesignerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = cc
            .storage
            .and_then(|storage| eframe::get_value::<EditorConfig>(storage, CONFIG_STORAGE_KEY))
            .filter(|config| match config.validate() {
                Ok(()) => true,
                Err(err) => {
                    warn!("Ignoring stored config: {}", err);
                    false
                }
            })
            .unwrap_or_default();

        let mut app = Self::with_config(config);
        app.editor
            .set_text_measure(Box::new(EguiTextMeasure::new(cc.egui_ctx.clone())));
        app
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let editor = EditorContext::new(config);
        let generated_code = editor.generate_code();
        Self {
            editor,
            input: InputHandler::new(),
            generated_code,
            text_prompt: None,
            cursor: None,
            last_error: None,
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorContext {
        &mut self.editor
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn generated_code(&self) -> &str {
        &self.generated_code
    }

    pub fn regenerate_code(&mut self) {
        self.generated_code = self.editor.generate_code();
        info!("Regenerated code for {} shapes", self.editor.scene().len());
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Option<Point>) {
        self.cursor = cursor;
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Run a command, remembering the failure for display
    pub fn execute_command(&mut self, command: Command) {
        let result = self.editor.execute(command);
        self.record(result);
    }

    pub fn record(&mut self, result: Result<(), CommandError>) {
        match result {
            Ok(()) => self.last_error = None,
            Err(err) => self.last_error = Some(err.to_string()),
        }
    }

    pub fn is_prompting(&self) -> bool {
        self.text_prompt.is_some()
    }

    pub fn open_text_prompt(&mut self, at: Point) {
        self.text_prompt = Some(TextPrompt {
            at,
            text: String::new(),
        });
    }

    fn text_prompt_window(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.text_prompt.as_mut() else {
            return;
        };

        let mut submit = false;
        let mut cancel = false;
        egui::Window::new("Add text")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(format!("Text at X: {}, Y: {}", prompt.at.x, prompt.at.y));
                let response = ui.text_edit_singleline(&mut prompt.text);
                response.request_focus();
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if submit {
            if let Some(prompt) = self.text_prompt.take() {
                self.editor.place_text(prompt.at, &prompt.text);
            }
        } else if cancel {
            self.text_prompt = None;
        }
    }
}

impl eframe::App for DesignerApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, CONFIG_STORAGE_KEY, self.editor.config());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        properties_panel(self, ctx);
        code_panel(self, ctx);
        central_panel(self, ctx);
        self.text_prompt_window(ctx);
    }
}
