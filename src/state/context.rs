use log::{debug, info};

use super::EditorState;
use crate::codegen::CodeGenerator;
use crate::color::Rgb565;
use crate::command::{Command, CommandResult};
use crate::config::EditorConfig;
use crate::element::{PropertyKey, PropertyValue, Shape, ShapeKind, StyleContext, create_shape, create_text, property};
use crate::geometry::Point;
use crate::geometry::hit_testing::HitTester;
use crate::renderer::{ApproxSansMetrics, Renderer, Surface, TextMeasure};
use crate::scene::Scene;
use crate::tools::Tool;

/// What a pointer press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDown {
    /// No tool is active
    Ignored,
    /// A drawing tool started a drag session
    DragStarted,
    /// The delete tool removed the shape at this index
    Deleted(usize),
    /// The delete tool found nothing under the pointer
    Missed,
    /// The text tool wants a string to place at this point, see [`EditorContext::place_text`]
    TextRequested(Point),
}

/// The controller that owns a scene and drives it from pointer and form input.
///
/// Every editor operation goes through an `EditorContext`; there is no global state, so
/// several editors (or tests) can run side by side.
///
/// # Drag sessions
///
/// - [`EditorContext::begin_drag`] on pointer-down
/// - [`EditorContext::update_drag`] on every move, returning a preview shape
/// - [`EditorContext::end_drag`] on release, committing at most one shape
/// - [`EditorContext::cancel_drag`] when the pointer leaves the canvas
///
/// # Example
///
/// ```rust
/// use round_tft_designer::{EditorContext, Point, ShapeKind, Tool};
///
/// let mut editor = EditorContext::default();
/// editor.set_tool(Some(Tool::Draw(ShapeKind::Rect)));
/// editor.begin_drag(Point::new(50, 80));
/// editor.update_drag(Point::new(30, 40));
/// assert!(editor.end_drag(Point::new(10, 20)).is_some());
/// assert_eq!(editor.scene().len(), 1);
/// ```
pub struct EditorContext {
    scene: Scene,
    config: EditorConfig,
    style: StyleContext,
    background: Rgb565,
    tool: Option<Tool>,
    state: EditorState,
    renderer: Renderer,
    hit_tester: HitTester,
    generator: CodeGenerator,
    metrics: Box<dyn TextMeasure>,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl std::fmt::Debug for EditorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorContext")
            .field("scene", &self.scene)
            .field("style", &self.style)
            .field("background", &self.background)
            .field("tool", &self.tool)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl EditorContext {
    pub fn new(config: EditorConfig) -> Self {
        let style = StyleContext {
            color: config.default_color,
            font_size: config.default_font_size,
            ..StyleContext::default()
        };

        Self {
            scene: Scene::new(),
            style,
            background: config.default_background,
            tool: None,
            state: EditorState::Idle,
            renderer: Renderer::from_config(&config),
            hit_tester: HitTester::from_config(&config),
            generator: CodeGenerator::new(),
            metrics: Box::new(ApproxSansMetrics),
            config,
        }
    }

    /// Measure text for hit testing with these metrics instead of the built-in estimate
    pub fn set_text_measure(&mut self, metrics: Box<dyn TextMeasure>) {
        self.metrics = metrics;
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn style(&self) -> &StyleContext {
        &self.style
    }

    pub fn background(&self) -> Rgb565 {
        self.background
    }

    pub fn tool(&self) -> Option<Tool> {
        self.tool
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Switch tools, abandoning any drag in progress
    pub fn set_tool(&mut self, tool: Option<Tool>) {
        self.cancel_drag();
        if self.tool != tool {
            info!("Tool changed: {:?} -> {:?}", self.tool, tool);
        }
        self.tool = tool;
    }

    pub fn begin_drag(&mut self, point: Point) -> PointerDown {
        // A press without a release (pointer lost outside the window) must not leak a session.
        self.cancel_drag();

        match self.tool {
            None => PointerDown::Ignored,
            Some(Tool::Delete) => match self.hit_test(point) {
                Some(index) => match self.execute(Command::RemoveShape { index }) {
                    Ok(()) => PointerDown::Deleted(index),
                    Err(_) => PointerDown::Missed,
                },
                None => {
                    debug!("Delete at ({}, {}) hit nothing", point.x, point.y);
                    PointerDown::Missed
                }
            },
            Some(tool) => match tool.shape_kind() {
                Some(kind) if tool.starts_drag() => {
                    self.state = EditorState::Dragging {
                        kind,
                        start: point,
                        current: point,
                    };
                    debug!("Started {} drag at ({}, {})", kind, point.x, point.y);
                    PointerDown::DragStarted
                }
                // Text is placed where the pointer went down, after a prompt
                _ => PointerDown::TextRequested(point),
            },
        }
    }

    /// Track the pointer and return the shape a release here would create.
    ///
    /// Never touches the scene.
    pub fn update_drag(&mut self, point: Point) -> Option<Shape> {
        if let EditorState::Dragging { current, .. } = &mut self.state {
            *current = point;
        }
        self.preview_shape()
    }

    /// The provisional shape of the drag in progress
    pub fn preview_shape(&self) -> Option<Shape> {
        self.state.provisional_shape(&self.style)
    }

    /// Finish the drag, appending and selecting the new shape.
    ///
    /// A release at the press point creates nothing.
    pub fn end_drag(&mut self, point: Point) -> Option<&Shape> {
        let EditorState::Dragging { kind, start, .. } = std::mem::take(&mut self.state) else {
            return None;
        };

        if point == start {
            debug!("Abandoned {} drag with no movement", kind);
            return None;
        }

        let shape = create_shape(kind, start, point, &self.style)?;
        let index = self.scene.append(shape);
        info!("Committed {} as shape {}", kind, index);
        self.scene.get(index)
    }

    /// Abandon the drag in progress. Returns whether there was one.
    pub fn cancel_drag(&mut self) -> bool {
        let was_dragging = self.state.is_dragging();
        if was_dragging {
            debug!("Drag cancelled");
        }
        self.state = EditorState::Idle;
        was_dragging
    }

    /// Place a text shape at a point collected by [`PointerDown::TextRequested`].
    pub fn place_text(&mut self, at: Point, text: &str) -> Option<&Shape> {
        let shape = create_text(at, text, &self.style)?;
        let index = self.scene.append(shape);
        info!("Placed text {:?} as shape {}", text, index);
        self.scene.get(index)
    }

    pub fn execute(&mut self, command: Command) -> CommandResult {
        command.execute(&mut self.scene, &self.config)
    }

    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.hit_tester
            .hit_test(&self.scene, point, self.metrics.as_ref())
    }

    /// Paint the scene plus the drag preview, if any
    pub fn render(&self, surface: &mut dyn Surface) {
        let preview = self.preview_shape();
        self.renderer
            .render_with_preview(surface, &self.scene, self.background, preview.as_ref());
    }

    pub fn generate_code(&self) -> String {
        self.generator.generate(&self.scene, self.background)
    }

    /// Set the drawing color and recolor the selected shape
    pub fn set_color(&mut self, color: Rgb565) -> CommandResult {
        self.style.color = color;
        match self.scene.selected_index() {
            Some(index) => self.execute(Command::SetProperty {
                index,
                key: PropertyKey::Color,
                value: PropertyValue::Color(color),
            }),
            None => Ok(()),
        }
    }

    /// Set the text size for new text and resize selected text
    pub fn set_font_size(&mut self, size: u8) -> CommandResult {
        let value = PropertyValue::Int(i32::from(size));
        property::validate(PropertyKey::Size, &value, &self.config)?;
        self.style.font_size = size;

        match self.scene.selected_index() {
            Some(index) if self.scene.get(index).is_some_and(|s| s.kind() == ShapeKind::Text) => {
                self.execute(Command::SetProperty {
                    index,
                    key: PropertyKey::Size,
                    value,
                })
            }
            _ => Ok(()),
        }
    }

    pub fn set_stroke_width(&mut self, width: i32) {
        self.style.stroke_width = width.max(1);
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.style.filled = filled;
    }

    pub fn set_background(&mut self, background: Rgb565) {
        if self.background != background {
            info!("Background set to {}", background);
        }
        self.background = background;
    }
}
