use egui::{Context, PointerButton, Pos2, Rect, vec2};

use crate::geometry::Point;
use crate::state::{EditorContext, PointerDown};

/// Maps screen positions onto the canvas, which is drawn `scale` times magnified at `origin`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub origin: Pos2,
    pub scale: f32,
    /// Canvas side in display pixels
    pub size: f32,
}

impl CanvasTransform {
    pub fn new(origin: Pos2, scale: f32, size: f32) -> Self {
        Self { origin, scale, size }
    }

    /// The canvas area in screen coordinates
    pub fn screen_rect(&self) -> Rect {
        Rect::from_min_size(self.origin, vec2(self.size, self.size) * self.scale)
    }

    pub fn contains(&self, screen: Pos2) -> bool {
        self.screen_rect().contains(screen)
    }

    /// Canvas-local pixel under a screen position, rounded to the nearest integer
    pub fn to_canvas(&self, screen: Pos2) -> Point {
        let local = (screen - self.origin) / self.scale;
        Point::rounded(local.x, local.y)
    }
}

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// The same position in canvas pixels
    pub canvas: Point,
}

/// Pointer events on the canvas, primary button only
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { location: InputLocation },
    PointerMove { location: InputLocation },
    PointerUp { location: InputLocation },
    /// The pointer left the canvas (or the window)
    PointerLeave,
}

/// Turns raw egui input into canvas [`InputEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    was_over_canvas: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn make_location(transform: &CanvasTransform, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            canvas: transform.to_canvas(pos),
        }
    }

    pub fn process_input(&mut self, ctx: &Context, transform: &CanvasTransform) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            let over_canvas = hover.is_some_and(|pos| transform.contains(pos));

            if self.was_over_canvas && !over_canvas {
                events.push(InputEvent::PointerLeave);
            }

            if let Some(pos) = hover.filter(|_| over_canvas) {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        location: Self::make_location(transform, pos),
                    });
                }
                if input.pointer.button_pressed(PointerButton::Primary) {
                    events.push(InputEvent::PointerDown {
                        location: Self::make_location(transform, pos),
                    });
                }
                if input.pointer.button_released(PointerButton::Primary) {
                    events.push(InputEvent::PointerUp {
                        location: Self::make_location(transform, pos),
                    });
                }
            }

            self.last_pointer_pos = hover;
            self.was_over_canvas = over_canvas;
        });

        events
    }
}

/// Apply one canvas event to the editor.
///
/// Returns the press outcome for pointer-down so the caller can react to text requests.
pub fn route_event(editor: &mut EditorContext, event: &InputEvent) -> Option<PointerDown> {
    match event {
        InputEvent::PointerDown { location } => Some(editor.begin_drag(location.canvas)),
        InputEvent::PointerMove { location } => {
            if editor.state().is_dragging() {
                editor.update_drag(location.canvas);
            }
            None
        }
        InputEvent::PointerUp { location } => {
            editor.end_drag(location.canvas);
            None
        }
        InputEvent::PointerLeave => {
            editor.cancel_drag();
            None
        }
    }
}
