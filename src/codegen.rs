//! Export of a scene as a TFT_eSPI Arduino sketch.
//!
//! Output is a pure function of the scene and background: shapes are emitted in paint
//! order and the `drawArc` helper appears once when any arc is present.

use std::fmt::Write as _;

use log::debug;

use crate::color::Rgb565;
use crate::element::{Shape, ShapeKind};
use crate::scene::Scene;

const HEADER: &str = "#include <TFT_eSPI.h>\nTFT_eSPI tft = TFT_eSPI();\n\n";

const ARC_HELPER: &str = "\
void drawArc(int x, int y, int radius, float startAngle, float endAngle, uint16_t color) {
  if (startAngle > endAngle) {
    float temp = startAngle;
    startAngle = endAngle;
    endAngle = temp;
  }
  float step = 0.05; // Arc precision
  for (float angle = startAngle; angle <= endAngle; angle += step) {
    int px = x + radius * cos(angle);
    int py = y + radius * sin(angle);
    tft.drawPixel(px, py, color);
  }
  // Draw the last point to ensure the arc ends exactly where it should
  int px = x + radius * cos(endAngle);
  int py = y + radius * sin(endAngle);
  tft.drawPixel(px, py, color);
}

";

const LOOP: &str = "\
void loop() {
  // Your code can be added here
  // delay(100); // Example: small delay to reduce CPU usage
}
";

#[derive(Debug, Clone, Copy, Default)]
pub struct CodeGenerator;

impl CodeGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, scene: &Scene, background: Rgb565) -> String {
        let mut code = String::from(HEADER);

        if scene.contains_kind(ShapeKind::Arc) {
            code.push_str(ARC_HELPER);
        }

        code.push_str("void setup() {\n");
        code.push_str("  tft.init();\n");
        code.push_str("  tft.setRotation(1); // Adjust according to your screen\n");
        let _ = writeln!(code, "  tft.fillScreen({});", background);
        code.push_str("  \n");
        code.push_str("  // Draw elements\n");

        for shape in scene.shapes() {
            emit_shape(&mut code, shape, background);
        }

        code.push_str("}\n\n");
        code.push_str(LOOP);

        debug!("Generated {} bytes for {} shapes", code.len(), scene.len());
        code
    }
}

/// Shorthand for `CodeGenerator::new().generate(..)`
pub fn generate(scene: &Scene, background: Rgb565) -> String {
    CodeGenerator::new().generate(scene, background)
}

// Writing into a String cannot fail.
fn emit_shape(code: &mut String, shape: &Shape, background: Rgb565) {
    match shape {
        Shape::Line {
            x1, y1, x2, y2, color, ..
        } => {
            let _ = writeln!(code, "  tft.drawLine({x1}, {y1}, {x2}, {y2}, {color});");
        }
        Shape::Rect {
            x,
            y,
            width,
            height,
            color,
            filled,
            ..
        } => {
            let call = if *filled { "fillRect" } else { "drawRect" };
            let _ = writeln!(code, "  tft.{call}({x}, {y}, {width}, {height}, {color});");
        }
        Shape::Circle {
            x,
            y,
            radius,
            color,
            filled,
            ..
        } => {
            let call = if *filled { "fillCircle" } else { "drawCircle" };
            let _ = writeln!(code, "  tft.{call}({x}, {y}, {radius}, {color});");
        }
        Shape::Triangle {
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
            color,
            filled,
            ..
        } => {
            let call = if *filled { "fillTriangle" } else { "drawTriangle" };
            let _ = writeln!(
                code,
                "  tft.{call}({x1}, {y1}, {x2}, {y2}, {x3}, {y3}, {color});"
            );
        }
        Shape::Text {
            x,
            y,
            text,
            size,
            color,
        } => {
            let _ = writeln!(code, "  tft.setTextColor({color}, {background});");
            let _ = writeln!(code, "  tft.setTextSize({size});");
            let _ = writeln!(code, "  tft.setCursor({x}, {y});");
            let _ = writeln!(code, "  tft.print(\"{}\");", escape_c_string(text));
        }
        Shape::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
            color,
            ..
        } => {
            let _ = writeln!(
                code,
                "  drawArc({x}, {y}, {radius}, {start_angle}, {end_angle}, {color});"
            );
        }
    }
}

/// Escape text for a C string literal
pub fn escape_c_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}
