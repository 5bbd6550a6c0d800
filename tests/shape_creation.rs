use round_tft_designer::{Point, Rgb565, Shape, ShapeKind, StyleContext, create_shape, create_text};

fn style() -> StyleContext {
    StyleContext {
        color: Rgb565::YELLOW,
        stroke_width: 3,
        filled: true,
        font_size: 2,
    }
}

#[test]
fn test_rect_is_normalized_to_top_left() {
    let shape = create_shape(ShapeKind::Rect, Point::new(50, 80), Point::new(10, 20), &style());
    assert_eq!(
        shape,
        Some(Shape::Rect {
            x: 10,
            y: 20,
            width: 40,
            height: 60,
            color: Rgb565::YELLOW,
            stroke_width: 3,
            filled: true,
        })
    );
}

#[test]
fn test_circle_radius_is_rounded_distance() {
    let shape = create_shape(ShapeKind::Circle, Point::new(0, 0), Point::new(3, 4), &style());
    assert!(matches!(shape, Some(Shape::Circle { x: 0, y: 0, radius: 5, .. })));

    // sqrt(2) rounds down
    let shape = create_shape(ShapeKind::Circle, Point::new(0, 0), Point::new(1, 1), &style());
    assert!(matches!(shape, Some(Shape::Circle { radius: 1, .. })));
}

#[test]
fn test_line_keeps_drag_direction() {
    let shape = create_shape(ShapeKind::Line, Point::new(90, 10), Point::new(20, 70), &style());
    assert!(matches!(
        shape,
        Some(Shape::Line {
            x1: 90,
            y1: 10,
            x2: 20,
            y2: 70,
            stroke_width: 3,
            ..
        })
    ));
    // Lines never fill, whatever the style says
    assert!(!shape.unwrap().is_filled());
}

#[test]
fn test_triangle_third_vertex_is_derived() {
    let shape = create_shape(ShapeKind::Triangle, Point::new(100, 100), Point::new(140, 140), &style());
    assert!(matches!(
        shape,
        Some(Shape::Triangle {
            x1: 100,
            y1: 100,
            x2: 140,
            y2: 140,
            x3: 100,
            y3: 140,
            ..
        })
    ));
}

#[test]
fn test_arc_sweeps_from_zero_toward_release() {
    let shape = create_shape(ShapeKind::Arc, Point::new(120, 120), Point::new(120, 170), &style());
    let Some(Shape::Arc {
        radius,
        start_angle,
        end_angle,
        ..
    }) = shape
    else {
        panic!("expected an arc, got {shape:?}");
    };
    assert_eq!(radius, 50);
    assert_eq!(start_angle, 0.0);
    assert!((end_angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn test_arc_toward_upper_half_has_negative_end() {
    let shape = create_shape(ShapeKind::Arc, Point::new(120, 120), Point::new(120, 70), &style());
    let Some(Shape::Arc { end_angle, .. }) = shape else {
        panic!("expected an arc");
    };
    assert!((end_angle + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn test_text_is_not_dragged() {
    assert_eq!(
        create_shape(ShapeKind::Text, Point::new(1, 1), Point::new(9, 9), &style()),
        None
    );
}

#[test]
fn test_text_uses_style_size_and_color() {
    let shape = create_text(Point::new(30, 40), "Hello", &style());
    assert_eq!(
        shape,
        Some(Shape::Text {
            x: 30,
            y: 40,
            text: "Hello".to_string(),
            color: Rgb565::YELLOW,
            size: 2,
        })
    );
    assert_eq!(create_text(Point::new(30, 40), "", &style()), None);
}

#[test]
fn test_stroke_width_never_below_one() {
    let thin = StyleContext {
        stroke_width: 0,
        ..StyleContext::default()
    };
    let shape = create_shape(ShapeKind::Line, Point::new(0, 0), Point::new(5, 5), &thin).unwrap();
    assert_eq!(shape.stroke_width(), Some(1));
}
