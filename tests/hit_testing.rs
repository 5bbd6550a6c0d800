use round_tft_designer::{
    ApproxSansMetrics, HitTester, Point, PropertyKey, PropertyValue, Rgb565, Scene, Shape, ShapeKind, StyleContext,
    create_shape, create_text,
};

fn tester() -> HitTester {
    HitTester::new(240, 2.0)
}

fn hit(scene: &Scene, x: i32, y: i32) -> Option<usize> {
    tester().hit_test(scene, Point::new(x, y), &ApproxSansMetrics)
}

fn scene_of(shapes: impl IntoIterator<Item = Shape>) -> Scene {
    let mut scene = Scene::new();
    for shape in shapes {
        scene.append(shape);
    }
    scene
}

fn make(kind: ShapeKind, start: (i32, i32), end: (i32, i32)) -> Shape {
    create_shape(
        kind,
        Point::new(start.0, start.1),
        Point::new(end.0, end.1),
        &StyleContext::default(),
    )
    .unwrap()
}

#[test]
fn test_empty_scene_never_hits() {
    let scene = Scene::new();
    assert_eq!(hit(&scene, 120, 120), None);
}

#[test]
fn test_points_outside_disk_never_hit() {
    // A rect covering the whole canvas still cannot be hit in the corners
    let scene = scene_of([make(ShapeKind::Rect, (0, 0), (240, 240))]);
    assert_eq!(hit(&scene, 239, 0), None);
    assert_eq!(hit(&scene, 0, 0), None);
    assert_eq!(hit(&scene, 120, 120), Some(0));
    // On the rim is still inside
    assert_eq!(hit(&scene, 240, 120), Some(0));
}

#[test]
fn test_topmost_shape_wins() {
    let scene = scene_of([
        make(ShapeKind::Rect, (100, 100), (140, 140)),
        make(ShapeKind::Rect, (110, 110), (130, 130)),
    ]);
    assert_eq!(hit(&scene, 120, 120), Some(1));
    assert_eq!(hit(&scene, 102, 102), Some(0));
}

#[test]
fn test_rect_bounds_are_inclusive() {
    let scene = scene_of([make(ShapeKind::Rect, (100, 100), (140, 130))]);
    assert_eq!(hit(&scene, 100, 100), Some(0));
    assert_eq!(hit(&scene, 140, 130), Some(0));
    assert_eq!(hit(&scene, 141, 130), None);
}

#[test]
fn test_line_hits_near_segment_only() {
    let scene = scene_of([make(ShapeKind::Line, (60, 120), (180, 120))]);
    // stroke 1 + margin 2
    assert_eq!(hit(&scene, 120, 123), Some(0));
    assert_eq!(hit(&scene, 120, 124), None);
    // On the infinite line but past the end of the segment
    assert_eq!(hit(&scene, 190, 120), None);
}

#[test]
fn test_circle_hits_outline_even_when_filled() {
    let filled = StyleContext {
        filled: true,
        ..StyleContext::default()
    };
    let circle = create_shape(ShapeKind::Circle, Point::new(120, 120), Point::new(160, 120), &filled).unwrap();
    let scene = scene_of([circle]);

    assert_eq!(hit(&scene, 160, 120), Some(0));
    assert_eq!(hit(&scene, 157, 120), Some(0));
    assert_eq!(hit(&scene, 164, 120), None);
    // The middle of a filled circle does not select it
    assert_eq!(hit(&scene, 120, 120), None);
}

#[test]
fn test_triangle_excludes_edge_opposite_first_vertex() {
    // Vertices (100,100), (140,140), (100,140)
    let scene = scene_of([make(ShapeKind::Triangle, (100, 100), (140, 140))]);
    assert_eq!(hit(&scene, 110, 130), Some(0));
    // On the edge between the second and third vertices, where u + v == 1
    assert_eq!(hit(&scene, 120, 140), None);
    // Outside the hypotenuse
    assert_eq!(hit(&scene, 130, 110), None);
}

#[test]
fn test_text_box_uses_measured_width() {
    let style = StyleContext {
        font_size: 2,
        ..StyleContext::default()
    };
    // 16 px font, 5 characters at 0.6 em = 48 px wide
    let text = create_text(Point::new(60, 100), "Hello", &style).unwrap();
    let scene = scene_of([text]);

    assert_eq!(hit(&scene, 60, 100), Some(0));
    assert_eq!(hit(&scene, 107, 116), Some(0));
    assert_eq!(hit(&scene, 109, 110), None);
    assert_eq!(hit(&scene, 80, 117), None);
}

#[test]
fn test_arc_hits_inside_its_sweep_only() {
    let arc = Shape::Arc {
        x: 120,
        y: 120,
        radius: 50,
        start_angle: 0.0,
        end_angle: 1.6,
        color: Rgb565::GREEN,
        stroke_width: 1,
    };
    let scene = scene_of([arc]);

    // angle 0, right of center
    assert_eq!(hit(&scene, 170, 120), Some(0));
    // angle pi/2, below center (y grows downward)
    assert_eq!(hit(&scene, 120, 170), Some(0));
    // angle pi, outside the sweep
    assert_eq!(hit(&scene, 70, 120), None);
    // angle -pi/2, above center
    assert_eq!(hit(&scene, 120, 70), None);
}

#[test]
fn test_arc_with_reversed_angles_uses_swapped_range() {
    let arc = Shape::Arc {
        x: 120,
        y: 120,
        radius: 50,
        start_angle: std::f64::consts::FRAC_PI_2,
        end_angle: 0.0,
        color: Rgb565::GREEN,
        stroke_width: 1,
    };
    let scene = scene_of([arc]);
    let diagonal = (50.0 * std::f64::consts::FRAC_1_SQRT_2).round() as i32;
    assert_eq!(hit(&scene, 120 + diagonal, 120 + diagonal), Some(0));
}

#[test]
fn test_wide_strokes_widen_tolerance() {
    let wide = StyleContext {
        stroke_width: 5,
        ..StyleContext::default()
    };
    let line = create_shape(ShapeKind::Line, Point::new(60, 120), Point::new(180, 120), &wide).unwrap();
    let circle = create_shape(ShapeKind::Circle, Point::new(120, 120), Point::new(160, 120), &wide).unwrap();

    // stroke 5 + margin 2
    let scene = scene_of([line]);
    assert_eq!(hit(&scene, 120, 127), Some(0));
    assert_eq!(hit(&scene, 120, 128), None);

    let scene = scene_of([circle]);
    assert_eq!(hit(&scene, 167, 120), Some(0));
    assert_eq!(hit(&scene, 153, 120), Some(0));
    assert_eq!(hit(&scene, 168, 120), None);
    assert_eq!(hit(&scene, 152, 120), None);
}

#[test]
fn test_extreme_dimensions_do_not_overflow() {
    let mut scene = scene_of([make(ShapeKind::Rect, (100, 100), (140, 140))]);
    scene
        .set_property(0, PropertyKey::Width, PropertyValue::Int(i32::MAX))
        .unwrap();
    scene
        .set_property(0, PropertyKey::Height, PropertyValue::Int(i32::MAX))
        .unwrap();
    assert_eq!(hit(&scene, 120, 120), Some(0));
    assert_eq!(hit(&scene, 99, 120), None);

    let mut scene = scene_of([create_text(Point::new(60, 100), "Hi", &StyleContext::default()).unwrap()]);
    scene
        .set_property(0, PropertyKey::Y, PropertyValue::Int(i32::MAX))
        .unwrap();
    assert_eq!(hit(&scene, 60, 120), None);

    let mut scene = scene_of([make(ShapeKind::Line, (60, 120), (180, 120))]);
    scene
        .set_property(0, PropertyKey::X1, PropertyValue::Int(i32::MIN))
        .unwrap();
    scene
        .set_property(0, PropertyKey::X2, PropertyValue::Int(i32::MAX))
        .unwrap();
    assert_eq!(hit(&scene, 120, 120), Some(0));
    assert_eq!(hit(&scene, 120, 130), None);
}
