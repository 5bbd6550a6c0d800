use round_tft_designer::{
    Command, CommandError, EditorConfig, Point, PropertyError, PropertyKey, PropertyValue, ReorderDirection, Rgb565,
    Scene, SceneError, Shape, ShapeKind, StyleContext, create_shape,
};

fn line(x: i32) -> Shape {
    create_shape(ShapeKind::Line, Point::new(x, 0), Point::new(x, 10), &StyleContext::default()).unwrap()
}

// Three lines distinguishable by their x coordinate
fn three_lines() -> Scene {
    let mut scene = Scene::new();
    for x in [1, 2, 3] {
        scene.append(line(x));
    }
    scene
}

fn xs(scene: &Scene) -> Vec<i32> {
    scene
        .shapes()
        .iter()
        .map(|shape| match shape {
            Shape::Line { x1, .. } => *x1,
            other => panic!("unexpected {other:?}"),
        })
        .collect()
}

#[test]
fn test_append_selects_new_shape() {
    let mut scene = Scene::new();
    assert_eq!(scene.selected_index(), None);
    assert_eq!(scene.append(line(1)), 0);
    assert_eq!(scene.append(line(2)), 1);
    assert_eq!(scene.selected_index(), Some(1));
}

#[test]
fn test_reorder_is_noop_at_boundaries() {
    let mut scene = three_lines();
    let before = scene.clone();

    assert_eq!(scene.reorder(0, ReorderDirection::Down), Ok(false));
    assert_eq!(scene.reorder(2, ReorderDirection::Up), Ok(false));
    assert_eq!(scene, before);
}

#[test]
fn test_reorder_swaps_and_selection_follows() {
    let mut scene = three_lines();
    scene.select(Some(0)).unwrap();

    assert_eq!(scene.reorder(0, ReorderDirection::Up), Ok(true));
    assert_eq!(xs(&scene), vec![2, 1, 3]);
    assert_eq!(scene.selected_index(), Some(1));

    assert_eq!(scene.reorder(2, ReorderDirection::Down), Ok(true));
    assert_eq!(xs(&scene), vec![2, 3, 1]);
    assert_eq!(scene.selected_index(), Some(1));
}

#[test]
fn test_reorder_selects_moved_shape_even_when_another_was_selected() {
    let mut scene = three_lines();
    scene.select(Some(2)).unwrap();

    assert_eq!(scene.reorder(0, ReorderDirection::Up), Ok(true));
    assert_eq!(scene.selected_index(), Some(1));
    assert!(matches!(scene.selected_shape(), Some(Shape::Line { x1: 1, .. })));
}

#[test]
fn test_boundary_reorder_keeps_selection() {
    let mut scene = three_lines();
    scene.select(Some(1)).unwrap();
    assert_eq!(scene.reorder(0, ReorderDirection::Down), Ok(false));
    assert_eq!(scene.selected_index(), Some(1));
}

#[test]
fn test_removing_selected_clears_selection() {
    let mut scene = three_lines();
    scene.select(Some(1)).unwrap();
    scene.remove(1).unwrap();
    assert_eq!(scene.selected_index(), None);
    assert_eq!(xs(&scene), vec![1, 3]);
}

#[test]
fn test_removing_earlier_shape_keeps_selection_on_same_shape() {
    let mut scene = three_lines();
    scene.select(Some(2)).unwrap();
    scene.remove(0).unwrap();
    assert_eq!(scene.selected_index(), Some(1));
    assert!(matches!(scene.selected_shape(), Some(Shape::Line { x1: 3, .. })));
}

#[test]
fn test_removing_later_shape_leaves_selection() {
    let mut scene = three_lines();
    scene.select(Some(0)).unwrap();
    scene.remove(2).unwrap();
    assert_eq!(scene.selected_index(), Some(0));
}

#[test]
fn test_out_of_range_indices_are_errors() {
    let mut scene = three_lines();
    assert_eq!(
        scene.remove(3).unwrap_err(),
        SceneError::IndexOutOfRange { index: 3, len: 3 }
    );
    assert!(scene.select(Some(7)).is_err());
    assert!(scene.reorder(5, ReorderDirection::Up).is_err());
    assert_eq!(scene.len(), 3);
}

#[test]
fn test_arc_edit_swaps_reversed_angles() {
    let mut scene = Scene::new();
    scene.append(Shape::Arc {
        x: 120,
        y: 120,
        radius: 40,
        start_angle: 0.0,
        end_angle: 1.0,
        color: Rgb565::WHITE,
        stroke_width: 1,
    });

    scene
        .set_property(0, PropertyKey::StartAngle, PropertyValue::Float(2.0))
        .unwrap();
    assert!(matches!(
        scene.get(0),
        Some(Shape::Arc {
            start_angle,
            end_angle,
            ..
        }) if *start_angle == 1.0 && *end_angle == 2.0
    ));
}

#[test]
fn test_command_applies_validated_edit() {
    let mut scene = three_lines();
    let config = EditorConfig::default();

    Command::SetProperty {
        index: 1,
        key: PropertyKey::X2,
        value: PropertyValue::Int(200),
    }
    .execute(&mut scene, &config)
    .unwrap();
    assert_eq!(scene.get(1).unwrap().property(PropertyKey::X2), Some(PropertyValue::Int(200)));
}

#[test]
fn test_command_rejects_out_of_range_coordinate() {
    let mut scene = three_lines();
    let config = EditorConfig::default();
    let before = scene.clone();

    let err = Command::SetProperty {
        index: 0,
        key: PropertyKey::X1,
        value: PropertyValue::Int(241),
    }
    .execute(&mut scene, &config)
    .unwrap_err();

    assert!(matches!(
        err,
        CommandError::Rejected(PropertyError::OutOfRange { min: 0, max: 240, .. })
    ));
    assert_eq!(scene, before);
}

#[test]
fn test_command_rejects_property_missing_on_kind() {
    let mut scene = three_lines();
    let err = Command::SetProperty {
        index: 0,
        key: PropertyKey::Radius,
        value: PropertyValue::Int(10),
    }
    .execute(&mut scene, &EditorConfig::default())
    .unwrap_err();
    assert!(matches!(
        err,
        CommandError::Scene(SceneError::Property(PropertyError::NotApplicable { .. }))
    ));
}

#[test]
fn test_remove_and_clear_commands() {
    let mut scene = three_lines();
    let config = EditorConfig::default();

    Command::RemoveShape { index: 0 }.execute(&mut scene, &config).unwrap();
    assert_eq!(xs(&scene), vec![2, 3]);

    Command::Clear.execute(&mut scene, &config).unwrap();
    assert!(scene.is_empty());
    assert_eq!(scene.selected_index(), None);
}

#[test]
fn test_command_rejects_runaway_arc_angle() {
    let mut scene = Scene::new();
    scene.append(Shape::Arc {
        x: 120,
        y: 120,
        radius: 40,
        start_angle: 0.0,
        end_angle: 1.0,
        color: Rgb565::WHITE,
        stroke_width: 1,
    });
    let config = EditorConfig::default();
    let before = scene.clone();

    for value in [PropertyValue::Float(1e5), PropertyValue::Float(-7.0), PropertyValue::Int(100)] {
        let err = Command::SetProperty {
            index: 0,
            key: PropertyKey::EndAngle,
            value,
        }
        .execute(&mut scene, &config)
        .unwrap_err();
        assert!(matches!(err, CommandError::Rejected(PropertyError::Invalid { .. })));
    }
    assert_eq!(scene, before);

    Command::SetProperty {
        index: 0,
        key: PropertyKey::EndAngle,
        value: PropertyValue::Float(std::f64::consts::TAU),
    }
    .execute(&mut scene, &config)
    .unwrap();
}
