use gridrect::{Dimension, GeometryError, Point, Rectangle};

#[test]
fn test_corners_follow_y_up_convention() {
    let rect = Rectangle::new(2, 3, 3, 2).unwrap();

    assert_eq!(rect.up_left(), Point::new(2, 3));
    assert_eq!(rect.up_right(), Point::new(5, 3));
    assert_eq!(rect.down_right(), Point::new(5, 1));
    assert_eq!(rect.down_left(), Point::new(2, 1));
}

#[test]
fn test_area() {
    let rect = Rectangle::new(2, 3, 3, 2).unwrap();
    assert_eq!(rect.area(), 6);
}

#[test]
fn test_vertices() {
    let rect = Rectangle::new(0, 1, 1, 1).unwrap();
    let vertices = rect.vertices();

    assert_eq!(vertices.len(), 4);
    for p in [Point::new(0, 1), Point::new(1, 1), Point::new(1, 0), Point::new(0, 0)] {
        assert!(vertices.contains(&p), "missing vertex {p}");
    }
}

#[test]
fn test_rejects_non_positive_dimensions() {
    // Width is reported first when both are invalid
    assert_eq!(
        Rectangle::new(0, 0, 0, 0),
        Err(GeometryError::InvalidDimension(Dimension::Width))
    );
    assert_eq!(
        Rectangle::new(0, 0, 1, 0),
        Err(GeometryError::InvalidDimension(Dimension::Height))
    );
    assert_eq!(
        Rectangle::new(0, 0, -3, 2),
        Err(GeometryError::InvalidDimension(Dimension::Width))
    );
    assert_eq!(
        Rectangle::new(0, 0, 2, -1),
        Err(GeometryError::InvalidDimension(Dimension::Height))
    );
}

#[test]
fn test_error_messages() {
    let width = Rectangle::new(0, 0, 0, 0).unwrap_err();
    let height = Rectangle::new(0, 0, 1, 0).unwrap_err();

    assert_eq!(width.to_string(), "width must be greater than 0");
    assert_eq!(height.to_string(), "height must be greater than 0");

    // Same text is raised as ValueError from the Python bindings
    let overflow = Rectangle::new(i32::MAX, 0, 1, 1).unwrap_err();
    assert_eq!(
        overflow.to_string(),
        "rectangle corners or area overflow the coordinate type"
    );
}

#[test]
fn test_validity_sweep() {
    for w in -3..=3 {
        for h in -3..=3 {
            let result = Rectangle::new(1, -1, w, h);
            if w <= 0 || h <= 0 {
                assert!(result.is_err(), "{w}x{h} should be rejected");
                continue;
            }
            let rect = result.unwrap();
            assert_eq!(rect.up_right(), Point::new(1 + w, -1));
            assert_eq!(rect.down_right(), Point::new(1 + w, -1 - h));
            assert_eq!(rect.down_left(), Point::new(1, -1 - h));
            assert_eq!(rect.vertices().len(), 4);
            assert_eq!(rect.area(), w * h);
        }
    }
}

#[test]
fn test_rejects_overflowing_rectangles() {
    assert_eq!(
        Rectangle::new(i32::MAX, 0, 1, 1),
        Err(GeometryError::OutOfRange)
    );
    assert_eq!(
        Rectangle::new(0, i32::MIN, 1, 1),
        Err(GeometryError::OutOfRange)
    );
    assert_eq!(
        Rectangle::new(0, 0, 100_000, 100_000),
        Err(GeometryError::OutOfRange)
    );

    // Same size fits once the coordinate type is wide enough
    let wide = Rectangle::<i64>::new(0, 0, 100_000, 100_000).unwrap();
    assert_eq!(wide.area(), 10_000_000_000);
}

#[test]
fn test_other_coordinate_types() {
    let small = Rectangle::<i8>::new(-2, 2, 4, 4).unwrap();
    assert_eq!(small.down_right(), Point::new(2i8, -2));
    assert_eq!(Rectangle::<i8>::new(100, 0, 50, 1), Err(GeometryError::OutOfRange));
}

#[test]
fn test_value_semantics() {
    let a = Rectangle::new(1, 2, 3, 4).unwrap();
    let b = Rectangle::try_from((1, 2, 3, 4)).unwrap();
    let copy = a;

    assert_eq!(a, b);
    assert_eq!(a, copy);
    assert_ne!(a, Rectangle::new(1, 2, 4, 3).unwrap());
    assert_eq!(a.to_string(), "[1, 2, 3x4]");
    assert_eq!(Point::from((7, -1)).to_string(), "(7, -1)");

    let (x, y): (i32, i32) = a.down_left().into();
    assert_eq!((x, y), (1, -2));
}
