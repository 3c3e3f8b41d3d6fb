use gridrect::{Point, Rectangle};

fn config() -> bincode::config::Configuration {
    bincode::config::standard()
}

#[test]
fn test_rectangle_roundtrip() {
    let rect = Rectangle::new(-4, 7, 3, 2).unwrap();

    let bytes = bincode::serde::encode_to_vec(rect, config()).unwrap();
    let (decoded, read): (Rectangle, usize) =
        bincode::serde::decode_from_slice(&bytes, config()).unwrap();

    assert_eq!(decoded, rect);
    assert_eq!(read, bytes.len());
}

#[test]
fn test_point_roundtrip() {
    let point = Point::new(-1i64, 9_000_000_000);

    let bytes = bincode::serde::encode_to_vec(point, config()).unwrap();
    let (decoded, _): (Point<i64>, usize) =
        bincode::serde::decode_from_slice(&bytes, config()).unwrap();

    assert_eq!(decoded, point);
}

#[test]
fn test_decoding_validates_dimensions() {
    // Struct fields encode in order, same as a 4-tuple
    for raw in [(0i32, 0i32, 0i32, 1i32), (0, 0, 1, 0), (0, 0, -2, 5), (i32::MAX, 0, 1, 1)] {
        let bytes = bincode::serde::encode_to_vec(raw, config()).unwrap();
        let decoded: Result<(Rectangle, usize), _> =
            bincode::serde::decode_from_slice(&bytes, config());
        assert!(decoded.is_err(), "{raw:?} should not decode");
    }

    let bytes = bincode::serde::encode_to_vec((1i32, 2i32, 3i32, 4i32), config()).unwrap();
    let (decoded, _): (Rectangle, usize) =
        bincode::serde::decode_from_slice(&bytes, config()).unwrap();
    assert_eq!(decoded, Rectangle::new(1, 2, 3, 4).unwrap());
}
