use proptest::prelude::*;
use svgraster_core::{Color, Point};

fn coord() -> impl Strategy<Value = i32> {
    -10_000i32..10_000
}

proptest! {
    #[test]
    fn rotate_by_zero_is_identity(x in coord(), y in coord(), ox in coord(), oy in coord()) {
        let p = Point::new(x, y);
        prop_assert_eq!(p.rotate(Point::new(ox, oy), 0.0), p);
    }

    #[test]
    fn rotate_full_turn_is_identity(x in coord(), y in coord(), ox in coord(), oy in coord()) {
        let p = Point::new(x, y);
        prop_assert_eq!(p.rotate(Point::new(ox, oy), 360.0), p);
        prop_assert_eq!(p.rotate(Point::new(ox, oy), -360.0), p);
    }

    #[test]
    fn four_quarter_turns_return_home(x in coord(), y in coord(), ox in coord(), oy in coord()) {
        let pivot = Point::new(ox, oy);
        let p = Point::new(x, y);
        let back = p
            .rotate(pivot, 90.0)
            .rotate(pivot, 90.0)
            .rotate(pivot, 90.0)
            .rotate(pivot, 90.0);
        prop_assert_eq!(back, p);
    }

    #[test]
    fn pivot_is_fixed_under_rotation(ox in coord(), oy in coord(), angle in -720.0f64..720.0) {
        let pivot = Point::new(ox, oy);
        prop_assert_eq!(pivot.rotate(pivot, angle), pivot);
    }

    #[test]
    fn scale_by_one_is_identity(x in coord(), y in coord(), ox in coord(), oy in coord()) {
        let p = Point::new(x, y);
        prop_assert_eq!(p.scale(Point::new(ox, oy), 1), p);
    }

    #[test]
    fn scale_by_zero_collapses_to_pivot(x in coord(), y in coord(), ox in coord(), oy in coord()) {
        let pivot = Point::new(ox, oy);
        prop_assert_eq!(Point::new(x, y).scale(pivot, 0), pivot);
    }

    #[test]
    fn mirror_twice_is_identity(x in coord(), y in coord(), ox in coord(), oy in coord()) {
        let pivot = Point::new(ox, oy);
        let p = Point::new(x, y);
        prop_assert_eq!(p.scale(pivot, -1).scale(pivot, -1), p);
    }

    #[test]
    fn hex_display_parses_back(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Color::new(r, g, b);
        prop_assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }
}

#[test]
fn test_point_serializes_as_struct() {
    let json = serde_json::to_string(&Point::new(3, -4)).unwrap();
    assert_eq!(json, r#"{"x":3,"y":-4}"#);
}
