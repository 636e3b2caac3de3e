//! Pixel coverage of the three drawing primitives and PNG export

use svgraster_core::{Color, Point};
use svgraster_raster::{PixmapCanvas, RenderOptions};
use svgraster_scene::{Polygon, RasterCanvas, Scene, SvgImporter};

fn blank(width: u32, height: u32) -> PixmapCanvas {
    PixmapCanvas::new(width, height, Color::WHITE).unwrap()
}

#[test]
fn test_ellipse_covers_its_box() {
    let mut canvas = blank(20, 20);
    canvas.draw_ellipse(Point::new(10, 10), Point::new(3, 3), Color::RED);

    for (x, y) in [(10, 10), (7, 10), (13, 10), (10, 7), (10, 13)] {
        assert_eq!(canvas.pixel(x, y), Some(Color::RED), "({}, {})", x, y);
    }
    for (x, y) in [(6, 10), (14, 10), (7, 7), (13, 13)] {
        assert_eq!(canvas.pixel(x, y), Some(Color::WHITE), "({}, {})", x, y);
    }
}

#[test]
fn test_line_includes_both_endpoints() {
    let mut canvas = blank(12, 6);
    canvas.draw_line(Point::new(2, 2), Point::new(8, 2), Color::BLACK);

    for x in 2..=8 {
        assert_eq!(canvas.pixel(x, 2), Some(Color::BLACK), "x = {}", x);
    }
    assert_eq!(canvas.pixel(1, 2), Some(Color::WHITE));
    assert_eq!(canvas.pixel(9, 2), Some(Color::WHITE));
    assert_eq!(canvas.pixel(5, 1), Some(Color::WHITE));
    assert_eq!(canvas.pixel(5, 3), Some(Color::WHITE));
}

#[test]
fn test_rect_polygon_covers_exact_area() {
    let mut canvas = blank(16, 10);
    let rect = Polygon::rect(Color::BLUE, 2, 3, 10, 5);
    canvas.draw_polygon(rect.points(), rect.fill);

    let mut covered = 0;
    for y in 0..10 {
        for x in 0..16 {
            if canvas.pixel(x, y) == Some(Color::BLUE) {
                covered += 1;
                assert!((2..12).contains(&x) && (3..8).contains(&y), "({}, {})", x, y);
            }
        }
    }
    assert_eq!(covered, 50);
}

#[test]
fn test_later_shapes_paint_over_earlier() {
    let scene = SvgImporter::new()
        .import_string(
            r#"<svg width="10" height="10">
                <rect width="10" height="10" fill="red"/>
                <circle cx="5" cy="5" r="2" fill="lime"/>
            </svg>"#,
        )
        .unwrap()
        .scene;
    let canvas = PixmapCanvas::render(&scene, &RenderOptions::default()).unwrap();

    assert_eq!(canvas.pixel(0, 0), Some(Color::RED));
    assert_eq!(canvas.pixel(5, 5), Some(Color::new(0, 255, 0)));
}

#[test]
fn test_render_uses_scene_size_and_background() {
    let scene = Scene::new(7, 3, Vec::new());
    let options = RenderOptions {
        background: Color::BLACK,
        anti_alias: true,
    };
    let canvas = PixmapCanvas::render(&scene, &options).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (7, 3));
    assert_eq!(canvas.pixel(6, 2), Some(Color::BLACK));
}

#[test]
fn test_save_png_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");

    let mut canvas = blank(6, 4);
    canvas.draw_line(Point::new(0, 0), Point::new(5, 0), Color::RED);
    canvas.save_png(&path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (6, 4));
    assert_eq!(decoded.get_pixel(3, 0).0, [255, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(3, 1).0, [255, 255, 255, 255]);
}
