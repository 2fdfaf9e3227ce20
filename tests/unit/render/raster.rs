use super::*;
use crate::{
    foundation::core::{Canvas, Point, Rgb},
    scene::model::{Anchor, DotShape, DotSpec, Label},
};

fn scene() -> Scene {
    let mut scene = Scene::new(Canvas::new(120, 100).unwrap(), Rgb::from_u32(0x1a1a1a));
    scene.dots.push(DotSpec {
        index: 0,
        row: 0,
        col: 0,
        center: Point::new(40.0, 50.0),
        color: Rgb::from_u32(0xff6347),
        shape: DotShape::Circle,
        diameter: 20.0,
        size_multiplier: 1.0,
    });
    scene.dots.push(DotSpec {
        index: 1,
        row: 0,
        col: 1,
        center: Point::new(80.0, 50.0),
        color: Rgb::WHITE,
        shape: DotShape::Square,
        diameter: 20.0,
        size_multiplier: 1.0,
    });
    scene
}

#[test]
fn fills_background_and_dots() {
    let r = Rasterizer::new(&RasterizerOpts::default()).unwrap();
    let frame = r.rasterize(&scene()).unwrap();

    assert_eq!((frame.width, frame.height), (120, 100));
    assert_eq!(frame.data.len(), 120 * 100 * 4);
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(2, 2), Some([0x1a, 0x1a, 0x1a, 255]));
    assert_eq!(frame.pixel(40, 50), Some([0xff, 0x63, 0x47, 255]));
    assert_eq!(frame.pixel(80, 50), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(120, 0), None);
}

#[test]
fn text_without_fonts_is_skipped_not_fatal() {
    let mut s = scene();
    s.labels.push(Label {
        text: "10d left - 3%".to_string(),
        position: Point::new(60.0, 90.0),
        font_size: 16.0,
        color: Rgb::WHITE,
        anchor: Anchor::Middle,
        font_weight: 400,
        font_family: None,
    });
    let r = Rasterizer::new(&RasterizerOpts::default()).unwrap();
    assert_eq!(r.font_face_count(), 0);
    r.rasterize(&s).unwrap();
}

#[test]
fn missing_font_file_is_an_error() {
    let opts = RasterizerOpts {
        font_files: vec!["does/not/exist.ttf".into()],
        ..RasterizerOpts::default()
    };
    assert!(Rasterizer::new(&opts).is_err());
}

#[test]
fn malformed_svg_is_a_render_error() {
    let r = Rasterizer::new(&RasterizerOpts::default()).unwrap();
    let err = r.rasterize_svg("<svg", 10, 10).err().unwrap();
    assert!(err.to_string().starts_with("render error:"));
}
