use super::*;
use crate::{
    foundation::core::{Canvas, Point, Rect, Rgb},
    scene::model::ROUNDED_CORNER_RATIO,
};

fn dot(shape: DotShape, size_multiplier: f64) -> DotSpec {
    DotSpec {
        index: 0,
        row: 0,
        col: 0,
        center: Point::new(15.0, 25.0),
        color: Rgb::from_u32(0xff6347),
        shape,
        diameter: 10.0,
        size_multiplier,
    }
}

fn scene_with(dots: Vec<DotSpec>) -> Scene {
    let mut scene = Scene::new(Canvas::new(200, 100).unwrap(), Rgb::from_u32(0x1a1a1a));
    scene.dots = dots;
    scene
}

#[test]
fn header_and_background() {
    let svg = scene_to_svg(&scene_with(vec![]));
    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100" viewBox="0 0 200 100">"#
    ));
    assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#1a1a1a"/>"##));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn dot_shapes() {
    let svg = scene_to_svg(&scene_with(vec![dot(DotShape::Circle, 1.0)]));
    assert!(svg.contains(r##"<circle cx="15" cy="25" r="5" fill="#ff6347"/>"##));

    let svg = scene_to_svg(&scene_with(vec![dot(DotShape::Square, 1.0)]));
    assert!(svg.contains(r##"<rect x="10" y="20" width="10" height="10" fill="#ff6347"/>"##));

    let svg = scene_to_svg(&scene_with(vec![dot(DotShape::Rounded, 1.0)]));
    assert!(svg.contains(r#"rx="2" ry="2""#));
    assert_eq!(ROUNDED_CORNER_RATIO, 0.2);
}

#[test]
fn marker_keeps_its_center() {
    let svg = scene_to_svg(&scene_with(vec![dot(DotShape::Circle, 2.0)]));
    assert!(svg.contains(r#"<circle cx="15" cy="25" r="10""#));

    let svg = scene_to_svg(&scene_with(vec![dot(DotShape::Square, 2.0)]));
    assert!(svg.contains(r#"<rect x="5" y="15" width="20" height="20""#));
}

#[test]
fn labels_follow_dots_and_pill_is_last() {
    let mut scene = scene_with(vec![dot(DotShape::Circle, 1.0)]);
    let label = Label {
        text: "Arrived at A &amp; B".to_string(),
        position: Point::new(100.0, 50.0),
        font_size: 18.0,
        color: Rgb::WHITE,
        anchor: Anchor::Middle,
        font_weight: 500,
        font_family: Some("Noto Sans".to_string()),
    };
    scene.labels.push(Label {
        text: "Jan".to_string(),
        anchor: Anchor::Start,
        font_family: None,
        font_weight: 400,
        ..label.clone()
    });
    scene.pill = Some(Pill {
        rect: Rect::new(10.0, 20.0, 290.0, 90.0),
        corner_radius: 25.0,
        fill: Rgb::BLACK,
        fill_opacity: 0.6,
        stroke: Rgb::WHITE,
        stroke_opacity: 0.2,
        stroke_width: 1.0,
        label,
    });
    let svg = scene_to_svg(&scene);

    let circle = svg.find("<circle").unwrap();
    let jan = svg.find(">Jan</text>").unwrap();
    let pill = svg.find(r#"rx="25""#).unwrap();
    let pill_text = svg.find("Arrived at A &amp; B</text>").unwrap();
    assert!(circle < jan && jan < pill && pill < pill_text);

    assert!(svg.contains(
        r##"<text x="100" y="50" fill="#ffffff" font-size="18" font-weight="400">Jan</text>"##
    ));
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(svg.contains(r#"font-family="Noto Sans""#));
    assert!(svg.contains(r#"width="280" height="70""#));
    assert!(svg.contains(r#"fill-opacity="0.6""#));
    assert!(svg.contains(r#"stroke-opacity="0.2" stroke-width="1""#));
}

#[test]
fn crisp_edges_flag() {
    let mut scene = scene_with(vec![]);
    scene.crisp_edges = true;
    assert!(scene_to_svg(&scene).contains(r#"shape-rendering="crispEdges""#));
}
