//! SVG markup for a [`Scene`].
//!
//! The emitted primitive list is what the rasterizer consumes: a full-size
//! background rect, one `circle` or `rect` per dot, then `text` elements, then
//! the optional pill. Numbers use the shortest round-trip representation.

use std::fmt::Write as _;

use crate::scene::model::{Anchor, DotShape, DotSpec, Label, Pill, Scene};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Serialize `scene` to standalone SVG.
pub fn scene_to_svg(scene: &Scene) -> String {
    // ~60 bytes per dot covers circles and squares.
    let mut out = String::with_capacity(256 + scene.dots.len() * 64 + scene.labels.len() * 160);
    let (w, h) = (scene.canvas.width, scene.canvas.height);

    let _ = write!(
        out,
        r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}""#
    );
    if scene.crisp_edges {
        out.push_str(r#" shape-rendering="crispEdges""#);
    }
    out.push_str(">\n");
    let _ = writeln!(
        out,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        scene.background
    );

    for dot in &scene.dots {
        write_dot(&mut out, dot);
    }
    for label in &scene.labels {
        write_label(&mut out, label);
    }
    if let Some(pill) = &scene.pill {
        write_pill(&mut out, pill);
    }

    out.push_str("</svg>\n");
    out
}

fn write_dot(out: &mut String, dot: &DotSpec) {
    let d = dot.drawn_diameter();
    match dot.shape {
        DotShape::Circle => {
            let _ = writeln!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                dot.center.x,
                dot.center.y,
                d / 2.0,
                dot.color
            );
        }
        DotShape::Square | DotShape::Rounded => {
            let b = dot.bounds();
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{d}" height="{d}""#,
                b.x0, b.y0
            );
            if let Some(r) = dot.corner_radius() {
                let _ = write!(out, r#" rx="{r}" ry="{r}""#);
            }
            let _ = writeln!(out, r#" fill="{}"/>"#, dot.color);
        }
    }
}

fn write_label(out: &mut String, label: &Label) {
    let _ = write!(
        out,
        r#"<text x="{}" y="{}""#,
        label.position.x, label.position.y
    );
    if label.anchor == Anchor::Middle {
        out.push_str(r#" text-anchor="middle""#);
    }
    let _ = write!(out, r#" fill="{}""#, label.color);
    if let Some(family) = &label.font_family {
        let _ = write!(out, r#" font-family="{family}""#);
    }
    let _ = writeln!(
        out,
        r#" font-size="{}" font-weight="{}">{}</text>"#,
        label.font_size, label.font_weight, label.text
    );
}

fn write_pill(out: &mut String, pill: &Pill) {
    let r = pill.rect;
    let _ = writeln!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
        r.x0,
        r.y0,
        r.width(),
        r.height(),
        pill.corner_radius,
        pill.fill,
        pill.fill_opacity,
        pill.stroke,
        pill.stroke_opacity,
        pill.stroke_width
    );
    write_label(out, &pill.label);
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
