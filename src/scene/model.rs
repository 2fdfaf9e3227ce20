//! Drawable scene description produced by the composer.
//!
//! A [`Scene`] is an ordered primitive list: background, then dots, then text
//! labels, then the optional status pill. Later primitives overlay earlier
//! ones. Label text is already markup-escaped.

use crate::foundation::core::{Canvas, Point, Rect, Rgb};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Dot glyph.
pub enum DotShape {
    /// Filled circle.
    #[default]
    Circle,
    /// Filled square.
    Square,
    /// Square with corner radius `0.2 × diameter`.
    Rounded,
}

/// Corner radius of a rounded dot as a fraction of its drawn diameter.
pub const ROUNDED_CORNER_RATIO: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// One dot, tied to a timeline unit or a sampled cell.
pub struct DotSpec {
    /// 0-based position in drawing order.
    pub index: u32,
    /// Grid row.
    pub row: u32,
    /// Grid column.
    pub col: u32,
    /// Center in canvas pixels.
    pub center: Point,
    /// Fill.
    pub color: Rgb,
    /// Glyph.
    pub shape: DotShape,
    /// Base diameter from the grid.
    pub diameter: f64,
    /// 1.0 for ordinary dots, 2.0 for the marker.
    pub size_multiplier: f64,
}

impl DotSpec {
    /// Diameter actually drawn.
    pub fn drawn_diameter(&self) -> f64 {
        self.diameter * self.size_multiplier
    }

    /// Square bounds of the drawn glyph.
    pub fn bounds(&self) -> Rect {
        let r = self.drawn_diameter() / 2.0;
        Rect::new(
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        )
    }

    /// Corner radius for [`DotShape::Rounded`], `None` otherwise.
    pub fn corner_radius(&self) -> Option<f64> {
        match self.shape {
            DotShape::Rounded => Some(self.drawn_diameter() * ROUNDED_CORNER_RATIO),
            DotShape::Circle | DotShape::Square => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Horizontal text anchor.
pub enum Anchor {
    /// `x` is the left edge.
    Start,
    /// `x` is the center.
    Middle,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A single line of text.
pub struct Label {
    /// Markup-ready text.
    pub text: String,
    /// Anchor point on the baseline.
    pub position: Point,
    /// Font size in pixels.
    pub font_size: f64,
    /// Fill.
    pub color: Rgb,
    /// Horizontal anchor.
    pub anchor: Anchor,
    /// CSS font weight.
    pub font_weight: u16,
    /// Font family list; the rasterizer default applies when `None`.
    pub font_family: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Translucent rounded badge with a centered status line.
pub struct Pill {
    /// Badge rectangle.
    pub rect: Rect,
    /// Corner radius.
    pub corner_radius: f64,
    /// Fill color.
    pub fill: Rgb,
    /// Fill alpha in `[0, 1]`.
    pub fill_opacity: f64,
    /// Stroke color.
    pub stroke: Rgb,
    /// Stroke alpha in `[0, 1]`.
    pub stroke_opacity: f64,
    /// Stroke width.
    pub stroke_width: f64,
    /// Text drawn over the badge.
    pub label: Label,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Complete, immutable output of one composition.
pub struct Scene {
    /// Output size.
    pub canvas: Canvas,
    /// Background fill.
    pub background: Rgb,
    /// Ask the rasterizer for unantialiased edges.
    pub crisp_edges: bool,
    /// Dots in drawing order.
    pub dots: Vec<DotSpec>,
    /// Text labels, drawn after the dots.
    pub labels: Vec<Label>,
    /// Optional status badge, drawn last.
    pub pill: Option<Pill>,
    /// Status line shown by the scene, if any.
    pub status: Option<String>,
}

impl Scene {
    /// Empty scene with only a background.
    pub fn new(canvas: Canvas, background: Rgb) -> Self {
        Self {
            canvas,
            background,
            crisp_edges: false,
            dots: Vec::new(),
            labels: Vec::new(),
            pill: None,
            status: None,
        }
    }

    /// The marker dot, if the scene has one.
    pub fn marker(&self) -> Option<&DotSpec> {
        self.dots.iter().find(|d| d.size_multiplier > 1.0)
    }
}
