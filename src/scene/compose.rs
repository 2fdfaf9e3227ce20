//! Scene composition for each calendar variant.
//!
//! Composition is pure assembly: resolved progress and solved geometry go in,
//! an ordered [`Scene`] comes out.

use crate::{
    color::{
        colorize::{color_for, sampled_color},
        palette::{Palette, Theme},
    },
    field::sampler::{BrightnessField, sample},
    foundation::core::{Canvas, Point, Rect, Rgb},
    geo::coords::{ascii_only, short_place_name},
    layout::{
        month::{month_day_cell, solve_months},
        solver::{GOAL_LAYOUT, GridSpec, LIFE_LAYOUT, YEAR_LAYOUT, solve, solve_sampled},
    },
    scene::{
        model::{Anchor, DotShape, DotSpec, Label, Pill, Scene},
        status::{goal_status, journey_status, life_status, year_status},
        text::escape_markup,
    },
    timeline::{
        calendar::{day_of_year, days_in_month, month_abbrev},
        resolver::{GoalProgress, JourneyProgress, LifeProgress, Timeline, YearProgress},
    },
};

/// Size multiplier of the imagery marker dot.
pub const MARKER_SCALE: f64 = 2.0;

const MONTH_LABEL_FAMILY: &str = "Noto Sans, sans-serif";
const PILL_FAMILY: &str = "Noto Sans";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Arrangement of the year's day dots.
pub enum YearLayout {
    /// One continuous 30-column grid.
    #[default]
    Year,
    /// Twelve month blocks with weekday-aligned days.
    Month,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Styling shared by every variant.
pub struct Style {
    /// Theme selecting the palette.
    pub theme: Theme,
    /// Highlight for "today" and the marker.
    pub accent: Rgb,
    /// Dot glyph.
    pub shape: DotShape,
}

impl Style {
    fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    fn scene(&self, canvas: Canvas) -> Scene {
        Scene::new(canvas, self.palette().background)
    }

    fn dot(&self, index: u32, grid: &GridSpec, row: u32, col: u32, color: Rgb) -> DotSpec {
        DotSpec {
            index,
            row,
            col,
            center: grid.dot_center(row, col),
            color,
            shape: self.shape,
            diameter: grid.dot_diameter,
            size_multiplier: 1.0,
        }
    }
}

fn status_font(canvas: Canvas, ratio: f64) -> f64 {
    (canvas.h() * ratio).clamp(16.0, 32.0)
}

fn centered_label(text: String, canvas: Canvas, y: f64, font_size: f64, color: Rgb) -> Label {
    Label {
        text,
        position: Point::new(canvas.w() / 2.0, y),
        font_size,
        color,
        anchor: Anchor::Middle,
        font_weight: 400,
        font_family: None,
    }
}

fn push_timeline_dots(scene: &mut Scene, grid: &GridSpec, timeline: &Timeline, style: &Style) {
    let palette = style.palette();
    scene
        .dots
        .extend((0..timeline.total_units()).map(|i| {
            let (row, col) = grid.cell_of(i);
            let color = color_for(i + 1, timeline, palette, style.accent);
            style.dot(i, grid, row, col, color)
        }));
}

/// Year wallpaper in either layout.
#[tracing::instrument(level = "debug", skip(progress))]
pub fn compose_year(
    canvas: Canvas,
    style: &Style,
    progress: &YearProgress,
    layout: YearLayout,
) -> Scene {
    match layout {
        YearLayout::Year => compose_year_grid(canvas, style, progress),
        YearLayout::Month => compose_year_months(canvas, style, progress),
    }
}

fn compose_year_grid(canvas: Canvas, style: &Style, progress: &YearProgress) -> Scene {
    let timeline = &progress.timeline;
    let grid = solve(timeline.total_units(), canvas, &YEAR_LAYOUT);

    let mut scene = style.scene(canvas);
    push_timeline_dots(&mut scene, &grid, timeline, style);

    let font = status_font(canvas, 0.025);
    let y = grid.offset_y + grid.grid_height() + font * 5.5;
    let status = year_status(progress);
    scene
        .labels
        .push(centered_label(status.clone(), canvas, y, font, style.accent));
    scene.status = Some(status);
    scene
}

fn compose_year_months(canvas: Canvas, style: &Style, progress: &YearProgress) -> Scene {
    let palette = style.palette();
    let timeline = &progress.timeline;
    let layout = solve_months(canvas);
    let label_font = layout.label_font_size();

    let mut scene = style.scene(canvas);
    let mut index = 0;
    for block in &layout.blocks {
        for day in 1..=days_in_month(progress.year, block.month) {
            let (row, col) = month_day_cell(progress.year, block.month, day);
            let unit = day_of_year(progress.year, block.month, day);
            let color = color_for(unit, timeline, palette, style.accent);
            scene
                .dots
                .push(style.dot(index, &block.days, row, col, color));
            index += 1;
        }
    }

    scene.labels.extend(layout.blocks.iter().map(|block| Label {
        text: month_abbrev(block.month).to_string(),
        position: layout.label_position(block),
        font_size: label_font,
        color: palette.future,
        anchor: Anchor::Start,
        font_weight: 400,
        font_family: Some(MONTH_LABEL_FAMILY.to_string()),
    }));

    let font = status_font(canvas, 0.025);
    let y = canvas.h() - layout.margin_bottom;
    let status = year_status(progress);
    scene
        .labels
        .push(centered_label(status.clone(), canvas, y, font, style.accent));
    scene.status = Some(status);
    scene
}

/// Goal countdown with its (escaped) title above the grid.
#[tracing::instrument(level = "debug", skip(progress))]
pub fn compose_goal(canvas: Canvas, style: &Style, progress: &GoalProgress, title: &str) -> Scene {
    let timeline = &progress.timeline;
    let grid = solve(timeline.total_units(), canvas, &GOAL_LAYOUT);

    let mut scene = style.scene(canvas);
    push_timeline_dots(&mut scene, &grid, timeline, style);

    let margin_top = canvas.h() * GOAL_LAYOUT.margins.top;
    let margin_bottom = canvas.h() * GOAL_LAYOUT.margins.bottom;

    let title_font = (canvas.h() * 0.03).clamp(18.0, 36.0);
    scene.labels.push(centered_label(
        escape_markup(title).into_owned(),
        canvas,
        margin_top * 0.45,
        title_font,
        style.palette().passed,
    ));

    let status = goal_status(progress);
    scene.labels.push(centered_label(
        status.clone(),
        canvas,
        canvas.h() - margin_bottom * 0.65,
        status_font(canvas, 0.025),
        style.accent,
    ));
    scene.status = Some(status);
    scene
}

/// Life in weeks: 90 columns of 52 weeks.
#[tracing::instrument(level = "debug", skip(progress))]
pub fn compose_life(canvas: Canvas, style: &Style, progress: &LifeProgress) -> Scene {
    let timeline = &progress.timeline;
    let grid = solve(timeline.total_units(), canvas, &LIFE_LAYOUT);

    let mut scene = style.scene(canvas);
    scene.crisp_edges = true;
    push_timeline_dots(&mut scene, &grid, timeline, style);

    let grid_bottom = grid.offset_y + grid.grid_height();
    let status = life_status(progress);
    let mut label = centered_label(
        status.clone(),
        canvas,
        grid_bottom + (canvas.h() - grid_bottom) / 2.0,
        status_font(canvas, 0.028),
        style.accent,
    );
    label.font_weight = 500;
    label.font_family = Some(PILL_FAMILY.to_string());
    scene.labels.push(label);
    scene.status = Some(status);
    scene
}

fn push_sampled_dots(scene: &mut Scene, canvas: Canvas, style: &Style, field: &BrightnessField) {
    let grid = solve_sampled(canvas);
    let sampled = sample(field, grid.cols, grid.rows);
    let mut index = 0;
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let is_marker = sampled.is_marker(row, col);
            let color = sampled_color(
                sampled.brightness(row, col),
                is_marker,
                style.theme,
                style.accent,
            );
            let mut dot = style.dot(index, &grid, row, col, color);
            if is_marker {
                dot.size_multiplier = MARKER_SCALE;
            }
            scene.dots.push(dot);
            index += 1;
        }
    }
}

/// Dot-art of a brightness field with the marker at the center.
#[tracing::instrument(level = "debug", skip(field))]
pub fn compose_location(canvas: Canvas, style: &Style, field: &BrightnessField) -> Scene {
    let mut scene = style.scene(canvas);
    push_sampled_dots(&mut scene, canvas, style, field);
    scene
}

/// Journey dot-art with a status pill naming the destination.
#[tracing::instrument(level = "debug", skip(progress, field))]
pub fn compose_journey(
    canvas: Canvas,
    style: &Style,
    progress: &JourneyProgress,
    destination: &str,
    field: &BrightnessField,
) -> Scene {
    let mut scene = style.scene(canvas);
    push_sampled_dots(&mut scene, canvas, style, field);

    let name = ascii_only(short_place_name(destination));
    let plain = journey_status(progress, &name);
    let status = escape_markup(&plain).into_owned();
    scene.pill = Some(status_pill(canvas, style.theme, style.accent, &plain, &status));
    scene.status = Some(status);
    scene
}

const PILL_HEIGHT: f64 = 70.0;
const PILL_MIN_WIDTH: f64 = 280.0;
const PILL_BOTTOM_OFFSET: f64 = 240.0;
const PILL_CORNER_RADIUS: f64 = 25.0;

// Width follows the unescaped text; `markup` is what gets drawn.
fn status_pill(canvas: Canvas, theme: Theme, accent: Rgb, plain: &str, markup: &str) -> Pill {
    let font = (canvas.w() / 60.0).clamp(18.0, 24.0);
    let width = PILL_MIN_WIDTH.max(plain.chars().count() as f64 * font * 0.65);
    let x = canvas.w() / 2.0 - width / 2.0;
    let y = canvas.h() - PILL_BOTTOM_OFFSET;

    let (fill, fill_opacity, stroke, stroke_opacity) = match theme {
        Theme::Dark => (Rgb::BLACK, 0.6, Rgb::WHITE, 0.2),
        Theme::Light => (Rgb::WHITE, 0.7, Rgb::BLACK, 0.15),
    };

    let mut label = centered_label(
        markup.to_string(),
        canvas,
        y + PILL_HEIGHT / 2.0 + font / 3.0,
        font,
        accent,
    );
    label.font_weight = 500;
    label.font_family = Some(PILL_FAMILY.to_string());

    Pill {
        rect: Rect::new(x, y, x + width, y + PILL_HEIGHT),
        corner_radius: PILL_CORNER_RADIUS,
        fill,
        fill_opacity,
        stroke,
        stroke_opacity,
        stroke_width: 1.0,
        label,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compose.rs"]
mod tests;
