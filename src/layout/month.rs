//! Year-as-months layout: a 4×3 grid of month blocks, each holding a 7×6
//! weekday/week sub-grid.

use crate::{
    foundation::core::{Canvas, Point},
    layout::solver::{GridSpec, Margins},
    timeline::calendar::first_weekday_of_month,
};

/// Month blocks per row.
pub const MONTH_COLS: u32 = 4;
/// Rows of month blocks.
pub const MONTH_ROWS: u32 = 3;
/// Day columns (weekdays, Sunday first).
pub const DAY_COLS: u32 = 7;
/// Week rows per month.
pub const DAY_ROWS: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MonthProfile {
    margins: Margins,
    gap_x: f64,
    gap_y: f64,
    pad_x: f64,
    pad_top: f64,
    pad_bottom: f64,
    dot_ratio: f64,
    gap_ratio: f64,
}

// The negative vertical gap pulls the month rows together; the day area only
// fills the upper part of each block.
const MONTH_LAYOUT: MonthProfile = MonthProfile {
    margins: Margins {
        x: 0.12,
        top: 0.08,
        bottom: 0.15,
    },
    gap_x: 0.02,
    gap_y: -0.2,
    pad_x: 0.1,
    pad_top: 0.08,
    pad_bottom: 0.05,
    dot_ratio: 0.5,
    gap_ratio: 0.3,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// One month block.
pub struct MonthBlock {
    /// 1-based month.
    pub month: u32,
    /// Top-left corner of the block.
    pub origin: Point,
    /// Day sub-grid (7 columns × 6 rows) positioned on the canvas.
    pub days: GridSpec,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Solved month layout.
pub struct MonthLayout {
    /// Twelve blocks, January first.
    pub blocks: Vec<MonthBlock>,
    /// Block width.
    pub block_width: f64,
    /// Block height.
    pub block_height: f64,
    /// Horizontal inset of labels and days inside a block.
    pub pad_x: f64,
    /// Bottom margin in pixels; the status line sits on it.
    pub margin_bottom: f64,
}

impl MonthLayout {
    /// Font size of the month labels: `clamp(0.1 × block height, 12, 24)`.
    pub fn label_font_size(&self) -> f64 {
        (self.block_height * 0.1).clamp(12.0, 24.0)
    }

    /// Baseline position of a block's month label.
    pub fn label_position(&self, block: &MonthBlock) -> Point {
        Point::new(
            block.origin.x + self.pad_x,
            block.origin.y + self.label_font_size() * 1.1,
        )
    }
}

/// Lay out twelve month blocks on `canvas`.
pub fn solve_months(canvas: Canvas) -> MonthLayout {
    let p = MONTH_LAYOUT;
    let (w, h) = (canvas.w(), canvas.h());

    let margin_x = w * p.margins.x;
    let margin_top = h * p.margins.top;
    let margin_bottom = h * p.margins.bottom;
    let avail_w = w - margin_x * 2.0;
    let avail_h = h - margin_top - margin_bottom;

    let gap_x = w * p.gap_x;
    let gap_y = h * p.gap_y;
    let block_width = (avail_w - gap_x * f64::from(MONTH_COLS - 1)) / f64::from(MONTH_COLS);
    let block_height = (avail_h - gap_y * f64::from(MONTH_ROWS - 1)) / f64::from(MONTH_ROWS);

    let pad_x = block_width * p.pad_x;
    let pad_top = block_height * p.pad_top;
    let pad_bottom = block_height * p.pad_bottom;
    let area_w = block_width - pad_x * 2.0;
    let area_h = block_height - pad_top - pad_bottom;

    let cell_size = (area_w / f64::from(DAY_COLS)).min(area_h / f64::from(DAY_ROWS));
    let dot_diameter = cell_size * p.dot_ratio;
    let gap = cell_size * p.gap_ratio;

    let blocks = (1..=12)
        .map(|month| {
            let col = (month - 1) % MONTH_COLS;
            let row = (month - 1) / MONTH_COLS;
            let origin = Point::new(
                margin_x + f64::from(col) * (block_width + gap_x),
                margin_top + f64::from(row) * (block_height + gap_y),
            );
            MonthBlock {
                month,
                origin,
                days: GridSpec {
                    rows: DAY_ROWS,
                    cols: DAY_COLS,
                    cell_size,
                    dot_diameter,
                    gap,
                    offset_x: origin.x + pad_x,
                    offset_y: origin.y + pad_top,
                },
            }
        })
        .collect();

    MonthLayout {
        blocks,
        block_width,
        block_height,
        pad_x,
        margin_bottom,
    }
}

/// `(row, col)` of `day` inside its month's 7×6 sub-grid.
pub fn month_day_cell(year: i32, month: u32, day: u32) -> (u32, u32) {
    let index = first_weekday_of_month(year, month) + day - 1;
    (index / DAY_COLS, index % DAY_COLS)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/month.rs"]
mod tests;
