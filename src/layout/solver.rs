use crate::foundation::{
    core::{Canvas, Point},
    math::ceil_div,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Solved dot grid geometry in canvas pixels.
pub struct GridSpec {
    /// Row count.
    pub rows: u32,
    /// Column count.
    pub cols: u32,
    /// Size of one square cell before the dot/gap split.
    pub cell_size: f64,
    /// Dot diameter.
    pub dot_diameter: f64,
    /// Space between neighbouring dots.
    pub gap: f64,
    /// Left edge of the first column.
    pub offset_x: f64,
    /// Top edge of the first row.
    pub offset_y: f64,
}

impl GridSpec {
    /// Distance between neighbouring dot origins.
    pub fn pitch(&self) -> f64 {
        self.dot_diameter + self.gap
    }

    /// Row/column of the `index`-th item in row-major order.
    pub fn cell_of(&self, index: u32) -> (u32, u32) {
        (index / self.cols, index % self.cols)
    }

    /// Top-left corner of the dot at `(row, col)`.
    pub fn dot_origin(&self, row: u32, col: u32) -> Point {
        Point::new(
            self.offset_x + f64::from(col) * self.pitch(),
            self.offset_y + f64::from(row) * self.pitch(),
        )
    }

    /// Center of the dot at `(row, col)`.
    pub fn dot_center(&self, row: u32, col: u32) -> Point {
        let r = self.dot_diameter / 2.0;
        let o = self.dot_origin(row, col);
        Point::new(o.x + r, o.y + r)
    }

    /// Realized width: `cols` dots plus the gaps between them.
    pub fn grid_width(&self) -> f64 {
        span(self.cols, self.dot_diameter, self.gap)
    }

    /// Realized height: `rows` dots plus the gaps between them.
    pub fn grid_height(&self) -> f64 {
        span(self.rows, self.dot_diameter, self.gap)
    }
}

fn span(n: u32, dot: f64, gap: f64) -> f64 {
    f64::from(n) * dot + f64::from(n.saturating_sub(1)) * gap
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Canvas insets as fractions of the canvas size.
pub struct Margins {
    /// Left and right inset, fraction of width.
    pub x: f64,
    /// Top inset, fraction of height.
    pub top: f64,
    /// Bottom inset, fraction of height.
    pub bottom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How the column count is chosen.
pub enum ColumnPolicy {
    /// Column count from [`tiered_columns`], rows follow.
    Tiered,
    /// Fixed column count, rows follow.
    Columns(u32),
    /// Fixed rows and columns.
    Fixed {
        /// Column count.
        cols: u32,
        /// Row count.
        rows: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Per-variant layout constants.
pub struct LayoutProfile {
    /// Column policy.
    pub columns: ColumnPolicy,
    /// Canvas insets.
    pub margins: Margins,
    /// Dot diameter as a fraction of the cell.
    pub dot_ratio: f64,
    /// Gap as a fraction of the cell.
    pub gap_ratio: f64,
}

/// Continuous year grid.
pub const YEAR_LAYOUT: LayoutProfile = LayoutProfile {
    columns: ColumnPolicy::Columns(30),
    margins: Margins {
        x: 0.05,
        top: 0.08,
        bottom: 0.25,
    },
    dot_ratio: 0.45,
    gap_ratio: 0.3,
};

/// Goal countdown grid.
pub const GOAL_LAYOUT: LayoutProfile = LayoutProfile {
    columns: ColumnPolicy::Tiered,
    margins: Margins {
        x: 0.15,
        top: 0.22,
        bottom: 0.22,
    },
    dot_ratio: 0.55,
    gap_ratio: 0.35,
};

/// Life-in-weeks grid: 90 columns by 52 rows, weeks filled row by row.
pub const LIFE_LAYOUT: LayoutProfile = LayoutProfile {
    columns: ColumnPolicy::Fixed { cols: 90, rows: 52 },
    margins: Margins {
        x: 0.1,
        top: 0.18,
        bottom: 0.22,
    },
    dot_ratio: 0.6,
    gap_ratio: 0.3,
};

/// `(max item count, columns)`, first match wins.
const COLUMN_TIERS: [(u32, u32); 3] = [(30, 10), (100, 14), (200, 18)];
const WIDEST_COLUMNS: u32 = 22;

/// Column count for a day grid of `item_count` dots.
pub fn tiered_columns(item_count: u32) -> u32 {
    COLUMN_TIERS
        .iter()
        .find(|(max, _)| item_count <= *max)
        .map(|(_, cols)| *cols)
        .unwrap_or(WIDEST_COLUMNS)
}

/// Lay out `item_count` dots on `canvas` following `profile`.
#[tracing::instrument(level = "debug")]
pub fn solve(item_count: u32, canvas: Canvas, profile: &LayoutProfile) -> GridSpec {
    assert!(item_count >= 1, "grid needs at least one item");

    let (cols, rows) = match profile.columns {
        ColumnPolicy::Tiered => {
            let cols = tiered_columns(item_count);
            (cols, ceil_div(item_count, cols))
        }
        ColumnPolicy::Columns(cols) => (cols, ceil_div(item_count, cols)),
        ColumnPolicy::Fixed { cols, rows } => (cols, rows),
    };
    debug_assert!(u64::from(cols) * u64::from(rows) >= u64::from(item_count));

    let (w, h) = (canvas.w(), canvas.h());
    let margin_x = w * profile.margins.x;
    let margin_top = h * profile.margins.top;
    let margin_bottom = h * profile.margins.bottom;

    let avail_w = w - margin_x * 2.0;
    let avail_h = h - margin_top - margin_bottom;

    let cell_size = (avail_w / f64::from(cols)).min(avail_h / f64::from(rows));
    let dot_diameter = cell_size * profile.dot_ratio;
    let gap = cell_size * profile.gap_ratio;

    let grid_w = span(cols, dot_diameter, gap);
    let grid_h = span(rows, dot_diameter, gap);

    let grid = GridSpec {
        rows,
        cols,
        cell_size,
        dot_diameter,
        gap,
        offset_x: (w - grid_w) / 2.0,
        offset_y: margin_top + (avail_h - grid_h) / 2.0,
    };
    tracing::debug!(?grid, "solved dot grid");
    grid
}

/// Dot diameter as a fraction of the sampling pitch.
pub const SAMPLED_DOT_RATIO: f64 = 0.6;

/// Sampling pitch for imagery grids: `clamp(width / 120, 8, 16)`.
pub fn sample_spacing(canvas: Canvas) -> f64 {
    (canvas.w() / 120.0).clamp(8.0, 16.0)
}

/// Grid for imagery-based scenes; resolution follows the canvas size.
pub fn solve_sampled(canvas: Canvas) -> GridSpec {
    let spacing = sample_spacing(canvas);
    let (w, h) = (canvas.w(), canvas.h());
    let cols = (w / spacing).floor() as u32;
    let rows = (h / spacing).floor() as u32;
    let dot_diameter = spacing * SAMPLED_DOT_RATIO;

    GridSpec {
        rows,
        cols,
        cell_size: spacing,
        dot_diameter,
        gap: spacing - dot_diameter,
        offset_x: (w - f64::from(cols) * spacing) / 2.0,
        offset_y: (h - f64::from(rows) * spacing) / 2.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
