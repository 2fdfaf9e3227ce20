use super::*;
use crate::timeline::calendar::days_in_month;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn twelve_blocks_in_four_columns() {
    let layout = solve_months(Canvas {
        width: 2560,
        height: 1664,
    });
    assert_eq!(layout.blocks.len(), 12);
    assert_eq!(layout.blocks[0].month, 1);
    assert_eq!(layout.blocks[11].month, 12);

    // Same row for Jan..Apr, next row starts with May.
    assert!(approx(layout.blocks[0].origin.y, layout.blocks[3].origin.y));
    assert!(layout.blocks[4].origin.y > layout.blocks[0].origin.y);
    assert!(approx(layout.blocks[4].origin.x, layout.blocks[0].origin.x));
    assert!(approx(layout.blocks[0].origin.x, 2560.0 * 0.12));
}

#[test]
fn day_grid_is_seven_by_six_inside_padding() {
    let layout = solve_months(Canvas {
        width: 1920,
        height: 1080,
    });
    let jan = &layout.blocks[0];
    assert_eq!((jan.days.cols, jan.days.rows), (7, 6));
    assert!(approx(jan.days.offset_x, jan.origin.x + layout.pad_x));
    assert!(approx(jan.days.dot_diameter, jan.days.cell_size * 0.5));
    assert!(approx(jan.days.gap, jan.days.cell_size * 0.3));
    assert!(jan.days.grid_width() <= layout.block_width);
}

#[test]
fn label_font_is_clamped() {
    let small = solve_months(Canvas {
        width: 400,
        height: 300,
    });
    assert_eq!(small.label_font_size(), 12.0);
    let big = solve_months(Canvas {
        width: 6000,
        height: 4000,
    });
    assert_eq!(big.label_font_size(), 24.0);
}

#[test]
fn days_start_on_their_weekday() {
    // 2025-01-01 is a Wednesday.
    assert_eq!(month_day_cell(2025, 1, 1), (0, 3));
    assert_eq!(month_day_cell(2025, 1, 5), (1, 0));
    // A 31-day month starting on Saturday needs all six rows.
    assert_eq!(first_weekday_of_month(2025, 3), 6);
    assert_eq!(month_day_cell(2025, 3, days_in_month(2025, 3)), (5, 1));
}
