/// Round half up, matching how percentages are displayed on the wallpapers.
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Round to one decimal place.
pub(crate) fn round_tenth(x: f64) -> f64 {
    round_half_up(x * 10.0) / 10.0
}

pub(crate) fn ceil_div(n: u32, d: u32) -> u32 {
    debug_assert!(d > 0);
    n.div_ceil(d)
}

/// Integer percentage `round(part / whole * 100)`.
pub(crate) fn percent_of(part: u32, whole: u32) -> u32 {
    assert!(whole > 0, "percent_of requires a non-zero whole");
    round_half_up(f64::from(part) / f64::from(whole) * 100.0) as u32
}
