//! Dot fill rules.
//!
//! Time-based dots use a three-way passed/current/future split over a
//! [`Timeline`]. Imagery dots quantize brightness through a per-theme band
//! table; the marker cell always takes the accent.

use crate::{
    color::palette::{Palette, Theme},
    foundation::core::Rgb,
    timeline::resolver::{ProgressState, Timeline},
};

/// Fill for the 1-based `unit` of `timeline`.
pub fn color_for(unit: u32, timeline: &Timeline, palette: &Palette, accent: Rgb) -> Rgb {
    match timeline.state() {
        ProgressState::NotStarted => palette.future,
        ProgressState::Completed => palette.passed,
        ProgressState::InProgress => {
            let current = timeline.current_unit();
            if unit < current {
                palette.passed
            } else if unit == current {
                accent
            } else {
                palette.future
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Bound {
    Below(f64),
    AtMost(f64),
    Any,
}

impl Bound {
    fn admits(self, ratio: f64) -> bool {
        match self {
            Bound::Below(v) => ratio < v,
            Bound::AtMost(v) => ratio <= v,
            Bound::Any => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tone {
    Passed,
    Future,
    Fixed(Rgb),
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Band {
    bound: Bound,
    tone: Tone,
}

const DARK_BANDS: [Band; 3] = [
    Band {
        bound: Bound::Below(0.4),
        tone: Tone::Future,
    },
    Band {
        bound: Bound::AtMost(0.7),
        tone: Tone::Fixed(Rgb::from_u32(0x5a5a5a)),
    },
    Band {
        bound: Bound::Any,
        tone: Tone::Passed,
    },
];

const LIGHT_BANDS: [Band; 3] = [
    Band {
        bound: Bound::Below(0.4),
        tone: Tone::Passed,
    },
    Band {
        bound: Bound::AtMost(0.7),
        tone: Tone::Fixed(Rgb::from_u32(0xa0a0a0)),
    },
    Band {
        bound: Bound::Any,
        tone: Tone::Future,
    },
];

fn bands(theme: Theme) -> &'static [Band] {
    match theme {
        Theme::Dark => &DARK_BANDS,
        Theme::Light => &LIGHT_BANDS,
    }
}

/// Fill for a non-marker imagery dot of the given `brightness` (0-255).
pub fn brightness_color(brightness: u8, theme: Theme) -> Rgb {
    let palette = theme.palette();
    let ratio = f64::from(brightness) / 255.0;
    let band = bands(theme)
        .iter()
        .find(|band| band.bound.admits(ratio))
        .map(|band| band.tone)
        .unwrap_or(Tone::Passed);
    match band {
        Tone::Passed => palette.passed,
        Tone::Future => palette.future,
        Tone::Fixed(c) => c,
    }
}

/// Fill for an imagery dot; the marker cell always takes `accent`.
pub fn sampled_color(brightness: u8, is_marker: bool, theme: Theme, accent: Rgb) -> Rgb {
    if is_marker {
        accent
    } else {
        brightness_color(brightness, theme)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/colorize.rs"]
mod tests;
