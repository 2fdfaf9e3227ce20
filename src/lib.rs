//! dotcal renders dot-grid progress wallpapers.
//!
//! A wallpaper is a grid of dots where each dot is a day or a week (year, goal
//! countdown, life in weeks) or a sample of satellite imagery (location,
//! journey). The core is pure: a validated [`WallpaperRequest`], a fixed
//! "today" and, for imagery variants, a decoded [`BrightnessField`] produce a
//! [`Scene`]. Collaborators turn scenes into SVG or pixels:
//!
//! - [`render_scene`] validates, resolves and composes
//! - [`scene_to_svg`] writes the scene as SVG markup
//! - [`Rasterizer`] renders it with explicitly configured fonts
#![forbid(unsafe_code)]

mod assets;
mod foundation;

pub(crate) mod color;
pub(crate) mod field;
pub(crate) mod geo;
pub(crate) mod layout;
pub(crate) mod pipeline;
pub(crate) mod render;
pub(crate) mod request;
pub(crate) mod scene;
pub(crate) mod timeline;

pub use crate::foundation::core::{Canvas, MAX_DIMENSION, MIN_DIMENSION, Point, Rect, Rgb};
pub use crate::foundation::error::{DotcalError, DotcalResult};

pub use crate::assets::decode::{
    decode_brightness_field, load_brightness_field, unpremultiplied_rgba8, write_png,
};
pub use crate::color::colorize::{brightness_color, color_for, sampled_color};
pub use crate::color::palette::{DEFAULT_ACCENT, Palette, Theme};
pub use crate::field::sampler::{BrightnessField, FALLBACK_BRIGHTNESS, SampledGrid, sample};
pub use crate::geo::coords::{Coordinates, haversine_km, optimal_zoom};
pub use crate::layout::month::{MonthBlock, MonthLayout, solve_months};
pub use crate::layout::solver::{
    ColumnPolicy, GOAL_LAYOUT, GridSpec, LIFE_LAYOUT, LayoutProfile, Margins, YEAR_LAYOUT, solve,
    solve_sampled, tiered_columns,
};
pub use crate::pipeline::render_scene;
pub use crate::render::raster::{DEFAULT_FONT_FAMILY, FrameRGBA, Rasterizer, RasterizerOpts};
pub use crate::render::svg::scene_to_svg;
pub use crate::request::model::{CalendarDef, ImageryPlan, Place, WallpaperRequest};
pub use crate::scene::compose::{
    Style, YearLayout, compose_goal, compose_journey, compose_life, compose_location, compose_year,
};
pub use crate::scene::model::{Anchor, DotShape, DotSpec, Label, Pill, Scene};
pub use crate::scene::status::status_text;
pub use crate::scene::text::escape_markup;
pub use crate::timeline::resolver::{
    GoalProgress, JourneyProgress, JourneyStop, LifeProgress, ProgressState, Resolution,
    TOTAL_WEEKS, Timeline, TimelineVariant, YearProgress, resolve,
};
