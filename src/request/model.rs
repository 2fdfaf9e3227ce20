//! JSON request document describing one wallpaper.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    color::palette::{DEFAULT_ACCENT, Theme},
    foundation::{
        core::{Canvas, Rgb},
        error::{DotcalError, DotcalResult},
    },
    geo::coords::Coordinates,
    scene::{
        compose::{Style, YearLayout},
        model::DotShape,
    },
    timeline::resolver::{JourneyProgress, JourneyStop, Resolution, TimelineVariant, resolve},
};

/// Default zoom for a single-location wallpaper.
pub const LOCATION_ZOOM: f64 = 14.0;
/// Default zoom for a journey wallpaper.
pub const JOURNEY_ZOOM: f64 = 16.0;
/// Largest imagery request edge in pixels.
pub const MAX_FETCH_EDGE: u32 = 800;
const MAX_ZOOM: f64 = 22.0;

fn default_accent() -> Rgb {
    DEFAULT_ACCENT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One wallpaper: canvas, styling and calendar variant.
pub struct WallpaperRequest {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Highlight color, `rrggbb`.
    #[serde(default = "default_accent")]
    pub accent: Rgb,
    /// Palette theme.
    #[serde(default)]
    pub theme: Theme,
    /// Dot glyph.
    #[serde(default)]
    pub shape: DotShape,
    /// Variant and its parameters.
    pub calendar: CalendarDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Calendar variant parameters.
pub enum CalendarDef {
    /// Progress through a calendar year.
    Year {
        /// Any date inside the year to show; defaults to today's year.
        #[serde(default)]
        start_date: Option<NaiveDate>,
        /// Continuous grid or month blocks.
        #[serde(default)]
        layout: YearLayout,
    },
    /// Countdown to a goal date.
    Goal {
        /// First day.
        start_date: NaiveDate,
        /// Last day.
        goal_date: NaiveDate,
        /// Title shown above the grid.
        title: String,
    },
    /// Life in weeks.
    Life {
        /// Date of birth.
        birthday: NaiveDate,
    },
    /// Dot-art of the imagery around one place.
    Location {
        /// Place to show.
        place: Place,
        /// Imagery zoom level.
        #[serde(default)]
        zoom: Option<f64>,
    },
    /// Dot-art of a trip's origin, then its destination once arrived.
    Journey {
        /// Departure place.
        origin: Place,
        /// Arrival place.
        destination: Place,
        /// Arrival date.
        target_date: NaiveDate,
        /// Imagery zoom level.
        #[serde(default)]
        zoom: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A named point on the map.
///
/// Deserializes from `{ "name", "lat", "lng" }` or a `"lat,lng"` string.
pub struct Place {
    /// Display name.
    pub name: String,
    /// Position.
    #[serde(flatten)]
    pub coords: Coordinates,
}

impl<'de> Deserialize<'de> for Place {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Pair(String),
            Obj {
                #[serde(default)]
                name: Option<String>,
                lat: f64,
                lng: f64,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Pair(s) => {
                let coords = Coordinates::parse_pair(&s).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "invalid place \"{s}\": expected \"lat,lng\""
                    ))
                })?;
                Ok(Place::from_coords(coords))
            }
            Repr::Obj { name, lat, lng } => {
                let coords = Coordinates::new(lat, lng);
                Ok(match name {
                    Some(name) => Place { name, coords },
                    None => Place::from_coords(coords),
                })
            }
        }
    }
}

impl Place {
    /// Unnamed place labelled by its coordinates.
    pub fn from_coords(coords: Coordinates) -> Self {
        Self {
            name: coords.label(),
            coords,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// What the imagery collaborator should fetch.
pub struct ImageryPlan {
    /// Center of the image.
    pub center: Coordinates,
    /// Map zoom level.
    pub zoom: f64,
    /// Requested width in pixels.
    pub fetch_width: u32,
    /// Requested height in pixels.
    pub fetch_height: u32,
    /// Ask for a double-density image.
    pub high_density: bool,
}

impl WallpaperRequest {
    /// Parse a request from JSON.
    pub fn from_json_str(s: &str) -> DotcalResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Output canvas.
    pub fn canvas(&self) -> DotcalResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Styling shared by all variants.
    pub fn style(&self) -> Style {
        Style {
            theme: self.theme,
            accent: self.accent,
            shape: self.shape,
        }
    }

    /// Reject requests the composer cannot render.
    pub fn validate(&self) -> DotcalResult<()> {
        self.canvas()?;
        match &self.calendar {
            CalendarDef::Year { .. } | CalendarDef::Life { .. } => {}
            CalendarDef::Goal {
                start_date,
                goal_date,
                title,
            } => {
                if title.trim().is_empty() {
                    return Err(DotcalError::validation("goal title must be non-empty"));
                }
                if goal_date < start_date {
                    return Err(DotcalError::validation(format!(
                        "goal_date {goal_date} is before start_date {start_date}"
                    )));
                }
            }
            CalendarDef::Location { place, zoom } => {
                place.coords.validate()?;
                validate_zoom(*zoom)?;
            }
            CalendarDef::Journey {
                origin,
                destination,
                zoom,
                ..
            } => {
                origin.coords.validate()?;
                destination.coords.validate()?;
                validate_zoom(*zoom)?;
            }
        }
        Ok(())
    }

    /// Timeline to resolve, `None` for imagery-only variants.
    pub fn timeline_variant(&self, today: NaiveDate) -> Option<TimelineVariant> {
        match &self.calendar {
            CalendarDef::Year { start_date, .. } => Some(TimelineVariant::Year {
                year: start_date.unwrap_or(today).year(),
            }),
            CalendarDef::Goal {
                start_date,
                goal_date,
                ..
            } => Some(TimelineVariant::Goal {
                start: *start_date,
                goal: *goal_date,
            }),
            CalendarDef::Life { birthday } => Some(TimelineVariant::Life {
                birthday: *birthday,
            }),
            CalendarDef::Location { .. } => None,
            CalendarDef::Journey {
                origin,
                destination,
                target_date,
                ..
            } => Some(TimelineVariant::Journey {
                target: *target_date,
                origin: origin.coords,
                destination: destination.coords,
            }),
        }
    }

    /// Whether rendering needs a brightness field.
    pub fn needs_imagery(&self) -> bool {
        matches!(
            self.calendar,
            CalendarDef::Location { .. } | CalendarDef::Journey { .. }
        )
    }

    /// Imagery to fetch before rendering, for imagery-based variants.
    pub fn imagery_plan(&self, today: NaiveDate) -> Option<ImageryPlan> {
        let (center, zoom, high_density) = match &self.calendar {
            CalendarDef::Location { place, zoom } => {
                (place.coords, zoom.unwrap_or(LOCATION_ZOOM), true)
            }
            CalendarDef::Journey {
                origin,
                destination,
                target_date,
                zoom,
            } => {
                let variant = TimelineVariant::Journey {
                    target: *target_date,
                    origin: origin.coords,
                    destination: destination.coords,
                };
                let stop = match resolve(&variant, today) {
                    Resolution::Journey(JourneyProgress {
                        display: JourneyStop::Destination,
                        ..
                    }) => destination,
                    _ => origin,
                };
                (stop.coords, zoom.unwrap_or(JOURNEY_ZOOM), false)
            }
            _ => return None,
        };
        Some(ImageryPlan {
            center,
            zoom,
            fetch_width: self.width.min(MAX_FETCH_EDGE),
            fetch_height: self.height.min(MAX_FETCH_EDGE),
            high_density,
        })
    }
}

fn validate_zoom(zoom: Option<f64>) -> DotcalResult<()> {
    match zoom {
        Some(z) if !z.is_finite() || !(0.0..=MAX_ZOOM).contains(&z) => Err(
            DotcalError::validation(format!("zoom must be within [0, {MAX_ZOOM}]")),
        ),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/request/model.rs"]
mod tests;
