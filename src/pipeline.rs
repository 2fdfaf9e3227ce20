use chrono::NaiveDate;

use crate::{
    field::sampler::BrightnessField,
    foundation::error::{DotcalError, DotcalResult},
    request::model::{CalendarDef, WallpaperRequest},
    scene::{
        compose::{compose_goal, compose_journey, compose_life, compose_location, compose_year},
        model::Scene,
    },
    timeline::resolver::{Resolution, resolve},
};

/// Validate `req`, resolve it against `today` and compose its scene.
///
/// `today` is read once by the caller and shared by every step. Imagery-based
/// variants need a decoded `field`.
#[tracing::instrument(skip(req, field), fields(width = req.width, height = req.height))]
pub fn render_scene(
    req: &WallpaperRequest,
    today: NaiveDate,
    field: Option<&BrightnessField>,
) -> DotcalResult<Scene> {
    req.validate()?;
    let canvas = req.canvas()?;
    let style = req.style();

    let resolution = req.timeline_variant(today).map(|v| resolve(&v, today));

    let scene = match (&req.calendar, resolution) {
        (CalendarDef::Year { layout, .. }, Some(Resolution::Year(p))) => {
            compose_year(canvas, &style, &p, *layout)
        }
        (CalendarDef::Goal { title, .. }, Some(Resolution::Goal(p))) => {
            compose_goal(canvas, &style, &p, title)
        }
        (CalendarDef::Life { .. }, Some(Resolution::Life(p))) => compose_life(canvas, &style, &p),
        (CalendarDef::Location { .. }, None) => {
            compose_location(canvas, &style, require_field(field)?)
        }
        (CalendarDef::Journey { destination, .. }, Some(Resolution::Journey(p))) => {
            compose_journey(canvas, &style, &p, &destination.name, require_field(field)?)
        }
        (_, resolution) => {
            return Err(DotcalError::evaluation(format!(
                "calendar does not match its resolution {resolution:?}"
            )));
        }
    };

    tracing::debug!(
        dots = scene.dots.len(),
        labels = scene.labels.len(),
        status = scene.status.as_deref(),
        "composed scene"
    );
    Ok(scene)
}

fn require_field(field: Option<&BrightnessField>) -> DotcalResult<&BrightnessField> {
    field.ok_or_else(|| DotcalError::validation("this calendar needs a brightness field"))
}
