use crate::foundation::error::{DotcalError, DotcalResult};

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn validate(self) -> DotcalResult<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(DotcalError::validation("latitude must be within [-90, 90]"));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(DotcalError::validation(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(())
    }

    /// Parse a `"lat,lng"` pair such as `"48.8584, 2.2945"`.
    pub fn parse_pair(s: &str) -> Option<Self> {
        let (lat, lng) = s.split_once(',')?;
        let lat = parse_decimal(lat.trim())?;
        let lng = parse_decimal(lng.trim())?;
        Some(Self { lat, lng })
    }

    /// Display label used when a place was given as raw coordinates.
    pub fn label(self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }
}

// Accepts `-?digits(.digits?)?` only; exponents and signs like `+` are rejected.
fn parse_decimal(s: &str) -> Option<f64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match digits.split_once('.') {
        Some((i, f)) => (i, f),
        None => (digits, ""),
    };
    if int.is_empty() || !int.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Great-circle distance in kilometers (Haversine).
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Upper distance bound (exclusive, km) -> map zoom level.
const ZOOM_TABLE: [(f64, f64); 10] = [
    (1.0, 14.0),
    (5.0, 13.0),
    (20.0, 11.0),
    (50.0, 9.0),
    (100.0, 8.0),
    (200.0, 7.0),
    (500.0, 6.0),
    (1000.0, 5.0),
    (3000.0, 4.0),
    (8000.0, 3.0),
];

/// Zoom level that keeps two points of the given separation in frame.
pub fn optimal_zoom(distance_km: f64) -> f64 {
    ZOOM_TABLE
        .iter()
        .find(|(limit, _)| distance_km < *limit)
        .map(|(_, zoom)| *zoom)
        .unwrap_or(2.0)
}

/// First comma-separated component of a geocoder place name.
pub fn short_place_name(name: &str) -> &str {
    name.split(',').next().unwrap_or(name).trim()
}

/// Drop every non-ASCII character.
pub fn ascii_only(s: &str) -> String {
    s.chars().filter(char::is_ascii).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geo/coords.rs"]
mod tests;
