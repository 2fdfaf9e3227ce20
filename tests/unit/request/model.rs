use serde_json::json;

use super::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn parse(v: serde_json::Value) -> WallpaperRequest {
    serde_json::from_value(v).unwrap()
}

#[test]
fn defaults_apply() {
    let req = parse(json!({
        "width": 1080,
        "height": 1920,
        "calendar": { "kind": "life", "birthday": "1990-05-17" }
    }));
    assert_eq!(req.accent, DEFAULT_ACCENT);
    assert_eq!(req.theme, Theme::Dark);
    assert_eq!(req.shape, DotShape::Circle);
    req.validate().unwrap();
}

#[test]
fn year_defaults_to_todays_year() {
    let req = parse(json!({
        "width": 1080,
        "height": 1920,
        "theme": "light",
        "shape": "rounded",
        "accent": "00AAFF",
        "calendar": { "kind": "year" }
    }));
    assert_eq!(req.accent, Rgb::new(0, 0xaa, 0xff));
    assert_eq!(
        req.timeline_variant(d(2026, 7, 1)),
        Some(TimelineVariant::Year { year: 2026 })
    );
    match req.calendar {
        CalendarDef::Year { layout, .. } => assert_eq!(layout, YearLayout::Year),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn rejects_bad_accent_and_kind() {
    let bad_accent = json!({
        "width": 500, "height": 500, "accent": "red",
        "calendar": { "kind": "year" }
    });
    assert!(serde_json::from_value::<WallpaperRequest>(bad_accent).is_err());

    let err = WallpaperRequest::from_json_str(
        r#"{"width":500,"height":500,"calendar":{"kind":"decade"}}"#,
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn validate_checks_canvas_and_goal_range() {
    let mut req = parse(json!({
        "width": 99,
        "height": 500,
        "calendar": {
            "kind": "goal",
            "start_date": "2025-01-10",
            "goal_date": "2025-01-01",
            "title": "Run"
        }
    }));
    let err = req.validate().unwrap_err();
    assert!(err.to_string().contains("at least 100px"));

    req.width = 500;
    let err = req.validate().unwrap_err();
    assert!(err.to_string().contains("before start_date"));

    req.calendar = CalendarDef::Goal {
        start_date: d(2025, 1, 1),
        goal_date: d(2025, 1, 1),
        title: "  ".to_string(),
    };
    assert!(req.validate().is_err());
}

#[test]
fn place_accepts_object_or_pair() {
    let req = parse(json!({
        "width": 800,
        "height": 800,
        "calendar": {
            "kind": "journey",
            "origin": "38.7223, -9.1393",
            "destination": { "name": "Porto, Portugal", "lat": 41.15, "lng": -8.61 },
            "target_date": "2025-03-10"
        }
    }));
    req.validate().unwrap();
    let CalendarDef::Journey {
        origin, destination, ..
    } = &req.calendar
    else {
        panic!("expected journey");
    };
    assert_eq!(origin.name, "38.7223, -9.1393");
    assert_eq!(origin.coords, Coordinates::new(38.7223, -9.1393));
    assert_eq!(destination.name, "Porto, Portugal");

    let bad = json!({
        "width": 800, "height": 800,
        "calendar": { "kind": "location", "place": "Lisbon" }
    });
    assert!(serde_json::from_value::<WallpaperRequest>(bad).is_err());
}

#[test]
fn out_of_range_coordinates_fail_validation() {
    let req = parse(json!({
        "width": 800,
        "height": 800,
        "calendar": { "kind": "location", "place": { "lat": 91.0, "lng": 0.0 } }
    }));
    assert!(req.validate().is_err());
}

#[test]
fn imagery_plan_follows_the_journey() {
    let req = parse(json!({
        "width": 1080,
        "height": 600,
        "calendar": {
            "kind": "journey",
            "origin": { "name": "A", "lat": 1.0, "lng": 2.0 },
            "destination": { "name": "B", "lat": 3.0, "lng": 4.0 },
            "target_date": "2025-03-10"
        }
    }));
    let before = req.imagery_plan(d(2025, 3, 9)).unwrap();
    assert_eq!(before.center, Coordinates::new(1.0, 2.0));
    assert_eq!(before.zoom, JOURNEY_ZOOM);
    assert_eq!((before.fetch_width, before.fetch_height), (800, 600));

    let after = req.imagery_plan(d(2025, 3, 10)).unwrap();
    assert_eq!(after.center, Coordinates::new(3.0, 4.0));
    assert!(req.needs_imagery());
}

#[test]
fn imagery_plan_matches_resolved_journey_stop() {
    let req = parse(json!({
        "width": 1080,
        "height": 1920,
        "calendar": {
            "kind": "journey",
            "origin": { "name": "A", "lat": 1.0, "lng": 2.0 },
            "destination": { "name": "B", "lat": 3.0, "lng": 4.0 },
            "target_date": "2025-03-10"
        }
    }));
    for today in [d(2024, 12, 31), d(2025, 3, 9), d(2025, 3, 10), d(2026, 1, 1)] {
        let variant = req.timeline_variant(today).unwrap();
        let expected = match resolve(&variant, today) {
            Resolution::Journey(p) if p.display == JourneyStop::Destination => {
                Coordinates::new(3.0, 4.0)
            }
            Resolution::Journey(_) => Coordinates::new(1.0, 2.0),
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(req.imagery_plan(today).unwrap().center, expected, "{today}");
    }
}

#[test]
fn imagery_plan_for_location_and_time_variants() {
    let req = parse(json!({
        "width": 400,
        "height": 900,
        "calendar": { "kind": "location", "place": "10.5,20", "zoom": 9.5 }
    }));
    let plan = req.imagery_plan(d(2025, 1, 1)).unwrap();
    assert_eq!(plan.zoom, 9.5);
    assert_eq!((plan.fetch_width, plan.fetch_height), (400, 800));
    assert!(plan.high_density);
    assert_eq!(req.timeline_variant(d(2025, 1, 1)), None);

    let life = parse(json!({
        "width": 400, "height": 900,
        "calendar": { "kind": "life", "birthday": "2000-01-01" }
    }));
    assert!(life.imagery_plan(d(2025, 1, 1)).is_none());
    assert!(!life.needs_imagery());
}

#[test]
fn zoom_outside_map_range_is_rejected() {
    let req = parse(json!({
        "width": 400, "height": 900,
        "calendar": { "kind": "location", "place": "0,0", "zoom": 30 }
    }));
    assert!(req.validate().is_err());
}
