use super::*;

#[test]
fn uniform_field_samples_uniformly() {
    let field = BrightnessField::uniform(64, 48, 200);
    for (cols, rows) in [(1, 1), (7, 5), (160, 100)] {
        let grid = sample(&field, cols, rows);
        for r in 0..rows {
            for c in 0..cols {
                assert_eq!(grid.brightness(r, c), 200);
            }
        }
    }
}

#[test]
fn missing_samples_fall_back_to_mid_gray() {
    // Only the first row arrived.
    let field = BrightnessField::new(4, 4, vec![10, 20, 30, 40]);
    let grid = sample(&field, 4, 4);
    assert_eq!(grid.brightness(0, 2), 30);
    assert_eq!(grid.brightness(1, 0), FALLBACK_BRIGHTNESS);
    assert_eq!(grid.brightness(3, 3), FALLBACK_BRIGHTNESS);

    let empty = BrightnessField::new(0, 0, Vec::new());
    assert_eq!(sample(&empty, 3, 2).brightness(1, 1), FALLBACK_BRIGHTNESS);
}

#[test]
fn black_samples_stay_black() {
    let field = BrightnessField::new(2, 2, vec![0, 255, 0, 0]);
    let grid = sample(&field, 2, 2);
    assert_eq!(grid.brightness(0, 0), 0);
    assert_eq!(grid.brightness(0, 1), 255);
    assert_eq!(grid.brightness(1, 1), 0);
    assert_ne!(grid.brightness(1, 0), FALLBACK_BRIGHTNESS);
}

#[test]
fn nearest_sample_uses_floor_of_scaled_index() {
    let samples: Vec<u8> = (0..10).collect();
    let field = BrightnessField::new(10, 1, samples);
    let grid = sample(&field, 4, 1);
    // floor(col / 4 * 10) = 0, 2, 5, 7
    let got: Vec<u8> = (0..4).map(|c| grid.brightness(0, c)).collect();
    assert_eq!(got, vec![0, 2, 5, 7]);
}

#[test]
fn marker_is_grid_center() {
    let field = BrightnessField::uniform(8, 8, 0);
    assert_eq!(sample(&field, 75, 50).marker(), (25, 37));
    assert_eq!(sample(&field, 4, 3).marker(), (1, 2));
    let g = sample(&field, 5, 5);
    assert!(g.is_marker(2, 2));
    assert!(!g.is_marker(2, 3));
}

#[test]
fn out_of_range_get_is_none() {
    let field = BrightnessField::uniform(2, 2, 9);
    assert_eq!(field.get(1, 1), Some(9));
    assert_eq!(field.get(2, 0), None);
}
