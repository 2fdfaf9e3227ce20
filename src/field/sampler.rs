//! Nearest-sample downsampling of a grayscale field onto a dot grid.

/// Brightness used where the field has no sample.
pub const FALLBACK_BRIGHTNESS: u8 = 128;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Row-major 8-bit luminance samples.
///
/// `samples` may be shorter than `width * height` (a partial fetch); missing
/// samples read as [`FALLBACK_BRIGHTNESS`].
pub struct BrightnessField {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl BrightnessField {
    /// Wrap decoded luminance samples.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Self {
        Self {
            width,
            height,
            samples,
        }
    }

    /// A field of one repeated value.
    pub fn uniform(width: u32, height: u32, value: u8) -> Self {
        let len = width as usize * height as usize;
        Self::new(width, height, vec![value; len])
    }

    /// Field width in samples.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Field height in samples.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample at `(x, y)`, if present.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.samples.get(idx).copied()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Brightness per grid cell plus the marker cell.
pub struct SampledGrid {
    cols: u32,
    rows: u32,
    values: Vec<u8>,
    marker: (u32, u32),
}

impl SampledGrid {
    /// Column count.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Row count.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Brightness of `(row, col)`.
    pub fn brightness(&self, row: u32, col: u32) -> u8 {
        self.values[(row * self.cols + col) as usize]
    }

    /// Marker cell as `(row, col)`; always the grid center.
    pub fn marker(&self) -> (u32, u32) {
        self.marker
    }

    /// Whether `(row, col)` is the marker.
    pub fn is_marker(&self, row: u32, col: u32) -> bool {
        self.marker == (row, col)
    }
}

/// Downsample `field` onto a `cols × rows` grid.
pub fn sample(field: &BrightnessField, cols: u32, rows: u32) -> SampledGrid {
    let mut values = Vec::with_capacity(cols as usize * rows as usize);
    for row in 0..rows {
        let y = source_index(row, rows, field.height());
        for col in 0..cols {
            let x = source_index(col, cols, field.width());
            values.push(field.get(x, y).unwrap_or(FALLBACK_BRIGHTNESS));
        }
    }

    SampledGrid {
        cols,
        rows,
        values,
        marker: (rows / 2, cols / 2),
    }
}

// floor(i / n * extent)
fn source_index(i: u32, n: u32, extent: u32) -> u32 {
    (f64::from(i) / f64::from(n) * f64::from(extent)).floor() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/field/sampler.rs"]
mod tests;
