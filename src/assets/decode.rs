use std::path::Path;

use anyhow::Context;

use crate::{
    field::sampler::BrightnessField, foundation::error::DotcalResult, render::raster::FrameRGBA,
};

/// Decode any supported image and keep its luminance as a brightness field.
pub fn decode_brightness_field(bytes: &[u8]) -> DotcalResult<BrightnessField> {
    let dyn_img = image::load_from_memory(bytes).context("decode imagery from memory")?;
    let luma = dyn_img.to_luma8();
    let (width, height) = luma.dimensions();
    Ok(BrightnessField::new(width, height, luma.into_raw()))
}

/// Read and decode a brightness field from disk.
pub fn load_brightness_field(path: &Path) -> DotcalResult<BrightnessField> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read imagery '{}'", path.display()))?;
    decode_brightness_field(&bytes)
}

/// Straight-alpha RGBA8 copy of `frame`.
pub fn unpremultiplied_rgba8(frame: &FrameRGBA) -> Vec<u8> {
    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut data);
    }
    data
}

/// Write `frame` as a PNG, creating parent directories.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> DotcalResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &unpremultiplied_rgba8(frame),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
