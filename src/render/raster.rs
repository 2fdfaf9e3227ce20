//! Scene rasterization through usvg/resvg.
//!
//! Fonts are configured once, explicitly, when the [`Rasterizer`] is built.
//! Nothing is read from the process environment.

use std::path::PathBuf;

use anyhow::Context;

use crate::{
    foundation::error::{DotcalError, DotcalResult},
    render::svg::scene_to_svg,
    scene::model::Scene,
};

/// Family used for text without an explicit `font-family`.
pub const DEFAULT_FONT_FAMILY: &str = "Noto Sans";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Font configuration for a [`Rasterizer`].
pub struct RasterizerOpts {
    /// Font files to load.
    pub font_files: Vec<PathBuf>,
    /// In-memory font blobs to load.
    pub font_data: Vec<Vec<u8>>,
    /// Also load fonts installed on the system.
    pub load_system_fonts: bool,
    /// Fallback family for unstyled text.
    pub default_font_family: String,
}

impl Default for RasterizerOpts {
    fn default() -> Self {
        Self {
            font_files: Vec::new(),
            font_data: Vec::new(),
            load_system_fonts: false,
            default_font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
/// Rendered pixels.
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Turns scenes into pixels.
pub struct Rasterizer {
    opts: usvg::Options<'static>,
}

impl Rasterizer {
    /// Load fonts and prepare parsing options.
    pub fn new(cfg: &RasterizerOpts) -> DotcalResult<Self> {
        let mut opts = usvg::Options {
            font_family: cfg.default_font_family.clone(),
            ..usvg::Options::default()
        };

        let fontdb = opts.fontdb_mut();
        if cfg.load_system_fonts {
            fontdb.load_system_fonts();
        }
        for path in &cfg.font_files {
            fontdb
                .load_font_file(path)
                .with_context(|| format!("load font '{}'", path.display()))?;
        }
        for data in &cfg.font_data {
            fontdb.load_font_data(data.clone());
        }

        tracing::debug!(faces = fontdb.len(), "rasterizer fonts loaded");
        Ok(Self { opts })
    }

    /// Number of font faces available to text.
    pub fn font_face_count(&self) -> usize {
        self.opts.fontdb.len()
    }

    /// Rasterize a scene at its canvas size.
    #[tracing::instrument(skip(self, scene), fields(width = scene.canvas.width, height = scene.canvas.height))]
    pub fn rasterize(&self, scene: &Scene) -> DotcalResult<FrameRGBA> {
        self.rasterize_svg(&scene_to_svg(scene), scene.canvas.width, scene.canvas.height)
    }

    /// Rasterize SVG markup into a `width × height` frame.
    pub fn rasterize_svg(&self, svg: &str, width: u32, height: u32) -> DotcalResult<FrameRGBA> {
        let tree = usvg::Tree::from_str(svg, &self.opts)
            .map_err(|e| DotcalError::render(format!("parse scene svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| DotcalError::render("failed to allocate pixmap"))?;

        let sx = (width as f32) / tree.size().width();
        let sy = (height as f32) / tree.size().height();
        let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
        resvg::render(&tree, xform, &mut pixmap.as_mut());

        Ok(FrameRGBA {
            width,
            height,
            data: pixmap.take(),
            premultiplied: true,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
