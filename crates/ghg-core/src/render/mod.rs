// File: crates/ghg-core/src/render/mod.rs
// Summary: Headless rendering pipeline using Skia CPU raster surfaces (PNG bytes/files, RGBA8 frames).

use std::path::Path;
use std::time::Instant;

use skia_safe as skia;
use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::text::TextShaper;
use crate::theme::Theme;

pub mod area;
pub mod line;
pub mod paint;

pub use area::AreaScene;
pub use line::LineScene;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Text is the only platform-dependent output; tests switch it off.
    pub draw_labels: bool,
    pub draw_legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), draw_labels: true, draw_legend: true }
    }
}

/// Something that paints itself onto a chart surface.
pub trait Scene {
    fn name(&self) -> &'static str;
    /// Surface size in pixels.
    fn size(&self) -> (i32, i32);
    fn paint(&self, canvas: &skia::Canvas, text: &TextShaper, opts: &RenderOptions);
}

/// RGBA8 pixels, unpremultiplied, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

fn rasterize(scene: &dyn Scene, opts: &RenderOptions) -> RenderResult<skia::Surface> {
    let (width, height) = scene.size();
    if width <= 0 || height <= 0 {
        return Err(RenderError::InvalidSurface { width, height });
    }
    let started = Instant::now();
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or(RenderError::InvalidSurface { width, height })?;
    let text = TextShaper::new();
    scene.paint(surface.canvas(), &text, opts);
    debug!(scene = scene.name(), width, height, elapsed_us = started.elapsed().as_micros() as u64, "painted scene");
    Ok(surface)
}

/// Render `scene` and return encoded PNG bytes.
pub fn render_png_bytes(scene: &dyn Scene, opts: &RenderOptions) -> RenderResult<Vec<u8>> {
    let mut surface = rasterize(scene, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RenderError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

/// Render `scene` to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(scene: &dyn Scene, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> RenderResult<()> {
    let path = output_png_path.as_ref();
    let bytes = render_png_bytes(scene, opts)?;
    let write_err = |source: std::io::Error| RenderError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, bytes).map_err(write_err)?;
    Ok(())
}

/// Render `scene` into an RGBA8 buffer (for blitting into a window).
pub fn render_to_rgba8(scene: &dyn Scene, opts: &RenderOptions) -> RenderResult<RgbaFrame> {
    let mut surface = rasterize(scene, opts)?;
    let (width, height) = scene.size();
    let info = skia::ImageInfo::new(
        (width, height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(RenderError::ReadPixels);
    }
    Ok(RgbaFrame { pixels, width: width as u32, height: height as u32, stride })
}
