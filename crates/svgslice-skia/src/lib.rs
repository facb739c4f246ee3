// File: crates/svgslice-skia/src/lib.rs
// Summary: Skia backend entry point; raster canvases, SVG graphics, and PNG output helpers.

pub mod canvas;
pub mod svg;

pub use canvas::{SkiaCanvas, SkiaCanvasFactory, SkiaImage};
pub use svg::{SvgGraphic, SvgLoader};

use svgslice_core::{RenderOptions, Result, SliceError, SvgView};

/// An [`SvgView`] that loads SVGs through Skia.
pub type SkiaSvgView = SvgView<SvgLoader>;

/// Render `view` on transparent raster canvases and encode the result as PNG.
pub fn render_to_png_bytes(view: &SkiaSvgView, opts: &RenderOptions) -> Result<Vec<u8>> {
    let image = view.render_with(opts, &mut SkiaCanvasFactory::new())?;
    image.encode_png()
}

/// Render `view` and write a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(
    view: &SkiaSvgView,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(view, opts)?;
    let path = output_png_path.as_ref();
    let io = |err: std::io::Error| SliceError::backend(format!("writing {}: {err}", path.display()));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io)?;
    }
    std::fs::write(path, bytes).map_err(io)?;
    tracing::info!(path = %path.display(), "wrote png");
    Ok(())
}
