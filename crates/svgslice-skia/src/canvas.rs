// File: crates/svgslice-skia/src/canvas.rs
// Summary: CPU raster canvases and image snapshots backed by Skia surfaces.

use skia_safe as skia;
use svgslice_core::{Canvas, CanvasFactory, Rect, Result, Size, SliceError};

/// Pixel dimensions for a logical size at a device scale (rounded up).
pub fn pixel_size(size: Size, device_scale: f64) -> (i32, i32) {
    let px = |v: f64| (v.max(0.0) * device_scale).ceil() as i32;
    (px(size.width), px(size.height))
}

/// Creates N32 premultiplied raster canvases, optionally cleared to a background.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkiaCanvasFactory {
    pub background: Option<skia::Color>,
}

impl SkiaCanvasFactory {
    pub fn new() -> Self { Self::default() }

    pub fn with_background(background: skia::Color) -> Self {
        Self { background: Some(background) }
    }
}

impl CanvasFactory for SkiaCanvasFactory {
    type Canvas = SkiaCanvas;

    fn create(&mut self, size: Size, device_scale: f64) -> Result<SkiaCanvas> {
        let mut canvas = SkiaCanvas::new(size, device_scale)?;
        if let (Some(color), Some(sk)) = (self.background, canvas.sk_canvas()) {
            sk.clear(color);
        }
        Ok(canvas)
    }
}

/// Raster canvas in logical units; the device scale is applied as the base transform.
/// A zero-area canvas has no surface: draws are ignored and snapshots are empty.
pub struct SkiaCanvas {
    surface: Option<skia::Surface>,
    size: Size,
    device_scale: f64,
}

impl SkiaCanvas {
    pub fn new(size: Size, device_scale: f64) -> Result<Self> {
        if !(device_scale > 0.0 && device_scale.is_finite()) {
            return Err(SliceError::backend(format!("invalid device scale {device_scale}")));
        }
        let (w, h) = pixel_size(size, device_scale);
        if w == 0 || h == 0 {
            return Ok(Self { surface: None, size, device_scale });
        }
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| SliceError::backend(format!("failed to create {w}x{h} raster surface")))?;
        surface.canvas().scale((device_scale as f32, device_scale as f32));
        Ok(Self { surface: Some(surface), size, device_scale })
    }

    pub fn size(&self) -> Size { self.size }

    /// Underlying Skia canvas, or `None` for a zero-area canvas.
    pub fn sk_canvas(&mut self) -> Option<&skia::Canvas> {
        self.surface.as_mut().map(|s| &*s.canvas())
    }
}

impl Canvas for SkiaCanvas {
    type Image = SkiaImage;

    fn draw_image(&mut self, image: &SkiaImage, dest: Rect) -> Result<()> {
        let (Some(src), Some(sk)) = (image.image.as_ref(), self.sk_canvas()) else {
            return Ok(());
        };
        if dest.is_empty() {
            return Ok(());
        }
        let dst = skia::Rect::from_xywh(dest.x() as f32, dest.y() as f32, dest.width() as f32, dest.height() as f32);
        // Only the logical extent; the rounded-up padding column/row stays out of the seam.
        let content = image.content_rect();
        tracing::trace!(?dest, w = src.width(), h = src.height(), "draw image");
        sk.draw_image_rect(
            src,
            Some((&content, skia::canvas::SrcRectConstraint::Strict)),
            dst,
            &skia::Paint::default(),
        );
        Ok(())
    }

    fn snapshot(&mut self) -> Result<SkiaImage> {
        let image = self.surface.as_mut().map(|s| s.image_snapshot());
        Ok(SkiaImage { image, size: self.size, device_scale: self.device_scale })
    }
}

/// Immutable snapshot of a [`SkiaCanvas`].
#[derive(Clone)]
pub struct SkiaImage {
    image: Option<skia::Image>,
    size: Size,
    device_scale: f64,
}

impl SkiaImage {
    /// Logical size the image was rendered at.
    pub fn size(&self) -> Size { self.size }

    pub fn is_empty(&self) -> bool { self.image.is_none() }

    /// Pixel dimensions; `(0, 0)` for an empty image.
    pub fn pixel_size(&self) -> (i32, i32) {
        self.image.as_ref().map(|i| (i.width(), i.height())).unwrap_or((0, 0))
    }

    pub fn sk_image(&self) -> Option<&skia::Image> { self.image.as_ref() }

    /// Pixel rect covered by the logical size; may be fractional and smaller
    /// than [`SkiaImage::pixel_size`] when the surface was rounded up.
    pub fn content_rect(&self) -> skia::Rect {
        skia::Rect::from_wh(
            (self.size.width * self.device_scale) as f32,
            (self.size.height * self.device_scale) as f32,
        )
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let image = self
            .image
            .as_ref()
            .ok_or_else(|| SliceError::degenerate("cannot encode a zero-area image"))?;
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| SliceError::backend("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }
}
