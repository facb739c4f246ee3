// File: crates/svgslice-skia/src/svg.rs
// Summary: SVG graphics parsed with Skia's SVG DOM, drawn through a viewable region.

use skia_safe as skia;
use skia::svg::Dom;
use svgslice_core::{Graphic, GraphicLoader, Rect, Result, Size, SliceError};

use crate::canvas::SkiaCanvas;

pub struct SvgGraphic {
    dom: Dom,
    size: Size,
}

impl SvgGraphic {
    /// Parse `bytes`. The intrinsic size comes from the root element; when the
    /// document does not declare one, `fallback` is used as the container size.
    pub fn parse(path: &str, bytes: &[u8], font_mgr: skia::FontMgr, fallback: Option<Size>) -> Result<Self> {
        let mut dom = Dom::from_bytes(bytes, font_mgr).map_err(|err| SliceError::InvalidGraphic {
            path: path.to_string(),
            reason: format!("{err:?}"),
        })?;
        let declared = dom.container_size();
        let mut size = Size::new(declared.width as f64, declared.height as f64);
        if size.is_empty() {
            if let Some(fb) = fallback {
                dom.set_container_size((fb.width as f32, fb.height as f32));
                size = fb;
            }
        }
        tracing::debug!(path, width = size.width, height = size.height, "parsed svg");
        Ok(Self { dom, size })
    }

    pub fn intrinsic_size(&self) -> Size { self.size }
}

impl Graphic<SkiaCanvas> for SvgGraphic {
    fn size(&self) -> Size { self.intrinsic_size() }

    /// Scales by `size / viewable.size` and shifts `viewable.origin` to the canvas origin.
    fn draw(&self, viewable: Rect, canvas: &mut SkiaCanvas) -> Result<()> {
        if viewable.is_empty() {
            return Err(SliceError::degenerate(format!("empty viewable region {viewable:?}")));
        }
        let Some(sk) = canvas.sk_canvas() else {
            return Ok(());
        };
        let sx = (self.size.width / viewable.width()) as f32;
        let sy = (self.size.height / viewable.height()) as f32;
        tracing::trace!(?viewable, sx, sy, "draw svg");

        sk.save();
        sk.scale((sx, sy));
        sk.translate((-viewable.x() as f32, -viewable.y() as f32));
        // Content outside the declared bounds never shows, whatever the viewable region.
        sk.clip_rect(skia::Rect::from_wh(self.size.width as f32, self.size.height as f32), skia::ClipOp::Intersect, true);
        self.dom.render(sk);
        sk.restore();
        Ok(())
    }
}

/// Loads SVG resources into [`SvgGraphic`]s.
#[derive(Clone)]
pub struct SvgLoader {
    font_mgr: skia::FontMgr,
    fallback_size: Option<Size>,
}

impl SvgLoader {
    pub fn new() -> Self {
        Self { font_mgr: skia::FontMgr::default(), fallback_size: None }
    }

    /// Size used for documents that declare no intrinsic width/height.
    pub fn with_fallback_size(mut self, size: Size) -> Self {
        self.fallback_size = Some(size);
        self
    }
}

impl Default for SvgLoader {
    fn default() -> Self { Self::new() }
}

impl GraphicLoader for SvgLoader {
    type Graphic = SvgGraphic;

    fn decode(&self, path: &str, bytes: &[u8]) -> Result<SvgGraphic> {
        SvgGraphic::parse(path, bytes, self.font_mgr.clone(), self.fallback_size)
    }
}
