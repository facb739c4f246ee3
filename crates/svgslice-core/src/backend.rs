// File: crates/svgslice-core/src/backend.rs
// Summary: Backend-agnostic seams: canvases, canvas factories, drawable graphics, and loaders.

use crate::bundle::ResourceBundle;
use crate::error::{Result, SliceError};
use crate::geometry::{Rect, Size};

/// Drawing surface produced by a [`CanvasFactory`].
pub trait Canvas {
    type Image;

    /// Draw `image` stretched to `dest` (logical units).
    fn draw_image(&mut self, image: &Self::Image, dest: Rect) -> Result<()>;

    /// Snapshot current contents.
    fn snapshot(&mut self) -> Result<Self::Image>;
}

/// Creates canvases of a logical size at a device scale.
pub trait CanvasFactory {
    type Canvas: Canvas;

    fn create(&mut self, size: Size, device_scale: f64) -> Result<Self::Canvas>;
}

impl<C, F> CanvasFactory for F
where
    C: Canvas,
    F: FnMut(Size, f64) -> Result<C>,
{
    type Canvas = C;

    fn create(&mut self, size: Size, device_scale: f64) -> Result<C> {
        self(size, device_scale)
    }
}

/// A loaded vector graphic that can draw onto canvases of type `C`.
///
/// `viewable` is a rect in the graphic's own coordinate space; it is mapped onto
/// the graphic's intrinsic size when drawing, so a viewable region smaller than
/// [`Graphic::size`] magnifies the content.
pub trait Graphic<C: ?Sized> {
    fn size(&self) -> Size;

    fn draw(&self, viewable: Rect, canvas: &mut C) -> Result<()>;
}

/// Decodes resource bytes into a graphic.
pub trait GraphicLoader {
    type Graphic;

    fn decode(&self, path: &str, bytes: &[u8]) -> Result<Self::Graphic>;

    /// Resolve `path` in `bundle` and decode it.
    fn load(&self, bundle: &dyn ResourceBundle, path: &str) -> Result<Self::Graphic> {
        let bytes = bundle.open(path).ok_or_else(|| SliceError::ResourceNotFound {
            bundle: bundle.name().to_string(),
            path: path.to_string(),
        })?;
        tracing::info!(bundle = bundle.name(), path, bytes = bytes.len(), "loading graphic");
        self.decode(path, &bytes)
    }
}
