// File: crates/svgslice-core/src/view.rs
// Summary: SvgView owns the render configuration (bundle, path, insets) and the cached graphic.

use std::sync::Arc;

use crate::backend::{Canvas, CanvasFactory, Graphic, GraphicLoader};
use crate::bundle::ResourceBundle;
use crate::compositor::compose;
use crate::error::{Result, SliceError};
use crate::geometry::Size;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: f64,
    pub height: f64,
    pub device_scale: f64,
}

impl RenderOptions {
    pub fn size(&self) -> Size { Size::new(self.width, self.height) }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, device_scale: 1.0 }
    }
}

/// What a configuration change requires of the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    /// Nothing changed.
    None,
    /// Same graphic, new layout; repaint.
    Redraw,
    /// The graphic was reloaded; repaint.
    Reloaded,
}

/// Configuration plus the graphic loaded from it. The host calls the setters,
/// repaints when they report a [`Change`], and calls [`SvgView::render`] from
/// its paint callback.
pub struct SvgView<L: GraphicLoader> {
    loader: L,
    bundle: Option<Arc<dyn ResourceBundle>>,
    path: Option<String>,
    insets: Insets,
    graphic: Option<L::Graphic>,
}

impl<L: GraphicLoader> SvgView<L> {
    pub fn new(loader: L) -> Self {
        Self { loader, bundle: None, path: None, insets: Insets::ZERO, graphic: None }
    }

    pub fn path(&self) -> Option<&str> { self.path.as_deref() }
    pub fn insets(&self) -> Insets { self.insets }
    pub fn graphic(&self) -> Option<&L::Graphic> { self.graphic.as_ref() }

    /// Set the resource path; reloads when a bundle is also set.
    pub fn set_path(&mut self, path: impl Into<String>) -> Result<Change> {
        let path = path.into();
        if self.path.as_deref() == Some(path.as_str()) {
            return Ok(Change::None);
        }
        self.path = Some(path);
        self.reload()
    }

    /// Set the bundle resources are resolved in; reloads when a path is also set.
    pub fn set_bundle(&mut self, bundle: Arc<dyn ResourceBundle>) -> Result<Change> {
        if self.bundle.as_ref().is_some_and(|b| Arc::ptr_eq(b, &bundle)) {
            return Ok(Change::None);
        }
        self.bundle = Some(bundle);
        self.reload()
    }

    pub fn set_insets(&mut self, insets: Insets) -> Change {
        if self.insets == insets {
            return Change::None;
        }
        self.insets = insets;
        Change::Redraw
    }

    /// Drop the cached graphic and load it again from the current bundle and path.
    /// On failure the view is left without a graphic.
    pub fn reload(&mut self) -> Result<Change> {
        self.graphic = None;
        let (Some(bundle), Some(path)) = (self.bundle.as_deref(), self.path.as_deref()) else {
            return Ok(Change::Redraw);
        };
        self.graphic = Some(self.loader.load(bundle, path)?);
        Ok(Change::Reloaded)
    }

    /// Render the loaded graphic at `output` using canvases from `factory`.
    pub fn render<F>(
        &self,
        output: Size,
        device_scale: f64,
        factory: &mut F,
    ) -> Result<<F::Canvas as Canvas>::Image>
    where
        F: CanvasFactory,
        L::Graphic: Graphic<F::Canvas>,
    {
        let graphic = self.graphic.as_ref().ok_or(SliceError::NoGraphic)?;
        compose(graphic, &self.insets, output, device_scale, factory)
    }

    pub fn render_with<F>(&self, opts: &RenderOptions, factory: &mut F) -> Result<<F::Canvas as Canvas>::Image>
    where
        F: CanvasFactory,
        L::Graphic: Graphic<F::Canvas>,
    {
        self.render(opts.size(), opts.device_scale, factory)
    }
}
