// File: crates/svgslice-core/src/compositor.rs
// Summary: Composite a graphic onto a final canvas, nine-sliced or proportionally fitted.

use crate::backend::{Canvas, CanvasFactory, Graphic};
use crate::error::Result;
use crate::fit::proportional_fit;
use crate::geometry::Size;
use crate::section::frame_pairs;
use crate::slice::render_slice;
use crate::types::Insets;

/// Render `graphic` at `output` and return the final image.
///
/// Non-zero `insets` take the sliced path: each section is rendered to its own
/// canvas in row-major order and drawn at its destination rect. Zero insets
/// draw the whole graphic once through a proportional fit. Any failure aborts
/// the render; no partial composite is returned.
pub fn compose<G, F>(
    graphic: &G,
    insets: &Insets,
    output: Size,
    device_scale: f64,
    factory: &mut F,
) -> Result<<F::Canvas as Canvas>::Image>
where
    F: CanvasFactory,
    G: Graphic<F::Canvas> + ?Sized,
{
    let original = graphic.size();
    if insets.is_zero() {
        return compose_fitted(graphic, original, output, device_scale, factory);
    }

    // Validate all frames up front so a bad configuration fails before any canvas is made.
    let pairs = frame_pairs(insets, original, output)?;
    tracing::debug!(%insets, ?original, ?output, device_scale, "compositing nine slices");

    let mut final_canvas = factory.create(output, device_scale)?;
    for (section, source, dest) in pairs {
        let image = render_slice(graphic, source, dest, device_scale, factory)?;
        tracing::trace!(?section, ?source, ?dest, "drawing slice");
        final_canvas.draw_image(&image, dest)?;
    }
    final_canvas.snapshot()
}

fn compose_fitted<G, F>(
    graphic: &G,
    original: Size,
    output: Size,
    device_scale: f64,
    factory: &mut F,
) -> Result<<F::Canvas as Canvas>::Image>
where
    F: CanvasFactory,
    G: Graphic<F::Canvas> + ?Sized,
{
    let mut final_canvas = factory.create(output, device_scale)?;
    if output.is_empty() && !original.is_empty() {
        tracing::debug!(?output, "empty output; nothing to draw");
        return final_canvas.snapshot();
    }
    let fit = proportional_fit(original, output)?;
    tracing::debug!(?original, ?output, scale = fit.scale, "drawing fitted graphic");
    graphic.draw(fit.viewable, &mut final_canvas)?;
    final_canvas.snapshot()
}
