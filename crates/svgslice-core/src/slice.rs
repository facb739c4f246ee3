// File: crates/svgslice-core/src/slice.rs
// Summary: Render one section of a graphic onto its own destination-sized canvas.

use crate::backend::{Canvas, CanvasFactory, Graphic};
use crate::error::Result;
use crate::geometry::{Rect, Size};

/// Viewable region that maps `source` onto a canvas of `dest.size`.
///
/// Per axis, `scale = dest / source`; shrinking the viewable window by that
/// scale magnifies the source frame to fill the destination.
pub fn slice_viewable(original: Size, source: Rect, dest: Rect) -> Rect {
    let scale = dest.size.div_size(source.size);
    Rect::new(source.origin, original.div_size(scale))
}

/// Render `source` (graphic space) stretched to `dest.size` and return the snapshot.
///
/// An empty destination yields an empty image. An empty source with a non-empty
/// destination has nothing to stretch and yields a blank image of `dest.size`.
pub fn render_slice<G, F>(
    graphic: &G,
    source: Rect,
    dest: Rect,
    device_scale: f64,
    factory: &mut F,
) -> Result<<F::Canvas as Canvas>::Image>
where
    F: CanvasFactory,
    G: Graphic<F::Canvas> + ?Sized,
{
    let mut canvas = factory.create(dest.size, device_scale)?;
    if dest.is_empty() || source.is_empty() {
        tracing::trace!(?source, ?dest, "empty slice; skipping draw");
        return canvas.snapshot();
    }
    let viewable = slice_viewable(graphic.size(), source, dest);
    graphic.draw(viewable, &mut canvas)?;
    canvas.snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn viewable_for_stretched_center() {
        // 80x80 center of a 100x100 graphic stretched to 180x180.
        let v = slice_viewable(
            Size::new(100.0, 100.0),
            Rect::from_xywh(10.0, 10.0, 80.0, 80.0),
            Rect::from_xywh(10.0, 10.0, 180.0, 180.0),
        );
        assert_eq!(v.origin, Point::new(10.0, 10.0));
        assert!((v.width() - 100.0 / 2.25).abs() < 1e-9);
        assert!((v.height() - 100.0 / 2.25).abs() < 1e-9);
    }

    #[test]
    fn viewable_for_unscaled_corner_is_full_size() {
        let v = slice_viewable(
            Size::new(100.0, 50.0),
            Rect::from_xywh(90.0, 40.0, 10.0, 10.0),
            Rect::from_xywh(290.0, 90.0, 10.0, 10.0),
        );
        assert_eq!(v, Rect::from_xywh(90.0, 40.0, 100.0, 50.0));
    }

    #[test]
    fn per_axis_scaling() {
        let v = slice_viewable(
            Size::new(100.0, 100.0),
            Rect::from_xywh(10.0, 0.0, 80.0, 10.0),
            Rect::from_xywh(10.0, 0.0, 160.0, 10.0),
        );
        assert_eq!(v.size, Size::new(50.0, 100.0));
    }
}
