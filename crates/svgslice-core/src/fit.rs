// File: crates/svgslice-core/src/fit.rs
// Summary: Orientation-driven uniform scale-to-fit for unsliced rendering.

use crate::error::{Result, SliceError};
use crate::geometry::{Rect, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    pub scale: f64,
    /// Viewable region at the origin; `original / scale`.
    pub viewable: Rect,
}

/// Width drives the scale when the output is at least as tall as it is wide,
/// height drives it otherwise.
pub fn proportional_fit(original: Size, output: Size) -> Result<Fit> {
    if original.is_empty() {
        return Err(SliceError::degenerate(format!(
            "cannot fit zero-area graphic {}x{}",
            original.width, original.height
        )));
    }
    let scale = if output.height >= output.width {
        output.width / original.width
    } else {
        output.height / original.height
    };
    if !(scale > 0.0 && scale.is_finite()) {
        return Err(SliceError::degenerate(format!(
            "fit scale {scale} for output {}x{}",
            output.width, output.height
        )));
    }
    Ok(Fit { scale, viewable: Rect::from_size(original / scale) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_output_is_height_driven() {
        let fit = proportional_fit(Size::new(100.0, 50.0), Size::new(300.0, 100.0)).unwrap();
        assert_eq!(fit.scale, 2.0);
        assert_eq!(fit.viewable, Rect::from_xywh(0.0, 0.0, 50.0, 25.0));
    }

    #[test]
    fn square_output_is_width_driven() {
        let fit = proportional_fit(Size::new(40.0, 80.0), Size::new(120.0, 120.0)).unwrap();
        assert_eq!(fit.scale, 3.0);
        assert_eq!(fit.viewable.size, Size::new(40.0 / 3.0, 80.0 / 3.0));
    }

    #[test]
    fn zero_dimension_original_is_degenerate() {
        for original in [Size::new(0.0, 10.0), Size::new(10.0, 0.0), Size::ZERO] {
            let err = proportional_fit(original, Size::new(10.0, 10.0)).unwrap_err();
            assert!(matches!(err, SliceError::DegenerateGeometry(_)));
        }
    }

    #[test]
    fn zero_driving_output_is_degenerate() {
        let err = proportional_fit(Size::new(10.0, 10.0), Size::new(0.0, 10.0)).unwrap_err();
        assert!(matches!(err, SliceError::DegenerateGeometry(_)));
    }
}
