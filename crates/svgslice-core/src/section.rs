// File: crates/svgslice-core/src/section.rs
// Summary: The nine slice sections and the band partition mapping insets onto a reference size.

use crate::error::{Result, SliceError};
use crate::geometry::{Point, Rect, Size};
use crate::types::Insets;

/// One cell of the 3x3 slice grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    CenterCenter,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Position of a band along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Start,
    Middle,
    End,
}

impl Section {
    /// Row-major order; compositing always walks sections in this order.
    pub const ALL: [Section; 9] = [
        Section::TopLeft,
        Section::TopCenter,
        Section::TopRight,
        Section::CenterLeft,
        Section::CenterCenter,
        Section::CenterRight,
        Section::BottomLeft,
        Section::BottomCenter,
        Section::BottomRight,
    ];

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or(SliceError::InvalidSection(index))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn row(self) -> Band {
        match self {
            Section::TopLeft | Section::TopCenter | Section::TopRight => Band::Start,
            Section::CenterLeft | Section::CenterCenter | Section::CenterRight => Band::Middle,
            Section::BottomLeft | Section::BottomCenter | Section::BottomRight => Band::End,
        }
    }

    pub fn column(self) -> Band {
        match self {
            Section::TopLeft | Section::CenterLeft | Section::BottomLeft => Band::Start,
            Section::TopCenter | Section::CenterCenter | Section::BottomCenter => Band::Middle,
            Section::TopRight | Section::CenterRight | Section::BottomRight => Band::End,
        }
    }

    pub fn is_corner(self) -> bool {
        self.row() != Band::Middle && self.column() != Band::Middle
    }
}

impl TryFrom<u8> for Section {
    type Error = SliceError;
    fn try_from(tag: u8) -> Result<Self> {
        Section::from_index(tag as usize)
    }
}

/// Split `[0, extent)` into start/middle/end bands. Returns `(offset, length)`.
fn band(start: u32, end: u32, extent: f64, which: Band) -> (f64, f64) {
    let (start, end) = (start as f64, end as f64);
    match which {
        Band::Start => (0.0, start),
        Band::Middle => (start, extent - start - end),
        Band::End => (extent - end, end),
    }
}

fn check_fits(insets: &Insets, reference: Size) -> Result<()> {
    if insets.hsum() as f64 > reference.width || insets.vsum() as f64 > reference.height {
        return Err(SliceError::degenerate(format!(
            "insets {} exceed reference size {}x{}",
            insets, reference.width, reference.height
        )));
    }
    Ok(())
}

/// Cross one row band with one column band of `reference`.
pub fn section_rect(insets: &Insets, reference: Size, section: Section) -> Result<Rect> {
    check_fits(insets, reference)?;
    let (x, w) = band(insets.left, insets.right, reference.width, section.column());
    let (y, h) = band(insets.top, insets.bottom, reference.height, section.row());
    Ok(Rect::new(Point::new(x, y), Size::new(w, h)))
}

/// Frame of `section` inside the graphic's own coordinate space.
pub fn source_rect(insets: &Insets, original: Size, section: Section) -> Result<Rect> {
    section_rect(insets, original, section)
}

/// Frame of `section` inside the output.
///
/// Corners keep the same absolute size as in the source; only the middle row
/// and column absorb the difference between original and output size. Whether
/// corners should instead scale with the output is an open product decision.
pub fn dest_rect(insets: &Insets, output: Size, section: Section) -> Result<Rect> {
    section_rect(insets, output, section)
}

/// `(source, dest)` frame pairs for all nine sections, row-major.
pub fn frame_pairs(insets: &Insets, original: Size, output: Size) -> Result<Vec<(Section, Rect, Rect)>> {
    Section::ALL
        .iter()
        .map(|&s| Ok((s, source_rect(insets, original, s)?, dest_rect(insets, output, s)?)))
        .collect()
}
