// File: crates/svgslice-core/src/types.rs
// Summary: Shared types and constants (stretchable insets, default output size).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Default output width in logical units.
pub const WIDTH: f64 = 256.0;
/// Default output height in logical units.
pub const HEIGHT: f64 = 256.0;

/// Nine-slice margins, in the graphic's own units.
/// Contract: all fields are non-negative (enforced by type). `Insets::ZERO` disables slicing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Insets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Insets {
    pub const ZERO: Insets = Insets::new(0, 0, 0, 0);

    /// Per-side insets in CSS order.
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Same inset on top/bottom and on left/right.
    pub const fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub const fn uniform(all: u32) -> Self {
        Self::new(all, all, all, all)
    }

    pub const fn is_zero(&self) -> bool {
        self.top == 0 && self.right == 0 && self.bottom == 0 && self.left == 0
    }

    /// Total horizontal inset (left + right), widened so it cannot overflow.
    pub const fn hsum(&self) -> u64 { self.left as u64 + self.right as u64 }
    /// Total vertical inset (top + bottom), widened so it cannot overflow.
    pub const fn vsum(&self) -> u64 { self.top as u64 + self.bottom as u64 }
}

impl fmt::Display for Insets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseInsetsError {
    #[error("expected 1, 2 or 4 values, got {0}")]
    Arity(usize),
    #[error("invalid inset value '{0}'")]
    Value(String),
}

/// Accepts `"8"`, `"8,4"` (vertical, horizontal) or `"t,r,b,l"`; commas and/or whitespace separate.
impl FromStr for Insets {
    type Err = ParseInsetsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .map(|p| p.parse::<u32>().map_err(|_| ParseInsetsError::Value(p.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        match values.as_slice() {
            [all] => Ok(Insets::uniform(*all)),
            [v, h] => Ok(Insets::symmetric(*v, *h)),
            [t, r, b, l] => Ok(Insets::new(*t, *r, *b, *l)),
            other => Err(ParseInsetsError::Arity(other.len())),
        }
    }
}
