// File: crates/svgslice-core/src/error.rs
// Summary: Error kinds surfaced by loading, geometry, and compositing.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SliceError {
    /// The bundle has no resource under the requested path.
    #[error("resource '{path}' not found in bundle '{bundle}'")]
    ResourceNotFound { bundle: String, path: String },

    /// A section tag outside the nine defined variants. Indicates a logic error in the caller.
    #[error("invalid section tag {0}; expected 0..=8")]
    InvalidSection(usize),

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("failed to decode graphic '{path}': {reason}")]
    InvalidGraphic { path: String, reason: String },

    #[error("no graphic loaded; set both a bundle and a path before rendering")]
    NoGraphic,

    #[error("backend error: {0}")]
    Backend(String),
}

impl SliceError {
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateGeometry(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SliceError>;
