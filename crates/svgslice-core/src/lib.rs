// File: crates/svgslice-core/src/lib.rs
// Summary: Core library entry point; nine-slice geometry, scale-to-fit, and backend-agnostic compositing.

pub mod backend;
pub mod bundle;
pub mod compositor;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod recording;
pub mod section;
pub mod slice;
pub mod types;
pub mod view;

pub use backend::{Canvas, CanvasFactory, Graphic, GraphicLoader};
pub use bundle::{DirBundle, ResourceBundle, StaticBundle};
pub use compositor::compose;
pub use error::{Result, SliceError};
pub use fit::{proportional_fit, Fit};
pub use geometry::{Point, Rect, Size};
pub use section::{dest_rect, source_rect, Section};
pub use slice::render_slice;
pub use types::{Insets, ParseInsetsError};
pub use view::{Change, RenderOptions, SvgView};
