// File: crates/svgslice-core/src/recording.rs
// Summary: Recording backend that captures a deterministic draw-call trace instead of pixels.
// Notes:
// - Useful for tests and for diffing compositor behavior without a rasterizer.
// - The loader decodes a tiny "WxH" text format so views can be exercised end to end.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::backend::{Canvas, CanvasFactory, Graphic, GraphicLoader};
use crate::error::{Result, SliceError};
use crate::geometry::{Rect, Size};

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedImage {
    /// Canvas the snapshot was taken from.
    pub canvas: usize,
    pub size: Size,
    /// Draw calls made on the canvas before the snapshot.
    pub draws: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    CreateCanvas { canvas: usize, size: Size, device_scale: f64 },
    DrawGraphic { canvas: usize, graphic: String, viewable: Rect },
    DrawImage { canvas: usize, image: RecordedImage, dest: Rect },
    Snapshot { canvas: usize },
}

/// Shared trace log. Clones append to the same log.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    ops: Rc<RefCell<Vec<DrawOp>>>,
    next_canvas: Rc<Cell<usize>>,
}

impl Recorder {
    pub fn new() -> Self { Self::default() }

    pub fn ops(&self) -> Vec<DrawOp> { self.ops.borrow().clone() }

    pub fn clear(&self) {
        self.ops.borrow_mut().clear();
        self.next_canvas.set(0);
    }

    pub fn factory(&self) -> RecordingFactory {
        RecordingFactory { recorder: self.clone(), fail_at: None }
    }

    fn push(&self, op: DrawOp) { self.ops.borrow_mut().push(op); }
}

/// Canvas factory feeding a [`Recorder`].
#[derive(Clone, Debug)]
pub struct RecordingFactory {
    recorder: Recorder,
    fail_at: Option<usize>,
}

impl RecordingFactory {
    /// Fail with a backend error when asked for canvas number `n` (0-based).
    pub fn failing_at(mut self, n: usize) -> Self {
        self.fail_at = Some(n);
        self
    }
}

impl CanvasFactory for RecordingFactory {
    type Canvas = RecordingCanvas;

    fn create(&mut self, size: Size, device_scale: f64) -> Result<RecordingCanvas> {
        let id = self.recorder.next_canvas.get();
        if self.fail_at == Some(id) {
            return Err(SliceError::backend(format!("refusing to create canvas #{id}")));
        }
        self.recorder.next_canvas.set(id + 1);
        self.recorder.push(DrawOp::CreateCanvas { canvas: id, size, device_scale });
        Ok(RecordingCanvas { id, size, draws: 0, recorder: self.recorder.clone() })
    }
}

#[derive(Debug)]
pub struct RecordingCanvas {
    id: usize,
    size: Size,
    draws: usize,
    recorder: Recorder,
}

impl RecordingCanvas {
    pub fn id(&self) -> usize { self.id }
    pub fn size(&self) -> Size { self.size }

    fn draw_graphic(&mut self, graphic: &str, viewable: Rect) {
        self.draws += 1;
        self.recorder.push(DrawOp::DrawGraphic { canvas: self.id, graphic: graphic.to_string(), viewable });
    }
}

impl Canvas for RecordingCanvas {
    type Image = RecordedImage;

    fn draw_image(&mut self, image: &RecordedImage, dest: Rect) -> Result<()> {
        self.draws += 1;
        self.recorder.push(DrawOp::DrawImage { canvas: self.id, image: image.clone(), dest });
        Ok(())
    }

    fn snapshot(&mut self) -> Result<RecordedImage> {
        self.recorder.push(DrawOp::Snapshot { canvas: self.id });
        Ok(RecordedImage { canvas: self.id, size: self.size, draws: self.draws })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordingGraphic {
    pub name: String,
    pub size: Size,
}

impl RecordingGraphic {
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self { name: name.into(), size }
    }
}

impl Graphic<RecordingCanvas> for RecordingGraphic {
    fn size(&self) -> Size { self.size }

    fn draw(&self, viewable: Rect, canvas: &mut RecordingCanvas) -> Result<()> {
        canvas.draw_graphic(&self.name, viewable);
        Ok(())
    }
}

/// Decodes `"<width>x<height>"` into a [`RecordingGraphic`] named after its path.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordingLoader;

impl GraphicLoader for RecordingLoader {
    type Graphic = RecordingGraphic;

    fn decode(&self, path: &str, bytes: &[u8]) -> Result<RecordingGraphic> {
        let invalid = |reason: &str| SliceError::InvalidGraphic { path: path.to_string(), reason: reason.to_string() };
        let text = std::str::from_utf8(bytes).map_err(|_| invalid("not utf-8"))?;
        let (w, h) = text.trim().split_once('x').ok_or_else(|| invalid("expected WxH"))?;
        let w: f64 = w.trim().parse().map_err(|_| invalid("bad width"))?;
        let h: f64 = h.trim().parse().map_err(|_| invalid("bad height"))?;
        Ok(RecordingGraphic::new(path, Size::new(w, h)))
    }
}
