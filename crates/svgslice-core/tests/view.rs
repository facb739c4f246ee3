// File: crates/svgslice-core/tests/view.rs
// Purpose: Validate SvgView configuration changes, graphic caching, and error propagation.

use std::sync::Arc;

use svgslice_core::recording::{DrawOp, Recorder, RecordingLoader};
use svgslice_core::{Change, Insets, RenderOptions, Size, SliceError, StaticBundle, SvgView};

fn bundle() -> Arc<StaticBundle> {
    Arc::new(
        StaticBundle::new("assets")
            .with("button.svg", b"60x30")
            .with("badge.svg", b"20x20")
            .with("broken.svg", b"not a size"),
    )
}

#[test]
fn loads_once_both_bundle_and_path_are_set() {
    let mut view = SvgView::new(RecordingLoader);
    assert_eq!(view.set_path("button.svg"), Ok(Change::Redraw));
    assert!(view.graphic().is_none());
    assert_eq!(view.set_bundle(bundle()), Ok(Change::Reloaded));
    assert_eq!(view.graphic().map(|g| g.size), Some(Size::new(60.0, 30.0)));

    assert_eq!(view.set_path("button.svg"), Ok(Change::None));
    assert_eq!(view.set_path("badge.svg"), Ok(Change::Reloaded));
    assert_eq!(view.graphic().map(|g| g.name.as_str()), Some("badge.svg"));
}

#[test]
fn same_bundle_instance_is_not_reloaded() {
    let b = bundle();
    let mut view = SvgView::new(RecordingLoader);
    view.set_path("button.svg").unwrap();
    assert_eq!(view.set_bundle(b.clone()), Ok(Change::Reloaded));
    assert_eq!(view.set_bundle(b), Ok(Change::None));
}

#[test]
fn missing_resource_propagates_and_clears_graphic() {
    let mut view = SvgView::new(RecordingLoader);
    view.set_bundle(bundle()).unwrap();
    view.set_path("button.svg").unwrap();
    let err = view.set_path("nope.svg").unwrap_err();
    assert_eq!(err, SliceError::ResourceNotFound { bundle: "assets".into(), path: "nope.svg".into() });
    assert!(view.graphic().is_none());

    let rec = Recorder::new();
    let err = view.render(Size::new(10.0, 10.0), 1.0, &mut rec.factory()).unwrap_err();
    assert_eq!(err, SliceError::NoGraphic);
    assert!(rec.ops().is_empty());
}

#[test]
fn undecodable_resource_is_reported() {
    let mut view = SvgView::new(RecordingLoader);
    view.set_bundle(bundle()).unwrap();
    let err = view.set_path("broken.svg").unwrap_err();
    assert!(matches!(err, SliceError::InvalidGraphic { ref path, .. } if path == "broken.svg"));
}

#[test]
fn insets_switch_between_paths() {
    let mut view = SvgView::new(RecordingLoader);
    view.set_bundle(bundle()).unwrap();
    view.set_path("button.svg").unwrap();
    let rec = Recorder::new();
    let opts = RenderOptions { width: 120.0, height: 30.0, device_scale: 1.0 };

    view.render_with(&opts, &mut rec.factory()).unwrap();
    assert_eq!(rec.ops().len(), 3, "fitted path draws once");

    assert_eq!(view.set_insets(Insets::symmetric(8, 12)), Change::Redraw);
    assert_eq!(view.set_insets(Insets::new(8, 12, 8, 12)), Change::None);
    rec.clear();
    let image = view.render_with(&opts, &mut rec.factory()).unwrap();
    assert_eq!(image.draws, 9);
    assert_eq!(
        rec.ops().iter().filter(|op| matches!(op, DrawOp::CreateCanvas { .. })).count(),
        10
    );

    assert_eq!(view.set_insets(Insets::ZERO), Change::Redraw);
    rec.clear();
    view.render_with(&opts, &mut rec.factory()).unwrap();
    assert_eq!(rec.ops().len(), 3);
}
