// File: crates/svgslice-core/tests/tiling.rs
// Purpose: Validate that the nine sections tile the reference rectangle for many inset/size combinations.

use svgslice_core::{dest_rect, source_rect, Insets, Rect, Section, Size};

fn assert_tiles(insets: Insets, reference: Size, rects: &[Rect]) {
    let total: f64 = rects.iter().map(|r| r.size.area()).sum();
    assert!((total - reference.area()).abs() < 1e-9, "{insets:?} on {reference:?}: area {total}");

    for (i, a) in rects.iter().enumerate() {
        assert!(a.width() >= 0.0 && a.height() >= 0.0);
        assert!(a.x() >= 0.0 && a.y() >= 0.0);
        assert!(a.right() <= reference.width + 1e-9 && a.bottom() <= reference.height + 1e-9);
        for b in &rects[i + 1..] {
            assert_eq!(a.intersection_area(b), 0.0, "{a:?} overlaps {b:?}");
        }
    }

    // Row heights and column widths each sum to the full extent.
    let heights: f64 = [Section::TopLeft, Section::CenterLeft, Section::BottomLeft]
        .iter()
        .map(|s| rects[s.index()].height())
        .sum();
    let widths: f64 = [Section::TopLeft, Section::TopCenter, Section::TopRight]
        .iter()
        .map(|s| rects[s.index()].width())
        .sum();
    assert!((heights - reference.height).abs() < 1e-9);
    assert!((widths - reference.width).abs() < 1e-9);
}

#[test]
fn source_sections_tile_original() {
    let sizes = [Size::new(100.0, 100.0), Size::new(37.0, 81.5), Size::new(24.0, 12.0)];
    let insets = [
        Insets::ZERO,
        Insets::uniform(4),
        Insets::symmetric(3, 7),
        Insets::new(1, 2, 3, 4),
        Insets::new(0, 12, 6, 0),
        Insets::new(6, 0, 6, 12),
    ];
    for size in sizes {
        for inset in insets {
            let rects: Vec<Rect> = Section::ALL
                .iter()
                .map(|&s| source_rect(&inset, size, s).expect("valid insets"))
                .collect();
            assert_tiles(inset, size, &rects);
        }
    }
}

#[test]
fn dest_sections_tile_output_and_keep_corner_sizes() {
    let insets = Insets::new(5, 9, 7, 3);
    let original = Size::new(40.0, 30.0);
    for output in [Size::new(40.0, 30.0), Size::new(400.0, 60.0), Size::new(16.0, 12.0)] {
        let rects: Vec<Rect> = Section::ALL.iter().map(|&s| dest_rect(&insets, output, s).unwrap()).collect();
        assert_tiles(insets, output, &rects);
        for s in Section::ALL.iter().filter(|s| s.is_corner()) {
            assert_eq!(rects[s.index()].size, source_rect(&insets, original, *s).unwrap().size);
        }
    }
}

#[test]
fn bottom_right_is_anchored_to_corner() {
    let r = dest_rect(&Insets::new(2, 6, 8, 4), Size::new(50.0, 30.0), Section::BottomRight).unwrap();
    assert_eq!(r, Rect::from_xywh(44.0, 22.0, 6.0, 8.0));
}
