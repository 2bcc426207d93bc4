use pdf_fold::layout::{PageIndex, Rotation};
use pdf_fold::*;

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PaperSize::A3.dimensions_mm(), (297.0, 420.0));
    assert_eq!(PaperSize::A5.dimensions_mm(), (148.0, 210.0));
    assert_eq!(PaperSize::Letter.dimensions_mm(), (215.9, 279.4));
    assert_eq!(PaperSize::Legal.dimensions_mm(), (215.9, 355.6));
    assert_eq!(PaperSize::Tabloid.dimensions_mm(), (279.4, 431.8));

    let custom = PaperSize::Custom {
        width_mm: 100.0,
        height_mm: 200.0,
    };
    assert_eq!(custom.dimensions_mm(), (100.0, 200.0));
}

#[test]
fn test_paper_orientation() {
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Landscape),
        (297.0, 210.0)
    );
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Portrait),
        (210.0, 297.0)
    );

    // A landscape custom size is normalized too
    let wide = PaperSize::Custom {
        width_mm: 300.0,
        height_mm: 100.0,
    };
    assert_eq!(
        wide.dimensions_with_orientation(Orientation::Portrait),
        (100.0, 300.0)
    );
}

#[test]
fn test_rotation_degrees() {
    assert_eq!(Rotation::Upright.degrees(), 0);
    assert_eq!(Rotation::UpsideDown.degrees(), 180);
    assert_eq!(Rotation::default(), Rotation::Upright);
}

#[test]
fn test_page_index_display() {
    let page = PageIndex::new(12).unwrap();
    assert_eq!(page.to_string(), "12");
    assert!(PageIndex::new(0).is_none());
}

#[test]
fn test_guide_marks_default() {
    let guides = GuideMarks::default();
    assert!(!guides.fold_lines);
    assert!(!guides.cut_lines);
    assert!(!guides.any());
}

#[test]
fn test_error_messages() {
    let err = ImposeError::PageCountOutOfRange {
        format: "saddle-stitch".to_string(),
        pages: 0,
        min: 1,
        max: None,
    };
    assert_eq!(err.to_string(), "saddle-stitch accepts at least 1 pages, got 0");
    assert_eq!(
        ImposeError::UnknownFormat("x".to_string()).to_string(),
        "Unknown format: x"
    );
}
