use pdf_fold::*;

fn stats(format: &str, pages: usize) -> Result<ImpositionStatistics> {
    let registry = FormatRegistry::builtin();
    calculate_statistics(registry.get(format)?, pages)
}

#[test]
fn test_stats_saddle_stitch() {
    let stats = stats("saddle-stitch", 10).unwrap();
    assert_eq!(stats.format, "saddle-stitch");
    assert_eq!(stats.source_pages, 10);
    assert_eq!(stats.padded_pages, 12);
    assert_eq!(stats.blank_slots, 2);
    assert_eq!(stats.sheets, 3);
    assert_eq!(stats.output_pages, 6);
}

#[test]
fn test_stats_exact_fit() {
    let stats = stats("saddle-stitch", 16).unwrap();
    assert_eq!(stats.blank_slots, 0);
    assert_eq!(stats.sheets, 4);
}

#[test]
fn test_stats_quarter_booklet_half_sheet() {
    // One mini-sheet leaves the bottom row empty on both sides
    let stats = stats("quarter-booklet", 4).unwrap();
    assert_eq!(stats.sheets, 1);
    assert_eq!(stats.output_pages, 2);
    assert_eq!(stats.blank_slots, 4);
}

#[test]
fn test_stats_two_up_is_single_sided() {
    let stats = stats("two-up-proof", 7).unwrap();
    assert_eq!(stats.sheets, 4);
    assert_eq!(stats.output_pages, 4);
    assert_eq!(stats.padded_pages, 8);
    assert_eq!(stats.blank_slots, 1);
}

#[test]
fn test_stats_mini_zine() {
    let stats = stats("mini-zine", 6).unwrap();
    assert_eq!(stats.padded_pages, 8);
    assert_eq!(stats.blank_slots, 2);
    assert_eq!(stats.output_pages, 2);
}

#[test]
fn test_stats_unimpose() {
    let stats = stats("unimpose", 6).unwrap();
    assert_eq!(stats.source_pages, 6);
    assert_eq!(stats.output_pages, 12);
    assert_eq!(stats.sheets, 0);
    assert_eq!(stats.blank_slots, 0);
}

#[test]
fn test_stats_errors() {
    assert!(matches!(stats("saddle-stitch", 0), Err(ImposeError::EmptyDocument)));
    assert!(matches!(
        stats("half-fold", 5),
        Err(ImposeError::PageCountOutOfRange { .. })
    ));
    assert!(matches!(stats("tri-fold", 3), Err(ImposeError::UnknownFormat(_))));
}
