use lopdf::{Dictionary, Document, Object, Stream};
use pdf_fold::layout::{GuideLine, Rect};
use pdf_fold::*;
use std::sync::{Arc, Mutex};

fn create_sized_pdf(num_pages: usize, width: i64, height: i64) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");

    // Create page tree root ID
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(width),
                    Object::Integer(height),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn create_test_pdf(num_pages: usize) -> Vec<u8> {
    create_sized_pdf(num_pages, 612, 792)
}

fn imposer(format: &str) -> Imposer {
    Imposer::new(ImpositionOptions::for_format(format))
}

/// Renderer that remembers what it was asked to draw
#[derive(Default)]
struct Recorder {
    sides: Vec<RecordedSide>,
    open: Option<RecordedSide>,
}

#[derive(Debug, Default)]
struct RecordedSide {
    size: (f32, f32),
    pages: Vec<u32>,
    guide_lines: usize,
}

impl SheetRenderer for Recorder {
    fn begin_side(&mut self, width_pt: f32, height_pt: f32) -> Result<()> {
        assert!(self.open.is_none(), "side begun twice");
        self.open = Some(RecordedSide {
            size: (width_pt, height_pt),
            ..Default::default()
        });
        Ok(())
    }

    fn draw_page(&mut self, placement: &Placement) -> Result<()> {
        self.open.as_mut().unwrap().pages.push(placement.page.get());
        Ok(())
    }

    fn draw_guides(&mut self, lines: &[GuideLine], _area: &Rect) -> Result<()> {
        self.open.as_mut().unwrap().guide_lines += lines.len();
        Ok(())
    }

    fn finish_side(&mut self) -> Result<()> {
        let side = self.open.take().unwrap();
        self.sides.push(side);
        Ok(())
    }
}

fn letter_pages(n: usize) -> Vec<(f32, f32)> {
    vec![(612.0, 792.0); n]
}

fn output_page_count(bytes: &[u8]) -> usize {
    PdfSource::load(bytes).unwrap().page_count()
}

#[test]
fn test_sides_drawn_in_print_order() {
    let mut recorder = Recorder::default();
    imposer("saddle-stitch")
        .compose(&letter_pages(8), &mut recorder, None)
        .unwrap();

    let pages: Vec<Vec<u32>> = recorder.sides.iter().map(|s| s.pages.clone()).collect();
    assert_eq!(pages, vec![vec![8, 1], vec![2, 7], vec![6, 3], vec![4, 5]]);

    // Letter, landscape
    let (w, h) = recorder.sides[0].size;
    assert!((w - 792.0).abs() < 0.1);
    assert!((h - 612.0).abs() < 0.1);
}

#[test]
fn test_blank_slots_are_not_drawn() {
    let mut recorder = Recorder::default();
    imposer("saddle-stitch")
        .compose(&letter_pages(5), &mut recorder, None)
        .unwrap();

    let pages: Vec<Vec<u32>> = recorder.sides.iter().map(|s| s.pages.clone()).collect();
    assert_eq!(pages, vec![vec![1], vec![2], vec![3], vec![4, 5]]);
}

#[test]
fn test_guides_follow_options() {
    let mut options = ImpositionOptions::for_format("quarter-booklet");
    options.guides.fold_lines = true;
    options.guides.cut_lines = true;

    let mut recorder = Recorder::default();
    Imposer::new(options)
        .compose(&letter_pages(8), &mut recorder, None)
        .unwrap();

    assert_eq!(recorder.sides.len(), 2);
    assert!(recorder.sides.iter().all(|s| s.guide_lines == 2));
    // Portrait sheet
    assert!(recorder.sides[0].size.0 < recorder.sides[0].size.1);

    let mut recorder = Recorder::default();
    imposer("quarter-booklet")
        .compose(&letter_pages(8), &mut recorder, None)
        .unwrap();
    assert!(recorder.sides.iter().all(|s| s.guide_lines == 0));
}

#[test]
fn test_unimpose_crops_halves() {
    let mut recorder = Recorder::default();
    imposer("unimpose")
        .compose(&vec![(792.0, 612.0); 4], &mut recorder, None)
        .unwrap();

    assert_eq!(recorder.sides.len(), 8);
    assert!(recorder.sides.iter().all(|s| s.size == (396.0, 612.0)));
    // Page 1 sits on the right half of the first spread
    assert_eq!(recorder.sides[0].pages, vec![1]);
}

#[test]
fn test_unimpose_rejects_portrait_pages() {
    let mut recorder = Recorder::default();
    let result = imposer("unimpose").compose(&letter_pages(4), &mut recorder, None);
    assert!(matches!(result, Err(ImposeError::MalformedImposition(_))));
    assert!(recorder.sides.is_empty());
}

#[test]
fn test_progress_is_monotonic_and_completes() {
    let updates = Mutex::new(Vec::new());
    let sink = |update: &ProgressUpdate| updates.lock().unwrap().push(update.clone());

    let output = imposer("saddle-stitch")
        .run(&create_test_pdf(8), Some(&sink))
        .unwrap();
    assert_eq!(output_page_count(&output), 4);

    let updates = updates.into_inner().unwrap();
    assert_eq!(updates.first().map(|u| u.stage), Some(Stage::Loading));
    assert!(updates.windows(2).all(|w| w[0].percent <= w[1].percent));

    let last = updates.last().unwrap();
    assert_eq!(last.stage, Stage::Complete);
    assert_eq!(last.percent, 100);
    assert!(updates.iter().any(|u| u.stage == Stage::Composing));
    assert!(updates.iter().any(|u| u.stage == Stage::Saving));
}

#[test]
fn test_failure_is_reported() {
    let updates = Mutex::new(Vec::new());
    let sink = |update: &ProgressUpdate| updates.lock().unwrap().push(update.stage);

    let result = imposer("saddle-stitch").run(b"not a pdf at all", Some(&sink));
    assert!(matches!(result, Err(ImposeError::Load(_))));
    assert_eq!(updates.into_inner().unwrap().last(), Some(&Stage::Error));
}

#[test]
fn test_unknown_format_fails_before_loading() {
    let result = imposer("origami-crane").run(b"not a pdf at all", None);
    assert!(matches!(result, Err(ImposeError::UnknownFormat(_))));
}

#[test]
fn test_output_page_counts() {
    let cases = [
        ("saddle-stitch", 8, 4),
        ("saddle-stitch", 9, 6),
        ("quarter-booklet", 16, 4),
        ("quarter-booklet", 4, 2),
        ("mini-zine", 8, 2),
        ("half-fold", 3, 2),
        ("two-up-proof", 5, 3),
        ("accordion", 3, 1),
        ("accordion", 7, 2),
    ];

    for (format, pages, expected) in cases {
        let output = imposer(format).run(&create_test_pdf(pages), None).unwrap();
        assert_eq!(output_page_count(&output), expected, "{} with {} pages", format, pages);
    }
}

#[test]
fn test_paper_size_sets_sheet_size() {
    let mut options = ImpositionOptions::for_format("saddle-stitch");
    options.paper_size = PaperSize::A4;
    let output = Imposer::new(options).run(&create_test_pdf(4), None).unwrap();

    let source = PdfSource::load(&output).unwrap();
    let (w, h) = source.page_size(layout::PageIndex::new(1).unwrap()).unwrap();
    assert!((w - constants::mm_to_pt(297.0)).abs() < 0.1);
    assert!((h - constants::mm_to_pt(210.0)).abs() < 0.1);
}

#[test]
fn test_unimpose_restores_saddle_stitched_output() {
    let imposed = imposer("saddle-stitch").run(&create_test_pdf(8), None).unwrap();
    let linear = imposer("unimpose").run(&imposed, None).unwrap();

    let source = PdfSource::load(&linear).unwrap();
    assert_eq!(source.page_count(), 8);
    for (w, h) in source.page_sizes().unwrap() {
        assert!((w - 396.0).abs() < 0.1);
        assert!((h - 612.0).abs() < 0.1);
    }

    // Imposed sides are [8, 1], [2, 7], [6, 3], [4, 5]; left halves draw
    // unshifted, right halves shift left by half the spread width
    let expected = [
        (1, "-396"),
        (2, "0"),
        (3, "-396"),
        (4, "0"),
        (4, "-396"),
        (3, "0"),
        (2, "-396"),
        (1, "0"),
    ];
    let document = source.document();
    for (page_id, (imposed, offset)) in document.get_pages().values().zip(expected) {
        let content = document.get_page_content(*page_id).unwrap();
        let ops = String::from_utf8(content).unwrap();
        assert_eq!(
            ops,
            format!(
                "q 0 0 396 612 re W n 1 0 0 1 {} 0 cm /P{} Do Q\n",
                offset, imposed
            )
        );
    }
}

#[test]
fn test_impose_document_from_source() {
    let source = PdfSource::load(&create_test_pdf(3)).unwrap();
    let document = imposer("half-fold").impose_document(&source, None).unwrap();
    assert_eq!(document.get_pages().len(), 2);
}

#[tokio::test]
async fn test_process_async() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&seen);
    let sink: Arc<dyn ProgressSink> =
        Arc::new(move |update: &ProgressUpdate| recorded.lock().unwrap().push(update.percent));

    let output = imposer("two-up-proof")
        .process(create_test_pdf(6), Some(sink))
        .await
        .unwrap();

    assert_eq!(output_page_count(&output), 3);
    assert_eq!(seen.lock().unwrap().last(), Some(&100));
}

#[tokio::test]
async fn test_impose_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.pdf");
    let output = dir.path().join("output.pdf");
    std::fs::write(&input, create_test_pdf(8)).unwrap();

    imposer("mini-zine")
        .impose_file(&input, &output, None)
        .await
        .unwrap();

    let loaded = load_pdf(&output).await.unwrap();
    assert_eq!(loaded.page_count(), 2);
}

#[tokio::test]
async fn test_save_imposed_document() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("card.pdf");

    let source = PdfSource::load(&create_test_pdf(4)).unwrap();
    let document = imposer("half-fold").impose_document(&source, None).unwrap();
    impose::save_document(document, &output).await.unwrap();

    let loaded = load_pdf(&output).await.unwrap();
    assert_eq!(loaded.page_count(), 2);
    let (w, h) = loaded.page_size(layout::PageIndex::new(1).unwrap()).unwrap();
    assert!(w > h);
}

#[tokio::test]
async fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_pdf(dir.path().join("missing.pdf")).await;
    assert!(matches!(result, Err(ImposeError::Io(_))));
}
