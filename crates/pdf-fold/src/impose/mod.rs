//! PDF imposition - arranging pages for folding, cutting and binding
//!
//! This module orchestrates the imposition process:
//! 1. Load the source document and read its page sizes
//! 2. Compute the plan for the selected format
//! 3. Compose every output side through a [`SheetRenderer`]
//! 4. Save the output document

mod compose;
mod io;

pub use compose::{SheetGeometry, slot_placement};
pub use io::{load_pdf, read_bytes, save_document, save_pdf};

use crate::constants::{PROGRESS_COMPOSED, PROGRESS_LOADED, PROGRESS_PLANNED};
use crate::format::{FormatDefinition, FormatRegistry, ImpositionPlan};
use crate::options::ImpositionOptions;
use crate::progress::{Progress, ProgressSink, Stage};
use crate::render::{PdfSource, PdfWriter, SheetRenderer};
use crate::types::*;
use lopdf::Document;
use std::path::Path;
use std::sync::Arc;

/// Runs imposition jobs for one set of options
#[derive(Debug, Clone)]
pub struct Imposer {
    registry: FormatRegistry,
    options: ImpositionOptions,
}

impl Imposer {
    /// Imposer over the built-in formats
    pub fn new(options: ImpositionOptions) -> Self {
        Self::with_registry(FormatRegistry::builtin(), options)
    }

    pub fn with_registry(registry: FormatRegistry, options: ImpositionOptions) -> Self {
        Self { registry, options }
    }

    pub fn options(&self) -> &ImpositionOptions {
        &self.options
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// The format selected by the options
    pub fn format(&self) -> Result<&FormatDefinition> {
        self.registry.get(&self.options.format)
    }

    /// Plan and compose pages of the given sizes onto `renderer`.
    ///
    /// Sides are drawn strictly in print order. Returns the plan that was drawn.
    pub fn compose<R: SheetRenderer + ?Sized>(
        &self,
        page_sizes: &[(f32, f32)],
        renderer: &mut R,
        sink: Option<&dyn ProgressSink>,
    ) -> Result<ImpositionPlan> {
        let mut progress = Progress::new(sink);
        self.compose_with(page_sizes, renderer, &mut progress)
    }

    fn compose_with<R: SheetRenderer + ?Sized>(
        &self,
        page_sizes: &[(f32, f32)],
        renderer: &mut R,
        progress: &mut Progress<'_>,
    ) -> Result<ImpositionPlan> {
        self.options.validate()?;
        let format = self.format()?;
        let plan = format.compute_plan(page_sizes.len())?;

        progress.report(
            Stage::Processing,
            PROGRESS_PLANNED,
            format!("Planned {} for {} pages", format.name, page_sizes.len()),
        );

        let sides = match &plan {
            ImpositionPlan::Sheets(sheets) => {
                let sheet_size = self.options.sheet_size_pt(format.orientation);
                let geometry = SheetGeometry {
                    sheet_size,
                    leaf: self.options.leaf_area(sheet_size.0, sheet_size.1),
                    guide_style: format.guide_style(),
                    guides: self.options.guides,
                };
                log::info!(
                    "Imposing {} pages as {}: {} sheets, {} padded pages",
                    sheets.total_pages,
                    format.id,
                    sheets.sheets.len(),
                    sheets.padded_pages
                );
                compose::compose_sheets(renderer, sheets, page_sizes, &geometry, progress)?
            }
            ImpositionPlan::Linear(order) => {
                log::info!(
                    "Un-imposing {} spreads into {} pages",
                    order.imposed_pages,
                    order.len()
                );
                compose::compose_linear(renderer, order, page_sizes, progress)?
            }
        };

        progress.report(
            Stage::Composing,
            PROGRESS_COMPOSED,
            format!("Composed {} output pages", sides),
        );
        Ok(plan)
    }

    /// Impose a parsed source into a new document
    pub fn impose_document(
        &self,
        source: &PdfSource,
        sink: Option<&dyn ProgressSink>,
    ) -> Result<Document> {
        let mut progress = Progress::new(sink);
        let page_sizes = source.page_sizes()?;
        let mut writer = PdfWriter::new(source);
        self.compose_with(&page_sizes, &mut writer, &mut progress)?;
        writer.finish()
    }

    /// Impose PDF bytes into output PDF bytes
    pub fn run(&self, input: &[u8], sink: Option<&dyn ProgressSink>) -> Result<Vec<u8>> {
        let mut progress = Progress::new(sink);
        match self.run_with(input, &mut progress) {
            Ok(output) => Ok(output),
            Err(e) => {
                progress.fail(e.to_string());
                Err(e)
            }
        }
    }

    fn run_with(&self, input: &[u8], progress: &mut Progress<'_>) -> Result<Vec<u8>> {
        // Bad options or an unknown format fail before any parsing
        self.options.validate()?;
        self.format()?;

        progress.report(Stage::Loading, 0, "Loading document");
        let source = PdfSource::load(input)?;
        let page_sizes = source.page_sizes()?;
        progress.report(
            Stage::Loading,
            PROGRESS_LOADED,
            format!("Loaded {} pages", page_sizes.len()),
        );

        let mut writer = PdfWriter::new(&source);
        self.compose_with(&page_sizes, &mut writer, progress)?;
        let output_pages = writer.page_count();

        progress.report(Stage::Saving, PROGRESS_COMPOSED, "Saving document");
        let bytes = writer.save()?;

        log::info!(
            "Wrote {} output pages ({} bytes)",
            output_pages,
            bytes.len()
        );
        progress.report(Stage::Complete, 100, "Imposition complete");
        Ok(bytes)
    }

    /// [`run`](Self::run) on the blocking thread pool
    pub async fn process(
        &self,
        input: Vec<u8>,
        sink: Option<Arc<dyn ProgressSink>>,
    ) -> Result<Vec<u8>> {
        let imposer = self.clone();
        tokio::task::spawn_blocking(move || imposer.run(&input, sink.as_deref())).await?
    }

    /// Read `input`, impose it and write the result to `output`
    pub async fn impose_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        sink: Option<Arc<dyn ProgressSink>>,
    ) -> Result<()> {
        let bytes = read_bytes(input).await?;
        let imposed = self.process(bytes, sink).await?;
        save_pdf(&imposed, output).await
    }
}
