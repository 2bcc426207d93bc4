//! Folding formats and the registry that names them
//!
//! Each format is a [`FormatKind`] variant plus descriptive data. The kind
//! selects the layout generator; the data (ids, page bounds, printing
//! instructions) is what a user interface shows. A [`FormatRegistry`] is
//! built once and handed to whoever needs to look formats up by id.

use crate::layout::{
    ACCORDION_PAGES, GuideStyle, HALF_FOLD_PAGES, LinearPageOrder, MINI_ZINE_PAGES, SheetPlan,
    accordion_plan, half_fold_plan, linear_page_count, mini_zine_plan, quarter_booklet_plan,
    resolve_linear_order, saddle_stitch_plan, two_up_plan,
};
use crate::types::{ImposeError, Orientation, Result};

/// Layout algorithm behind a format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    SaddleStitch,
    Unimpose,
    MiniZine,
    HalfFold,
    QuarterBooklet,
    TwoUpProof,
    Accordion,
}

/// Accepted source page counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub min: usize,
    /// `None` for no upper bound
    pub max: Option<usize>,
}

impl PageRange {
    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub fn contains(&self, pages: usize) -> bool {
        pages >= self.min && self.max.is_none_or(|max| pages <= max)
    }
}

/// What a format produces for a given page count
#[derive(Debug, Clone, PartialEq)]
pub enum ImpositionPlan {
    /// Pages placed onto folded or cut sheets
    Sheets(SheetPlan),
    /// Pages cropped out of imposed spreads, in reading order
    Linear(LinearPageOrder),
}

/// A named folding format
#[derive(Debug, Clone, PartialEq)]
pub struct FormatDefinition {
    pub kind: FormatKind,
    pub id: String,
    pub name: String,
    pub description: String,
    pub pages: PageRange,
    /// Orientation of the output sheet
    pub orientation: Orientation,
    /// Duplex, fold, cut and staple directions for the printed output
    pub print_instructions: String,
}

impl FormatDefinition {
    /// Built-in definition for a kind
    pub fn builtin(kind: FormatKind) -> Self {
        let (id, name, description, pages, orientation, instructions) = match kind {
            FormatKind::SaddleStitch => (
                "saddle-stitch",
                "Saddle-stitch booklet",
                "Nested folded sheets, two pages per side, stapled through the spine",
                PageRange::at_least(1),
                Orientation::Landscape,
                "Print double-sided, flipping on the short edge. Keep the sheets in output order, \
                 nest them, fold the stack in half and staple along the fold.",
            ),
            FormatKind::Unimpose => (
                "unimpose",
                "Un-impose booklet",
                "Split saddle-stitched spreads back into single pages in reading order",
                PageRange::at_least(1),
                Orientation::Portrait,
                "No folding needed: the output is an ordinary page-by-page document.",
            ),
            FormatKind::MiniZine => (
                "mini-zine",
                "Mini-zine",
                "Eight panels on one sheet, folded into a pocket zine",
                PageRange::between(1, MINI_ZINE_PAGES),
                Orientation::Landscape,
                "Print double-sided, flipping on the long edge. Fold along every panel line, \
                 turning the upside-down panels inward, then close the zine with page 1 on top.",
            ),
            FormatKind::HalfFold => (
                "half-fold",
                "Half-fold card",
                "One sheet folded once into a four-page card",
                PageRange::between(1, HALF_FOLD_PAGES),
                Orientation::Landscape,
                "Print double-sided, flipping on the short edge. Fold the sheet in half with \
                 page 1 facing out.",
            ),
            FormatKind::QuarterBooklet => (
                "quarter-booklet",
                "Quarter-size booklet",
                "Two saddle-stitch sheets per page, cut apart into a small booklet",
                PageRange::at_least(1),
                Orientation::Portrait,
                "Print double-sided, flipping on the long edge. Cut every sheet across the \
                 middle, stack the halves in order (top half before bottom half, sheet by sheet), \
                 fold the stack in half and staple along the fold.",
            ),
            FormatKind::TwoUpProof => (
                "two-up-proof",
                "Two-up proof",
                "Pages side by side in reading order for proofreading",
                PageRange::at_least(1),
                Orientation::Landscape,
                "Print single-sided. No folding or cutting.",
            ),
            FormatKind::Accordion => (
                "accordion",
                "Accordion fold",
                "A strip of up to four panels per side folded back and forth",
                PageRange::between(1, ACCORDION_PAGES),
                Orientation::Landscape,
                "Print single-sided for up to four pages, otherwise double-sided flipping on the \
                 long edge. Fold along the panel lines alternately forward and back.",
            ),
        };

        Self {
            kind,
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            pages,
            orientation,
            print_instructions: instructions.to_string(),
        }
    }

    /// Check a source page count against this format
    pub fn validate(&self, page_count: usize) -> Result<()> {
        if page_count == 0 {
            return Err(ImposeError::EmptyDocument);
        }
        if !self.pages.contains(page_count) {
            return Err(ImposeError::PageCountOutOfRange {
                format: self.id.clone(),
                pages: page_count,
                min: self.pages.min,
                max: self.pages.max,
            });
        }
        if self.kind == FormatKind::Unimpose {
            linear_page_count(page_count)?;
        }
        Ok(())
    }

    /// Validate, then lay out `page_count` source pages
    pub fn compute_plan(&self, page_count: usize) -> Result<ImpositionPlan> {
        self.validate(page_count)?;

        let plan = match self.kind {
            FormatKind::SaddleStitch => saddle_stitch_plan(page_count),
            FormatKind::Unimpose => {
                return resolve_linear_order(page_count).map(ImpositionPlan::Linear);
            }
            FormatKind::MiniZine => mini_zine_plan(page_count),
            FormatKind::HalfFold => half_fold_plan(page_count),
            FormatKind::QuarterBooklet => quarter_booklet_plan(page_count),
            FormatKind::TwoUpProof => two_up_plan(page_count),
            FormatKind::Accordion => accordion_plan(page_count),
        };
        Ok(ImpositionPlan::Sheets(plan))
    }

    /// Which grid lines of a side are folds or cuts
    pub fn guide_style(&self) -> GuideStyle {
        match self.kind {
            FormatKind::Unimpose | FormatKind::TwoUpProof => GuideStyle::None,
            FormatKind::SaddleStitch
            | FormatKind::MiniZine
            | FormatKind::HalfFold
            | FormatKind::QuarterBooklet
            | FormatKind::Accordion => GuideStyle::FoldColumnsCutRows,
        }
    }
}

/// Formats available to a run, looked up by id
#[derive(Debug, Clone, PartialEq)]
pub struct FormatRegistry {
    formats: Vec<FormatDefinition>,
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FormatRegistry {
    /// Registry with no formats
    pub fn empty() -> Self {
        Self {
            formats: Vec::new(),
        }
    }

    /// Registry holding every built-in format
    pub fn builtin() -> Self {
        [
            FormatKind::SaddleStitch,
            FormatKind::Unimpose,
            FormatKind::MiniZine,
            FormatKind::HalfFold,
            FormatKind::QuarterBooklet,
            FormatKind::TwoUpProof,
            FormatKind::Accordion,
        ]
        .into_iter()
        .map(FormatDefinition::builtin)
        .fold(Self::empty(), Self::with)
    }

    /// Add a format, replacing any existing format with the same id
    pub fn register(&mut self, format: FormatDefinition) {
        match self.formats.iter_mut().find(|f| f.id == format.id) {
            Some(existing) => *existing = format,
            None => self.formats.push(format),
        }
    }

    /// Builder form of [`register`](Self::register)
    pub fn with(mut self, format: FormatDefinition) -> Self {
        self.register(format);
        self
    }

    pub fn get(&self, id: &str) -> Result<&FormatDefinition> {
        self.formats
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| ImposeError::UnknownFormat(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormatDefinition> {
        self.formats.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.formats.iter().map(|f| f.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}
