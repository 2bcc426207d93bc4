use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("Document has no pages")]
    EmptyDocument,
    #[error("{format} accepts {} pages, got {pages}", describe_range(*min, *max))]
    PageCountOutOfRange {
        format: String,
        pages: usize,
        min: usize,
        max: Option<usize>,
    },
    #[error("Unknown format: {0}")]
    UnknownFormat(String),
    #[error("Malformed imposition: {0}")]
    MalformedImposition(String),
    #[error("Failed to load document: {0}")]
    Load(String),
    #[error("Page {0} is not in the source document")]
    PageNotFound(u32),
    #[error("Render error: {0}")]
    Render(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

fn describe_range(min: usize, max: Option<usize>) -> String {
    match max {
        Some(max) if max == min => format!("exactly {}", min),
        Some(max) => format!("{} to {}", min, max),
        None => format!("at least {}", min),
    }
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    #[default]
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        let (short, long) = if w <= h { (w, h) } else { (h, w) };
        match orientation {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }
}

/// Sheet margins - printer-safe area around the entire output sheet.
/// Slot boxes are laid out inside this area.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetMargins {
    pub top_mm: f32,
    pub bottom_mm: f32,
    pub left_mm: f32,
    pub right_mm: f32,
}

impl Default for SheetMargins {
    fn default() -> Self {
        Self::uniform(5.0)
    }
}

impl SheetMargins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_mm: f32) -> Self {
        Self {
            top_mm: margin_mm,
            bottom_mm: margin_mm,
            left_mm: margin_mm,
            right_mm: margin_mm,
        }
    }

    fn values(&self) -> [f32; 4] {
        [self.top_mm, self.bottom_mm, self.left_mm, self.right_mm]
    }

    pub(crate) fn any_negative(&self) -> bool {
        self.values().iter().any(|m| *m < 0.0)
    }
}

/// Guide lines drawn on top of each composed sheet side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuideMarks {
    /// Dashed lines where the sheet is folded
    pub fold_lines: bool,
    /// Solid lines where the sheet is cut
    pub cut_lines: bool,
}

impl GuideMarks {
    pub fn any(&self) -> bool {
        self.fold_lines || self.cut_lines
    }
}

/// Statistics about the imposition
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpositionStatistics {
    /// Format the statistics were computed for
    pub format: String,
    /// Total number of source pages
    pub source_pages: usize,
    /// Page count after padding to the format's group size
    pub padded_pages: usize,
    /// Slots that stay blank
    pub blank_slots: usize,
    /// Physical sheets (zero for linear output)
    pub sheets: usize,
    /// Pages in the output document
    pub output_pages: usize,
}
