//! Fold and cut guide lines
//!
//! Guides are computed from a sheet side's grid in normalized sheet
//! coordinates. Which grid lines are folds and which are cuts depends on the
//! format.

use super::SheetSide;

/// What a guide line marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideKind {
    Fold,
    Cut,
}

/// A straight guide line in normalized sheet coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    pub kind: GuideKind,
    pub from: (f32, f32),
    pub to: (f32, f32),
}

impl GuideLine {
    fn vertical(kind: GuideKind, x: f32) -> Self {
        Self {
            kind,
            from: (x, 0.0),
            to: (x, 1.0),
        }
    }

    fn horizontal(kind: GuideKind, y: f32) -> Self {
        Self {
            kind,
            from: (0.0, y),
            to: (1.0, y),
        }
    }
}

/// How a format treats the interior lines of its grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideStyle {
    /// No guides
    None,
    /// Column boundaries fold, row boundaries are cut
    FoldColumnsCutRows,
}

impl GuideStyle {
    /// Guide lines for one side
    pub fn lines_for(self, side: &SheetSide) -> Vec<GuideLine> {
        match self {
            GuideStyle::None => Vec::new(),
            GuideStyle::FoldColumnsCutRows => {
                let (rows, cols) = side.grid;
                let folds = (1..cols)
                    .map(|col| GuideLine::vertical(GuideKind::Fold, col as f32 / cols as f32));
                let cuts = (1..rows)
                    .map(|row| GuideLine::horizontal(GuideKind::Cut, row as f32 / rows as f32));
                folds.chain(cuts).collect()
            }
        }
    }
}
