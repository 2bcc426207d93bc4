//! Saddle-stitch signature layout
//!
//! Sheets are nested and folded once along the spine. Unrolling the fold,
//! the outermost sheet carries the first and last pages and each sheet
//! further in advances two pages per side:
//!
//! ```text
//! sheet i   front: [ padded - 2i | 1 + 2i ]
//!           back:  [ 2 + 2i | padded - 1 - 2i ]
//! ```
//!
//! Pages past the end of the source are blank padding.

use super::{Face, Half, Rotation, Sheet, SheetPlan, SheetSide, Slot, SlotContent, SlotPosition};

/// Grid of one saddle-stitch side: a single row of two halves
pub const SPREAD_GRID: (usize, usize) = (1, 2);

/// Page numbers printed on one sheet, before blanking padding pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread {
    pub front_left: usize,
    pub front_right: usize,
    pub back_left: usize,
    pub back_right: usize,
}

impl Spread {
    /// Numbers in print order: front left, front right, back left, back right
    pub fn in_print_order(&self) -> [usize; 4] {
        [
            self.front_left,
            self.front_right,
            self.back_left,
            self.back_right,
        ]
    }
}

/// Smallest multiple of 4 that holds `page_count` pages
pub fn padded_page_count(page_count: usize) -> usize {
    page_count.div_ceil(4) * 4
}

/// The signature rule for a document of `page_count` pages.
///
/// Returns one spread per sheet, outermost sheet first.
pub fn signature_spreads(page_count: usize) -> Vec<Spread> {
    let padded = padded_page_count(page_count);

    (0..padded / 4)
        .map(|i| Spread {
            front_left: padded - 2 * i,
            front_right: 1 + 2 * i,
            back_left: 2 + 2 * i,
            back_right: padded - 1 - 2 * i,
        })
        .collect()
}

/// Build the two-up side for a pair of page numbers
pub(crate) fn spread_side(face: Face, left: usize, right: usize, page_count: usize) -> SheetSide {
    let slot = |half: Half, number: usize| {
        Slot::new(
            SPREAD_GRID,
            SlotPosition::Half(half),
            SlotContent::for_page(number, page_count),
            Rotation::Upright,
        )
    };

    SheetSide {
        face,
        grid: SPREAD_GRID,
        slots: vec![slot(Half::Left, left), slot(Half::Right, right)],
    }
}

/// Compute the saddle-stitch plan for `page_count` source pages (validated by the caller)
pub fn saddle_stitch_plan(page_count: usize) -> SheetPlan {
    let sheets = signature_spreads(page_count)
        .into_iter()
        .map(|spread| Sheet {
            front: spread_side(
                Face::Front,
                spread.front_left,
                spread.front_right,
                page_count,
            ),
            back: Some(spread_side(
                Face::Back,
                spread.back_left,
                spread.back_right,
                page_count,
            )),
        })
        .collect();

    SheetPlan {
        sheets,
        total_pages: page_count,
        padded_pages: padded_page_count(page_count),
    }
}
