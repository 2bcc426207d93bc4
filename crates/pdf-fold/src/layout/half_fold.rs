//! Single folded sheet of four pages: `[4 | 1]` outside, `[2 | 3]` inside

use super::saddle_stitch::spread_side;
use super::{Face, Sheet, SheetPlan};

/// Capacity of the folded sheet
pub const HALF_FOLD_PAGES: usize = 4;

/// Compute the half-fold plan for `page_count` source pages (validated by the caller)
pub fn half_fold_plan(page_count: usize) -> SheetPlan {
    SheetPlan {
        sheets: vec![Sheet {
            front: spread_side(Face::Front, 4, 1, page_count),
            back: Some(spread_side(Face::Back, 2, 3, page_count)),
        }],
        total_pages: page_count,
        padded_pages: HALF_FOLD_PAGES,
    }
}
