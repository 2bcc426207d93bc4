//! Quarter-size booklet: two saddle-stitch sheets per physical sheet
//!
//! Each physical side is split into a top and a bottom row. A row holds one
//! mini-sheet of the ordinary saddle-stitch layout, its left page in the left
//! quadrant and its right page in the right quadrant. Mini-sheet `k` goes on
//! physical sheet `k / 2`, top row when `k` is even.
//!
//! Flipping the portrait sheet on its long edge keeps each row in place and
//! mirrors it left to right, the same way a landscape spread mirrors when
//! flipped on its short edge. Cutting the rows apart therefore yields exactly
//! the mini-sheets of the plain saddle-stitch layout.

use super::saddle_stitch::{Spread, padded_page_count, signature_spreads};
use super::{Face, Half, Quadrant, Rotation, Sheet, SheetPlan, SheetSide, Slot, SlotContent, SlotPosition};

/// Grid of one physical side: two rows of two quadrants
pub const QUADRANT_GRID: (usize, usize) = (2, 2);

/// Mini-sheets per physical sheet
const MINI_SHEETS_PER_SHEET: usize = 2;

fn row_slots(row: usize, left: usize, right: usize, page_count: usize) -> [Slot; 2] {
    let slot = |half: Half, number: usize| {
        Slot::new(
            QUADRANT_GRID,
            SlotPosition::Quadrant(Quadrant::new(row, half)),
            SlotContent::for_page(number, page_count),
            Rotation::Upright,
        )
    };
    [slot(Half::Left, left), slot(Half::Right, right)]
}

fn physical_side(face: Face, rows: &[Option<(usize, usize)>], page_count: usize) -> SheetSide {
    let slots = rows
        .iter()
        .enumerate()
        .flat_map(|(row, pair)| {
            // A row with no mini-sheet stays blank but keeps its geometry
            let (left, right) = pair.unwrap_or((0, 0));
            row_slots(row, left, right, page_count)
        })
        .collect();

    SheetSide {
        face,
        grid: QUADRANT_GRID,
        slots,
    }
}

/// Compute the quarter-booklet plan for `page_count` source pages (validated by the caller)
pub fn quarter_booklet_plan(page_count: usize) -> SheetPlan {
    let spreads = signature_spreads(page_count);

    let sheets = spreads
        .chunks(MINI_SHEETS_PER_SHEET)
        .map(|minis| {
            let row = |index: usize, pick: fn(&Spread) -> (usize, usize)| {
                minis.get(index).map(pick)
            };
            let front_rows = [
                row(0, |s| (s.front_left, s.front_right)),
                row(1, |s| (s.front_left, s.front_right)),
            ];
            let back_rows = [
                row(0, |s| (s.back_left, s.back_right)),
                row(1, |s| (s.back_left, s.back_right)),
            ];

            Sheet {
                front: physical_side(Face::Front, &front_rows, page_count),
                back: Some(physical_side(Face::Back, &back_rows, page_count)),
            }
        })
        .collect();

    SheetPlan {
        sheets,
        total_pages: page_count,
        padded_pages: padded_page_count(page_count),
    }
}
