//! Eight-panel mini-zine on a single sheet
//!
//! The panel order encodes a physical fold sequence (lengthwise fold,
//! widthwise fold, center cut, refold) with no closed form, so it is a
//! literal table.

use super::{Face, Rotation, Sheet, SheetPlan, SheetSide, Slot, SlotContent, SlotPosition};

/// Panel grid of each side: one row of four
pub const PANEL_GRID: (usize, usize) = (1, 4);

/// Capacity of the sheet
pub const MINI_ZINE_PAGES: usize = 8;

/// (page, rotated) per front panel, left to right
const FRONT_PANELS: [(usize, bool); 4] = [(4, true), (5, false), (8, true), (1, false)];

/// (page, rotated) per back panel, left to right, after a long-edge flip
const BACK_PANELS: [(usize, bool); 4] = [(2, false), (7, true), (6, false), (3, true)];

fn panel_side(face: Face, panels: &[(usize, bool); 4], page_count: usize) -> SheetSide {
    let slots = panels
        .iter()
        .enumerate()
        .map(|(index, &(page, rotated))| {
            Slot::new(
                PANEL_GRID,
                SlotPosition::Panel(index),
                SlotContent::for_page(page, page_count),
                Rotation::when(rotated),
            )
        })
        .collect();

    SheetSide {
        face,
        grid: PANEL_GRID,
        slots,
    }
}

/// Compute the mini-zine plan for `page_count` source pages (validated by the caller)
pub fn mini_zine_plan(page_count: usize) -> SheetPlan {
    SheetPlan {
        sheets: vec![Sheet {
            front: panel_side(Face::Front, &FRONT_PANELS, page_count),
            back: Some(panel_side(Face::Back, &BACK_PANELS, page_count)),
        }],
        total_pages: page_count,
        padded_pages: MINI_ZINE_PAGES,
    }
}
