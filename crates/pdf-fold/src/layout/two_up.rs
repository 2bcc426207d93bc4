//! Two-up proof: pages side by side in reading order, one side per sheet

use super::saddle_stitch::spread_side;
use super::{Face, Sheet, SheetPlan};

/// Compute the two-up plan for `page_count` source pages (validated by the caller)
pub fn two_up_plan(page_count: usize) -> SheetPlan {
    let spread_count = page_count.div_ceil(2);

    let sheets = (0..spread_count)
        .map(|s| Sheet {
            front: spread_side(Face::Front, 2 * s + 1, 2 * s + 2, page_count),
            back: None,
        })
        .collect();

    SheetPlan {
        sheets,
        total_pages: page_count,
        padded_pages: spread_count * 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_count_has_no_blank() {
        let plan = two_up_plan(6);
        assert_eq!(plan.sheets.len(), 3);
        assert_eq!(plan.padded_pages, 6);
        assert_eq!(plan.blank_slots(), 0);
        assert!(plan.sheets.iter().all(|s| s.back.is_none()));
    }
}
