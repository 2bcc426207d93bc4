//! Accordion (zig-zag) fold strip
//!
//! Up to four panels per side. Adjacent panels alternate orientation so each
//! reads upright once the strip is folded back and forth. Pages past the
//! fourth go on the back in reverse panel order, since turning the sheet
//! over swaps left and right along the strip.

use super::{Face, Rotation, Sheet, SheetPlan, SheetSide, Slot, SlotContent, SlotPosition};

/// Panels on one side of the strip
pub const PANELS_PER_SIDE: usize = 4;

/// Capacity of the strip
pub const ACCORDION_PAGES: usize = 2 * PANELS_PER_SIDE;

/// Compute the accordion plan for `page_count` source pages (validated by the caller)
pub fn accordion_plan(page_count: usize) -> SheetPlan {
    let panels = page_count.min(PANELS_PER_SIDE);
    let grid = (1, panels);

    let front_slots = (0..panels)
        .map(|i| {
            Slot::new(
                grid,
                SlotPosition::Panel(i),
                SlotContent::for_page(i + 1, page_count),
                Rotation::when(i % 2 == 1),
            )
        })
        .collect();

    let back = (page_count > PANELS_PER_SIDE).then(|| {
        let back_panels = page_count - PANELS_PER_SIDE;
        let mut slots: Vec<Slot> = (0..back_panels)
            .map(|i| {
                Slot::new(
                    grid,
                    SlotPosition::Panel(back_panels - 1 - i),
                    SlotContent::for_page(PANELS_PER_SIDE + 1 + i, page_count),
                    Rotation::when(i % 2 == 0),
                )
            })
            .collect();
        slots.sort_by_key(|slot| slot.position.cell().1);

        SheetSide {
            face: Face::Back,
            grid,
            slots,
        }
    });

    SheetPlan {
        sheets: vec![Sheet {
            front: SheetSide {
                face: Face::Front,
                grid,
                slots: front_slots,
            },
            back,
        }],
        total_pages: page_count,
        padded_pages: page_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_pages(side: &SheetSide) -> Vec<(usize, u32, bool)> {
        side.slots
            .iter()
            .map(|slot| {
                let SlotPosition::Panel(index) = slot.position else {
                    panic!("accordion slots are panels");
                };
                (index, slot.content.page().unwrap().get(), slot.rotation.is_rotated())
            })
            .collect()
    }

    #[test]
    fn test_short_strip_is_single_sided() {
        let plan = accordion_plan(3);
        assert!(plan.sheets[0].back.is_none());
        assert_eq!(plan.sheets[0].front.grid, (1, 3));
        assert_eq!(
            panel_pages(&plan.sheets[0].front),
            vec![(0, 1, false), (1, 2, true), (2, 3, false)]
        );
    }

    #[test]
    fn test_back_is_reversed() {
        let plan = accordion_plan(7);
        let back = plan.sheets[0].back.as_ref().unwrap();
        // pages 5, 6, 7 go to panels 2, 1, 0; page 5 (i = 0) is rotated
        assert_eq!(
            panel_pages(back),
            vec![(0, 7, true), (1, 6, false), (2, 5, true)]
        );
    }

    #[test]
    fn test_full_strip() {
        let plan = accordion_plan(8);
        let back = plan.sheets[0].back.as_ref().unwrap();
        assert_eq!(back.grid, (1, 4));
        assert_eq!(
            panel_pages(back),
            vec![(0, 8, false), (1, 7, true), (2, 6, false), (3, 5, true)]
        );
        assert_eq!(plan.padded_pages, 8);
    }
}
