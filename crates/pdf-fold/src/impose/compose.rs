//! Walks a computed plan and draws it through a [`SheetRenderer`]

use crate::constants::{PROGRESS_COMPOSED, PROGRESS_PLANNED};
use crate::layout::{
    Fit, GuideKind, GuideLine, GuideStyle, Half, LinearPageOrder, PageIndex, Rect, SheetPlan,
    SheetSide, Slot, check_spread_size,
};
use crate::progress::{Progress, Stage};
use crate::render::{Placement, SheetRenderer};
use crate::types::{GuideMarks, ImposeError, Result};

/// Physical geometry shared by every side of a sheet plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    /// Output sheet (width, height) in points
    pub sheet_size: (f32, f32),
    /// Area slot boxes are mapped onto
    pub leaf: Rect,
    pub guide_style: GuideStyle,
    pub guides: GuideMarks,
}

impl SheetGeometry {
    /// Guide lines to draw on a side, filtered by the enabled marks
    pub fn guide_lines(&self, side: &SheetSide) -> Vec<GuideLine> {
        if !self.guides.any() {
            return Vec::new();
        }
        self.guide_style
            .lines_for(side)
            .into_iter()
            .filter(|line| match line.kind {
                GuideKind::Fold => self.guides.fold_lines,
                GuideKind::Cut => self.guides.cut_lines,
            })
            .collect()
    }
}

fn page_size(page_sizes: &[(f32, f32)], page: PageIndex) -> Result<(f32, f32)> {
    page_sizes
        .get(page.zero_based())
        .copied()
        .ok_or(ImposeError::PageNotFound(page.get()))
}

/// Placement of a slot's page scaled into the slot box, `None` for blanks
pub fn slot_placement(slot: &Slot, page_size: (f32, f32), leaf: &Rect) -> Option<Placement> {
    let page = slot.content.page()?;
    let target = slot.fit_box.within(leaf);
    let fit = Fit::into_box(page_size.0, page_size.1, &target);

    Some(Placement {
        page,
        scale: fit.scale,
        origin: fit.origin(&target, slot.rotation),
        rotation: slot.rotation,
        clip: None,
    })
}

/// Draw every side of `plan` in print order: sheet by sheet, front then back
pub(crate) fn compose_sheets<R: SheetRenderer + ?Sized>(
    renderer: &mut R,
    plan: &SheetPlan,
    page_sizes: &[(f32, f32)],
    geometry: &SheetGeometry,
    progress: &mut Progress<'_>,
) -> Result<usize> {
    let total = plan.side_count();
    let (width, height) = geometry.sheet_size;

    for (index, side) in plan.sides().enumerate() {
        renderer.begin_side(width, height)?;

        let mut drawn = 0;
        for slot in &side.slots {
            let Some(page) = slot.content.page() else {
                continue;
            };
            let size = page_size(page_sizes, page)?;
            if let Some(placement) = slot_placement(slot, size, &geometry.leaf) {
                renderer.draw_page(&placement)?;
                drawn += 1;
            }
        }

        let lines = geometry.guide_lines(side);
        if !lines.is_empty() {
            renderer.draw_guides(&lines, &geometry.leaf)?;
        }
        renderer.finish_side()?;

        log::debug!(
            "Composed side {}/{} ({:?}): {} pages, {} blank",
            index + 1,
            total,
            side.face,
            drawn,
            side.slots.len() - drawn
        );
        progress.step(
            Stage::Composing,
            PROGRESS_PLANNED,
            PROGRESS_COMPOSED,
            index + 1,
            total,
            format!("Composed side {} of {}", index + 1, total),
        );
    }

    Ok(total)
}

/// Crop each linear page out of its imposed spread onto its own output page
pub(crate) fn compose_linear<R: SheetRenderer + ?Sized>(
    renderer: &mut R,
    order: &LinearPageOrder,
    page_sizes: &[(f32, f32)],
    progress: &mut Progress<'_>,
) -> Result<usize> {
    for &(width, height) in page_sizes {
        check_spread_size(width, height)?;
    }

    let total = order.len();
    for (index, entry) in order.pages.iter().enumerate() {
        let (width, height) = page_size(page_sizes, entry.imposed_page)?;
        let half_width = width / 2.0;
        let offset = match entry.half {
            Half::Left => 0.0,
            Half::Right => -half_width,
        };

        renderer.begin_side(half_width, height)?;
        renderer.draw_page(&Placement {
            page: entry.imposed_page,
            scale: 1.0,
            origin: (offset, 0.0),
            rotation: Default::default(),
            clip: Some(Rect::new(0.0, 0.0, half_width, height)),
        })?;
        renderer.finish_side()?;

        log::debug!(
            "Page {} taken from the {:?} half of imposed page {}",
            entry.linear_page,
            entry.half,
            entry.imposed_page
        );
        progress.step(
            Stage::Composing,
            PROGRESS_PLANNED,
            PROGRESS_COMPOSED,
            index + 1,
            total,
            format!("Extracted page {} of {}", index + 1, total),
        );
    }

    Ok(total)
}
