//! Layout calculation modules for imposition
//!
//! Everything here is pure: page counts in, plans out.
//! - Sheet plans for each folding scheme (which page goes in which slot)
//! - The inverse mapping for un-imposing saddle-stitched documents
//! - Slot geometry (normalized boxes, scale-to-fit, rotation origin)
//! - Fold and cut guide lines

mod accordion;
mod geometry;
mod grid;
mod guides;
mod half_fold;
mod mini_zine;
mod quarter_booklet;
mod saddle_stitch;
mod two_up;
mod types;
mod unimpose;

pub use accordion::{ACCORDION_PAGES, PANELS_PER_SIDE, accordion_plan};
pub use geometry::{Fit, fit};
pub use grid::{cell_box, position_box};
pub use guides::{GuideKind, GuideLine, GuideStyle};
pub use half_fold::{HALF_FOLD_PAGES, half_fold_plan};
pub use mini_zine::{MINI_ZINE_PAGES, PANEL_GRID, mini_zine_plan};
pub use quarter_booklet::{QUADRANT_GRID, quarter_booklet_plan};
pub use saddle_stitch::{
    SPREAD_GRID, Spread, padded_page_count, saddle_stitch_plan, signature_spreads,
};
pub use two_up::two_up_plan;
pub use types::*;
pub use unimpose::{check_spread_size, linear_page_count, resolve_linear_order};
