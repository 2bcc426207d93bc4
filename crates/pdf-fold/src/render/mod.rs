//! PDF rendering modules for imposition
//!
//! This module handles all PDF-specific operations:
//! - Reading source documents and their page sizes
//! - Embedding source pages as Form XObjects
//! - Composing output sheet sides and saving the result
//!
//! The orchestrator only talks to [`SheetRenderer`], so layouts can be
//! composed against any backend.

mod guides;
mod pdf;
mod xobject;

pub use guides::guide_ops;
pub use pdf::{PdfSource, PdfWriter};
pub use xobject::{copy_object_deep, create_page_xobject, get_page_dimensions, get_page_origin};

use crate::layout::{GuideLine, PageIndex, Rect, Rotation};
use crate::types::Result;

/// Where and how one source page is drawn on an output side
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub page: PageIndex,
    /// Uniform scale applied to the source page
    pub scale: f32,
    /// Origin of the placement transform, in points
    pub origin: (f32, f32),
    pub rotation: Rotation,
    /// Drawing is clipped to this area when set
    pub clip: Option<Rect>,
}

/// Output surface that composed sheet sides are drawn onto
pub trait SheetRenderer {
    /// Start a new output page of the given size in points
    fn begin_side(&mut self, width_pt: f32, height_pt: f32) -> Result<()>;

    /// Draw a source page onto the current side
    fn draw_page(&mut self, placement: &Placement) -> Result<()>;

    /// Draw guide lines, given in normalized coordinates of `area`
    fn draw_guides(&mut self, lines: &[GuideLine], area: &Rect) -> Result<()>;

    /// Finish the current side
    fn finish_side(&mut self) -> Result<()>;
}
