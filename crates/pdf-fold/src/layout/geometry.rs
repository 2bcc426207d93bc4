//! Content placement within slot boxes
//!
//! Source pages are scaled uniformly to fit their destination box and
//! centered in it. A slot turned 180° keeps the same visual footprint: the
//! drawing origin moves to the opposite corner of the drawn area before the
//! rotation is applied.

use super::{Rect, Rotation};

/// Uniform scale-to-fit of a source page inside a box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub scale: f32,
    pub draw_width: f32,
    pub draw_height: f32,
    /// Horizontal offset of the drawn area from the box's left edge
    pub offset_x: f32,
    /// Vertical offset of the drawn area from the box's bottom edge
    pub offset_y: f32,
}

/// Scale a `src_width` × `src_height` page into a `box_width` × `box_height` box.
///
/// The aspect ratio is kept and the result is centered. A zero-sized source
/// produces a zero-sized fit.
pub fn fit(src_width: f32, src_height: f32, box_width: f32, box_height: f32) -> Fit {
    let box_width = box_width.max(0.0);
    let box_height = box_height.max(0.0);

    let scale = if src_width > 0.0 && src_height > 0.0 {
        (box_width / src_width).min(box_height / src_height)
    } else {
        0.0
    };

    let draw_width = (src_width * scale).min(box_width);
    let draw_height = (src_height * scale).min(box_height);

    Fit {
        scale,
        draw_width,
        draw_height,
        offset_x: (box_width - draw_width) / 2.0,
        offset_y: (box_height - draw_height) / 2.0,
    }
}

impl Fit {
    /// Fit a source page into `target`
    pub fn into_box(src_width: f32, src_height: f32, target: &Rect) -> Self {
        fit(src_width, src_height, target.width, target.height)
    }

    /// Area the content occupies once placed in `target`
    pub fn drawn_rect(&self, target: &Rect) -> Rect {
        Rect::new(
            target.x + self.offset_x,
            target.y + self.offset_y,
            self.draw_width,
            self.draw_height,
        )
    }

    /// Origin for the placement transform.
    ///
    /// For a 180° rotation the origin sits at the top-right corner of the
    /// drawn area so the turned content lands on the same area.
    pub fn origin(&self, target: &Rect, rotation: Rotation) -> (f32, f32) {
        let drawn = self.drawn_rect(target);
        match rotation {
            Rotation::Upright => (drawn.x, drawn.y),
            Rotation::UpsideDown => (drawn.x + drawn.width, drawn.y + drawn.height),
        }
    }
}
