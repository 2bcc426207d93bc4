//! Shared constants for PDF imposition
//!
//! This module centralizes magic numbers and constants used throughout
//! the imposition process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Guide Lines
// =============================================================================

/// Line width for fold lines (points)
pub const FOLD_LINE_WIDTH: f32 = 0.5;

/// Line width for cut lines (points)
pub const CUT_LINE_WIDTH: f32 = 0.5;

/// Dash pattern for fold lines: 6pt dash, 3pt gap
pub const FOLD_LINE_DASH: (f32, f32) = (6.0, 3.0);

/// Gray level for guide lines (0 = black)
pub const GUIDE_GRAY: f32 = 0.6;

// =============================================================================
// Progress
// =============================================================================

/// Percent reached once the source is loaded
pub const PROGRESS_LOADED: u8 = 10;

/// Percent reached once the plan is computed
pub const PROGRESS_PLANNED: u8 = 20;

/// Percent reached once every sheet side is composed
pub const PROGRESS_COMPOSED: u8 = 90;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_pt_roundtrip() {
        let pt = mm_to_pt(25.4);
        assert!((pt - 72.0).abs() < 0.001);
        assert!((pt_to_mm(pt) - 25.4).abs() < 0.001);
    }
}
