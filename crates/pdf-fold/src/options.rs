use crate::constants::mm_to_pt;
use crate::layout::Rect;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for one imposition run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImpositionOptions {
    /// Format id, looked up in the registry at run time
    pub format: String,

    /// Output paper; orientation comes from the format
    pub paper_size: PaperSize,

    /// Printer-safe margins around each output sheet
    pub margins: SheetMargins,

    pub guides: GuideMarks,
}

impl Default for ImpositionOptions {
    fn default() -> Self {
        Self {
            format: "saddle-stitch".to_string(),
            paper_size: PaperSize::Letter,
            margins: SheetMargins::default(),
            guides: GuideMarks::default(),
        }
    }
}

impl ImpositionOptions {
    /// Options for a format with everything else at its default
    pub fn for_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            ..Self::default()
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.format.trim().is_empty() {
            return Err(ImposeError::Config("No format specified".to_string()));
        }

        let (w, h) = self.paper_size.dimensions_mm();
        if !(w > 0.0 && h > 0.0) {
            return Err(ImposeError::Config(format!(
                "Paper size must be positive, got {}x{}mm",
                w, h
            )));
        }

        if self.margins.any_negative() {
            return Err(ImposeError::Config(
                "Margins cannot be negative".to_string(),
            ));
        }

        // The sheet may end up in either orientation, so check the short side
        let short = w.min(h);
        let m = &self.margins;
        if m.left_mm + m.right_mm >= short || m.top_mm + m.bottom_mm >= short {
            return Err(ImposeError::Config(format!(
                "Margins leave no printable area on a {}x{}mm sheet",
                w, h
            )));
        }

        Ok(())
    }

    /// Output sheet size in points for a sheet orientation
    pub fn sheet_size_pt(&self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.paper_size.dimensions_with_orientation(orientation);
        (mm_to_pt(w), mm_to_pt(h))
    }

    /// Printable area of a `width_pt` x `height_pt` sheet, inside the margins
    pub fn leaf_area(&self, width_pt: f32, height_pt: f32) -> Rect {
        let m = &self.margins;
        let left = mm_to_pt(m.left_mm);
        let bottom = mm_to_pt(m.bottom_mm);
        Rect::new(
            left,
            bottom,
            (width_pt - left - mm_to_pt(m.right_mm)).max(0.0),
            (height_pt - bottom - mm_to_pt(m.top_mm)).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_size_follows_orientation() {
        let options = ImpositionOptions {
            paper_size: PaperSize::A4,
            ..Default::default()
        };
        let (w, h) = options.sheet_size_pt(Orientation::Landscape);
        assert!(w > h);
        assert!((h - mm_to_pt(210.0)).abs() < 0.01);

        let (w, h) = options.sheet_size_pt(Orientation::Portrait);
        assert!(w < h);
    }

    #[test]
    fn test_leaf_area_inside_margins() {
        let options = ImpositionOptions {
            margins: SheetMargins {
                top_mm: 10.0,
                bottom_mm: 0.0,
                left_mm: 5.0,
                right_mm: 5.0,
            },
            ..Default::default()
        };
        let leaf = options.leaf_area(792.0, 612.0);
        assert!((leaf.x - mm_to_pt(5.0)).abs() < 0.01);
        assert_eq!(leaf.y, 0.0);
        assert!((leaf.right() - (792.0 - mm_to_pt(5.0))).abs() < 0.01);
        assert!((leaf.top() - (612.0 - mm_to_pt(10.0))).abs() < 0.01);
    }
}
