use crate::format::{FormatDefinition, ImpositionPlan};
use crate::types::*;

/// Calculate statistics for imposing `source_pages` pages in a format
pub fn calculate_statistics(
    format: &FormatDefinition,
    source_pages: usize,
) -> Result<ImpositionStatistics> {
    let plan = format.compute_plan(source_pages)?;
    Ok(plan_statistics(&format.id, &plan))
}

/// Statistics of an already computed plan
pub fn plan_statistics(format_id: &str, plan: &ImpositionPlan) -> ImpositionStatistics {
    match plan {
        ImpositionPlan::Sheets(sheets) => ImpositionStatistics {
            format: format_id.to_string(),
            source_pages: sheets.total_pages,
            padded_pages: sheets.padded_pages,
            blank_slots: sheets.blank_slots(),
            sheets: sheets.sheets.len(),
            output_pages: sheets.side_count(),
        },
        // Each imposed page unfolds into two output pages, none blank
        ImpositionPlan::Linear(order) => ImpositionStatistics {
            format: format_id.to_string(),
            source_pages: order.imposed_pages,
            padded_pages: order.len(),
            blank_slots: 0,
            sheets: 0,
            output_pages: order.len(),
        },
    }
}
