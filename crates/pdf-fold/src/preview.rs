//! Text preview of a plan
//!
//! Shows each sheet side as a grid of page numbers the way it will be
//! printed: `·` for a blank slot, `▼` after a page printed upside down.

use crate::format::ImpositionPlan;
use crate::layout::{Face, Half, LinearPageOrder, SheetPlan, SheetSide, SlotContent};

const BLANK: &str = "·";
const ROTATED: &str = "▼";

/// Render a plan as a sheet-by-sheet table
pub fn describe_plan(plan: &ImpositionPlan) -> String {
    match plan {
        ImpositionPlan::Sheets(sheets) => describe_sheets(sheets),
        ImpositionPlan::Linear(order) => describe_linear(order),
    }
}

fn describe_sheets(plan: &SheetPlan) -> String {
    let sheets: Vec<Vec<(Face, Vec<Vec<String>>)>> = plan
        .sheets
        .iter()
        .map(|sheet| sheet.sides().map(|side| (side.face, side_rows(side))).collect())
        .collect();

    let width = sheets
        .iter()
        .flatten()
        .flat_map(|(_, rows)| rows.iter().flatten())
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for (index, sides) in sheets.iter().enumerate() {
        out.push_str(&format!("Sheet {}\n", index + 1));
        for (face, rows) in sides {
            let label = match face {
                Face::Front => "front",
                Face::Back => "back",
            };
            for (row, cells) in rows.iter().enumerate() {
                let label = if row == 0 { label } else { "" };
                let cells: Vec<String> = cells
                    .iter()
                    .map(|cell| format!("{:>width$}", cell, width = width))
                    .collect();
                out.push_str(&format!("  {:<5} | {} |\n", label, cells.join(" | ")));
            }
        }
    }

    out
}

/// Cell labels of a side, row by row
fn side_rows(side: &SheetSide) -> Vec<Vec<String>> {
    let (rows, cols) = side.grid;
    let mut grid = vec![vec![String::new(); cols]; rows];

    for slot in &side.slots {
        let (row, col) = slot.position.cell();
        let Some(cell) = grid.get_mut(row).and_then(|r| r.get_mut(col)) else {
            continue;
        };
        *cell = match slot.content {
            SlotContent::Page(page) if slot.rotation.is_rotated() => format!("{}{}", page, ROTATED),
            SlotContent::Page(page) => page.to_string(),
            SlotContent::Blank => BLANK.to_string(),
        };
    }

    grid
}

fn describe_linear(order: &LinearPageOrder) -> String {
    let mut out = String::new();
    for entry in &order.pages {
        let half = match entry.half {
            Half::Left => "left",
            Half::Right => "right",
        };
        out.push_str(&format!(
            "Page {:>3} <- imposed page {}, {} half\n",
            entry.linear_page, entry.imposed_page, half
        ));
    }
    out
}
