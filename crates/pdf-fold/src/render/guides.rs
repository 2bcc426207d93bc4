//! Guide line rendering
//!
//! Turns normalized [`GuideLine`]s into PDF content stream operations:
//! folds are dashed, cuts are solid, both in light gray.

use crate::constants::{CUT_LINE_WIDTH, FOLD_LINE_DASH, FOLD_LINE_WIDTH, GUIDE_GRAY};
use crate::layout::{GuideKind, GuideLine, Rect};

/// Content stream operations drawing `lines` over `area`
pub fn guide_ops(lines: &[GuideLine], area: &Rect) -> String {
    if lines.is_empty() {
        return String::new();
    }

    let mut ops = String::new();
    ops.push_str("q\n");
    ops.push_str(&format!("{} G\n", GUIDE_GRAY));

    for kind in [GuideKind::Fold, GuideKind::Cut] {
        let mut of_kind = lines.iter().filter(|line| line.kind == kind).peekable();
        if of_kind.peek().is_none() {
            continue;
        }

        match kind {
            GuideKind::Fold => {
                ops.push_str(&format!("{} w\n", FOLD_LINE_WIDTH));
                ops.push_str(&format!("[{} {}] 0 d\n", FOLD_LINE_DASH.0, FOLD_LINE_DASH.1));
            }
            GuideKind::Cut => {
                ops.push_str(&format!("{} w\n", CUT_LINE_WIDTH));
                ops.push_str("[] 0 d\n");
            }
        }

        for line in of_kind {
            let (x0, y0) = to_area(line.from, area);
            let (x1, y1) = to_area(line.to, area);
            ops.push_str(&format!("{} {} m {} {} l S\n", x0, y0, x1, y1));
        }
    }

    ops.push_str("Q\n");
    ops
}

fn to_area((x, y): (f32, f32), area: &Rect) -> (f32, f32) {
    (area.x + x * area.width, area.y + y * area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_lines_no_ops() {
        assert!(guide_ops(&[], &Rect::new(0.0, 0.0, 100.0, 100.0)).is_empty());
    }

    #[test]
    fn test_fold_is_dashed_cut_is_solid() {
        let lines = [
            GuideLine {
                kind: GuideKind::Cut,
                from: (0.0, 0.5),
                to: (1.0, 0.5),
            },
            GuideLine {
                kind: GuideKind::Fold,
                from: (0.5, 0.0),
                to: (0.5, 1.0),
            },
        ];
        let ops = guide_ops(&lines, &Rect::new(10.0, 20.0, 200.0, 100.0));

        let fold_at = ops.find("[6 3] 0 d").unwrap();
        let cut_at = ops.find("[] 0 d").unwrap();
        assert!(fold_at < cut_at);
        assert!(ops.contains("110 20 m 110 120 l S"));
        assert!(ops.contains("10 70 m 210 70 l S"));
        assert!(ops.starts_with("q\n") && ops.ends_with("Q\n"));
    }
}
