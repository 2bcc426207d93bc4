//! Page imposition for folded and bound print formats
//!
//! Arranges the pages of a PDF onto printer sheets so that, once printed,
//! folded and cut, the pages read in order: saddle-stitch booklets,
//! quarter-size booklets, mini-zines, half-fold cards, accordion strips and
//! two-up proofs. Saddle-stitched documents can also be un-imposed back
//! into reading order.

pub mod constants;
mod format;
pub mod impose;
pub mod layout;
mod options;
pub mod preview;
mod progress;
pub mod render;
mod stats;
mod types;

pub use format::{FormatDefinition, FormatKind, FormatRegistry, ImpositionPlan, PageRange};
pub use impose::{Imposer, load_pdf, save_pdf};
pub use options::*;
pub use preview::describe_plan;
pub use progress::{ProgressSink, ProgressUpdate, Stage};
pub use render::{PdfSource, PdfWriter, Placement, SheetRenderer};
pub use stats::{calculate_statistics, plan_statistics};
pub use types::*;
