//! Layout data types for imposition
//!
//! These types describe a computed sheet plan: which source page lands in
//! which slot of which sheet side, and how that slot is oriented. They carry
//! no rendering state; a plan is produced once from a page count and thrown
//! away after composing.

use std::fmt;
use std::num::NonZeroU32;

use crate::types::{ImposeError, Result};

/// 1-based index of a page in the source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageIndex(NonZeroU32);

impl PageIndex {
    /// Create a page index, rejecting 0
    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(Self)
    }

    /// 1-based page number
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// 0-based position, for indexing page lists
    pub fn zero_based(self) -> usize {
        self.0.get() as usize - 1
    }

    pub(crate) fn from_position(position: usize) -> Result<Self> {
        u32::try_from(position + 1)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ImposeError::Config(format!("page position {} out of range", position)))
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What occupies a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotContent {
    Page(PageIndex),
    Blank,
}

impl SlotContent {
    /// Page `number` if it exists in a document of `page_count` pages, blank otherwise
    pub fn for_page(number: usize, page_count: usize) -> Self {
        if number == 0 || number > page_count {
            return SlotContent::Blank;
        }
        u32::try_from(number)
            .ok()
            .and_then(PageIndex::new)
            .map_or(SlotContent::Blank, SlotContent::Page)
    }

    pub fn page(self) -> Option<PageIndex> {
        match self {
            SlotContent::Page(page) => Some(page),
            SlotContent::Blank => None,
        }
    }

    pub fn is_blank(self) -> bool {
        matches!(self, SlotContent::Blank)
    }
}

/// Rotation applied to a slot's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Upright,
    /// Turned 180°, read from the opposite edge after folding
    UpsideDown,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Upright => 0,
            Rotation::UpsideDown => 180,
        }
    }

    pub fn is_rotated(self) -> bool {
        self == Rotation::UpsideDown
    }

    pub(crate) fn when(rotated: bool) -> Self {
        if rotated {
            Rotation::UpsideDown
        } else {
            Rotation::Upright
        }
    }
}

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Front of the sheet (printed first in duplex)
    Front,
    /// Back of the sheet (printed second in duplex)
    Back,
}

/// Left or right half of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Half {
    Left,
    Right,
}

impl Half {
    pub(crate) fn column(self) -> usize {
        match self {
            Half::Left => 0,
            Half::Right => 1,
        }
    }
}

/// Quarter of a sheet side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// Quadrant for a row (0 = top) and a half
    pub fn new(row: usize, half: Half) -> Self {
        match (row, half) {
            (0, Half::Left) => Quadrant::TopLeft,
            (0, Half::Right) => Quadrant::TopRight,
            (_, Half::Left) => Quadrant::BottomLeft,
            (_, Half::Right) => Quadrant::BottomRight,
        }
    }

    pub fn row(self) -> usize {
        match self {
            Quadrant::TopLeft | Quadrant::TopRight => 0,
            Quadrant::BottomLeft | Quadrant::BottomRight => 1,
        }
    }

    pub fn half(self) -> Half {
        match self {
            Quadrant::TopLeft | Quadrant::BottomLeft => Half::Left,
            Quadrant::TopRight | Quadrant::BottomRight => Half::Right,
        }
    }
}

/// Named position of a slot on a sheet side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotPosition {
    /// One half of a two-up side
    Half(Half),
    /// Panel in a single row of panels, counted from the left
    Panel(usize),
    /// Quarter of a side split into two rows of two
    Quadrant(Quadrant),
}

impl SlotPosition {
    /// Grid cell (row, col) of this position, row 0 on top
    pub fn cell(self) -> (usize, usize) {
        match self {
            SlotPosition::Half(half) => (0, half.column()),
            SlotPosition::Panel(index) => (0, index),
            SlotPosition::Quadrant(quadrant) => (quadrant.row(), quadrant.half().column()),
        }
    }
}

/// A rectangular area; `x`/`y` is the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Map a rect in normalized (unit square) coordinates onto `area`
    pub fn within(&self, area: &Rect) -> Rect {
        Rect::new(
            area.x + self.x * area.width,
            area.y + self.y * area.height,
            self.width * area.width,
            self.height * area.height,
        )
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

/// One position on a sheet side and what it holds
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub position: SlotPosition,
    pub content: SlotContent,
    pub rotation: Rotation,
    /// Destination area in normalized sheet coordinates (unit square)
    pub fit_box: Rect,
}

impl Slot {
    /// Slot at `position` of a side laid out as `grid`; the box follows from the position
    pub fn new(
        grid: (usize, usize),
        position: SlotPosition,
        content: SlotContent,
        rotation: Rotation,
    ) -> Self {
        Self {
            position,
            content,
            rotation,
            fit_box: super::grid::position_box(grid, position),
        }
    }
}

/// All slots printed on one face of one sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSide {
    pub face: Face,
    /// Grid shape (rows, cols) the slots are laid out on
    pub grid: (usize, usize),
    pub slots: Vec<Slot>,
}

impl SheetSide {
    /// Pages on this side, in slot order
    pub fn pages(&self) -> impl Iterator<Item = PageIndex> + '_ {
        self.slots.iter().filter_map(|slot| slot.content.page())
    }

    /// Slot at a position, if this side has one
    pub fn slot_at(&self, position: SlotPosition) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.position == position)
    }

    pub fn contents(&self) -> Vec<SlotContent> {
        self.slots.iter().map(|slot| slot.content).collect()
    }
}

/// One physical sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub front: SheetSide,
    /// `None` for single-sided formats
    pub back: Option<SheetSide>,
}

impl Sheet {
    /// Sides in print order: front, then back
    pub fn sides(&self) -> impl Iterator<Item = &SheetSide> {
        std::iter::once(&self.front).chain(self.back.as_ref())
    }
}

/// The complete output layout for one run
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    /// Sheets in physical print order
    pub sheets: Vec<Sheet>,
    /// Source page count
    pub total_pages: usize,
    /// Page count after padding to the format's group size
    pub padded_pages: usize,
}

impl SheetPlan {
    /// Every side in print order
    pub fn sides(&self) -> impl Iterator<Item = &SheetSide> {
        self.sheets.iter().flat_map(Sheet::sides)
    }

    pub fn side_count(&self) -> usize {
        self.sides().count()
    }

    /// Every slot in print order
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.sides().flat_map(|side| side.slots.iter())
    }

    pub fn blank_slots(&self) -> usize {
        self.slots().filter(|slot| slot.content.is_blank()).count()
    }
}

/// Where one page of a linear document comes from in an imposed document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearPage {
    /// 1-based page number in the recovered linear document
    pub linear_page: usize,
    /// Page of the imposed document holding it
    pub imposed_page: PageIndex,
    /// Which half of that imposed page
    pub half: Half,
}

/// Recovered reading order, one entry per output page in increasing order
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPageOrder {
    pub pages: Vec<LinearPage>,
    /// Page count of the imposed input
    pub imposed_pages: usize,
}

impl LinearPageOrder {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_index_rejects_zero() {
        assert!(PageIndex::new(0).is_none());
        let page = PageIndex::new(3).unwrap();
        assert_eq!(page.get(), 3);
        assert_eq!(page.zero_based(), 2);
    }

    #[test]
    fn test_slot_content_for_page() {
        assert_eq!(SlotContent::for_page(0, 4), SlotContent::Blank);
        assert_eq!(SlotContent::for_page(5, 4), SlotContent::Blank);
        assert_eq!(
            SlotContent::for_page(4, 4),
            SlotContent::Page(PageIndex::new(4).unwrap())
        );
    }

    #[test]
    fn test_quadrant_roundtrip() {
        for quadrant in [
            Quadrant::TopLeft,
            Quadrant::TopRight,
            Quadrant::BottomLeft,
            Quadrant::BottomRight,
        ] {
            assert_eq!(Quadrant::new(quadrant.row(), quadrant.half()), quadrant);
        }
    }

    #[test]
    fn test_rect_within() {
        let unit = Rect::new(0.5, 0.0, 0.5, 1.0);
        let area = Rect::new(10.0, 20.0, 200.0, 100.0);
        let mapped = unit.within(&area);
        assert_eq!(mapped, Rect::new(110.0, 20.0, 100.0, 100.0));
    }
}
