//! Fixed geometry of the switch bank picture.
//!
//! ```text
//!  margin
//!  ├──┤
//!  ┌────────────────────────────────┐ ← panel (ROW_TOP - 30)
//!  │ ON                             │
//!  │ ┌──┐ ┌──┐ ┌──┐                 │ ← ROW_TOP
//!  │ │██│ │  │ │██│   ...           │   upper half
//!  │ │  │ │██│ │  │                 │   lower half
//!  │ └──┘ └──┘ └──┘                 │
//!  │  1    2    3                   │
//!  └────────────────────────────────┘
//! ```
//!
//! Rectangles are expressed with inclusive corners, matching how the slot
//! outlines are drawn.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

use crate::bank::SwitchBank;

/// Width of one switch slot in pixels.
pub const SLOT_WIDTH: u32 = 32;

/// Height of one switch slot in pixels.
pub const SLOT_HEIGHT: u32 = 80;

/// Horizontal gap between neighbouring slots.
pub const SLOT_SPACING: u32 = 6;

/// Distance from the canvas edge to the first and last slot.
pub const MARGIN: u32 = 20;

/// Canvas height beyond the slot height.
pub const VERTICAL_PADDING: u32 = 80;

/// Top edge of the slot row.
pub const ROW_TOP: i32 = 50;

/// Width of slot and panel outlines.
pub const BORDER_WIDTH: u32 = 2;

const PANEL_INSET_X: i32 = 10;
const PANEL_INSET_Y: i32 = 30;
const ON_INDICATOR_OFFSET: i32 = 25;
const LABEL_GAP: i32 = 5;

/// Geometry for a bank of `count` switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    count: usize,
}

impl Layout {
    /// Layout for the switches of `bank`.
    pub fn for_bank(bank: &SwitchBank) -> Self {
        Self::new(bank.switch_count())
    }

    // `count` must be in `1..=SwitchBank::MAX_SWITCHES`.
    pub(crate) fn new(count: usize) -> Self {
        debug_assert!((1..=SwitchBank::MAX_SWITCHES).contains(&count));
        Self { count }
    }

    /// Number of slots.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Canvas size: `count × (slot + spacing) + 2 × margin − spacing` wide,
    /// `slot height + padding` tall.
    pub fn canvas_size(&self) -> Size {
        let count = self.count as u32;
        Size::new(
            count * (SLOT_WIDTH + SLOT_SPACING) + 2 * MARGIN - SLOT_SPACING,
            SLOT_HEIGHT + VERTICAL_PADDING,
        )
    }

    /// Background panel grouping the slots.
    ///
    /// The panel extends to `ROW_TOP + SLOT_HEIGHT + 30`, which is one past
    /// the last canvas row; its bottom outline is partly clipped.
    pub fn panel(&self) -> Rectangle {
        let width = self.canvas_size().width as i32;
        let margin = MARGIN as i32;
        Rectangle::with_corners(
            Point::new(margin - PANEL_INSET_X, ROW_TOP - PANEL_INSET_Y),
            Point::new(width - margin + PANEL_INSET_X, ROW_TOP + SLOT_HEIGHT as i32 + PANEL_INSET_Y),
        )
    }

    /// Top-left of the "ON" marking.
    pub fn on_indicator(&self) -> Point {
        Point::new(MARGIN as i32, ROW_TOP - ON_INDICATOR_OFFSET)
    }

    /// Outline of slot `index` (zero-based).
    pub fn slot(&self, index: usize) -> Rectangle {
        let x = MARGIN as i32 + index as i32 * (SLOT_WIDTH + SLOT_SPACING) as i32;
        Rectangle::with_corners(
            Point::new(x, ROW_TOP),
            Point::new(x + SLOT_WIDTH as i32, ROW_TOP + SLOT_HEIGHT as i32),
        )
    }

    /// Upper half of the inside of slot `index`.
    pub fn upper_half(&self, index: usize) -> Rectangle {
        let slot = self.slot(index);
        let inset = BORDER_WIDTH as i32;
        let middle = ROW_TOP + SLOT_HEIGHT as i32 / 2;
        Rectangle::with_corners(
            slot.top_left + Point::new(inset, inset),
            Point::new(slot.top_left.x + SLOT_WIDTH as i32 - inset, middle),
        )
    }

    /// Lower half of the inside of slot `index`.
    pub fn lower_half(&self, index: usize) -> Rectangle {
        let slot = self.slot(index);
        let inset = BORDER_WIDTH as i32;
        let middle = ROW_TOP + SLOT_HEIGHT as i32 / 2;
        Rectangle::with_corners(
            Point::new(slot.top_left.x + inset, middle + 1),
            Point::new(slot.top_left.x + SLOT_WIDTH as i32 - inset, ROW_TOP + SLOT_HEIGHT as i32 - inset),
        )
    }

    /// Top-centre anchor of the position label under slot `index`.
    pub fn label_anchor(&self, index: usize) -> Point {
        let slot = self.slot(index);
        Point::new(
            slot.top_left.x + SLOT_WIDTH as i32 / 2,
            ROW_TOP + SLOT_HEIGHT as i32 + LABEL_GAP,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_size_formula() {
        assert_eq!(Layout::new(8).canvas_size(), Size::new(338, 160));
        assert_eq!(Layout::new(6).canvas_size(), Size::new(262, 160));
        assert_eq!(Layout::new(12).canvas_size(), Size::new(490, 160));
    }

    #[test]
    fn slots_are_evenly_spaced() {
        let layout = Layout::new(4);
        assert_eq!(layout.slot(0).top_left, Point::new(20, 50));
        assert_eq!(layout.slot(1).top_left, Point::new(58, 50));
        assert_eq!(layout.slot(3).top_left, Point::new(134, 50));
        assert_eq!(layout.slot(0).size, Size::new(33, 81));
    }

    #[test]
    fn last_slot_respects_right_margin() {
        let layout = Layout::new(10);
        let width = layout.canvas_size().width as i32;
        let last = layout.slot(9);
        assert_eq!(width - (last.top_left.x + SLOT_WIDTH as i32), MARGIN as i32);
    }

    #[test]
    fn halves_do_not_overlap() {
        let layout = Layout::new(1);
        let upper = layout.upper_half(0);
        let lower = layout.lower_half(0);
        assert_eq!(upper.top_left.y + upper.size.height as i32, lower.top_left.y);
        assert_eq!(upper.size.width, lower.size.width);
        assert!(layout.slot(0).contains(upper.top_left));
        assert!(layout.slot(0).contains(lower.center()));
    }

    #[test]
    fn largest_bank_fits() {
        let bank = SwitchBank::from_address(u64::MAX, SwitchBank::MAX_SWITCHES).unwrap();
        let layout = Layout::for_bank(&bank);
        assert_eq!(layout.count(), 64);
        assert_eq!(layout.canvas_size(), Size::new(2466, 160));
        assert_eq!(layout.slot(63).top_left.x, 2414);
    }

    #[test]
    fn layout_follows_bank() {
        let bank = SwitchBank::from_address(5, 8).unwrap();
        assert_eq!(Layout::for_bank(&bank), Layout::new(8));
    }

    #[test]
    fn panel_surrounds_slots() {
        let layout = Layout::new(8);
        let panel = layout.panel();
        assert_eq!(panel.top_left, Point::new(10, 20));
        assert!(panel.contains(layout.slot(0).top_left));
        assert!(panel.contains(layout.label_anchor(7)));
        assert!(panel.contains(layout.on_indicator()));
    }
}
