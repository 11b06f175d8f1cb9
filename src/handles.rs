//! Resize handle placement.
//!
//! Each window exposes eight invisible hit strips along its perimeter: four
//! edges and four corners. A handle's placement and the edges it drives are
//! both read from one static table rather than derived conditionally per
//! side.

use ratatui::prelude::Rect;

use crate::constants::TITLE_BAR_HEIGHT;
use crate::geometry::{FloatRect, HEdge, VEdge};

/// One of the eight resize affordances around the window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSide {
    Top,
    Right,
    Bottom,
    Left,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Static description of one handle: which edges it drives and the glyph
/// shown when the pointer hovers it. `None` on an axis means the handle
/// spans that axis (minus the corner cells) instead of sitting on an edge.
#[derive(Debug, Clone, Copy)]
pub struct HandleSpec {
    pub side: HandleSide,
    pub horizontal: Option<HEdge>,
    pub vertical: Option<VEdge>,
    pub hover_glyph: &'static str,
}

pub const HANDLE_TABLE: [HandleSpec; 8] = [
    HandleSpec {
        side: HandleSide::Top,
        horizontal: None,
        vertical: Some(VEdge::Top),
        hover_glyph: "↕",
    },
    HandleSpec {
        side: HandleSide::Right,
        horizontal: Some(HEdge::Right),
        vertical: None,
        hover_glyph: "↔",
    },
    HandleSpec {
        side: HandleSide::Bottom,
        horizontal: None,
        vertical: Some(VEdge::Bottom),
        hover_glyph: "↕",
    },
    HandleSpec {
        side: HandleSide::Left,
        horizontal: Some(HEdge::Left),
        vertical: None,
        hover_glyph: "↔",
    },
    HandleSpec {
        side: HandleSide::TopLeft,
        horizontal: Some(HEdge::Left),
        vertical: Some(VEdge::Top),
        hover_glyph: "⤡",
    },
    HandleSpec {
        side: HandleSide::TopRight,
        horizontal: Some(HEdge::Right),
        vertical: Some(VEdge::Top),
        hover_glyph: "⤢",
    },
    HandleSpec {
        side: HandleSide::BottomLeft,
        horizontal: Some(HEdge::Left),
        vertical: Some(VEdge::Bottom),
        hover_glyph: "⤢",
    },
    HandleSpec {
        side: HandleSide::BottomRight,
        horizontal: Some(HEdge::Right),
        vertical: Some(VEdge::Bottom),
        hover_glyph: "⤡",
    },
];

impl HandleSide {
    /// The table is ordered by discriminant, so each side indexes its own
    /// entry directly.
    pub fn spec(self) -> &'static HandleSpec {
        &HANDLE_TABLE[self as usize]
    }
}

/// A handle's screen-space hit rectangle.
#[derive(Debug, Clone, Copy)]
pub struct ResizeHandle {
    pub side: HandleSide,
    pub rect: Rect,
}

/// Computes the visible hit rectangles for every handle of a window.
///
/// The strips sit on the window's own perimeter cells, overlaying the
/// content edges the same way the side handles of a desktop window overlay
/// its border. Handles that would land on the header row of a collapsed
/// window are suppressed so the title bar stays draggable.
pub fn handles_for_rect(fr: FloatRect, bounds: Rect) -> Vec<ResizeHandle> {
    let mut handles = Vec::with_capacity(HANDLE_TABLE.len());
    if fr.width == 0 || fr.height == 0 {
        return handles;
    }
    // A window collapsed to its title bar only exposes the top-row handles;
    // anything else would shadow the header's drag region and buttons.
    let collapsed = fr.height <= TITLE_BAR_HEIGHT;
    for spec in &HANDLE_TABLE {
        if collapsed && !matches!(spec.vertical, Some(VEdge::Top)) {
            continue;
        }
        let (x, width) = match spec.horizontal {
            Some(HEdge::Left) => (fr.x, 1),
            Some(HEdge::Right) => (fr.x + fr.width as i32 - 1, 1),
            None => (fr.x + 1, fr.width.saturating_sub(2)),
        };
        let (y, height) = match spec.vertical {
            Some(VEdge::Top) => (fr.y, 1),
            Some(VEdge::Bottom) => (fr.y + fr.height as i32 - 1, 1),
            None => (fr.y + 1, fr.height.saturating_sub(2)),
        };
        if width == 0 || height == 0 {
            continue;
        }
        let strip = FloatRect::new(x, y, width, height);
        if let Some(rect) = strip.to_screen(bounds) {
            handles.push(ResizeHandle {
                side: spec.side,
                rect,
            });
        }
    }
    handles
}

/// The handle containing the given cell, if any. Edge strips exclude the
/// corner cells, so at most one handle can match.
pub fn handle_at(fr: FloatRect, bounds: Rect, column: u16, row: u16) -> Option<HandleSide> {
    handles_for_rect(fr, bounds)
        .into_iter()
        .find(|handle| {
            column >= handle.rect.x
                && column < handle.rect.x + handle.rect.width
                && row >= handle.rect.y
                && row < handle.rect.y + handle.rect.height
        })
        .map(|handle| handle.side)
}
