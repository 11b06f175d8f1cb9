//! Ephemeral pointer sessions.
//!
//! A session is created on pointer-down over the title bar or a resize
//! handle, consulted on every pointer-move while active, and discarded on
//! pointer-up (or when its window closes). Sessions live on the window
//! instance itself, so two windows can never share drag state.

use crate::geometry::{FloatRect, apply_resize};
use crate::handles::HandleSide;

/// An in-progress title-bar drag. Captures the pointer and the window
/// origin at press time; every move re-derives the origin so the offset
/// between pointer and top-left corner is preserved.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    pub start_column: u16,
    pub start_row: u16,
    pub origin_x: i32,
    pub origin_y: i32,
}

impl DragSession {
    pub fn position_for(&self, column: u16, row: u16) -> (i32, i32) {
        (
            self.origin_x + (column as i32 - self.start_column as i32),
            self.origin_y + (row as i32 - self.start_row as i32),
        )
    }
}

/// An in-progress resize. The handle side encodes the set of active edges.
#[derive(Debug, Clone, Copy)]
pub struct ResizeSession {
    pub side: HandleSide,
    pub start_column: u16,
    pub start_row: u16,
    pub start_rect: FloatRect,
}

impl ResizeSession {
    pub fn rect_for(&self, column: u16, row: u16) -> FloatRect {
        let spec = self.side.spec();
        apply_resize(
            self.start_rect,
            spec.horizontal,
            spec.vertical,
            column as i32 - self.start_column as i32,
            row as i32 - self.start_row as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_preserves_press_offset() {
        let session = DragSession {
            start_column: 105,
            start_row: 101,
            origin_x: 100,
            origin_y: 100,
        };
        assert_eq!(session.position_for(145, 86), (140, 85));
        // Order of moves is irrelevant; only the latest pointer matters.
        assert_eq!(session.position_for(105, 101), (100, 100));
    }

    #[test]
    fn resize_session_derives_rect_from_side() {
        let session = ResizeSession {
            side: HandleSide::BottomRight,
            start_column: 50,
            start_row: 40,
            start_rect: FloatRect::new(10, 10, 30, 20),
        };
        let rect = session.rect_for(55, 38);
        assert_eq!(rect, FloatRect::new(10, 10, 35, 18));
    }
}
