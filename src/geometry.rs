use ratatui::prelude::Rect;

use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

/// Width and height in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Signed floating rectangle origin with unsigned size.
///
/// Windows may be dragged partially off-screen, so the origin is signed;
/// only the intersection with the viewport is ever rendered or hit-tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl FloatRect {
    pub fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        let col = column as i32;
        let row = row as i32;
        col >= self.x
            && col < self.x + self.width as i32
            && row >= self.y
            && row < self.y + self.height as i32
    }

    /// Intersects with `bounds` and converts to screen coordinates.
    /// `None` when nothing of the rectangle is visible.
    pub fn to_screen(&self, bounds: Rect) -> Option<Rect> {
        let left = self.x.max(bounds.x as i32);
        let top = self.y.max(bounds.y as i32);
        let right = (self.x + self.width as i32).min((bounds.x + bounds.width) as i32);
        let bottom = (self.y + self.height as i32).min((bounds.y + bounds.height) as i32);
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect {
            x: left as u16,
            y: top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }
}

/// Horizontal edge a resize session acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HEdge {
    Left,
    Right,
}

/// Vertical edge a resize session acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VEdge {
    Top,
    Bottom,
}

/// Applies a pointer delta to `start` for the given active edges.
///
/// Each edge acts independently: the right/bottom edges extend the size by
/// the delta, the left/top edges shrink the size and shift the origin by the
/// same delta so the opposite edge stays anchored. Minimum-size clamps
/// compensate a shifted origin so the anchor never moves.
pub fn apply_resize(
    start: FloatRect,
    horizontal: Option<HEdge>,
    vertical: Option<VEdge>,
    dx: i32,
    dy: i32,
) -> FloatRect {
    let mut x = start.x;
    let mut y = start.y;
    let mut width = start.width as i32;
    let mut height = start.height as i32;

    match horizontal {
        Some(HEdge::Left) => {
            x += dx;
            width -= dx;
        }
        Some(HEdge::Right) => {
            width += dx;
        }
        None => {}
    }
    match vertical {
        Some(VEdge::Top) => {
            y += dy;
            height -= dy;
        }
        Some(VEdge::Bottom) => {
            height += dy;
        }
        None => {}
    }

    let min_w = MIN_WINDOW_WIDTH as i32;
    let min_h = MIN_WINDOW_HEIGHT as i32;
    if width < min_w {
        if matches!(horizontal, Some(HEdge::Left)) {
            x -= min_w - width;
        }
        width = min_w;
    }
    if height < min_h {
        if matches!(vertical, Some(VEdge::Top)) {
            y -= min_h - height;
        }
        height = min_h;
    }

    let max_dim = u16::MAX as i32;
    FloatRect {
        x,
        y,
        width: width.min(max_dim) as u16,
        height: height.min(max_dim) as u16,
    }
}
