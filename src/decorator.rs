use ratatui::Frame;
use ratatui::prelude::Rect;
use ratatui::style::{Color, Modifier, Style};

use crate::constants::TITLE_BAR_HEIGHT;
use crate::geometry::FloatRect;

/// What a press on the title bar means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Minimize,
    Maximize,
    Close,
    Drag,
    None,
}

/// Renders and hit-tests a window's chrome. Swappable so hosts can restyle
/// the frame without touching the interaction state machine.
pub trait WindowDecorator: std::fmt::Debug {
    /// Rows of chrome above the content.
    fn title_bar_height(&self) -> u16 {
        TITLE_BAR_HEIGHT
    }

    fn render_frame(&self, frame: &mut Frame<'_>, rect: FloatRect, bounds: Rect, title: &str);

    /// Classifies a press at the given cell. `None` when the cell is not
    /// part of the title bar.
    fn hit_test(&self, rect: FloatRect, column: u16, row: u16) -> HeaderAction;

    /// Double-line outline shown while a resize session is active.
    fn render_resize_outline(&self, frame: &mut Frame<'_>, rect: FloatRect, bounds: Rect);
}

// Header-row column offsets from the right edge, mirroring the `– □ ×`
// cluster the frame renderer paints.
const CLOSE_OFFSET: i32 = 1;
const MAXIMIZE_OFFSET: i32 = 3;
const MINIMIZE_OFFSET: i32 = 5;
const CLUSTER_WIDTH: i32 = 6;

#[derive(Debug)]
pub struct DefaultDecorator;

impl DefaultDecorator {
    fn header_style(&self) -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    fn border_style(&self) -> Style {
        Style::default().fg(Color::DarkGray).bg(Color::Reset)
    }
}

fn in_bounds(bounds: Rect, x: i32, y: i32) -> bool {
    x >= bounds.x as i32
        && x < (bounds.x + bounds.width) as i32
        && y >= bounds.y as i32
        && y < (bounds.y + bounds.height) as i32
}

fn put(frame: &mut Frame<'_>, bounds: Rect, x: i32, y: i32, symbol: &str, style: Option<Style>) {
    if !in_bounds(bounds, x, y) {
        return;
    }
    if let Some(cell) = frame.buffer_mut().cell_mut((x as u16, y as u16)) {
        cell.set_symbol(symbol);
        if let Some(style) = style {
            cell.set_style(style);
        }
    }
}

impl WindowDecorator for DefaultDecorator {
    fn render_frame(&self, frame: &mut Frame<'_>, rect: FloatRect, bounds: Rect, title: &str) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let right = rect.x + rect.width as i32 - 1;
        let border_style = self.border_style();
        let header_style = self.header_style();

        // Top border row doubles as the top resize strip.
        for x in rect.x..=right {
            let symbol = if x == rect.x {
                "┌"
            } else if x == right {
                "┐"
            } else {
                "─"
            };
            put(frame, bounds, x, rect.y, symbol, Some(border_style));
        }

        // Header row: background, centered title, control cluster.
        let header_y = rect.y + 1;
        for x in rect.x..=right {
            put(frame, bounds, x, header_y, " ", Some(header_style));
        }
        let title_span = (rect.width as i32 - CLUSTER_WIDTH - 2).max(0);
        let title_len = title.chars().count().min(title_span as usize);
        let start_x = rect.x + 1 + (title_span - title_len as i32) / 2;
        for (idx, ch) in title.chars().take(title_len).enumerate() {
            put(
                frame,
                bounds,
                start_x + idx as i32,
                header_y,
                &ch.to_string(),
                Some(header_style),
            );
        }
        for (offset, glyph) in [
            (MINIMIZE_OFFSET, "–"),
            (MAXIMIZE_OFFSET, "□"),
            (CLOSE_OFFSET, "×"),
        ] {
            put(frame, bounds, right - offset, header_y, glyph, Some(header_style));
        }
    }

    fn hit_test(&self, rect: FloatRect, column: u16, row: u16) -> HeaderAction {
        let col = column as i32;
        if row as i32 != rect.y + 1 || !rect.contains(column, row) {
            return HeaderAction::None;
        }
        let right = rect.x + rect.width as i32 - 1;
        if col == right - CLOSE_OFFSET {
            return HeaderAction::Close;
        }
        if col == right - MAXIMIZE_OFFSET {
            return HeaderAction::Maximize;
        }
        if col == right - MINIMIZE_OFFSET {
            return HeaderAction::Minimize;
        }
        if col <= right - CLUSTER_WIDTH {
            return HeaderAction::Drag;
        }
        HeaderAction::None
    }

    fn render_resize_outline(&self, frame: &mut Frame<'_>, rect: FloatRect, bounds: Rect) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let right = rect.x + rect.width as i32 - 1;
        let bottom = rect.y + rect.height as i32 - 1;
        for x in rect.x + 1..right {
            put(frame, bounds, x, rect.y, "═", None);
            put(frame, bounds, x, bottom, "═", None);
        }
        for y in rect.y + 1..bottom {
            put(frame, bounds, rect.x, y, "║", None);
            put(frame, bounds, right, y, "║", None);
        }
        put(frame, bounds, rect.x, rect.y, "╔", None);
        put(frame, bounds, right, rect.y, "╗", None);
        put(frame, bounds, rect.x, bottom, "╚", None);
        put(frame, bounds, right, bottom, "╝", None);
    }
}
