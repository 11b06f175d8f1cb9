use std::any::Any;

use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use crate::geometry::Size;

/// Caller-supplied window content.
///
/// The window queries [`Content::natural_size`] every frame and re-fits its
/// chrome whenever the reported size changes, so content never has to ask
/// for a re-measure explicitly.
pub trait Content {
    /// Intrinsic size of the content, in cells.
    fn natural_size(&self) -> Size;

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect);

    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }
}

/// Object-safe wrapper adding downcasting, so callers can reach their
/// concrete content type back through the window.
pub trait WindowContent: Content + Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Content + Any> WindowContent for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Plain-text content whose natural size tracks its longest line and line
/// count.
#[derive(Debug, Default)]
pub struct TextContent {
    lines: Vec<String>,
}

impl TextContent {
    pub fn new(text: &str) -> Self {
        let mut content = Self::default();
        content.set_text(text);
        content
    }

    pub fn set_text(&mut self, text: &str) {
        self.lines = text.lines().map(str::to_owned).collect();
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl Content for TextContent {
    fn natural_size(&self) -> Size {
        let width = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        Size::new(width.min(u16::MAX as usize) as u16, self.lines.len() as u16)
    }

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        frame.render_widget(Paragraph::new(self.text()), area);
    }
}
