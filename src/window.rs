//! The floating window widget and its interaction state machine.

use std::sync::Arc;

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::prelude::Rect;
use ratatui::widgets::Clear;

use crate::constants::DEFAULT_POSITION;
use crate::content::{Content, WindowContent};
use crate::decorator::{DefaultDecorator, HeaderAction, WindowDecorator};
use crate::geometry::{FloatRect, Size};
use crate::handles::handle_at;
use crate::session::{DragSession, ResizeSession};

/// Mutually exclusive display states. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Minimized,
    Maximized,
}

/// Geometry and mode of one window. Owned exclusively by its
/// [`FloatingWindow`] and mutated only through that window's own event
/// handling; the rendered frame is a projection of this record, never the
/// other way around.
#[derive(Debug, Clone, Copy)]
pub struct WindowState {
    pub x: i32,
    pub y: i32,
    pub size: Size,
    pub mode: Mode,
}

/// Snapshot taken on the way into `Maximized`, consumed on the way back
/// out. Exists only while the window is maximized.
#[derive(Debug, Clone, Copy)]
struct SavedGeometry {
    rect: FloatRect,
    mode: Mode,
}

/// How a window reacted to a dispatched event. The workspace uses mode
/// changes to maintain its minimized-window ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowResponse {
    Ignored,
    Handled,
    Mode(Mode),
    Closed,
}

pub struct FloatingWindow {
    title: String,
    content: Box<dyn WindowContent>,
    state: WindowState,
    saved: Option<SavedGeometry>,
    // Set by a completed drag-resize; cleared by the next content size
    // change, which hands control back to resize-to-fit.
    size_override: Option<Size>,
    last_natural: Size,
    content_visible: bool,
    prev_content_visible: bool,
    drag: Option<DragSession>,
    resize: Option<ResizeSession>,
    decorator: Arc<dyn WindowDecorator>,
    closed: bool,
}

impl std::fmt::Debug for FloatingWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloatingWindow")
            .field("title", &self.title)
            .field("state", &self.state)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl FloatingWindow {
    pub fn new<C: Content + 'static>(title: impl Into<String>, content: C) -> Self {
        let content: Box<dyn WindowContent> = Box::new(content);
        let last_natural = content.natural_size();
        let (x, y) = DEFAULT_POSITION;
        let mut window = Self {
            title: title.into(),
            content,
            state: WindowState {
                x,
                y,
                size: Size::default(),
                mode: Mode::Normal,
            },
            saved: None,
            size_override: None,
            last_natural,
            content_visible: true,
            prev_content_visible: true,
            drag: None,
            resize: None,
            decorator: Arc::new(DefaultDecorator),
            closed: false,
        };
        window.resize_to_fit();
        tracing::debug!(title = %window.title, "opened window");
        window
    }

    pub fn with_decorator(mut self, decorator: Arc<dyn WindowDecorator>) -> Self {
        self.decorator = decorator;
        if self.state.mode != Mode::Maximized {
            self.resize_to_fit();
        }
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn rect(&self) -> FloatRect {
        FloatRect::new(
            self.state.x,
            self.state.y,
            self.state.size.width,
            self.state.size.height,
        )
    }

    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.state.x = x;
        self.state.y = y;
    }

    /// Reaches the concrete content type back through the window.
    pub fn content_mut<T: Content + 'static>(&mut self) -> Option<&mut T> {
        self.content.as_any_mut().downcast_mut()
    }

    pub fn content_ref<T: Content + 'static>(&self) -> Option<&T> {
        self.content.as_any().downcast_ref()
    }

    pub(crate) fn closed(&self) -> bool {
        self.closed
    }

    pub(crate) fn has_session(&self) -> bool {
        self.drag.is_some() || self.resize.is_some()
    }

    fn title_bar_height(&self) -> u16 {
        self.decorator.title_bar_height()
    }

    /// Recomputes the container from the content's dimensions: width is the
    /// content width, height is the title bar plus the content height (the
    /// title bar alone while minimized). Idempotent for unchanged content.
    pub(crate) fn resize_to_fit(&mut self) {
        if self.state.mode == Mode::Maximized {
            return;
        }
        let title_h = self.title_bar_height();
        let base = match self.size_override {
            Some(size) => size,
            None => {
                let natural = self.last_natural;
                Size::new(natural.width, title_h.saturating_add(natural.height))
            }
        };
        self.state.size = match self.state.mode {
            Mode::Minimized => Size::new(base.width, title_h),
            _ => base,
        };
    }

    /// The `ResizeObserver` stand-in: re-reads the content's natural size
    /// and re-fits when it changed. Called every frame by the workspace.
    pub(crate) fn sync_content(&mut self) {
        let natural = self.content.natural_size();
        if natural == self.last_natural {
            return;
        }
        self.last_natural = natural;
        self.size_override = None;
        self.resize_to_fit();
    }

    /// `Normal -> Minimized`. No-op in any other mode.
    pub(crate) fn minimize(&mut self) -> bool {
        if self.state.mode != Mode::Normal {
            return false;
        }
        self.prev_content_visible = self.content_visible;
        self.content_visible = false;
        self.state.mode = Mode::Minimized;
        self.resize_to_fit();
        tracing::debug!(title = %self.title, "minimized window");
        true
    }

    /// `Minimized -> Normal`, restoring the content's prior visibility.
    pub(crate) fn restore_minimized(&mut self) -> bool {
        if self.state.mode != Mode::Minimized {
            return false;
        }
        self.content_visible = self.prev_content_visible;
        self.state.mode = Mode::Normal;
        self.resize_to_fit();
        tracing::debug!(title = %self.title, "restored minimized window");
        true
    }

    /// `Normal | Minimized -> Maximized`: snapshots the current geometry and
    /// fills the viewport. Content fills the space below the title bar.
    pub(crate) fn maximize(&mut self, viewport: Rect) -> bool {
        if self.state.mode == Mode::Maximized {
            return false;
        }
        self.saved = Some(SavedGeometry {
            rect: self.rect(),
            mode: self.state.mode,
        });
        self.state.mode = Mode::Maximized;
        self.fill_viewport(viewport);
        tracing::debug!(title = %self.title, "maximized window");
        true
    }

    /// `Maximized -> Normal` (or back to `Minimized` when the window was
    /// maximized from its collapsed state): reapplies the snapshot verbatim,
    /// then re-fits so content sizing is natural again.
    pub(crate) fn restore_maximized(&mut self) -> bool {
        let Some(saved) = self.saved.take() else {
            return false;
        };
        self.state.x = saved.rect.x;
        self.state.y = saved.rect.y;
        self.state.size = saved.rect.size();
        self.state.mode = saved.mode;
        self.resize_to_fit();
        tracing::debug!(title = %self.title, "restored maximized window");
        true
    }

    pub(crate) fn toggle_maximize(&mut self, viewport: Rect) -> bool {
        if self.state.mode == Mode::Maximized {
            self.restore_maximized()
        } else {
            self.maximize(viewport)
        }
    }

    /// Tears the window down. Any live session dies with it, so no stray
    /// move/up event can act on the removed widget.
    pub(crate) fn close(&mut self) {
        self.drag = None;
        self.resize = None;
        self.closed = true;
        tracing::debug!(title = %self.title, "closed window");
    }

    /// Maximized windows track the viewport.
    pub(crate) fn viewport_resized(&mut self, viewport: Rect) {
        if self.state.mode == Mode::Maximized {
            self.fill_viewport(viewport);
        }
    }

    fn fill_viewport(&mut self, viewport: Rect) {
        self.state.x = viewport.x as i32;
        self.state.y = viewport.y as i32;
        self.state.size = Size::new(viewport.width, viewport.height);
    }

    pub(crate) fn handle_mouse(&mut self, mouse: &MouseEvent, viewport: Rect) -> WindowResponse {
        if self.closed {
            return WindowResponse::Ignored;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_press(mouse, viewport),
            MouseEventKind::Drag(MouseButton::Left) => self.handle_move(mouse),
            MouseEventKind::Up(MouseButton::Left) => self.handle_release(),
            _ => {
                // Scroll and friends go straight to content, unless a session
                // has the pointer grabbed.
                if self.has_session() {
                    return WindowResponse::Handled;
                }
                self.dispatch_to_content(mouse, viewport)
            }
        }
    }

    fn handle_press(&mut self, mouse: &MouseEvent, viewport: Rect) -> WindowResponse {
        let rect = self.rect();
        // Handles and the title bar are mutually exclusive hit areas, with
        // handles tested first.
        if let Some(side) = handle_at(rect, viewport, mouse.column, mouse.row) {
            self.resize = Some(ResizeSession {
                side,
                start_column: mouse.column,
                start_row: mouse.row,
                start_rect: rect,
            });
            tracing::debug!(title = %self.title, ?side, "resize session started");
            return WindowResponse::Handled;
        }
        match self.decorator.hit_test(rect, mouse.column, mouse.row) {
            HeaderAction::Minimize => {
                if self.minimize() {
                    WindowResponse::Mode(Mode::Minimized)
                } else {
                    WindowResponse::Handled
                }
            }
            HeaderAction::Maximize => {
                if self.toggle_maximize(viewport) {
                    WindowResponse::Mode(self.state.mode)
                } else {
                    WindowResponse::Handled
                }
            }
            HeaderAction::Close => {
                self.close();
                WindowResponse::Closed
            }
            HeaderAction::Drag => {
                self.drag = Some(DragSession {
                    start_column: mouse.column,
                    start_row: mouse.row,
                    origin_x: self.state.x,
                    origin_y: self.state.y,
                });
                tracing::debug!(title = %self.title, "drag session started");
                WindowResponse::Handled
            }
            HeaderAction::None => {
                if rect.contains(mouse.column, mouse.row) {
                    self.dispatch_to_content(mouse, viewport)
                } else {
                    WindowResponse::Ignored
                }
            }
        }
    }

    fn handle_move(&mut self, mouse: &MouseEvent) -> WindowResponse {
        if let Some(drag) = self.drag {
            // Dragging only ever updates the origin, whatever the mode; a
            // maximized window moves without losing its saved geometry.
            let (x, y) = drag.position_for(mouse.column, mouse.row);
            self.state.x = x;
            self.state.y = y;
            return WindowResponse::Handled;
        }
        if let Some(resize) = self.resize {
            let rect = resize.rect_for(mouse.column, mouse.row);
            self.state.x = rect.x;
            self.state.y = rect.y;
            self.state.size = rect.size();
            self.size_override = Some(rect.size());
            return WindowResponse::Handled;
        }
        WindowResponse::Ignored
    }

    fn handle_release(&mut self) -> WindowResponse {
        if self.drag.take().is_some() || self.resize.take().is_some() {
            return WindowResponse::Handled;
        }
        WindowResponse::Ignored
    }

    fn dispatch_to_content(&mut self, mouse: &MouseEvent, viewport: Rect) -> WindowResponse {
        if !self.content_visible || self.state.mode == Mode::Minimized {
            return WindowResponse::Handled;
        }
        if let Some(area) = self.content_area(viewport)
            && mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height
        {
            let _ = self.content.handle_event(&Event::Mouse(*mouse));
        }
        WindowResponse::Handled
    }

    fn content_area(&self, bounds: Rect) -> Option<Rect> {
        let title_h = self.title_bar_height();
        let fr = self.rect();
        if fr.height <= title_h {
            return None;
        }
        FloatRect::new(
            fr.x,
            fr.y + title_h as i32,
            fr.width,
            fr.height - title_h,
        )
        .to_screen(bounds)
    }

    pub(crate) fn render(&mut self, frame: &mut Frame<'_>, bounds: Rect, hover: Option<(u16, u16)>) {
        let fr = self.rect();
        let Some(area) = fr.to_screen(bounds) else {
            return;
        };
        frame.render_widget(Clear, area);
        self.decorator.render_frame(frame, fr, bounds, &self.title);
        if self.content_visible && self.state.mode != Mode::Minimized {
            if let Some(content_area) = self.content_area(bounds) {
                self.content.render(frame, content_area);
            }
        }
        if self.resize.is_some() {
            self.decorator.render_resize_outline(frame, fr, bounds);
        } else if let Some((column, row)) = hover
            && self.drag.is_none()
            && let Some(side) = handle_at(fr, bounds, column, row)
            && let Some(cell) = frame.buffer_mut().cell_mut((column, row))
        {
            cell.set_symbol(side.spec().hover_glyph);
        }
    }
}
