//! Hosts all floating windows and routes events to them.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::prelude::Rect;

use crate::constants::RESTORE_KEY;
use crate::window::{FloatingWindow, Mode, WindowResponse};

/// Stable handle to a window within its workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(usize);

struct WorkspaceEntry {
    id: WindowId,
    window: FloatingWindow,
}

/// Owns the floating windows drawn above the host UI.
///
/// Windows stack in creation order and stay there; events are hit-tested
/// topmost-first, and only the topmost window under the pointer sees a
/// press. While a drag or resize session holds the pointer, every move/up
/// event goes to the session's window and nothing else, so window content
/// never reacts to a pointer that is busy moving chrome.
pub struct Workspace {
    entries: Vec<WorkspaceEntry>,
    next_id: usize,
    viewport: Rect,
    // Minimize order, most recent last. The restore key pops from the back,
    // making "most recently minimized wins" an explicit policy instead of
    // an accident of listener registration order.
    minimized_order: Vec<WindowId>,
    hover: Option<(u16, u16)>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            viewport: Rect::default(),
            minimized_order: Vec::new(),
            hover: None,
        }
    }

    pub fn add_window(&mut self, window: FloatingWindow) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.entries.push(WorkspaceEntry { id, window });
        id
    }

    pub fn window(&self, id: WindowId) -> Option<&FloatingWindow> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.window)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut FloatingWindow> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.window)
    }

    pub fn window_ids(&self) -> Vec<WindowId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        for entry in &mut self.entries {
            entry.window.viewport_resized(viewport);
        }
    }

    /// Programmatic counterparts of the title-bar buttons.
    pub fn minimize(&mut self, id: WindowId) {
        let changed = self
            .window_mut(id)
            .map(|window| window.minimize())
            .unwrap_or(false);
        if changed {
            self.note_mode_change(id, Mode::Minimized);
        }
    }

    pub fn toggle_maximize(&mut self, id: WindowId) {
        let viewport = self.viewport;
        let changed = self
            .window_mut(id)
            .map(|window| window.toggle_maximize(viewport))
            .unwrap_or(false);
        if changed
            && let Some(mode) = self.window(id).map(|window| window.mode())
        {
            self.note_mode_change(id, mode);
        }
    }

    pub fn restore_minimized(&mut self, id: WindowId) {
        let changed = self
            .window_mut(id)
            .map(|window| window.restore_minimized())
            .unwrap_or(false);
        if changed {
            self.note_mode_change(id, Mode::Normal);
        }
    }

    /// Removes the window permanently. Irreversible; any active session on
    /// it dies here, so later move/up events cannot act on the removed
    /// widget.
    pub fn close_window(&mut self, id: WindowId) {
        if let Some(window) = self.window_mut(id) {
            window.close();
        }
        self.prune_closed();
    }

    /// Restores the most recently minimized window, if any. Bound to the
    /// global restore key.
    pub fn restore_last_minimized(&mut self) -> bool {
        while let Some(id) = self.minimized_order.pop() {
            // Entries can go stale when the window was closed or maximized
            // away in the meantime.
            if let Some(window) = self.window_mut(id)
                && window.mode() == Mode::Minimized
            {
                window.restore_minimized();
                return true;
            }
        }
        false
    }

    /// Routes one input event. Returns whether a window consumed it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Resize(width, height) => {
                self.set_viewport(Rect::new(0, 0, *width, *height));
                false
            }
            Event::Key(key)
                if key.kind == KeyEventKind::Press && key.code == KeyCode::Char(RESTORE_KEY) =>
            {
                self.restore_last_minimized()
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        self.hover = Some((mouse.column, mouse.row));
        let viewport = self.viewport;

        // Active sessions have the pointer grabbed: move/up go straight to
        // the owning window, every other mouse event is swallowed so no
        // content reacts to a pointer that is busy moving chrome.
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.window.has_session())
        {
            if matches!(
                mouse.kind,
                MouseEventKind::Drag(_) | MouseEventKind::Up(_)
            ) {
                entry.window.handle_mouse(mouse, viewport);
            }
            return true;
        }

        // Topmost-first: later windows stack above earlier ones, and an
        // obscured window never sees the press.
        let target = self
            .entries
            .iter_mut()
            .rev()
            .find(|entry| entry.window.rect().contains(mouse.column, mouse.row))
            .map(|entry| entry.id);
        let Some(id) = target else {
            return false;
        };
        let response = self
            .window_mut(id)
            .map(|window| window.handle_mouse(mouse, viewport))
            .unwrap_or(WindowResponse::Ignored);
        match response {
            WindowResponse::Ignored => false,
            WindowResponse::Handled => true,
            WindowResponse::Mode(mode) => {
                self.note_mode_change(id, mode);
                true
            }
            WindowResponse::Closed => {
                self.prune_closed();
                true
            }
        }
    }

    fn note_mode_change(&mut self, id: WindowId, mode: Mode) {
        match mode {
            Mode::Minimized => {
                if !self.minimized_order.contains(&id) {
                    self.minimized_order.push(id);
                }
            }
            _ => self.minimized_order.retain(|m| *m != id),
        }
    }

    fn prune_closed(&mut self) {
        self.entries.retain(|entry| !entry.window.closed());
        let live: Vec<WindowId> = self.entries.iter().map(|entry| entry.id).collect();
        self.minimized_order.retain(|id| live.contains(id));
    }

    /// Re-reads every window's content size, the stand-in for continuous
    /// size observation. Called by [`Workspace::render`], and directly by
    /// hosts that mutate content between frames.
    pub fn update(&mut self) {
        for entry in &mut self.entries {
            entry.window.sync_content();
        }
    }

    /// Draws all windows above whatever the host already rendered, bottom
    /// of the stack first.
    pub fn render(&mut self, frame: &mut Frame<'_>) {
        self.set_viewport(frame.area());
        self.update();
        let bounds = self.viewport;
        let hover = self.hover;
        let hover_target = hover.and_then(|(column, row)| {
            self.entries
                .iter()
                .rev()
                .find(|entry| entry.window.rect().contains(column, row))
                .map(|entry| entry.id)
        });
        for entry in &mut self.entries {
            let window_hover = (hover_target == Some(entry.id))
                .then_some(hover)
                .flatten();
            entry.window.render(frame, bounds, window_hover);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Content, TextContent};
    use crate::geometry::Size;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseButton};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Content that counts the events it receives.
    struct SpyContent {
        hits: Rc<Cell<usize>>,
    }

    impl Content for SpyContent {
        fn natural_size(&self) -> Size {
            Size::new(20, 5)
        }

        fn render(&mut self, _frame: &mut Frame<'_>, _area: Rect) {}

        fn handle_event(&mut self, _event: &Event) -> bool {
            self.hits.set(self.hits.get() + 1);
            true
        }
    }

    fn workspace() -> Workspace {
        let mut ws = Workspace::new();
        ws.set_viewport(Rect::new(0, 0, 400, 300));
        ws
    }

    fn add(ws: &mut Workspace, x: i32, y: i32) -> WindowId {
        let id = ws.add_window(FloatingWindow::new(
            "w",
            TextContent::new(&vec!["x".repeat(20); 5].join("\n")),
        ));
        ws.window_mut(id).expect("window").set_position(x, y);
        id
    }

    fn press(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn restore_key() -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(RESTORE_KEY), KeyModifiers::NONE))
    }

    #[test]
    fn press_routes_to_topmost_window_only() {
        let mut ws = workspace();
        let below = add(&mut ws, 10, 10);
        let above = add(&mut ws, 15, 12);
        // Cell inside both windows; the later-created one is on top. Pressing
        // its header drag region must not open a session on the lower window.
        assert!(ws.handle_event(&press(20, 13)));
        let upper_moved = {
            let drag = Event::Mouse(MouseEvent {
                kind: MouseEventKind::Drag(MouseButton::Left),
                column: 25,
                row: 16,
                modifiers: KeyModifiers::NONE,
            });
            ws.handle_event(&drag);
            ws.window(above).expect("above").rect()
        };
        assert_eq!((upper_moved.x, upper_moved.y), (20, 15));
        assert_eq!(
            (
                ws.window(below).expect("below").rect().x,
                ws.window(below).expect("below").rect().y
            ),
            (10, 10)
        );
    }

    #[test]
    fn session_grab_swallows_stray_mouse_events() {
        let mut ws = workspace();
        let dragged = add(&mut ws, 10, 10);
        let hits = Rc::new(Cell::new(0));
        let other = ws.add_window(FloatingWindow::new(
            "spy",
            SpyContent {
                hits: Rc::clone(&hits),
            },
        ));
        ws.window_mut(other).expect("window").set_position(100, 10);

        // Open a drag session on the first window's header.
        assert!(ws.handle_event(&press(12, 11)));
        assert!(ws.window(dragged).expect("dragged").has_session());

        // A scroll over the other window's content mid-session is consumed
        // by the grab and never reaches that content.
        let scroll = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 105,
            row: 13,
            modifiers: KeyModifiers::NONE,
        });
        assert!(ws.handle_event(&scroll));
        assert_eq!(hits.get(), 0);

        // Once the pointer is released the same scroll reaches the content.
        let up = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 12,
            row: 11,
            modifiers: KeyModifiers::NONE,
        });
        ws.handle_event(&up);
        assert!(ws.handle_event(&scroll));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn restore_key_pops_most_recently_minimized() {
        let mut ws = workspace();
        let first = add(&mut ws, 10, 10);
        let second = add(&mut ws, 100, 10);
        ws.minimize(first);
        ws.minimize(second);
        assert!(ws.handle_event(&restore_key()));
        assert_eq!(ws.window(second).expect("second").mode(), Mode::Normal);
        assert_eq!(ws.window(first).expect("first").mode(), Mode::Minimized);
        assert!(ws.handle_event(&restore_key()));
        assert_eq!(ws.window(first).expect("first").mode(), Mode::Normal);
        // Nothing left to restore.
        assert!(!ws.handle_event(&restore_key()));
    }

    #[test]
    fn restore_key_skips_stale_entries() {
        let mut ws = workspace();
        let first = add(&mut ws, 10, 10);
        let second = add(&mut ws, 100, 10);
        ws.minimize(first);
        ws.minimize(second);
        ws.close_window(second);
        assert!(ws.handle_event(&restore_key()));
        assert_eq!(ws.window(first).expect("first").mode(), Mode::Normal);
    }

    #[test]
    fn closed_window_is_gone_and_inert() {
        let mut ws = workspace();
        let id = add(&mut ws, 10, 10);
        // close button: right edge is col 29, close at col 28, header row 11
        assert!(ws.handle_event(&press(28, 11)));
        assert!(ws.window(id).is_none());
        assert!(ws.is_empty());
        // Same cells again: nothing to hit, nothing mutates.
        assert!(!ws.handle_event(&press(28, 11)));
        assert!(!ws.handle_event(&restore_key()));
    }

    #[test]
    fn close_during_active_session_deafens_it() {
        let mut ws = workspace();
        let id = add(&mut ws, 10, 10);
        // start a drag on the header
        assert!(ws.handle_event(&press(12, 11)));
        ws.close_window(id);
        assert!(ws.is_empty());
        let drag = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 50,
            row: 50,
            modifiers: KeyModifiers::NONE,
        });
        assert!(!ws.handle_event(&drag));
    }

    #[test]
    fn viewport_resize_refills_maximized_windows() {
        let mut ws = workspace();
        let id = add(&mut ws, 10, 10);
        ws.toggle_maximize(id);
        ws.handle_event(&Event::Resize(120, 40));
        let rect = ws.window(id).expect("window").rect();
        assert_eq!(rect, crate::geometry::FloatRect::new(0, 0, 120, 40));
    }

    #[test]
    fn update_refits_after_content_change() {
        let mut ws = workspace();
        let id = add(&mut ws, 10, 10);
        ws.window_mut(id)
            .expect("window")
            .content_mut::<TextContent>()
            .expect("text")
            .set_text("tiny");
        ws.update();
        let rect = ws.window(id).expect("window").rect();
        assert_eq!(rect.width, 4);
    }
}
