use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use term_float::constants::TITLE_BAR_HEIGHT;
use term_float::{FloatingWindow, Mode, TextContent, WindowId, Workspace};

fn workspace() -> Workspace {
    let mut ws = Workspace::new();
    ws.set_viewport(Rect::new(0, 0, 500, 400));
    ws
}

fn add_window(ws: &mut Workspace, width: u16, content_rows: u16, x: i32, y: i32) -> WindowId {
    let text = vec!["x".repeat(width as usize); content_rows as usize].join("\n");
    let id = ws.add_window(FloatingWindow::new("demo", TextContent::new(&text)));
    ws.window_mut(id).expect("window").set_position(x, y);
    id
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn pointer_gesture(ws: &mut Workspace, from: (u16, u16), to: (u16, u16)) {
    ws.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1));
    ws.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), to.0, to.1));
    ws.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1));
}

#[test]
fn drag_is_an_offset_preserving_translation() {
    let mut ws = workspace();
    let id = add_window(&mut ws, 20, 5, 100, 100);
    // Press in the header drag region, move the pointer by (40, -15).
    pointer_gesture(&mut ws, (105, 101), (145, 86));
    let rect = ws.window(id).expect("window").rect();
    assert_eq!((rect.x, rect.y), (140, 85));
    assert_eq!((rect.width, rect.height), (20, TITLE_BAR_HEIGHT + 5));
}

#[test]
fn drag_applies_moves_in_delivery_order() {
    let mut ws = workspace();
    let id = add_window(&mut ws, 20, 5, 100, 100);
    ws.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 105, 101));
    for (col, row) in [(110u16, 101u16), (90, 120), (145, 86)] {
        ws.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), col, row));
    }
    ws.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 145, 86));
    // Only the final move before pointer-up matters.
    let rect = ws.window(id).expect("window").rect();
    assert_eq!((rect.x, rect.y), (140, 85));
}

#[test]
fn bottom_right_resize_extends_size_only() {
    let mut ws = workspace();
    // 300x198 content gives a 300x200 container.
    let id = add_window(&mut ws, 300, 200 - TITLE_BAR_HEIGHT, 100, 100);
    let rect = ws.window(id).expect("window").rect();
    assert_eq!((rect.width, rect.height), (300, 200));

    let corner = (
        (rect.x + rect.width as i32 - 1) as u16,
        (rect.y + rect.height as i32 - 1) as u16,
    );
    pointer_gesture(&mut ws, corner, (corner.0 + 20, corner.1 - 10));
    let rect = ws.window(id).expect("window").rect();
    assert_eq!((rect.x, rect.y), (100, 100));
    assert_eq!((rect.width, rect.height), (320, 190));
}

#[test]
fn top_left_resize_shifts_position_by_the_delta() {
    let mut ws = workspace();
    let id = add_window(&mut ws, 300, 200 - TITLE_BAR_HEIGHT, 100, 100);
    pointer_gesture(&mut ws, (100, 100), (120, 90));
    let rect = ws.window(id).expect("window").rect();
    assert_eq!((rect.x, rect.y), (120, 90));
    assert_eq!((rect.width, rect.height), (280, 210));
}

#[test]
fn single_edge_resize_leaves_the_other_axis_alone() {
    let mut ws = workspace();
    let id = add_window(&mut ws, 40, 10, 100, 100);
    let rect = ws.window(id).expect("window").rect();
    let bottom = (rect.y + rect.height as i32 - 1) as u16;
    // Bottom strip, away from the corners.
    pointer_gesture(&mut ws, (120, bottom), (130, bottom + 5));
    let rect = ws.window(id).expect("window").rect();
    assert_eq!((rect.x, rect.y), (100, 100));
    assert_eq!(rect.width, 40);
    assert_eq!(rect.height, TITLE_BAR_HEIGHT + 10 + 5);
}

#[test]
fn title_bar_and_handles_are_mutually_exclusive() {
    let mut ws = workspace();
    let id = add_window(&mut ws, 20, 5, 100, 100);
    let rect = ws.window(id).expect("window").rect();
    // The top-left corner cell is a handle, not a drag region: moving the
    // pointer resizes instead of translating.
    pointer_gesture(&mut ws, (100, 100), (95, 100));
    let resized = ws.window(id).expect("window").rect();
    assert_eq!(resized.x, 95);
    assert_eq!(resized.width, rect.width + 5);
    assert_eq!(resized.height, rect.height);
}

#[test]
fn dragging_a_maximized_window_moves_origin_without_crashing() {
    let mut ws = workspace();
    let id = add_window(&mut ws, 20, 5, 100, 100);
    ws.toggle_maximize(id);
    let size = ws.window(id).expect("window").rect().size();
    // Header drag region of the maximized window.
    pointer_gesture(&mut ws, (40, 1), (55, 9));
    let window = ws.window(id).expect("window");
    assert_eq!(window.mode(), Mode::Maximized);
    assert_eq!((window.rect().x, window.rect().y), (15, 8));
    assert_eq!(window.rect().size(), size);
}

#[test]
fn resize_override_persists_until_content_changes() {
    let mut ws = workspace();
    let id = add_window(&mut ws, 20, 5, 100, 100);
    let rect = ws.window(id).expect("window").rect();
    let corner = (
        (rect.x + rect.width as i32 - 1) as u16,
        (rect.y + rect.height as i32 - 1) as u16,
    );
    pointer_gesture(&mut ws, corner, (corner.0 + 10, corner.1 + 3));
    let resized = ws.window(id).expect("window").rect();
    assert_eq!(resized.width, rect.width + 10);

    // Unchanged content: the override sticks across updates.
    ws.update();
    assert_eq!(ws.window(id).expect("window").rect(), resized);

    // A content change hands sizing back to resize-to-fit.
    ws.window_mut(id)
        .expect("window")
        .content_mut::<TextContent>()
        .expect("text content")
        .set_text("ab\ncd");
    ws.update();
    let refit = ws.window(id).expect("window").rect();
    assert_eq!((refit.width, refit.height), (2, TITLE_BAR_HEIGHT + 2));
}
