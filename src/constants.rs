//! Shared crate-wide constants.

/// Height of the window chrome above the content, in rows: the top border
/// row followed by the header row. A window in `Normal` mode is always
/// exactly this tall plus its content height; a minimized window collapses
/// to this height alone.
pub const TITLE_BAR_HEIGHT: u16 = 2;

/// Fixed column/row at which newly created windows are placed.
pub const DEFAULT_POSITION: (i32, i32) = (10, 5);

/// Smallest width a resize session may shrink a window to. Leaves room for
/// the control cluster plus at least a sliver of title.
pub const MIN_WINDOW_WIDTH: u16 = 8;

/// Smallest height a resize session may shrink a window to: chrome plus one
/// content row.
pub const MIN_WINDOW_HEIGHT: u16 = 3;

/// Global key that restores the most recently minimized window.
pub const RESTORE_KEY: char = '\\';
