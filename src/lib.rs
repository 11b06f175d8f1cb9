//! Floating window widgets for terminal UIs.
//!
//! A [`Workspace`] hosts any number of [`FloatingWindow`]s above the caller's
//! own UI. Each window wraps a piece of caller-supplied [`Content`], carries a
//! title bar with minimize/maximize/close affordances, and can be dragged by
//! its title bar or resized from eight edge and corner handles. Windows size
//! themselves to their content and re-fit whenever the content's natural size
//! changes.

pub mod constants;
pub mod content;
pub mod decorator;
pub mod error;
pub mod event_loop;
pub mod geometry;
pub mod handles;
pub mod input;
pub mod session;
pub mod tracing_sub;
pub mod window;
pub mod workspace;

pub use content::{Content, TextContent};
pub use error::TermFloatError;
pub use geometry::{FloatRect, Size};
pub use window::{FloatingWindow, Mode};
pub use workspace::{WindowId, Workspace};
