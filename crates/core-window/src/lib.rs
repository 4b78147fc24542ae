//! A minimal terminal windowing hierarchy.
//!
//! The tree is built from two element kinds: [`Text`] labels and nested
//! [`Window`]s, owned by name inside their parent. The [`Screen`] is the
//! root, bound to the whole terminal. Adding an element validates its fit
//! against the parent's interior and paints it immediately; removing one
//! blanks its footprint and repairs the parent's border when the footprint
//! touched an interior edge.
//!
//! Refresh model: writes land in per-window cell buffers; [`Window::update`]
//! flushes one window's buffer to the terminal. Updates do not cascade, and
//! a window's buffer holds none of its descendants' content, so refresh
//! ancestors first and descendants after: a parent flushed after a child
//! overwrites the child's on-screen cells with its own buffer.
//!
//! ```no_run
//! use core_window::{Element, Screen};
//!
//! fn main() -> Result<(), core_window::Error> {
//!     let mut screen = Screen::new()?;
//!     let child = screen.add_window("child", 3, 3, 20, 20, true)?;
//!     child.add_text("field", 0, 0, "window")?;
//!     screen.update()?;
//!     if let Some(Element::Window(child)) = screen.root_mut().get_mut("child") {
//!         child.update()?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod element;
pub mod error;
pub mod screen;
pub mod text;
pub mod window;

pub use element::Element;
pub use error::Error;
pub use screen::Screen;
pub use text::Text;
pub use window::Window;
