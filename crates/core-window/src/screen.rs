//! The root of the tree: a window bound to the whole physical display.

use core_surface::{Display, DisplayActive, Surface};
use tracing::info;

use crate::element::Element;
use crate::error::Error;
use crate::text::Text;
use crate::window::Window;

/// Root window spanning the entire terminal.
///
/// Construction claims the process-wide display (raw mode, alternate
/// screen); at most one screen is live per process. Dropping the screen
/// tears the tree down child-before-parent and then restores the terminal,
/// on every exit path.
///
/// A screen has no parent by construction: it is not an [`Element`] and
/// cannot be stored in another window.
pub struct Screen {
    // Field order is teardown order: the window tree (and every nested
    // surface) drops before the display restores the terminal.
    root: Window,
    display: Display,
}

impl Screen {
    /// Open the terminal and bind a borderless root window to its full
    /// size. Fails with [`Error::DisplayActive`] if another screen is live.
    pub fn new() -> Result<Self, Error> {
        let display = Display::new().map_err(|e| match e.downcast::<DisplayActive>() {
            Ok(_) => Error::DisplayActive,
            Err(other) => Error::Surface(other),
        })?;
        Self::with_display(display)
    }

    /// Bind to an already-opened display (tests, custom backends).
    pub fn with_display(display: Display) -> Result<Self, Error> {
        let rows = display.rows();
        let cols = display.cols();
        let mut root = Window::new(0, 0, rows, cols, false);
        root.attach_surface(display.whole_screen_surface())?;
        info!(target: "screen", rows = rows, cols = cols, "screen opened");
        Ok(Self { root, display })
    }

    #[inline]
    pub fn rows(&self) -> u16 {
        self.display.rows()
    }

    #[inline]
    pub fn cols(&self) -> u16 {
        self.display.cols()
    }

    /// The root window; use it for direct child inspection.
    pub fn root(&self) -> &Window {
        &self.root
    }

    /// Mutable access to the root window, e.g. to reach nested windows for
    /// their own updates.
    pub fn root_mut(&mut self) -> &mut Window {
        &mut self.root
    }

    pub fn add(&mut self, name: &str, element: impl Into<Element>) -> Result<&mut Element, Error> {
        self.root.add(name, element)
    }

    pub fn add_text(
        &mut self,
        name: &str,
        x: u16,
        y: u16,
        content: impl Into<String>,
    ) -> Result<&mut Text, Error> {
        self.root.add_text(name, x, y, content)
    }

    pub fn add_window(
        &mut self,
        name: &str,
        x: u16,
        y: u16,
        rows: u16,
        cols: u16,
        border: bool,
    ) -> Result<&mut Window, Error> {
        self.root.add_window(name, x, y, rows, cols, border)
    }

    pub fn remove(&mut self, name: &str) -> Result<(), Error> {
        self.root.remove(name)
    }

    /// Flush the root surface to the terminal. As with any window, nested
    /// windows are not cascaded into: update the screen first, then each
    /// descendant window, outermost to innermost.
    pub fn update(&mut self) -> Result<(), Error> {
        self.root.update()
    }

    /// A screen cannot be drawn into a parent; this always fails with
    /// [`Error::InvalidOperation`].
    pub fn draw(&mut self, _onto: &mut Surface) -> Result<(), Error> {
        Err(Error::InvalidOperation(
            "the screen has no parent to be drawn into",
        ))
    }
}
