//! The element capability set shared by labels and windows.

use core_surface::Surface;

use crate::error::Error;
use crate::text::Text;
use crate::window::Window;

/// Anything placeable inside a window: a static label or a nested window.
///
/// Position is relative to the owning window's interior origin; footprint is
/// fixed at construction. Drawing takes an explicit surface position because
/// only the owner knows its interior offset (bordered windows shift children
/// by one row and one column).
#[derive(Debug)]
pub enum Element {
    Text(Text),
    Window(Window),
}

impl Element {
    #[inline]
    pub fn x(&self) -> u16 {
        match self {
            Element::Text(t) => t.x(),
            Element::Window(w) => w.x(),
        }
    }

    #[inline]
    pub fn y(&self) -> u16 {
        match self {
            Element::Text(t) => t.y(),
            Element::Window(w) => w.y(),
        }
    }

    #[inline]
    pub fn rows(&self) -> u16 {
        match self {
            Element::Text(t) => t.rows(),
            Element::Window(w) => w.rows(),
        }
    }

    #[inline]
    pub fn cols(&self) -> u16 {
        match self {
            Element::Text(t) => t.cols(),
            Element::Window(w) => w.cols(),
        }
    }

    /// Paint the element at `(row, col)` on the given surface. Re-drawing a
    /// label re-issues the same writes; re-drawing a window never creates a
    /// second underlying surface.
    pub fn draw(&mut self, onto: &mut Surface, row: u16, col: u16) -> Result<(), Error> {
        match self {
            Element::Text(t) => {
                t.draw(onto, row, col);
                Ok(())
            }
            Element::Window(w) => w.draw(onto, row, col),
        }
    }
}

impl From<Text> for Element {
    fn from(t: Text) -> Self {
        Element::Text(t)
    }
}

impl From<Window> for Element {
    fn from(w: Window) -> Self {
        Element::Window(w)
    }
}
