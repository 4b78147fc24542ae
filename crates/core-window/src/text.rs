//! Static text labels.

use core_surface::Surface;
use unicode_width::UnicodeWidthStr;

/// A leaf element holding an immutable string. Occupies one row and as many
/// columns as the string's visual width (wide clusters count double), so the
/// footprint matches the cells the label fills on a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    x: u16,
    y: u16,
    content: String,
    width: u16,
}

impl Text {
    pub fn new(x: u16, y: u16, content: impl Into<String>) -> Self {
        let content = content.into();
        let width = UnicodeWidthStr::width(content.as_str()) as u16;
        Self {
            x,
            y,
            content,
            width,
        }
    }

    #[inline]
    pub fn x(&self) -> u16 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> u16 {
        self.y
    }

    #[inline]
    pub fn rows(&self) -> u16 {
        1
    }

    #[inline]
    pub fn cols(&self) -> u16 {
        self.width
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the label at the given surface position. Owners have already
    /// validated fit and resolved any interior offset; no wrapping or
    /// truncation happens here.
    pub fn draw(&self, onto: &mut Surface, row: u16, col: u16) {
        onto.write_str(row, col, &self.content);
    }
}
