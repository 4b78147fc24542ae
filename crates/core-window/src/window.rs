//! Windows: rectangular containers of named child elements.
//!
//! A window owns its drawing surface and its children exclusively. Placement
//! is validated once, at addition; elements never move or resize afterwards.
//! Child coordinates are interior-relative: a bordered window reserves one
//! row and one column and shifts children by (1,1) on its surface.
//!
//! Invariants:
//! * Child names are unique among direct children; duplicates are rejected
//!   before any state changes.
//! * A failed `add` never mutates the children map and never writes a cell.
//! * The underlying surface is created at most once, on first attachment to
//!   a parent surface; a window constructed standalone stores validated
//!   children and paints them when first drawn.

use std::collections::BTreeMap;

use core_surface::{BorderGlyphs, Surface};
use tracing::debug;

use crate::element::Element;
use crate::error::Error;
use crate::text::Text;

#[derive(Debug)]
pub struct Window {
    x: u16,
    y: u16,
    rows: u16,
    cols: u16,
    border: bool,
    glyphs: BorderGlyphs,
    surface: Option<Surface>,
    children: BTreeMap<String, Element>,
}

impl Window {
    /// Window at `(x, y)` in its future parent's interior, with a footprint
    /// of `rows` x `cols`. A bordered window keeps the same footprint but
    /// exposes an interior one row and one column smaller.
    pub fn new(x: u16, y: u16, rows: u16, cols: u16, border: bool) -> Self {
        Self {
            x,
            y,
            rows,
            cols,
            border,
            glyphs: BorderGlyphs::default(),
            surface: None,
            children: BTreeMap::new(),
        }
    }

    /// Replace the border glyph set used when this window paints its border.
    pub fn with_border_glyphs(mut self, glyphs: BorderGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// In-place variant of [`Window::with_border_glyphs`]. Windows added
    /// afterwards inherit the new set; an already painted border keeps its
    /// old glyphs until the next draw.
    pub fn set_border_glyphs(&mut self, glyphs: BorderGlyphs) {
        self.glyphs = glyphs;
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
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    #[inline]
    pub fn border(&self) -> bool {
        self.border
    }

    /// Rows available for child placement.
    #[inline]
    pub fn interior_rows(&self) -> u16 {
        self.rows.saturating_sub(self.border as u16)
    }

    /// Columns available for child placement.
    #[inline]
    pub fn interior_cols(&self) -> u16 {
        self.cols.saturating_sub(self.border as u16)
    }

    #[inline]
    fn border_offset(&self) -> u16 {
        self.border as u16
    }

    /// The owned drawing surface, present once the window has been drawn
    /// into a parent (or bound to a display for the root).
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Element> {
        self.children.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.get_mut(name)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Add a named element. Validation order: footprint, name uniqueness,
    /// interior fit; the first violation returns the matching error and the
    /// window is left exactly as it was. On success the element is painted
    /// (if this window is attached), stored, and returned by reference;
    /// ownership stays with the window.
    pub fn add(&mut self, name: &str, element: impl Into<Element>) -> Result<&mut Element, Error> {
        let mut element = element.into();
        if element.rows() == 0 || element.cols() == 0 {
            return Err(Error::InvalidElement("element footprint is zero-sized"));
        }
        if self.children.contains_key(name) {
            return Err(Error::DuplicateName(name.to_string()));
        }
        let (interior_rows, interior_cols) = (self.interior_rows(), self.interior_cols());
        if element.x() as u32 + element.cols() as u32 > interior_cols as u32
            || element.y() as u32 + element.rows() as u32 > interior_rows as u32
        {
            return Err(Error::DoesNotFit {
                name: name.to_string(),
                x: element.x(),
                y: element.y(),
                rows: element.rows(),
                cols: element.cols(),
                interior_rows,
                interior_cols,
            });
        }
        if let Some(surface) = self.surface.as_mut() {
            let offset = self.border as u16;
            let (row, col) = (element.y() + offset, element.x() + offset);
            element.draw(surface, row, col)?;
        }
        debug!(
            target: "window",
            name,
            x = element.x(),
            y = element.y(),
            rows = element.rows(),
            cols = element.cols(),
            attached = self.surface.is_some(),
            "add"
        );
        Ok(self.children.entry(name.to_string()).or_insert(element))
    }

    /// Add a text label, returning a typed reference to the stored label.
    pub fn add_text(
        &mut self,
        name: &str,
        x: u16,
        y: u16,
        content: impl Into<String>,
    ) -> Result<&mut Text, Error> {
        match self.add(name, Text::new(x, y, content))? {
            Element::Text(t) => Ok(t),
            Element::Window(_) => unreachable!("inserted element is a text label"),
        }
    }

    /// Add a nested window, returning a typed reference to the stored child.
    pub fn add_window(
        &mut self,
        name: &str,
        x: u16,
        y: u16,
        rows: u16,
        cols: u16,
        border: bool,
    ) -> Result<&mut Window, Error> {
        let child = Window::new(x, y, rows, cols, border).with_border_glyphs(self.glyphs);
        match self.add(name, child)? {
            Element::Window(w) => Ok(w),
            Element::Text(_) => unreachable!("inserted element is a window"),
        }
    }

    /// Remove a child by name: blank every cell of its footprint on this
    /// window's surface, repair the border if the footprint touched an
    /// interior edge, then drop the element (recursively releasing any
    /// nested surfaces). An unknown name fails with [`Error::NotFound`] and
    /// performs no surface writes.
    pub fn remove(&mut self, name: &str) -> Result<(), Error> {
        let (interior_rows, interior_cols) = (self.interior_rows(), self.interior_cols());
        let offset = self.border_offset();
        let border = self.border;
        let glyphs = self.glyphs;

        let Some(element) = self.children.get(name) else {
            return Err(Error::NotFound(name.to_string()));
        };
        let (ex, ey, erows, ecols) = (element.x(), element.y(), element.rows(), element.cols());

        if let Some(surface) = self.surface.as_mut() {
            surface.blank_rect(ey + offset, ex + offset, erows, ecols);
            // An erased footprint can only have clobbered border cells if it
            // reached an interior edge; fully interior footprints never do.
            let touches_edge = ex == 0
                || ey == 0
                || ex + ecols == interior_cols
                || ey + erows == interior_rows;
            if border && touches_edge {
                surface.draw_border(&glyphs);
            }
        }
        debug!(target: "window", name, x = ex, y = ey, rows = erows, cols = ecols, "remove");
        self.children.remove(name);
        Ok(())
    }

    /// Paint this window at `(row, col)` on a parent surface. The first call
    /// creates the owned sub-surface and paints the border plus any children
    /// added while detached; later calls repaint the border only, and the
    /// surface is never created twice.
    pub fn draw(&mut self, onto: &mut Surface, row: u16, col: u16) -> Result<(), Error> {
        if self.surface.is_none() {
            let surface = onto.sub_surface(row, col, self.rows, self.cols)?;
            return self.attach_surface(surface);
        }
        if self.border {
            if let Some(surface) = self.surface.as_mut() {
                surface.draw_border(&self.glyphs);
            }
        }
        Ok(())
    }

    /// Bind an already-created surface (sub-surface for nested windows, the
    /// whole-screen surface for the root) and paint border and children in
    /// name order.
    pub(crate) fn attach_surface(&mut self, mut surface: Surface) -> Result<(), Error> {
        if self.border {
            surface.draw_border(&self.glyphs);
        }
        let offset = self.border_offset();
        for child in self.children.values_mut() {
            let (row, col) = (child.y() + offset, child.x() + offset);
            child.draw(&mut surface, row, col)?;
        }
        self.surface = Some(surface);
        Ok(())
    }

    /// Flush this window's surface to the physical display, repainting every
    /// row.
    ///
    /// Refreshing does not cascade into child windows: each child owns an
    /// independent surface that overlaps this one on screen, and this
    /// window's buffer holds none of its children's content. Callers update
    /// ancestors first and descendants after; a parent flushed after a child
    /// overwrites the child's on-screen cells with its own buffer.
    pub fn update(&mut self) -> Result<(), Error> {
        let surface = self.surface.as_mut().ok_or(Error::InvalidOperation(
            "window is not attached to a display",
        ))?;
        surface.touch();
        surface.refresh()?;
        Ok(())
    }

    /// As [`Window::update`], but emitting into an arbitrary sink (tests).
    pub fn update_into<W: std::io::Write>(&mut self, out: &mut W) -> Result<(), Error> {
        let surface = self.surface.as_mut().ok_or(Error::InvalidOperation(
            "window is not attached to a display",
        ))?;
        surface.touch();
        surface.refresh_into(out)?;
        Ok(())
    }

    /// Flush only the rows touched since the last flush, without forcing a
    /// full repaint. Cheaper than [`Window::update`] after a small add or
    /// remove; same non-cascading contract.
    pub fn flush(&mut self) -> Result<(), Error> {
        let surface = self.surface.as_mut().ok_or(Error::InvalidOperation(
            "window is not attached to a display",
        ))?;
        surface.refresh()?;
        Ok(())
    }

    /// As [`Window::flush`], but emitting into an arbitrary sink (tests).
    pub fn flush_into<W: std::io::Write>(&mut self, out: &mut W) -> Result<(), Error> {
        let surface = self.surface.as_mut().ok_or(Error::InvalidOperation(
            "window is not attached to a display",
        ))?;
        surface.refresh_into(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> Surface {
        Surface::new(0, 0, 24, 80)
    }

    #[test]
    fn interior_shrinks_by_one_with_border() {
        let plain = Window::new(0, 0, 20, 30, false);
        assert_eq!((plain.interior_rows(), plain.interior_cols()), (20, 30));
        let bordered = Window::new(0, 0, 20, 30, true);
        assert_eq!((bordered.interior_rows(), bordered.interior_cols()), (19, 29));
    }

    #[test]
    fn add_rejects_empty_text() {
        let mut w = Window::new(0, 0, 10, 10, false);
        let err = w.add_text("empty", 0, 0, "").unwrap_err();
        assert!(matches!(err, Error::InvalidElement(_)));
        assert_eq!(w.child_count(), 0);
    }

    #[test]
    fn detached_add_validates_but_does_not_paint() {
        let mut w = Window::new(0, 0, 10, 10, false);
        assert!(!w.is_attached());
        w.add_text("label", 0, 0, "hi").unwrap();
        assert_eq!(w.child_count(), 1);
        assert!(w.surface().is_none());
        // Oversized placement is still rejected while detached.
        assert!(matches!(
            w.add_text("wide", 5, 0, "abcdefgh"),
            Err(Error::DoesNotFit { .. })
        ));
    }

    #[test]
    fn first_draw_paints_pending_children_in_name_order() {
        let mut w = Window::new(0, 0, 5, 12, false);
        w.add_text("b", 0, 1, "second").unwrap();
        w.add_text("a", 0, 0, "first").unwrap();
        let mut parent = host();
        w.draw(&mut parent, 2, 4).unwrap();
        let s = w.surface().unwrap();
        assert_eq!(s.origin(), (2, 4));
        assert_eq!(s.grid().row_text(0), "first       ");
        assert_eq!(s.grid().row_text(1), "second      ");
    }

    #[test]
    fn update_on_detached_window_is_invalid() {
        let mut w = Window::new(0, 0, 5, 5, false);
        assert!(matches!(w.update(), Err(Error::InvalidOperation(_))));
    }

    #[test]
    fn update_flushes_every_row() {
        let mut w = Window::new(0, 0, 3, 4, false);
        let mut parent = host();
        w.draw(&mut parent, 0, 0).unwrap();
        let mut out = Vec::new();
        w.update_into(&mut out).unwrap();
        let emitted = String::from_utf8(out).unwrap();
        for row in 1..=3 {
            assert!(emitted.contains(&format!("\u{1b}[{row};1H")));
        }
    }

    #[test]
    fn nested_window_inherits_border_glyphs() {
        let mut w =
            Window::new(0, 0, 10, 10, true).with_border_glyphs(BorderGlyphs::ASCII);
        let mut parent = host();
        w.draw(&mut parent, 0, 0).unwrap();
        w.add_window("inner", 1, 1, 5, 5, true).unwrap();
        let s = w.surface().unwrap();
        assert_eq!(s.grid().cell(0, 0).unwrap().cluster(), "+");
        match w.get("inner") {
            Some(Element::Window(inner)) => {
                let inner_grid = inner.surface().unwrap().grid();
                assert_eq!(inner_grid.cell(0, 0).unwrap().cluster(), "+");
            }
            _ => panic!("inner window missing"),
        }
    }
}
