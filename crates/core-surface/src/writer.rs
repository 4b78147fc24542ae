//! Terminal command queue.
//!
//! A `Writer` accumulates cursor moves and prints for one flush, then emits
//! them in order through crossterm. Commands preserve ordering and nothing is
//! written mid-queue, so a flush is a single burst of terminal output. All
//! positions are absolute terminal coordinates; the surface layer resolves
//! offsets before queuing.

use anyhow::Result;
use crossterm::{cursor::MoveTo, queue, style::Print};
use std::io::{Write, stdout};

#[derive(Debug)]
pub enum Command {
    /// Absolute `(row, col)` cursor position.
    MoveTo(u16, u16),
    Print(String),
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    pub fn move_to(&mut self, row: u16, col: u16) {
        self.cmds.push(Command::MoveTo(row, col));
    }

    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Emit all queued commands into `out` and flush it. Separated from
    /// [`Writer::flush`] so tests can capture the byte stream.
    pub fn emit<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                // Crossterm's MoveTo takes (column, row).
                Command::MoveTo(row, col) => {
                    queue!(out, MoveTo(col, row))?;
                }
                Command::Print(s) => {
                    queue!(out, Print(s))?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Emit to the physical terminal.
    pub fn flush(self) -> Result<()> {
        let mut out = stdout();
        self.emit(&mut out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_preserves_order_and_content() {
        let mut w = Writer::new();
        w.move_to(2, 1);
        w.print("ab");
        w.print("");
        w.print("c");
        let mut out = Vec::new();
        w.emit(&mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        // One cursor move, then the prints in order; the empty print is dropped.
        let ab = s.find("ab").unwrap();
        let c = s.find('c').unwrap();
        assert!(ab < c);
        // MoveTo(col=1, row=2) encodes 1-based as ESC[3;2H.
        assert!(s.contains("\u{1b}[3;2H"));
    }

    #[test]
    fn empty_writer_emits_nothing() {
        let w = Writer::new();
        assert!(w.is_empty());
        let mut out = Vec::new();
        w.emit(&mut out).unwrap();
        assert!(out.is_empty());
    }
}
