//! Process-wide display session.
//!
//! A `Display` owns the terminal for its lifetime: it enters raw mode on the
//! alternate screen at construction and restores the terminal when dropped.
//! The physical display is a process-wide resource, so at most one session
//! may be live at a time; a second construction fails with [`DisplayActive`]
//! instead of corrupting terminal state. The claim is released on drop, so
//! sequential sessions within one process are fine.

use anyhow::Result;
use core_terminal::{CrosstermBackend, TerminalBackend};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

use crate::surface::Surface;

static DISPLAY_ACTIVE: AtomicBool = AtomicBool::new(false);

/// A display session is already live in this process.
#[derive(Debug, thiserror::Error)]
#[error("a display session is already active in this process")]
pub struct DisplayActive;

pub struct Display {
    backend: Box<dyn TerminalBackend>,
    rows: u16,
    cols: u16,
}

impl Display {
    /// Open the terminal display. Fails with [`DisplayActive`] if another
    /// `Display` is live in this process.
    pub fn new() -> Result<Self> {
        Self::with_backend(Box::new(CrosstermBackend::new()))
    }

    /// Open a session over an arbitrary backend (tests).
    pub fn with_backend(mut backend: Box<dyn TerminalBackend>) -> Result<Self> {
        if DISPLAY_ACTIVE
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(DisplayActive.into());
        }
        let opened = backend.enter().and_then(|_| backend.size());
        match opened {
            Ok((rows, cols)) => {
                debug!(target: "display", rows, cols, "session opened");
                Ok(Self {
                    backend,
                    rows,
                    cols,
                })
            }
            Err(e) => {
                let _ = backend.leave();
                DISPLAY_ACTIVE.store(false, Ordering::SeqCst);
                Err(e)
            }
        }
    }

    #[inline]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Surface spanning the whole display, anchored at the top-left corner.
    /// The root of a window tree binds this exactly once.
    pub fn whole_screen_surface(&self) -> Surface {
        Surface::new(0, 0, self.rows, self.cols)
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        let _ = self.backend.leave();
        DISPLAY_ACTIVE.store(false, Ordering::SeqCst);
        debug!(target: "display", "session closed");
    }
}
