//! Error types for tree operations.
//!
//! Every failure is a usage error surfaced synchronously at the point of
//! violation; nothing here is transient or retried. Validation precedes
//! mutation throughout the crate, so a failed operation leaves the tree and
//! its surfaces untouched.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An element with a degenerate footprint (zero rows or columns) was
    /// passed to an add operation.
    #[error("invalid element: {0}")]
    InvalidElement(&'static str),

    /// The element's position plus footprint exceeds the target window's
    /// interior bounds.
    #[error(
        "element `{name}` does not fit: {rows}x{cols} at ({x},{y}) exceeds interior {interior_rows}x{interior_cols}"
    )]
    DoesNotFit {
        name: String,
        x: u16,
        y: u16,
        rows: u16,
        cols: u16,
        interior_rows: u16,
        interior_cols: u16,
    },

    /// No child registered under the given name.
    #[error("no element named `{0}`")]
    NotFound(String),

    /// A child with this name already exists in the window.
    #[error("an element named `{0}` already exists")]
    DuplicateName(String),

    /// Structurally disallowed call, e.g. drawing the screen into a parent
    /// or refreshing a window that has never been attached.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// A screen is already live in this process.
    #[error("a display session is already active in this process")]
    DisplayActive,

    /// Failure in the underlying surface or terminal layer.
    #[error(transparent)]
    Surface(#[from] anyhow::Error),
}
