use crate::money::Money;

/// The outcome of feeding one input event to the [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the value.
    SetValue(Money),
    /// Write plain text to the clipboard; the value is unchanged.
    CopyToClipboard(String),
    /// Not ours: the host should run its default key handling.
    Ignore,
    /// Consumed with no effect.
    NoOp,
}

/// Whether the widget consumed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    No,
}

/// A caret position plus selection length, both counted in grapheme
/// clusters of the display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: u32,
    pub len: u32,
}

impl Selection {
    /// A collapsed caret at `col`.
    pub const fn caret(col: u32) -> Self {
        Self { start: col, len: 0 }
    }
}
