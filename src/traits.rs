use crate::types::Selection;

/// The host text control the widget drives.
pub trait TextHost {
    /// Show new display text.
    fn set_text(&mut self, text: &str);
    /// Place the caret and selection.
    fn set_selection(&mut self, selection: Selection);
}

/// Outgoing clipboard writes. Best effort: implementations swallow failures.
pub trait Clipboard {
    fn set(&mut self, text: String);
}
