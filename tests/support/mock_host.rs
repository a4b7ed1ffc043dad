use currency_box::traits::TextHost;
use currency_box::types::Selection;

/// Records what the widget pushes to the text control.
#[derive(Default, Debug, Clone)]
pub struct MockHost {
    pub text: String,
    pub selection: Selection,
    pub text_updates: usize,
    pub selection_updates: usize,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextHost for MockHost {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.text_updates += 1;
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
        self.selection_updates += 1;
    }
}
