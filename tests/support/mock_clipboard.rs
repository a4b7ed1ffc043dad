use currency_box::traits::Clipboard;

#[derive(Default, Debug, Clone)]
pub struct MockClipboard {
    content: Option<String>,
    writes: usize,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.content.clone()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Clipboard for MockClipboard {
    fn set(&mut self, text: String) {
        self.content = Some(text);
        self.writes += 1;
    }
}
