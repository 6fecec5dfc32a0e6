use crate::clipboard::ClipboardWriter;
use crate::surface::{ClipboardError, DisplaySurface};

/// The panel that shows the current value, backed by a clipboard writer.
pub struct UuidDisplay {
    text: String,
    clipboard: Box<dyn ClipboardWriter>,
}

impl UuidDisplay {
    pub fn new(clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self {
            text: String::new(),
            clipboard,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl DisplaySurface for UuidDisplay {
    fn render(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    fn displayed(&self) -> &str {
        &self.text
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard.set_text(text)
    }
}
