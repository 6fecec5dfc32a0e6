use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// The platform refused the write.
    #[error("clipboard write denied: {0}")]
    Denied(String),
    /// No clipboard could be opened at all (headless session, no display server).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Where the generated value is shown and copied from.
pub trait DisplaySurface {
    fn render(&mut self, text: &str);

    /// The text currently on screen.
    fn displayed(&self) -> &str;

    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError>;
}
