use crate::surface::ClipboardError;
use arboard::Clipboard;
#[cfg(target_os = "linux")]
use arboard::SetExtLinux;
use tracing::debug;

pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard, opened on first use and kept for the session.
///
/// On Linux, clipboard contents persist only while the owning process is
/// running, so the handle is held rather than reopened per copy.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
    wait_for_replacement: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// For short-lived processes: on Linux each write blocks until another
    /// client takes clipboard ownership, so the value outlives a quick exit.
    pub fn serving_until_replaced() -> Self {
        Self {
            inner: None,
            wait_for_replacement: cfg!(target_os = "linux"),
        }
    }

    pub fn waits_for_replacement(&self) -> bool {
        self.wait_for_replacement
    }

    #[cfg(target_os = "linux")]
    fn write(&mut self, clipboard_text: &str) -> Result<(), arboard::Error> {
        let wait = self.wait_for_replacement;
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(arboard::Error::ClipboardNotSupported);
        };
        if wait {
            clipboard.set().wait().text(clipboard_text)
        } else {
            clipboard.set_text(clipboard_text)
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn write(&mut self, clipboard_text: &str) -> Result<(), arboard::Error> {
        match self.inner.as_mut() {
            Some(clipboard) => clipboard.set_text(clipboard_text),
            None => Err(arboard::Error::ClipboardNotSupported),
        }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            debug!("Opened system clipboard");
            self.inner = Some(clipboard);
        }

        self.write(text).map_err(|e| match e {
            arboard::Error::ClipboardNotSupported => ClipboardError::Unavailable(e.to_string()),
            _ => ClipboardError::Denied(e.to_string()),
        })
    }
}

/// Copy text from a one-shot command. On Linux this returns only once
/// another application has replaced the clipboard contents.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    SystemClipboard::serving_until_replaced().set_text(text)
}
