use super::display::UuidDisplay;
use crate::clipboard::ClipboardWriter;
use crate::config::Config;
use crate::feedback::CopyFeedbackController;
use crate::generator::{UuidFormat, UuidService};
use crate::scheduler::{Scheduler, TimerHandle};
use crate::surface::DisplaySurface;
use crate::ui::theme::Theme;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};
use tracing::{info, warn};
use uuid::Uuid;

const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub uuid: Uuid,
    pub text: String,
    pub generated_at: DateTime<Local>,
}

pub struct AppState {
    pub display: UuidDisplay,
    pub copy_feedback: CopyFeedbackController,
    /// Newest first.
    pub history: Vec<HistoryEntry>,
    pub cursor_position: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub theme: Theme,
    pub format: UuidFormat,
    pub uppercase: bool,
    pub history_size: usize,
    pub status_message: Option<(String, Instant)>,
    generator: Box<dyn UuidService>,
}

impl AppState {
    pub fn new(
        generator: Box<dyn UuidService>,
        clipboard: Box<dyn ClipboardWriter>,
        config: &Config,
        theme: Theme,
    ) -> Self {
        Self {
            display: UuidDisplay::new(clipboard),
            copy_feedback: CopyFeedbackController::new(config.feedback_options()),
            history: Vec::new(),
            cursor_position: 0,
            should_quit: false,
            show_help: false,
            theme,
            format: config.format,
            uppercase: config.uppercase,
            history_size: config.history_size.max(1),
            status_message: None,
            generator,
        }
    }

    /// Ask the service for a fresh UUID and show it. A failed generation
    /// replaces the displayed text with the error; nothing is retried.
    pub fn generate(&mut self) {
        match self.generator.generate() {
            Ok(uuid) => {
                let text = self.format.render(&uuid, self.uppercase);
                info!(uuid = %text, "Generated UUID");
                self.history.insert(
                    0,
                    HistoryEntry {
                        uuid,
                        text: text.clone(),
                        generated_at: Local::now(),
                    },
                );
                self.history.truncate(self.history_size);
                self.cursor_position = 0;
                self.display.render(&text);
            }
            Err(e) => {
                warn!(error = %e, "UUID generation failed");
                self.display.render(&format!("Error: {}", e));
            }
        }
    }

    pub fn copy_displayed(&mut self, scheduler: &mut dyn Scheduler) {
        if let Err(e) = self.copy_feedback.on_copy_requested(&mut self.display, scheduler) {
            self.set_status_message(format!("Copy failed: {}", e));
        }
    }

    pub fn on_timer_fired(&mut self, handle: TimerHandle) {
        self.copy_feedback.on_revert_fired(handle);
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.show_selected();
        }
    }

    pub fn move_cursor_down(&mut self) {
        if !self.history.is_empty() && self.cursor_position < self.history.len() - 1 {
            self.cursor_position += 1;
            self.show_selected();
        }
    }

    fn show_selected(&mut self) {
        if let Some(entry) = self.history.get(self.cursor_position) {
            let text = entry.text.clone();
            self.display.render(&text);
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.cursor_position = 0;
        self.display.render("");
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_status_message(&mut self) {
        if let Some((_, set_at)) = &self.status_message {
            if set_at.elapsed() >= STATUS_MESSAGE_TTL {
                self.status_message = None;
            }
        }
    }

    /// Tear down the view-owned state before the terminal goes away.
    pub fn shutdown(&mut self, scheduler: &mut dyn Scheduler) {
        self.copy_feedback.dispose(scheduler);
    }
}
