//! Transient "Copied!" feedback for the copy button.
//!
//! [`CopyFeedbackController`] owns the button's label and flips it to the
//! copied text on every copy request, scheduling a revert with the caller's
//! [`Scheduler`]. The scheduler's owner hands fired timers back through
//! [`CopyFeedbackController::on_revert_fired`].

use crate::scheduler::{Scheduler, TimerHandle};
use crate::surface::{ClipboardError, DisplaySurface};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_REVERT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackState {
    Idle,
    Feedback,
}

impl fmt::Display for FeedbackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackState::Idle => write!(f, "IDLE"),
            FeedbackState::Feedback => write!(f, "FEEDBACK"),
        }
    }
}

/// What happens to reverts scheduled by earlier copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevertPolicy {
    /// Every scheduled revert fires and resets the label.
    #[default]
    Redundant,
    /// A new copy cancels the previous revert; only the latest one counts.
    Debounce,
}

impl FromStr for RevertPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redundant" => Ok(RevertPolicy::Redundant),
            "debounce" => Ok(RevertPolicy::Debounce),
            other => Err(format!("Unknown revert policy '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackLabels {
    pub idle: String,
    pub copied: String,
}

impl Default for FeedbackLabels {
    fn default() -> Self {
        Self {
            idle: "Copy".to_string(),
            copied: "Copied!".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeedbackOptions {
    pub labels: FeedbackLabels,
    pub revert_delay: Duration,
    pub policy: RevertPolicy,
    /// Show the copied label even when the clipboard write failed.
    pub optimistic: bool,
}

impl Default for FeedbackOptions {
    fn default() -> Self {
        Self {
            labels: FeedbackLabels::default(),
            revert_delay: DEFAULT_REVERT_DELAY,
            policy: RevertPolicy::default(),
            optimistic: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLabelState {
    pub current_text: String,
    pub state: FeedbackState,
    pub pending_revert: Option<TimerHandle>,
}

#[derive(Debug)]
pub struct CopyFeedbackController {
    label: ButtonLabelState,
    options: FeedbackOptions,
    disposed: bool,
}

impl CopyFeedbackController {
    pub fn new(options: FeedbackOptions) -> Self {
        Self {
            label: ButtonLabelState {
                current_text: options.labels.idle.clone(),
                state: FeedbackState::Idle,
                pending_revert: None,
            },
            options,
            disposed: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label.current_text
    }

    pub fn state(&self) -> FeedbackState {
        self.label.state
    }

    pub fn pending_revert(&self) -> Option<TimerHandle> {
        self.label.pending_revert
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Copy whatever the surface is showing and switch to the copied label.
    ///
    /// Both effects are done when this returns; the revert is the only
    /// deferred work. A failed write is logged and returned, and unless the
    /// controller is in non-optimistic mode the label still changes.
    pub fn on_copy_requested<D, S>(
        &mut self,
        surface: &mut D,
        scheduler: &mut S,
    ) -> Result<(), ClipboardError>
    where
        D: DisplaySurface + ?Sized,
        S: Scheduler + ?Sized,
    {
        if self.disposed {
            debug!("Copy requested on disposed controller, ignoring");
            return Ok(());
        }

        let text = surface.displayed().to_string();
        let result = surface.write_clipboard(&text);
        if let Err(e) = &result {
            warn!(error = %e, "Clipboard write failed");
            if !self.options.optimistic {
                return result;
            }
        }

        self.label.current_text = self.options.labels.copied.clone();
        self.label.state = FeedbackState::Feedback;

        if self.options.policy == RevertPolicy::Debounce {
            if let Some(previous) = self.label.pending_revert.take() {
                scheduler.cancel(previous);
            }
        }
        let handle = scheduler.after(self.options.revert_delay);
        self.label.pending_revert = Some(handle);
        debug!(
            ?handle,
            delay_ms = self.options.revert_delay.as_millis() as u64,
            "Scheduled label revert"
        );

        result
    }

    /// Called by the scheduler's owner when a revert timer fires.
    pub fn on_revert_fired(&mut self, handle: TimerHandle) {
        if self.disposed {
            debug!(?handle, "Revert fired after dispose, dropping");
            return;
        }

        let is_latest = self.label.pending_revert == Some(handle);
        if self.options.policy == RevertPolicy::Debounce && !is_latest {
            debug!(?handle, "Stale revert ignored");
            return;
        }

        self.label.current_text = self.options.labels.idle.clone();
        self.label.state = FeedbackState::Idle;
        if is_latest {
            self.label.pending_revert = None;
        }
    }

    /// Tear down: cancel the outstanding revert and ignore any that still fire.
    pub fn dispose<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.label.pending_revert.take() {
            scheduler.cancel(handle);
        }
        self.disposed = true;
    }
}

impl Default for CopyFeedbackController {
    fn default() -> Self {
        Self::new(FeedbackOptions::default())
    }
}
