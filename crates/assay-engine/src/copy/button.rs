use std::time::{Duration, Instant};

use super::clipboard::Clipboard;

/// How long `Copied!`/`Error!` stays up before the button resets.
pub const DEFAULT_FEEDBACK: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copied,
    Failed,
}

impl CopyState {
    pub fn label(self) -> &'static str {
        match self {
            CopyState::Idle => "Copy",
            CopyState::Copied => "Copied!",
            CopyState::Failed => "Error!",
        }
    }
}

/// Feedback state of one code block's copy button.
///
/// Time is passed in explicitly; the front end calls [`CopyButton::tick`]
/// from its event loop to let feedback expire.
#[derive(Debug, Clone)]
pub struct CopyButton {
    state: CopyState,
    changed_at: Option<Instant>,
    feedback: Duration,
}

impl CopyButton {
    pub fn new(feedback: Duration) -> Self {
        Self {
            state: CopyState::Idle,
            changed_at: None,
            feedback,
        }
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    pub fn label(&self) -> &'static str {
        self.state.label()
    }

    /// Writes `source` to the clipboard and shows the outcome.
    ///
    /// Pressing again while feedback is showing restarts the feedback timer.
    pub fn press<C: Clipboard + ?Sized>(
        &mut self,
        clipboard: &mut C,
        source: &str,
        now: Instant,
    ) -> CopyState {
        self.state = match clipboard.write_text(source) {
            Ok(()) => CopyState::Copied,
            Err(e) => {
                log::warn!("Failed to copy code: {e}");
                CopyState::Failed
            }
        };
        self.changed_at = Some(now);
        self.state
    }

    /// Returns to `Idle` once the feedback delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> CopyState {
        if let Some(at) = self.changed_at
            && now.saturating_duration_since(at) >= self.feedback
        {
            self.state = CopyState::Idle;
            self.changed_at = None;
        }
        self.state
    }
}

impl Default for CopyButton {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK)
    }
}
