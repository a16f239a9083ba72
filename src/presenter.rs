//! Success and error banners for the contact form.
//!
//! The banner is the single message region under the form. Success messages
//! hide themselves after a delay; error messages stay until replaced.

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Default lifetime of a success message.
pub const DEFAULT_SUCCESS_TTL: Duration = Duration::from_millis(10_000);

/// Kind of feedback shown in the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    fn as_str(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Rendered state of the message region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: Option<MessageKind>,
    pub text: String,
    pub visible: bool,
    /// Times the banner has been scrolled into view.
    pub scroll_count: u32,
}

impl Banner {
    /// CSS classes for the current state.
    pub fn class_name(&self) -> String {
        let mut class = String::from("form-message");
        if let Some(kind) = self.kind {
            class.push_str(" form-message--");
            class.push_str(kind.as_str());
        }
        if self.visible {
            class.push_str(" show");
        }
        class
    }
}

#[derive(Debug, Default)]
struct PresenterState {
    banner: Banner,
    /// Bumped on every `show`, so a timer only hides the message it was armed for.
    generation: u64,
    pending_hide: Option<JoinHandle<()>>,
}

/// Shows messages in the banner and owns the auto-hide timer.
///
/// Timers run on the ambient tokio runtime; `show` must be called from
/// within one. A pending hide is aborted when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct FormMessagePresenter {
    state: Arc<Mutex<PresenterState>>,
    success_ttl: Duration,
}

impl FormMessagePresenter {
    pub fn new() -> Self {
        Self::with_success_ttl(DEFAULT_SUCCESS_TTL)
    }

    pub fn with_success_ttl(success_ttl: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(PresenterState::default())),
            success_ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, PresenterState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Display a message, replacing whatever the banner showed before.
    pub fn show(&self, kind: MessageKind, text: impl Into<String>) {
        let mut state = self.lock();

        if let Some(pending) = state.pending_hide.take() {
            pending.abort();
        }
        state.generation += 1;

        state.banner.kind = Some(kind);
        state.banner.text = text.into();
        state.banner.visible = true;
        state.banner.scroll_count += 1;

        if kind == MessageKind::Success {
            let generation = state.generation;
            let ttl = self.success_ttl;
            let shared: Weak<Mutex<PresenterState>> = Arc::downgrade(&self.state);
            state.pending_hide = Some(tokio::spawn(async move {
                tokio::time::sleep(ttl).await;
                let Some(shared) = shared.upgrade() else {
                    return;
                };
                let mut state = shared.lock().unwrap_or_else(|p| p.into_inner());
                if state.generation == generation {
                    state.banner.visible = false;
                    state.pending_hide = None;
                    tracing::debug!("Success message hidden");
                }
            }));
        }
    }

    /// Snapshot of the banner.
    pub fn banner(&self) -> Banner {
        self.lock().banner.clone()
    }

    /// Whether an auto-hide is scheduled.
    pub fn has_pending_hide(&self) -> bool {
        self.lock().pending_hide.is_some()
    }

    /// Cancel any scheduled hide; the banner keeps its content.
    pub fn cancel_pending_hide(&self) {
        if let Some(pending) = self.lock().pending_hide.take() {
            pending.abort();
        }
    }

    pub fn success_ttl(&self) -> Duration {
        self.success_ttl
    }
}

impl Default for FormMessagePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PresenterState {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_hide.take() {
            pending.abort();
        }
    }
}
