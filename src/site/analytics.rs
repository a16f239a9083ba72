//! Click-to-call tracking.
//!
//! Analytics are optional on the site: when no tracker is installed, phone
//! clicks are only logged.

use serde::Serialize;
use std::sync::Arc;

/// An analytics event in the site's fixed taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub action: &'static str,
    pub category: &'static str,
    pub label: &'static str,
    pub value: u32,
}

/// The event sent when a `tel:` link is activated.
pub const PHONE_CLICK: AnalyticsEvent = AnalyticsEvent {
    action: "click",
    category: "Contact",
    label: "Phone Click",
    value: 1,
};

/// Sink for analytics events, such as a page-level `gtag` hook.
pub trait EventTracker: Send + Sync {
    fn track(&self, event: &AnalyticsEvent);
}

/// Reports phone link clicks to the tracker, if one is installed.
#[derive(Clone, Default)]
pub struct PhoneClickTracker {
    tracker: Option<Arc<dyn EventTracker>>,
}

impl PhoneClickTracker {
    pub fn new(tracker: Option<Arc<dyn EventTracker>>) -> Self {
        Self { tracker }
    }

    /// Whether `href` is a click-to-call link.
    pub fn is_phone_link(href: &str) -> bool {
        href.starts_with("tel:")
    }

    /// A phone link was clicked. Returns true when an event was sent.
    pub fn on_phone_click(&self) -> bool {
        tracing::debug!("Phone link clicked");
        match &self.tracker {
            Some(tracker) => {
                tracker.track(&PHONE_CLICK);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for PhoneClickTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhoneClickTracker")
            .field("has_tracker", &self.tracker.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTracker {
        events: Mutex<Vec<AnalyticsEvent>>,
    }

    impl EventTracker for RecordingTracker {
        fn track(&self, event: &AnalyticsEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_tracks_when_present() {
        let recorder = Arc::new(RecordingTracker::default());
        let tracker = PhoneClickTracker::new(Some(recorder.clone()));

        assert!(tracker.on_phone_click());
        let events = recorder.events.lock().unwrap();
        assert_eq!(events.as_slice(), &[PHONE_CLICK]);
        assert_eq!(events[0].category, "Contact");
        assert_eq!(events[0].label, "Phone Click");
    }

    #[test]
    fn test_absent_tracker_is_silent() {
        let tracker = PhoneClickTracker::default();
        assert!(!tracker.on_phone_click());
    }

    #[test]
    fn test_is_phone_link() {
        assert!(PhoneClickTracker::is_phone_link("tel:+4712345678"));
        assert!(!PhoneClickTracker::is_phone_link("mailto:post@lindlandservice.no"));
    }
}
