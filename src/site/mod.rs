//! Page behaviors outside the contact form.
//!
//! Each type here reflects one listener the site script wires on load. None of
//! them share state with each other or with the form flow.

pub mod analytics;
pub mod navigation;
pub mod scroll;

pub use analytics::{AnalyticsEvent, EventTracker, PhoneClickTracker, PHONE_CLICK};
pub use navigation::{is_current_page, NavLink, NavMenu};
pub use scroll::{anchor_target, scroll_position, HeaderShadow, RevealAnimator, RevealItem};
