//! Scroll-driven behaviors: anchor scrolling, header shadow and reveal
//! animations.

use serde::Serialize;

/// Box shadow of the header once the page is scrolled.
pub const SHADOW_SCROLLED: &str = "0 2px 10px rgba(0, 0, 0, 0.1)";

/// Box shadow of the header at the top of the page.
pub const SHADOW_RESTING: &str = "0 1px 3px rgba(0, 0, 0, 0.1)";

/// Scroll offset, in pixels, above which the header gets the stronger shadow.
pub const SHADOW_THRESHOLD: f64 = 10.0;

/// Class added when a revealed element enters the viewport.
pub const REVEAL_CLASS: &str = "animate-fadeInUp";

/// Elements that fade in on scroll.
pub const REVEAL_SELECTORS: &[&str] = &[
    ".service-card",
    ".value-card",
    ".why-us__item",
    ".service-detail",
    ".projects-types__item",
];

/// Element id an in-page link scrolls to, or `None` for a bare `#` or a
/// link that is not an anchor.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target sits just below the fixed header.
pub fn scroll_position(target_viewport_top: f64, page_offset: f64, header_height: f64) -> f64 {
    target_viewport_top + page_offset - header_height
}

/// Tracks the page scroll and picks the header shadow.
#[derive(Debug, Clone, Default)]
pub struct HeaderShadow {
    last_scroll: f64,
}

impl HeaderShadow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll event. Returns the box shadow the header should carry.
    pub fn on_scroll(&mut self, page_offset: f64) -> &'static str {
        self.last_scroll = page_offset;
        if page_offset > SHADOW_THRESHOLD {
            SHADOW_SCROLLED
        } else {
            SHADOW_RESTING
        }
    }

    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }
}

/// One element waiting to be revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealItem {
    /// Staggered delay class, `delay-1` through `delay-5`.
    pub delay_class: String,
    pub animated: bool,
    /// Still watched for intersection.
    pub observed: bool,
}

impl RevealItem {
    /// Inline opacity: hidden until revealed.
    pub fn opacity(&self) -> f32 {
        if self.animated {
            1.0
        } else {
            0.0
        }
    }
}

/// Reveals elements the first time they intersect the viewport.
#[derive(Debug, Clone, Default)]
pub struct RevealAnimator {
    items: Vec<RevealItem>,
}

impl RevealAnimator {
    /// Prepare `count` elements, staggering their delays in groups of five.
    pub fn new(count: usize) -> Self {
        Self {
            items: (0..count)
                .map(|index| RevealItem {
                    delay_class: format!("delay-{}", (index % 5) + 1),
                    animated: false,
                    observed: true,
                })
                .collect(),
        }
    }

    pub fn items(&self) -> &[RevealItem] {
        &self.items
    }

    /// Intersection callback for one element. Returns true when the element
    /// was revealed by this call.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        match self.items.get_mut(index) {
            Some(item) if is_intersecting && item.observed => {
                item.animated = true;
                item.observed = false;
                true
            }
            _ => false,
        }
    }

    /// Number of elements still being watched.
    pub fn observed_count(&self) -> usize {
        self.items.iter().filter(|item| item.observed).count()
    }
}
