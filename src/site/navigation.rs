//! Mobile navigation menu.

use serde::Serialize;

/// A link in the main navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: String,
    /// Marks the link for the page being viewed.
    pub active: bool,
}

/// Open/closed state of the mobile menu and its toggle button.
///
/// The `active` class on both the menu and the toggle, and the toggle's
/// `aria-expanded` attribute, all follow `is_open`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NavMenu {
    open: bool,
    links: Vec<NavLink>,
}

impl NavMenu {
    pub fn new<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            open: false,
            links: hrefs
                .into_iter()
                .map(|href| NavLink {
                    href: href.into(),
                    active: false,
                })
                .collect(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Value of the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Toggle button clicked. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A navigation link was clicked.
    pub fn on_link_click(&mut self) {
        self.open = false;
    }

    /// A click anywhere in the document; closes the menu when it landed
    /// outside the navigation.
    pub fn on_document_click(&mut self, inside_nav: bool) {
        if !inside_nav && self.open {
            self.open = false;
        }
    }

    /// Flag the links that point at `path`. Returns how many were marked.
    pub fn mark_current_page(&mut self, path: &str) -> usize {
        let mut marked = 0;
        for link in &mut self.links {
            if is_current_page(path, &link.href) {
                link.active = true;
                marked += 1;
            }
        }
        marked
    }
}

/// Whether `href` names the page at `path`. Directory paths match `index.html`.
pub fn is_current_page(path: &str, href: &str) -> bool {
    if href.is_empty() {
        return false;
    }

    let path = urlencoding::decode(path)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| path.to_string());

    path.ends_with(href) || (path.ends_with('/') && href == "index.html")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> NavMenu {
        NavMenu::new(["index.html", "tjenester.html", "kontakt.html"])
    }

    #[test]
    fn test_toggle_flips_aria_expanded() {
        let mut nav = menu();
        assert_eq!(nav.aria_expanded(), "false");
        assert!(nav.toggle());
        assert_eq!(nav.aria_expanded(), "true");
        assert!(!nav.toggle());
        assert_eq!(nav.aria_expanded(), "false");
    }

    #[test]
    fn test_link_click_closes() {
        let mut nav = menu();
        nav.toggle();
        nav.on_link_click();
        assert!(!nav.is_open());
    }

    #[test]
    fn test_outside_click_closes_only_outside() {
        let mut nav = menu();
        nav.toggle();
        nav.on_document_click(true);
        assert!(nav.is_open());
        nav.on_document_click(false);
        assert!(!nav.is_open());
    }

    #[test]
    fn test_mark_current_page() {
        let mut nav = menu();
        assert_eq!(nav.mark_current_page("/lindland-service-maskin/tjenester.html"), 1);
        assert!(nav.links()[1].active);
        assert!(!nav.links()[0].active);

        let mut nav = menu();
        assert_eq!(nav.mark_current_page("/lindland-service-maskin/"), 1);
        assert!(nav.links()[0].active);

        let mut nav = menu();
        assert_eq!(nav.mark_current_page("/"), 1);
        assert!(nav.links()[0].active);
    }

    #[test]
    fn test_is_current_page_decodes_path() {
        assert!(is_current_page("/v%C3%A5re-tjenester.html", "våre-tjenester.html"));
        assert!(!is_current_page("/kontakt.html", ""));
        assert!(!is_current_page("/kontakt.html", "index.html"));
    }
}
