//! Site Pages
//!
//! The fixed set of pages and the navbar entries pointing at them.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Home,
    Features,
    Services,
    Plans,
    Simple,
    About,
    SignIn,
}

impl Page {
    /// Navbar order; sign-in lives in the right-hand actions instead
    pub const NAV: [Page; 6] = [
        Page::Home,
        Page::Features,
        Page::Services,
        Page::Plans,
        Page::Simple,
        Page::About,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Features => "/features",
            Page::Services => "/services",
            Page::Plans => "/plans",
            Page::Simple => "/simple",
            Page::About => "/about",
            Page::SignIn => "/signin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Features => "Features",
            Page::Services => "Services",
            Page::Plans => "Plans",
            Page::Simple => "Why is it simple",
            Page::About => "About",
            Page::SignIn => "Sign In",
        }
    }

    /// Resolve a location pathname; trailing slashes are ignored
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        [Page::SignIn]
            .into_iter()
            .chain(Page::NAV)
            .find(|p| p.path() == normalized)
    }

    /// Whether the navbar entry for `self` should be marked active
    pub fn is_active(&self, pathname: &str) -> bool {
        Page::from_path(pathname) == Some(*self)
    }
}

/// Navbar open/closed state for the mobile menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Choosing a link always closes the menu
    pub fn navigate(&mut self, page: Page) -> &'static str {
        self.open = false;
        page.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for page in Page::NAV.into_iter().chain([Page::SignIn]) {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/plans/"), Some(Page::Plans));
        assert_eq!(Page::from_path(""), Some(Page::Home));
        assert_eq!(Page::from_path("/pricing"), None);
    }

    #[test]
    fn test_active_link() {
        assert!(Page::Home.is_active("/"));
        assert!(!Page::Home.is_active("/about"));
        assert!(Page::About.is_active("/about"));
    }

    #[test]
    fn test_mobile_menu_closes_on_navigate() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.navigate(Page::Features), "/features");
        assert!(!menu.is_open());
    }
}
