//! Collapsible navigation menu for compact layouts.

/// Body class carried while the menu is open.
pub const MENU_OPEN_CLASS: &str = "menu-open";

/// Where a click landed, relative to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The hamburger button itself.
    MenuButton,
    /// A link inside the navigation.
    NavLink,
    /// Somewhere inside the navigation that isn't a link.
    InsideNav,
    /// Anywhere else on the page.
    Outside,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn link_clicked(&mut self) {
        self.open = false;
    }

    pub fn clicked_outside(&mut self) {
        self.open = false;
    }

    /// Escape closes an open menu and does nothing otherwise.
    pub fn escape(&mut self) {
        if self.open {
            self.open = false;
        }
    }

    /// Route a click.
    pub fn handle(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::MenuButton => self.toggle(),
            ClickTarget::NavLink => self.link_clicked(),
            ClickTarget::InsideNav => {}
            ClickTarget::Outside => self.clicked_outside(),
        }
    }

    /// Button glyph.
    pub fn icon(&self) -> &'static str {
        if self.open {
            "✕"
        } else {
            "☯"
        }
    }

    pub fn aria_label(&self) -> &'static str {
        if self.open {
            "Close menu"
        } else {
            "Open menu"
        }
    }

    /// The class the page body should carry, if any.
    pub fn body_class(&self) -> Option<&'static str> {
        self.open.then_some(MENU_OPEN_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_updates_presentation() {
        let mut menu = NavMenu::new();
        assert_eq!(menu.icon(), "☯");
        assert_eq!(menu.aria_label(), "Open menu");
        assert_eq!(menu.body_class(), None);

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.icon(), "✕");
        assert_eq!(menu.aria_label(), "Close menu");
        assert_eq!(menu.body_class(), Some("menu-open"));

        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_click_routing() {
        let mut menu = NavMenu::new();
        menu.handle(ClickTarget::MenuButton);
        menu.handle(ClickTarget::InsideNav);
        assert!(menu.is_open());

        menu.handle(ClickTarget::NavLink);
        assert!(!menu.is_open());

        menu.handle(ClickTarget::MenuButton);
        menu.handle(ClickTarget::Outside);
        assert!(!menu.is_open());

        // Outside clicks never open it.
        menu.handle(ClickTarget::Outside);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_escape_only_closes() {
        let mut menu = NavMenu::new();
        menu.escape();
        assert!(!menu.is_open());

        menu.toggle();
        menu.escape();
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), "☯");
    }
}
