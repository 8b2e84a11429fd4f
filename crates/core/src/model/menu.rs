use folio_protocol::UiCommand;

use crate::config::MarkupConfig;

const OPEN_CLASS: &str = "active";
const BODY_OPEN_CLASS: &str = "menu-open";

/// The collapsible navigation menu shown on narrow viewports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self, markup: &MarkupConfig) -> Vec<UiCommand> {
        if self.open {
            self.close(markup)
        } else {
            self.open(markup)
        }
    }

    pub fn open(&mut self, markup: &MarkupConfig) -> Vec<UiCommand> {
        if self.open {
            return Vec::new();
        }
        self.open = true;
        vec![
            UiCommand::add_class(&markup.nav_menu, OPEN_CLASS),
            UiCommand::add_class(&markup.menu_toggle, OPEN_CLASS),
            UiCommand::add_class(&markup.body, BODY_OPEN_CLASS),
        ]
    }

    /// Close the menu, clearing the open marker on the menu, the toggle,
    /// and the body. Closing a closed menu emits nothing.
    pub fn close(&mut self, markup: &MarkupConfig) -> Vec<UiCommand> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        vec![
            UiCommand::remove_class(&markup.nav_menu, OPEN_CLASS),
            UiCommand::remove_class(&markup.menu_toggle, OPEN_CLASS),
            UiCommand::remove_class(&markup.body, BODY_OPEN_CLASS),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trip() {
        let markup = MarkupConfig::default();
        let mut menu = MobileMenu::default();

        let opened = menu.toggle(&markup);
        assert!(menu.is_open());
        assert_eq!(opened.len(), 3);

        let closed = menu.toggle(&markup);
        assert!(!menu.is_open());
        assert!(closed.contains(&UiCommand::remove_class(&markup.body, "menu-open")));
    }

    #[test]
    fn closing_closed_menu_is_silent() {
        let mut menu = MobileMenu::default();
        assert!(menu.close(&MarkupConfig::default()).is_empty());
    }
}
