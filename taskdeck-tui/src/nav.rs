//! Page navigation — fixed page set, active-page marking, collapsible quick menu.
//!
//! The navigator owns only its local menu state. The current page lives on the
//! host; the navigator reads it and surfaces [`NavAction::Navigate`] requests
//! for the host to apply.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

pub const PAGE_COUNT: usize = 4;

/// The application's fixed set of top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Dashboard,
    Timeline,
    Table,
    Drafting,
}

impl Page {
    pub fn all() -> [Page; PAGE_COUNT] {
        [Page::Dashboard, Page::Timeline, Page::Table, Page::Drafting]
    }

    pub fn index(self) -> usize {
        match self {
            Page::Dashboard => 0,
            Page::Timeline => 1,
            Page::Table => 2,
            Page::Drafting => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Page::Dashboard),
            1 => Some(Page::Timeline),
            2 => Some(Page::Table),
            3 => Some(Page::Drafting),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Timeline => "Timeline",
            Page::Table => "Table",
            Page::Drafting => "Drafting",
        }
    }

    pub fn next(self) -> Page {
        Page::from_index((self.index() + 1) % PAGE_COUNT).unwrap()
    }

    pub fn prev(self) -> Page {
        Page::from_index((self.index() + PAGE_COUNT - 1) % PAGE_COUNT).unwrap()
    }
}

/// Outcome of a key the navigator handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// The host should switch to this page. Emitted even when the target
    /// equals the current page.
    Navigate(Page),
    /// The quick menu changed (toggle or cursor move); nothing for the host.
    MenuUpdated,
}

/// Navigation entries in display order, with the active flag. Exactly one
/// entry is active: the one equal to `current`.
pub fn entries(current: Page) -> impl Iterator<Item = (Page, bool)> {
    Page::all().into_iter().map(move |p| (p, p == current))
}

/// Top-navigation state: a single collapsed/expanded flag plus the quick
/// menu's cursor. Fresh instances start collapsed.
#[derive(Debug, Default)]
pub struct PageNavigator {
    menu_expanded: bool,
    menu_cursor: usize,
}

impl PageNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_expanded(&self) -> bool {
        self.menu_expanded
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    /// Flip between collapsed and expanded. The only transition the menu
    /// flag has; never navigates.
    pub fn toggle_menu(&mut self) {
        self.menu_expanded = !self.menu_expanded;
    }

    /// Handle a key. Yields at most one action per key press:
    /// - `1`–`4` select a page directly
    /// - `Tab` / `Shift+Tab` cycle pages
    /// - `m` toggles the quick menu (local effect only)
    /// - with the menu expanded, `j`/`k` move its cursor and `Enter` selects
    ///   the cursor entry without collapsing the menu
    ///
    /// Keys the navigator does not recognize return `None` for the host to
    /// dispatch elsewhere.
    pub fn handle_key(&mut self, key: KeyEvent, current: Page) -> Option<NavAction> {
        match key.code {
            KeyCode::Char('m') => {
                self.toggle_menu();
                Some(NavAction::MenuUpdated)
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                Page::from_index(idx).map(NavAction::Navigate)
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    Some(NavAction::Navigate(current.prev()))
                } else {
                    Some(NavAction::Navigate(current.next()))
                }
            }
            KeyCode::BackTab => Some(NavAction::Navigate(current.prev())),
            KeyCode::Char('j') | KeyCode::Down if self.menu_expanded => {
                if self.menu_cursor + 1 < PAGE_COUNT {
                    self.menu_cursor += 1;
                }
                Some(NavAction::MenuUpdated)
            }
            KeyCode::Char('k') | KeyCode::Up if self.menu_expanded => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
                Some(NavAction::MenuUpdated)
            }
            KeyCode::Enter if self.menu_expanded => {
                Page::from_index(self.menu_cursor).map(NavAction::Navigate)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn page_cycle() {
        assert_eq!(Page::Dashboard.next(), Page::Timeline);
        assert_eq!(Page::Drafting.next(), Page::Dashboard);
        assert_eq!(Page::Dashboard.prev(), Page::Drafting);
        assert_eq!(Page::Timeline.prev(), Page::Dashboard);
    }

    #[test]
    fn page_from_index() {
        for i in 0..PAGE_COUNT {
            let p = Page::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Page::from_index(PAGE_COUNT).is_none());
    }

    #[test]
    fn exactly_one_entry_active() {
        for current in Page::all() {
            let active: Vec<Page> = entries(current)
                .filter(|(_, is_active)| *is_active)
                .map(|(p, _)| p)
                .collect();
            assert_eq!(active, vec![current]);
        }
    }

    #[test]
    fn digit_keys_navigate() {
        let mut nav = PageNavigator::new();
        assert_eq!(
            nav.handle_key(key(KeyCode::Char('3')), Page::Dashboard),
            Some(NavAction::Navigate(Page::Table))
        );
    }

    #[test]
    fn renavigating_current_page_is_not_suppressed() {
        let mut nav = PageNavigator::new();
        assert_eq!(
            nav.handle_key(key(KeyCode::Char('1')), Page::Dashboard),
            Some(NavAction::Navigate(Page::Dashboard))
        );
    }

    #[test]
    fn tab_cycles_from_current() {
        let mut nav = PageNavigator::new();
        assert_eq!(
            nav.handle_key(key(KeyCode::Tab), Page::Table),
            Some(NavAction::Navigate(Page::Drafting))
        );
        assert_eq!(
            nav.handle_key(key(KeyCode::BackTab), Page::Table),
            Some(NavAction::Navigate(Page::Timeline))
        );
    }

    #[test]
    fn toggle_never_navigates() {
        let mut nav = PageNavigator::new();
        assert_eq!(
            nav.handle_key(key(KeyCode::Char('m')), Page::Dashboard),
            Some(NavAction::MenuUpdated)
        );
        assert!(nav.menu_expanded());
    }

    #[test]
    fn menu_keys_ignored_while_collapsed() {
        let mut nav = PageNavigator::new();
        assert_eq!(nav.handle_key(key(KeyCode::Char('j')), Page::Dashboard), None);
        assert_eq!(nav.handle_key(key(KeyCode::Enter), Page::Dashboard), None);
    }

    #[test]
    fn menu_selection_keeps_menu_expanded() {
        let mut nav = PageNavigator::new();
        nav.toggle_menu();
        nav.handle_key(key(KeyCode::Char('j')), Page::Dashboard);
        let action = nav.handle_key(key(KeyCode::Enter), Page::Dashboard);
        assert_eq!(action, Some(NavAction::Navigate(Page::Timeline)));
        assert!(nav.menu_expanded());
    }

    #[test]
    fn menu_cursor_clamps_at_both_ends() {
        let mut nav = PageNavigator::new();
        nav.toggle_menu();
        nav.handle_key(key(KeyCode::Char('k')), Page::Dashboard);
        assert_eq!(nav.menu_cursor(), 0);
        for _ in 0..10 {
            nav.handle_key(key(KeyCode::Char('j')), Page::Dashboard);
        }
        assert_eq!(nav.menu_cursor(), PAGE_COUNT - 1);
    }

    proptest! {
        #[test]
        fn toggle_parity(n in 0usize..64) {
            let mut nav = PageNavigator::new();
            for _ in 0..n {
                nav.toggle_menu();
            }
            prop_assert_eq!(nav.menu_expanded(), n % 2 == 1);
        }
    }
}
