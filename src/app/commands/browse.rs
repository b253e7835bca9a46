//! Navigation menu for the interactive browser.

use std::fmt;

use crate::app::SearchView;

/// Entry in the browse menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Previous(usize),
    Page(usize),
    Next(usize),
    NewSearch,
    Quit,
}

impl NavAction {
    /// Page this action moves to, if any.
    pub fn target_page(&self) -> Option<usize> {
        match self {
            NavAction::Previous(page) | NavAction::Page(page) | NavAction::Next(page) => {
                Some(*page)
            }
            NavAction::NewSearch | NavAction::Quit => None,
        }
    }
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavAction::Previous(_) => write!(f, "‹ Previous"),
            NavAction::Page(page) => write!(f, "Page {page}"),
            NavAction::Next(_) => write!(f, "Next ›"),
            NavAction::NewSearch => write!(f, "New search"),
            NavAction::Quit => write!(f, "Quit"),
        }
    }
}

/// Actions available for `view`. Disabled pagination controls and the current page are left out.
pub fn nav_actions(view: &SearchView<'_>) -> Vec<NavAction> {
    let mut actions = Vec::new();
    if let Some(nav) = &view.pagination {
        if let Some(page) = nav.previous {
            actions.push(NavAction::Previous(page));
        }
        actions.extend(nav.pages().filter(|page| *page != nav.current).map(NavAction::Page));
        if let Some(page) = nav.next {
            actions.push(NavAction::Next(page));
        }
    }
    actions.push(NavAction::NewSearch);
    actions.push(NavAction::Quit);
    actions
}
