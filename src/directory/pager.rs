use serde::{Deserialize, Serialize};

use crate::domain::types::PageNumber;

/// The four pager controls shown under the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagerAction {
    First,
    Previous,
    Next,
    Last,
}

impl PagerAction {
    pub const ALL: [PagerAction; 4] = [
        PagerAction::First,
        PagerAction::Previous,
        PagerAction::Next,
        PagerAction::Last,
    ];
}

/// Pager position: the current page against the number of pages available.
///
/// Targets are never validated against `total_pages`; the only guard is the
/// disabled state of the triggering control. Page 0 does not exist, so
/// `Last` with no pages lands on page 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page: PageNumber,
    total_pages: usize,
}

impl Pager {
    pub fn new(page: PageNumber, total_pages: usize) -> Self {
        Self { page, total_pages }
    }

    pub fn page(&self) -> PageNumber {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn is_disabled(&self, action: PagerAction) -> bool {
        match action {
            PagerAction::First | PagerAction::Previous => self.page == PageNumber::FIRST,
            PagerAction::Next | PagerAction::Last => self.page.get() == self.total_pages,
        }
    }

    /// Page the action leads to, whether or not its control is enabled.
    pub fn target(&self, action: PagerAction) -> PageNumber {
        match action {
            PagerAction::First => PageNumber::FIRST,
            PagerAction::Previous => self.page.previous(),
            PagerAction::Next => self.page.next(),
            PagerAction::Last => PageNumber::new(self.total_pages).unwrap_or_default(),
        }
    }

    /// Target page of an enabled action; `None` when the control is disabled.
    pub fn apply(&self, action: PagerAction) -> Option<PageNumber> {
        (!self.is_disabled(action)).then(|| self.target(action))
    }
}
