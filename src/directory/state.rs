//! View state and its projection to and from the address bar.

use serde::Serialize;

use crate::directory::location::Location;
use crate::domain::types::PageNumber;
use crate::dto::api::AttendeeQuery;

/// Number of attendees the listing API returns per page.
pub const PAGE_SIZE: usize = 10;

/// Query parameter holding the search text.
pub const SEARCH_PARAM: &str = "search";
/// Query parameter holding the one-based page number.
pub const PAGE_PARAM: &str = "page";

/// Number of pages needed to show `total` attendees. Zero when there are none.
pub fn total_pages(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Search text and current page: everything needed to reproduce a listing
/// from a shared link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryState {
    pub search: String,
    pub page: PageNumber,
}

impl DirectoryState {
    pub fn new(search: impl Into<String>, page: PageNumber) -> Self {
        Self {
            search: search.into(),
            page,
        }
    }

    /// Reads `search` and `page` from a location.
    ///
    /// Missing parameters fall back to `""` and page `1`; so does a `page`
    /// that is not a positive integer.
    pub fn from_location(location: &Location) -> Self {
        let search = location.get(SEARCH_PARAM).unwrap_or_default().to_string();
        let page = location
            .get(PAGE_PARAM)
            .and_then(|raw| raw.parse::<PageNumber>().ok())
            .unwrap_or_default();

        Self { search, page }
    }

    /// Writes both parameters into `location`, leaving other parameters alone.
    pub fn write_to(&self, location: &mut Location) {
        location.set(SEARCH_PARAM, self.search.as_str());
        location.set(PAGE_PARAM, self.page.to_string());
    }

    /// State after the search text changed: the page always goes back to 1.
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: PageNumber::FIRST,
        }
    }

    /// State after a pager action: the search text is kept.
    pub fn with_page(&self, page: PageNumber) -> Self {
        Self {
            search: self.search.clone(),
            page,
        }
    }

    /// Listing request for this state.
    pub fn attendee_query(&self) -> AttendeeQuery {
        AttendeeQuery::new(self.page, &self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(value: usize) -> PageNumber {
        PageNumber::new(value).unwrap()
    }

    fn read(query: &str) -> DirectoryState {
        DirectoryState::from_location(&Location::from_parts("/", query))
    }

    #[test]
    fn reads_state_from_query() {
        let state = read("search=ana&page=2");

        assert_eq!(state, DirectoryState::new("ana", page(2)));
    }

    #[test]
    fn missing_parameters_use_defaults() {
        assert_eq!(read(""), DirectoryState::default());
        assert_eq!(
            read("").page,
            PageNumber::FIRST
        );
        assert_eq!(read("").search, "");
    }

    #[test]
    fn invalid_page_falls_back_to_first() {
        for query in ["page=abc", "page=0", "page=-3", "page="] {
            assert_eq!(read(query).page, PageNumber::FIRST);
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(25), 3);
    }

    #[test]
    fn changing_search_resets_page() {
        let state = DirectoryState::new("ana", page(4));

        assert_eq!(state.with_search("bruno"), DirectoryState::new("bruno", page(1)));
    }

    #[test]
    fn paging_keeps_the_search() {
        let state = DirectoryState::new("ana", page(1));

        assert_eq!(state.with_page(page(3)), DirectoryState::new("ana", page(3)));
    }

    #[test]
    fn written_state_reads_back_from_the_location() {
        let state = DirectoryState::new("maria silva", page(3));
        let mut location = Location::default();

        state.write_to(&mut location);

        assert_eq!(location.query(), "search=maria+silva&page=3");
        assert_eq!(DirectoryState::from_location(&location), state);
    }

    #[test]
    fn writing_keeps_unrelated_parameters() {
        let mut location = Location::parse("/?lang=pt&page=9");

        DirectoryState::new("", page(2)).write_to(&mut location);

        assert_eq!(location.to_string(), "/?lang=pt&page=2&search=");
    }
}
