//! Wire types for the attendee listing API and the JSON endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::attendee::Attendee;
use crate::domain::types::PageNumber;

/// Query string sent to `GET /events/{event_id}/attendees`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeQuery {
    /// Zero-based page index.
    pub page_index: usize,
    /// Search text; omitted from the request when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl AttendeeQuery {
    pub fn new(page: PageNumber, search: &str) -> Self {
        Self {
            page_index: page.index(),
            query: (!search.is_empty()).then(|| search.to_string()),
        }
    }

    /// Query parameters in the order they are sent.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("pageIndex", self.page_index.to_string())];
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        pairs
    }
}

/// Query parameters accepted by the `/api/v1/attendees` endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct AttendeesParams {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Page number as typed in the address bar; invalid values mean page 1.
    pub page: Option<String>,
}

/// Result payload returned by [`crate::services::api::list_attendees`].
#[derive(Debug, Serialize)]
pub struct AttendeesResponse {
    /// Attendees on the requested page.
    pub attendees: Vec<Attendee>,
    /// Total number of attendees matching the search.
    pub total: usize,
    /// Requested one-based page.
    pub page: usize,
    /// Number of pages for `total`.
    pub total_pages: usize,
}
