//! Where attendee pages come from.

use async_trait::async_trait;

use crate::domain::attendee::AttendeePage;
use crate::dto::api::AttendeeQuery;
use crate::source::errors::SourceResult;

pub mod errors;
#[cfg(feature = "server")]
pub mod http;

/// Runs a listing query against the attendee backend.
#[async_trait]
pub trait AttendeeSource: Send + Sync {
    /// Fetches one page of attendees.
    ///
    /// # Errors
    ///
    /// Returns [`errors::SourceError`] when the backend cannot be reached or
    /// answers with something other than a listing.
    async fn fetch_attendees(&self, query: &AttendeeQuery) -> SourceResult<AttendeePage>;
}
