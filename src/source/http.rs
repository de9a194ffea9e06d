//! Attendee source backed by the event API over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::attendee::AttendeePage;
use crate::domain::types::EventId;
use crate::dto::api::AttendeeQuery;
use crate::source::AttendeeSource;
use crate::source::errors::{SourceError, SourceResult};

/// Issues `GET {base_url}/events/{event_id}/attendees` for every query.
///
/// The base URL is stored without a trailing slash.
#[derive(Clone, Debug)]
pub struct HttpAttendeeSource {
    base_url: String,
    event_id: EventId,
    client: Client,
}

impl HttpAttendeeSource {
    /// Builds a source with its own pooled HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Config`] when the HTTP client cannot be built.
    pub fn new(
        mut base_url: String,
        event_id: EventId,
        request_timeout: Duration,
    ) -> SourceResult<Self> {
        let client = Client::builder()
            .connect_timeout(request_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|err| SourceError::Config(err.to_string()))?;
        let trimmed_len = base_url.trim_end_matches('/').len();
        base_url.truncate(trimmed_len);
        Ok(Self {
            base_url,
            event_id,
            client,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/events/{}/attendees", self.base_url, self.event_id)
    }
}

#[async_trait]
impl AttendeeSource for HttpAttendeeSource {
    async fn fetch_attendees(&self, query: &AttendeeQuery) -> SourceResult<AttendeePage> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&query.pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let page = serde_json::from_slice::<AttendeePage>(&body)?;
        log::debug!(
            "Fetched {} of {} attendees (pageIndex={})",
            page.attendees.len(),
            page.total,
            query.page_index
        );
        Ok(page)
    }
}
