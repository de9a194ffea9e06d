//! Mock implementations of the directory seams for isolating tests.

use async_trait::async_trait;
use mockall::mock;

use crate::directory::location::{History, Location};
use crate::domain::attendee::AttendeePage;
use crate::dto::api::AttendeeQuery;
use crate::source::AttendeeSource;
use crate::source::errors::SourceResult;

mock! {
    pub History {}

    impl History for History {
        fn push_state(&mut self, location: &Location);
    }
}

mock! {
    pub AttendeeSource {}

    #[async_trait]
    impl AttendeeSource for AttendeeSource {
        async fn fetch_attendees(&self, query: &AttendeeQuery) -> SourceResult<AttendeePage>;
    }
}
