use crate::directory::state::{DirectoryState, total_pages};
use crate::domain::types::PageNumber;
use crate::dto::api::{AttendeesParams, AttendeesResponse};
use crate::services::ServiceResult;
use crate::source::AttendeeSource;

/// Returns one page of attendees matching the optional search text.
pub async fn list_attendees<S>(
    source: &S,
    params: AttendeesParams,
) -> ServiceResult<AttendeesResponse>
where
    S: AttendeeSource + ?Sized,
{
    let page = params
        .page
        .as_deref()
        .and_then(|raw| raw.parse::<PageNumber>().ok())
        .unwrap_or_default();
    let state = DirectoryState::new(params.search.unwrap_or_default(), page);

    let listing = source
        .fetch_attendees(&state.attendee_query())
        .await
        .map_err(|err| {
            log::error!("Failed to list attendees: {err}");
            err
        })?;

    Ok(AttendeesResponse {
        total_pages: total_pages(listing.total),
        total: listing.total,
        attendees: listing.attendees,
        page: state.page.get(),
    })
}
