use chrono::{DateTime, Utc};

use crate::directory::location::{Location, MemoryHistory};
use crate::directory::view::DirectoryView;
use crate::dto::main::IndexPageData;
use crate::i18n::Locale;
use crate::source::AttendeeSource;

/// Loads the attendee table for the main index page.
///
/// `location` is the address the page was requested at. A failed listing is
/// logged and renders as an empty table.
pub async fn load_index_page<S>(
    source: &S,
    location: Location,
    locale: Locale,
    now: DateTime<Utc>,
) -> IndexPageData
where
    S: AttendeeSource + ?Sized,
{
    let mut view = DirectoryView::mount(location, MemoryHistory::new());
    view.refresh(source).await;
    view.render(locale, now)
}
