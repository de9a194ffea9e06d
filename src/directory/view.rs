//! The attendee directory view: state, address-bar sync, fetches and rendering.

use chrono::{DateTime, Utc};

use crate::directory::fence::{RequestFence, Ticket};
use crate::directory::location::{History, Location};
use crate::directory::pager::{Pager, PagerAction};
use crate::directory::state::{DirectoryState, PAGE_PARAM, SEARCH_PARAM, total_pages};
use crate::domain::attendee::{Attendee, AttendeePage};
use crate::domain::types::PageNumber;
use crate::dto::api::AttendeeQuery;
use crate::dto::main::{AttendeeRow, FormField, IndexPageData, PagerControl};
use crate::i18n::Locale;
use crate::source::AttendeeSource;
use crate::source::errors::SourceResult;

/// A listing request that has been issued but not yet answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingFetch {
    ticket: Ticket,
    query: AttendeeQuery,
}

impl PendingFetch {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn query(&self) -> &AttendeeQuery {
        &self.query
    }

    /// Sends the request. The outcome still has to be handed back to
    /// [`DirectoryView::apply`].
    pub async fn send<S>(self, source: &S) -> FetchOutcome
    where
        S: AttendeeSource + ?Sized,
    {
        let result = source.fetch_attendees(&self.query).await;
        FetchOutcome {
            ticket: self.ticket,
            result,
        }
    }
}

/// Answer to a [`PendingFetch`].
#[derive(Debug)]
pub struct FetchOutcome {
    pub ticket: Ticket,
    pub result: SourceResult<AttendeePage>,
}

/// Owns the search text, the current page and the last accepted listing.
///
/// Every state change is mirrored into the location and recorded in the
/// history, and issues a new listing request. Responses are fenced: only the
/// answer to the most recently issued request replaces the table.
pub struct DirectoryView<H> {
    location: Location,
    history: H,
    state: DirectoryState,
    attendees: Vec<Attendee>,
    total: usize,
    fence: RequestFence,
}

impl<H: History> DirectoryView<H> {
    /// Builds the view from the address it was opened at.
    pub fn mount(location: Location, history: H) -> Self {
        let state = DirectoryState::from_location(&location);
        Self {
            location,
            history,
            state,
            attendees: Vec::new(),
            total: 0,
            fence: RequestFence::new(),
        }
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    pub fn search(&self) -> &str {
        &self.state.search
    }

    pub fn page(&self) -> PageNumber {
        self.state.page
    }

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total)
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.state.page, self.total_pages())
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Issues a request for the current state.
    pub fn begin_fetch(&self) -> PendingFetch {
        PendingFetch {
            ticket: self.fence.issue(),
            query: self.state.attendee_query(),
        }
    }

    /// Replaces the search text and goes back to page 1.
    ///
    /// The location is written twice, first `search` and then `page=1`, each
    /// write recorded as its own history entry.
    pub fn set_search(&mut self, search: impl Into<String>) -> PendingFetch {
        let next = self.state.with_search(search);
        self.location.set(SEARCH_PARAM, next.search.as_str());
        self.history.push_state(&self.location);
        self.location.set(PAGE_PARAM, next.page.to_string());
        self.history.push_state(&self.location);
        self.state = next;
        self.begin_fetch()
    }

    /// Runs a pager action. Disabled actions change nothing and return `None`.
    pub fn navigate(&mut self, action: PagerAction) -> Option<PendingFetch> {
        let target = self.pager().apply(action)?;
        let next = self.state.with_page(target);
        self.location.set(PAGE_PARAM, next.page.to_string());
        self.history.push_state(&self.location);
        self.state = next;
        Some(self.begin_fetch())
    }

    /// Accepts a fetch outcome if it answers the latest request.
    ///
    /// Returns `true` when the table was replaced. Stale answers and failures
    /// leave the current rows untouched.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if !self.fence.is_current(outcome.ticket) {
            log::debug!(
                "Discarding stale attendee response #{} (latest is #{})",
                outcome.ticket.get(),
                self.fence.latest().map_or(0, Ticket::get)
            );
            return false;
        }

        match outcome.result {
            Ok(page) => {
                self.attendees = page.attendees;
                self.total = page.total;
                true
            }
            Err(err) => {
                log::warn!("Failed to fetch attendees: {err}");
                false
            }
        }
    }

    /// Fetches the current state and applies the answer.
    pub async fn refresh<S>(&mut self, source: &S) -> bool
    where
        S: AttendeeSource + ?Sized,
    {
        let outcome = self.begin_fetch().send(source).await;
        self.apply(outcome)
    }

    /// Projects the view into the data the index template renders.
    pub fn render(&self, locale: Locale, now: DateTime<Utc>) -> IndexPageData {
        let messages = locale.messages();
        let pager = self.pager();

        let rows = self
            .attendees
            .iter()
            .map(|attendee| AttendeeRow {
                id: attendee.id.to_string(),
                name: attendee.name.clone(),
                email: attendee.email.clone(),
                registered: locale.relative_time(attendee.created_at, now),
                checked_in: match attendee.checked_in_at {
                    Some(checked_in_at) => locale.relative_time(checked_in_at, now),
                    None => messages.not_checked_in.to_string(),
                },
                is_checked_in: attendee.is_checked_in(),
            })
            .collect();

        let search_target = self.search_target();
        let form_fields = search_target
            .params()
            .map(|(name, value)| FormField {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect();

        let controls = PagerAction::ALL
            .into_iter()
            .map(|action| {
                let disabled = pager.is_disabled(action);
                PagerControl {
                    action,
                    disabled,
                    href: (!disabled).then(|| self.href_for(pager.target(action))),
                }
            })
            .collect();

        IndexPageData {
            search: self.state.search.clone(),
            page: self.state.page.get(),
            total: self.total,
            total_pages: pager.total_pages(),
            rows,
            showing: messages.showing(self.attendees.len(), self.total),
            page_label: messages.page_of(self.state.page.get(), pager.total_pages()),
            controls,
            form_action: search_target.path().to_string(),
            form_fields,
        }
    }

    /// Address a search submission lands on: the current parameters with
    /// `search` kept and `page` reset, exactly what [`Self::set_search`] writes.
    fn search_target(&self) -> Location {
        let mut target = self.location.clone();
        self.state
            .with_search(self.state.search.as_str())
            .write_to(&mut target);
        target
    }

    fn href_for(&self, page: PageNumber) -> String {
        let mut location = self.location.clone();
        location.set(PAGE_PARAM, page.to_string());
        location.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::directory::location::MemoryHistory;
    use crate::domain::types::AttendeeId;
    use crate::mock::{MockAttendeeSource, MockHistory};
    use crate::source::errors::SourceError;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 10, 12, 0, 0).unwrap()
    }

    fn attendee(id: &str, checked_in: Option<DateTime<Utc>>) -> Attendee {
        Attendee {
            id: AttendeeId::new(id),
            name: format!("Attendee {id}"),
            email: format!("{id}@example.com"),
            created_at: now() - Duration::days(3),
            checked_in_at: checked_in,
        }
    }

    fn listing(total: usize, ids: &[&str]) -> AttendeePage {
        AttendeePage {
            attendees: ids.iter().map(|id| attendee(id, None)).collect(),
            total,
        }
    }

    fn mounted(url: &str) -> DirectoryView<MemoryHistory> {
        DirectoryView::mount(Location::parse(url), MemoryHistory::new())
    }

    #[test]
    fn mount_reads_state_from_the_address() {
        let view = mounted("http://localhost:5173/?search=ana&page=2");

        assert_eq!(view.search(), "ana");
        assert_eq!(view.page().get(), 2);
        assert!(view.history().entries().is_empty());
    }

    #[test]
    fn mount_without_parameters_uses_defaults() {
        let view = mounted("http://localhost:5173/");

        assert_eq!(view.search(), "");
        assert_eq!(view.page(), PageNumber::FIRST);
    }

    #[test]
    fn search_writes_search_then_page() {
        let mut history = MockHistory::new();
        let mut seq = mockall::Sequence::new();
        history
            .expect_push_state()
            .withf(|l: &Location| l.get("search") == Some("bruno") && l.get("page") == Some("4"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        history
            .expect_push_state()
            .withf(|l: &Location| l.get("search") == Some("bruno") && l.get("page") == Some("1"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut view = DirectoryView::mount(Location::parse("/?search=ana&page=4"), history);
        let pending = view.set_search("bruno");

        assert_eq!(view.state(), &DirectoryState::new("bruno", PageNumber::FIRST));
        assert_eq!(pending.query().page_index, 0);
        assert_eq!(pending.query().query.as_deref(), Some("bruno"));
    }

    #[test]
    fn pager_action_writes_a_single_entry() {
        let mut view = mounted("/?page=1");
        let initial = view.begin_fetch();
        view.apply(FetchOutcome {
            ticket: initial.ticket(),
            result: Ok(listing(25, &["a"])),
        });

        let pending = view.navigate(PagerAction::Last).expect("last is enabled");

        assert_eq!(view.total_pages(), 3);
        assert_eq!(view.page().get(), 3);
        assert_eq!(view.location().get("page"), Some("3"));
        assert_eq!(view.history().entries().len(), 1);
        assert_eq!(pending.query().page_index, 2);
    }

    #[test]
    fn disabled_action_is_a_no_op() {
        let mut view = mounted("/?page=1");

        assert!(view.navigate(PagerAction::Previous).is_none());
        assert!(view.navigate(PagerAction::First).is_none());
        assert_eq!(view.page(), PageNumber::FIRST);
        assert!(view.history().entries().is_empty());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut view = mounted("/");

        let older = view.set_search("a");
        let newer = view.set_search("an");

        assert!(view.apply(FetchOutcome {
            ticket: newer.ticket(),
            result: Ok(listing(1, &["new"])),
        }));
        assert!(!view.apply(FetchOutcome {
            ticket: older.ticket(),
            result: Ok(listing(40, &["old"])),
        }));

        assert_eq!(view.total(), 1);
        assert_eq!(view.attendees()[0].id.as_str(), "new");
    }

    #[test]
    fn failed_fetch_keeps_previous_rows() {
        let mut view = mounted("/");
        let first = view.begin_fetch();
        view.apply(FetchOutcome {
            ticket: first.ticket(),
            result: Ok(listing(12, &["a", "b"])),
        });

        let second = view.navigate(PagerAction::Next).unwrap();
        let applied = view.apply(FetchOutcome {
            ticket: second.ticket(),
            result: Err(SourceError::Status(500)),
        });

        assert!(!applied);
        assert_eq!(view.total(), 12);
        assert_eq!(view.attendees().len(), 2);
        assert_eq!(view.page().get(), 2);
    }

    #[test]
    fn shrinking_total_does_not_clamp_the_page() {
        let mut view = mounted("/?page=5");

        let pending = view.begin_fetch();
        view.apply(FetchOutcome {
            ticket: pending.ticket(),
            result: Ok(listing(12, &[])),
        });

        assert_eq!(view.page().get(), 5);
        assert_eq!(view.total_pages(), 2);
    }

    #[cfg(feature = "server")]
    #[actix_web::test]
    async fn refresh_sends_the_current_query() {
        let mut source = MockAttendeeSource::new();
        source
            .expect_fetch_attendees()
            .withf(|query: &AttendeeQuery| query.page_index == 1 && query.query.is_none())
            .times(1)
            .returning(|_| Ok(listing(15, &["k"])));

        let mut view = mounted("/?page=2");

        assert!(view.refresh(&source).await);
        assert_eq!(view.total(), 15);
        assert_eq!(view.attendees()[0].id.as_str(), "k");
    }

    #[test]
    fn renders_rows_and_footer() {
        let mut view = mounted("/?search=&page=1");
        let pending = view.begin_fetch();
        view.apply(FetchOutcome {
            ticket: pending.ticket(),
            result: Ok(AttendeePage {
                attendees: vec![
                    attendee("1", None),
                    attendee("2", Some(now() - Duration::hours(2))),
                ],
                total: 25,
            }),
        });

        let data = view.render(Locale::PtBr, now());

        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0].registered, "há 3 dias");
        assert_eq!(data.rows[0].checked_in, "Não fez check-in");
        assert!(!data.rows[0].is_checked_in);
        assert_eq!(data.rows[1].checked_in, "há 2 horas");
        assert!(data.rows[1].is_checked_in);
        assert_eq!(data.showing, "Mostrando 2 de 25 itens");
        assert_eq!(data.page_label, "Página 1 de 3");

        let first = data.control(PagerAction::First).unwrap();
        assert!(first.disabled);
        assert_eq!(first.href, None);
        let last = data.control(PagerAction::Last).unwrap();
        assert!(!last.disabled);
        assert_eq!(last.href.as_deref(), Some("/?search=&page=3"));
    }

    #[test]
    fn empty_listing_renders_without_rows() {
        let view = mounted("/");

        let data = view.render(Locale::En, now());

        assert!(data.rows.is_empty());
        assert_eq!(data.showing, "Showing 0 of 0 items");
        assert_eq!(data.page_label, "Page 1 of 0");
    }

    #[test]
    fn search_form_reproduces_the_search_change_address() {
        let view = mounted("/attendees?lang=pt&search=a&page=2");

        let data = view.render(Locale::PtBr, now());

        let fields: Vec<(&str, &str)> = data
            .form_fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
            .collect();
        assert_eq!(fields, vec![("lang", "pt"), ("search", "a"), ("page", "1")]);
        assert_eq!(data.form_action, "/attendees");

        let mut searched = mounted("/attendees?lang=pt&search=a&page=2");
        searched.set_search("a");
        let submitted = format!(
            "{}?{}",
            data.form_action,
            url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(fields)
                .finish()
        );
        assert_eq!(searched.location().to_string(), submitted);
    }

    #[test]
    fn search_form_adds_missing_parameters() {
        let view = mounted("/");

        let data = view.render(Locale::PtBr, now());

        let names: Vec<&str> = data.form_fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["search", "page"]);
        assert_eq!(data.form_action, "/");
    }
}
