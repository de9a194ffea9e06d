//! User-facing strings and relative timestamps.
//!
//! Relative phrases follow the usual "time ago" buckets: seconds up to 44,
//! then a minute, minutes up to 44, an hour, hours up to 21, a day, days up to
//! 25, a month, months up to 10, a year and finally years. Counts are rounded
//! to the nearest unit and months are measured on the calendar.

use chrono::{DateTime, Datelike, Months, Utc};
use serde::{Deserialize, Serialize};

/// Languages the directory can be shown in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR", alias = "pt-br", alias = "pt")]
    PtBr,
    #[serde(rename = "en", alias = "en-US")]
    En,
}

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::En => "en",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::PtBr => &PT_BR,
            Locale::En => &EN,
        }
    }

    /// Relative phrase for `instant` as seen from `now` ("há 3 dias").
    pub fn relative_time(self, instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
        relative_time(self.messages(), instant, now)
    }
}

/// Message catalog for one locale.
#[derive(Debug, Serialize)]
pub struct Messages {
    pub nav_events: &'static str,
    pub nav_attendees: &'static str,
    pub title: &'static str,
    pub search_placeholder: &'static str,
    pub column_code: &'static str,
    pub column_attendee: &'static str,
    pub column_registered: &'static str,
    pub column_checked_in: &'static str,
    pub not_checked_in: &'static str,
    #[serde(skip)]
    showing: &'static str,
    #[serde(skip)]
    page_of: &'static str,
    #[serde(skip)]
    units: Units,
}

impl Messages {
    /// Footer count, e.g. "Mostrando 10 de 25 itens".
    pub fn showing(&self, shown: usize, total: usize) -> String {
        self.showing
            .replacen("{shown}", &shown.to_string(), 1)
            .replacen("{total}", &total.to_string(), 1)
    }

    /// Pager position, e.g. "Página 1 de 3".
    pub fn page_of(&self, page: usize, total_pages: usize) -> String {
        self.page_of
            .replacen("{page}", &page.to_string(), 1)
            .replacen("{total}", &total_pages.to_string(), 1)
    }
}

#[derive(Debug)]
struct Units {
    future: &'static str,
    past: &'static str,
    seconds: &'static str,
    minute: &'static str,
    minutes: &'static str,
    hour: &'static str,
    hours: &'static str,
    day: &'static str,
    days: &'static str,
    month: &'static str,
    months: &'static str,
    year: &'static str,
    years: &'static str,
}

static PT_BR: Messages = Messages {
    nav_events: "Eventos",
    nav_attendees: "Participantes",
    title: "Participantes",
    search_placeholder: "Buscar participante...",
    column_code: "Código",
    column_attendee: "Participante",
    column_registered: "Data de inscrição",
    column_checked_in: "Data do check-in",
    not_checked_in: "Não fez check-in",
    showing: "Mostrando {shown} de {total} itens",
    page_of: "Página {page} de {total}",
    units: Units {
        future: "em %s",
        past: "há %s",
        seconds: "poucos segundos",
        minute: "um minuto",
        minutes: "%d minutos",
        hour: "uma hora",
        hours: "%d horas",
        day: "um dia",
        days: "%d dias",
        month: "um mês",
        months: "%d meses",
        year: "um ano",
        years: "%d anos",
    },
};

static EN: Messages = Messages {
    nav_events: "Events",
    nav_attendees: "Attendees",
    title: "Attendees",
    search_placeholder: "Search attendee...",
    column_code: "Code",
    column_attendee: "Attendee",
    column_registered: "Registered",
    column_checked_in: "Checked in",
    not_checked_in: "Not checked in",
    showing: "Showing {shown} of {total} items",
    page_of: "Page {page} of {total}",
    units: Units {
        future: "in %s",
        past: "%s ago",
        seconds: "a few seconds",
        minute: "a minute",
        minutes: "%d minutes",
        hour: "an hour",
        hours: "%d hours",
        day: "a day",
        days: "%d days",
        month: "a month",
        months: "%d months",
        year: "a year",
        years: "%d years",
    },
};

fn relative_time(messages: &Messages, instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let units = &messages.units;
    let delta = instant.signed_duration_since(now);
    let seconds = delta.num_milliseconds() as f64 / 1000.0;
    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;
    let months = month_diff(instant, now);
    let years = months / 12.0;

    let round = |value: f64| value.abs().round() as u64;

    let phrase = if round(seconds) <= 44 {
        units.seconds.to_string()
    } else if round(seconds) <= 89 {
        units.minute.to_string()
    } else if round(minutes) <= 44 {
        count(units.minute, units.minutes, round(minutes))
    } else if round(minutes) <= 89 {
        units.hour.to_string()
    } else if round(hours) <= 21 {
        count(units.hour, units.hours, round(hours))
    } else if round(hours) <= 35 {
        units.day.to_string()
    } else if round(days) <= 25 {
        count(units.day, units.days, round(days))
    } else if round(days) <= 45 {
        units.month.to_string()
    } else if round(months) <= 10 {
        count(units.month, units.months, round(months))
    } else if round(months) <= 17 {
        units.year.to_string()
    } else {
        count(units.year, units.years, round(years))
    };

    // Everything not strictly ahead of `now` reads as the past.
    let wrapper = if delta.num_milliseconds() > 0 {
        units.future
    } else {
        units.past
    };
    wrapper.replacen("%s", &phrase, 1)
}

/// Singular form for a count of one, plural template otherwise.
fn count(one: &str, many: &str, value: u64) -> String {
    if value <= 1 {
        one.to_string()
    } else {
        many.replacen("%d", &value.to_string(), 1)
    }
}

/// Calendar months from `b` to `a`, with the partial month as a fraction.
fn month_diff(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    if a < b {
        return -month_diff(b, a);
    }
    let mut whole = (a.year() - b.year()) * 12 + a.month() as i32 - b.month() as i32;
    let mut anchor = add_months(b, whole);
    if anchor > a {
        whole -= 1;
        anchor = add_months(b, whole);
    }
    let next = add_months(b, whole + 1);
    let span = next.signed_duration_since(anchor).num_milliseconds() as f64;
    let elapsed = a.signed_duration_since(anchor).num_milliseconds() as f64;
    if span <= 0.0 {
        return f64::from(whole);
    }
    f64::from(whole) + elapsed / span
}

fn add_months(instant: DateTime<Utc>, months: i32) -> DateTime<Utc> {
    let shifted = if months >= 0 {
        instant.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        instant.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(instant)
}
