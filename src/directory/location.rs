//! Address-bar model and the history seam the directory writes through.

use std::fmt::{Display, Formatter};

use url::{Url, form_urlencoded};

/// Origin relative input is resolved against. Never shows up in a location.
const RESOLVE_BASE: &str = "http://localhost/";

/// Path, query parameters and fragment of the page currently shown.
///
/// Query parameters keep their original order. Lookups return the first
/// value of a key, and [`Location::set`] behaves like `URLSearchParams.set`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    path: String,
    params: Vec<(String, String)>,
    fragment: Option<String>,
}

impl Location {
    /// Parses an absolute URL, a protocol-relative URL or a path with
    /// optional query and fragment.
    ///
    /// Input is resolved against a fixed origin, so scheme and authority are
    /// dropped and only the part the directory reads and writes is kept.
    /// Input the URL parser rejects yields the root location.
    pub fn parse(input: &str) -> Self {
        let resolved = Url::parse(RESOLVE_BASE)
            .and_then(|base| Url::options().base_url(Some(&base)).parse(input));
        let url = match resolved {
            Ok(url) => url,
            Err(err) => {
                log::debug!("Ignoring unparsable location '{input}': {err}");
                return Self::from_parts("/", "");
            }
        };

        Self {
            path: if url.path().is_empty() { "/" } else { url.path() }.to_string(),
            params: url.query_pairs().into_owned().collect(),
            fragment: url.fragment().map(str::to_string),
        }
    }

    /// Builds a location from its path and raw (still encoded) query string.
    pub fn from_parts(path: &str, query: &str) -> Self {
        Self {
            path: if path.is_empty() { "/" } else { path }.to_string(),
            params: parse_query(query),
            fragment: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every query parameter, in address order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn has(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    /// Replaces the first occurrence of `key`, drops any later ones and
    /// appends the parameter when it was absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let mut replaced = false;
        self.params.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if replaced {
                return false;
            }
            *v = value.clone();
            replaced = true;
            true
        });
        if !replaced {
            self.params.push((key.to_string(), value));
        }
    }

    /// Encoded query string without the leading `?`.
    pub fn query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)?;
        if !self.params.is_empty() {
            write!(f, "?{}", self.query())?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

/// Session history the directory records its state changes into.
///
/// Every write is a non-navigating update: nothing is reloaded, the entry
/// only reflects the new address.
pub trait History {
    fn push_state(&mut self, location: &Location);
}

/// History kept in memory, newest entry last.
#[derive(Clone, Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<Location>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    pub fn current(&self) -> Option<&Location> {
        self.entries.last()
    }
}

impl History for MemoryHistory {
    fn push_state(&mut self, location: &Location) {
        self.entries.push(location.clone());
    }
}

impl<H: History + ?Sized> History for &mut H {
    fn push_state(&mut self, location: &Location) {
        (**self).push_state(location);
    }
}
