//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., one-based page numbers,
//! well-formed event identifiers) so that once a value reaches the directory
//! layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided page number is zero.
    #[error("page must be greater than zero")]
    NonPositivePage,
    /// Provided value is not a number.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    /// Provided uuid failed format validation.
    #[error("invalid uuid value")]
    InvalidUuid,
}

/// One-based page number as shown in the UI and the address bar.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    /// The first page.
    pub const FIRST: PageNumber = PageNumber(NonZeroUsize::MIN);

    /// Creates a page number ensuring it is greater than zero.
    pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(TypeConstraintError::NonPositivePage)
    }

    /// Returns the raw one-based value.
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Zero-based index used on the wire (`pageIndex`).
    pub const fn index(self) -> usize {
        self.0.get() - 1
    }

    /// Page immediately after this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Page immediately before this one, staying on the first page.
    pub fn previous(self) -> Self {
        Self::new(self.get() - 1).unwrap_or(Self::FIRST)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Display for PageNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for PageNumber {
    type Error = TypeConstraintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageNumber> for usize {
    fn from(value: PageNumber) -> Self {
        value.get()
    }
}

impl FromStr for PageNumber {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<usize>()
            .map_err(|_| TypeConstraintError::InvalidNumber(trimmed.to_string()))?;
        Self::new(value)
    }
}

/// Identifier of the event whose attendees are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(Uuid);

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| TypeConstraintError::InvalidUuid)
    }
}

/// Opaque attendee identifier, displayed verbatim.
///
/// The listing API may send it either as a JSON string or as a number; both
/// are kept in their textual form.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct AttendeeId(String);

impl AttendeeId {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AttendeeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for AttendeeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}
