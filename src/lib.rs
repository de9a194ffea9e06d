//! Attendee directory: a searchable, paginated list of event attendees.
//!
//! The [`directory`] module holds the framework-independent state machine;
//! with the `server` feature the crate also ships the Actix-web front end.

pub mod directory;
pub mod domain;
pub mod dto;
pub mod i18n;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
mod server;
#[cfg(feature = "server")]
pub mod services;
pub mod source;

#[cfg(feature = "server")]
pub use crate::server::run;
