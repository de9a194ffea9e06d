//! Domain entities exposed by the attendee listing.

pub mod attendee;
pub mod types;
