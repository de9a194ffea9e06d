//! Search and pagination state machine behind the attendee table.
//!
//! The state lives in the address bar (`search`, `page`), so a listing can be
//! shared by link. [`view::DirectoryView`] keeps it in sync with a
//! [`location::History`], issues fenced listing requests and projects the
//! result into render data.

pub mod fence;
pub mod location;
pub mod pager;
pub mod state;
pub mod view;
