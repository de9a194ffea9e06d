//! DTO modules that bridge the directory with templates and APIs.

pub mod api;
pub mod main;
