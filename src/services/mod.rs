use thiserror::Error;

use crate::source::errors::SourceError;

pub mod api;
pub mod main;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Attendee service unavailable: {0}")]
    Upstream(#[from] SourceError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
