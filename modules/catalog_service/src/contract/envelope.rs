//! Uniform response envelope returned by the album service

use super::error::{CatalogError, ErrorKind};

/// Outcome status carried by an [`Envelope`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
    InternalServerError,
}

impl Status {
    /// Fixed human-readable message for this status
    pub fn message(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::InternalServerError => "Internal Server Error",
        }
    }
}

/// Status, message and entity list of one service call.
///
/// Immutable once built. A failed envelope never carries entities; its
/// [`cause`](Envelope::cause) keeps the error that produced it so callers can
/// log or assert on it without exposing it over the wire.
#[derive(Debug)]
pub struct Envelope<T> {
    status: Status,
    entities: Vec<T>,
    cause: Option<CatalogError>,
}

impl<T> Envelope<T> {
    pub fn ok(entities: Vec<T>) -> Self {
        Self {
            status: Status::Ok,
            entities,
            cause: None,
        }
    }

    /// Envelope for a failed call, status derived from the error
    pub fn failure(cause: CatalogError) -> Self {
        Self {
            status: cause.status(),
            entities: Vec::new(),
            cause: Some(cause),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.status.message()
    }

    pub fn total_elements(&self) -> usize {
        self.entities.len()
    }

    pub fn entities(&self) -> &[T] {
        &self.entities
    }

    pub fn into_entities(self) -> Vec<T> {
        self.entities
    }

    pub fn cause(&self) -> Option<&CatalogError> {
        self.cause.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

}

/// A missing resource is not a failure: it becomes an empty `Ok` envelope.
impl<T> From<Result<Vec<T>, CatalogError>> for Envelope<T> {
    fn from(result: Result<Vec<T>, CatalogError>) -> Self {
        match result {
            Ok(entities) => Self::ok(entities),
            Err(err) if err.kind() == ErrorKind::NotFound => Self::ok(Vec::new()),
            Err(err) => Self::failure(err),
        }
    }
}
