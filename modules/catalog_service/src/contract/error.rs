//! Contract error types for catalog service
//!
//! These errors are transport-agnostic. Every variant maps to a coarse
//! [`Status`] for callers while keeping the underlying cause for logs and tests.

use super::envelope::Status;
use rust_decimal::Decimal;

/// Coarse classification of a [`CatalogError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input rejected by a domain rule
    Validation,
    /// Requested resource does not exist
    NotFound,
    /// The store failed or rejected the operation
    Storage,
}

/// Catalog service domain errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Album references an artist that does not exist
    #[error("artist {artist_id} does not exist")]
    ArtistNotFound { artist_id: i32 },

    /// Album cost below zero
    #[error("album cost {cost} is negative")]
    NegativeCost { cost: Decimal },

    /// Release year outside the accepted window
    #[error("release year {year} is outside {min}..={max}")]
    ReleaseYearOutOfRange { year: i32, min: i32, max: i32 },

    /// Album name contains a forbidden word
    #[error("album name contains forbidden word '{word}'")]
    ForbiddenWord { word: String },

    /// Resource lookup by identity found nothing
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// Underlying store failure
    #[error("storage failure: {0:#}")]
    Storage(#[source] anyhow::Error),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ArtistNotFound { .. }
            | Self::NegativeCost { .. }
            | Self::ReleaseYearOutOfRange { .. }
            | Self::ForbiddenWord { .. } => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }

    /// Status exposed to callers
    ///
    /// A missing resource is not an error at the envelope level: it surfaces
    /// as `Ok` with an empty entity list.
    pub fn status(&self) -> Status {
        match self.kind() {
            ErrorKind::Validation => Status::BadRequest,
            ErrorKind::NotFound => Status::Ok,
            ErrorKind::Storage => Status::InternalServerError,
        }
    }

    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        Self::Storage(err)
    }
}
