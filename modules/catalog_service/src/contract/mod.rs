//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models, the response envelope and
//! the native client trait. NO serde derives on models - these are pure domain types.

pub mod client;
pub mod envelope;
pub mod error;
pub mod model;

pub use client::CatalogApi;
pub use envelope::{Envelope, Status};
pub use error::{CatalogError, ErrorKind};
pub use model::{Album, Artist, Genre, NewAlbum, NewArtist, UnknownGenre};
