//! Catalog Service Module
//!
//! Music catalog of albums and artists. Services reach the relational store
//! only through a generic repository + unit-of-work layer and report every
//! album outcome in a uniform response envelope.

// Public exports
pub mod contract;
pub use contract::{
    client::CatalogApi, error::CatalogError, Album, Artist, Envelope, ErrorKind, Genre, NewAlbum,
    NewArtist, Status,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::CatalogServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
