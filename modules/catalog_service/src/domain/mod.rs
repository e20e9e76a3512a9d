//! Domain layer - business logic and services

pub mod album_service;
pub mod artist_service;
pub mod repository;
pub mod unit_of_work;
pub mod validation;

pub use album_service::AlbumService;
pub use artist_service::ArtistService;
pub use repository::{
    AlbumFilter, AlbumInclude, AlbumOrder, ArtistFilter, ArtistOrder, CatalogEntity, NoInclude,
    Query, Repository,
};
pub use unit_of_work::{UnitOfWork, UnitOfWorkFactory};
pub use validation::AlbumRules;
