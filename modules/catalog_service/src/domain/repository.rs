//! Repository traits for data access
//!
//! A single generic trait covers every catalog entity. Entities describe
//! what can be asked of them through [`CatalogEntity`]; implementations are
//! in infra/storage/repositories.rs

use crate::contract::{Album, Artist, Genre, NewAlbum, NewArtist};
use anyhow::Result;
use async_trait::async_trait;

/// Capability shared by every entity a [`Repository`] can serve
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    /// Identity type
    type Id: Copy + Send + Sync + std::fmt::Display;
    /// Values needed to insert the entity before it has an identity
    type Draft: Send + Sync;
    /// Filter predicates the store can evaluate
    type Filter: Clone + Send + Sync;
    /// Orderings the store can apply
    type Order: Copy + Send + Sync;
    /// Related entities that can be eager-loaded
    type Include: Copy + Send + Sync;

    fn id(&self) -> Self::Id;
}

/// What [`Repository::get_all`] should return
///
/// The filter is applied before ordering. With no explicit order, results are
/// sorted by identity ascending.
#[derive(Clone)]
pub struct Query<E: CatalogEntity> {
    pub filter: Option<E::Filter>,
    pub order: Option<E::Order>,
    pub include: Option<E::Include>,
}

impl<E: CatalogEntity> Query<E> {
    pub fn all() -> Self {
        Self {
            filter: None,
            order: None,
            include: None,
        }
    }

    pub fn filter(mut self, filter: E::Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn order(mut self, order: E::Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn include(mut self, include: E::Include) -> Self {
        self.include = Some(include);
        self
    }
}

impl<E: CatalogEntity> Default for Query<E> {
    fn default() -> Self {
        Self::all()
    }
}

/// Generic data access over one entity type
///
/// Writes are staged in the owning unit of work's session and only become
/// durable when that unit of work is saved.
#[async_trait]
pub trait Repository<E: CatalogEntity>: Send + Sync {
    /// Find an entity by identity
    async fn find(&self, id: E::Id) -> Result<Option<E>>;

    /// List entities matching the query, never failing on an empty result
    async fn get_all(&self, query: Query<E>) -> Result<Vec<E>>;

    /// Stage an insert, returning the entity with its store-assigned identity
    async fn add(&self, draft: E::Draft) -> Result<E>;

    /// Stage a full replace of an existing entity (last write wins)
    async fn update(&self, entity: &E) -> Result<()>;
}

// ===== Album =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlbumFilter {
    /// Owning artist's name, case-insensitive exact match
    ArtistName(String),
    Genre(Genre),
    Year(i32),
    /// Inclusive range, bounds used as given
    YearBetween { from: i32, to: i32 },
}

impl AlbumFilter {
    /// Whether evaluating the filter needs the artist joined in
    pub fn needs_artist(&self) -> bool {
        matches!(self, AlbumFilter::ArtistName(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumOrder {
    IdAsc,
    IdDesc,
    NameAsc,
    YearAsc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumInclude {
    Artist,
}

impl CatalogEntity for Album {
    type Id = i32;
    type Draft = NewAlbum;
    type Filter = AlbumFilter;
    type Order = AlbumOrder;
    type Include = AlbumInclude;

    fn id(&self) -> i32 {
        self.id
    }
}

// ===== Artist =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtistFilter {
    /// Case-insensitive exact match on the name
    Name(String),
    OnTour(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistOrder {
    IdAsc,
    NameAsc,
}

/// Artists have no related entity to eager-load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoInclude {}

impl CatalogEntity for Artist {
    type Id = i32;
    type Draft = NewArtist;
    type Filter = ArtistFilter;
    type Order = ArtistOrder;
    type Include = NoInclude;

    fn id(&self) -> i32 {
        self.id
    }
}
