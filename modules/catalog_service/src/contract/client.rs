//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with the catalog.
//! NO HTTP - direct function calls.

use super::{
    envelope::Envelope,
    error::CatalogError,
    model::{Album, Artist, Genre, NewAlbum, NewArtist},
};
use async_trait::async_trait;

/// Catalog service API for inter-module communication
#[async_trait]
pub trait CatalogApi: Send + Sync {
    // ===== Album Operations =====

    /// Validate and persist a new album
    async fn create_album(&self, album: NewAlbum) -> Envelope<Album>;

    /// List every album, optionally with its artist attached
    async fn get_albums(&self, load_references: bool) -> Envelope<Album>;

    /// Albums whose artist name matches, ignoring case
    async fn get_albums_by_artist(&self, artist_name: &str) -> Envelope<Album>;

    async fn get_albums_by_genre(&self, genre: Genre) -> Envelope<Album>;

    async fn get_albums_by_year(&self, year: i32) -> Envelope<Album>;

    /// Albums released between both years, inclusive
    async fn get_albums_by_year_range(&self, initial_year: i32, max_year: i32)
        -> Envelope<Album>;

    async fn get_album(&self, id: i32) -> Envelope<Album>;

    /// Replace an album as given
    async fn update_album(&self, album: Album) -> Envelope<Album>;

    // ===== Artist Operations =====

    async fn create_artist(&self, artist: NewArtist) -> Result<Artist, CatalogError>;

    async fn get_artists(&self) -> Result<Vec<Artist>, CatalogError>;

    async fn get_artist(&self, id: i32) -> Result<Artist, CatalogError>;

    async fn update_artist(&self, artist: Artist) -> Result<Artist, CatalogError>;
}
