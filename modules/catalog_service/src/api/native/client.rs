//! Native client implementation - wraps domain services for in-process calls

use crate::contract::{Album, Artist, CatalogApi, CatalogError, Envelope, Genre, NewAlbum, NewArtist};
use crate::domain::{AlbumService, ArtistService};
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain services
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    albums: Arc<AlbumService>,
    artists: Arc<ArtistService>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(albums: Arc<AlbumService>, artists: Arc<ArtistService>) -> Self {
        Self { albums, artists }
    }
}

#[async_trait]
impl CatalogApi for NativeClient {
    async fn create_album(&self, album: NewAlbum) -> Envelope<Album> {
        self.albums.create_album(album).await
    }

    async fn get_albums(&self, load_references: bool) -> Envelope<Album> {
        self.albums.get_albums(load_references).await
    }

    async fn get_albums_by_artist(&self, artist_name: &str) -> Envelope<Album> {
        self.albums.get_albums_by_artist(artist_name).await
    }

    async fn get_albums_by_genre(&self, genre: Genre) -> Envelope<Album> {
        self.albums.get_albums_by_genre(genre).await
    }

    async fn get_albums_by_year(&self, year: i32) -> Envelope<Album> {
        self.albums.get_albums_by_year(year).await
    }

    async fn get_albums_by_year_range(
        &self,
        initial_year: i32,
        max_year: i32,
    ) -> Envelope<Album> {
        self.albums
            .get_albums_by_year_range(initial_year, max_year)
            .await
    }

    async fn get_album(&self, id: i32) -> Envelope<Album> {
        self.albums.get_by_id(id).await
    }

    async fn update_album(&self, album: Album) -> Envelope<Album> {
        self.albums.update_album(album).await
    }

    async fn create_artist(&self, artist: NewArtist) -> Result<Artist, CatalogError> {
        self.artists.create_artist(artist).await
    }

    async fn get_artists(&self) -> Result<Vec<Artist>, CatalogError> {
        self.artists.get_artists().await
    }

    async fn get_artist(&self, id: i32) -> Result<Artist, CatalogError> {
        self.artists.get_by_id(id).await
    }

    async fn update_artist(&self, artist: Artist) -> Result<Artist, CatalogError> {
        self.artists.update_artist(artist).await
    }
}
