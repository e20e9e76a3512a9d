//! Album domain service - rule checks and envelope translation

use super::repository::{AlbumFilter, AlbumInclude, Query};
use super::unit_of_work::UnitOfWorkFactory;
use super::validation::AlbumRules;
use crate::contract::{Album, CatalogError, Envelope, ErrorKind, Genre, NewAlbum};
use anyhow::Context;
use std::sync::Arc;

/// Domain service for albums
pub struct AlbumService {
    uow: Arc<dyn UnitOfWorkFactory>,
    rules: AlbumRules,
}

impl AlbumService {
    pub fn new(uow: Arc<dyn UnitOfWorkFactory>, rules: AlbumRules) -> Self {
        Self { uow, rules }
    }

    /// Validate and persist a new album
    ///
    /// Checks run in order (artist exists, cost, release year, forbidden
    /// words) and stop at the first violation; nothing is staged unless all
    /// of them pass.
    pub async fn create_album(&self, album: NewAlbum) -> Envelope<Album> {
        let result = self.try_create_album(album).await.map(|a| vec![a]);
        log_failure("create_album", &result);
        result.into()
    }

    async fn try_create_album(&self, album: NewAlbum) -> Result<Album, CatalogError> {
        let uow = self.uow.begin().await?;

        let artist = uow
            .artists()
            .find(album.artist_id)
            .await
            .with_context(|| format!("looking up artist {}", album.artist_id))?;
        if artist.is_none() {
            return Err(CatalogError::ArtistNotFound {
                artist_id: album.artist_id,
            });
        }
        self.rules.check(&album)?;

        let created = uow.albums().add(album).await.context("staging album")?;
        uow.save().await.context("committing album")?;

        tracing::info!(album_id = created.id, artist_id = created.artist_id, "album created");
        Ok(created)
    }

    /// List every album ordered by identity
    pub async fn get_albums(&self, load_references: bool) -> Envelope<Album> {
        let mut query = Query::all();
        if load_references {
            query = query.include(AlbumInclude::Artist);
        }
        self.list("get_albums", query).await
    }

    /// Albums whose artist name matches, ignoring case
    pub async fn get_albums_by_artist(&self, artist_name: &str) -> Envelope<Album> {
        self.list_with_artist(
            "get_albums_by_artist",
            AlbumFilter::ArtistName(artist_name.to_string()),
        )
        .await
    }

    pub async fn get_albums_by_genre(&self, genre: Genre) -> Envelope<Album> {
        self.list_with_artist("get_albums_by_genre", AlbumFilter::Genre(genre))
            .await
    }

    pub async fn get_albums_by_year(&self, year: i32) -> Envelope<Album> {
        self.list_with_artist("get_albums_by_year", AlbumFilter::Year(year))
            .await
    }

    /// Albums released between both years, inclusive
    ///
    /// Bounds are used as given: a reversed range matches nothing.
    pub async fn get_albums_by_year_range(
        &self,
        initial_year: i32,
        max_year: i32,
    ) -> Envelope<Album> {
        self.list_with_artist(
            "get_albums_by_year_range",
            AlbumFilter::YearBetween {
                from: initial_year,
                to: max_year,
            },
        )
        .await
    }

    /// Single-element envelope when found, empty `Ok` envelope otherwise
    pub async fn get_by_id(&self, id: i32) -> Envelope<Album> {
        let result = async {
            let uow = self.uow.begin().await?;
            let album = uow
                .albums()
                .find(id)
                .await
                .with_context(|| format!("finding album {id}"))?;
            album.ok_or_else(|| CatalogError::not_found("album", id))
        }
        .await
        .map(|a| vec![a]);
        log_failure("get_by_id", &result);
        result.into()
    }

    /// Replace an album as given, without re-applying the admission rules
    pub async fn update_album(&self, album: Album) -> Envelope<Album> {
        let result = async {
            let uow = self.uow.begin().await?;
            uow.albums()
                .update(&album)
                .await
                .with_context(|| format!("staging update of album {}", album.id))?;
            uow.save().await.context("committing album update")?;
            tracing::info!(album_id = album.id, "album updated");
            Ok::<_, CatalogError>(vec![album])
        }
        .await;
        log_failure("update_album", &result);
        result.into()
    }

    async fn list_with_artist(&self, op: &'static str, filter: AlbumFilter) -> Envelope<Album> {
        let query = Query::all().filter(filter).include(AlbumInclude::Artist);
        self.list(op, query).await
    }

    async fn list(&self, op: &'static str, query: Query<Album>) -> Envelope<Album> {
        let result = async {
            let uow = self.uow.begin().await?;
            let albums = uow
                .albums()
                .get_all(query)
                .await
                .with_context(|| format!("querying albums for {op}"))?;
            Ok::<_, CatalogError>(albums)
        }
        .await;
        log_failure(op, &result);
        result.into()
    }
}

fn log_failure<T>(op: &'static str, result: &Result<T, CatalogError>) {
    if let Err(err) = result {
        match err.kind() {
            ErrorKind::Validation => {
                tracing::warn!(operation = op, reason = %err, "album rejected")
            }
            ErrorKind::NotFound => tracing::debug!(operation = op, reason = %err, "no album"),
            ErrorKind::Storage => {
                tracing::error!(operation = op, error = ?err, "album operation failed")
            }
        }
    }
}
