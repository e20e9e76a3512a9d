//! Artist domain service

use super::repository::Query;
use super::unit_of_work::UnitOfWorkFactory;
use crate::contract::{Artist, CatalogError, NewArtist};
use anyhow::Context;
use std::sync::Arc;

/// Domain service for artists
pub struct ArtistService {
    uow: Arc<dyn UnitOfWorkFactory>,
}

impl ArtistService {
    pub fn new(uow: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { uow }
    }

    /// Persist a new artist; the store assigns its identity
    pub async fn create_artist(&self, artist: NewArtist) -> Result<Artist, CatalogError> {
        let uow = self.uow.begin().await?;
        let created = uow
            .artists()
            .add(artist)
            .await
            .context("staging artist")?;
        uow.save().await.context("committing artist")?;
        tracing::info!(artist_id = created.id, name = %created.name, "artist created");
        Ok(created)
    }

    /// Every artist in insertion order
    pub async fn get_artists(&self) -> Result<Vec<Artist>, CatalogError> {
        let uow = self.uow.begin().await?;
        let artists = uow
            .artists()
            .get_all(Query::all())
            .await
            .context("listing artists")?;
        Ok(artists)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Artist, CatalogError> {
        let uow = self.uow.begin().await?;
        uow.artists()
            .find(id)
            .await
            .with_context(|| format!("finding artist {id}"))?
            .ok_or_else(|| CatalogError::not_found("artist", id))
    }

    /// Replace an existing artist as given
    pub async fn update_artist(&self, artist: Artist) -> Result<Artist, CatalogError> {
        let uow = self.uow.begin().await?;
        let existing = uow
            .artists()
            .find(artist.id)
            .await
            .with_context(|| format!("finding artist {}", artist.id))?;
        if existing.is_none() {
            return Err(CatalogError::not_found("artist", artist.id));
        }
        uow.artists()
            .update(&artist)
            .await
            .with_context(|| format!("staging update of artist {}", artist.id))?;
        uow.save().await.context("committing artist update")?;
        tracing::info!(artist_id = artist.id, "artist updated");
        Ok(artist)
    }

    /// Insert the starter artists when the catalog has none
    ///
    /// Returns how many artists were inserted.
    pub async fn seed_defaults(&self) -> Result<usize, CatalogError> {
        let uow = self.uow.begin().await?;
        let existing = uow
            .artists()
            .get_all(Query::all())
            .await
            .context("checking for existing artists")?;
        if !existing.is_empty() {
            return Ok(0);
        }

        let defaults = default_artists();
        let count = defaults.len();
        for artist in defaults {
            uow.artists()
                .add(artist)
                .await
                .context("staging default artist")?;
        }
        uow.save().await.context("committing default artists")?;
        tracing::info!(count, "seeded default artists");
        Ok(count)
    }
}

fn default_artists() -> Vec<NewArtist> {
    vec![
        NewArtist {
            name: "Kurt".to_string(),
            label: "Rock".to_string(),
            is_on_tour: false,
        },
        NewArtist {
            name: "Foyone".to_string(),
            label: "Rap".to_string(),
            is_on_tour: false,
        },
    ]
}
