//! SeaORM repository implementations
//!
//! Repositories run every statement inside the unit of work's transaction and
//! count the rows they write so the unit of work can report them on save.

use crate::contract::{Album, Artist, NewAlbum, NewArtist};
use crate::domain::repository::{
    AlbumFilter, AlbumInclude, AlbumOrder, ArtistFilter, ArtistOrder, Query, Repository,
};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::entity::{album, artist};
use super::mapper::album_from_entity;

// ===== Album Repository =====

pub struct SeaOrmAlbumRepository {
    txn: Arc<DatabaseTransaction>,
    writes: Arc<AtomicU64>,
}

impl SeaOrmAlbumRepository {
    pub fn new(txn: Arc<DatabaseTransaction>, writes: Arc<AtomicU64>) -> Self {
        Self { txn, writes }
    }
}

/// SQL condition for `filter`, or `None` when it is matched after loading
fn album_condition(filter: &AlbumFilter) -> Option<SimpleExpr> {
    match filter {
        AlbumFilter::ArtistName(_) => None,
        AlbumFilter::Genre(genre) => Some(album::Column::Genre.eq(genre.as_str())),
        AlbumFilter::Year(year) => Some(album::Column::Year.eq(*year)),
        AlbumFilter::YearBetween { from, to } => Some(album::Column::Year.between(*from, *to)),
    }
}

/// Case-insensitive name comparison with full Unicode folding.
/// SQLite's `LOWER` only folds ASCII.
fn same_name(stored: &str, wanted: &str) -> bool {
    stored.to_lowercase() == wanted.to_lowercase()
}

fn album_order<Q: QueryOrder>(query: Q, order: Option<AlbumOrder>) -> Q {
    match order.unwrap_or(AlbumOrder::IdAsc) {
        AlbumOrder::IdAsc => query.order_by_asc(album::Column::Id),
        AlbumOrder::IdDesc => query.order_by_desc(album::Column::Id),
        AlbumOrder::NameAsc => query
            .order_by_asc(album::Column::Name)
            .order_by_asc(album::Column::Id),
        AlbumOrder::YearAsc => query
            .order_by_asc(album::Column::Year)
            .order_by_asc(album::Column::Id),
    }
}

#[async_trait]
impl Repository<Album> for SeaOrmAlbumRepository {
    async fn find(&self, id: i32) -> Result<Option<Album>> {
        let result = album::Entity::find_by_id(id).one(&*self.txn).await?;
        result.map(|e| album_from_entity(e, None)).transpose()
    }

    async fn get_all(&self, query: Query<Album>) -> Result<Vec<Album>> {
        let load_artist = query.include == Some(AlbumInclude::Artist);
        let needs_join = load_artist
            || query
                .filter
                .as_ref()
                .is_some_and(AlbumFilter::needs_artist);

        let condition = query.filter.as_ref().and_then(album_condition);

        let mut rows = if needs_join {
            let mut select = album::Entity::find().find_also_related(artist::Entity);
            if let Some(condition) = condition {
                select = select.filter(condition);
            }
            album_order(select, query.order).all(&*self.txn).await?
        } else {
            let mut select = album::Entity::find();
            if let Some(condition) = condition {
                select = select.filter(condition);
            }
            album_order(select, query.order)
                .all(&*self.txn)
                .await?
                .into_iter()
                .map(|e| (e, None))
                .collect()
        };

        if let Some(AlbumFilter::ArtistName(name)) = &query.filter {
            rows.retain(|(_, artist)| artist.as_ref().is_some_and(|a| same_name(&a.name, name)));
        }

        rows.into_iter()
            .map(|(album, artist)| album_from_entity(album, artist.filter(|_| load_artist)))
            .collect()
    }

    async fn add(&self, draft: NewAlbum) -> Result<Album> {
        let active: album::ActiveModel = draft.into();
        let inserted = active.insert(&*self.txn).await?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        album_from_entity(inserted, None)
    }

    async fn update(&self, entity: &Album) -> Result<()> {
        let active: album::ActiveModel = entity.into();
        album::Entity::update(active).exec(&*self.txn).await?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ===== Artist Repository =====

pub struct SeaOrmArtistRepository {
    txn: Arc<DatabaseTransaction>,
    writes: Arc<AtomicU64>,
}

impl SeaOrmArtistRepository {
    pub fn new(txn: Arc<DatabaseTransaction>, writes: Arc<AtomicU64>) -> Self {
        Self { txn, writes }
    }
}

#[async_trait]
impl Repository<Artist> for SeaOrmArtistRepository {
    async fn find(&self, id: i32) -> Result<Option<Artist>> {
        let result = artist::Entity::find_by_id(id).one(&*self.txn).await?;
        Ok(result.map(Artist::from))
    }

    async fn get_all(&self, query: Query<Artist>) -> Result<Vec<Artist>> {
        let mut select = artist::Entity::find();

        if let Some(ArtistFilter::OnTour(on_tour)) = &query.filter {
            select = select.filter(artist::Column::IsOnTour.eq(*on_tour));
        }

        select = match query.order.unwrap_or(ArtistOrder::IdAsc) {
            ArtistOrder::IdAsc => select.order_by_asc(artist::Column::Id),
            ArtistOrder::NameAsc => select
                .order_by_asc(artist::Column::Name)
                .order_by_asc(artist::Column::Id),
        };

        let mut results = select.all(&*self.txn).await?;
        if let Some(ArtistFilter::Name(name)) = &query.filter {
            results.retain(|a| same_name(&a.name, name));
        }
        Ok(results.into_iter().map(Artist::from).collect())
    }

    async fn add(&self, draft: NewArtist) -> Result<Artist> {
        let active: artist::ActiveModel = draft.into();
        let inserted = active.insert(&*self.txn).await?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(inserted.into())
    }

    async fn update(&self, entity: &Artist) -> Result<()> {
        let active: artist::ActiveModel = entity.into();
        artist::Entity::update(active).exec(&*self.txn).await?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_fold_beyond_ascii() {
        assert!(same_name("Ñu Álvarez", "ñu álvarez"));
        assert!(same_name("Ñu Álvarez", "ÑU ÁLVAREZ"));
        assert!(!same_name("Ñu Álvarez", "Nu Alvarez"));
    }
}
