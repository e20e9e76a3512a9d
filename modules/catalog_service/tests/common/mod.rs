//! Common test utilities: in-memory catalog and album fixtures

#![allow(dead_code)]

use catalog_service::{Artist, CatalogServiceModule, Config, Genre, NewAlbum, NewArtist};
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory SQLite database with the catalog schema applied
///
/// The pool is pinned to a single connection so every session sees the same
/// in-memory database.
pub async fn memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.expect("connect sqlite");
    CatalogServiceModule::migrate(&db).await.expect("migrate");
    db
}

pub fn test_config() -> Config {
    Config {
        seed_default_artists: false,
        ..Config::default()
    }
}

/// Module over an empty in-memory catalog
pub async fn empty_catalog() -> CatalogServiceModule {
    CatalogServiceModule::init(memory_db().await, test_config())
        .await
        .expect("init catalog module")
}

pub async fn add_artist(module: &CatalogServiceModule, name: &str, label: &str) -> Artist {
    module
        .artist_service()
        .create_artist(NewArtist {
            name: name.to_string(),
            label: label.to_string(),
            is_on_tour: false,
        })
        .await
        .expect("create artist")
}

pub fn album(name: &str, artist_id: i32, genre: Genre, year: i32, cost: &str) -> NewAlbum {
    NewAlbum {
        name: name.to_string(),
        artist_id,
        genre,
        year,
        cost: cost.parse::<Decimal>().expect("decimal literal"),
    }
}

/// Stores `album` and returns its identity; panics if the service rejects it
pub async fn add_album(module: &CatalogServiceModule, album: NewAlbum) -> i32 {
    let envelope = module.album_service().create_album(album).await;
    assert!(
        envelope.cause().is_none(),
        "album rejected: {:?}",
        envelope.cause()
    );
    envelope.entities()[0].id
}

pub async fn album_count(module: &CatalogServiceModule) -> usize {
    module.album_service().get_albums(false).await.total_elements()
}
