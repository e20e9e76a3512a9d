//! Integration tests for the album service over SQLite

mod common;

use catalog_service::{CatalogError, CatalogServiceModule, Config, Genre, Status};
use common::{add_album, add_artist, album, album_count, empty_catalog, memory_db, test_config};

#[tokio::test]
async fn create_album_with_valid_values_is_stored() {
    let catalog = empty_catalog().await;
    let artist = add_artist(&catalog, "Kurt", "Rock").await;

    let envelope = catalog
        .album_service()
        .create_album(album("Nevermind", artist.id, Genre::Rock, 1991, "12.99"))
        .await;

    assert_eq!(envelope.status(), Status::Ok);
    assert_eq!(envelope.message(), "OK");
    assert_eq!(envelope.total_elements(), 1);
    let created = &envelope.entities()[0];
    assert!(created.id > 0);
    assert_eq!(created.name, "Nevermind");
    assert_eq!(album_count(&catalog).await, 1);
}

#[tokio::test]
async fn create_album_for_unknown_artist_is_rejected() {
    let catalog = empty_catalog().await;

    let envelope = catalog
        .album_service()
        .create_album(album("Orphan", 42, Genre::Pop, 2000, "5"))
        .await;

    assert_eq!(envelope.status(), Status::BadRequest);
    assert_eq!(envelope.message(), "Bad Request");
    assert!(envelope.is_empty());
    assert!(matches!(
        envelope.cause(),
        Some(CatalogError::ArtistNotFound { artist_id: 42 })
    ));
    assert_eq!(album_count(&catalog).await, 0);
}

#[tokio::test]
async fn create_album_with_negative_cost_is_rejected() {
    let catalog = empty_catalog().await;
    let artist = add_artist(&catalog, "Kurt", "Rock").await;

    let envelope = catalog
        .album_service()
        .create_album(album("Cheap", artist.id, Genre::Rock, 1991, "-0.01"))
        .await;

    assert_eq!(envelope.status(), Status::BadRequest);
    assert!(matches!(
        envelope.cause(),
        Some(CatalogError::NegativeCost { .. })
    ));
    assert_eq!(album_count(&catalog).await, 0);
}

#[tokio::test]
async fn free_album_is_accepted() {
    let catalog = empty_catalog().await;
    let artist = add_artist(&catalog, "Kurt", "Rock").await;

    add_album(&catalog, album("Free", artist.id, Genre::Indie, 2010, "0")).await;

    assert_eq!(album_count(&catalog).await, 1);
}

#[tokio::test]
async fn create_album_outside_release_window_is_rejected() {
    let catalog = empty_catalog().await;
    let artist = add_artist(&catalog, "Kurt", "Rock").await;
    let service = catalog.album_service();

    for year in [1904, 2024] {
        let envelope = service
            .create_album(album("Out of time", artist.id, Genre::Jazz, year, "9"))
            .await;
        assert_eq!(envelope.status(), Status::BadRequest, "year {year}");
        assert!(matches!(
            envelope.cause(),
            Some(CatalogError::ReleaseYearOutOfRange { year: y, .. }) if *y == year
        ));
    }

    for year in [1905, 2023] {
        add_album(&catalog, album("Edge", artist.id, Genre::Jazz, year, "9")).await;
    }
    assert_eq!(album_count(&catalog).await, 2);
}

#[tokio::test]
async fn forbidden_words_match_ignoring_case() {
    let catalog = empty_catalog().await;
    let artist = add_artist(&catalog, "Foyone", "Rap").await;
    let service = catalog.album_service();

    let envelope = service
        .create_album(album("poder absoluto", artist.id, Genre::Rap, 2015, "10"))
        .await;
    assert_eq!(envelope.status(), Status::BadRequest);
    assert!(matches!(
        envelope.cause(),
        Some(CatalogError::ForbiddenWord { word }) if word == "Poder"
    ));

    let envelope = service
        .create_album(album("Himno de la REVOLUCIÓN", artist.id, Genre::Rap, 2015, "10"))
        .await;
    assert!(matches!(
        envelope.cause(),
        Some(CatalogError::ForbiddenWord { word }) if word == "Revolución"
    ));

    add_album(&catalog, album("Power", artist.id, Genre::Rap, 2015, "10")).await;
    assert_eq!(album_count(&catalog).await, 1);
}

#[tokio::test]
async fn checks_stop_at_the_first_violation() {
    let catalog = empty_catalog().await;
    let artist = add_artist(&catalog, "Kurt", "Rock").await;

    // Negative cost, bad year and a forbidden word: cost is reported.
    let envelope = catalog
        .album_service()
        .create_album(album("Guerra", artist.id, Genre::Rock, 1800, "-1"))
        .await;
    assert!(matches!(
        envelope.cause(),
        Some(CatalogError::NegativeCost { .. })
    ));

    // Unknown artist wins over every other rule.
    let envelope = catalog
        .album_service()
        .create_album(album("Guerra", artist.id + 100, Genre::Rock, 1800, "-1"))
        .await;
    assert!(matches!(
        envelope.cause(),
        Some(CatalogError::ArtistNotFound { .. })
    ));
}

#[tokio::test]
async fn get_by_id_returns_what_was_created() {
    let catalog = empty_catalog().await;
    let artist = add_artist(&catalog, "Kurt", "Rock").await;
    let id = add_album(&catalog, album("In Utero", artist.id, Genre::Rock, 1993, "15.50")).await;

    let envelope = catalog.album_service().get_by_id(id).await;

    assert_eq!(envelope.status(), Status::Ok);
    let found = &envelope.entities()[0];
    assert_eq!(found.id, id);
    assert_eq!(found.name, "In Utero");
    assert_eq!(found.artist_id, artist.id);
    assert_eq!(found.genre, Genre::Rock);
    assert_eq!(found.year, 1993);
    assert_eq!(found.cost.to_string(), "15.50");
}

#[tokio::test]
async fn get_by_id_for_missing_album_is_an_empty_ok() {
    let catalog = empty_catalog().await;

    let envelope = catalog.album_service().get_by_id(999).await;

    assert_eq!(envelope.status(), Status::Ok);
    assert!(envelope.is_empty());
    assert!(envelope.cause().is_none());
}

#[tokio::test]
async fn get_albums_loads_artist_only_when_asked() {
    let catalog = empty_catalog().await;
    let artist = add_artist(&catalog, "Kurt", "Rock").await;
    let first = add_album(&catalog, album("Bleach", artist.id, Genre::Rock, 1989, "8")).await;
    let second = add_album(&catalog, album("Nevermind", artist.id, Genre::Rock, 1991, "9")).await;
    let service = catalog.album_service();

    let bare = service.get_albums(false).await;
    let ids: Vec<i32> = bare.entities().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert!(bare.entities().iter().all(|a| a.artist.is_none()));

    let loaded = service.get_albums(true).await;
    assert_eq!(loaded.total_elements(), 2);
    for album in loaded.entities() {
        assert_eq!(album.artist.as_ref(), Some(&artist));
    }
}

#[tokio::test]
async fn empty_catalog_lists_nothing() {
    let catalog = empty_catalog().await;

    let envelope = catalog.album_service().get_albums(true).await;

    assert_eq!(envelope.status(), Status::Ok);
    assert_eq!(envelope.total_elements(), 0);
}

#[tokio::test]
async fn albums_by_artist_ignore_case() {
    let catalog = empty_catalog().await;
    let kurt = add_artist(&catalog, "Kurt", "Rock").await;
    let foyone = add_artist(&catalog, "Foyone", "Rap").await;
    add_album(&catalog, album("Bleach", kurt.id, Genre::Rock, 1989, "8")).await;
    add_album(&catalog, album("Sin Miedo", foyone.id, Genre::Rap, 2012, "7")).await;

    let envelope = catalog.album_service().get_albums_by_artist("kURT").await;

    assert_eq!(envelope.total_elements(), 1);
    let found = &envelope.entities()[0];
    assert_eq!(found.name, "Bleach");
    assert_eq!(found.artist.as_ref().map(|a| a.name.as_str()), Some("Kurt"));

    let none = catalog.album_service().get_albums_by_artist("Nobody").await;
    assert_eq!(none.status(), Status::Ok);
    assert!(none.is_empty());
}

#[tokio::test]
async fn albums_by_genre_and_year() {
    let catalog = empty_catalog().await;
    let artist = add_artist(&catalog, "Kurt", "Rock").await;
    add_album(&catalog, album("Bleach", artist.id, Genre::Rock, 1989, "8")).await;
    add_album(&catalog, album("Unplugged", artist.id, Genre::Folk, 1994, "8")).await;
    add_album(&catalog, album("In Utero", artist.id, Genre::Rock, 1993, "8")).await;
    let service = catalog.album_service();

    let rock = service.get_albums_by_genre(Genre::Rock).await;
    let names: Vec<&str> = rock.entities().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Bleach", "In Utero"]);

    let salsa = service.get_albums_by_genre(Genre::Salsa).await;
    assert!(salsa.is_empty());

    let in_1994 = service.get_albums_by_year(1994).await;
    assert_eq!(in_1994.total_elements(), 1);
    assert_eq!(in_1994.entities()[0].name, "Unplugged");
}

#[tokio::test]
async fn year_range_is_inclusive() {
    let catalog = empty_catalog().await;
    let artist = add_artist(&catalog, "Kurt", "Rock").await;
    for year in [1969, 1970, 1975, 1980] {
        add_album(&catalog, album(&format!("Album {year}"), artist.id, Genre::Rock, year, "5")).await;
    }

    let envelope = catalog
        .album_service()
        .get_albums_by_year_range(1970, 1979)
        .await;

    let years: Vec<i32> = envelope.entities().iter().map(|a| a.year).collect();
    assert_eq!(years, vec![1970, 1975]);
}

#[tokio::test]
async fn reversed_year_range_matches_nothing() {
    let catalog = empty_catalog().await;
    let artist = add_artist(&catalog, "Kurt", "Rock").await;
    add_album(&catalog, album("Mid", artist.id, Genre::Rock, 1975, "5")).await;

    let envelope = catalog
        .album_service()
        .get_albums_by_year_range(1979, 1970)
        .await;

    assert_eq!(envelope.status(), Status::Ok);
    assert!(envelope.is_empty());
}

#[tokio::test]
async fn update_album_replaces_stored_values() {
    let catalog = empty_catalog().await;
    let artist = add_artist(&catalog, "Kurt", "Rock").await;
    let id = add_album(&catalog, album("Draft", artist.id, Genre::Rock, 1991, "9")).await;
    let service = catalog.album_service();

    let mut stored = service.get_by_id(id).await.into_entities().remove(0);
    stored.name = "Nevermind".to_string();
    stored.cost = "11.25".parse().unwrap();

    let envelope = service.update_album(stored.clone()).await;
    assert_eq!(envelope.status(), Status::Ok);

    let reloaded = service.get_by_id(id).await.into_entities().remove(0);
    assert_eq!(reloaded.name, "Nevermind");
    assert_eq!(reloaded.cost.to_string(), "11.25");
    assert_eq!(album_count(&catalog).await, 1);
}

#[tokio::test]
async fn albums_by_artist_fold_accented_capitals() {
    let catalog = empty_catalog().await;
    let artist = add_artist(&catalog, "Ñu Álvarez", "Cumbia").await;
    add_album(&catalog, album("Río Abajo", artist.id, Genre::Cumbia, 2001, "6")).await;
    let service = catalog.album_service();

    for wanted in ["Ñu Álvarez", "ñu álvarez", "ÑU ÁLVAREZ"] {
        let envelope = service.get_albums_by_artist(wanted).await;
        assert_eq!(envelope.total_elements(), 1, "{wanted}");
        assert_eq!(envelope.entities()[0].name, "Río Abajo");
    }

    let envelope = service.get_albums_by_artist("Nu Alvarez").await;
    assert!(envelope.is_empty());
}

#[tokio::test]
async fn update_of_missing_album_is_an_internal_error() {
    let catalog = empty_catalog().await;
    let artist = add_artist(&catalog, "Kurt", "Rock").await;
    let ghost = album("Ghost", artist.id, Genre::Rock, 1991, "1").with_id(404);

    let envelope = catalog.album_service().update_album(ghost).await;

    assert_eq!(envelope.status(), Status::InternalServerError);
    assert_eq!(envelope.message(), "Internal Server Error");
    assert!(envelope.is_empty());
    assert!(matches!(envelope.cause(), Some(CatalogError::Storage(_))));
    assert_eq!(album_count(&catalog).await, 0);
}

#[tokio::test]
async fn blank_forbidden_word_fails_module_init() {
    let config = Config {
        forbidden_words: vec!["Poder".to_string(), String::new()],
        ..test_config()
    };

    let result = CatalogServiceModule::init(memory_db().await, config).await;

    assert!(result.is_err());
}
