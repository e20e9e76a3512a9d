//! Route registration and OpenAPI schema document

use super::{dto::*, handlers};
use crate::domain::{AlbumService, ArtistService};
use axum::{
    routing::{get, post, put},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI components exposed by the catalog
#[derive(OpenApi)]
#[openapi(
    info(title = "Discoteque catalog API"),
    components(schemas(
        AlbumDto,
        AlbumEnvelopeDto,
        ArtistDto,
        CreateAlbumRequest,
        CreateArtistRequest,
        GenreDto
    ))
)]
pub struct ApiDoc;

/// Register all REST routes
pub fn register_routes(
    router: Router,
    albums: Arc<AlbumService>,
    artists: Arc<ArtistService>,
) -> anyhow::Result<Router> {
    let router = router
        // Album endpoints
        .route("/api/album/GetAlbums", get(handlers::get_albums))
        .route("/api/album/GetAlbumById", get(handlers::get_album_by_id))
        .route("/api/album/GetAlbumsByYear", get(handlers::get_albums_by_year))
        .route(
            "/api/album/GetAlbumsByYearRange",
            get(handlers::get_albums_by_year_range),
        )
        .route("/api/album/GetAlbumsByGenre", get(handlers::get_albums_by_genre))
        .route("/api/album/GetAlbumsByArtist", get(handlers::get_albums_by_artist))
        .route("/api/album/CreateAlbum", post(handlers::create_album))
        .route("/api/album/UpdateAlbum", put(handlers::update_album))
        // Artist endpoints
        .route("/api/artists/GetAllArtistsAsync", get(handlers::get_all_artists))
        .route("/api/artists/CreateArtist", post(handlers::create_artist))
        .route("/api/artists/GetArtistById", get(handlers::get_artist_by_id))
        .route("/api/artists/UpdateArtist", put(handlers::update_artist))
        // Schema document
        .route("/api/openapi.json", get(openapi_document))
        // Add services as extensions for handlers
        .layer(Extension(albums))
        .layer(Extension(artists));

    Ok(router)
}

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
