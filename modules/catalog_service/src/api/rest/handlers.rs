//! HTTP request handlers - thin layer that delegates to domain services

use super::{
    dto::*,
    error::{envelope_problem, map_domain_error, not_found, Problem},
};
use crate::contract::{Album, Envelope, Status};
use crate::domain::{AlbumService, ArtistService};
use axum::{extract::Query, Extension, Json};
use std::sync::Arc;

/// Translate an album envelope into an HTTP outcome
///
/// A successful envelope without entities means nothing matched and becomes a 404.
fn envelope_response(
    envelope: Envelope<Album>,
    not_found_detail: &'static str,
) -> Result<Json<AlbumEnvelopeDto>, Problem> {
    match envelope.status() {
        Status::Ok if envelope.is_empty() => Err(not_found(not_found_detail)),
        Status::Ok => Ok(Json(envelope.into())),
        status => Err(envelope_problem(status)),
    }
}

// ===== Album Handlers =====

pub async fn get_albums(
    Extension(service): Extension<Arc<AlbumService>>,
    Query(query): Query<GetAlbumsQuery>,
) -> Result<Json<AlbumEnvelopeDto>, Problem> {
    let envelope = service.get_albums(query.are_references_loaded).await;
    envelope_response(envelope, "There was not album found")
}

pub async fn get_album_by_id(
    Extension(service): Extension<Arc<AlbumService>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<AlbumEnvelopeDto>, Problem> {
    let envelope = service.get_by_id(query.id).await;
    envelope_response(envelope, "There was not album found with this id")
}

pub async fn get_albums_by_year(
    Extension(service): Extension<Arc<AlbumService>>,
    Query(query): Query<YearQuery>,
) -> Result<Json<AlbumEnvelopeDto>, Problem> {
    let envelope = service.get_albums_by_year(query.year).await;
    envelope_response(envelope, "There were not albums found in this year")
}

pub async fn get_albums_by_year_range(
    Extension(service): Extension<Arc<AlbumService>>,
    Query(query): Query<YearRangeQuery>,
) -> Result<Json<AlbumEnvelopeDto>, Problem> {
    let envelope = service
        .get_albums_by_year_range(query.initial_year, query.year_range)
        .await;
    envelope_response(envelope, "There were not albums found in this year range")
}

pub async fn get_albums_by_genre(
    Extension(service): Extension<Arc<AlbumService>>,
    Query(query): Query<GenreQuery>,
) -> Result<Json<AlbumEnvelopeDto>, Problem> {
    let envelope = service.get_albums_by_genre(query.genre.into()).await;
    envelope_response(envelope, "There were not albums found in this genre")
}

pub async fn get_albums_by_artist(
    Extension(service): Extension<Arc<AlbumService>>,
    Query(query): Query<ArtistNameQuery>,
) -> Result<Json<AlbumEnvelopeDto>, Problem> {
    let envelope = service.get_albums_by_artist(&query.artist).await;
    envelope_response(envelope, "There were not albums by this artist")
}

pub async fn create_album(
    Extension(service): Extension<Arc<AlbumService>>,
    Json(req): Json<CreateAlbumRequest>,
) -> Result<Json<AlbumEnvelopeDto>, Problem> {
    let envelope = service.create_album(req.into()).await;
    envelope_response(envelope, "Ocurred an error while creating the album")
}

pub async fn update_album(
    Extension(service): Extension<Arc<AlbumService>>,
    Json(req): Json<AlbumDto>,
) -> Result<Json<AlbumEnvelopeDto>, Problem> {
    let envelope = service.update_album(req.into()).await;
    envelope_response(envelope, "There was not album updated")
}

// ===== Artist Handlers =====

pub async fn get_all_artists(
    Extension(service): Extension<Arc<ArtistService>>,
) -> Result<Json<Vec<ArtistDto>>, Problem> {
    let artists = service.get_artists().await.map_err(map_domain_error)?;
    Ok(Json(artists.into_iter().map(ArtistDto::from).collect()))
}

/// Create an artist and answer with the whole artist list
pub async fn create_artist(
    Extension(service): Extension<Arc<ArtistService>>,
    Json(req): Json<CreateArtistRequest>,
) -> Result<Json<Vec<ArtistDto>>, Problem> {
    service
        .create_artist(req.into())
        .await
        .map_err(map_domain_error)?;
    let artists = service.get_artists().await.map_err(map_domain_error)?;
    Ok(Json(artists.into_iter().map(ArtistDto::from).collect()))
}

pub async fn get_artist_by_id(
    Extension(service): Extension<Arc<ArtistService>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<ArtistDto>, Problem> {
    let artist = service.get_by_id(query.id).await.map_err(map_domain_error)?;
    Ok(Json(artist.into()))
}

pub async fn update_artist(
    Extension(service): Extension<Arc<ArtistService>>,
    Json(req): Json<ArtistDto>,
) -> Result<Json<ArtistDto>, Problem> {
    let artist = service
        .update_artist(req.into())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(artist.into()))
}
