//! REST DTOs with serde derives for HTTP API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Genre =====

/// Genre as exchanged over HTTP
///
/// Serialized under its canonical name; any letter case is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String")]
pub enum GenreDto {
    Rock,
    Pop,
    Rap,
    Jazz,
    Blues,
    Metal,
    Salsa,
    Merengue,
    Bachata,
    Reggaeton,
    Cumbia,
    Vallenato,
    Electronic,
    Classical,
    Folk,
    Indie,
}

// ===== Artist DTOs =====

/// Artist response DTO, also the full-replace request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDto {
    pub id: i32,

    #[schema(example = "Foyone")]
    pub name: String,

    #[schema(example = "Rap")]
    pub label: String,

    pub is_on_tour: bool,
}

/// Create artist request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtistRequest {
    #[schema(example = "Kurt")]
    pub name: String,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub is_on_tour: bool,
}

// ===== Album DTOs =====

/// Album response DTO, also the full-replace request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDto {
    pub id: i32,

    #[schema(example = "Nevermind")]
    pub name: String,

    pub artist_id: i32,

    pub genre: GenreDto,

    #[schema(example = 1991)]
    pub year: i32,

    #[schema(value_type = String, example = "12.99")]
    pub cost: Decimal,

    /// Owning artist, present only when references are loaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<ArtistDto>,
}

/// Create album request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbumRequest {
    #[schema(example = "Nevermind")]
    pub name: String,

    pub artist_id: i32,

    pub genre: GenreDto,

    #[schema(example = 1991)]
    pub year: i32,

    #[schema(value_type = String, example = "12.99")]
    pub cost: Decimal,
}

// ===== Envelope =====

/// Uniform response body of album operations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlbumEnvelopeDto {
    /// HTTP status code of the outcome
    #[schema(example = 200)]
    pub status_code: u16,

    #[schema(example = "OK")]
    pub message: String,

    pub total_elements: usize,

    pub entities_list: Vec<AlbumDto>,
}

// ===== Query parameters =====

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAlbumsQuery {
    #[serde(default)]
    pub are_references_loaded: bool,
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i32,
}

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRangeQuery {
    pub initial_year: i32,
    /// Upper bound of the range
    pub year_range: i32,
}

#[derive(Debug, Deserialize)]
pub struct GenreQuery {
    pub genre: GenreDto,
}

#[derive(Debug, Deserialize)]
pub struct ArtistNameQuery {
    pub artist: String,
}

// Note: Conversion implementations live in mapper.rs
