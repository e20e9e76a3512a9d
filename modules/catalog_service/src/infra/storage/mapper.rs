//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{album, artist};
use crate::contract::{Album, Artist, Genre, NewAlbum, NewArtist};
use anyhow::Context;
use rust_decimal::Decimal;
use std::str::FromStr;

// ===== Artist Conversions =====

impl From<artist::Model> for Artist {
    fn from(entity: artist::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            label: entity.label,
            is_on_tour: entity.is_on_tour,
        }
    }
}

impl From<&Artist> for artist::ActiveModel {
    fn from(model: &Artist) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            name: Set(model.name.clone()),
            label: Set(model.label.clone()),
            is_on_tour: Set(model.is_on_tour),
        }
    }
}

impl From<NewArtist> for artist::ActiveModel {
    fn from(draft: NewArtist) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            name: Set(draft.name),
            label: Set(draft.label),
            is_on_tour: Set(draft.is_on_tour),
        }
    }
}

// ===== Album Conversions =====

/// Build an album from its row and, when joined, its artist row
pub fn album_from_entity(
    entity: album::Model,
    artist: Option<artist::Model>,
) -> anyhow::Result<Album> {
    let genre = Genre::from_str(&entity.genre)
        .with_context(|| format!("album {} has an invalid genre", entity.id))?;
    let cost = Decimal::from_str(&entity.cost)
        .with_context(|| format!("album {} has an invalid cost '{}'", entity.id, entity.cost))?;

    Ok(Album {
        id: entity.id,
        name: entity.name,
        artist_id: entity.artist_id,
        genre,
        year: entity.year,
        cost,
        artist: artist.map(Artist::from),
    })
}

impl From<&Album> for album::ActiveModel {
    fn from(model: &Album) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            name: Set(model.name.clone()),
            artist_id: Set(model.artist_id),
            genre: Set(model.genre.as_str().to_string()),
            year: Set(model.year),
            cost: Set(model.cost.to_string()),
        }
    }
}

impl From<NewAlbum> for album::ActiveModel {
    fn from(draft: NewAlbum) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            name: Set(draft.name),
            artist_id: Set(draft.artist_id),
            genre: Set(draft.genre.as_str().to_string()),
            year: Set(draft.year),
            cost: Set(draft.cost.to_string()),
        }
    }
}
