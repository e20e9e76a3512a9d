//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models.

use super::dto::*;
use super::error::http_status;
use crate::contract::{self, Envelope, Genre, UnknownGenre};

// ===== Genre conversions =====

impl From<GenreDto> for Genre {
    fn from(dto: GenreDto) -> Self {
        match dto {
            GenreDto::Rock => Genre::Rock,
            GenreDto::Pop => Genre::Pop,
            GenreDto::Rap => Genre::Rap,
            GenreDto::Jazz => Genre::Jazz,
            GenreDto::Blues => Genre::Blues,
            GenreDto::Metal => Genre::Metal,
            GenreDto::Salsa => Genre::Salsa,
            GenreDto::Merengue => Genre::Merengue,
            GenreDto::Bachata => Genre::Bachata,
            GenreDto::Reggaeton => Genre::Reggaeton,
            GenreDto::Cumbia => Genre::Cumbia,
            GenreDto::Vallenato => Genre::Vallenato,
            GenreDto::Electronic => Genre::Electronic,
            GenreDto::Classical => Genre::Classical,
            GenreDto::Folk => Genre::Folk,
            GenreDto::Indie => Genre::Indie,
        }
    }
}

impl From<Genre> for GenreDto {
    fn from(genre: Genre) -> Self {
        match genre {
            Genre::Rock => GenreDto::Rock,
            Genre::Pop => GenreDto::Pop,
            Genre::Rap => GenreDto::Rap,
            Genre::Jazz => GenreDto::Jazz,
            Genre::Blues => GenreDto::Blues,
            Genre::Metal => GenreDto::Metal,
            Genre::Salsa => GenreDto::Salsa,
            Genre::Merengue => GenreDto::Merengue,
            Genre::Bachata => GenreDto::Bachata,
            Genre::Reggaeton => GenreDto::Reggaeton,
            Genre::Cumbia => GenreDto::Cumbia,
            Genre::Vallenato => GenreDto::Vallenato,
            Genre::Electronic => GenreDto::Electronic,
            Genre::Classical => GenreDto::Classical,
            Genre::Folk => GenreDto::Folk,
            Genre::Indie => GenreDto::Indie,
        }
    }
}

impl TryFrom<String> for GenreDto {
    type Error = UnknownGenre;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<Genre>().map(GenreDto::from)
    }
}

// ===== Artist conversions =====

impl From<contract::Artist> for ArtistDto {
    fn from(artist: contract::Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            label: artist.label,
            is_on_tour: artist.is_on_tour,
        }
    }
}

impl From<ArtistDto> for contract::Artist {
    fn from(dto: ArtistDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            label: dto.label,
            is_on_tour: dto.is_on_tour,
        }
    }
}

impl From<CreateArtistRequest> for contract::NewArtist {
    fn from(req: CreateArtistRequest) -> Self {
        Self {
            name: req.name,
            label: req.label,
            is_on_tour: req.is_on_tour,
        }
    }
}

// ===== Album conversions =====

impl From<contract::Album> for AlbumDto {
    fn from(album: contract::Album) -> Self {
        Self {
            id: album.id,
            name: album.name,
            artist_id: album.artist_id,
            genre: album.genre.into(),
            year: album.year,
            cost: album.cost,
            artist: album.artist.map(ArtistDto::from),
        }
    }
}

impl From<AlbumDto> for contract::Album {
    fn from(dto: AlbumDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            artist_id: dto.artist_id,
            genre: dto.genre.into(),
            year: dto.year,
            cost: dto.cost,
            artist: dto.artist.map(contract::Artist::from),
        }
    }
}

impl From<CreateAlbumRequest> for contract::NewAlbum {
    fn from(req: CreateAlbumRequest) -> Self {
        Self {
            name: req.name,
            artist_id: req.artist_id,
            genre: req.genre.into(),
            year: req.year,
            cost: req.cost,
        }
    }
}

// ===== Envelope conversions =====

impl From<Envelope<contract::Album>> for AlbumEnvelopeDto {
    fn from(envelope: Envelope<contract::Album>) -> Self {
        let status_code = http_status(envelope.status()).as_u16();
        let message = envelope.message().to_string();
        let entities_list: Vec<AlbumDto> = envelope
            .into_entities()
            .into_iter()
            .map(AlbumDto::from)
            .collect();

        Self {
            status_code,
            message,
            total_elements: entities_list.len(),
            entities_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_dto_accepts_any_letter_case() {
        for raw in ["\"rOcK\"", "\"ROCK\"", "\"rock\"", "\"Rock\""] {
            let dto: GenreDto = serde_json::from_str(raw).unwrap();
            assert_eq!(dto, GenreDto::Rock, "{raw}");
        }
        let err = serde_json::from_str::<GenreDto>("\"polka\"").unwrap_err();
        assert!(err.to_string().contains("unknown genre 'polka'"));
    }

    #[test]
    fn genre_dto_serializes_canonical_name() {
        let json = serde_json::to_string(&GenreDto::from(Genre::Reggaeton)).unwrap();
        assert_eq!(json, "\"Reggaeton\"");
    }
}
