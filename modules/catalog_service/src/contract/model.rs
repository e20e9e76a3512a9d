//! Contract models for catalog service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Music artist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    /// Store-assigned identity
    pub id: i32,
    /// Display name
    pub name: String,
    /// Record label
    pub label: String,
    /// Whether the artist is currently touring
    pub is_on_tour: bool,
}

/// Artist values before the store assigns an identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtist {
    pub name: String,
    pub label: String,
    pub is_on_tour: bool,
}

/// Album released by an [`Artist`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// Store-assigned identity
    pub id: i32,
    /// Album title
    pub name: String,
    /// Owning artist
    pub artist_id: i32,
    /// Musical genre
    pub genre: Genre,
    /// Release year
    pub year: i32,
    /// Price
    pub cost: Decimal,
    /// Owning artist, only present when eager-loaded
    pub artist: Option<Artist>,
}

/// Album values before the store assigns an identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlbum {
    pub name: String,
    pub artist_id: i32,
    pub genre: Genre,
    pub year: i32,
    pub cost: Decimal,
}

impl NewAlbum {
    /// Attach the identity handed out by the store
    pub fn with_id(self, id: i32) -> Album {
        Album {
            id,
            name: self.name,
            artist_id: self.artist_id,
            genre: self.genre,
            year: self.year,
            cost: self.cost,
            artist: None,
        }
    }
}

impl NewArtist {
    /// Attach the identity handed out by the store
    pub fn with_id(self, id: i32) -> Artist {
        Artist {
            id,
            name: self.name,
            label: self.label,
            is_on_tour: self.is_on_tour,
        }
    }
}

/// Genre enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
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

impl Genre {
    pub const ALL: [Genre; 16] = [
        Genre::Rock,
        Genre::Pop,
        Genre::Rap,
        Genre::Jazz,
        Genre::Blues,
        Genre::Metal,
        Genre::Salsa,
        Genre::Merengue,
        Genre::Bachata,
        Genre::Reggaeton,
        Genre::Cumbia,
        Genre::Vallenato,
        Genre::Electronic,
        Genre::Classical,
        Genre::Folk,
        Genre::Indie,
    ];

    /// Canonical name, also the persisted representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Rock => "Rock",
            Genre::Pop => "Pop",
            Genre::Rap => "Rap",
            Genre::Jazz => "Jazz",
            Genre::Blues => "Blues",
            Genre::Metal => "Metal",
            Genre::Salsa => "Salsa",
            Genre::Merengue => "Merengue",
            Genre::Bachata => "Bachata",
            Genre::Reggaeton => "Reggaeton",
            Genre::Cumbia => "Cumbia",
            Genre::Vallenato => "Vallenato",
            Genre::Electronic => "Electronic",
            Genre::Classical => "Classical",
            Genre::Folk => "Folk",
            Genre::Indie => "Indie",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known genre
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown genre '{0}'")]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    /// Case-insensitive match on the canonical name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .copied()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}
