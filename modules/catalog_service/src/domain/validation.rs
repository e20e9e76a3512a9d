//! Album admission rules

use crate::config::Config;
use crate::contract::{CatalogError, NewAlbum};
use regex::{RegexSet, RegexSetBuilder};
use rust_decimal::Decimal;

/// Rules an album must satisfy before it is stored
///
/// The artist-existence rule needs the store and lives in the album service;
/// everything else is checked here.
#[derive(Debug, Clone)]
pub struct AlbumRules {
    min_release_year: i32,
    max_release_year: i32,
    forbidden_words: Vec<String>,
    forbidden: RegexSet,
}

impl AlbumRules {
    pub fn new(
        min_release_year: i32,
        max_release_year: i32,
        forbidden_words: Vec<String>,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(
            min_release_year <= max_release_year,
            "min_release_year {min_release_year} is after max_release_year {max_release_year}"
        );
        // An empty pattern matches every name.
        anyhow::ensure!(
            forbidden_words.iter().all(|w| !w.trim().is_empty()),
            "forbidden_words must not contain blank entries"
        );
        let forbidden = RegexSetBuilder::new(forbidden_words.iter().map(|w| regex::escape(w)))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            min_release_year,
            max_release_year,
            forbidden_words,
            forbidden,
        })
    }

    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        Self::new(
            cfg.min_release_year,
            cfg.max_release_year,
            cfg.forbidden_words.clone(),
        )
    }

    /// Check cost, release year and name, in that order
    pub fn check(&self, album: &NewAlbum) -> Result<(), CatalogError> {
        self.check_cost(album.cost)?;
        self.check_year(album.year)?;
        self.check_name(&album.name)
    }

    pub fn check_cost(&self, cost: Decimal) -> Result<(), CatalogError> {
        if cost < Decimal::ZERO {
            return Err(CatalogError::NegativeCost { cost });
        }
        Ok(())
    }

    pub fn check_year(&self, year: i32) -> Result<(), CatalogError> {
        if year < self.min_release_year || year > self.max_release_year {
            return Err(CatalogError::ReleaseYearOutOfRange {
                year,
                min: self.min_release_year,
                max: self.max_release_year,
            });
        }
        Ok(())
    }

    /// Case-insensitive substring match against the forbidden words
    pub fn check_name(&self, name: &str) -> Result<(), CatalogError> {
        match self.forbidden.matches(name).iter().next() {
            Some(idx) => Err(CatalogError::ForbiddenWord {
                word: self.forbidden_words[idx].clone(),
            }),
            None => Ok(()),
        }
    }
}
