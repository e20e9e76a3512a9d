//! Configuration for catalog service module

use serde::{Deserialize, Serialize};

/// Catalog service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Words an album name may not contain (case-insensitive substring match)
    #[serde(default = "default_forbidden_words")]
    pub forbidden_words: Vec<String>,

    /// Earliest accepted release year
    #[serde(default = "default_min_release_year")]
    pub min_release_year: i32,

    /// Latest accepted release year
    #[serde(default = "default_max_release_year")]
    pub max_release_year: i32,

    /// Insert the starter artists when the catalog has none
    #[serde(default = "default_true")]
    pub seed_default_artists: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            forbidden_words: default_forbidden_words(),
            min_release_year: default_min_release_year(),
            max_release_year: default_max_release_year(),
            seed_default_artists: true,
        }
    }
}

fn default_forbidden_words() -> Vec<String> {
    ["Revolución", "Poder", "Amor", "Guerra"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_min_release_year() -> i32 {
    1905
}

fn default_max_release_year() -> i32 {
    2023
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_json::from_value(serde_json::json!({
            "max_release_year": 2030
        }))
        .unwrap();
        assert_eq!(cfg.max_release_year, 2030);
        assert_eq!(cfg.min_release_year, 1905);
        assert_eq!(cfg.forbidden_words.len(), 4);
        assert!(cfg.seed_default_artists);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<Config, _> = serde_json::from_value(serde_json::json!({
            "max_year": 2030
        }));
        assert!(result.is_err());
    }
}
