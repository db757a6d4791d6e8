use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

/// Numeric YTS movie identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl MovieId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl FromStr for MovieId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidMovieId(s.to_owned()));
        }
        trimmed
            .parse()
            .map(Self)
            .map_err(|_| Error::InvalidMovieId(s.to_owned()))
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A movie as returned by `movie_details.json`.  The API sends `null` for
/// fields it has no value for, which decode to their defaults just like
/// missing keys.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MovieRecord {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_long: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medium_cover_image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description_full: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MovieRecord {
    pub fn movie_id(&self) -> MovieId {
        MovieId(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!("59748".parse::<MovieId>().unwrap(), MovieId(59748));
        assert_eq!(" 10 ".parse::<MovieId>().unwrap(), MovieId(10));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        for input in ["", "   ", "abc", "-1", "12a", "1.5"] {
            assert!(
                matches!(input.parse::<MovieId>(), Err(Error::InvalidMovieId(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn missing_optional_fields_default() {
        let record: MovieRecord =
            serde_json::from_str(r#"{"id": 3, "title_long": "Three (2001)"}"#).unwrap();
        assert_eq!(record.movie_id(), MovieId(3));
        assert!(record.genres.is_empty());
        assert!(record.description_full.is_empty());
        assert_eq!(record.rating, 0.0);
    }

    #[test]
    fn null_fields_default() {
        let record: MovieRecord = serde_json::from_str(
            r#"{
                "id": 5,
                "url": null,
                "title_long": "Five (2000)",
                "medium_cover_image": null,
                "genres": null,
                "description_full": null,
                "rating": null
            }"#,
        )
        .unwrap();
        assert_eq!(record.title_long, "Five (2000)");
        assert!(record.url.is_empty());
        assert!(record.medium_cover_image.is_empty());
        assert!(record.genres.is_empty());
        assert!(record.description_full.is_empty());
        assert_eq!(record.rating, 0.0);
    }
}
