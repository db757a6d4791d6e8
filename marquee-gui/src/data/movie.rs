use std::sync::Arc;

use druid::{im::Vector, Data, Lens};
use marquee_core::{
    movie::{MovieId, MovieRecord},
    view,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Data, Lens)]
pub struct Movie {
    pub id: u64,
    pub url: Arc<str>,
    pub title_long: Arc<str>,
    pub medium_cover_image: Arc<str>,
    pub genres: Vector<Arc<str>>,
    pub description_full: Arc<str>,
    pub rating: f64,
}

impl Movie {
    pub fn description(&self) -> &str {
        view::description_or_fallback(&self.description_full)
    }

    pub fn rating_line(&self) -> String {
        view::rating_line(self.rating)
    }

    pub fn poster(&self) -> Option<Arc<str>> {
        if self.medium_cover_image.is_empty() {
            None
        } else {
            Some(self.medium_cover_image.clone())
        }
    }
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Self {
            id: record.id,
            url: record.url.into(),
            title_long: record.title_long.into(),
            medium_cover_image: record.medium_cover_image.into(),
            genres: record.genres.into_iter().map(Arc::from).collect(),
            description_full: record.description_full.into(),
            rating: record.rating,
        }
    }
}

#[derive(Clone, Debug, Data, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct MovieLink {
    pub id: u64,
}

impl MovieLink {
    pub fn parse(input: &str) -> Option<Self> {
        input
            .parse::<MovieId>()
            .map(|id| Self { id: id.as_u64() })
            .map_err(|err| log::warn!("{err}"))
            .ok()
    }

    pub fn movie_id(&self) -> MovieId {
        MovieId(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_record_keeping_genre_order() {
        let movie = Movie::from(MovieRecord {
            id: 15,
            url: String::new(),
            title_long: "Fifteen (1999)".into(),
            medium_cover_image: String::new(),
            genres: vec!["Drama".into(), "Action".into()],
            description_full: String::new(),
            rating: 5.0,
        });
        let genres: Vec<&str> = movie.genres.iter().map(|g| g.as_ref()).collect();
        assert_eq!(genres, ["Drama", "Action"]);
        assert_eq!(movie.description(), view::NO_DESCRIPTION);
        assert_eq!(movie.rating_line(), "Rating: 5");
        assert_eq!(movie.poster(), None);
    }

    #[test]
    fn parses_links_from_input() {
        assert_eq!(MovieLink::parse(" 42"), Some(MovieLink { id: 42 }));
        assert_eq!(MovieLink::parse("forty-two"), None);
    }
}
