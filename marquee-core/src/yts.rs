use serde::Deserialize;
use ureq::Agent;
use url::Url;

use crate::{
    error::Error,
    movie::{MovieId, MovieRecord},
    util::default_ureq_agent_builder,
};

pub const API_BASE: &str = "https://yts.mx/api/v2/";

const STATUS_OK: &str = "ok";

/// Blocking client for the YTS movie API.
pub struct YtsApi {
    agent: Agent,
    movie_details: Url,
}

impl YtsApi {
    pub fn new(proxy_url: Option<&str>) -> Self {
        Self::with_base(API_BASE, proxy_url).expect("API_BASE is a valid URL")
    }

    /// Point the client at another API root, e.g. a mirror.  `base` must end
    /// with a slash for the endpoint paths to be appended.
    pub fn with_base(base: &str, proxy_url: Option<&str>) -> Result<Self, Error> {
        let base = Url::parse(base)?;
        Ok(Self {
            agent: default_ureq_agent_builder(proxy_url).build().into(),
            movie_details: base.join("movie_details.json")?,
        })
    }

    pub fn movie_details_url(&self, id: MovieId) -> Url {
        let mut url = self.movie_details.clone();
        url.query_pairs_mut().append_pair("movie_id", &id.to_string());
        url
    }

    // https://yts.mx/api#movie_details
    pub fn movie_details(&self, id: MovieId) -> Result<MovieRecord, Error> {
        let url = self.movie_details_url(id);
        log::info!("fetching movie details: {url}");
        let body = self.get_bytes(url.as_str())?;
        parse_movie_details(&body).map_err(|err| match err {
            Error::MovieNotFound(_) => Error::MovieNotFound(id),
            err => err,
        })
    }

    /// Download raw bytes from an absolute URL, used for poster art.
    pub fn get_bytes(&self, uri: &str) -> Result<Vec<u8>, Error> {
        let mut response = self.agent.get(uri).call()?;
        let body = response.body_mut().read_to_vec()?;
        Ok(body)
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    status: String,
    #[serde(default)]
    status_message: String,
    data: Option<T>,
}

#[derive(Deserialize)]
struct MovieDetailsData {
    movie: Option<MovieRecord>,
}

/// Decode a `movie_details.json` response body.
pub fn parse_movie_details(body: &[u8]) -> Result<MovieRecord, Error> {
    let envelope: Envelope<MovieDetailsData> = serde_json::from_slice(body)?;
    if envelope.status != STATUS_OK {
        return Err(Error::ApiStatus {
            status: envelope.status,
            message: envelope.status_message,
        });
    }
    let movie = envelope
        .data
        .and_then(|data| data.movie)
        .ok_or(Error::UnexpectedResponse)?;
    // Unknown ids come back as "ok" with a zeroed-out record.
    if movie.id == 0 {
        return Err(Error::MovieNotFound(MovieId(0)));
    }
    Ok(movie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{DetailView, NO_DESCRIPTION};

    const DETAILS_OK: &str = r#"{
        "status": "ok",
        "status_message": "Query was successful",
        "data": {
            "movie": {
                "id": 10,
                "url": "https://yts.mx/movies/13-2010",
                "title": "13",
                "title_long": "13 (2010)",
                "year": 2010,
                "rating": 6.1,
                "genres": ["Action", "Crime", "Drama", "Thriller"],
                "description_full": "In a desperate attempt to help his family.",
                "medium_cover_image": "https://yts.mx/assets/images/movies/13_2010/medium-cover.jpg"
            }
        }
    }"#;

    #[test]
    fn builds_movie_details_url() {
        let api = YtsApi::new(None);
        assert_eq!(
            api.movie_details_url(MovieId(59748)).as_str(),
            "https://yts.mx/api/v2/movie_details.json?movie_id=59748"
        );
        assert_eq!(
            api.movie_details_url("7".parse().unwrap()).as_str(),
            "https://yts.mx/api/v2/movie_details.json?movie_id=7"
        );
        // Ids are sent in canonical decimal form.
        assert_eq!(
            api.movie_details_url(" 007 ".parse().unwrap()).as_str(),
            "https://yts.mx/api/v2/movie_details.json?movie_id=7"
        );
    }

    #[test]
    fn parses_ok_response() {
        let movie = parse_movie_details(DETAILS_OK.as_bytes()).unwrap();
        assert_eq!(movie.id, 10);
        assert_eq!(movie.title_long, "13 (2010)");
        assert_eq!(movie.genres, ["Action", "Crime", "Drama", "Thriller"]);
        assert_eq!(movie.rating, 6.1);
        assert_eq!(movie.url, "https://yts.mx/movies/13-2010");
    }

    #[test]
    fn null_description_renders_fallback() {
        let body = br#"{
            "status": "ok",
            "data": {
                "movie": {
                    "id": 5,
                    "url": null,
                    "title_long": "Five (2000)",
                    "description_full": null,
                    "medium_cover_image": null,
                    "genres": null,
                    "rating": 6.5
                }
            }
        }"#;
        let result = parse_movie_details(body);
        assert!(result.is_ok(), "unexpected result: {result:?}");
        let text = DetailView::from_result(&result).to_string();
        assert!(text.contains("Five (2000)"));
        assert!(text.contains(NO_DESCRIPTION));
        assert!(text.contains("Rating: 6.5"));
    }

    #[test]
    fn error_status_is_rejected() {
        let body = br#"{"status": "error", "status_message": "Something went wrong"}"#;
        match parse_movie_details(body) {
            Err(Error::ApiStatus { status, message }) => {
                assert_eq!(status, "error");
                assert_eq!(message, "Something went wrong");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn malformed_body_is_a_json_error() {
        assert!(matches!(
            parse_movie_details(b"<html>502 Bad Gateway</html>"),
            Err(Error::JsonError(_))
        ));
    }

    #[test]
    fn ok_without_movie_is_unexpected() {
        assert!(matches!(
            parse_movie_details(br#"{"status": "ok", "data": {}}"#),
            Err(Error::UnexpectedResponse)
        ));
    }

    #[test]
    fn zeroed_movie_is_not_found() {
        let body = br#"{"status": "ok", "data": {"movie": {"id": 0, "title_long": " (0)"}}}"#;
        assert!(matches!(
            parse_movie_details(body),
            Err(Error::MovieNotFound(_))
        ));
    }

    #[test]
    fn refused_connection_is_a_transport_error() {
        let api = YtsApi::with_base("http://127.0.0.1:1/api/v2/", None).unwrap();
        assert_eq!(
            api.movie_details_url(MovieId(1)).as_str(),
            "http://127.0.0.1:1/api/v2/movie_details.json?movie_id=1"
        );
        assert!(matches!(
            api.movie_details(MovieId(1)),
            Err(Error::TransportError(_))
        ));
    }
}
