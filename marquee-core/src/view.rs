//! What the movie detail view shows, independent of the toolkit drawing it.
//!
//! The GUI builds its widgets from these constants and helpers, the CLI
//! prints a [`DetailView`] directly.

use std::fmt;

use crate::{error::Error, movie::MovieRecord};

pub const NO_DESCRIPTION: &str = "No Description for this movie";
pub const WATCH_HEADING: &str = "Watch Movie";
pub const GENRE_HEADING: &str = "Genre";

pub fn description_or_fallback(description: &str) -> &str {
    if description.is_empty() {
        NO_DESCRIPTION
    } else {
        description
    }
}

pub fn rating_line(rating: f64) -> String {
    format!("Rating: {rating}")
}

const PLAYBACK_BASE: &str =
    "https://yts-movie-api-ui-shadcn-plz21hdsl-master-dees-projects.vercel.app/movie/59748";

/// The two "play" actions.  Their targets are fixed and do not depend on the
/// movie being shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlaybackLink {
    Hd720,
    Hd1080,
}

impl PlaybackLink {
    pub const ALL: [PlaybackLink; 2] = [PlaybackLink::Hd720, PlaybackLink::Hd1080];

    pub fn label(self) -> &'static str {
        match self {
            Self::Hd720 => "Play Movie 720p",
            Self::Hd1080 => "Play Movie 1080p",
        }
    }

    pub fn url(self) -> String {
        match self {
            Self::Hd720 => format!("{PLAYBACK_BASE}#720p"),
            Self::Hd1080 => format!("{PLAYBACK_BASE}#1080p"),
        }
    }
}

/// A placeholder rectangle, in logical pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Block {
    pub width: f64,
    pub height: f64,
}

impl Block {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SkeletonLayout {
    pub poster: Block,
    pub header: [Block; 2],
    pub body: [Block; 2],
}

pub const SKELETON: SkeletonLayout = SkeletonLayout {
    poster: Block::new(232.0, 360.0),
    header: [Block::new(80.0, 20.0), Block::new(640.0, 160.0)],
    body: [Block::new(64.0, 20.0), Block::new(320.0, 20.0)],
};

#[derive(Clone, Debug, PartialEq)]
pub struct MovieDetail {
    pub poster: String,
    pub title: String,
    pub description: String,
    pub rating: String,
    pub playback: [PlaybackLink; 2],
    pub genres: Vec<String>,
}

impl From<&MovieRecord> for MovieDetail {
    fn from(movie: &MovieRecord) -> Self {
        Self {
            poster: movie.medium_cover_image.clone(),
            title: movie.title_long.clone(),
            description: description_or_fallback(&movie.description_full).to_owned(),
            rating: rating_line(movie.rating),
            playback: PlaybackLink::ALL,
            genres: movie.genres.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailView {
    /// Nothing to show yet, or the load failed.
    Skeleton(SkeletonLayout),
    Loaded(MovieDetail),
}

impl DetailView {
    pub fn skeleton() -> Self {
        Self::Skeleton(SKELETON)
    }

    pub fn of(movie: Option<&MovieRecord>) -> Self {
        match movie {
            Some(movie) => Self::Loaded(movie.into()),
            None => Self::skeleton(),
        }
    }

    /// Failures collapse into the skeleton; they only show up in the log.
    pub fn from_result(result: &Result<MovieRecord, Error>) -> Self {
        match result {
            Ok(movie) => Self::of(Some(movie)),
            Err(err) => {
                log::error!("error fetching movie data: {err}");
                Self::skeleton()
            }
        }
    }
}

const SKELETON_CHAR: char = '░';
const PIXELS_PER_CHAR: f64 = 8.0;
const PIXELS_PER_LINE: f64 = 20.0;

fn write_block(f: &mut fmt::Formatter<'_>, block: Block) -> fmt::Result {
    let cols = (block.width / PIXELS_PER_CHAR).round().max(1.0) as usize;
    let rows = (block.height / PIXELS_PER_LINE).round().max(1.0) as usize;
    let line: String = std::iter::repeat(SKELETON_CHAR).take(cols).collect();
    for _ in 0..rows {
        writeln!(f, "{line}")?;
    }
    Ok(())
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skeleton(layout) => {
                write_block(f, layout.poster)?;
                writeln!(f)?;
                for block in layout.header.iter().chain(&layout.body) {
                    write_block(f, *block)?;
                    writeln!(f)?;
                }
                Ok(())
            }
            Self::Loaded(detail) => {
                writeln!(f, "Poster: {}", detail.poster)?;
                writeln!(f)?;
                writeln!(f, "{}", detail.title)?;
                writeln!(f)?;
                writeln!(f, "{}", detail.description)?;
                writeln!(f)?;
                writeln!(f, "{}", detail.rating)?;
                writeln!(f)?;
                writeln!(f, "{WATCH_HEADING}")?;
                for link in detail.playback {
                    writeln!(f, "  [{}] {}", link.label(), link.url())?;
                }
                writeln!(f)?;
                writeln!(f, "{GENRE_HEADING}")?;
                writeln!(f, "  {}", detail.genres.join("  "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yts::parse_movie_details;

    fn movie() -> MovieRecord {
        MovieRecord {
            id: 59748,
            url: "https://yts.mx/movies/the-quiet-field-2023".into(),
            title_long: "The Quiet Field (2023)".into(),
            medium_cover_image: "https://img.yts.mx/assets/images/movies/medium-cover.jpg".into(),
            genres: vec!["Horror".into(), "Mystery".into(), "Sci-Fi".into()],
            description_full: "A farmer hears something in the corn.".into(),
            rating: 7.5,
        }
    }

    #[test]
    fn loaded_view_shows_movie_fields() {
        let text = DetailView::of(Some(&movie())).to_string();
        assert!(text.contains("The Quiet Field (2023)"));
        assert!(text.contains("https://img.yts.mx/assets/images/movies/medium-cover.jpg"));
        assert!(text.contains("Rating: 7.5"));
        assert!(text.contains("A farmer hears something in the corn."));
        assert!(!text.contains(NO_DESCRIPTION));
    }

    #[test]
    fn genres_appear_once_in_order() {
        let text = DetailView::of(Some(&movie())).to_string();
        let positions: Vec<usize> = ["Horror", "Mystery", "Sci-Fi"]
            .iter()
            .map(|genre| {
                assert_eq!(text.matches(genre).count(), 1, "{genre} should appear once");
                text.find(genre).unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_description_falls_back() {
        let mut movie = movie();
        movie.description_full.clear();
        let text = DetailView::of(Some(&movie)).to_string();
        assert!(text.contains("No Description for this movie"));
    }

    #[test]
    fn whole_number_ratings_drop_the_fraction() {
        assert_eq!(rating_line(8.0), "Rating: 8");
        assert_eq!(rating_line(6.1), "Rating: 6.1");
    }

    #[test]
    fn failures_render_the_skeleton() {
        let status = parse_movie_details(br#"{"status": "error"}"#);
        assert_eq!(DetailView::from_result(&status), DetailView::skeleton());
        let garbage = parse_movie_details(b"not json");
        assert_eq!(DetailView::from_result(&garbage), DetailView::skeleton());
        assert_eq!(
            DetailView::from_result(&Err(Error::UnexpectedResponse)).to_string(),
            DetailView::skeleton().to_string()
        );
    }

    #[test]
    fn skeleton_has_fixed_layout() {
        let DetailView::Skeleton(layout) = DetailView::of(None) else {
            panic!("expected skeleton");
        };
        assert_eq!(layout.poster, Block::new(232.0, 360.0));
        assert_eq!(layout.header.len(), 2);
        assert_eq!(layout.body.len(), 2);
    }

    #[test]
    fn playback_links_ignore_the_movie() {
        let mut other = movie();
        other.id = 10;
        other.url = "https://yts.mx/movies/13-2010".into();
        let (DetailView::Loaded(a), DetailView::Loaded(b)) =
            (DetailView::of(Some(&movie())), DetailView::of(Some(&other)))
        else {
            panic!("expected loaded views");
        };
        assert_eq!(a.playback, b.playback);
        assert_eq!(
            PlaybackLink::Hd720.url(),
            "https://yts-movie-api-ui-shadcn-plz21hdsl-master-dees-projects.vercel.app/movie/59748#720p"
        );
        assert_eq!(
            PlaybackLink::Hd1080.url(),
            "https://yts-movie-api-ui-shadcn-plz21hdsl-master-dees-projects.vercel.app/movie/59748#1080p"
        );
        let text = DetailView::of(Some(&other)).to_string();
        assert!(text.contains(&PlaybackLink::Hd720.url()));
        assert!(text.contains(&PlaybackLink::Hd1080.url()));
    }
}
