use std::{error, fmt};

use crate::movie::MovieId;

#[derive(Debug)]
pub enum Error {
    InvalidMovieId(String),
    ApiStatus { status: String, message: String },
    MovieNotFound(MovieId),
    UnexpectedResponse,
    TransportError(Box<dyn error::Error + Send>),
    JsonError(Box<dyn error::Error + Send>),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMovieId(id) => write!(f, "Invalid movie id: {id:?}"),
            Self::ApiStatus { status, message } if message.is_empty() => {
                write!(f, "API returned status {status:?}")
            }
            Self::ApiStatus { status, message } => {
                write!(f, "API returned status {status:?}: {message}")
            }
            Self::MovieNotFound(id) => write!(f, "Movie {id} not found"),
            Self::UnexpectedResponse => write!(f, "Unknown server response"),
            Self::TransportError(err) | Self::JsonError(err) => err.fmt(f),
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Error {
        Error::TransportError(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(Box::new(err))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Error {
        Error::TransportError(Box::new(err))
    }
}
