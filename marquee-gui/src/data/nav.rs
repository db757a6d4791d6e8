use druid::Data;
use serde::{Deserialize, Serialize};

use crate::data::MovieLink;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    MovieDetail,
}

#[derive(Clone, Debug, Data, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Nav {
    Home,
    MovieDetail(MovieLink),
}

impl Nav {
    pub fn route(&self) -> Route {
        match self {
            Nav::Home => Route::Home,
            Nav::MovieDetail(_) => Route::MovieDetail,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Nav::Home => "Home".to_string(),
            Nav::MovieDetail(link) => format!("Movie #{}", link.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_routes_share_one_view() {
        let a = Nav::MovieDetail(MovieLink { id: 1 });
        let b = Nav::MovieDetail(MovieLink { id: 2 });
        assert_ne!(a, b);
        assert_eq!(a.route(), b.route());
        assert_ne!(a.route(), Nav::Home.route());
        assert_eq!(b.title(), "Movie #2");
    }
}
