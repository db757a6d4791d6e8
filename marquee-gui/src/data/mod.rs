mod config;
mod movie;
mod nav;
mod promise;

use druid::{im::Vector, Data, Lens};

pub use crate::data::{
    config::{Config, Theme},
    movie::{Movie, MovieLink},
    nav::{Nav, Route},
    promise::{Promise, PromiseState},
};

#[derive(Clone, Data, Lens)]
pub struct AppState {
    pub nav: Nav,
    pub history: Vector<Nav>,
    pub config: Config,
    pub movie_input: String,
    pub movie_detail: MovieDetail,
}

impl AppState {
    pub fn default_with_config(config: Config) -> Self {
        Self {
            nav: Nav::Home,
            history: Vector::new(),
            config,
            movie_input: String::new(),
            movie_detail: MovieDetail {
                movie: Promise::Empty,
            },
        }
    }
}

impl AppState {
    pub fn navigate(&mut self, nav: &Nav) {
        if &self.nav != nav {
            let previous = std::mem::replace(&mut self.nav, nav.to_owned());
            self.history.push_back(previous);
            self.remember_nav();
        }
    }

    pub fn navigate_back(&mut self) {
        if let Some(nav) = self.history.pop_back() {
            self.nav = nav;
            self.remember_nav();
        }
    }

    fn remember_nav(&mut self) {
        if let Nav::MovieDetail(link) = &self.nav {
            self.config.last_movie = Some(link.to_owned());
            self.movie_input = link.id.to_string();
        }
    }
}

#[derive(Clone, Data, Lens)]
pub struct MovieDetail {
    pub movie: Promise<Movie, MovieLink>,
}

impl MovieDetail {
    /// A new request is needed unless one for `link` is already pending or
    /// done.
    pub fn needs_load(&self, link: &MovieLink) -> bool {
        !self.movie.contains(link)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::Error;

    fn movie(id: u64) -> Movie {
        Movie {
            id,
            url: "".into(),
            title_long: Arc::from(format!("Movie {id}")),
            medium_cover_image: "".into(),
            genres: Vector::new(),
            description_full: "".into(),
            rating: 0.0,
        }
    }

    /// Mirrors what the navigation controller does on every route change.
    fn visit(state: &mut AppState, nav: Nav, fetches: &mut Vec<MovieLink>) {
        state.navigate(&nav);
        match &state.nav {
            Nav::Home => state.movie_detail.movie.clear(),
            Nav::MovieDetail(link) => {
                if state.movie_detail.needs_load(link) {
                    state.movie_detail.movie.defer(link.to_owned());
                    fetches.push(link.to_owned());
                }
            }
        }
    }

    #[test]
    fn one_fetch_per_identifier_change() {
        let mut state = AppState::default_with_config(Config::default());
        let mut fetches = Vec::new();
        let a = MovieLink { id: 1 };
        let b = MovieLink { id: 2 };

        visit(&mut state, Nav::MovieDetail(a.clone()), &mut fetches);
        visit(&mut state, Nav::MovieDetail(a.clone()), &mut fetches);
        visit(&mut state, Nav::MovieDetail(b.clone()), &mut fetches);

        assert_eq!(fetches, [a, b]);
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_request() {
        let mut state = AppState::default_with_config(Config::default());
        let mut fetches = Vec::new();
        let a = MovieLink { id: 1 };
        let b = MovieLink { id: 2 };

        visit(&mut state, Nav::MovieDetail(a.clone()), &mut fetches);
        visit(&mut state, Nav::MovieDetail(b.clone()), &mut fetches);

        // `b` resolves first, then the slower `a` response arrives.
        state.movie_detail.movie.update((b.clone(), Ok(movie(2))));
        state.movie_detail.movie.update((a, Ok(movie(1))));

        let shown = state.movie_detail.movie.resolved().map(|m| m.id);
        assert_eq!(shown, Some(2));
    }

    #[test]
    fn failed_load_is_retried_on_revisit() {
        let mut state = AppState::default_with_config(Config::default());
        let mut fetches = Vec::new();
        let a = MovieLink { id: 1 };

        visit(&mut state, Nav::MovieDetail(a.clone()), &mut fetches);
        state
            .movie_detail
            .movie
            .update((a.clone(), Err(Error::WebApiError("offline".into()))));
        visit(&mut state, Nav::Home, &mut fetches);
        visit(&mut state, Nav::MovieDetail(a.clone()), &mut fetches);

        assert_eq!(fetches, [a.clone(), a]);
    }

    #[test]
    fn navigation_keeps_history_and_last_movie() {
        let mut state = AppState::default_with_config(Config::default());
        let link = MovieLink { id: 7 };
        state.navigate(&Nav::MovieDetail(link.clone()));
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.config.last_movie, Some(link));
        assert_eq!(state.movie_input, "7");

        state.navigate_back();
        assert_eq!(state.nav, Nav::Home);
        assert!(state.history.is_empty());
    }
}
