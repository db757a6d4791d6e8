use druid::{
    widget::{CrossAxisAlignment, Flex, Label, LineBreaking, List, Scroll, TextBox},
    Command, Data, LensExt, RoundedRectRadii, Selector, Widget, WidgetExt,
};
use marquee_core::view::{self, Block, PlaybackLink, SKELETON};

use crate::{
    cmd,
    controller::InputController,
    data::{AppState, Movie, MovieDetail, MovieLink, Nav},
    error::Error,
    webapi::WebApi,
    widget::{icons, Async, MyWidgetExt, RemoteImage, RoundedClip, Skeleton},
};

use super::theme;

pub const LOAD_DETAIL: Selector<MovieLink> = Selector::new("app.movie.load-detail");

pub fn input_widget() -> impl Widget<AppState> {
    TextBox::new()
        .with_placeholder("Movie ID, e.g. 59748")
        .controller(InputController::new().on_submit(|ctx, query, _| {
            if let Some(link) = MovieLink::parse(query) {
                ctx.submit_command(cmd::NAVIGATE.with(Nav::MovieDetail(link)));
            }
        }))
        .with_id(cmd::WIDGET_MOVIE_INPUT)
        .expand_width()
        .lens(AppState::movie_input)
}

pub fn detail_widget() -> impl Widget<AppState> {
    let detail = detail_async()
        .lens(AppState::movie_detail.then(MovieDetail::movie))
        .on_command_async(
            LOAD_DETAIL,
            |link| WebApi::global().get_movie(link),
            |_, data, link| data.movie_detail.movie.defer(link),
            |_, data, (link, result)| {
                if let Err(err) = &result {
                    log::error!("error fetching movie data: {err}");
                }
                if !data.movie_detail.movie.is_deferred(&link) {
                    log::debug!("dropping superseded response for movie {}", link.id);
                }
                data.movie_detail.movie.update((link, result));
            },
        );

    Scroll::new(detail.padding((theme::grid(2.5), theme::grid(3.0))))
        .vertical()
        .expand()
}

/// Anything but a loaded movie shows the skeleton.
fn detail_async() -> Async<Movie, MovieLink, Error> {
    Async::new(
        || skeleton_widget::<MovieLink>().with_id(cmd::WIDGET_MOVIE_SKELETON),
        || loaded_widget().with_id(cmd::WIDGET_MOVIE_LOADED),
        || skeleton_widget::<Error>().with_id(cmd::WIDGET_MOVIE_SKELETON),
    )
    .with_empty(|| skeleton_widget::<()>().with_id(cmd::WIDGET_MOVIE_SKELETON))
}

fn block(block: Block) -> Skeleton {
    Skeleton::new((block.width, block.height))
}

fn skeleton_widget<T: Data>() -> impl Widget<T> {
    let [title, description] = SKELETON.header;
    let [rating, links] = SKELETON.body;

    let header = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(block(title))
        .with_spacer(theme::grid(1.5))
        .with_child(block(description));

    let body = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(block(rating))
        .with_spacer(theme::grid(1.0))
        .with_child(block(links));

    let info = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(header)
        .with_spacer(theme::grid(3.0))
        .with_child(body);

    Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(block(SKELETON.poster))
        .with_spacer(theme::grid(3.0))
        .with_flex_child(info, 1.0)
}

fn loaded_widget() -> impl Widget<Movie> {
    let poster = poster_widget();

    let title = Label::raw()
        .with_font(theme::UI_FONT_TITLE)
        .with_line_break_mode(LineBreaking::WordWrap)
        .lens(Movie::title_long);

    let description = Label::dynamic(|movie: &Movie, _| movie.description().to_owned())
        .with_line_break_mode(LineBreaking::WordWrap)
        .with_text_color(theme::PLACEHOLDER_COLOR);

    let rating = Label::dynamic(|movie: &Movie, _| movie.rating_line());

    let playback = PlaybackLink::ALL
        .into_iter()
        .fold(Flex::row(), |row, link| {
            row.with_child(playback_button(link))
                .with_spacer(theme::grid(1.0))
        });

    let info = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(title)
        .with_spacer(theme::grid(1.5))
        .with_child(description)
        .with_spacer(theme::grid(3.0))
        .with_child(rating)
        .with_spacer(theme::grid(2.5))
        .with_child(heading_widget(view::WATCH_HEADING))
        .with_spacer(theme::grid(1.0))
        .with_child(playback)
        .with_spacer(theme::grid(2.5))
        .with_child(heading_widget(view::GENRE_HEADING))
        .with_spacer(theme::grid(1.0))
        .with_child(genres_widget());

    Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(poster)
        .with_spacer(theme::grid(3.0))
        .with_flex_child(info, 1.0)
}

fn poster_widget() -> impl Widget<Movie> {
    let size = SKELETON.poster;
    let image = RemoteImage::new(block(size), |movie: &Movie, _| movie.poster())
        .fix_size(size.width, size.height);
    RoundedClip::new(RoundedRectRadii::from(theme::POSTER_RADIUS), image)
}

fn heading_widget<T: Data>(text: &'static str) -> impl Widget<T> {
    Label::new(text).with_font(theme::UI_FONT_MEDIUM)
}

fn playback_button<T: Data>(link: PlaybackLink) -> impl Widget<T> {
    Flex::row()
        .with_child(icons::PLAY.scale((theme::grid(1.5), theme::grid(1.5))))
        .with_spacer(theme::grid(0.5))
        .with_child(Label::new(link.label()).with_text_size(theme::TEXT_SIZE_SMALL))
        .padding((theme::grid(1.2), theme::grid(0.6)))
        .link()
        .border(theme::BORDER_DARK, 1.0)
        .rounded(theme::BUTTON_BORDER_RADIUS)
        .on_click(move |ctx, _, _| ctx.submit_command(open_playback(link)))
}

fn open_playback(link: PlaybackLink) -> Command {
    cmd::OPEN_LINK.with(link.url().into())
}

fn genres_widget() -> impl Widget<Movie> {
    List::new(|| {
        Label::raw()
            .with_text_size(theme::TEXT_SIZE_SMALL)
            .with_text_color(theme::PLACEHOLDER_COLOR)
            .padding((theme::grid(1.0), theme::grid(0.4)))
            .background(theme::BACKGROUND_DARK)
            .rounded(theme::BUTTON_BORDER_RADIUS)
    })
    .horizontal()
    .with_spacing(theme::grid(1.0))
    .lens(Movie::genres)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PromiseState;

    #[test]
    fn absent_states_show_the_skeleton() {
        let mut detail = detail_async();
        for state in [
            PromiseState::Empty,
            PromiseState::Deferred,
            PromiseState::Rejected,
        ] {
            detail.rebuild_widget(state);
            assert_eq!(detail.child_id(), Some(cmd::WIDGET_MOVIE_SKELETON), "{state:?}");
        }
        detail.rebuild_widget(PromiseState::Resolved);
        assert_eq!(detail.child_id(), Some(cmd::WIDGET_MOVIE_LOADED));
    }

    #[test]
    fn playback_buttons_open_fixed_urls() {
        for link in PlaybackLink::ALL {
            let command = open_playback(link);
            let url = command.get(cmd::OPEN_LINK).map(|url| url.to_string());
            assert_eq!(url, Some(link.url()));
        }
    }
}
