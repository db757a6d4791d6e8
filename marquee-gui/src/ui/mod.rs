use druid::{
    widget::{CrossAxisAlignment, Either, Flex, Label, SizedBox, ViewSwitcher},
    Env, Widget, WidgetExt, WindowDesc,
};

use crate::{
    cmd,
    controller::NavController,
    data::{AppState, Nav, Route},
    widget::{icons, MyWidgetExt},
};

pub mod movie;
pub mod theme;

pub fn main_window() -> WindowDesc<AppState> {
    WindowDesc::new(root_widget())
        .title(compute_main_window_title)
        .with_min_size((theme::grid(60.0), theme::grid(50.0)))
        .window_size((theme::grid(125.0), theme::grid(80.0)))
}

fn compute_main_window_title(data: &AppState, _env: &Env) -> String {
    match (&data.nav, data.movie_detail.movie.resolved()) {
        (Nav::Home, _) => "Marquee".to_string(),
        (Nav::MovieDetail(_), Some(movie)) => format!("{} - Marquee", movie.title_long),
        (nav, None) => format!("{} - Marquee", nav.title()),
    }
}

fn root_widget() -> impl Widget<AppState> {
    let topbar = Flex::row()
        .with_child(back_button_widget())
        .with_default_spacer()
        .with_flex_child(movie::input_widget(), 1.0)
        .padding((theme::grid(1.0), theme::grid(1.0), theme::grid(2.0), theme::grid(1.0)))
        .background(theme::BACKGROUND_DARK);

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .with_child(topbar)
        .with_flex_child(route_widget(), 1.0)
        .controller(NavController)
}

fn route_widget() -> impl Widget<AppState> {
    // Keyed on the route kind so that moving between movies keeps the same
    // detail widget, and with it the in-flight request bookkeeping.
    ViewSwitcher::new(
        |state: &AppState, _| state.nav.route(),
        |route: &Route, _, _| match route {
            Route::Home => home_widget().boxed(),
            Route::MovieDetail => movie::detail_widget().boxed(),
        },
    )
}

fn home_widget() -> impl Widget<AppState> {
    Label::new("Enter a YTS movie ID above to see its details.")
        .with_text_color(theme::PLACEHOLDER_COLOR)
        .center()
}

fn back_button_widget() -> impl Widget<AppState> {
    let icon_width = 10.0;
    let icon_height = theme::grid(2.0);
    let empty_icon = SizedBox::empty().width(icon_width).height(icon_height);
    let back_icon = icons::BACK
        .scale((icon_width, icon_height))
        .padding(theme::grid(1.0))
        .link()
        .rounded(theme::BUTTON_BORDER_RADIUS)
        .on_click(|ctx, _, _| {
            ctx.submit_command(cmd::NAVIGATE_BACK.with(1));
        });
    Either::new(
        |state: &AppState, _| state.history.is_empty(),
        empty_icon,
        back_icon,
    )
    .padding(theme::grid(1.0))
}
