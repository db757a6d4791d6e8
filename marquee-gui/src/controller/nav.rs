use druid::widget::{prelude::*, Controller};

use crate::{
    cmd,
    data::{AppState, Nav},
    ui::movie,
};

pub struct NavController;

impl NavController {
    fn load_route_data(&self, ctx: &mut EventCtx, data: &mut AppState) {
        match &data.nav {
            Nav::Home => {
                data.movie_detail.movie.clear();
                ctx.submit_command(cmd::SET_FOCUS.to(cmd::WIDGET_MOVIE_INPUT));
            }
            Nav::MovieDetail(link) => {
                if data.movie_detail.needs_load(link) {
                    ctx.submit_command(movie::LOAD_DETAIL.with(link.to_owned()));
                }
            }
        }
    }
}

impl<W> Controller<AppState, W> for NavController
where
    W: Widget<AppState>,
{
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut AppState,
        env: &Env,
    ) {
        match event {
            Event::Command(cmd) if cmd.is(cmd::NAVIGATE) => {
                let nav = cmd.get_unchecked(cmd::NAVIGATE);
                data.navigate(nav);
                ctx.set_handled();
                self.load_route_data(ctx, data);
            }
            Event::Command(cmd) if cmd.is(cmd::NAVIGATE_BACK) => {
                let count = cmd.get_unchecked(cmd::NAVIGATE_BACK);
                for _ in 0..*count {
                    data.navigate_back();
                }
                ctx.set_handled();
                self.load_route_data(ctx, data);
            }
            Event::MouseDown(mouse) if mouse.button.is_x1() => {
                data.navigate_back();
                ctx.set_handled();
                self.load_route_data(ctx, data);
            }
            _ => {
                child.event(ctx, event, data, env);
            }
        }
    }

    fn lifecycle(
        &mut self,
        child: &mut W,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &AppState,
        env: &Env,
    ) {
        if let LifeCycle::WidgetAdded = event {
            if let Some(link) = &data.config.last_movie {
                ctx.submit_command(cmd::NAVIGATE.with(Nav::MovieDetail(link.to_owned())));
            }
        }
        child.lifecycle(ctx, event, data, env)
    }
}
