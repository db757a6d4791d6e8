use druid::{AppDelegate, Application, Command, DelegateCtx, Env, Handled, Target, WindowId};
use threadpool::ThreadPool;

use crate::{cmd, data::AppState, webapi::WebApi, widget::remote_image};

pub struct Delegate {
    main_window: Option<WindowId>,
    image_pool: ThreadPool,
}

impl Delegate {
    pub fn new() -> Self {
        const MAX_IMAGE_THREADS: usize = 32;

        Self {
            main_window: None,
            image_pool: ThreadPool::with_name("image_loading".into(), MAX_IMAGE_THREADS),
        }
    }

    pub fn with_main(main_window: WindowId) -> Self {
        let mut this = Self::new();
        this.main_window.replace(main_window);
        this
    }
}

impl AppDelegate<AppState> for Delegate {
    fn command(
        &mut self,
        ctx: &mut DelegateCtx,
        target: Target,
        cmd: &Command,
        data: &mut AppState,
        _env: &Env,
    ) -> Handled {
        if let Some(url) = cmd.get(cmd::OPEN_LINK) {
            if let Err(err) = open::that(url.as_ref()) {
                log::error!("failed to open {url}: {err}");
            }
            Handled::Yes
        } else if let Handled::Yes = self.command_image(ctx, target, cmd, data) {
            Handled::Yes
        } else {
            Handled::No
        }
    }

    fn window_removed(
        &mut self,
        id: WindowId,
        data: &mut AppState,
        _env: &Env,
        _ctx: &mut DelegateCtx,
    ) {
        if self.main_window == Some(id) {
            self.main_window.take();
            data.config.save();
            Application::global().quit();
        }
    }
}

impl Delegate {
    fn command_image(
        &mut self,
        ctx: &mut DelegateCtx,
        target: Target,
        cmd: &Command,
        _data: &mut AppState,
    ) -> Handled {
        let Some(location) = cmd.get(remote_image::REQUEST_DATA).cloned() else {
            return Handled::No;
        };
        let sink = ctx.get_external_handle();
        if let Some(image_buf) = WebApi::global().get_cached_image(&location) {
            let payload = remote_image::ImagePayload {
                location,
                image_buf,
            };
            if let Err(err) = sink.submit_command(remote_image::PROVIDE_DATA, payload, target) {
                log::error!("failed to deliver cached image: {err}");
            }
        } else {
            self.image_pool.execute(move || {
                let image_buf = match WebApi::global().get_image(location.clone()) {
                    Ok(image_buf) => image_buf,
                    Err(err) => {
                        log::error!("failed to load image {location}: {err}");
                        return;
                    }
                };
                let payload = remote_image::ImagePayload {
                    location,
                    image_buf,
                };
                if let Err(err) = sink.submit_command(remote_image::PROVIDE_DATA, payload, target)
                {
                    log::error!("failed to deliver image: {err}");
                }
            });
        }
        Handled::Yes
    }
}
