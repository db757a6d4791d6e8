#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::new_without_default, clippy::type_complexity)]

mod cmd;
mod controller;
mod data;
mod delegate;
mod error;
mod ui;
mod webapi;
mod widget;

use druid::AppLauncher;
use env_logger::{Builder, Env};

use crate::{
    data::{AppState, Config},
    delegate::Delegate,
    webapi::WebApi,
};

const ENV_LOG: &str = "MARQUEE_LOG";
const ENV_LOG_STYLE: &str = "MARQUEE_LOG_STYLE";

fn main() {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    // Load configuration
    let config = Config::load().unwrap_or_default();

    WebApi::new(Config::proxy().as_deref()).install_as_global();

    let state = AppState::default_with_config(config);
    let window = ui::main_window();
    let delegate = Delegate::with_main(window.id);

    if let Err(err) = AppLauncher::with_window(window)
        .configure_env(ui::theme::setup)
        .delegate(delegate)
        .launch(state)
    {
        log::error!("application launch failed: {err}");
    }
}
