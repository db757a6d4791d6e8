use marquee_core::{
    error::Error,
    movie::MovieId,
    util::proxy_from_env,
    view::DetailView,
    yts::YtsApi,
};
use std::{env, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(movie_id) = args.get(1) else {
        eprintln!("Expected <movie_id> in the first parameter");
        process::exit(2);
    };

    if let Err(err) = start(movie_id) {
        log::error!("{err}");
        process::exit(1);
    }
}

fn start(movie_id: &str) -> Result<(), Error> {
    let movie_id: MovieId = movie_id.parse()?;
    let api = YtsApi::new(proxy_from_env().as_deref());
    let result = api.movie_details(movie_id);
    print!("{}", DetailView::from_result(&result));
    Ok(())
}
