use std::path::PathBuf;

use eyre::eyre;
use log::{debug, error, info, warn};
use tiny_http::{Header, Response};
use uri_rs::Uri;

use navbar_site::{config, page::Site};

fn html_header() -> Header {
    "Content-Type: text/html; charset=utf-8"
        .parse::<Header>()
        .expect("valid header")
}

fn main() -> eyre::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => config::default_path()?,
    };
    info!("Loading config from {config_path:?}");
    let config = config::load_config(&config_path)?;
    let bind = config.bind().to_owned();
    info!(
        "Rendering navbar for {:?} with {} categories",
        config.site.name,
        config.categories.len()
    );
    let site = Site::new(config);

    let server = tiny_http::Server::http(bind.as_str())
        .map_err(|e| eyre!("Failed to bind {bind}: {e}"))?;
    info!("Listening on {bind}");

    loop {
        // blocks until the next request is received
        let request = match server.recv() {
            Ok(rq) => rq,
            Err(e) => {
                error!("Failed to receive request: {e}");
                break;
            }
        };
        let raw = request.url().to_owned();
        let Ok(url) = Uri::new(raw.as_str()) else {
            warn!("Unparsable request uri: {raw:?}");
            let _ = request.respond(Response::empty(404));
            continue;
        };
        let Some(path) = url.path else {
            let _ = request.respond(Response::empty(404));
            continue;
        };
        debug!("{} {path}", request.method());

        let result = match site.render(path) {
            Some(html) => request.respond(Response::from_string(html).with_header(html_header())),
            None => request.respond(Response::empty(404)),
        };
        if let Err(e) = result {
            error!("Failed to respond: {e}");
        }
    }

    Ok(())
}
