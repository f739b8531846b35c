mod config;
mod services;

use crate::config::Config;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{debug, info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Maps a request path to the bundle file that should answer it.
///
/// The root and any path without a file extension (client-side routes) are
/// answered by `index.html`.
fn asset_path(request_path: &str) -> &str {
    let path = request_path.trim_start_matches('/');
    let file_name = path.rsplit('/').next().unwrap_or_default();
    if path.is_empty() || !file_name.contains('.') {
        "index.html"
    } else {
        path
    }
}

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let file_path = asset_path(req.path());

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => {
            debug!("No embedded asset for {}", req.path());
            HttpResponse::NotFound().body("Not Found")
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open browser at {}: {}", url, e);
            }
        });
    }

    if STATIC_DIR.get_file("index.html").is_none() {
        warn!("Frontend bundle missing; run `trunk build` in frontend/ and rebuild the backend");
    }

    info!("Server running at {}", url);

    HttpServer::new(|| {
        App::new()
            .service(services::products::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::asset_path;

    #[test]
    fn root_and_client_routes_get_index() {
        assert_eq!(asset_path("/"), "index.html");
        assert_eq!(asset_path(""), "index.html");
        assert_eq!(asset_path("/products/1000"), "index.html");
    }

    #[test]
    fn files_map_to_bundle_paths() {
        assert_eq!(asset_path("/index.html"), "index.html");
        assert_eq!(asset_path("/product-grid-web_bg.wasm"), "product-grid-web_bg.wasm");
        assert_eq!(asset_path("/assets/styles.css"), "assets/styles.css");
    }
}
