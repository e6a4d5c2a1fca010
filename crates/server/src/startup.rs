use std::{env, net::SocketAddr, sync::Arc};

use axum::http::HeaderValue;
use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use dotenvy::dotenv;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

use service::restaurant::{MongoRestaurantRepository, RestaurantService};

use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils; `LOG_FORMAT=json` switches to
/// structured JSON output.
fn init_logging() {
    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => init_logging_json(),
        _ => init_logging_default(),
    }
}

/// CORS policy from config: `*` means unrestricted, otherwise an explicit
/// origin list.
fn build_cors(cfg: &configs::CorsConfig) -> CorsLayer {
    match cfg.origin_list() {
        None => CorsLayer::very_permissive(),
        Some(origins) => {
            let origins: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Load host/port from config, with env var overrides.
fn load_bind_addr(cfg: &configs::ServerConfig) -> anyhow::Result<SocketAddr> {
    let host = env::var("SERVER_HOST").unwrap_or_else(|_| cfg.host.clone());
    let port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(cfg.port);
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server.
///
/// Fails fast before binding when the store coordinates (`MONGO_URL`,
/// `DB_NAME`) are missing; the store client itself is opened once here and
/// shared by every request for the life of the process.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate()?;

    let db = models::db::connect(&cfg.database).await?;
    let repo = Arc::new(MongoRestaurantRepository::new(&db, &cfg.database.collection));
    let state = ServerState {
        restaurants: Arc::new(RestaurantService::new(repo)),
    };

    let cors = build_cors(&cfg.cors);
    let app: Router = routes::build_router(cors, state);

    let addr = load_bind_addr(&cfg.server)?;
    info!(%addr, "starting restaurant api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
