use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::restaurant::{MongoRestaurantRepository, RestaurantService};

pub mod restaurants;

/// Concrete service type behind the HTTP surface.
pub type Restaurants = RestaurantService<MongoRestaurantRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub restaurants: Arc<Restaurants>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: `/health` plus the `/api` surface.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route("/", get(restaurants::root))
        .route("/restaurants", get(restaurants::list).post(restaurants::create))
        .route("/restaurants/:id", get(restaurants::get_by_id))
        .route("/price-comparison", get(restaurants::price_comparison))
        .route("/districts", get(restaurants::districts))
        .route("/cuisine-types", get(restaurants::cuisine_types))
        .route("/init-sample-data", post(restaurants::init_sample_data))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
