use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use models::restaurant::{CuisineType, District, Restaurant, RestaurantInput};
use service::errors::ServiceError;
use service::seed::SeedOutcome;

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::routes::ServerState;

pub use service::restaurant::RestaurantFilter;

/// GET /api/ — liveness message.
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "제주도 맛집 찾기 API" }))
}

/// GET /api/restaurants — filtered listing, at most 100 records.
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(filter): ApiQuery<RestaurantFilter>,
) -> Result<Json<Vec<Restaurant>>, JsonApiError> {
    state
        .restaurants
        .list(&filter)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string())))
}

/// POST /api/restaurants — validate and persist a new record.
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<RestaurantInput>,
) -> Result<Json<Restaurant>, JsonApiError> {
    state.restaurants.create(input).await.map(Json).map_err(|e| match e {
        ServiceError::Validation(_) | ServiceError::Model(_) => {
            JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
        }
        _ => JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string())),
    })
}

/// GET /api/restaurants/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Restaurant>, JsonApiError> {
    state.restaurants.get(&id).await.map(Json).map_err(|e| match e {
        ServiceError::NotFound(_) => {
            JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some("맛집을 찾을 수 없습니다".into()))
        }
        _ => JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Get Failed", Some(e.to_string())),
    })
}

#[derive(Debug, Deserialize)]
pub struct PriceComparisonQuery {
    pub cuisine_type: Option<CuisineType>,
}

/// GET /api/price-comparison — per-cuisine stats, or a "nothing to compare"
/// message when the (possibly narrowed) set is empty.
pub async fn price_comparison(
    State(state): State<ServerState>,
    ApiQuery(q): ApiQuery<PriceComparisonQuery>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let stats = state
        .restaurants
        .price_comparison(q.cuisine_type)
        .await
        .map_err(|e| JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Comparison Failed", Some(e.to_string())))?;
    match stats {
        Some(stats) => serde_json::to_value(stats).map(Json).map_err(|e| {
            JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Comparison Failed", Some(e.to_string()))
        }),
        None => Ok(Json(json!({ "message": "비교할 맛집이 없습니다" }))),
    }
}

/// Value/label pair for one member of a closed enumeration.
#[derive(Debug, Serialize)]
pub struct EnumOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// GET /api/districts
pub async fn districts() -> Json<Vec<EnumOption>> {
    Json(
        District::ALL
            .iter()
            .map(|d| EnumOption { value: d.as_str(), label: d.as_str() })
            .collect(),
    )
}

/// GET /api/cuisine-types
pub async fn cuisine_types() -> Json<Vec<EnumOption>> {
    Json(
        CuisineType::ALL
            .iter()
            .map(|c| EnumOption { value: c.as_str(), label: c.as_str() })
            .collect(),
    )
}

/// POST /api/init-sample-data — guarded one-shot seeder.
pub async fn init_sample_data(
    State(state): State<ServerState>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let outcome = state
        .restaurants
        .seed_sample_data()
        .await
        .map_err(|e| JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Seed Failed", Some(e.to_string())))?;
    let message = match outcome {
        SeedOutcome::AlreadySeeded => "샘플 데이터가 이미 존재합니다".to_string(),
        SeedOutcome::Inserted(n) => format!("{}개의 샘플 맛집 데이터가 추가되었습니다", n),
    };
    Ok(Json(json!({ "message": message })))
}
