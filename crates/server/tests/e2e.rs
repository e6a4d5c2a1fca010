use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::{self, ServerState};
use service::restaurant::{MongoRestaurantRepository, RestaurantService};

// These tests need a reachable MongoDB (MONGO_URL env var); they skip
// gracefully when it is absent or SKIP_DB_TESTS is set. Each run gets its own
// collection so parallel tests stay isolated.

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Err(anyhow::anyhow!("SKIP_DB_TESTS set"));
    }
    let mongo_url = match std::env::var("MONGO_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("MONGO_URL missing; skip e2e tests");
            return Err(anyhow::anyhow!("missing MONGO_URL"));
        }
    };

    let client = mongodb::Client::with_uri_str(&mongo_url).await?;
    let db = client.database("matjip_test");
    let collection = format!("restaurants_{}", Uuid::new_v4().simple());

    let repo = Arc::new(MongoRestaurantRepository::new(&db, &collection));
    let state = ServerState {
        restaurants: Arc::new(RestaurantService::new(repo)),
    };

    let app: Router = routes::build_router(cors(), state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

/// Server wired to a lazily-connected store handle. Requests rejected at the
/// extractor never reach the store, so these tests run without a MongoDB.
async fn start_server_without_store() -> anyhow::Result<TestApp> {
    let client = mongodb::Client::with_uri_str("mongodb://localhost:27017").await?;
    let db = client.database("matjip_test");
    let collection = format!("restaurants_{}", Uuid::new_v4().simple());

    let repo = Arc::new(MongoRestaurantRepository::new(&db, &collection));
    let state = ServerState {
        restaurants: Arc::new(RestaurantService::new(repo)),
    };

    let app: Router = routes::build_router(cors(), state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn restaurant_payload(name: &str) -> Value {
    json!({
        "name": name,
        "cuisine_type": "해산물",
        "price_range": "보통",
        "district": "제주시",
        "address": "제주시 테스트길 1",
        "phone": "064-000-0000",
        "rating": 4.2,
        "average_price": 21000,
        "description": "e2e test record",
        "image_url": "https://example.test/img.jpg"
    })
}

#[tokio::test]
async fn e2e_health_and_liveness() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");

    let res = client().get(format!("{}/api", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "제주도 맛집 찾기 API");
    Ok(())
}

#[tokio::test]
async fn e2e_create_then_get_round_trip() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    let res = client()
        .post(format!("{}/api/restaurants", app.base_url))
        .json(&restaurant_payload("round trip"))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let created: Value = res.json().await?;
    let id = created["id"].as_str().expect("id assigned").to_string();
    assert!(created["created_at"].is_string());

    let res = client()
        .get(format!("{}/api/restaurants/{}", app.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let fetched: Value = res.json().await?;
    assert_eq!(fetched, created);
    Ok(())
}

#[tokio::test]
async fn e2e_get_unknown_id_is_404() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    let res = client()
        .get(format!("{}/api/restaurants/{}", app.base_url, Uuid::new_v4()))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["detail"], "맛집을 찾을 수 없습니다");
    Ok(())
}

#[tokio::test]
async fn e2e_create_rejects_out_of_range_rating() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    let mut payload = restaurant_payload("bad rating");
    payload["rating"] = json!(6.5);
    let res = client()
        .post(format!("{}/api/restaurants", app.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_enum_in_body_returns_structured_400() -> anyhow::Result<()> {
    let app = start_server_without_store().await?;

    let mut payload = restaurant_payload("closed set");
    payload["cuisine_type"] = json!("스시");
    let res = client()
        .post(format!("{}/api/restaurants", app.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Validation Error");
    assert!(body["detail"].as_str().unwrap_or_default().contains("cuisine_type"));
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_json_body_returns_structured_400() -> anyhow::Result<()> {
    let app = start_server_without_store().await?;

    let res = client()
        .post(format!("{}/api/restaurants", app.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_enum_in_query_returns_structured_400() -> anyhow::Result<()> {
    let app = start_server_without_store().await?;

    let res = client()
        .get(format!("{}/api/restaurants?district=서울", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Validation Error");

    let res = client()
        .get(format!("{}/api/price-comparison?cuisine_type=양식", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn e2e_list_filters_by_search_term() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    for name in ["Olle Kitchen", "unrelated place"] {
        let res = client()
            .post(format!("{}/api/restaurants", app.base_url))
            .json(&restaurant_payload(name))
            .send()
            .await?;
        assert_eq!(res.status(), reqwest::StatusCode::OK);
    }

    let res = client()
        .get(format!("{}/api/restaurants?search=olle", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let hits: Vec<Value> = res.json().await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "Olle Kitchen");
    Ok(())
}

#[tokio::test]
async fn e2e_enumeration_endpoints() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    let res = client().get(format!("{}/api/districts", app.base_url)).send().await?;
    let districts: Vec<Value> = res.json().await?;
    assert_eq!(districts.len(), 6);
    assert!(districts.iter().any(|d| d["value"] == "서귀포시"));
    assert!(districts.iter().all(|d| d["value"] == d["label"]));

    let res = client().get(format!("{}/api/cuisine-types", app.base_url)).send().await?;
    let cuisines: Vec<Value> = res.json().await?;
    assert_eq!(cuisines.len(), 7);
    assert!(cuisines.iter().any(|c| c["value"] == "퓨전"));
    Ok(())
}

#[tokio::test]
async fn e2e_seed_then_compare_prices() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    // Empty store: nothing to compare yet.
    let res = client()
        .get(format!("{}/api/price-comparison", app.base_url))
        .send()
        .await?;
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "비교할 맛집이 없습니다");

    // First seed inserts 6, second is a guarded no-op.
    let res = client()
        .post(format!("{}/api/init-sample-data", app.base_url))
        .send()
        .await?;
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "6개의 샘플 맛집 데이터가 추가되었습니다");

    let res = client()
        .post(format!("{}/api/init-sample-data", app.base_url))
        .send()
        .await?;
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "샘플 데이터가 이미 존재합니다");

    let res = client()
        .get(format!("{}/api/restaurants", app.base_url))
        .send()
        .await?;
    let all: Vec<Value> = res.json().await?;
    assert_eq!(all.len(), 6);

    // Comparison now returns one group per seeded cuisine.
    let res = client()
        .get(format!("{}/api/price-comparison", app.base_url))
        .send()
        .await?;
    let stats: Value = res.json().await?;
    let seafood = &stats["해산물"];
    assert_eq!(seafood["restaurant_count"], 1);
    assert_eq!(seafood["average_price"], 25000);
    assert_eq!(seafood["cheapest"], seafood["most_expensive"]);

    // Narrowed to one cuisine.
    let res = client()
        .get(format!("{}/api/price-comparison?cuisine_type=고기구이", app.base_url))
        .send()
        .await?;
    let stats: Value = res.json().await?;
    assert_eq!(stats["고기구이"]["average_price"], 45000);
    assert!(stats.get("해산물").is_none());
    Ok(())
}
