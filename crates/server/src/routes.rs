use std::{sync::Arc, time::Instant};

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, patch, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::{
    metrics::{encode_metrics, HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION},
    types::Health,
};
use service::cafe::{CafeService, SeaOrmCafeRepository};

use crate::openapi::ApiDoc;

pub mod cafes;

#[derive(Clone)]
pub struct ServerState {
    pub cafes: Arc<CafeService<SeaOrmCafeRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, api_key: impl Into<String>) -> Self {
        let repo = Arc::new(SeaOrmCafeRepository::new(db));
        Self { cafes: Arc::new(CafeService::new(repo, api_key)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn metrics() -> (StatusCode, String) {
    encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Record request count and latency per method, matched route and status.
async fn track_metrics(req: Request, next: Next) -> Response {
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = req.method().to_string();
    let start = Instant::now();

    let res = next.run(req).await;

    HTTP_REQUEST_DURATION
        .with_label_values(&[method.as_str(), path.as_str()])
        .observe(start.elapsed().as_secs_f64());
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method.as_str(), path.as_str(), res.status().as_str()])
        .inc();
    res
}

/// Build the full application router: cafe operations plus health, metrics and API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let cafe_routes = Router::new()
        .route("/", get(cafes::list_cafes))
        .route("/random", get(cafes::random_cafe))
        .route("/all", get(cafes::all_cafes))
        .route("/search", get(cafes::search_cafes))
        .route("/add", post(cafes::add_cafe))
        .route("/update-price/:cafe_id", patch(cafes::update_price))
        .route("/report-closed/:cafe_id", delete(cafes::report_closed))
        .with_state(state);

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    cafe_routes
        .merge(ops)
        .layer(middleware::from_fn(track_metrics))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
