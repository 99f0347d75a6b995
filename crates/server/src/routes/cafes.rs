use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use common::types::Ack;
use models::cafe::{Model, NewCafe};
use service::pagination::Page;

use crate::{
    errors::JsonApiError,
    extract::{ApiJson, ApiPath, ApiQuery},
    routes::ServerState,
};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// rows to skip
    #[serde(default)]
    pub skip: u64,
    /// maximum rows returned
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 { Page::default().limit }

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// exact location; surrounding quotes are ignored
    pub loc: String,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PriceQuery { pub new_price: String }

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApiKeyQuery { pub api_key: String }

#[utoipa::path(
    get, path = "/", tag = "cafes",
    params(ListQuery),
    responses((status = 200, description = "Page of cafes", body = [crate::openapi::CafeDoc]))
)]
pub async fn list_cafes(State(state): State<ServerState>, ApiQuery(q): ApiQuery<ListQuery>) -> Result<Json<Vec<Model>>, JsonApiError> {
    let list = state.cafes.list(Page::new(q.skip, q.limit)).await?;
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/random", tag = "cafes",
    responses(
        (status = 200, description = "Random cafe", body = crate::openapi::CafeDoc),
        (status = 404, description = "No cafes available", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn random_cafe(State(state): State<ServerState>) -> Result<Json<Model>, JsonApiError> {
    Ok(Json(state.cafes.random().await?))
}

#[utoipa::path(
    get, path = "/all", tag = "cafes",
    responses((status = 200, description = "Every cafe", body = [crate::openapi::CafeDoc]))
)]
pub async fn all_cafes(State(state): State<ServerState>) -> Result<Json<Vec<Model>>, JsonApiError> {
    let list = state.cafes.all().await?;
    info!(count = list.len(), "list all cafes");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/search", tag = "cafes",
    params(SearchQuery),
    responses(
        (status = 200, description = "Cafes at the location", body = [crate::openapi::CafeDoc]),
        (status = 404, description = "No cafe at the location", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn search_cafes(State(state): State<ServerState>, ApiQuery(q): ApiQuery<SearchQuery>) -> Result<Json<Vec<Model>>, JsonApiError> {
    Ok(Json(state.cafes.search(&q.loc).await?))
}

#[utoipa::path(
    post, path = "/add", tag = "cafes",
    request_body = crate::openapi::NewCafeDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CafeDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Duplicate name", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add_cafe(State(state): State<ServerState>, ApiJson(input): ApiJson<NewCafe>) -> Result<Json<Model>, JsonApiError> {
    let created = state.cafes.create(&input).await?;
    Ok(Json(created))
}

#[utoipa::path(
    patch, path = "/update-price/{cafe_id}", tag = "cafes",
    params(("cafe_id" = i64, Path, description = "Cafe ID"), PriceQuery),
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CafeDoc),
        (status = 404, description = "Cafe not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_price(
    State(state): State<ServerState>,
    ApiPath(cafe_id): ApiPath<i64>,
    ApiQuery(q): ApiQuery<PriceQuery>,
) -> Result<Json<Model>, JsonApiError> {
    Ok(Json(state.cafes.update_price(cafe_id, &q.new_price).await?))
}

#[utoipa::path(
    delete, path = "/report-closed/{cafe_id}", tag = "cafes",
    params(("cafe_id" = i64, Path, description = "Cafe ID"), ApiKeyQuery),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::AckDoc),
        (status = 403, description = "Invalid API key", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Cafe not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn report_closed(
    State(state): State<ServerState>,
    ApiPath(cafe_id): ApiPath<i64>,
    ApiQuery(q): ApiQuery<ApiKeyQuery>,
) -> Result<Json<Ack>, JsonApiError> {
    let msg = state.cafes.report_closed(cafe_id, &q.api_key).await?;
    Ok(Json(Ack::success(msg)))
}
