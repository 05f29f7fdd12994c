//! Dish HTTP handlers and guards
//!
//! Each mutating handler runs its guard chain with `?` before touching the
//! store, so the first failing guard short-circuits the request and the
//! collection is left unchanged.

use super::model::{Dish, DishPayload};
use crate::core::envelope::{DataEnvelope, data_object};
use crate::core::error::{ApiError, ApiResult};
use crate::core::id;
use crate::core::resource::Resource;
use crate::core::validate::{id_matches, positive_integer, require_field};
use crate::server::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Map, Value};

/// Required fields in the `data` object for create and update
const REQUIRED_FIELDS: [&str; 4] = ["name", "description", "price", "image_url"];

// =============================================================================
// Guards
// =============================================================================

/// Existence guard: look up the dish named by the route identifier
async fn find_dish(state: &AppState, dish_id: &str) -> ApiResult<Dish> {
    state
        .dishes
        .find(dish_id)
        .await?
        .ok_or_else(|| ApiError::not_found(Dish::resource_label(), dish_id))
}

/// Field-presence guards for the dish payload
fn require_dish_fields(data: &Map<String, Value>) -> ApiResult<()> {
    for field in REQUIRED_FIELDS {
        require_field(data, Dish::resource_label(), field)?;
    }
    Ok(())
}

/// Price guard: integer, strictly greater than zero
fn validate_price(data: &Map<String, Value>) -> ApiResult<()> {
    match positive_integer(data.get("price")) {
        Some(_) => Ok(()),
        None => Err(ApiError::invalid_input(
            "Dish must have a price that is an integer greater than 0",
        )),
    }
}

/// Deserialize the validated `data` object into the typed payload
fn parse_payload(data: Map<String, Value>) -> ApiResult<DishPayload> {
    Ok(serde_json::from_value(Value::Object(data))?)
}

// =============================================================================
// Handlers
// =============================================================================

pub async fn list_dishes(
    State(state): State<AppState>,
) -> ApiResult<Json<DataEnvelope<Vec<Dish>>>> {
    let dishes = state.dishes.list().await?;
    Ok(Json(DataEnvelope::new(dishes)))
}

pub async fn read_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> ApiResult<Json<DataEnvelope<Dish>>> {
    let dish = find_dish(&state, &dish_id).await?;
    Ok(Json(DataEnvelope::new(dish)))
}

pub async fn create_dish(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<DataEnvelope<Dish>>)> {
    let data = data_object(&body);
    require_dish_fields(&data)?;
    validate_price(&data)?;

    let payload = parse_payload(data)?;
    let dish = state.dishes.insert(payload.into_dish(id::next_id())).await?;

    tracing::debug!(dish_id = %dish.id, "created dish");
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(dish))))
}

pub async fn update_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<DataEnvelope<Dish>>> {
    let existing = find_dish(&state, &dish_id).await?;

    let data = data_object(&body);
    require_dish_fields(&data)?;
    validate_price(&data)?;
    id_matches(&data, Dish::resource_label(), &dish_id)?;

    // Every mutable field is overwritten; the identifier always stays the
    // route's.
    let payload = parse_payload(data)?;
    let updated = state
        .dishes
        .replace(&existing.id, payload.into_dish(existing.id.clone()))
        .await?
        .ok_or_else(|| ApiError::not_found(Dish::resource_label(), &dish_id))?;

    tracing::debug!(dish_id = %updated.id, "updated dish");
    Ok(Json(DataEnvelope::new(updated)))
}
