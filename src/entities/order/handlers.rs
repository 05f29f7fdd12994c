//! Order HTTP handlers and guards
//!
//! The guard chain mirrors the dish pipeline plus the order-only guards:
//! dish-array shape, per-item quantity, status, delivered-immutability, and
//! pending-only delete. First failure wins; a rejected request never touches
//! the store.

use super::model::{Order, OrderPayload, OrderStatus};
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
const REQUIRED_FIELDS: [&str; 3] = ["deliverTo", "mobileNumber", "dishes"];

// =============================================================================
// Guards
// =============================================================================

/// Existence guard: look up the order named by the route identifier
async fn find_order(state: &AppState, order_id: &str) -> ApiResult<Order> {
    state
        .orders
        .find(order_id)
        .await?
        .ok_or_else(|| ApiError::not_found(Order::resource_label(), order_id))
}

/// Field-presence guards for the order payload
fn require_order_fields(data: &Map<String, Value>) -> ApiResult<()> {
    for field in REQUIRED_FIELDS {
        require_field(data, Order::resource_label(), field)?;
    }
    Ok(())
}

/// Shape guard: `dishes` is an array with at least one element
fn validate_dishes_shape(data: &Map<String, Value>) -> ApiResult<()> {
    match data.get("dishes").and_then(Value::as_array) {
        Some(dishes) if !dishes.is_empty() => Ok(()),
        _ => Err(ApiError::invalid_input("Order must include at least one dish")),
    }
}

/// Quantity guard: every item carries an integer quantity > 0
///
/// Single pass; the first failing index is reported and the scan stops
/// there.
fn validate_dish_quantities(data: &Map<String, Value>) -> ApiResult<()> {
    let Some(dishes) = data.get("dishes").and_then(Value::as_array) else {
        return Ok(());
    };

    for (index, item) in dishes.iter().enumerate() {
        if positive_integer(item.get("quantity")).is_none() {
            return Err(ApiError::invalid_input(format!(
                "dish {} must have a quantity that is an integer greater than 0",
                index
            )));
        }
    }

    Ok(())
}

/// Status guard: exactly one of the four lifecycle values
fn validate_status(data: &Map<String, Value>) -> ApiResult<OrderStatus> {
    data.get("status")
        .and_then(Value::as_str)
        .and_then(OrderStatus::parse)
        .ok_or_else(|| {
            ApiError::invalid_input(
                "Order must have a status of pending, preparing, out-for-delivery, delivered",
            )
        })
}

/// Delivered-immutability guard
fn reject_delivered(order: &Order) -> ApiResult<()> {
    if order.status == OrderStatus::Delivered {
        Err(ApiError::invalid_input("A delivered order cannot be changed"))
    } else {
        Ok(())
    }
}

/// Pending-only-delete guard
fn require_pending(order: &Order) -> ApiResult<()> {
    if order.status == OrderStatus::Pending {
        Ok(())
    } else {
        Err(ApiError::invalid_input(
            "An order cannot be deleted unless it is pending",
        ))
    }
}

/// Deserialize the validated `data` object into the typed payload
fn parse_payload(data: Map<String, Value>) -> ApiResult<OrderPayload> {
    Ok(serde_json::from_value(Value::Object(data))?)
}

// =============================================================================
// Handlers
// =============================================================================

pub async fn list_orders(
    State(state): State<AppState>,
) -> ApiResult<Json<DataEnvelope<Vec<Order>>>> {
    let orders = state.orders.list().await?;
    Ok(Json(DataEnvelope::new(orders)))
}

pub async fn read_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> ApiResult<Json<DataEnvelope<Order>>> {
    let order = find_order(&state, &order_id).await?;
    Ok(Json(DataEnvelope::new(order)))
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<DataEnvelope<Order>>)> {
    let data = data_object(&body);
    require_order_fields(&data)?;
    validate_dishes_shape(&data)?;
    validate_dish_quantities(&data)?;
    // The caller supplies the status; it is never defaulted.
    validate_status(&data)?;

    let payload = parse_payload(data)?;
    let order = state
        .orders
        .insert(payload.into_order(id::next_id()))
        .await?;

    tracing::debug!(order_id = %order.id, status = %order.status, "created order");
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(order))))
}

pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<DataEnvelope<Order>>> {
    let existing = find_order(&state, &order_id).await?;
    reject_delivered(&existing)?;

    let data = data_object(&body);
    validate_status(&data)?;
    require_order_fields(&data)?;
    validate_dishes_shape(&data)?;
    validate_dish_quantities(&data)?;
    id_matches(&data, Order::resource_label(), &order_id)?;

    // Every mutable field is overwritten; the identifier always stays the
    // route's.
    let payload = parse_payload(data)?;
    let updated = state
        .orders
        .replace(&existing.id, payload.into_order(existing.id.clone()))
        .await?
        .ok_or_else(|| ApiError::not_found(Order::resource_label(), &order_id))?;

    tracing::debug!(order_id = %updated.id, status = %updated.status, "updated order");
    Ok(Json(DataEnvelope::new(updated)))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> ApiResult<StatusCode> {
    let existing = find_order(&state, &order_id).await?;
    require_pending(&existing)?;

    state.orders.remove(&existing.id).await?;

    tracing::debug!(order_id = %order_id, "deleted order");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn order_with_status(status: OrderStatus) -> Order {
        Order {
            id: "o1".to_string(),
            deliver_to: "1 Main St".to_string(),
            mobile_number: "555-0100".to_string(),
            status,
            dishes: Vec::new(),
        }
    }

    #[test]
    fn test_dishes_shape_empty_array_fails() {
        let data = data(json!({ "dishes": [] }));
        let err = validate_dishes_shape(&data).unwrap_err();
        assert_eq!(err.to_string(), "Order must include at least one dish");
    }

    #[test]
    fn test_dishes_shape_non_array_fails() {
        let data = data(json!({ "dishes": "one" }));
        assert!(validate_dishes_shape(&data).is_err());
    }

    #[test]
    fn test_quantities_first_failing_index_reported() {
        let data = data(json!({ "dishes": [
            { "quantity": 2 },
            { "quantity": 0 },
            { "quantity": -1 }
        ] }));
        let err = validate_dish_quantities(&data).unwrap_err();
        assert_eq!(
            err.to_string(),
            "dish 1 must have a quantity that is an integer greater than 0"
        );
    }

    #[test]
    fn test_quantities_missing_quantity_fails() {
        let data = data(json!({ "dishes": [{ "name": "Pad Thai" }] }));
        let err = validate_dish_quantities(&data).unwrap_err();
        assert!(err.to_string().starts_with("dish 0"));
    }

    #[test]
    fn test_quantities_all_valid_pass() {
        let data = data(json!({ "dishes": [{ "quantity": 1 }, { "quantity": 3 }] }));
        assert!(validate_dish_quantities(&data).is_ok());
    }

    #[test]
    fn test_status_outside_set_fails() {
        let data = data(json!({ "status": "shipped" }));
        let err = validate_status(&data).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order must have a status of pending, preparing, out-for-delivery, delivered"
        );
    }

    #[test]
    fn test_status_kebab_value_parses() {
        let data = data(json!({ "status": "out-for-delivery" }));
        assert_eq!(
            validate_status(&data).unwrap(),
            OrderStatus::OutForDelivery
        );
    }

    #[test]
    fn test_reject_delivered() {
        let err = reject_delivered(&order_with_status(OrderStatus::Delivered)).unwrap_err();
        assert_eq!(err.to_string(), "A delivered order cannot be changed");
        assert!(reject_delivered(&order_with_status(OrderStatus::Preparing)).is_ok());
    }

    #[test]
    fn test_require_pending() {
        let err = require_pending(&order_with_status(OrderStatus::Preparing)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "An order cannot be deleted unless it is pending"
        );
        assert!(require_pending(&order_with_status(OrderStatus::Pending)).is_ok());
    }
}
