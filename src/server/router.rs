//! Router construction
//!
//! Two path families, each with a 405 fallback so any unmapped verb yields
//! the error envelope rather than an empty response:
//! - `GET/POST /dishes`, `GET/PUT /dishes/{dishId}`
//! - `GET/POST /orders`, `GET/PUT/DELETE /orders/{orderId}`

use super::AppState;
use crate::core::error::ApiError;
use crate::entities::dish::handlers::{create_dish, list_dishes, read_dish, update_dish};
use crate::entities::order::handlers::{
    create_order, delete_order, list_orders, read_order, update_order,
};
use axum::http::{Method, Uri};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/dishes",
            get(list_dishes)
                .post(create_dish)
                .fallback(method_not_allowed),
        )
        .route(
            "/dishes/{dish_id}",
            get(read_dish)
                .put(update_dish)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders",
            get(list_orders)
                .post(create_order)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders/{order_id}",
            get(read_order)
                .put(update_order)
                .delete(delete_order)
                .fallback(method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "mealdrop"
    }))
}

/// Fallback for verbs not mapped on a matched path family
async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
