//! # Mealdrop
//!
//! A small food-delivery REST API: dishes and orders over an in-memory
//! store, with request validation run as a chain of guards before each
//! mutating handler.
//!
//! ## Conventions
//!
//! - Request bodies nest the payload under `data`: `{ "data": { ... } }`
//! - Success responses wrap the payload the same way: `{ "data": <payload> }`
//! - Failures return `{ "error": <message> }` with 400 (validation),
//!   404 (unknown identifier), or 405 (unmapped verb)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mealdrop::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ServerConfig::default();
//!     let state = AppState::in_memory();
//!     mealdrop::server::serve(&config, state).await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, ApiResult, DataEnvelope, ErrorBody, Resource, ResourceStore,
    };

    // === Entities ===
    pub use crate::entities::dish::Dish;
    pub use crate::entities::order::{Order, OrderItem, OrderStatus};

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{AppState, build_router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
