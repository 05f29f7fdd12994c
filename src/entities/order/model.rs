//! Order entity model

use crate::core::resource::Resource;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Lifecycle status of an order
///
/// A delivered order is immutable; an order can only be deleted while
/// pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// All statuses, in lifecycle order
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Parse from the wire form; `None` for anything outside the four values
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.as_str() == s)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order: a dish snapshot plus a quantity
///
/// The snapshot fields are carried as-is from the request (no referential
/// check against the dish store); only `quantity` is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub quantity: i64,
    #[serde(flatten)]
    pub dish: Map<String, Value>,
}

/// A delivery order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(rename = "deliverTo")]
    pub deliver_to: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderItem>,
}

impl Resource for Order {
    fn resource_label() -> &'static str {
        "Order"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied order fields, deserialized from the `data` object after
/// the guard chain has passed
///
/// A body-supplied `id` is handled by the id-match guard on the raw data and
/// ignored here.
#[derive(Debug, Deserialize)]
pub struct OrderPayload {
    #[serde(rename = "deliverTo")]
    pub deliver_to: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderItem>,
}

impl OrderPayload {
    /// Build a new order with a generated identifier
    pub fn into_order(self, id: String) -> Order {
        Order {
            id,
            deliver_to: self.deliver_to,
            mobile_number: self.mobile_number,
            status: self.status,
            dishes: self.dishes,
        }
    }
}
