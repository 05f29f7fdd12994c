//! Base trait for stored records

/// A record that can live in a [`ResourceStore`](crate::core::store::ResourceStore)
///
/// Identifiers are opaque strings assigned at creation time (see
/// [`next_id`](crate::core::id::next_id)). The label is the human-facing
/// resource name used in error messages ("Dish", "Order").
pub trait Resource: Clone + Send + Sync + 'static {
    /// Human-facing resource label
    fn resource_label() -> &'static str;

    /// The record's unique identifier
    fn id(&self) -> &str;
}
