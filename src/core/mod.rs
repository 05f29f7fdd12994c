//! Core building blocks: errors, envelopes, identifiers, validation guards,
//! and the store abstraction

pub mod envelope;
pub mod error;
pub mod id;
pub mod resource;
pub mod store;
pub mod validate;

pub use envelope::{DataEnvelope, data_object};
pub use error::{ApiError, ApiResult, ErrorBody};
pub use id::next_id;
pub use resource::Resource;
pub use store::ResourceStore;
