//! Resource entities exposed by the API

pub mod dish;
pub mod order;
