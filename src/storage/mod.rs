//! Storage backends

mod in_memory;

pub use in_memory::InMemoryStore;
