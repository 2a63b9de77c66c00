//! Storage adapter for the tree registry.
//!
//! The backend is modeled as a key-value store addressed by a composite
//! `(namespace, id)` key. The file-backed implementation here is the only
//! one shipped; the trait exists so a hosted store can be dropped in
//! without touching the handlers.

pub mod json_kv_store;
pub mod kv;

pub use json_kv_store::JsonKvStore;
pub use kv::KvStore;
