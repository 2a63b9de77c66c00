//! Service layer between the HTTP handlers and the key-value backend.
//! - Owns the storage adapter contract and its file-backed implementation.
//! - Keeps namespace handling out of the handlers.
//! - Provides clear error types for storage failures.

pub mod errors;
pub mod storage;
pub mod trees;
