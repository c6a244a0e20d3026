//! Storage layer
//!
//! Uses DashMap (in-memory) instead of a database. State lives for the
//! process lifetime and is never persisted.

pub mod memory;

pub use memory::{MemoryStore, PostRecord, UserRecord};
