//! Storage abstractions for service layer
//!
//! Reusable in-memory keyed stores guarded by an async reader-writer lock.

pub mod memory_map_store;
