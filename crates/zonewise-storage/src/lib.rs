//! Zonewise storage crate - durable chat-history persistence.
//!
//! Provides the `HistoryRepository` seam the engine writes through, a
//! JSON-file implementation that overwrites the whole store after every
//! mutating turn, and an in-memory implementation for tests.

pub mod repository;

pub use repository::{HistoryRepository, JsonHistoryRepository, MemoryRepository};
