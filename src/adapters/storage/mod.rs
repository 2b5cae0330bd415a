//! Storage Adapters
//!
//! Implementations of the ProfilingSessionRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionRepository** - Stores sessions in memory (CLI/testing)

mod in_memory_session_repository;

pub use in_memory_session_repository::InMemorySessionRepository;
