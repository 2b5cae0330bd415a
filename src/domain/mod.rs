//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `catalog` - Tracks, categories, and the question catalog
//! - `profiling` - Profiling session aggregate (the response store)
//! - `scoring` - Pure scoring, ranking, and insight services
//! - `narrative` - Persona narratives and the deterministic fallback

pub mod catalog;
pub mod foundation;
pub mod narrative;
pub mod profiling;
pub mod scoring;
