//! Profiling module - The response store.
//!
//! A `ProfilingSession` collects a learner's answers and reflection, validates
//! them against the catalog, and is locked once completed.

mod errors;
mod response;
mod session;

pub use errors::ProfilingError;
pub use response::{Reflection, Response};
pub use session::{CategoryProgress, Progress, ProfilingSession, SessionStatus};
