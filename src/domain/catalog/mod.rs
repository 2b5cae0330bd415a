//! Catalog module - Tracks, categories, and questions.
//!
//! The catalog is read-only reference data. It is loaded once (built-in or
//! from YAML) and shared by every profiling session.

mod builtin;
mod category;
mod question;
mod question_catalog;
mod track;

pub use category::Category;
pub use question::{OptionCode, Question, QuestionId, QuestionOption};
pub use question_catalog::{CatalogError, QuestionCatalog};
pub use track::{keys, Track, TrackKey};
