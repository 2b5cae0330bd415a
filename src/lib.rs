//! Cyber Profiler - Scoring and track-recommendation engine
//!
//! This crate scores a learner's answers to a categorized profiling
//! questionnaire, ranks cybersecurity career tracks with confidence tiers and
//! reasoning, synthesizes learning-style insights, and produces a "Future-You"
//! persona narrative with a deterministic fallback.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
