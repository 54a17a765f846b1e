//! careerguide-core: catalog, interest scoring, and personalization.
//!
//! This crate defines the data model, the built-in reference catalog, the
//! quiz scoring engine, and the pure helpers that every screen of the
//! careerguide tool builds on. Nothing in here performs I/O beyond parsing
//! catalog files.

pub mod app;
pub mod catalog;
pub mod eligibility;
pub mod engine;
pub mod error;
pub mod guidance;
pub mod likes;
pub mod model;
pub mod personalize;
pub mod search;
