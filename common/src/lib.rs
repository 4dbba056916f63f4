//! Shared, target-independent logic for the ingestion pages.
//!
//! Everything here is plain Rust so it can be unit-tested natively; the
//! `frontend` crate only translates DOM state in and [`ingest`] outcomes out.

pub mod config;
pub mod error;
pub mod ingest;
pub mod jobs;
pub mod model;
pub mod progress;
pub mod requests;
