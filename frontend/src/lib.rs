//! Browser side of the ingestion pages.
//!
//! Both pages are rendered by the server. This crate attaches to their
//! elements once the document is parsed: the ingesting page gets animated
//! progress bars and status polling, the upload form gets its PDF/images
//! field toggles. Each controller stays idle on pages it does not recognise.

mod app;
pub mod components;
pub mod config;

pub use app::start;
