pub mod dom;
pub mod ingesting;
pub mod upload;
