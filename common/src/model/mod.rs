pub mod page;
pub mod upload;
