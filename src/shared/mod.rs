pub mod api;
pub mod content;
pub mod error;
pub mod store;
pub mod validation;
