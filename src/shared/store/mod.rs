pub mod error;
pub mod memory;
pub mod patch;
pub mod postgres;

pub use error::RepositoryError;
pub use memory::{Guarded, Owned, Table};
pub use patch::PatchField;
