pub mod about_repository_memory;
pub mod about_repository_postgres;
pub mod sea_orm_entity;

pub use about_repository_memory::AboutRepositoryMemory;
pub use about_repository_postgres::AboutRepositoryPostgres;
