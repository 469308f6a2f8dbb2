pub mod sea_orm_entity;
pub mod skill_repository_memory;
pub mod skill_repository_postgres;

pub use skill_repository_memory::SkillRepositoryMemory;
pub use skill_repository_postgres::SkillRepositoryPostgres;
