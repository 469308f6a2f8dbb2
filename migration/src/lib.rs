pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users_table;
mod m20250601_000010_create_about_tables;
mod m20250601_000020_create_experience_tables;
mod m20250601_000030_create_project_tables;
mod m20250601_000040_create_skills_table;
mod m20250601_000050_create_contact_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users_table::Migration),
            Box::new(m20250601_000010_create_about_tables::Migration),
            Box::new(m20250601_000020_create_experience_tables::Migration),
            Box::new(m20250601_000030_create_project_tables::Migration),
            Box::new(m20250601_000040_create_skills_table::Migration),
            Box::new(m20250601_000050_create_contact_tables::Migration),
        ]
    }
}
