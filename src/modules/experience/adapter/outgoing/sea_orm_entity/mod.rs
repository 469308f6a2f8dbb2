pub mod achievements;
pub mod experience_projects;
pub mod experience_technologies;
pub mod experiences;
pub mod responsibilities;
