pub mod project_features;
pub mod project_metrics;
pub mod project_technologies;
pub mod projects;
