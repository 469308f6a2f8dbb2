pub mod create_skill;
pub mod delete_skill;
pub mod get_skills;
pub mod update_skill;

pub use create_skill::create_skill_handler;
pub use delete_skill::delete_skill_handler;
pub use get_skills::{
    get_skill_categories_handler, get_skill_handler, get_skills_grouped_handler,
    get_skills_handler,
};
pub use update_skill::update_skill_handler;
