pub mod about;
pub mod auth;
pub mod contact;
pub mod experience;
pub mod project;
pub mod skill;
