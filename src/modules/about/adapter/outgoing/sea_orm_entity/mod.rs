pub mod about_info;
pub mod highlights;
