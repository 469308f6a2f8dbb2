pub mod about_info;
pub mod highlights;

pub use about_info::{create_about_info_handler, get_about_info_handler, update_about_info_handler};
pub use highlights::{
    create_highlight_handler, delete_highlight_handler, get_highlights_handler,
    update_highlight_handler,
};
