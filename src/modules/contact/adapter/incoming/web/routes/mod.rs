pub mod contact_info;
pub mod messages;

pub use contact_info::{
    create_contact_info_handler, get_contact_info_handler, update_contact_info_handler,
};
pub use messages::{
    delete_message_handler, get_messages_handler, mark_message_read_handler,
    submit_message_handler,
};
