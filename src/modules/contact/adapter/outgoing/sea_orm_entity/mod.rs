pub mod contact_info;
pub mod contact_messages;
