pub mod ensure_admin;
pub mod login_user;
