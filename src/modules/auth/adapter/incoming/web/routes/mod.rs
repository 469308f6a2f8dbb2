pub mod current_admin;
pub mod login_user;

pub use current_admin::{current_admin_handler, CurrentAdminResponse};
pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse};
