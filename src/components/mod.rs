pub mod navbar;
pub mod request_log;
pub mod route_row;
pub mod toast;
