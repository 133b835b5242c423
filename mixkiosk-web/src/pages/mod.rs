pub mod admin;
pub mod kiosk;
pub mod not_found;
