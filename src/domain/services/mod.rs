pub mod avatar;
pub mod password_service;
