pub mod api;
pub mod notification;
