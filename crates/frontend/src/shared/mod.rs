pub mod alert;
pub mod api_utils;
pub mod icons;
pub mod modal;
pub mod modal_info;
pub mod number_format;
