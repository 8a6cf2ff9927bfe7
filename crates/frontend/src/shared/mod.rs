pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
