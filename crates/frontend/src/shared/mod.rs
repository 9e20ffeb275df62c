pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod file_select;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod modal;
