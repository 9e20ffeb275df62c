pub mod api_error;
pub mod file_info;
pub mod serde_helpers;
